//! Service Configuration
//!
//! Command-line flags for the lookup service. Every flag has a default, so the
//! binary starts with no arguments when run from the repository root.

use anyhow::{Context, Result, anyhow, bail};
use std::net::SocketAddr;
use std::path::PathBuf;

pub const DEFAULT_BIND: &str = "127.0.0.1:8000";
pub const DEFAULT_TARGETS_PATH: &str = "data/interactions.csv";
pub const DEFAULT_TWOSIDES_PATH: &str = "data/TWOSIDES_filtered.csv";
/// The target export starts with a title line above its header row.
pub const DEFAULT_TARGETS_SKIP_ROWS: usize = 1;

pub const USAGE: &str = "\
Usage: ddi-lookup [--bind <addr:port>] [--targets <path>] [--twosides <path>] [--targets-skip-rows <n>]

  --bind <addr:port>         HTTP listen address (default 127.0.0.1:8000)
  --targets <path>           drug-target binding CSV (default data/interactions.csv)
  --twosides <path>          adverse-event CSV (default data/TWOSIDES_filtered.csv)
  --targets-skip-rows <n>    lines to skip before the target header row (default 1)
  --help                     print this message";

#[derive(Debug, Clone, PartialEq)]
pub struct ServiceConfig {
    pub bind_addr: SocketAddr,
    pub targets_path: PathBuf,
    pub twosides_path: PathBuf,
    pub targets_skip_rows: usize,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 8000)),
            targets_path: PathBuf::from(DEFAULT_TARGETS_PATH),
            twosides_path: PathBuf::from(DEFAULT_TWOSIDES_PATH),
            targets_skip_rows: DEFAULT_TARGETS_SKIP_ROWS,
        }
    }
}

/// What the binary was asked to do.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Serve(ServiceConfig),
    Help,
}

impl Command {
    /// Parses process arguments; the first item is the program name and is skipped.
    pub fn from_args<I, S>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let args: Vec<String> = args.into_iter().map(Into::into).collect();
        let mut config = ServiceConfig::default();

        let mut i = 1;
        while i < args.len() {
            let flag = args[i].as_str();
            if flag == "--help" || flag == "-h" {
                return Ok(Command::Help);
            }

            let target = match flag {
                "--bind" | "--targets" | "--twosides" | "--targets-skip-rows" => flag,
                _ => bail!("unknown argument `{}`\n\n{}", flag, USAGE),
            };
            let value = args
                .get(i + 1)
                .ok_or_else(|| anyhow!("{} requires a value", target))?;

            match target {
                "--bind" => {
                    config.bind_addr = value
                        .parse()
                        .with_context(|| format!("invalid --bind address `{}`", value))?;
                }
                "--targets" => config.targets_path = PathBuf::from(value),
                "--twosides" => config.twosides_path = PathBuf::from(value),
                _ => {
                    config.targets_skip_rows = value
                        .parse()
                        .with_context(|| format!("invalid --targets-skip-rows `{}`", value))?;
                }
            }
            i += 2;
        }

        Ok(Command::Serve(config))
    }
}
