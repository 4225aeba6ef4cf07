use super::types::{ADVERSE_EVENT_COLUMNS, AdverseEvent, TARGET_COLUMNS, TargetBinding};

use anyhow::{Context, Result, bail};
use csv::ReaderBuilder;
use serde::de::DeserializeOwned;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

/// Loads the target-binding table, skipping `skip_rows` lines before the header row.
pub fn load_target_bindings(path: &Path, skip_rows: usize) -> Result<Vec<TargetBinding>> {
    let file = File::open(path)
        .with_context(|| format!("failed to open target table {}", path.display()))?;
    let records = read_target_bindings(file, skip_rows)
        .with_context(|| format!("failed to load target table {}", path.display()))?;

    tracing::info!(
        "Loaded {} target binding records from {}",
        records.len(),
        path.display()
    );
    Ok(records)
}

/// Loads the adverse-event (TWOSIDES) table.
pub fn load_adverse_events(path: &Path) -> Result<Vec<AdverseEvent>> {
    let file = File::open(path)
        .with_context(|| format!("failed to open adverse-event table {}", path.display()))?;
    let records = read_adverse_events(file)
        .with_context(|| format!("failed to load adverse-event table {}", path.display()))?;

    tracing::info!(
        "Loaded {} adverse event records from {}",
        records.len(),
        path.display()
    );
    Ok(records)
}

pub fn read_target_bindings<R: Read>(reader: R, skip_rows: usize) -> Result<Vec<TargetBinding>> {
    let mut buffered = BufReader::new(reader);
    let mut discarded = String::new();
    for _ in 0..skip_rows {
        discarded.clear();
        if buffered.read_line(&mut discarded)? == 0 {
            break;
        }
    }

    read_records(buffered, &TARGET_COLUMNS)
}

pub fn read_adverse_events<R: Read>(reader: R) -> Result<Vec<AdverseEvent>> {
    read_records(reader, &ADVERSE_EVENT_COLUMNS)
}

fn read_records<R: Read, T: DeserializeOwned>(reader: R, required: &[&str]) -> Result<Vec<T>> {
    let mut csv_reader = ReaderBuilder::new().from_reader(reader);

    let headers = csv_reader.headers().context("failed to read header row")?;
    for column in required {
        if !headers.iter().any(|header| header == *column) {
            bail!("missing required column `{}`", column);
        }
    }

    let mut records = Vec::new();
    for (row, result) in csv_reader.deserialize::<T>().enumerate() {
        let record = result.with_context(|| format!("invalid record at data row {}", row + 1))?;
        records.push(record);
    }

    Ok(records)
}
