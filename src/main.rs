use ddi_lookup::config::{Command, USAGE};
use ddi_lookup::ingestion::loader::{load_adverse_events, load_target_bindings};
use ddi_lookup::query::handlers::router;
use ddi_lookup::query::resolver::DrugIndexes;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        // .with_max_level(tracing::Level::DEBUG)
        .with_max_level(tracing::Level::INFO)
        .init();

    let config = match Command::from_args(std::env::args())? {
        Command::Serve(config) => config,
        Command::Help => {
            println!("{}", USAGE);
            return Ok(());
        }
    };

    // 1. Source tables (fatal on any error):
    let bindings = load_target_bindings(&config.targets_path, config.targets_skip_rows)?;
    let events = load_adverse_events(&config.twosides_path)?;

    // 2. Indexes, immutable from here on:
    let indexes = Arc::new(DrugIndexes::build(&bindings, &events));
    drop(bindings);
    drop(events);

    // 3. HTTP Router:
    let app = router(indexes);

    // 4. Start HTTP server:
    tracing::info!("HTTP server listening on {}", config.bind_addr);
    tracing::info!("Press Ctrl+C to shutdown");

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
