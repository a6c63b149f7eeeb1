use clap::Parser;
use receipt_processor::adapters::http;
use receipt_processor::utils::logger;
use receipt_processor::{AppState, CliConfig, MemoryStore, ReceiptProcessor};
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    let config = match cli.load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    logger::init_logger(config.log_format, config.verbose);

    tracing::info!("Starting receipt-processor v{}", env!("CARGO_PKG_VERSION"));
    if config.verbose {
        tracing::debug!("Server config: {:?}", config);
    }

    let store = Arc::new(MemoryStore::new());
    let state = AppState::new(ReceiptProcessor::new(store));

    http::serve(&config, state).await?;

    Ok(())
}
