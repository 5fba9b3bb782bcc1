//! # Cadenza Server
//!
//! Main entry point for the Cadenza music catalog API.

use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod startup;

#[tokio::main]
async fn main() {
    init_logging();

    info!("Starting Cadenza server...");
    info!("Version: {}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = startup::run().await {
        error!("Application error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}
