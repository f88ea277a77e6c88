//! QuoteForge daemon - accepts workbook uploads and returns rendered
//! plan comparison documents.

mod config;
mod routes;
mod server;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    info!("quoteforged v{} starting", env!("CARGO_PKG_VERSION"));

    let config = config::ServerConfig::load();
    info!(
        "Serving {} plans, logos from {}",
        quoteforge_common::registry::all_plans().len(),
        config.logo_dir
    );

    server::run(config).await
}
