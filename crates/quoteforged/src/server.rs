//! HTTP server for quoteforged.

use std::sync::Arc;
use std::time::Instant;

use anyhow::Result;
use axum::extract::DefaultBodyLimit;
use axum::Router;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::ServerConfig;
use crate::routes;

/// Application state shared across handlers.
pub struct AppState {
    pub config: ServerConfig,
    pub start_time: Instant,
}

impl AppState {
    pub fn new(config: ServerConfig) -> Self {
        Self {
            config,
            start_time: Instant::now(),
        }
    }
}

/// Run the HTTP server until the process is stopped.
pub async fn run(config: ServerConfig) -> Result<()> {
    let addr = config.listen_addr.clone();
    let max_upload = config.max_upload_bytes;
    let state = Arc::new(AppState::new(config));

    let app = Router::new()
        .merge(routes::generate_routes())
        .merge(routes::health_routes())
        .with_state(state)
        .layer(DefaultBodyLimit::max(max_upload))
        .layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("  Listening on http://{}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
