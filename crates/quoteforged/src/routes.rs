//! API routes for quoteforged.

use std::path::PathBuf;
use std::sync::Arc;

use axum::extract::{Multipart, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Serialize;
use tracing::{error, info, warn};
use uuid::Uuid;

use quoteforge_common::registry;

use crate::server::AppState;

type AppStateArc = Arc<AppState>;

const EXCEL_EXTENSIONS: &[&str] = &[".xlsx", ".xlsm", ".xls"];

// ============================================================================
// Generate Routes
// ============================================================================

pub fn generate_routes() -> Router<AppStateArc> {
    Router::new().route("/v1/generate", post(generate_report))
}

/// Accept a workbook upload, run the composition engine, stream the
/// resulting document back, and delete the temp artifact.
async fn generate_report(
    State(state): State<AppStateArc>,
    mut multipart: Multipart,
) -> Result<Response, (StatusCode, String)> {
    let mut upload: Option<(String, Vec<u8>)> = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| (StatusCode::BAD_REQUEST, format!("Invalid upload: {}", e)))?
    {
        let Some(filename) = field.file_name().map(|f| f.trim().to_lowercase()) else {
            continue;
        };
        let bytes = field
            .bytes()
            .await
            .map_err(|e| (StatusCode::BAD_REQUEST, format!("Invalid upload: {}", e)))?;
        upload = Some((filename, bytes.to_vec()));
        break;
    }

    let Some((filename, bytes)) = upload else {
        return Err((StatusCode::BAD_REQUEST, "No file field in upload".to_string()));
    };

    if !EXCEL_EXTENSIONS.iter().any(|ext| filename.ends_with(ext)) {
        return Err((
            StatusCode::BAD_REQUEST,
            "Please upload a valid Excel file (.xlsx/.xlsm/.xls)".to_string(),
        ));
    }
    if bytes.len() < state.config.min_upload_bytes {
        return Err((
            StatusCode::BAD_REQUEST,
            "The uploaded file seems empty or not a real Excel. Please re-save as .xlsx and try again."
                .to_string(),
        ));
    }

    info!("  Generating report from {} ({} bytes)", filename, bytes.len());

    // Uuid-keyed temp path: concurrent requests never collide.
    let artifact = std::env::temp_dir().join(format!("quoteforge_{}.html", Uuid::new_v4()));
    let logo_dir = PathBuf::from(&state.config.logo_dir);
    let dest = artifact.clone();

    let result = tokio::task::spawn_blocking(move || {
        quoteforge_common::generate_from_bytes(&bytes, Some(&dest), &logo_dir)
    })
    .await
    .map_err(|e| {
        error!("  Generation task panicked: {}", e);
        (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
    })?;

    if let Err(e) = result {
        let status = if e.is_input_error() {
            StatusCode::BAD_REQUEST
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        };
        error!("  Generation failed: {}", e);
        return Err((status, e.to_string()));
    }

    let body = tokio::fs::read(&artifact).await.map_err(|e| {
        error!("  Artifact unreadable: {}", e);
        (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
    })?;
    if let Err(e) = tokio::fs::remove_file(&artifact).await {
        warn!("  Failed to delete temp artifact {}: {}", artifact.display(), e);
    }

    let headers = [
        (header::CONTENT_TYPE, "text/html; charset=utf-8"),
        (
            header::CONTENT_DISPOSITION,
            "attachment; filename=\"Health_Quote.html\"",
        ),
    ];
    Ok((headers, body).into_response())
}

// ============================================================================
// Health Routes
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_seconds: u64,
    pub plans_available: usize,
    pub plan_names: Vec<String>,
}

pub fn health_routes() -> Router<AppStateArc> {
    Router::new().route("/v1/health", get(health_check))
}

async fn health_check(State(state): State<AppStateArc>) -> Json<HealthResponse> {
    let plan_names: Vec<String> = registry::all_plans()
        .iter()
        .map(|p| p.name.to_string())
        .collect();

    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: state.start_time.elapsed().as_secs(),
        plans_available: plan_names.len(),
        plan_names,
    })
}
