// GET handlers: version, api/overview

use axum::{extract::State, response::IntoResponse};

use super::AppState;
use crate::version::{NAME, VERSION};

/// GET /version — returns service name and version (from Cargo.toml at build time).
pub(super) async fn version_handler() -> impl IntoResponse {
    axum::Json(serde_json::json!({
        "name": NAME,
        "version": VERSION,
    }))
}

/// GET /api/overview — assembles and returns one fresh unified overview.
/// Always 200: partial provider failure surfaces inside the document as
/// null slots plus notes.
pub(super) async fn overview_handler(State(state): State<AppState>) -> impl IntoResponse {
    axum::Json(state.overview.get_unified_overview().await)
}
