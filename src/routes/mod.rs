// HTTP routes: a thin shim over the overview service.

mod http;

use axum::{Router, routing::get};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

use crate::overview::OverviewService;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) overview: Arc<OverviewService>,
}

pub fn app(overview: Arc<OverviewService>) -> Router {
    let state = AppState { overview };
    Router::new()
        .route("/", get(|| async { "Cloudlens: unified cloud overview" })) // GET /
        .route("/version", get(http::version_handler)) // GET /version
        .route("/api/overview", get(http::overview_handler)) // GET /api/overview
        .layer(CorsLayer::new().allow_origin(Any))
        .with_state(state)
}
