use axum::{routing::get, Router};

use crate::server::AppState;

use super::{health, prometheus_metrics};

/// Routes that do not go through the placeholder middleware
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/metrics", get(prometheus_metrics))
}
