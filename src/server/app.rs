use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::api::{api_routes, list_placeholders, render, respond};

use super::{attach_replacer, extra_placeholders, AppState};

/// Routes that consume placeholders, wrapped in the placeholder middleware.
///
/// The replacer itself is attached by [`create_app`]; without it every
/// route here answers 500.
pub fn placeholder_routes(state: &AppState) -> Router<AppState> {
    Router::new()
        .route("/", get(respond))
        .route("/render", post(render))
        .route("/placeholders", get(list_placeholders))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            extra_placeholders,
        ))
}

pub fn create_app(state: AppState) -> Router {
    Router::new()
        .merge(placeholder_routes(&state).layer(middleware::from_fn(attach_replacer)))
        // Health & metrics
        .merge(api_routes())
        // Add middleware
        .layer(TraceLayer::new_for_http())
        // Add state
        .with_state(state)
}
