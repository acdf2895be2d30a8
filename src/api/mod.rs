//! API layer - HTTP endpoint handlers.

mod health;
mod metrics;
mod placeholders;
mod routes;

pub use health::{health, HealthResponse};
pub use metrics::prometheus_metrics;
pub use placeholders::{list_placeholders, render, respond, ListQuery};
pub use routes::api_routes;
