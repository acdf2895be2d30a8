//! Host server: application state, router and the placeholder middleware.

mod app;
mod middleware;
mod replacer;
mod state;

pub use app::{create_app, placeholder_routes};
pub use middleware::{attach_replacer, extra_placeholders};
pub use replacer::Replacer;
pub use state::AppState;
