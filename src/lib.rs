//! extra-placeholders - runtime placeholders for an axum request pipeline
//!
//! Every request passing through the [`server::extra_placeholders`]
//! middleware gets a set of `extra.*` placeholders (version, random numbers,
//! load averages, uptime, local and UTC time components) written into its
//! [`server::Replacer`], where handlers resolve `{key}` references.
//!
//! - `placeholder`: key namespace and the provider computing the values
//! - `server`: replacer, middleware, application state and router
//! - `api`: HTTP handlers consuming placeholders, health and metrics
//! - `config`: settings and the `extra_placeholders` directive block
//! - `error`: unified error type

// Domain layer
pub mod placeholder;

// Application layer
pub mod api;
pub mod server;

// Supporting modules
pub mod config;
pub mod error;
pub mod metrics;
pub mod telemetry;
