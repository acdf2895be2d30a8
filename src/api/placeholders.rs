//! Handlers that consume the request's placeholders.

use std::collections::BTreeMap;

use axum::{
    extract::{Query, State},
    Extension, Json,
};
use serde::Deserialize;

use crate::placeholder::PlaceholderValue;
use crate::server::{AppState, Replacer};

#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    /// Only return keys starting with this prefix
    pub prefix: Option<String>,
}

/// GET / - the configured response template with placeholders resolved
pub async fn respond(
    State(state): State<AppState>,
    Extension(repl): Extension<Replacer>,
) -> String {
    repl.replace_known(&state.settings.respond.body)
}

/// POST /render - resolve placeholders in the request body
pub async fn render(Extension(repl): Extension<Replacer>, body: String) -> String {
    repl.replace_known(&body)
}

/// GET /placeholders - every placeholder known for this request
pub async fn list_placeholders(
    Extension(repl): Extension<Replacer>,
    Query(query): Query<ListQuery>,
) -> Json<BTreeMap<String, PlaceholderValue>> {
    let prefix = query.prefix.unwrap_or_default();
    let values = repl
        .iter()
        .filter(|(key, _)| key.starts_with(prefix.as_str()))
        .map(|(key, value)| (key.to_string(), value.clone()))
        .collect();
    Json(values)
}
