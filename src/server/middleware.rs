use axum::{
    body::Body,
    extract::State,
    http::Request,
    middleware::Next,
    response::Response,
};

use super::{AppState, Replacer};
use crate::error::AppError;
use crate::metrics::PlaceholderMetrics;

/// Attach a fresh [`Replacer`] to every request.
pub async fn attach_replacer(mut req: Request<Body>, next: Next) -> Response {
    let repl = Replacer::for_request(&req);
    req.extensions_mut().insert(repl);
    next.run(req).await
}

/// Compute the `extra.*` placeholders and write them into the request's
/// replacer before passing the request on.
///
/// Responds with 500 when no replacer is attached; other requests are
/// unaffected.
pub async fn extra_placeholders(
    State(state): State<AppState>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let Some(repl) = req.extensions_mut().get_mut::<Replacer>() else {
        PlaceholderMetrics::record_missing_replacer();
        return Err(AppError::MissingReplacer);
    };

    let set = state.provider.compute();
    tracing::trace!(count = set.len(), "Placeholders computed");
    repl.extend(set);

    Ok(next.run(req).await)
}
