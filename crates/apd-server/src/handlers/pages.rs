//! Page handlers.
//!
//! Renders documentation pages through the layout shell and serves them as
//! HTML with ETag-based conditional requests.

use std::sync::Arc;

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode, Uri, header};
use axum::response::{Html, IntoResponse, Redirect};
use md5::{Digest, Md5};

use crate::error::ServerError;
use crate::state::AppState;

/// Handle `GET /`: redirect to the first navigation entry.
pub(crate) async fn root_redirect() -> Redirect {
    Redirect::temporary(apd_nav::first_page_url())
}

/// Handle `GET /{page url}` (router fallback).
pub(crate) async fn get_page(
    State(state): State<Arc<AppState>>,
    uri: Uri,
    headers: HeaderMap,
) -> Result<axum::response::Response, ServerError> {
    let path = uri.path();

    let page = state.site.render(path).map_err(|e| match e {
        apd_site::RenderError::PageNotFound(p) => ServerError::PageNotFound(p),
        other => {
            tracing::error!(path, error = %other, "page render failed");
            ServerError::Render(other)
        }
    })?;

    if state.verbose {
        tracing::info!(path, title = %page.title, "served page");
    }

    let etag = compute_etag(&state.version, &page.html);

    // Conditional request
    if let Some(if_none_match) = headers.get(header::IF_NONE_MATCH)
        && if_none_match.as_bytes() == etag.as_bytes()
    {
        return Ok(StatusCode::NOT_MODIFIED.into_response());
    }

    Ok((
        [
            (header::ETAG, etag),
            (header::CACHE_CONTROL, "private, max-age=60".to_owned()),
        ],
        Html(page.html),
    )
        .into_response())
}

/// Compute `ETag` from version and content.
///
/// Uses MD5 truncated to 64 bits (16 hex chars) - sufficient for cache
/// invalidation with negligible collision probability.
fn compute_etag(version: &str, content: &str) -> String {
    let hash = Md5::digest(format!("{version}:{content}").as_bytes());
    format!("\"{}\"", &hex::encode(hash)[..16])
}
