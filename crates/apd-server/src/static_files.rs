//! Static file serving.
//!
//! Frontend assets come from `apd-assets` (embedded or filesystem mode);
//! content media (carousel images) is read from the content directory.

use std::sync::Arc;

use axum::body::Body;
use axum::extract::{Path, State};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};

use crate::state::AppState;

/// Handle `GET /assets/{path}`.
pub(crate) async fn get_asset(Path(path): Path<String>) -> Response {
    match apd_assets::get(&path) {
        Some(content) => file_response(&path, content.into_owned()),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

/// Handle `GET /media/{path}`: files under `{content_dir}/media/`.
pub(crate) async fn get_media(
    State(state): State<Arc<AppState>>,
    Path(path): Path<String>,
) -> Response {
    // Reject traversal before touching the filesystem
    if path.split('/').any(|seg| seg == "..") {
        return StatusCode::NOT_FOUND.into_response();
    }

    let full_path = state.content_dir.join("media").join(&path);
    match tokio::fs::read(&full_path).await {
        Ok(content) => file_response(&path, content),
        Err(_) => StatusCode::NOT_FOUND.into_response(),
    }
}

/// Build a response with the MIME type guessed from the file name.
fn file_response(path: &str, content: Vec<u8>) -> Response {
    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, apd_assets::mime_for(path))
        .header(header::CACHE_CONTROL, "public, max-age=3600")
        .body(Body::from(content))
        .unwrap_or_else(|_| StatusCode::INTERNAL_SERVER_ERROR.into_response())
}
