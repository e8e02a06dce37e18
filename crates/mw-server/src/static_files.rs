//! Static file serving.
//!
//! Serves the browser shell via `mw-assets`, falling back to `index.html`
//! for any non-API path without an extension. Page routing itself happens
//! in the URL fragment, which never reaches the server.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use axum::response::{IntoResponse, Response};

use crate::state::AppState;

/// Create router for static file serving with shell fallback.
pub(crate) fn static_router() -> Router<Arc<AppState>> {
    Router::new().fallback(serve_asset)
}

/// Serve a static asset or fall back to `index.html`.
async fn serve_asset(req: Request<Body>) -> Response {
    let path = req.uri().path().trim_start_matches('/');

    let file_path = if path.is_empty() { "index.html" } else { path };

    if let Some(content) = mw_assets::get(file_path) {
        return (
            [(header::CONTENT_TYPE, mw_assets::mime_for(file_path))],
            content.into_owned(),
        )
            .into_response();
    }

    let is_shell_route = !path.starts_with("api/") && !path.contains('.');
    if is_shell_route && let Some(index) = mw_assets::get("index.html") {
        return (
            [(header::CONTENT_TYPE, "text/html; charset=utf-8".to_owned())],
            index.into_owned(),
        )
            .into_response();
    }

    StatusCode::NOT_FOUND.into_response()
}
