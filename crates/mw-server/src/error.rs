//! Error types for the HTTP server.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use mw_content::PageId;
use serde_json::json;

/// Server error type.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// Requested page id is not in the content store.
    ///
    /// Carries the fallback view so clients can display it as-is.
    #[error("Page not found: {page}")]
    PageNotFound {
        /// Requested id.
        page: PageId,
        /// "Not found" body linking back to the default page.
        fallback: String,
    },

    /// Configured default page is not in the content store.
    #[error("Default page not found: {0}")]
    UnknownDefaultPage(PageId),
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            Self::PageNotFound { page, fallback } => (
                StatusCode::NOT_FOUND,
                json!({"error": "Page not found", "page": page, "content": fallback}),
            ),
            Self::UnknownDefaultPage(page) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({"error": self.to_string(), "page": page}),
            ),
        };

        (status, axum::Json(body)).into_response()
    }
}
