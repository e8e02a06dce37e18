//! Pages API endpoint.
//!
//! Returns a page's title and HTML body. Unknown ids answer 404 with the
//! fallback view in the body, so clients can display it without a second
//! request.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Response};
use md5::{Digest, Md5};
use mw_content::PageId;
use mw_site::not_found_html;
use serde::Serialize;

use crate::error::ServerError;
use crate::state::AppState;

/// Response for GET /api/pages/{id}.
#[derive(Serialize)]
struct PageResponse {
    /// Page metadata.
    meta: PageMeta,
    /// HTML body.
    content: String,
}

/// Page metadata.
#[derive(Serialize)]
struct PageMeta {
    /// Page id.
    id: PageId,
    /// Page title.
    title: String,
}

/// Handle GET /api/pages/{id}.
pub(crate) async fn get_page(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Response, ServerError> {
    let Some(page) = state.store.get(&id) else {
        if state.verbose {
            tracing::warn!(page = %id, "Unknown page requested");
        }
        return Err(ServerError::PageNotFound {
            fallback: not_found_html(state.store, &state.default_page),
            page: PageId::from(id),
        });
    };

    let etag = compute_etag(&state.version, &page.body);

    if let Some(if_none_match) = headers.get(header::IF_NONE_MATCH)
        && if_none_match.as_bytes() == etag.as_bytes()
    {
        return Ok(StatusCode::NOT_MODIFIED.into_response());
    }

    let response = PageResponse {
        meta: PageMeta {
            id: page.id.clone(),
            title: page.title.clone(),
        },
        content: page.body.clone(),
    };

    Ok((
        [
            (header::ETAG, etag),
            (header::CACHE_CONTROL, "private, max-age=60".to_owned()),
        ],
        Json(response),
    )
        .into_response())
}

/// Compute `ETag` from version and content.
///
/// Uses MD5 hash truncated to 64 bits (16 hex chars) - sufficient for
/// cache invalidation with negligible collision probability.
fn compute_etag(version: &str, content: &str) -> String {
    let hash = Md5::digest(format!("{version}:{content}").as_bytes());
    format!("\"{}\"", &hex::encode(hash)[..16])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compute_etag_includes_version() {
        assert_ne!(compute_etag("1.0.0", "content"), compute_etag("1.0.1", "content"));
    }

    #[test]
    fn test_compute_etag_includes_content() {
        assert_ne!(compute_etag("1.0.0", "content1"), compute_etag("1.0.0", "content2"));
    }

    #[test]
    fn test_compute_etag_format() {
        let etag = compute_etag("1.0.0", "content");

        assert!(etag.starts_with('"'));
        assert!(etag.ends_with('"'));
        // 16 hex chars + 2 quotes = 18 total
        assert_eq!(etag.len(), 18);
    }

    #[test]
    fn test_page_response_serialization() {
        let response = PageResponse {
            meta: PageMeta {
                id: PageId::from("glossary"),
                title: "Glossary".to_owned(),
            },
            content: "<h1>Glossary</h1>".to_owned(),
        };

        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["meta"]["id"], "glossary");
        assert_eq!(json["meta"]["title"], "Glossary");
        assert_eq!(json["content"], "<h1>Glossary</h1>");
    }

    #[tokio::test]
    async fn test_get_page_unknown_returns_fallback_error() {
        let state = AppState::for_tests();

        let err = get_page(Path("missing".to_owned()), State(state), HeaderMap::new())
            .await
            .unwrap_err();

        match err {
            ServerError::PageNotFound { page, fallback } => {
                assert_eq!(page, "missing");
                assert!(fallback.contains("href=\"#intro\""));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn test_get_page_known_sets_etag() {
        let state = AppState::for_tests();

        let response = get_page(Path("intro".to_owned()), State(state), HeaderMap::new())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers().contains_key(header::ETAG));
    }
}
