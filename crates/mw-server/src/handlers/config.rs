//! Configuration API endpoint.
//!
//! Returns client-side configuration for the browser shell.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use mw_content::PageId;
use serde::Serialize;

use crate::state::AppState;

/// Response for GET /api/config.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ConfigResponse {
    /// Page loaded when the URL has no fragment.
    default_page: PageId,
    /// Whether to run the syntax highlighter after each render.
    highlight: bool,
    /// Server version.
    version: String,
}

/// Handle GET /api/config.
pub(crate) async fn get_config(State(state): State<Arc<AppState>>) -> Json<ConfigResponse> {
    Json(ConfigResponse {
        default_page: state.default_page.clone(),
        highlight: state.highlight,
        version: state.version.clone(),
    })
}
