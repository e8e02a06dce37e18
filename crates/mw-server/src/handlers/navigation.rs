//! Navigation API endpoint.
//!
//! Returns the sidebar entries, filtered by an optional search query.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Query, State};
use mw_content::PageId;
use mw_site::{NavigationEntry, NavigationList, SearchFilter};
use serde::{Deserialize, Serialize};

use crate::state::AppState;

/// Query parameters for GET /api/navigation.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct NavigationQuery {
    /// Search text; absent or empty shows every entry.
    #[serde(default)]
    q: Option<String>,
}

/// Response for GET /api/navigation.
#[derive(Serialize)]
pub(crate) struct NavigationResponse {
    /// Entries in display order.
    items: Vec<NavItemResponse>,
}

/// Navigation entry for serialization.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct NavItemResponse {
    /// Page id (the link's `data-page`).
    page_id: PageId,
    /// Link text.
    label: String,
    /// False if hidden by the search query.
    visible: bool,
}

impl From<&NavigationEntry> for NavItemResponse {
    fn from(entry: &NavigationEntry) -> Self {
        Self {
            page_id: entry.page_id.clone(),
            label: entry.label.clone(),
            visible: entry.visible,
        }
    }
}

/// Handle GET /api/navigation.
pub(crate) async fn get_navigation(
    State(state): State<Arc<AppState>>,
    Query(query): Query<NavigationQuery>,
) -> Json<NavigationResponse> {
    let mut navigation = NavigationList::from_store(state.store);
    if let Some(q) = query.q.as_deref() {
        SearchFilter::new(state.store).apply_query(&mut navigation, q);
    }

    Json(NavigationResponse {
        items: navigation
            .entries()
            .iter()
            .map(NavItemResponse::from)
            .collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigation_response_serialization() {
        let response = NavigationResponse {
            items: vec![NavItemResponse::from(&NavigationEntry::new(
                "glossary", "Glossary",
            ))],
        };

        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["items"][0]["pageId"], "glossary");
        assert_eq!(json["items"][0]["label"], "Glossary");
        assert_eq!(json["items"][0]["visible"], true);
        assert!(json["items"][0].get("active").is_none());
    }

    #[tokio::test]
    async fn test_get_navigation_lists_all_pages() {
        let state = AppState::for_tests();

        let Json(response) =
            get_navigation(State(Arc::clone(&state)), Query(NavigationQuery::default())).await;

        assert_eq!(response.items.len(), state.store.len());
        assert!(response.items.iter().all(|item| item.visible));
        assert_eq!(response.items[0].page_id, "intro");
    }

    #[tokio::test]
    async fn test_get_navigation_applies_query() {
        let state = AppState::for_tests();
        let query = NavigationQuery {
            q: Some("Bundle".to_owned()),
        };

        let Json(response) = get_navigation(State(state), Query(query)).await;

        let glossary = response
            .items
            .iter()
            .find(|item| item.page_id == "glossary")
            .unwrap();
        assert!(glossary.visible);
        assert!(response.items.iter().any(|item| !item.visible));
    }
}
