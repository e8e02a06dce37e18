//! Application state.
//!
//! Shared state for all request handlers.

use mw_content::{ContentStore, PageId};

/// Application state shared across all handlers.
pub(crate) struct AppState {
    /// Immutable page table.
    pub(crate) store: &'static ContentStore,
    /// Page clients load when the URL has no fragment.
    pub(crate) default_page: PageId,
    /// Whether clients run the syntax highlighter.
    pub(crate) highlight: bool,
    /// Enable verbose output (log unknown page requests).
    pub(crate) verbose: bool,
    /// Application version for cache invalidation.
    pub(crate) version: String,
}

#[cfg(test)]
impl AppState {
    /// State over the built-in pages, as the server runs it by default.
    pub(crate) fn for_tests() -> std::sync::Arc<Self> {
        std::sync::Arc::new(Self {
            store: ContentStore::builtin(),
            default_page: PageId::from(mw_content::DEFAULT_PAGE_ID),
            highlight: true,
            verbose: false,
            version: "test".to_owned(),
        })
    }
}
