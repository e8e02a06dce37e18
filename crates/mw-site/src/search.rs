//! Navigation search.
//!
//! A plain, case-insensitive substring filter: no tokenizing, no ranking,
//! entries are only shown or hidden in place.

use mw_content::ContentStore;

use crate::navigation::NavigationList;

/// Filters navigation entries by label or page body.
#[derive(Clone, Copy, Debug)]
pub struct SearchFilter<'s> {
    store: &'s ContentStore,
}

impl<'s> SearchFilter<'s> {
    /// Create a filter over the given store.
    #[must_use]
    pub fn new(store: &'s ContentStore) -> Self {
        Self { store }
    }

    /// Update entry visibility for `query`.
    ///
    /// An empty query shows every entry. Otherwise an entry stays visible
    /// iff its label or its page body contains the query, ignoring case.
    /// Entries whose page is missing from the store match on label only.
    pub fn apply_query(&self, navigation: &mut NavigationList, query: &str) {
        let query = query.to_lowercase();
        if query.is_empty() {
            navigation.show_all();
            return;
        }

        let mut shown = 0usize;
        for entry in navigation.entries_mut() {
            entry.visible = entry.label.to_lowercase().contains(&query)
                || self
                    .store
                    .lowercase_body(entry.page_id.as_str())
                    .is_some_and(|body| body.contains(&query));
            shown += usize::from(entry.visible);
        }

        tracing::debug!(query = %query, shown, "Applied navigation search");
    }
}
