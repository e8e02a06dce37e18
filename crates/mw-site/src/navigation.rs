//! Navigation list state.
//!
//! One [`NavigationEntry`] per link in the sidebar. Entries carry two flags:
//! `visible`, owned by the search filter, and `active`, owned by the page
//! renderer. At most one entry is active at a time.

use mw_content::{ContentStore, PageId};
use serde::Serialize;

/// Clickable navigation entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationEntry {
    /// Page this entry links to (the `data-page` attribute).
    pub page_id: PageId,
    /// Link text.
    pub label: String,
    /// False while hidden by a search query.
    pub visible: bool,
    /// True for the entry of the displayed page.
    pub active: bool,
}

impl NavigationEntry {
    /// Create a visible, inactive entry.
    #[must_use]
    pub fn new(page_id: impl Into<PageId>, label: impl Into<String>) -> Self {
        Self {
            page_id: page_id.into(),
            label: label.into(),
            visible: true,
            active: false,
        }
    }
}

/// Ordered list of navigation entries.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct NavigationList {
    entries: Vec<NavigationEntry>,
}

impl NavigationList {
    /// Build a list from externally supplied entries.
    ///
    /// Entries may reference pages that do not exist in any store.
    #[must_use]
    pub fn new(entries: impl IntoIterator<Item = NavigationEntry>) -> Self {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    /// One entry per page in table order, labelled with the page title.
    #[must_use]
    pub fn from_store(store: &ContentStore) -> Self {
        Self::new(
            store
                .iter()
                .map(|page| NavigationEntry::new(page.id.clone(), page.title.clone())),
        )
    }

    /// All entries, in display order.
    #[must_use]
    pub fn entries(&self) -> &[NavigationEntry] {
        &self.entries
    }

    pub(crate) fn entries_mut(&mut self) -> &mut [NavigationEntry] {
        &mut self.entries
    }

    /// Entries not hidden by the current search.
    pub fn visible(&self) -> impl Iterator<Item = &NavigationEntry> {
        self.entries.iter().filter(|e| e.visible)
    }

    /// The active entry, if any.
    #[must_use]
    pub fn active(&self) -> Option<&NavigationEntry> {
        self.entries.iter().find(|e| e.active)
    }

    /// Mark the entry for `page_id` active and every other entry inactive.
    pub fn set_active(&mut self, page_id: &str) {
        for entry in &mut self.entries {
            entry.active = entry.page_id == page_id;
        }
    }

    /// Make every entry visible.
    pub fn show_all(&mut self) {
        for entry in &mut self.entries {
            entry.visible = true;
        }
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if the list has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use mw_content::ContentStoreBuilder;
    use pretty_assertions::assert_eq;

    use super::*;

    fn sample_list() -> NavigationList {
        NavigationList::new([
            NavigationEntry::new("intro", "Introduction"),
            NavigationEntry::new("glossary", "Glossary"),
            NavigationEntry::new("resources", "Resources"),
        ])
    }

    #[test]
    fn test_from_store_uses_titles_in_order() {
        let store = ContentStoreBuilder::new()
            .with_page("intro", "Introduction to FHIR", "")
            .with_page("glossary", "Glossary", "")
            .build();

        let list = NavigationList::from_store(&store);

        assert_eq!(
            list.entries(),
            &[
                NavigationEntry::new("intro", "Introduction to FHIR"),
                NavigationEntry::new("glossary", "Glossary"),
            ]
        );
    }

    #[test]
    fn test_new_entries_start_visible_and_inactive() {
        let list = sample_list();
        assert!(list.entries().iter().all(|e| e.visible && !e.active));
        assert!(list.active().is_none());
    }

    #[test]
    fn test_set_active_marks_single_entry() {
        let mut list = sample_list();
        list.set_active("intro");
        list.set_active("glossary");

        let active: Vec<&str> = list
            .entries()
            .iter()
            .filter(|e| e.active)
            .map(|e| e.page_id.as_str())
            .collect();
        assert_eq!(active, vec!["glossary"]);
    }

    #[test]
    fn test_set_active_unknown_clears_all() {
        let mut list = sample_list();
        list.set_active("intro");
        list.set_active("missing");
        assert!(list.active().is_none());
    }

    #[test]
    fn test_show_all_restores_visibility() {
        let mut list = sample_list();
        for entry in list.entries_mut() {
            entry.visible = false;
        }
        assert_eq!(list.visible().count(), 0);

        list.show_all();

        assert_eq!(list.visible().count(), 3);
    }

    #[test]
    fn test_entry_serialization() {
        let mut entry = NavigationEntry::new("patient-mapping", "Patient Mapping");
        entry.active = true;

        let json = serde_json::to_value(&entry).unwrap();

        assert_eq!(json["pageId"], "patient-mapping");
        assert_eq!(json["label"], "Patient Mapping");
        assert_eq!(json["visible"], true);
        assert_eq!(json["active"], true);
    }
}
