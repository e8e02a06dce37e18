//! Immutable content store.
//!
//! # Architecture
//!
//! Records are stored in a flat `Vec<PageRecord>` in insertion order, with a
//! `path_index`-style `HashMap` from id to position. This provides:
//! - O(1) id lookups
//! - stable, table-defined ordering for navigation lists
//! - a precomputed lowercase copy of every body for search
//!
//! A store is built once through [`ContentStoreBuilder`] and exposes no
//! mutation afterwards.

use std::collections::HashMap;

use crate::page::{PageId, PageRecord};

/// Ordered, read-only mapping from page id to [`PageRecord`].
#[derive(Debug, Default)]
pub struct ContentStore {
    pages: Vec<PageRecord>,
    lowercase_bodies: Vec<String>,
    index: HashMap<PageId, usize>,
}

impl ContentStore {
    /// Get a page by id.
    ///
    /// Returns `None` for ids not present in the store.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&PageRecord> {
        self.index.get(id).map(|&i| &self.pages[i])
    }

    /// True if a page with this id exists.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Lowercased body of a page, precomputed for case-insensitive search.
    #[must_use]
    pub fn lowercase_body(&self, id: &str) -> Option<&str> {
        self.index
            .get(id)
            .map(|&i| self.lowercase_bodies[i].as_str())
    }

    /// Iterate pages in table order.
    pub fn iter(&self) -> impl Iterator<Item = &PageRecord> {
        self.pages.iter()
    }

    /// Number of pages.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    /// True if the store has no pages.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }
}

impl<'a> IntoIterator for &'a ContentStore {
    type Item = &'a PageRecord;
    type IntoIter = std::slice::Iter<'a, PageRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.pages.iter()
    }
}

/// Builder for [`ContentStore`].
///
/// Duplicate ids follow last-write-wins: the later record replaces the
/// earlier one in place, keeping the original position in the table.
#[derive(Debug, Default)]
pub struct ContentStoreBuilder {
    pages: Vec<PageRecord>,
    index: HashMap<PageId, usize>,
}

impl ContentStoreBuilder {
    /// Create an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a page, replacing any earlier page with the same id.
    pub fn add_page(&mut self, record: PageRecord) -> &mut Self {
        if let Some(&existing) = self.index.get(&record.id) {
            tracing::warn!(
                page = %record.id,
                previous_title = %self.pages[existing].title,
                title = %record.title,
                "Duplicate page id in content table, later entry wins"
            );
            self.pages[existing] = record;
        } else {
            self.index.insert(record.id.clone(), self.pages.len());
            self.pages.push(record);
        }
        self
    }

    /// Add a page and return the builder, for chained construction.
    #[must_use]
    pub fn with_page(
        mut self,
        id: impl Into<PageId>,
        title: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        self.add_page(PageRecord::new(id, title, body));
        self
    }

    /// Freeze the builder into an immutable store.
    #[must_use]
    pub fn build(self) -> ContentStore {
        let lowercase_bodies = self.pages.iter().map(|p| p.body.to_lowercase()).collect();
        ContentStore {
            pages: self.pages,
            lowercase_bodies,
            index: self.index,
        }
    }
}

impl FromIterator<PageRecord> for ContentStore {
    fn from_iter<I: IntoIterator<Item = PageRecord>>(iter: I) -> Self {
        let mut builder = ContentStoreBuilder::new();
        for record in iter {
            builder.add_page(record);
        }
        builder.build()
    }
}
