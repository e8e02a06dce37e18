//! Fragment-based routing.
//!
//! The displayed page is persisted as the URL fragment (`#glossary`), so a
//! reload or a back/forward step reproduces it. [`Router`] owns the
//! [`LocationSurface`] and translates between fragments and page ids.

use mw_content::{ContentStore, PageId};
use percent_encoding::{AsciiSet, CONTROLS, percent_decode_str, utf8_percent_encode};

use crate::surface::LocationSurface;

/// Characters escaped when writing a page id into a fragment.
///
/// The WHATWG fragment percent-encode set, plus `#` and `%` so that ids
/// round-trip through [`decode_fragment`].
const FRAGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'#')
    .add(b'%');

/// Lifecycle of a session's routing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RouterState {
    /// No page has been loaded yet.
    #[default]
    Unloaded,
    /// Startup navigation happened; every later event stays here.
    Loaded,
}

/// Reads and writes the page id held in the URL fragment.
#[derive(Debug)]
pub struct Router<L> {
    location: L,
    state: RouterState,
}

impl<L: LocationSurface> Router<L> {
    /// Create a router in the [`RouterState::Unloaded`] state.
    pub fn new(location: L) -> Self {
        Self {
            location,
            state: RouterState::Unloaded,
        }
    }

    /// Current lifecycle state.
    #[must_use]
    pub fn state(&self) -> RouterState {
        self.state
    }

    pub(crate) fn mark_loaded(&mut self) {
        self.state = RouterState::Loaded;
    }

    /// The location surface.
    #[must_use]
    pub fn location(&self) -> &L {
        &self.location
    }

    /// Mutable access to the location surface.
    pub fn location_mut(&mut self) -> &mut L {
        &mut self.location
    }

    /// Page id named by the current fragment, `None` if the fragment is empty.
    ///
    /// The id is not checked against any store.
    #[must_use]
    pub fn current_page_id_from_location(&self) -> Option<PageId> {
        decode_fragment(&self.location.fragment())
    }

    /// Persist `page_id` as the fragment.
    ///
    /// Writing the fragment the location already holds is skipped, so the
    /// history does not gain duplicate entries.
    pub fn push(&mut self, page_id: &PageId) {
        let fragment = encode_fragment(page_id);
        if self.location.fragment() != fragment {
            self.location.set_fragment(&fragment);
        }
    }

    /// Page to render after an external back/forward step to `fragment`.
    ///
    /// Returns `None` when the fragment is empty or names no known page,
    /// in which case the page on screen stays.
    #[must_use]
    pub fn resolve_history_change(&self, store: &ContentStore, fragment: &str) -> Option<PageId> {
        decode_fragment(fragment).filter(|id| store.contains(id.as_str()))
    }
}

/// Decode a fragment (with or without its leading `#`) into a page id.
///
/// Percent-escapes are decoded; invalid UTF-8 is replaced lossily.
/// Returns `None` for an empty fragment.
#[must_use]
pub fn decode_fragment(fragment: &str) -> Option<PageId> {
    let raw = fragment.strip_prefix('#').unwrap_or(fragment);
    if raw.is_empty() {
        return None;
    }
    Some(PageId::new(percent_decode_str(raw).decode_utf8_lossy()))
}

/// Encode a page id for use as a fragment (without the leading `#`).
#[must_use]
pub fn encode_fragment(page_id: &PageId) -> String {
    utf8_percent_encode(page_id.as_str(), FRAGMENT).to_string()
}
