//! In-memory surfaces.
//!
//! Used by tests and by hosts without a real UI (the CLI renders a page
//! into a [`MemoryDisplay`] and prints it).

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::surface::{DisplaySurface, HighlightError, Highlighter, LocationSurface};

/// Display surface that keeps the last written HTML.
#[derive(Debug, Default)]
pub struct MemoryDisplay {
    html: String,
    writes: usize,
    scroll_resets: usize,
}

impl MemoryDisplay {
    /// Create an empty display.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Currently displayed HTML.
    #[must_use]
    pub fn html(&self) -> &str {
        &self.html
    }

    /// Number of `set_html` calls.
    #[must_use]
    pub fn writes(&self) -> usize {
        self.writes
    }

    /// Number of `scroll_to_top` calls.
    #[must_use]
    pub fn scroll_resets(&self) -> usize {
        self.scroll_resets
    }

    /// Take the displayed HTML, leaving the display empty.
    pub fn take_html(&mut self) -> String {
        std::mem::take(&mut self.html)
    }
}

impl DisplaySurface for MemoryDisplay {
    fn set_html(&mut self, html: &str) {
        html.clone_into(&mut self.html);
        self.writes += 1;
    }

    fn scroll_to_top(&mut self) {
        self.scroll_resets += 1;
    }
}

/// Location surface with a simple back/forward history.
#[derive(Debug, Default)]
pub struct MemoryLocation {
    history: Vec<String>,
    position: Option<usize>,
}

impl MemoryLocation {
    /// Create a location without a fragment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a location as if the page was opened at `#fragment`.
    #[must_use]
    pub fn with_fragment(fragment: impl Into<String>) -> Self {
        Self {
            history: vec![fragment.into()],
            position: Some(0),
        }
    }

    /// Fragments in history order.
    #[must_use]
    pub fn history(&self) -> &[String] {
        &self.history
    }

    /// Step back one history entry and return the new fragment.
    ///
    /// Returns `None` at the start of the history.
    pub fn back(&mut self) -> Option<String> {
        let position = self.position?.checked_sub(1)?;
        self.position = Some(position);
        Some(self.history[position].clone())
    }

    /// Step forward one history entry and return the new fragment.
    ///
    /// Returns `None` at the end of the history.
    pub fn forward(&mut self) -> Option<String> {
        let next = self.position.map_or(0, |p| p + 1);
        let fragment = self.history.get(next)?.clone();
        self.position = Some(next);
        Some(fragment)
    }
}

impl LocationSurface for MemoryLocation {
    fn fragment(&self) -> String {
        self.position
            .map(|p| self.history[p].clone())
            .unwrap_or_default()
    }

    fn set_fragment(&mut self, fragment: &str) {
        // A new entry drops everything forward of the current position.
        let keep = self.position.map_or(0, |p| p + 1);
        self.history.truncate(keep);
        self.history.push(fragment.to_owned());
        self.position = Some(self.history.len() - 1);
    }
}

/// Highlighter that only counts how often it ran.
///
/// Clones share the counter, so a test can keep one handle and box another.
#[derive(Clone, Debug, Default)]
pub struct RecordingHighlighter {
    calls: Arc<AtomicUsize>,
}

impl RecordingHighlighter {
    /// Create a highlighter with a zeroed counter.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of `highlight_all` calls across all clones.
    #[must_use]
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Highlighter for RecordingHighlighter {
    fn highlight_all(&mut self) -> Result<(), HighlightError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
