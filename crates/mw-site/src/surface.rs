//! Abstract UI surfaces.
//!
//! The browsing logic never touches a concrete UI. Hosts (a browser bridge,
//! a terminal, tests) implement these traits and hand them to a
//! [`Session`](crate::Session).

/// Region that displays the current page body.
pub trait DisplaySurface {
    /// Replace the displayed content with raw HTML markup.
    fn set_html(&mut self, html: &str);

    /// Reset the scroll position to the top of the content.
    fn scroll_to_top(&mut self);
}

/// Holder of the URL fragment identifier.
///
/// Fragments are exchanged without the leading `#`.
pub trait LocationSurface {
    /// Current fragment, empty if none is set.
    fn fragment(&self) -> String;

    /// Replace the fragment, creating a new history entry.
    fn set_fragment(&mut self, fragment: &str);
}

/// External syntax highlighter, re-run after each render.
///
/// Optional collaborator: a session without one simply skips highlighting.
pub trait Highlighter {
    /// Re-scan the displayed content and highlight code blocks.
    fn highlight_all(&mut self) -> Result<(), HighlightError>;
}

/// Highlighting failure. Degrades the visuals only, never the render.
#[derive(Debug, thiserror::Error)]
#[error("Syntax highlighting failed: {0}")]
pub struct HighlightError(pub String);

impl<T: DisplaySurface + ?Sized> DisplaySurface for &mut T {
    fn set_html(&mut self, html: &str) {
        (**self).set_html(html);
    }

    fn scroll_to_top(&mut self) {
        (**self).scroll_to_top();
    }
}

impl<T: LocationSurface + ?Sized> LocationSurface for &mut T {
    fn fragment(&self) -> String {
        (**self).fragment()
    }

    fn set_fragment(&mut self, fragment: &str) {
        (**self).set_fragment(fragment);
    }
}
