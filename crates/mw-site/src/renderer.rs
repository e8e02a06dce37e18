//! Page rendering.
//!
//! [`PageRenderer`] resolves a page id in the [`ContentStore`] and writes the
//! result to a [`DisplaySurface`]. Unknown ids are recovered locally with a
//! fixed "not found" view; they never surface as errors.

use mw_content::{ContentStore, PageId};

use crate::session::SessionState;
use crate::surface::{DisplaySurface, Highlighter};

/// What a call to [`PageRenderer::render`] displayed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderOutcome {
    /// The page body was displayed and the page became current.
    Rendered,
    /// The id is unknown; the fallback view was displayed.
    NotFound,
}

/// Writes page bodies into a display surface.
pub struct PageRenderer<'s, D> {
    store: &'s ContentStore,
    default_page: PageId,
    display: D,
    highlighter: Option<Box<dyn Highlighter>>,
}

impl<'s, D: DisplaySurface> PageRenderer<'s, D> {
    /// Create a renderer without a syntax highlighter.
    pub fn new(store: &'s ContentStore, default_page: impl Into<PageId>, display: D) -> Self {
        Self {
            store,
            default_page: default_page.into(),
            display,
            highlighter: None,
        }
    }

    /// Attach the external syntax highlighter.
    #[must_use]
    pub fn with_highlighter(mut self, highlighter: Box<dyn Highlighter>) -> Self {
        self.highlighter = Some(highlighter);
        self
    }

    /// Page the fallback view links back to.
    #[must_use]
    pub fn default_page(&self) -> &PageId {
        &self.default_page
    }

    /// The display surface.
    #[must_use]
    pub fn display(&self) -> &D {
        &self.display
    }

    /// Render `page_id`.
    ///
    /// For a known page: display its body, make it current, mark its
    /// navigation entry as the sole active one, scroll to the top and
    /// re-run the highlighter if one is attached.
    ///
    /// For an unknown page: display the fallback view. The current page and
    /// the active marker keep their previous values.
    pub fn render(&mut self, page_id: &str, state: &mut SessionState) -> RenderOutcome {
        let Some(page) = self.store.get(page_id) else {
            tracing::warn!(page = %page_id, "Unknown page requested, showing fallback");
            let html = not_found_html(self.store, &self.default_page);
            self.display.set_html(&html);
            return RenderOutcome::NotFound;
        };

        self.display.set_html(&page.body);
        state.current_page = Some(page.id.clone());
        state.navigation.set_active(page_id);
        self.display.scroll_to_top();

        if let Some(highlighter) = self.highlighter.as_mut()
            && let Err(e) = highlighter.highlight_all()
        {
            tracing::debug!(page = %page_id, error = %e, "Highlighting skipped");
        }

        tracing::debug!(page = %page_id, "Rendered page");
        RenderOutcome::Rendered
    }
}

/// Fallback body for unknown page ids, linking back to `default_page`.
///
/// The link label uses the default page's title when the store has it.
#[must_use]
pub fn not_found_html(store: &ContentStore, default_page: &PageId) -> String {
    let title = store
        .get(default_page.as_str())
        .map_or("the start page", |p| p.title.as_str());
    format!(
        "<h1>Page Not Found</h1>\n\
         <p>The requested page could not be found.</p>\n\
         <a href=\"#{default_page}\" data-page=\"{default_page}\">Return to {title}</a>\n"
    )
}
