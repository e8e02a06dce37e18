//! Browsing session.
//!
//! A [`Session`] owns everything one reader's browsing mutates: the current
//! page, the navigation list and the surfaces. Independent sessions over the
//! same [`ContentStore`] never share state.
//!
//! All handlers are synchronous and run to completion; hosts feed them one
//! [`UiEvent`] at a time from their event loop.

use mw_content::{ContentStore, DEFAULT_PAGE_ID, PageId};

use crate::navigation::NavigationList;
use crate::renderer::{PageRenderer, RenderOutcome};
use crate::router::{Router, RouterState};
use crate::search::SearchFilter;
use crate::surface::{DisplaySurface, Highlighter, LocationSurface};

/// Mutable per-session state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    /// Page on screen. Always a key of the store once set.
    pub current_page: Option<PageId>,
    /// Sidebar entries with their visibility and active flags.
    pub navigation: NavigationList,
}

impl SessionState {
    /// Create a state with no page loaded.
    #[must_use]
    pub fn new(navigation: NavigationList) -> Self {
        Self {
            current_page: None,
            navigation,
        }
    }
}

/// Input from the hosting UI.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UiEvent {
    /// A navigation entry with this `data-page` id was clicked.
    Click(PageId),
    /// The search input changed.
    SearchInput(String),
    /// The user stepped back/forward; carries the new fragment.
    HistoryChange(String),
}

/// One browsing session.
pub struct Session<'s, D, L> {
    store: &'s ContentStore,
    state: SessionState,
    renderer: PageRenderer<'s, D>,
    router: Router<L>,
    search: SearchFilter<'s>,
}

impl<'s, D: DisplaySurface, L: LocationSurface> Session<'s, D, L> {
    /// Create a session with one navigation entry per page and
    /// [`DEFAULT_PAGE_ID`] as the default page.
    pub fn new(store: &'s ContentStore, display: D, location: L) -> Self {
        Self::with_navigation(
            store,
            NavigationList::from_store(store),
            DEFAULT_PAGE_ID,
            display,
            location,
        )
    }

    /// Create a session with an explicit navigation list and default page.
    pub fn with_navigation(
        store: &'s ContentStore,
        navigation: NavigationList,
        default_page: impl Into<PageId>,
        display: D,
        location: L,
    ) -> Self {
        Self {
            store,
            state: SessionState::new(navigation),
            renderer: PageRenderer::new(store, default_page, display),
            router: Router::new(location),
            search: SearchFilter::new(store),
        }
    }

    /// Attach the external syntax highlighter.
    #[must_use]
    pub fn with_highlighter(mut self, highlighter: Box<dyn Highlighter>) -> Self {
        self.renderer = self.renderer.with_highlighter(highlighter);
        self
    }

    /// Load the first page.
    ///
    /// A fragment naming a known page is rendered as-is, so reloading a
    /// URL reproduces its page. Otherwise the session navigates to the
    /// default page. Only the first call has an effect.
    pub fn start(&mut self) -> RenderOutcome {
        if self.router.state() == RouterState::Loaded {
            tracing::debug!("Session already started");
            return if self.state.current_page.is_some() {
                RenderOutcome::Rendered
            } else {
                RenderOutcome::NotFound
            };
        }
        self.router.mark_loaded();

        match self
            .router
            .current_page_id_from_location()
            .filter(|id| self.store.contains(id.as_str()))
        {
            Some(page_id) => self.renderer.render(page_id.as_str(), &mut self.state),
            None => {
                let default_page = self.renderer.default_page().clone();
                self.navigate(&default_page)
            }
        }
    }

    /// Show `page_id` and record it in the fragment.
    ///
    /// Unknown ids display the fallback view and leave the fragment and the
    /// current page untouched.
    pub fn navigate(&mut self, page_id: &PageId) -> RenderOutcome {
        if self.store.contains(page_id.as_str()) {
            self.router.push(page_id);
        }
        self.renderer.render(page_id.as_str(), &mut self.state)
    }

    /// Handle a click on a navigation entry.
    pub fn on_click(&mut self, page_id: &PageId) -> RenderOutcome {
        self.navigate(page_id)
    }

    /// Handle a change of the search input.
    pub fn on_search_input(&mut self, query: &str) {
        self.search.apply_query(&mut self.state.navigation, query);
    }

    /// Handle a back/forward step to `fragment`.
    ///
    /// Empty or unknown fragments are ignored; the page on screen stays.
    pub fn on_history_change(&mut self, fragment: &str) -> Option<RenderOutcome> {
        let page_id = self.router.resolve_history_change(self.store, fragment)?;
        Some(self.renderer.render(page_id.as_str(), &mut self.state))
    }

    /// Route an event to its handler.
    ///
    /// Returns the render outcome for events that rendered something.
    pub fn dispatch(&mut self, event: UiEvent) -> Option<RenderOutcome> {
        match event {
            UiEvent::Click(page_id) => Some(self.on_click(&page_id)),
            UiEvent::SearchInput(query) => {
                self.on_search_input(&query);
                None
            }
            UiEvent::HistoryChange(fragment) => self.on_history_change(&fragment),
        }
    }

    /// Page currently on screen.
    #[must_use]
    pub fn current_page(&self) -> Option<&PageId> {
        self.state.current_page.as_ref()
    }

    /// Session state.
    #[must_use]
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Navigation list.
    #[must_use]
    pub fn navigation(&self) -> &NavigationList {
        &self.state.navigation
    }

    /// Routing lifecycle state.
    #[must_use]
    pub fn router_state(&self) -> RouterState {
        self.router.state()
    }

    /// The display surface.
    #[must_use]
    pub fn display(&self) -> &D {
        self.renderer.display()
    }

    /// The location surface.
    #[must_use]
    pub fn location(&self) -> &L {
        self.router.location()
    }

    /// Mutable access to the location surface, for hosts driving history.
    pub fn location_mut(&mut self) -> &mut L {
        self.router.location_mut()
    }
}

#[cfg(test)]
mod tests {
    use mw_content::ContentStoreBuilder;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::memory::{MemoryDisplay, MemoryLocation, RecordingHighlighter};
    use crate::navigation::NavigationEntry;

    fn sample_store() -> ContentStore {
        ContentStoreBuilder::new()
            .with_page(
                "intro",
                "Introduction to FHIR",
                "<h1>Introduction to FHIR</h1><p>FHIR is a standard.</p>",
            )
            .with_page(
                "glossary",
                "Glossary",
                "<h1>Glossary</h1><p>Bundle: a collection of resources.</p>",
            )
            .build()
    }

    fn visible_ids<D, L>(session: &Session<'_, D, L>) -> Vec<String>
    where
        D: DisplaySurface,
        L: LocationSurface,
    {
        session
            .navigation()
            .visible()
            .map(|e| e.page_id.to_string())
            .collect()
    }

    #[test]
    fn test_start_without_fragment_loads_default() {
        let store = sample_store();
        let mut session = Session::new(&store, MemoryDisplay::new(), MemoryLocation::new());
        assert_eq!(session.router_state(), RouterState::Unloaded);

        let outcome = session.start();

        assert_eq!(outcome, RenderOutcome::Rendered);
        assert_eq!(session.router_state(), RouterState::Loaded);
        assert_eq!(session.current_page().unwrap(), "intro");
        assert_eq!(session.navigation().active().unwrap().page_id, "intro");
        assert_eq!(session.location().fragment(), "intro");
    }

    #[test]
    fn test_start_with_known_fragment_reproduces_page() {
        let store = sample_store();
        let mut session = Session::new(
            &store,
            MemoryDisplay::new(),
            MemoryLocation::with_fragment("glossary"),
        );

        session.start();

        assert_eq!(session.current_page().unwrap(), "glossary");
        assert!(session.display().html().contains("Bundle"));
        assert_eq!(session.location().history(), &["glossary".to_owned()]);
    }

    #[test]
    fn test_start_with_unknown_fragment_loads_default() {
        let store = sample_store();
        let mut session = Session::new(
            &store,
            MemoryDisplay::new(),
            MemoryLocation::with_fragment("missing"),
        );

        session.start();

        assert_eq!(session.current_page().unwrap(), "intro");
        assert_eq!(session.location().fragment(), "intro");
    }

    #[test]
    fn test_start_twice_does_not_renavigate() {
        let store = sample_store();
        let mut session = Session::new(&store, MemoryDisplay::new(), MemoryLocation::new());
        session.start();
        session.dispatch(UiEvent::Click("glossary".into()));

        session.start();

        assert_eq!(session.current_page().unwrap(), "glossary");
        assert_eq!(session.display().writes(), 2);
    }

    #[test]
    fn test_click_navigates_and_writes_fragment() {
        let store = sample_store();
        let mut session = Session::new(&store, MemoryDisplay::new(), MemoryLocation::new());
        session.start();

        let outcome = session.dispatch(UiEvent::Click("glossary".into()));

        assert_eq!(outcome, Some(RenderOutcome::Rendered));
        assert_eq!(session.location().fragment(), "glossary");
        assert_eq!(
            session.display().html(),
            store.get("glossary").unwrap().body
        );
        assert_eq!(session.navigation().active().unwrap().page_id, "glossary");
    }

    #[test]
    fn test_click_unknown_keeps_last_valid_page() {
        let store = sample_store();
        let mut session = Session::new(&store, MemoryDisplay::new(), MemoryLocation::new());
        session.start();

        let outcome = session.dispatch(UiEvent::Click("missing".into()));

        assert_eq!(outcome, Some(RenderOutcome::NotFound));
        assert!(session.display().html().contains("Page Not Found"));
        assert_eq!(session.current_page().unwrap(), "intro");
        assert_eq!(session.location().fragment(), "intro");
        assert_eq!(session.navigation().active().unwrap().page_id, "intro");
    }

    #[test]
    fn test_history_change_renders_known_page() {
        let store = sample_store();
        let mut session = Session::new(&store, MemoryDisplay::new(), MemoryLocation::new());
        session.start();
        session.dispatch(UiEvent::Click("glossary".into()));

        let fragment = session.location_mut().back().unwrap();
        let outcome = session.dispatch(UiEvent::HistoryChange(fragment));

        assert_eq!(outcome, Some(RenderOutcome::Rendered));
        assert_eq!(session.current_page().unwrap(), "intro");
        assert_eq!(session.location().history().len(), 2);
    }

    #[test]
    fn test_history_change_ignores_empty_and_unknown() {
        let store = sample_store();
        let mut session = Session::new(&store, MemoryDisplay::new(), MemoryLocation::new());
        session.start();
        let writes = session.display().writes();

        assert_eq!(session.dispatch(UiEvent::HistoryChange(String::new())), None);
        assert_eq!(
            session.dispatch(UiEvent::HistoryChange("missing".to_owned())),
            None
        );

        assert_eq!(session.display().writes(), writes);
        assert_eq!(session.current_page().unwrap(), "intro");
    }

    #[test]
    fn test_search_then_render_end_to_end() {
        let store = sample_store();
        let mut session = Session::new(&store, MemoryDisplay::new(), MemoryLocation::new());
        session.start();

        session.dispatch(UiEvent::SearchInput("bundle".to_owned()));
        assert_eq!(visible_ids(&session), vec!["glossary"]);

        session.dispatch(UiEvent::Click("glossary".into()));
        assert_eq!(session.location().fragment(), "glossary");
        assert_eq!(session.navigation().active().unwrap().page_id, "glossary");

        // Reload: a fresh session opened at the persisted fragment.
        let reload_fragment = session.location().fragment();
        let mut reloaded = Session::new(
            &store,
            MemoryDisplay::new(),
            MemoryLocation::with_fragment(reload_fragment),
        );
        reloaded.start();

        assert_eq!(reloaded.display().html(), session.display().html());
        assert_eq!(reloaded.current_page(), session.current_page());
    }

    #[test]
    fn test_search_does_not_change_current_page() {
        let store = sample_store();
        let mut session = Session::new(&store, MemoryDisplay::new(), MemoryLocation::new());
        session.start();

        session.dispatch(UiEvent::SearchInput("BUNDLE".to_owned()));

        assert_eq!(session.current_page().unwrap(), "intro");
        assert_eq!(session.location().fragment(), "intro");
        session.dispatch(UiEvent::SearchInput(String::new()));
        assert_eq!(visible_ids(&session), vec!["intro", "glossary"]);
    }

    #[test]
    fn test_sessions_are_independent() {
        let store = sample_store();
        let mut first = Session::new(&store, MemoryDisplay::new(), MemoryLocation::new());
        let mut second = Session::new(&store, MemoryDisplay::new(), MemoryLocation::new());
        first.start();
        second.start();

        first.dispatch(UiEvent::Click("glossary".into()));
        first.dispatch(UiEvent::SearchInput("bundle".to_owned()));

        assert_eq!(second.current_page().unwrap(), "intro");
        assert_eq!(visible_ids(&second), vec!["intro", "glossary"]);
    }

    #[test]
    fn test_custom_navigation_and_default_page() {
        let store = sample_store();
        let navigation = NavigationList::new([
            NavigationEntry::new("glossary", "Terms"),
            NavigationEntry::new("intro", "Start here"),
        ]);
        let mut session = Session::with_navigation(
            &store,
            navigation,
            "glossary",
            MemoryDisplay::new(),
            MemoryLocation::new(),
        );

        session.start();

        assert_eq!(session.current_page().unwrap(), "glossary");
        assert_eq!(session.navigation().active().unwrap().label, "Terms");
    }

    #[test]
    fn test_highlighter_runs_on_each_render() {
        let store = sample_store();
        let highlighter = RecordingHighlighter::new();
        let mut session = Session::new(&store, MemoryDisplay::new(), MemoryLocation::new())
            .with_highlighter(Box::new(highlighter.clone()));

        session.start();
        session.dispatch(UiEvent::Click("glossary".into()));

        assert_eq!(highlighter.calls(), 2);
    }

    #[test]
    fn test_default_page_missing_from_store_shows_fallback() {
        let store = sample_store();
        let mut session = Session::with_navigation(
            &store,
            NavigationList::from_store(&store),
            "home",
            MemoryDisplay::new(),
            MemoryLocation::new(),
        );

        let outcome = session.start();

        assert_eq!(outcome, RenderOutcome::NotFound);
        assert!(session.current_page().is_none());
        assert_eq!(session.location().fragment(), "");
    }
}
