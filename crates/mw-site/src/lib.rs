//! Navigation, routing, rendering and search for mapwiki.
//!
//! This crate holds the wiki's browsing logic, decoupled from any concrete
//! UI through the surface traits in [`surface`]:
//! - [`Session`]: one browsing session, dispatching [`UiEvent`]s
//! - [`PageRenderer`]: writes page bodies into a [`DisplaySurface`]
//! - [`Router`]: keeps the displayed page in the URL fragment
//! - [`SearchFilter`]: substring filtering of the [`NavigationList`]
//!
//! # Quick Start
//!
//! ```
//! use mw_content::ContentStore;
//! use mw_site::memory::{MemoryDisplay, MemoryLocation};
//! use mw_site::surface::LocationSurface;
//! use mw_site::{Session, UiEvent};
//!
//! let store = ContentStore::builtin();
//! let mut session = Session::new(store, MemoryDisplay::new(), MemoryLocation::new());
//! session.start();
//! assert_eq!(session.current_page().map(|p| p.as_str()), Some("intro"));
//!
//! session.dispatch(UiEvent::Click("glossary".into()));
//! assert_eq!(session.location().fragment(), "glossary");
//! ```

pub mod memory;
mod navigation;
mod renderer;
mod router;
mod search;
mod session;
pub mod surface;

pub use navigation::{NavigationEntry, NavigationList};
pub use renderer::{PageRenderer, RenderOutcome, not_found_html};
pub use router::{Router, RouterState, decode_fragment, encode_fragment};
pub use search::SearchFilter;
pub use session::{Session, SessionState, UiEvent};
pub use surface::{DisplaySurface, HighlightError, Highlighter, LocationSurface};
