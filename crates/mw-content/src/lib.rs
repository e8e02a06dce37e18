//! Page content registry for mapwiki.
//!
//! This crate provides:
//! - [`PageRecord`]: a single page (id, title, opaque HTML body)
//! - [`ContentStore`]: the immutable, ordered mapping from page id to record
//! - [`ContentStore::builtin`]: the pages shipped with the wiki
//!
//! # Quick Start
//!
//! ```
//! use mw_content::{ContentStore, DEFAULT_PAGE_ID};
//!
//! let store = ContentStore::builtin();
//! let intro = store.get(DEFAULT_PAGE_ID).expect("intro page is shipped");
//! assert_eq!(intro.title, "Introduction to FHIR");
//! ```

mod builtin;
mod page;
mod store;

pub use builtin::DEFAULT_PAGE_ID;
pub use page::{PageId, PageRecord};
pub use store::{ContentStore, ContentStoreBuilder};
