//! Pages shipped with the wiki.
//!
//! Bodies live as HTML files under `pages/` and are compiled into the binary.

use std::sync::LazyLock;

use crate::page::PageRecord;
use crate::store::{ContentStore, ContentStoreBuilder};

/// Page shown when no other page is requested.
pub const DEFAULT_PAGE_ID: &str = "intro";

/// Static source table: (id, title, body), in navigation order.
const PAGES: &[(&str, &str, &str)] = &[
    (
        "intro",
        "Introduction to FHIR",
        include_str!("../pages/intro.html"),
    ),
    (
        "why-mapping",
        "Why FHIR Mapping?",
        include_str!("../pages/why-mapping.html"),
    ),
    (
        "quick-start",
        "Quick Start Guide",
        include_str!("../pages/quick-start.html"),
    ),
    (
        "resources",
        "FHIR Resources",
        include_str!("../pages/resources.html"),
    ),
    (
        "patient-mapping",
        "Patient Mapping",
        include_str!("../pages/patient-mapping.html"),
    ),
    (
        "structuremap",
        "StructureMap",
        include_str!("../pages/structuremap.html"),
    ),
    ("glossary", "Glossary", include_str!("../pages/glossary.html")),
];

static BUILTIN: LazyLock<ContentStore> = LazyLock::new(|| {
    let mut builder = ContentStoreBuilder::new();
    for &(id, title, body) in PAGES {
        builder.add_page(PageRecord::new(id, title, body));
    }
    let store = builder.build();
    tracing::debug!(pages = store.len(), "Built-in content store initialized");
    store
});

impl ContentStore {
    /// The process-wide store of shipped pages.
    ///
    /// Built on first access and shared for the rest of the process.
    #[must_use]
    pub fn builtin() -> &'static ContentStore {
        &BUILTIN
    }
}
