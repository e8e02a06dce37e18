//! CLI command implementations.

pub(crate) mod pages;
pub(crate) mod render;
pub(crate) mod search;
pub(crate) mod serve;

pub(crate) use pages::PagesArgs;
pub(crate) use render::RenderArgs;
pub(crate) use search::SearchArgs;
pub(crate) use serve::ServeArgs;
