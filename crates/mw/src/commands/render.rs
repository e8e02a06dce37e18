//! `mw render` command implementation.
//!
//! Drives a browsing session over in-memory surfaces and prints whatever
//! ends up on the display.

use std::path::PathBuf;

use clap::Args;
use mw_config::{CliSettings, Config};
use mw_content::{ContentStore, PageId};
use mw_site::memory::{MemoryDisplay, MemoryLocation};
use mw_site::{NavigationList, RenderOutcome, Session};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the render command.
#[derive(Args)]
pub(crate) struct RenderArgs {
    /// Page id to render.
    page: String,

    /// Path to configuration file (default: auto-discover mapwiki.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Page linked from the not-found view (overrides config).
    #[arg(long)]
    default_page: Option<String>,
}

impl RenderArgs {
    /// Execute the render command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails or writing to stdout fails.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            default_page: self.default_page,
            ..CliSettings::default()
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        let store = ContentStore::builtin();
        config.validate_against(store)?;

        let (outcome, html) = render_page(store, &config.wiki.default_page, &self.page);
        if outcome == RenderOutcome::NotFound {
            output.warning(&format!("Unknown page: {}", self.page));
        }
        output.result(&html)?;
        Ok(())
    }
}

/// Navigate a fresh session to `page` and return the displayed HTML.
fn render_page(store: &ContentStore, default_page: &str, page: &str) -> (RenderOutcome, String) {
    let mut session = Session::with_navigation(
        store,
        NavigationList::from_store(store),
        default_page,
        MemoryDisplay::new(),
        MemoryLocation::new(),
    );
    let outcome = session.navigate(&PageId::from(page));
    (outcome, session.display().html().to_owned())
}
