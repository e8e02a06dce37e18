//! `mw pages` command implementation.

use std::path::PathBuf;

use clap::Args;
use mw_config::Config;
use mw_content::ContentStore;

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the pages command.
#[derive(Args)]
pub(crate) struct PagesArgs {
    /// Print page ids only.
    #[arg(short, long)]
    quiet: bool,

    /// Path to configuration file (default: auto-discover mapwiki.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,
}

impl PagesArgs {
    /// Execute the pages command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails or writing to stdout fails.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let config = Config::load(self.config.as_deref(), None)?;
        let store = ContentStore::builtin();
        config.validate_against(store)?;

        for line in page_lines(store, &config.wiki.default_page, self.quiet) {
            output.result(&line)?;
        }
        Ok(())
    }
}

/// Format one line per page in table-of-contents order, marking
/// `default_page` with `*`.
fn page_lines(store: &ContentStore, default_page: &str, quiet: bool) -> Vec<String> {
    let width = store.iter().map(|page| page.id.as_str().len()).max().unwrap_or(0);
    store
        .iter()
        .map(|page| {
            if quiet {
                page.id.to_string()
            } else {
                let marker = if page.id == default_page { "*" } else { " " };
                format!("{marker} {:<width$}  {}", page.id.as_str(), page.title)
            }
        })
        .collect()
}
