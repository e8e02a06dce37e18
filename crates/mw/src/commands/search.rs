//! `mw search` command implementation.

use clap::Args;
use mw_content::ContentStore;
use mw_site::memory::{MemoryDisplay, MemoryLocation};
use mw_site::{Session, UiEvent};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the search command.
#[derive(Args)]
pub(crate) struct SearchArgs {
    /// Search query (case-insensitive, matched against titles and bodies).
    query: String,
}

impl SearchArgs {
    /// Execute the search command.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to stdout fails.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let matches = search(ContentStore::builtin(), &self.query);

        if matches.is_empty() {
            output.warning(&format!("No pages match \"{}\"", self.query));
            return Ok(());
        }
        output.highlight(&format!("{} page(s) match \"{}\"", matches.len(), self.query));
        for (page_id, label) in &matches {
            output.result(&format!("{page_id}  {label}"))?;
        }
        Ok(())
    }
}

/// Feed `query` into a session's search input and collect the visible entries.
fn search(store: &ContentStore, query: &str) -> Vec<(String, String)> {
    let mut session = Session::new(store, MemoryDisplay::new(), MemoryLocation::new());
    session.dispatch(UiEvent::SearchInput(query.to_owned()));
    session
        .navigation()
        .visible()
        .map(|entry| (entry.page_id.to_string(), entry.label.clone()))
        .collect()
}
