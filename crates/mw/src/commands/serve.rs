//! `mw serve` command implementation.

use std::path::PathBuf;

use clap::Args;
use mw_config::{CliSettings, Config};
use mw_content::ContentStore;
use mw_server::{run_server, server_config_from_mw_config};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the serve command.
#[derive(Args)]
pub(crate) struct ServeArgs {
    /// Path to configuration file (default: auto-discover mapwiki.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Host to bind to (overrides config).
    #[arg(long)]
    host: Option<String>,

    /// Port to bind to (overrides config).
    #[arg(short, long)]
    port: Option<u16>,

    /// Page shown when the URL has no fragment (overrides config).
    #[arg(long)]
    default_page: Option<String>,

    /// Enable syntax highlighting (default: enabled).
    #[arg(long)]
    highlight: Option<bool>,

    /// Disable syntax highlighting.
    #[arg(long, conflicts_with = "highlight")]
    no_highlight: bool,

    /// Enable verbose output (request tracing and unknown-page warnings).
    #[arg(short, long)]
    pub verbose: bool,
}

impl ServeArgs {
    /// Execute the serve command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails or the server fails to start.
    pub(crate) async fn execute(self, version: &str) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            highlight: self.resolve_highlight(),
            host: self.host,
            port: self.port,
            default_page: self.default_page,
        };

        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        let store = ContentStore::builtin();
        config.validate_against(store)?;

        output.info(&format!(
            "Starting server on {}:{}",
            config.server.host, config.server.port
        ));
        if let Some(path) = &config.config_path {
            output.info(&format!("Config: {}", path.display()));
        }
        output.info(&format!(
            "Pages: {} (default: {})",
            store.len(),
            config.wiki.default_page
        ));
        if config.wiki.highlight {
            output.info("Syntax highlighting: enabled");
        } else {
            output.info("Syntax highlighting: disabled");
        }

        let server_config =
            server_config_from_mw_config(&config, version.to_owned(), self.verbose);
        run_server(server_config)
            .await
            .map_err(|e| CliError::Server(e.to_string()))?;

        Ok(())
    }

    /// Resolve `highlight` from --highlight/--no-highlight flags.
    fn resolve_highlight(&self) -> Option<bool> {
        self.no_highlight.then_some(false).or(self.highlight)
    }
}
