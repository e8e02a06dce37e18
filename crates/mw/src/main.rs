//! mapwiki CLI - FHIR mapping documentation wiki.
//!
//! Provides commands for:
//! - `serve`: Start the wiki server
//! - `pages`: List the available pages
//! - `render`: Print a page's HTML as a browsing session would display it
//! - `search`: List the navigation entries matching a query

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{PagesArgs, RenderArgs, SearchArgs, ServeArgs};
use output::Output;

/// Application version from Cargo.toml.
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// mapwiki - FHIR mapping documentation wiki.
#[derive(Parser)]
#[command(name = "mw", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the wiki server.
    Serve(ServeArgs),
    /// List the available pages.
    Pages(PagesArgs),
    /// Print the HTML displayed for a page.
    Render(RenderArgs),
    /// List the navigation entries matching a query.
    Search(SearchArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    let verbose = matches!(&cli.command, Commands::Serve(args) if args.verbose);

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Serve(args) => {
            let rt = tokio::runtime::Runtime::new().expect("Failed to create tokio runtime");
            rt.block_on(args.execute(VERSION))
        }
        Commands::Pages(args) => args.execute(),
        Commands::Render(args) => args.execute(),
        Commands::Search(args) => args.execute(),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
