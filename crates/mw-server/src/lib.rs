//! HTTP server for the mapwiki documentation wiki.
//!
//! This crate provides a native Rust HTTP server using axum, serving:
//! - API endpoints for pages, navigation (with search) and client config
//! - Static files for the browser shell
//!
//! # Static Asset Modes
//!
//! - **Development** (default): Serves files from the `frontend` directory
//! - **Production** (`embed-assets` feature): Embeds assets in the binary
//!
//! # Quick Start
//!
//! ```ignore
//! use mw_server::{ServerConfig, run_server};
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = ServerConfig {
//!         port: 8080,
//!         ..ServerConfig::default()
//!     };
//!
//!     run_server(config).await.unwrap();
//! }
//! ```
//!
//! # Architecture
//!
//! ```text
//! Browser ──HTTP──► axum server (mw-server)
//!                        │
//!                        ├─► API routes
//!                        │       │
//!                        │       └─► ContentStore + SearchFilter (mw-content, mw-site)
//!                        │
//!                        └─► Static files (embedded or frontend/)
//! ```
//!
//! Routing state (the fragment, the active entry) lives in the browser; the
//! server is stateless over the immutable content store.

mod app;
mod error;
mod handlers;
mod middleware;
mod state;
mod static_files;

use std::net::SocketAddr;
use std::str::FromStr;
use std::sync::Arc;

use mw_content::{ContentStore, DEFAULT_PAGE_ID, PageId};
use state::AppState;

pub use error::ServerError;

/// Server configuration.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Host address to bind to.
    pub host: String,
    /// Port to listen on.
    pub port: u16,
    /// Page loaded by clients when the URL has no fragment.
    pub default_page: PageId,
    /// Whether clients run the syntax highlighter after each render.
    pub highlight: bool,
    /// Enable verbose output.
    pub verbose: bool,
    /// Application version (for cache invalidation).
    pub version: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_owned(),
            port: 7979,
            default_page: PageId::from(DEFAULT_PAGE_ID),
            highlight: true,
            verbose: false,
            version: String::new(),
        }
    }
}

/// Run the server until Ctrl-C.
///
/// # Errors
///
/// Returns an error if the default page is unknown or the server fails to start.
pub async fn run_server(config: ServerConfig) -> Result<(), Box<dyn std::error::Error>> {
    let store = ContentStore::builtin();
    if !store.contains(config.default_page.as_str()) {
        return Err(Box::new(ServerError::UnknownDefaultPage(
            config.default_page.clone(),
        )));
    }

    let state = Arc::new(AppState {
        store,
        default_page: config.default_page.clone(),
        highlight: config.highlight,
        verbose: config.verbose,
        version: config.version.clone(),
    });

    let app = app::create_router(state);

    let addr = SocketAddr::from_str(&format!("{}:{}", config.host, config.port))?;
    tracing::info!(address = %addr, pages = store.len(), "Starting server");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Wait for shutdown signal (Ctrl-C).
async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl+C handler");
    tracing::info!("Shutdown signal received, stopping server...");
}

/// Create server configuration from mapwiki config.
#[must_use]
pub fn server_config_from_mw_config(
    config: &mw_config::Config,
    version: String,
    verbose: bool,
) -> ServerConfig {
    ServerConfig {
        host: config.server.host.clone(),
        port: config.server.port,
        default_page: PageId::from(config.wiki.default_page.as_str()),
        highlight: config.wiki.highlight,
        verbose,
        version,
    }
}
