//! HTTP server for the AutoPBI documentation site.
//!
//! Serves server-rendered HTML pages plus a small JSON API:
//!
//! - `GET /{page}` - page rendered through the layout shell
//! - `GET /` - redirect to the first navigation entry
//! - `GET /api/navigation` - navigation table as JSON
//! - `GET /api/config` - version and download url
//! - `GET /assets/…` - stylesheet and scripts (via `apd-assets`)
//! - `GET /media/…` - carousel images and other content media
//!
//! # Static Asset Modes
//!
//! - **Development** (default): assets served from the `assets/` directory
//! - **Production** (`embed-assets` feature): assets embedded in the binary
//!
//! # Quick Start
//!
//! ```ignore
//! use std::path::PathBuf;
//! use apd_server::{ServerConfig, run_server};
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = ServerConfig {
//!         host: "127.0.0.1".to_string(),
//!         port: 8090,
//!         content_dir: PathBuf::from("content"),
//!         ..ServerConfig::default()
//!     };
//!
//!     run_server(config).await.unwrap();
//! }
//! ```

mod app;
mod error;
mod handlers;
mod middleware;
mod state;
mod static_files;

use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;

use apd_site::Site;
use state::AppState;

/// Server configuration.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Host address to bind to.
    pub host: String,
    /// Port to listen on.
    pub port: u16,
    /// Directory holding document page sources and media.
    pub content_dir: PathBuf,
    /// Header download button target (`None` uses the built-in url).
    pub download_url: Option<String>,
    /// Sidebar version label (`None` uses the application version).
    pub version_label: Option<String>,
    /// Application version (ETag seed and default version label).
    pub version: String,
    /// Enable verbose output.
    pub verbose: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_owned(),
            port: 8090,
            content_dir: PathBuf::from("content"),
            download_url: None,
            version_label: None,
            version: String::new(),
            verbose: false,
        }
    }
}

/// Run the server.
///
/// # Errors
///
/// Returns an error if the address is invalid or the server fails to start.
pub async fn run_server(config: ServerConfig) -> Result<(), Box<dyn std::error::Error>> {
    let mut site = Site::new(config.content_dir.clone());
    if let Some(url) = &config.download_url {
        site = site.with_download_url(url.clone());
    }
    if let Some(label) = &config.version_label {
        site = site.with_version(label.clone());
    } else if !config.version.is_empty() {
        site = site.with_version(config.version.clone());
    }

    let state = Arc::new(AppState {
        site,
        content_dir: config.content_dir.clone(),
        version: config.version.clone(),
        verbose: config.verbose,
    });

    let app = app::create_router(state);

    let addr = SocketAddr::from_str(&format!("{}:{}", config.host, config.port))?;
    tracing::info!(address = %addr, "Starting server");

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

/// Create server configuration from loaded application config.
#[must_use]
pub fn server_config_from_config(
    config: &apd_config::Config,
    version: String,
    verbose: bool,
) -> ServerConfig {
    ServerConfig {
        host: config.server.host.clone(),
        port: config.server.port,
        content_dir: config.content_dir.clone(),
        download_url: config.site.download_url.clone(),
        version_label: config.site.version_label.clone(),
        version,
        verbose,
    }
}
