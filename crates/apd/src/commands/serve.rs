//! `apd serve` command implementation.

use std::path::PathBuf;

use clap::Args;

use apd_config::{CliSettings, Config};
use apd_server::{run_server, server_config_from_config};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the serve command.
#[derive(Args)]
pub(crate) struct ServeArgs {
    /// Path to configuration file (default: auto-discover apd.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Content directory holding document page sources (overrides config).
    #[arg(short = 'd', long)]
    content_dir: Option<PathBuf>,

    /// Host to bind to (overrides config).
    #[arg(long)]
    host: Option<String>,

    /// Port to bind to (overrides config).
    #[arg(short, long)]
    port: Option<u16>,

    /// Download button target url (overrides config).
    #[arg(long, env = "APD_DOWNLOAD_URL")]
    download_url: Option<String>,

    /// Enable verbose output (per-request logs).
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

        // A navigation defect is a packaging error; refuse to start on one
        apd_nav::validate(apd_nav::NAV)?;

        // Build CLI settings from args
        let cli_settings = CliSettings {
            host: self.host,
            port: self.port,
            content_dir: self.content_dir,
            download_url: self.download_url,
        };

        // Load config
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        // Print startup info
        output.info(&format!(
            "Starting server on {}:{}",
            config.server.host, config.server.port
        ));
        output.info(&format!(
            "Content directory: {}",
            config.content_dir.display()
        ));
        if let Some(url) = &config.site.download_url {
            output.info(&format!("Download url: {url}"));
        }

        // Build server config and run
        let server_config = server_config_from_config(&config, version.to_owned(), self.verbose);
        run_server(server_config)
            .await
            .map_err(|e| CliError::Server(e.to_string()))?;

        Ok(())
    }
}
