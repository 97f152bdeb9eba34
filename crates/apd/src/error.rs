//! CLI error types.

use apd_config::ConfigError;
use apd_nav::NavError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("navigation table invalid: {0}")]
    Navigation(#[from] NavError),

    #[error("{0}")]
    Server(String),
}
