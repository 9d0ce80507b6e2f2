//! CLI error types.

use nb_config::ConfigError;
use nb_nav::ValidationError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("{0}")]
    Json(#[from] serde_json::Error),

    #[error("Document not in navigation: {0}")]
    NotInNavigation(String),
}
