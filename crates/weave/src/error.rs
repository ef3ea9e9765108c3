//! CLI error types.

use weave_config::ConfigError;
use weave_sequence::RenderError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Render(#[from] RenderError),

    #[error("Invalid JSON input: {0}")]
    Json(#[from] serde_json::Error),
}
