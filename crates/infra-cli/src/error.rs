//! Error types for infra-cli

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur in CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Error from infra-core
    #[error(transparent)]
    Core(#[from] infra_core::Error),

    /// Error from infra-fs
    #[error(transparent)]
    Fs(#[from] infra_fs::Error),

    /// A template failed to render
    #[error("failed to render {path}: {source}")]
    Render {
        path: String,
        #[source]
        source: infra_core::RenderError,
    },

    /// Output could not be encoded
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// User-facing error with a message
    #[error("{message}")]
    User { message: String },
}

impl CliError {
    /// Create a new user error with the given message
    pub fn user(message: impl Into<String>) -> Self {
        Self::User {
            message: message.into(),
        }
    }
}
