//! Error types for infra-core

use crate::render::RenderError;

/// Result type for infra-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while building a provider or loading configuration
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A required identity setting is empty
    #[error("invalid provider settings: could not determine {setting}")]
    MissingSetting { setting: &'static str },

    /// The infra catalog for the environment could not be found or read
    #[error("failed to read infrastructure definition: {source}")]
    Infra {
        #[source]
        source: infra_fs::Error,
    },

    /// A document failed to render
    #[error("failed to render {origin}: {source}")]
    Render {
        origin: String,
        #[source]
        source: RenderError,
    },

    /// A rendered document is not valid JSON or does not fit the target
    #[error("failed to decode {origin}: {source}")]
    Decode {
        origin: String,
        #[source]
        source: serde_json::Error,
    },

    /// An in-memory document is not UTF-8
    #[error("{origin} is not valid UTF-8: {source}")]
    Utf8 {
        origin: String,
        #[source]
        source: std::str::Utf8Error,
    },

    /// The target could not be converted into a merge base
    #[error("failed to prepare configuration target: {0}")]
    Encode(#[source] serde_json::Error),

    /// Neither the global nor the environment file exists for a namespace
    #[error("no configuration found for namespace {namespace}")]
    NoConfiguration { namespace: String },

    /// The TLS client configuration could not be built
    #[error("failed to build TLS client configuration: {0}")]
    Tls(#[source] rustls::Error),

    /// Filesystem error from infra-fs
    #[error(transparent)]
    Fs(#[from] infra_fs::Error),
}

impl Error {
    pub fn render(origin: impl Into<String>, source: RenderError) -> Self {
        Self::Render {
            origin: origin.into(),
            source,
        }
    }

    pub fn decode(origin: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Decode {
            origin: origin.into(),
            source,
        }
    }
}
