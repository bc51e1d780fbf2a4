//! Error types for infra-configs

use infra_resources::ResourceError;

/// Result type for bound configuration operations
pub type Result<T> = std::result::Result<T, Error>;

/// Lifecycle and validation errors of a bound configuration
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// `bootstrap` was called on a configuration that is already bound
    #[error("configuration already bootstrapped")]
    AlreadyBootstrapped,

    /// The configuration was used before `bootstrap`
    #[error("configuration not bootstrapped")]
    NotBootstrapped,

    /// The identifier did not resolve to a valid catalog definition
    #[error("could not locate infrastructure resource for {arn}: {source}")]
    Resource {
        arn: String,
        #[source]
        source: ResourceError,
    },

    /// The configuration's own parameters are unusable with the bound resource
    #[error("invalid configuration for {arn}: {message}")]
    Invalid { arn: String, message: String },
}

impl Error {
    /// True for [`Error::NotBootstrapped`].
    pub fn is_not_bootstrapped(&self) -> bool {
        matches!(self, Self::NotBootstrapped)
    }
}
