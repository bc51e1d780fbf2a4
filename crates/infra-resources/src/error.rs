//! Error types for infra-resources
//!
//! Both types are `Clone`: they are stored inside resource definitions,
//! which are copied out of the catalog on every lookup.

/// Errors produced while parsing a resource identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ArnError {
    #[error("identifier is empty")]
    Empty,

    #[error("identifier {arn} has {found} path entries, expected {min} to {max}")]
    Length {
        arn: String,
        found: usize,
        min: usize,
        max: usize,
    },

    #[error("expected identifier {arn} to contain [{expected}] at position {position}")]
    Mismatch {
        arn: String,
        expected: String,
        position: usize,
    },

    #[error("identifier {arn} has an empty instance name")]
    EmptyName { arn: String },
}

/// Errors carried in a resource definition's error slot.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResourceError {
    #[error("invalid identifier: {0}")]
    Identifier(#[from] ArnError),

    #[error("{kind} resource not found: {name}")]
    NotFound { kind: &'static str, name: String },

    #[error("invalid {kind} resource: {message}")]
    Invalid { kind: &'static str, message: String },
}

impl ResourceError {
    pub fn invalid(kind: &'static str, message: impl Into<String>) -> Self {
        Self::Invalid {
            kind,
            message: message.into(),
        }
    }

    /// True when the instance name did not match any catalog entry.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
