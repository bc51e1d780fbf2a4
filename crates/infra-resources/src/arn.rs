//! Resource identifier parsing
//!
//! Identifiers look like `arn://<category>[/<subcategory>...]/<name>[/<role>]`.
//! The scheme is optional when parsing. Each resource kind fixes the
//! category path it expects; whatever follows must be a name, optionally
//! followed by a role.

use crate::error::ArnError;

/// Scheme conventionally prefixed to identifiers.
pub const SCHEME: &str = "arn://";

/// The instance part of a parsed identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Arn {
    /// Instance name, the catalog key.
    pub name: String,
    /// Optional role or sub-name following the instance name.
    pub role: Option<String>,
}

/// Parse `arn` against the expected category `path`.
pub fn parse(arn: &str, path: &[&str]) -> Result<Arn, ArnError> {
    if arn.is_empty() {
        return Err(ArnError::Empty);
    }
    let segments: Vec<&str> = arn.strip_prefix(SCHEME).unwrap_or(arn).split('/').collect();

    let min = path.len() + 1;
    let max = path.len() + 2;
    if segments.len() < min || segments.len() > max {
        return Err(ArnError::Length {
            arn: arn.to_string(),
            found: segments.len(),
            min,
            max,
        });
    }

    for (position, (expected, found)) in path.iter().zip(&segments).enumerate() {
        if expected != found {
            return Err(ArnError::Mismatch {
                arn: arn.to_string(),
                expected: (*expected).to_string(),
                position,
            });
        }
    }

    let name = segments[path.len()];
    if name.is_empty() {
        return Err(ArnError::EmptyName {
            arn: arn.to_string(),
        });
    }
    let role = segments
        .get(path.len() + 1)
        .filter(|role| !role.is_empty())
        .map(|role| role.to_string());

    Ok(Arn {
        name: name.to_string(),
        role,
    })
}

/// Build the canonical identifier for `name` under `path`.
pub fn format(path: &[&str], name: &str) -> String {
    let mut arn = String::from(SCHEME);
    for segment in path {
        arn.push_str(segment);
        arn.push('/');
    }
    arn.push_str(name);
    arn
}
