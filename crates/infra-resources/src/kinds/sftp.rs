use std::collections::BTreeMap;

use serde::Deserialize;

use crate::catalog::Catalog;
use crate::error::ResourceError;
use crate::resource::{Definition, Resource, resource_accessors};

/// Default SFTP port applied when none is configured.
pub const DEFAULT_PORT: u16 = 22;

/// SFTP server.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Sftp {
    #[serde(flatten)]
    pub resource: Resource,
    pub host: String,
    #[serde(deserialize_with = "crate::lenient::deserialize")]
    pub port: u16,
    pub user: String,
    pub pass: String,
    pub private_key: PrivateKey,
    pub host_key: String,
}

/// Private key given inline (`value`) or by file (`path`), never both.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PrivateKey {
    pub value: String,
    pub path: String,
    pub passphrase: String,
}

impl PrivateKey {
    fn is_configured(&self) -> bool {
        !self.value.is_empty() || !self.path.is_empty()
    }
}

impl Definition for Sftp {
    const KIND: &'static str = "sftp";
    const PATH: &'static [&'static str] = &["storage", "sftp"];

    resource_accessors!();

    fn entries(catalog: &Catalog) -> &BTreeMap<String, Self> {
        &catalog.storage.sftp
    }

    fn apply_defaults(&mut self) {
        if self.port == 0 {
            self.port = DEFAULT_PORT;
        }
    }

    fn check(&self) -> Result<(), ResourceError> {
        if self.host.is_empty() {
            return Err(ResourceError::invalid(Self::KIND, "no host defined"));
        }
        if self.user.is_empty() {
            return Err(ResourceError::invalid(Self::KIND, "no user defined"));
        }
        if self.pass.is_empty() && !self.private_key.is_configured() {
            return Err(ResourceError::invalid(Self::KIND, "no pass/private_key defined"));
        }
        if !self.private_key.passphrase.is_empty() && !self.private_key.is_configured() {
            return Err(ResourceError::invalid(
                Self::KIND,
                "passphrase provided but no private key or path to a private key file was defined",
            ));
        }
        if !self.private_key.value.is_empty() && !self.private_key.path.is_empty() {
            return Err(ResourceError::invalid(
                Self::KIND,
                "private key must be either the value or path to the file containing the private key, can not have both configured",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case::password(json!({"host": "h", "user": "u", "pass": "p"}), None)]
    #[case::key_value(json!({"host": "h", "user": "u", "private_key": {"value": "KEY"}}), None)]
    #[case::key_path_with_passphrase(
        json!({"host": "h", "user": "u", "private_key": {"path": "/k", "passphrase": "x"}}),
        None
    )]
    #[case::no_host(json!({"user": "u", "pass": "p"}), Some("no host defined"))]
    #[case::no_user(json!({"host": "h", "pass": "p"}), Some("no user defined"))]
    #[case::no_secret(json!({"host": "h", "user": "u"}), Some("no pass/private_key defined"))]
    #[case::passphrase_without_key(
        json!({"host": "h", "user": "u", "pass": "p", "private_key": {"passphrase": "x"}}),
        Some("passphrase provided")
    )]
    #[case::both_key_forms(
        json!({"host": "h", "user": "u", "private_key": {"value": "KEY", "path": "/k"}}),
        Some("can not have both")
    )]
    fn test_validate(#[case] doc: serde_json::Value, #[case] expected: Option<&str>) {
        let sftp: Sftp = serde_json::from_value(doc).unwrap();
        match (sftp.validate(), expected) {
            (Ok(()), None) => {}
            (Err(err), Some(fragment)) => {
                assert!(err.to_string().contains(fragment), "{err}");
            }
            (result, expected) => panic!("got {result:?}, expected {expected:?}"),
        }
    }

    #[test]
    fn test_default_port() {
        let sftp: Sftp = serde_json::from_value(json!({"host": "h", "user": "u", "pass": "p"})).unwrap();
        assert_eq!(sftp.sanitize().port, 22);
    }
}
