use std::collections::BTreeMap;

use serde::Deserialize;

use crate::catalog::Catalog;
use crate::resource::{Definition, Resource, resource_accessors};

/// Configuration for an AWS session.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct AwsSession {
    #[serde(flatten)]
    pub resource: Resource,
    pub endpoint: String,
    pub region: String,
    pub role: String,
    pub credentials: AwsCredentials,
    #[serde(deserialize_with = "crate::lenient::deserialize")]
    pub disable_ssl: bool,
    #[serde(rename = "force_path_style")]
    #[serde(deserialize_with = "crate::lenient::deserialize")]
    pub s3_force_path_style: bool,
    #[serde(deserialize_with = "crate::lenient::deserialize")]
    pub disable_endpoint_host_prefix: bool,
}

impl Definition for AwsSession {
    const KIND: &'static str = "aws session";
    const PATH: &'static [&'static str] = &["cloud", "aws"];

    resource_accessors!();

    fn entries(catalog: &Catalog) -> &BTreeMap<String, Self> {
        &catalog.cloud.aws
    }
}

/// Static credentials for an AWS session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AwsCredentials {
    pub access_key_id: String,
    pub secret_access_key: String,
    pub token: String,
}

impl AwsCredentials {
    /// True when no credential field is set.
    pub fn is_zero(&self) -> bool {
        self.access_key_id.is_empty() && self.secret_access_key.is_empty() && self.token.is_empty()
    }
}

/// Endpoint override used by queue and stream resources.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AwsEndpoint {
    pub endpoint: String,
    pub region: String,
}
