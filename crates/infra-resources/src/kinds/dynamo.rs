use std::collections::BTreeMap;

use serde::Deserialize;

use crate::catalog::Catalog;
use crate::error::ResourceError;
use crate::kinds::AwsSession;
use crate::resource::{Definition, Resource, resource_accessors};

/// DynamoDB access through an AWS session.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Dynamo {
    #[serde(flatten)]
    pub resource: Resource,
    pub session: AwsSession,
}

impl Definition for Dynamo {
    const KIND: &'static str = "dynamo";
    const PATH: &'static [&'static str] = &["storage", "dynamo"];

    resource_accessors!();

    fn entries(catalog: &Catalog) -> &BTreeMap<String, Self> {
        &catalog.storage.dynamo
    }

    fn check(&self) -> Result<(), ResourceError> {
        self.session.validate()
    }
}
