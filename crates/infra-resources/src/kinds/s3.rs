use std::collections::BTreeMap;

use serde::Deserialize;

use crate::catalog::Catalog;
use crate::error::ResourceError;
use crate::kinds::AwsSession;
use crate::resource::{Definition, Resource, resource_accessors};

/// S3 bucket reached through an AWS session.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct S3 {
    #[serde(flatten)]
    pub resource: Resource,
    pub bucket: String,
    pub session: AwsSession,
}

impl Definition for S3 {
    const KIND: &'static str = "s3";
    const PATH: &'static [&'static str] = &["storage", "s3"];

    resource_accessors!();

    fn entries(catalog: &Catalog) -> &BTreeMap<String, Self> {
        &catalog.storage.s3
    }

    fn check(&self) -> Result<(), ResourceError> {
        if self.bucket.is_empty() {
            return Err(ResourceError::invalid(Self::KIND, "s3 bucket can not be empty"));
        }
        self.session.validate()
    }
}
