use std::collections::BTreeMap;

use serde::Deserialize;

use crate::catalog::Catalog;
use crate::error::ResourceError;
use crate::resource::{Definition, Resource, resource_accessors};

/// Elasticsearch cluster.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Elasticsearch {
    #[serde(flatten)]
    pub resource: Resource,
    pub hosts: Vec<String>,
    pub username: String,
    pub password: String,
    pub index_prefix: String,
}

impl Definition for Elasticsearch {
    const KIND: &'static str = "elasticsearch";
    const PATH: &'static [&'static str] = &["storage", "elasticsearch"];

    resource_accessors!();

    fn entries(catalog: &Catalog) -> &BTreeMap<String, Self> {
        &catalog.storage.elasticsearch
    }

    fn check(&self) -> Result<(), ResourceError> {
        if self.hosts.is_empty() {
            return Err(ResourceError::invalid(Self::KIND, "no hosts configured"));
        }
        Ok(())
    }
}
