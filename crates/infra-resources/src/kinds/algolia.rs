use std::collections::BTreeMap;

use serde::Deserialize;

use crate::catalog::Catalog;
use crate::error::ResourceError;
use crate::resource::{Definition, Resource, resource_accessors};

/// Algolia search application.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Algolia {
    #[serde(flatten)]
    pub resource: Resource,
    pub application_id: String,
    pub api_key: String,
    pub index_prefix: String,
}

impl Algolia {
    /// Final index name for `index` using the configured prefix.
    pub fn index_name_for(&self, index: &str) -> String {
        format!("{}{}", self.index_prefix, index)
    }
}

impl Definition for Algolia {
    const KIND: &'static str = "algolia";
    const PATH: &'static [&'static str] = &["storage", "algolia"];

    resource_accessors!();

    fn entries(catalog: &Catalog) -> &BTreeMap<String, Self> {
        &catalog.storage.algolia
    }

    fn check(&self) -> Result<(), ResourceError> {
        if self.application_id.is_empty() {
            return Err(ResourceError::invalid(Self::KIND, "empty application id"));
        }
        if self.api_key.is_empty() {
            return Err(ResourceError::invalid(Self::KIND, "empty api key"));
        }
        if self.index_prefix.is_empty() {
            return Err(ResourceError::invalid(Self::KIND, "index prefix is empty"));
        }
        Ok(())
    }
}
