use std::collections::BTreeMap;

use serde::Deserialize;

use crate::catalog::Catalog;
use crate::error::ResourceError;
use crate::resource::{Definition, Resource, resource_accessors};

/// Remote HTTP service.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Webservice {
    #[serde(flatten)]
    pub resource: Resource,
    #[serde(rename = "url")]
    pub base_url: String,
    pub headers: BTreeMap<String, String>,
    pub authorisation: Authorisation,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Authorisation {
    #[serde(rename = "type")]
    pub kind: String,
    pub key: String,
}

impl Definition for Webservice {
    const KIND: &'static str = "webservice";
    const PATH: &'static [&'static str] = &["webservices"];

    resource_accessors!();

    fn entries(catalog: &Catalog) -> &BTreeMap<String, Self> {
        &catalog.webservices
    }

    fn check(&self) -> Result<(), ResourceError> {
        if self.base_url.is_empty() {
            return Err(ResourceError::invalid(Self::KIND, "empty url"));
        }
        Ok(())
    }
}
