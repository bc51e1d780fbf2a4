use std::collections::BTreeMap;

use serde::Deserialize;

use crate::catalog::Catalog;
use crate::error::ResourceError;
use crate::resource::{Definition, Resource, resource_accessors};

/// Redis server, either addressed directly or through sentinels.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Redis {
    #[serde(flatten)]
    pub resource: Resource,
    #[serde(rename = "sentinels")]
    pub sentinel_addresses: Vec<String>,
    pub master_name: String,
    pub address: String,
    pub password: String,
    #[serde(deserialize_with = "crate::lenient::deserialize")]
    pub db: i64,
}

impl Definition for Redis {
    const KIND: &'static str = "redis";
    const PATH: &'static [&'static str] = &["storage", "redis"];

    resource_accessors!();

    fn entries(catalog: &Catalog) -> &BTreeMap<String, Self> {
        &catalog.storage.redis
    }

    fn check(&self) -> Result<(), ResourceError> {
        if self.address.is_empty()
            && (self.sentinel_addresses.is_empty() || self.master_name.is_empty())
        {
            return Err(ResourceError::invalid(
                Self::KIND,
                "no sentinels/master configured or no address specified",
            ));
        }
        Ok(())
    }
}
