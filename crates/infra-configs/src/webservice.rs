//! HTTP clients for catalog web services

use infra_resources::{self as resources, ResourceProvider};
use serde::{Deserialize, Serialize};

use crate::bound::{Bootstrap, Bound};
use crate::error::Result;

/// Connection pool limits. Zero leaves the client default in place.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Connection {
    #[serde(deserialize_with = "infra_resources::lenient::deserialize")]
    pub max_idle: i64,
    #[serde(deserialize_with = "infra_resources::lenient::deserialize")]
    pub max_per_host: i64,
    /// Keep-alive in seconds.
    #[serde(deserialize_with = "infra_resources::lenient::deserialize")]
    pub keep_alive: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WebserviceParams {
    pub connection: Connection,
    /// Request timeout in seconds.
    #[serde(deserialize_with = "infra_resources::lenient::deserialize")]
    pub timeout: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Webservice {
    pub arn: String,
    pub params: WebserviceParams,
    #[serde(skip)]
    bound: Bound<resources::Webservice>,
}

impl Webservice {
    /// Base URL of the service, empty before bootstrap.
    pub fn url(&self) -> String {
        self.bound.map_or_default(|w| w.base_url.clone())
    }
}

impl Bootstrap for Webservice {
    type Resource = resources::Webservice;

    fn bootstrap(&mut self, provider: &dyn ResourceProvider) -> Result<()> {
        self.bound.bind(provider, &self.arn)?;
        Ok(())
    }

    fn bound(&self) -> &Bound<Self::Resource> {
        &self.bound
    }
}
