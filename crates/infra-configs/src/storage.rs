//! Databases, search engines, object stores and file servers

use infra_resources::{self as resources, ResourceProvider};
use serde::{Deserialize, Serialize};

use crate::bound::{Bootstrap, Bound};
use crate::error::Result;

/// Request timeout in seconds when the configured one is out of range.
pub const DEFAULT_TIMEOUT_SECS: i64 = 5;

/// Timeouts at or above this many seconds are replaced by the default.
pub const MAX_TIMEOUT_SECS: i64 = 300;

/// Implements [`Bootstrap`] for a configuration whose only state is `arn`
/// and the binding.
macro_rules! plain_bootstrap {
    ($config:ty, $resource:ty) => {
        impl Bootstrap for $config {
            type Resource = $resource;

            fn bootstrap(&mut self, provider: &dyn ResourceProvider) -> Result<()> {
                self.bound.bind(provider, &self.arn)?;
                Ok(())
            }

            fn bound(&self) -> &Bound<Self::Resource> {
                &self.bound
            }
        }
    };
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Algolia {
    pub arn: String,
    #[serde(skip)]
    bound: Bound<resources::Algolia>,
}

impl Algolia {
    /// Index name with the application's prefix, empty before bootstrap.
    pub fn index_name_for(&self, index: &str) -> String {
        self.bound.map_or_default(|a| a.index_name_for(index))
    }
}

plain_bootstrap!(Algolia, resources::Algolia);

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ElasticsearchParams {
    /// Request timeout in seconds.
    #[serde(deserialize_with = "infra_resources::lenient::deserialize")]
    pub timeout: i64,
    #[serde(deserialize_with = "infra_resources::lenient::deserialize")]
    pub max_idle_connections: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Elasticsearch {
    pub arn: String,
    pub params: ElasticsearchParams,
    #[serde(skip)]
    bound: Bound<resources::Elasticsearch>,
}

impl Bootstrap for Elasticsearch {
    type Resource = resources::Elasticsearch;

    fn bootstrap(&mut self, provider: &dyn ResourceProvider) -> Result<()> {
        self.bound.bind(provider, &self.arn)?;
        if !(1..MAX_TIMEOUT_SECS).contains(&self.params.timeout) {
            self.params.timeout = DEFAULT_TIMEOUT_SECS;
        }
        Ok(())
    }

    fn bound(&self) -> &Bound<Self::Resource> {
        &self.bound
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Redis {
    pub arn: String,
    #[serde(skip)]
    bound: Bound<resources::Redis>,
}

plain_bootstrap!(Redis, resources::Redis);

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct S3 {
    pub arn: String,
    #[serde(skip)]
    bound: Bound<resources::S3>,
}

plain_bootstrap!(S3, resources::S3);

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Dynamo {
    pub arn: String,
    #[serde(skip)]
    bound: Bound<resources::Dynamo>,
}

plain_bootstrap!(Dynamo, resources::Dynamo);

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Sftp {
    pub arn: String,
    #[serde(skip)]
    bound: Bound<resources::Sftp>,
}

plain_bootstrap!(Sftp, resources::Sftp);
