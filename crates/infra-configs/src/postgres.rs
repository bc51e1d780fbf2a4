//! PostgreSQL pools and notification listeners

use infra_resources::{self as resources, ResourceProvider};
use serde::{Deserialize, Serialize};

use crate::bound::{Bootstrap, Bound};
use crate::error::Result;

/// Idle connections kept when `max_idle_conns` is not positive.
pub const DEFAULT_MAX_IDLE_CONNS: i64 = 2;

/// Open connection cap when `max_open_conns` is not positive.
pub const DEFAULT_MAX_OPEN_CONNS: i64 = 10;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PostgresParams {
    #[serde(deserialize_with = "infra_resources::lenient::deserialize")]
    pub max_idle_conns: i64,
    #[serde(deserialize_with = "infra_resources::lenient::deserialize")]
    pub max_open_conns: i64,
}

/// A connection pool on a catalog PostgreSQL database.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Postgres {
    pub arn: String,
    pub params: PostgresParams,
    #[serde(skip)]
    bound: Bound<resources::Postgres>,
}

impl Postgres {
    pub fn new(arn: impl Into<String>) -> Self {
        Self {
            arn: arn.into(),
            ..Default::default()
        }
    }

    /// Connection string, empty before bootstrap.
    pub fn dsn(&self) -> String {
        self.bound.map_or_default(resources::Postgres::dsn)
    }

    /// Connection string with DSN parameters, empty before bootstrap.
    pub fn full_dsn(&self) -> String {
        self.bound.map_or_default(resources::Postgres::full_dsn)
    }
}

impl Bootstrap for Postgres {
    type Resource = resources::Postgres;

    fn bootstrap(&mut self, provider: &dyn ResourceProvider) -> Result<()> {
        self.bound.bind(provider, &self.arn)?;
        if self.params.max_idle_conns <= 0 {
            self.params.max_idle_conns = DEFAULT_MAX_IDLE_CONNS;
        }
        if self.params.max_open_conns <= 0 {
            self.params.max_open_conns = DEFAULT_MAX_OPEN_CONNS;
        }
        Ok(())
    }

    fn bound(&self) -> &Bound<Self::Resource> {
        &self.bound
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PostgresListenerParams {
    /// Channel passed to `LISTEN`.
    pub channel: String,
}

/// A `LISTEN` session on a catalog PostgreSQL database.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PostgresListener {
    pub arn: String,
    pub params: PostgresListenerParams,
    #[serde(skip)]
    bound: Bound<resources::Postgres>,
}

impl PostgresListener {
    pub fn channel(&self) -> &str {
        &self.params.channel
    }

    /// Connection string, empty before bootstrap.
    pub fn dsn(&self) -> String {
        self.bound.map_or_default(resources::Postgres::dsn)
    }
}

impl Bootstrap for PostgresListener {
    type Resource = resources::Postgres;

    fn bootstrap(&mut self, provider: &dyn ResourceProvider) -> Result<()> {
        let channel = &self.params.channel;
        self.bound.bind_with(provider, &self.arn, |_| {
            if channel.is_empty() {
                return Err("invalid channel".to_string());
            }
            Ok(())
        })?;
        Ok(())
    }

    fn bound(&self) -> &Bound<Self::Resource> {
        &self.bound
    }
}
