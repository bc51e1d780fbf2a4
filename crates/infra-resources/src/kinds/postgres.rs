use std::collections::BTreeMap;

use serde::Deserialize;
use url::form_urlencoded;

use crate::catalog::Catalog;
use crate::error::ResourceError;
use crate::resource::{Definition, Resource, resource_accessors};

/// Default PostgreSQL port applied when none is configured.
pub const DEFAULT_PORT: u16 = 5432;

/// PostgreSQL database.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Postgres {
    #[serde(flatten)]
    pub resource: Resource,
    pub host: String,
    #[serde(deserialize_with = "crate::lenient::deserialize")]
    pub port: u16,
    pub database: String,
    pub user: String,
    pub password: String,
    /// Extra connection parameters appended to the DSN as `key=value`.
    pub dsn_params: BTreeMap<String, String>,
}

impl Postgres {
    /// Connection string with the password query-escaped.
    pub fn dsn(&self) -> String {
        let password: String = form_urlencoded::byte_serialize(self.password.as_bytes()).collect();
        format!(
            "postgres://{}:{}@{}:{}/{}",
            self.user, password, self.host, self.port, self.database
        )
    }

    /// [`Postgres::dsn`] followed by `?key=value&...` for every DSN parameter.
    pub fn full_dsn(&self) -> String {
        if self.dsn_params.is_empty() {
            return self.dsn();
        }
        let extra = self
            .dsn_params
            .iter()
            .map(|(key, value)| format!("{key}={value}"))
            .collect::<Vec<_>>()
            .join("&");
        format!("{}?{}", self.dsn(), extra)
    }
}

impl Definition for Postgres {
    const KIND: &'static str = "postgres";
    const PATH: &'static [&'static str] = &["storage", "postgres"];

    resource_accessors!();

    fn entries(catalog: &Catalog) -> &BTreeMap<String, Self> {
        &catalog.storage.postgres
    }

    fn apply_defaults(&mut self) {
        if self.port == 0 {
            self.port = DEFAULT_PORT;
        }
    }

    fn check(&self) -> Result<(), ResourceError> {
        if self.host.is_empty() {
            return Err(ResourceError::invalid(Self::KIND, "postgres host configuration undefined"));
        }
        if self.database.is_empty() {
            return Err(ResourceError::invalid(
                Self::KIND,
                "postgres database configuration undefined",
            ));
        }
        if self.user.is_empty() {
            return Err(ResourceError::invalid(Self::KIND, "postgres user configuration undefined"));
        }
        Ok(())
    }
}
