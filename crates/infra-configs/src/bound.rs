//! The bootstrap lifecycle shared by every bound configuration

use infra_resources::{Definition, ResourceProvider};
use tracing::debug;

use crate::error::{Error, Result};

/// A catalog definition resolved for one configuration.
///
/// Starts unbound. A successful [`Bound::bind`] stores the located definition
/// and the state never returns to unbound; a second bind is rejected.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Bound<R> {
    resource: R,
    arn: String,
    complete: bool,
}

impl<R: Definition> Bound<R> {
    /// Locate `arn` through the provider's locator and validate the result.
    pub fn bind(&mut self, provider: &dyn ResourceProvider, arn: &str) -> Result<&R> {
        self.bind_with(provider, arn, |_| Ok(()))
    }

    /// Like [`Bound::bind`], running `check` against the located definition
    /// before it is stored. A failed check leaves the binding untouched.
    pub fn bind_with<F>(&mut self, provider: &dyn ResourceProvider, arn: &str, check: F) -> Result<&R>
    where
        F: FnOnce(&R) -> std::result::Result<(), String>,
    {
        if self.complete {
            return Err(Error::AlreadyBootstrapped);
        }

        let resource: R = provider.locator().locate(arn);
        resource.validate().map_err(|source| Error::Resource {
            arn: arn.to_string(),
            source,
        })?;
        check(&resource).map_err(|message| Error::Invalid {
            arn: arn.to_string(),
            message,
        })?;

        debug!(arn, kind = R::KIND, "Configuration bootstrapped");
        self.resource = resource;
        self.arn = arn.to_string();
        self.complete = true;
        Ok(&self.resource)
    }

    /// [`Error::NotBootstrapped`] before binding, otherwise the definition's
    /// own validation.
    pub fn validate(&self) -> Result<()> {
        if !self.complete {
            return Err(Error::NotBootstrapped);
        }
        self.resource.validate().map_err(|source| Error::Resource {
            arn: self.arn.clone(),
            source,
        })
    }

    /// The bound definition, or its zero value before binding.
    pub fn resource(&self) -> &R {
        &self.resource
    }

    /// The identifier the definition was bound from; empty before binding.
    pub fn arn(&self) -> &str {
        &self.arn
    }

    pub fn get(&self) -> Option<&R> {
        self.complete.then_some(&self.resource)
    }

    pub fn is_bootstrapped(&self) -> bool {
        self.complete
    }

    /// Apply `derive` to the bound definition, or return `T::default()`
    /// before binding.
    pub fn map_or_default<T, F>(&self, derive: F) -> T
    where
        T: Default,
        F: FnOnce(&R) -> T,
    {
        self.get().map(derive).unwrap_or_default()
    }
}

/// Implemented by every configuration that names a catalog resource.
pub trait Bootstrap {
    type Resource: Definition;

    /// Resolve the configured identifier against `provider`.
    ///
    /// Runs at most once per instance; later calls fail with
    /// [`Error::AlreadyBootstrapped`].
    fn bootstrap(&mut self, provider: &dyn ResourceProvider) -> Result<()>;

    fn bound(&self) -> &Bound<Self::Resource>;

    fn validate(&self) -> Result<()> {
        self.bound().validate()
    }

    fn resource(&self) -> &Self::Resource {
        self.bound().resource()
    }

    fn is_bootstrapped(&self) -> bool {
        self.bound().is_bootstrapped()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::StubProvider;
    use infra_resources::{Postgres, ResourceError};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn provider() -> StubProvider {
        StubProvider::new(json!({
            "storage": {"postgres": {
                "mydb": {"host": "localhost", "user": "u", "database": "d"},
                "broken": {"host": "localhost"}
            }}
        }))
    }

    #[test]
    fn test_unbound_state() {
        let bound = Bound::<Postgres>::default();

        assert!(!bound.is_bootstrapped());
        assert_eq!(bound.get(), None);
        assert_eq!(bound.resource(), &Postgres::default());
        assert_eq!(bound.validate(), Err(Error::NotBootstrapped));
        assert_eq!(bound.map_or_default(Postgres::dsn), "");
    }

    #[test]
    fn test_bind_applies_resource_defaults() {
        let mut bound = Bound::<Postgres>::default();
        let pg = bound.bind(&provider(), "arn://storage/postgres/mydb").unwrap();

        assert_eq!(pg.port, 5432);
        assert!(bound.is_bootstrapped());
        assert_eq!(bound.arn(), "arn://storage/postgres/mydb");
        assert_eq!(bound.validate(), Ok(()));
        assert_eq!(bound.map_or_default(Postgres::dsn), "postgres://u:@localhost:5432/d");
    }

    #[test]
    fn test_second_bind_is_rejected() {
        let provider = provider();
        let mut bound = Bound::<Postgres>::default();
        bound.bind(&provider, "arn://storage/postgres/mydb").unwrap();

        let err = bound.bind(&provider, "arn://storage/postgres/mydb").unwrap_err();
        assert_eq!(err, Error::AlreadyBootstrapped);
    }

    #[test]
    fn test_bind_unknown_resource() {
        let mut bound = Bound::<Postgres>::default();
        let err = bound.bind(&provider(), "arn://storage/postgres/nope").unwrap_err();

        match err {
            Error::Resource { arn, source } => {
                assert_eq!(arn, "arn://storage/postgres/nope");
                assert!(source.is_not_found());
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(!bound.is_bootstrapped());
    }

    #[test]
    fn test_bind_invalid_resource() {
        let mut bound = Bound::<Postgres>::default();
        let err = bound.bind(&provider(), "arn://storage/postgres/broken").unwrap_err();

        assert_eq!(
            err,
            Error::Resource {
                arn: "arn://storage/postgres/broken".into(),
                source: ResourceError::invalid("postgres", "postgres database configuration undefined"),
            }
        );
    }

    #[test]
    fn test_failed_check_leaves_binding_empty() {
        let provider = provider();
        let mut bound = Bound::<Postgres>::default();

        let err = bound
            .bind_with(&provider, "arn://storage/postgres/mydb", |_| Err("nope".into()))
            .unwrap_err();
        assert!(matches!(err, Error::Invalid { ref message, .. } if message == "nope"));
        assert!(!bound.is_bootstrapped());

        assert!(bound.bind(&provider, "arn://storage/postgres/mydb").is_ok());
    }
}
