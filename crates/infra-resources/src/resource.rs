//! Base resource shape and the per-kind definition contract

use std::collections::BTreeMap;
use std::fmt;

use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::catalog::Catalog;
use crate::error::ResourceError;
use crate::params::Params;

/// Fields shared by every resource kind.
///
/// The error slot is filled by the locator and is never cleared once set,
/// so the first failure seen for a definition is the one reported.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Resource {
    /// Free-form classification such as `datacenter:us-west-1`.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Driver-specific parameters.
    #[serde(default)]
    pub params: Params,
    #[serde(skip)]
    error: Option<ResourceError>,
}

impl Resource {
    /// The located error, if any.
    pub fn error(&self) -> Option<&ResourceError> {
        self.error.as_ref()
    }

    /// Record `error` unless an earlier one is already present.
    pub fn fail(&mut self, error: ResourceError) {
        if self.error.is_none() {
            self.error = Some(error);
        }
    }
}

/// Contract implemented by every resource kind stored in the catalog.
pub trait Definition: Clone + Default + fmt::Debug + DeserializeOwned {
    /// Kind name used in error messages.
    const KIND: &'static str;

    /// Identifier path segments preceding the instance name.
    const PATH: &'static [&'static str];

    fn resource(&self) -> &Resource;

    fn resource_mut(&mut self) -> &mut Resource;

    /// The catalog section holding definitions of this kind.
    fn entries(catalog: &Catalog) -> &BTreeMap<String, Self>;

    /// Kind-specific structural checks.
    fn check(&self) -> Result<(), ResourceError> {
        Ok(())
    }

    /// Fill in defaults such as well-known ports.
    fn apply_defaults(&mut self) {}

    /// Report the stored error if present, otherwise run [`Definition::check`].
    fn validate(&self) -> Result<(), ResourceError> {
        if let Some(error) = self.resource().error() {
            return Err(error.clone());
        }
        self.check()
    }

    /// Apply defaults and record the validation outcome in the error slot.
    fn sanitize(mut self) -> Self {
        self.apply_defaults();
        if let Err(error) = self.validate() {
            self.resource_mut().fail(error);
        }
        self
    }

    /// A zero-value definition carrying `error`.
    fn faulty(error: ResourceError) -> Self {
        let mut definition = Self::default();
        definition.resource_mut().fail(error);
        definition
    }
}

/// Implements the accessor half of [`Definition`] for a struct with a
/// flattened `resource: Resource` field.
macro_rules! resource_accessors {
    () => {
        fn resource(&self) -> &$crate::resource::Resource {
            &self.resource
        }

        fn resource_mut(&mut self) -> &mut $crate::resource::Resource {
            &mut self.resource
        }
    };
}

pub(crate) use resource_accessors;
