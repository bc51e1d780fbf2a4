//! Provider stub for unit tests

use infra_resources::{Locator, ResourceProvider};
use serde_json::Value;

/// A provider over an in-memory catalog with fixed identity.
pub(crate) struct StubProvider {
    locator: Locator,
}

impl StubProvider {
    pub(crate) fn new(catalog: Value) -> Self {
        Self {
            locator: Locator::from_json(&catalog.to_string()).unwrap(),
        }
    }
}

impl ResourceProvider for StubProvider {
    fn locator(&self) -> &Locator {
        &self.locator
    }

    fn environment(&self) -> &str {
        "test"
    }

    fn system_name(&self) -> &str {
        "sys"
    }

    fn component_name(&self) -> &str {
        "cmp"
    }

    fn render_secret(&self, template: &str) -> String {
        template.to_string()
    }
}
