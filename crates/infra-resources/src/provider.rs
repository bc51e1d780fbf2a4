//! The provider surface consumed by bound configurations

use crate::locator::Locator;

/// What a bound configuration needs from its provider at bootstrap time.
pub trait ResourceProvider {
    fn locator(&self) -> &Locator;

    fn environment(&self) -> &str;

    fn system_name(&self) -> &str;

    fn component_name(&self) -> &str;

    /// Render `template` against the provider's context, returning it
    /// unchanged when rendering fails.
    fn render_secret(&self, template: &str) -> String;
}
