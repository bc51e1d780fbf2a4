//! The configuration provider

use infra_fs::{NormalizedPath, SearchPath};
use infra_resources::{Catalog, Locator, ResourceProvider};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, info};

use crate::certs::Certs;
use crate::env::{self, EnvSource, ProcessEnv};
use crate::error::{Error, Result};
use crate::loader::{self, EXTENSION, Loader};
use crate::render::{self, Context, RenderError};
use crate::settings::ProviderSettings;

/// Infra catalog, trust pool and layered config access for one environment.
///
/// Built once at startup. Everything it holds is read-only afterwards, so a
/// shared reference can serve any number of readers.
#[derive(Debug)]
pub struct Provider {
    settings: ProviderSettings,
    context: Context,
    app_config: SearchPath,
    locator: Locator,
    resource_path: NormalizedPath,
    certs: Certs,
}

impl Provider {
    /// Build a provider against the process environment.
    pub fn new(settings: ProviderSettings) -> Result<Self> {
        Self::new_with_env(settings, &ProcessEnv)
    }

    /// Build a provider reading variables from `env`.
    ///
    /// Variables are captured once here; later changes are not seen.
    pub fn new_with_env(settings: ProviderSettings, env: &dyn EnvSource) -> Result<Self> {
        settings.validate()?;
        let settings = settings.sanitize();

        let context = Context::new(
            &settings.env_name,
            &settings.system_name,
            &settings.component_name,
        )
        .with_env(env::capture(env, &settings.env_var_prefix));

        let infra = settings.infra_config_path();
        let resource_path = infra
            .require(&format!("{}.{EXTENSION}", settings.env_name))
            .map_err(|source| Error::Infra { source })?;
        let document = Loader::new(&infra, &context).read(&resource_path)?;
        let catalog: Catalog = serde_json::from_value(document)
            .map_err(|e| Error::decode(resource_path.as_str(), e))?;
        let locator = Locator::new(catalog);

        let certs = Certs::load(&settings.cert_folders());

        info!(
            environment = %settings.env_name,
            path = %resource_path,
            resources = locator.identifiers().len(),
            trusted_roots = certs.root_store().len(),
            "Provider ready"
        );

        Ok(Self {
            app_config: settings.app_config_path(),
            settings,
            context,
            locator,
            resource_path,
            certs,
        })
    }

    pub fn locator(&self) -> &Locator {
        &self.locator
    }

    pub fn certs(&self) -> &Certs {
        &self.certs
    }

    /// Settings with folder defaults applied.
    pub fn settings(&self) -> &ProviderSettings {
        &self.settings
    }

    /// The infra file the catalog was read from.
    pub fn resource_path(&self) -> &NormalizedPath {
        &self.resource_path
    }

    pub fn environment(&self) -> &str {
        &self.settings.env_name
    }

    pub fn system_name(&self) -> &str {
        &self.settings.system_name
    }

    pub fn component_name(&self) -> &str {
        &self.settings.component_name
    }

    pub fn context(&self) -> &Context {
        &self.context
    }

    /// Render `text` strictly.
    pub fn render_secrets(&self, text: &str) -> std::result::Result<String, RenderError> {
        render::render(text, &self.context)
    }

    /// Render `text`, returning it unchanged when rendering fails.
    pub fn render_secret(&self, text: &str) -> String {
        render::render_best_effort(text, &self.context)
    }

    /// Load `<namespace>.json` then `<namespace>.<environment>.json` into `target`.
    ///
    /// Each layer overrides only the keys it names. Either file may be
    /// missing, but not both.
    pub fn load_config<T>(&self, namespace: &str, target: &mut T) -> Result<()>
    where
        T: Serialize + DeserializeOwned,
    {
        let layers = self.loader().namespace(namespace, self.environment())?;
        loader::apply(target, layers, namespace)
    }

    /// Load a single file into `target` with the same override rules.
    pub fn load_config_from_file<T>(&self, path: impl Into<NormalizedPath>, target: &mut T) -> Result<()>
    where
        T: Serialize + DeserializeOwned,
    {
        let path = path.into();
        let layer = self.loader().read(&path)?;
        loader::apply(target, [layer], path.as_str())
    }

    /// Render and load an in-memory document into `target`.
    pub fn load_config_from_template<T>(&self, template: &[u8], target: &mut T) -> Result<()>
    where
        T: Serialize + DeserializeOwned,
    {
        const ORIGIN: &str = "template";
        let text = std::str::from_utf8(template).map_err(|source| Error::Utf8 {
            origin: ORIGIN.to_string(),
            source,
        })?;
        let layer = self.loader().parse(ORIGIN, text)?;
        loader::apply(target, [layer], ORIGIN)
    }

    /// Accepted for interface compatibility. Configuration is never reloaded,
    /// so `callback` is dropped without being called.
    pub fn register_callback<F>(&self, callback: F)
    where
        F: Fn() + Send + Sync + 'static,
    {
        drop(callback);
        debug!("Configuration change callbacks are not supported, ignoring");
    }

    fn loader(&self) -> Loader<'_> {
        Loader::new(&self.app_config, &self.context)
    }
}

impl ResourceProvider for Provider {
    fn locator(&self) -> &Locator {
        &self.locator
    }

    fn environment(&self) -> &str {
        Provider::environment(self)
    }

    fn system_name(&self) -> &str {
        Provider::system_name(self)
    }

    fn component_name(&self) -> &str {
        Provider::component_name(self)
    }

    fn render_secret(&self, template: &str) -> String {
        Provider::render_secret(self, template)
    }
}
