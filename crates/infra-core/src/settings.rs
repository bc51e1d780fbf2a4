//! Provider settings

use infra_fs::{Folder, NormalizedPath, SearchPath};
use serde::Deserialize;

use crate::error::{Error, Result};

/// Identity and search locations for a [`crate::Provider`].
///
/// The three identity fields are required. Empty folder lists fall back to
/// [`Folder::defaults`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ProviderSettings {
    /// Selects the infra catalog and the environment config overrides.
    pub env_name: String,
    pub system_name: String,
    pub component_name: String,
    /// Only variables starting with this prefix are visible to templates.
    /// Empty exposes the whole environment.
    pub env_var_prefix: String,
    pub cert_folders: Vec<String>,
    pub app_config_folders: Vec<String>,
    pub infra_config_folders: Vec<String>,
}

impl ProviderSettings {
    pub fn new(
        env_name: impl Into<String>,
        system_name: impl Into<String>,
        component_name: impl Into<String>,
    ) -> Self {
        Self {
            env_name: env_name.into(),
            system_name: system_name.into(),
            component_name: component_name.into(),
            ..Default::default()
        }
    }

    pub fn with_env_var_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.env_var_prefix = prefix.into();
        self
    }

    pub fn with_cert_folders<I: IntoIterator<Item = S>, S: Into<String>>(mut self, folders: I) -> Self {
        self.cert_folders = folders.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_app_config_folders<I: IntoIterator<Item = S>, S: Into<String>>(
        mut self,
        folders: I,
    ) -> Self {
        self.app_config_folders = folders.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_infra_config_folders<I: IntoIterator<Item = S>, S: Into<String>>(
        mut self,
        folders: I,
    ) -> Self {
        self.infra_config_folders = folders.into_iter().map(Into::into).collect();
        self
    }

    /// Fill empty folder lists with their defaults.
    pub fn sanitize(mut self) -> Self {
        for (folders, kind) in [
            (&mut self.app_config_folders, Folder::AppConfig),
            (&mut self.infra_config_folders, Folder::Infra),
            (&mut self.cert_folders, Folder::Certs),
        ] {
            if folders.is_empty() {
                *folders = kind.defaults();
            }
        }
        self
    }

    /// Check that every identity field is set.
    pub fn validate(&self) -> Result<()> {
        if self.env_name.is_empty() {
            return Err(Error::MissingSetting {
                setting: "environment name",
            });
        }
        if self.system_name.is_empty() {
            return Err(Error::MissingSetting {
                setting: "system name",
            });
        }
        if self.component_name.is_empty() {
            return Err(Error::MissingSetting {
                setting: "component name",
            });
        }
        Ok(())
    }

    pub fn app_config_path(&self) -> SearchPath {
        search_path(&self.app_config_folders)
    }

    pub fn infra_config_path(&self) -> SearchPath {
        search_path(&self.infra_config_folders)
    }

    pub fn cert_folders(&self) -> Vec<NormalizedPath> {
        self.cert_folders.iter().map(NormalizedPath::new).collect()
    }
}

fn search_path(folders: &[String]) -> SearchPath {
    SearchPath::new(folders.iter().map(NormalizedPath::new))
}
