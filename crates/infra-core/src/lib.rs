//! Configuration provider for infrastructure-aware services
//!
//! A [`Provider`] is built once at startup from [`ProviderSettings`]. It
//! renders and decodes the infra catalog for the active environment, builds
//! the certificate trust pool and then serves layered application config:
//!
//! 1. `<namespace>.json` - global values
//! 2. `<namespace>.<environment>.json` - environment overrides
//!
//! Every document is passed through the secret renderer before it is parsed,
//! so `{{ .Env.DB_PASSWORD }}` style placeholders may appear anywhere.
//!
//! # Example
//!
//! ```ignore
//! use infra_core::{Provider, ProviderSettings};
//!
//! let provider = Provider::new(ProviderSettings::new("prod", "billing", "api"))?;
//!
//! let mut config = AppConfig::default();
//! provider.load_config("app", &mut config)?;
//! ```

pub mod certs;
pub mod ecs;
pub mod env;
pub mod error;
pub mod loader;
pub mod logging;
pub mod provider;
pub mod render;
pub mod settings;

pub use certs::Certs;
pub use env::{EnvSource, MapEnv, ProcessEnv, get_from_env};
pub use error::{Error, Result};
pub use provider::Provider;
pub use render::{Context, RenderError, Template};
pub use settings::ProviderSettings;
