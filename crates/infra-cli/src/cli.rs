//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use infra_core::ProviderSettings;

/// Inspect rendered infrastructure catalogs and layered configuration
#[derive(Parser, Debug)]
#[command(name = "infra")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(flatten)]
    pub identity: Identity,

    /// The command to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Provider identity and search locations
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct Identity {
    /// Environment name; selects `<env>.json` in the infra folders
    #[arg(short, long = "env", env = "INFRA_ENV", global = true)]
    pub env_name: Option<String>,

    /// System name available to templates as `.System`
    #[arg(short, long = "system", env = "INFRA_SYSTEM", global = true)]
    pub system_name: Option<String>,

    /// Component name available to templates as `.Component`
    #[arg(short, long = "component", env = "INFRA_COMPONENT", global = true)]
    pub component_name: Option<String>,

    /// Infra catalog folder (repeatable, first match wins)
    #[arg(long = "infra-dir", global = true)]
    pub infra_dirs: Vec<String>,

    /// Application config folder (repeatable, first match wins)
    #[arg(long = "config-dir", global = true)]
    pub config_dirs: Vec<String>,

    /// CA bundle folder (repeatable)
    #[arg(long = "certs-dir", global = true)]
    pub certs_dirs: Vec<String>,

    /// Only expose environment variables with this prefix to templates
    #[arg(long = "env-prefix", global = true, default_value = "")]
    pub env_prefix: String,
}

impl Identity {
    pub fn settings(&self) -> ProviderSettings {
        ProviderSettings::new(
            self.env_name.clone().unwrap_or_default(),
            self.system_name.clone().unwrap_or_default(),
            self.component_name.clone().unwrap_or_default(),
        )
        .with_env_var_prefix(&self.env_prefix)
        .with_infra_config_folders(self.infra_dirs.iter().cloned())
        .with_app_config_folders(self.config_dirs.iter().cloned())
        .with_cert_folders(self.certs_dirs.iter().cloned())
    }
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Render a template file and print the result
    ///
    /// Only identity settings are needed; the infra catalog is not read.
    Render {
        /// File to render
        file: PathBuf,

        /// JSON-escape substituted values
        #[arg(long)]
        json: bool,
    },

    /// List every resource identifier in the catalog
    Arns,

    /// Validate every catalog entry
    Check,

    /// Print the merged namespace as JSON
    Load {
        /// Namespace, e.g. `app` for `app.json` and `app.<env>.json`
        namespace: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_identity() {
        let cli = Cli::parse_from([
            "infra",
            "--env",
            "prod",
            "--system",
            "billing",
            "--component",
            "api",
            "--infra-dir",
            "a",
            "--infra-dir",
            "b",
            "arns",
        ]);

        assert_eq!(cli.identity.env_name.as_deref(), Some("prod"));
        assert_eq!(cli.identity.infra_dirs, vec!["a", "b"]);
        assert_eq!(cli.command, Commands::Arns);
    }

    #[test]
    fn parse_global_flags_after_subcommand() {
        let cli = Cli::parse_from(["infra", "load", "app", "-v", "--env-prefix", "APP_"]);

        assert!(cli.verbose);
        assert_eq!(cli.identity.env_prefix, "APP_");
        assert_eq!(
            cli.command,
            Commands::Load {
                namespace: "app".into()
            }
        );
    }

    #[test]
    fn parse_render() {
        let cli = Cli::parse_from(["infra", "render", "in.json", "--json"]);
        assert_eq!(
            cli.command,
            Commands::Render {
                file: PathBuf::from("in.json"),
                json: true
            }
        );
    }

    #[test]
    fn settings_from_identity() {
        let identity = Identity {
            env_name: Some("prod".into()),
            system_name: Some("billing".into()),
            component_name: None,
            config_dirs: vec!["conf".into()],
            ..Default::default()
        };

        let settings = identity.settings();
        assert_eq!(settings.env_name, "prod");
        assert_eq!(settings.component_name, "");
        assert_eq!(settings.app_config_folders, vec!["conf".to_string()]);
        assert!(settings.infra_config_folders.is_empty());
    }
}
