//! Default folder locations searched for configuration files.

use std::path::Path;

/// The three kinds of folders searched at provider construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Folder {
    /// Application configuration documents (`<namespace>.json`)
    AppConfig,
    /// Infrastructure catalog documents (`<environment>.json`)
    Infra,
    /// CA bundles (`ca.pem`, `*.ca.pem`)
    Certs,
}

impl Folder {
    /// Get the directory name used in the default locations.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AppConfig => "config",
            Self::Infra => "infra",
            Self::Certs => "certs",
        }
    }

    /// Default search locations, in priority order.
    ///
    /// `/etc/<name>` first, then the working-directory relative `etc/<name>`
    /// and `testdata/<name>`.
    pub fn defaults(&self) -> Vec<String> {
        let name = self.as_str();
        vec![
            format!("/etc/{name}"),
            format!("etc/{name}"),
            format!("testdata/{name}"),
        ]
    }
}

impl AsRef<Path> for Folder {
    fn as_ref(&self) -> &Path {
        Path::new(self.as_str())
    }
}

impl std::fmt::Display for Folder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
