//! [`TestLayout`] fixture for provider and CLI tests.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary directory laid out the way a deployed service expects:
///
/// ```text
/// <root>/
///   infra/   <environment>.json
///   config/  <namespace>.json, <namespace>.<environment>.json
///   certs/   ca.pem, *.ca.pem
/// ```
///
/// # Example
///
/// ```rust,no_run
/// use infra_test_utils::TestLayout;
///
/// let layout = TestLayout::new();
/// layout.write_infra("test", r#"{"webservices": {"api": {"url": "http://api"}}}"#);
/// layout.write_config("app", r#"{"timeout": 10}"#);
/// layout.assert_file_exists("infra/test.json");
/// ```
pub struct TestLayout {
    temp_dir: TempDir,
}

impl Default for TestLayout {
    fn default() -> Self {
        Self::new()
    }
}

impl TestLayout {
    /// Create the temporary root with empty `infra/`, `config/` and `certs/` folders.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().unwrap();
        for folder in ["infra", "config", "certs"] {
            fs::create_dir_all(temp_dir.path().join(folder)).unwrap();
        }
        Self { temp_dir }
    }

    /// Return the root path of the temporary directory.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn infra_dir(&self) -> PathBuf {
        self.root().join("infra")
    }

    pub fn config_dir(&self) -> PathBuf {
        self.root().join("config")
    }

    pub fn certs_dir(&self) -> PathBuf {
        self.root().join("certs")
    }

    /// The `infra/` folder as a single-entry folder list.
    pub fn infra_folders(&self) -> Vec<String> {
        vec![display(&self.infra_dir())]
    }

    /// The `config/` folder as a single-entry folder list.
    pub fn config_folders(&self) -> Vec<String> {
        vec![display(&self.config_dir())]
    }

    /// The `certs/` folder as a single-entry folder list.
    pub fn cert_folders(&self) -> Vec<String> {
        vec![display(&self.certs_dir())]
    }

    /// Write `infra/<environment>.json`.
    pub fn write_infra(&self, environment: &str, contents: &str) -> PathBuf {
        self.write(&format!("infra/{environment}.json"), contents)
    }

    /// Write `config/<name>.json`, where `name` is `<namespace>` or
    /// `<namespace>.<environment>`.
    pub fn write_config(&self, name: &str, contents: &str) -> PathBuf {
        self.write(&format!("config/{name}.json"), contents)
    }

    /// Write `certs/<file_name>`.
    pub fn write_cert(&self, file_name: &str, contents: &str) -> PathBuf {
        self.write(&format!("certs/{file_name}"), contents)
    }

    /// Write `contents` to `path` relative to the root, creating parent folders.
    pub fn write(&self, path: &str, contents: &str) -> PathBuf {
        let full_path = self.root().join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&full_path, contents).unwrap();
        full_path
    }

    /// Assert that `path` (relative to the root) exists.
    ///
    /// # Panics
    /// Panics with a descriptive message if the path does not exist.
    pub fn assert_file_exists(&self, path: &str) {
        let full_path = self.root().join(path);
        assert!(
            full_path.exists(),
            "Expected file to exist: {}",
            full_path.display()
        );
    }
}

fn display(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}
