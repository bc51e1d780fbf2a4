//! Environment variable access
//!
//! The provider never reads the process environment directly; it goes
//! through an [`EnvSource`] so tests can supply a fixed map.

use std::collections::BTreeMap;

/// A source of environment variables.
pub trait EnvSource {
    /// Value of `key`, if set.
    fn var(&self, key: &str) -> Option<String>;

    /// Every variable, in no particular order.
    fn vars(&self) -> Vec<(String, String)>;
}

/// The real process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }

    fn vars(&self) -> Vec<(String, String)> {
        // Variables that are not valid unicode cannot be rendered and are skipped.
        std::env::vars_os()
            .filter_map(|(key, value)| Some((key.into_string().ok()?, value.into_string().ok()?)))
            .collect()
    }
}

/// A fixed set of variables.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MapEnv(BTreeMap<String, String>);

impl MapEnv {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for MapEnv {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }
}

impl EnvSource for MapEnv {
    fn var(&self, key: &str) -> Option<String> {
        self.0.get(key).cloned()
    }

    fn vars(&self) -> Vec<(String, String)> {
        self.0.iter().map(|(k, v)| (k.clone(), v.clone())).collect()
    }
}

/// Snapshot the variables whose name starts with `prefix` (all when empty).
pub fn capture(source: &dyn EnvSource, prefix: &str) -> BTreeMap<String, String> {
    source
        .vars()
        .into_iter()
        .filter(|(key, _)| key.starts_with(prefix))
        .collect()
}

/// The value of the first of `keys` that is set, or an empty string.
pub fn get_from_env(source: &dyn EnvSource, keys: &[&str]) -> String {
    keys.iter()
        .find_map(|key| source.var(key))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn env() -> MapEnv {
        MapEnv::new()
            .with("INFRA_DB_PASS", "secret")
            .with("INFRA_DB_USER", "svc")
            .with("HOME", "/home/svc")
    }

    #[test]
    fn test_capture_with_prefix() {
        let captured = capture(&env(), "INFRA_");
        assert_eq!(captured.keys().collect::<Vec<_>>(), vec!["INFRA_DB_PASS", "INFRA_DB_USER"]);
    }

    #[test]
    fn test_capture_without_prefix() {
        assert_eq!(capture(&env(), "").len(), 3);
    }

    #[test]
    fn test_get_from_env_first_set_wins() {
        assert_eq!(get_from_env(&env(), &["APP_ENV", "HOME", "INFRA_DB_USER"]), "/home/svc");
        assert_eq!(get_from_env(&env(), &["APP_ENV"]), "");
    }

    #[test]
    fn test_empty_value_counts_as_set() {
        let env = MapEnv::new().with("APP_ENV", "").with("ENV", "prod");
        assert_eq!(get_from_env(&env, &["APP_ENV", "ENV"]), "");
    }
}
