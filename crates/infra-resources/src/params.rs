//! Free-form resource parameters
//!
//! Catalog entries may carry a `params` object with driver-specific
//! settings. Accessors come in two flavours: `lookup_*` reports whether the
//! key was missing or held another type, while the plain accessors fall
//! back to the zero value in both cases.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Outcome of a typed parameter lookup.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Param<T> {
    Found(T),
    Missing,
    WrongType,
}

impl<T> Param<T> {
    pub fn found(self) -> Option<T> {
        match self {
            Self::Found(value) => Some(value),
            Self::Missing | Self::WrongType => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }

    pub fn is_wrong_type(&self) -> bool {
        matches!(self, Self::WrongType)
    }
}

impl<T: Default> Param<T> {
    /// The found value, or `T::default()` when missing or mistyped.
    pub fn or_zero(self) -> T {
        self.found().unwrap_or_default()
    }
}

/// A string-keyed bag of JSON values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Params(BTreeMap<String, Value>);

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn lookup_str(&self, key: &str) -> Param<&str> {
        self.lookup(key, Value::as_str)
    }

    /// Integers only: `5.0` is a float and reports [`Param::WrongType`].
    pub fn lookup_int(&self, key: &str) -> Param<i64> {
        self.lookup(key, Value::as_i64)
    }

    pub fn lookup_bool(&self, key: &str) -> Param<bool> {
        self.lookup(key, Value::as_bool)
    }

    /// Any JSON number, integer or not.
    pub fn lookup_float(&self, key: &str) -> Param<f64> {
        self.lookup(key, Value::as_f64)
    }

    pub fn string(&self, key: &str) -> String {
        self.lookup_str(key).found().unwrap_or_default().to_string()
    }

    pub fn int(&self, key: &str) -> i64 {
        self.lookup_int(key).or_zero()
    }

    pub fn bool(&self, key: &str) -> bool {
        self.lookup_bool(key).or_zero()
    }

    pub fn float(&self, key: &str) -> f64 {
        self.lookup_float(key).or_zero()
    }

    fn lookup<'a, T>(&'a self, key: &str, extract: impl Fn(&'a Value) -> Option<T>) -> Param<T> {
        match self.0.get(key) {
            None => Param::Missing,
            Some(value) => extract(value).map_or(Param::WrongType, Param::Found),
        }
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Params {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}
