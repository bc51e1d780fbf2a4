//! Prefix/suffix composition for topic, group, channel and index names

use std::collections::BTreeMap;

/// How a base name becomes the name used on the wire.
///
/// An exact match in the translation table wins over prefix/suffix
/// composition.
#[derive(Debug, Clone, Copy, Default)]
pub struct NameRule<'a> {
    pub prefix: &'a str,
    pub suffix: &'a str,
    pub translation: Option<&'a BTreeMap<String, String>>,
}

impl<'a> NameRule<'a> {
    pub fn new(prefix: &'a str, suffix: &'a str) -> Self {
        Self {
            prefix,
            suffix,
            translation: None,
        }
    }

    pub fn with_translation(mut self, table: &'a BTreeMap<String, String>) -> Self {
        self.translation = Some(table);
        self
    }

    pub fn apply(&self, name: &str) -> String {
        if let Some(translated) = self.translation.and_then(|table| table.get(name)) {
            return translated.clone();
        }
        format!("{}{}{}", self.prefix, name, self.suffix)
    }
}
