//! Layered configuration loading
//!
//! Documents are rendered, parsed into [`Value`] trees and merged over the
//! current state of the target before a single decode. A layer only touches
//! the keys it names:
//!
//! - objects merge key by key, recursively
//! - arrays, scalars and `null` replace whatever was there
//!
//! The target is assigned only after the merged tree decodes, so a failed
//! load leaves it untouched.

use infra_fs::{NormalizedPath, SearchPath, io};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::render::{self, Context};

/// Extension of every configuration document.
pub const EXTENSION: &str = "json";

/// Reads and renders documents from an ordered folder list.
#[derive(Debug, Clone, Copy)]
pub struct Loader<'a> {
    folders: &'a SearchPath,
    context: &'a Context,
}

impl<'a> Loader<'a> {
    pub fn new(folders: &'a SearchPath, context: &'a Context) -> Self {
        Self { folders, context }
    }

    /// Render and parse an in-memory document.
    pub fn parse(&self, origin: &str, text: &str) -> Result<Value> {
        let rendered =
            render::render_document(text, self.context).map_err(|e| Error::render(origin, e))?;
        serde_json::from_str(&rendered).map_err(|e| Error::decode(origin, e))
    }

    /// Read, render and parse the file at `path`.
    pub fn read(&self, path: &NormalizedPath) -> Result<Value> {
        let text = io::read_text(path)?;
        let value = self.parse(path.as_str(), &text)?;
        info!(path = %path, "Loaded configuration document");
        Ok(value)
    }

    /// The document `<name>.json` from the first folder holding it.
    pub fn layer(&self, name: &str) -> Result<Option<Value>> {
        let file_name = format!("{name}.{EXTENSION}");
        match self.folders.find(&file_name) {
            Some(path) => self.read(&path).map(Some),
            None => {
                debug!(file = %file_name, "Configuration layer not present");
                Ok(None)
            }
        }
    }

    /// The global and environment layers of `namespace`, in merge order.
    ///
    /// Either layer may be absent; both absent is [`Error::NoConfiguration`].
    pub fn namespace(&self, namespace: &str, environment: &str) -> Result<Vec<Value>> {
        let global = self.layer(namespace)?;
        let scoped = self.layer(&format!("{namespace}.{environment}"))?;

        let layers: Vec<Value> = global.into_iter().chain(scoped).collect();
        if layers.is_empty() {
            return Err(Error::NoConfiguration {
                namespace: namespace.to_string(),
            });
        }
        Ok(layers)
    }
}

/// Merge `layers` over the current contents of `target`, in order.
pub fn apply<T, I>(target: &mut T, layers: I, origin: &str) -> Result<()>
where
    T: Serialize + DeserializeOwned,
    I: IntoIterator<Item = Value>,
{
    let mut merged = serde_json::to_value(&*target).map_err(Error::Encode)?;
    for layer in layers {
        merge(&mut merged, layer);
    }
    *target = serde_json::from_value(merged).map_err(|e| Error::decode(origin, e))?;
    Ok(())
}

/// Deep merge `overlay` into `base`.
///
/// If both values are objects, merge them recursively with `overlay` taking
/// precedence. Otherwise, `overlay` replaces `base`.
pub fn merge(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (Value::Object(base_map), Value::Object(overlay_map)) => {
            for (key, overlay_val) in overlay_map {
                match base_map.get_mut(&key) {
                    Some(base_val) => merge(base_val, overlay_val),
                    None => {
                        base_map.insert(key, overlay_val);
                    }
                }
            }
        }
        (base, overlay) => *base = overlay,
    }
}
