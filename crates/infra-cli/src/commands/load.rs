//! Namespace loading command

use infra_core::Provider;
use serde_json::Value;

use crate::error::Result;

/// Print the merged namespace as pretty JSON.
pub fn run_load(provider: &Provider, namespace: &str) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(&load(provider, namespace)?)?);
    Ok(())
}

fn load(provider: &Provider, namespace: &str) -> Result<Value> {
    let mut merged = Value::Null;
    provider.load_config(namespace, &mut merged)?;
    Ok(merged)
}
