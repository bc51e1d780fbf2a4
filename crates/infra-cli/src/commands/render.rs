//! Render command implementation

use std::path::Path;

use infra_core::render::{self, Context};
use infra_core::{EnvSource, ProviderSettings, env};
use infra_fs::{NormalizedPath, io};

use crate::error::{CliError, Result};

/// Render `file` strictly and print it to stdout.
pub fn run_render(settings: &ProviderSettings, source: &dyn EnvSource, file: &Path, json: bool) -> Result<()> {
    print!("{}", render_file(settings, source, file, json)?);
    Ok(())
}

fn render_file(settings: &ProviderSettings, source: &dyn EnvSource, file: &Path, json: bool) -> Result<String> {
    settings.validate()?;
    let context = Context::new(
        &settings.env_name,
        &settings.system_name,
        &settings.component_name,
    )
    .with_env(env::capture(source, &settings.env_var_prefix));

    let path = NormalizedPath::from(file);
    let text = io::read_text(&path)?;
    let rendered = if json {
        render::render_document(&text, &context)
    } else {
        render::render(&text, &context)
    };
    rendered.map_err(|source| CliError::Render {
        path: path.to_string(),
        source,
    })
}
