//! Catalog validation command

use colored::Colorize;
use infra_core::Provider;

use crate::error::{CliError, Result};

/// Validate every catalog entry, failing if any is invalid.
pub fn run_check(provider: &Provider) -> Result<()> {
    let checks = provider.locator().check_all();
    let failed = checks.iter().filter(|check| !check.is_ok()).count();

    println!("{} {}", "Catalog".bold(), provider.resource_path());
    for check in &checks {
        match &check.result {
            Ok(()) => println!("  {} {} ({})", "ok".green(), check.arn, check.kind.dimmed()),
            Err(err) => println!("  {} {}: {}", "FAIL".red().bold(), check.arn, err),
        }
    }

    if failed > 0 {
        return Err(CliError::user(format!(
            "{failed} of {} resources failed validation",
            checks.len()
        )));
    }
    println!("{} resources valid", checks.len());
    Ok(())
}
