//! Identifier listing

use infra_core::Provider;

/// Print every catalog identifier, one per line.
pub fn run_arns(provider: &Provider) {
    for arn in provider.locator().identifiers() {
        println!("{arn}");
    }
}
