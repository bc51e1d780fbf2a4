//! Infrastructure configuration CLI
//!
//! Renders templates, lists and validates the infra catalog and prints
//! merged application configuration for one environment.

mod cli;
mod commands;
mod error;

use clap::Parser;
use colored::Colorize;
use infra_core::{ProcessEnv, Provider, logging};

use cli::{Cli, Commands};
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    logging::init(cli.verbose);
    tracing::debug!(command = ?cli.command, "Starting");

    let settings = cli.identity.settings();
    match cli.command {
        Commands::Render { file, json } => commands::run_render(&settings, &ProcessEnv, &file, json),
        Commands::Arns => {
            commands::run_arns(&Provider::new(settings)?);
            Ok(())
        }
        Commands::Check => commands::run_check(&Provider::new(settings)?),
        Commands::Load { namespace } => commands::run_load(&Provider::new(settings)?, &namespace),
    }
}
