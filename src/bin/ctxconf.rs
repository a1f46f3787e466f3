//! ctxconf CLI Binary
//!
//! Command-line interface for the multi-context client credential store.

use clap::{CommandFactory, Parser};
use clap_complete::CompleteEnv;
use ctxconf::cli::{Cli, RunContext};
use ctxconf::config::ConfigLoader;
use ctxconf::logging::{init_logging, LoggingConfig};
use std::process;
use tracing::{debug, error};

fn main() {
    // Answers `COMPLETE=<shell> ctxconf` requests and exits; no-op otherwise.
    CompleteEnv::with_factory(Cli::command).complete();

    let cli = Cli::parse();

    // Build logging config from CLI args, env vars, and config file
    let logging_config = build_logging_config(&cli);

    if let Err(e) = init_logging(&logging_config) {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(1);
    }

    debug!("ctxconf starting");

    let context = match RunContext::new(cli.store.clone(), cli.context.clone(), cli.config.clone())
    {
        Ok(ctx) => ctx,
        Err(e) => {
            error!("Error resolving store: {}", e);
            eprintln!("{}", ctxconf::cli::map_error(&e));
            process::exit(1);
        }
    };

    match context.execute(&cli.command) {
        Ok(output) => {
            if !output.is_empty() {
                println!("{}", output);
            }
        }
        Err(e) => {
            error!(store = %context.store_path().display(), "Command failed: {}", e);
            eprintln!("{}", ctxconf::cli::map_error(&e));
            process::exit(1);
        }
    }
}

/// Build logging configuration from CLI args and config file.
/// Precedence: CLI flags override config file override defaults.
fn build_logging_config(cli: &Cli) -> LoggingConfig {
    let loaded = match cli.config {
        Some(ref config_path) => ConfigLoader::load_from_file(config_path),
        None => ConfigLoader::load(),
    };
    let mut config = loaded.map(|c| c.logging).unwrap_or_default();

    if cli.quiet {
        config.enabled = false;
    }
    if cli.verbose {
        config.level = "debug".to_string();
    }
    if let Some(ref level) = cli.log_level {
        config.level = level.clone();
    }
    if let Some(ref format) = cli.log_format {
        config.format = format.clone();
    }
    if let Some(ref output) = cli.log_output {
        config.output = output.clone();
    }
    if let Some(ref file) = cli.log_file {
        config.file = Some(file.clone());
    }

    config
}
