//! Keel CLI - Binary entry point.
//!
//! Each subcommand exercises one component and prints what it did:
//!
//! ```text
//! keel interval <op> ...   -> keel_types::Interval
//! keel buffer <values>...  -> keel_core::BoundedBuffer
//! keel registry            -> keel_core::TypeRegistry walkthrough
//! ```

mod cli;
mod commands;

use std::io;

use anyhow::Result;
use clap::Parser;
use keel_config::KeelConfig;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::cli::Cli;

fn init_tracing(verbose: bool, configured: &str) {
    let fallback = if verbose { "debug" } else { configured };
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(fallback))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(env_filter)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // The filter comes from the config, so config errors are held until
    // the subscriber exists.
    let (config, config_error) = match KeelConfig::load() {
        Ok(config) => (config, None),
        Err(err) => (KeelConfig::default(), Some(err)),
    };

    init_tracing(cli.verbose, config.log_filter());

    if let Some(err) = config_error {
        tracing::warn!("{:#}; using defaults", anyhow::Error::from(err));
    }

    let output = commands::run(&cli.command, &config)?;
    print!("{output}");
    Ok(())
}
