//! Command implementations

mod bbox;
mod config;
mod distance;
mod query;

use crate::cli::{Cli, Commands};
use crate::output::OutputWriter;
use anyhow::{Context, Result};
use geofilter_core::config::LayeredConfig;
use std::path::Path;

/// Execute a CLI command
pub fn execute(cli: Cli, output: &OutputWriter) -> Result<()> {
    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Bbox(args) => bbox::execute(args, config, output),
        Commands::Distance(args) => distance::execute(args, config, output),
        Commands::Config => config::execute(&config, output),
    }
}

/// Build the layered configuration: defaults, then the file, then the environment
fn load_config(path: Option<&Path>) -> Result<LayeredConfig> {
    let config = LayeredConfig::with_defaults();
    let config = match path {
        Some(path) => config
            .load_from_file(path)
            .with_context(|| format!("Failed to load configuration from {}", path.display()))?,
        None => config,
    };
    Ok(config.load_from_env())
}
