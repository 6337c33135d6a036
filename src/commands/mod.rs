//! Implementations of the `plotly-light` subcommands.

pub mod config;
pub mod prune;
pub mod render;

use std::path::Path;

use crate::Result;
use crate::cli::Cli;
use crate::config::{FileConfigLoader, LoadResult};
use crate::settings;

pub use config::{format_settings_json, format_settings_text, run_config, run_config_show_impl};
pub use prune::{format_prune_report, run_prune, run_prune_impl};
pub use render::{run_render, run_render_impl};

/// Reset the defaults and apply the configuration file (`path`, or the
/// discovered one) unless `--no-config` was given.
///
/// # Errors
/// Returns an error if the file cannot be read, parsed or applied.
pub fn apply_config(cli: &Cli, path: Option<&Path>) -> Result<LoadResult> {
    settings::reset();
    if cli.no_config {
        return Ok(LoadResult::default());
    }
    let loader = FileConfigLoader::new();
    let loaded = match path {
        Some(path) => loader.load_from_path(path)?,
        None => loader.load()?,
    };
    loaded.config.apply()?;
    Ok(loaded)
}
