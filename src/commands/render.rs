use std::fs;
use std::path::PathBuf;

use serde_json::Value;

use super::apply_config;
use crate::cli::{Cli, RenderArgs};
use crate::figure::attach_template;
use crate::output::write_figure;
use crate::settings;
use crate::{EXIT_ERROR, EXIT_SUCCESS, PlotlyLightError, Result};

#[must_use]
pub fn run_render(args: &RenderArgs, cli: &Cli) -> i32 {
    match run_render_impl(args, cli) {
        Ok(paths) => {
            for path in paths {
                println!("Wrote {}", path.display());
            }
            EXIT_SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_ERROR
        }
    }
}

/// Write the figure JSON file to the output pattern.
///
/// The configuration file supplies the template, the plotly.js config and,
/// unless `--plotlyjs` is given, the plotly.js source.
///
/// # Errors
/// Returns an error if the configuration or figure cannot be loaded, or the
/// outputs cannot be written.
pub fn run_render_impl(args: &RenderArgs, cli: &Cli) -> Result<Vec<PathBuf>> {
    apply_config(cli, None)?;

    let content = fs::read_to_string(&args.figure).map_err(|source| PlotlyLightError::FileRead {
        path: args.figure.clone(),
        source,
    })?;
    let mut figure: Value = serde_json::from_str(&content).map_err(|e| {
        PlotlyLightError::Config(format!("{}: invalid figure JSON: {e}", args.figure.display()))
    })?;
    if !figure.is_object() {
        return Err(PlotlyLightError::Config(format!(
            "{}: figure JSON must be an object",
            args.figure.display()
        )));
    }
    if !args.no_template {
        attach_template(&mut figure);
    }

    let settings = settings::current();
    let include = args.plotlyjs.as_ref().unwrap_or(&settings.plotlyjs);
    write_figure(&figure, &args.output, &settings.config, include)
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod tests;
