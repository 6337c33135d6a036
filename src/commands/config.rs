use std::fmt::Write;
use std::path::Path;

use serde_json::{Value, json};

use super::apply_config;
use crate::cli::{Cli, ConfigAction, ConfigArgs, ShowFormat};
use crate::settings::{self, Settings};
use crate::{EXIT_ERROR, EXIT_SUCCESS, Result};

#[must_use]
pub fn run_config(args: &ConfigArgs, cli: &Cli) -> i32 {
    match &args.action {
        ConfigAction::Show { config, format } => {
            match run_config_show_impl(cli, config.as_deref(), *format) {
                Ok(output) => {
                    print!("{output}");
                    EXIT_SUCCESS
                }
                Err(e) => {
                    eprintln!("Error: {e}");
                    EXIT_ERROR
                }
            }
        }
    }
}

/// Effective defaults after applying the configuration file, formatted.
///
/// # Errors
/// Returns an error if the configuration cannot be loaded or applied.
pub fn run_config_show_impl(
    cli: &Cli,
    path: Option<&Path>,
    format: ShowFormat,
) -> Result<String> {
    let loaded = apply_config(cli, path)?;
    let current = settings::current();
    let source = loaded.path.as_deref();
    match format {
        ShowFormat::Text => Ok(format_settings_text(&current, source)),
        ShowFormat::Json => format_settings_json(&current, source),
    }
}

fn colorway(settings: &Settings) -> Vec<&str> {
    settings
        .layout
        .get("colorway")
        .and_then(Value::as_array)
        .map(|colors| colors.iter().filter_map(Value::as_str).collect())
        .unwrap_or_default()
}

#[must_use]
pub fn format_settings_text(settings: &Settings, source: Option<&Path>) -> String {
    let mut output = String::new();
    let source = source.map_or_else(
        || "built-in defaults".to_string(),
        |path| path.display().to_string(),
    );
    let _ = writeln!(output, "Source:   {source}");
    let kept = if settings.keep_layout {
        "default layout applied"
    } else {
        "theme only"
    };
    let _ = writeln!(output, "Theme:    {} ({kept})", settings.theme);
    let _ = writeln!(output, "Renderer: {}", settings.renderer);
    let _ = writeln!(output, "Plotlyjs: {}", settings.plotlyjs);
    let size = match (settings.layout.width(), settings.layout.height()) {
        (Some(width), Some(height)) => format!("{width} x {height}"),
        _ => "unset".to_string(),
    };
    let _ = writeln!(output, "Size:     {size}");
    let _ = writeln!(output, "Colors:   {}", colorway(settings).join(", "));
    let _ = writeln!(output, "Config:   {}", Value::Object(settings.config.clone()));
    output
}

/// # Errors
/// Returns an error if serialization fails.
pub fn format_settings_json(settings: &Settings, source: Option<&Path>) -> Result<String> {
    let value = json!({
        "source": source.map(|p| p.display().to_string()),
        "theme": settings.theme,
        "keep_layout": settings.keep_layout,
        "renderer": settings.renderer,
        "plotlyjs": settings.plotlyjs.to_string(),
        "layout": settings.layout.to_value(),
        "config": settings.config,
    });
    Ok(serde_json::to_string_pretty(&value)? + "\n")
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
