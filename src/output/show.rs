//! Showing figures and writing them to files.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};

use super::html::{self, IncludePlotlyJs};
use crate::defaults::{DPI, PLOT_INCH};
use crate::error::{PlotlyLightError, Result};
use crate::figure::{Figure, SubplotItem, SubplotOptions, figure_mult};
use crate::layout::Layout;
use crate::renderer::{MimeBundle, publish, renderer_by_name};
use crate::settings;

/// Options for [`show`] and [`show_mult`].
#[derive(Debug, Clone, Default)]
pub struct ShowOptions {
    /// plotly.js config entries overriding the default config.
    pub config: Option<Map<String, Value>>,
    /// Output file(s): `out.html` for one file, `out.{html,json}` for several.
    pub out_image: Option<String>,
    /// How written HTML files load plotly.js; the configured default when
    /// unset.
    pub include_plotlyjs: Option<IncludePlotlyJs>,
    /// Only write the output files; do not render.
    pub no_plot: bool,
}

/// File formats an output file name may have.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Html,
    Json,
}

impl OutputFormat {
    /// Format of an output path, by extension.
    ///
    /// # Errors
    /// Returns an error for static image formats and unknown extensions.
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();
        match ext.as_str() {
            "html" | "htm" => Ok(Self::Html),
            "json" => Ok(Self::Json),
            _ => Err(PlotlyLightError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

/// Expand an output pattern into file names.
///
/// `out.pdf` names one file; `out.{svg,html}` expands to `out.svg` and
/// `out.html`.
///
/// # Errors
/// Returns an error for empty patterns and misplaced or unbalanced braces.
pub fn parse_out_pattern(pattern: &str) -> Result<Vec<PathBuf>> {
    let invalid = || PlotlyLightError::InvalidOutputPattern(pattern.to_string());
    if pattern.is_empty() {
        return Err(invalid());
    }
    if !pattern.contains(['{', '}']) {
        return Ok(vec![PathBuf::from(pattern)]);
    }

    let body = pattern.strip_suffix('}').ok_or_else(invalid)?;
    let (prefix, exts) = body.split_once('{').ok_or_else(invalid)?;
    if exts.contains(['{', '}']) || prefix.contains('}') {
        return Err(invalid());
    }
    exts.split(',')
        .map(|ext| {
            let ext = ext.trim();
            if ext.is_empty() {
                Err(invalid())
            } else {
                Ok(PathBuf::from(format!("{prefix}{ext}")))
            }
        })
        .collect()
}

/// Scale factor that gives `PLOT_INCH` inches at `DPI` for a plot of the
/// layout's size.
///
/// # Errors
/// Returns an error if the layout has no width or height.
pub fn export_scale(layout: &Layout) -> Result<f64> {
    match (layout.width(), layout.height()) {
        (Some(width), Some(height)) => {
            Ok(((DPI * PLOT_INCH).powi(2) / (width * height)).sqrt())
        }
        _ => Err(PlotlyLightError::MissingSize("output files".to_string())),
    }
}

/// The default config overlaid with per-call entries.
fn merged_config(overrides: Option<&Map<String, Value>>) -> Map<String, Value> {
    let mut config = settings::current().config;
    if let Some(overrides) = overrides {
        config.extend(overrides.clone());
    }
    config
}

/// Write figure JSON to every file named by `pattern`.
///
/// All formats are checked before anything is written. Returns the written
/// paths.
///
/// # Errors
/// Returns an error for bad patterns or formats, a layout without width and
/// height, or write failures.
pub fn write_figure(
    figure: &Value,
    pattern: &str,
    config: &Map<String, Value>,
    include: &IncludePlotlyJs,
) -> Result<Vec<PathBuf>> {
    let paths = parse_out_pattern(pattern)?;
    let formats = paths
        .iter()
        .map(|path| OutputFormat::from_path(path))
        .collect::<Result<Vec<_>>>()?;
    let layout = figure
        .get("layout")
        .cloned()
        .map(Layout::from_value)
        .transpose()?
        .unwrap_or_default();
    let scale = export_scale(&layout)?;
    tracing::debug!(scale, "export scale");

    for (path, format) in paths.iter().zip(formats) {
        let contents = match format {
            OutputFormat::Html => html::document(figure, config, include, None)?,
            OutputFormat::Json => serde_json::to_string_pretty(figure)?,
        };
        fs::write(path, contents)?;
        tracing::info!(path = %path.display(), "wrote figure");
    }
    Ok(paths)
}

/// Write output files and display the figure with the default renderer.
///
/// Returns the displayed bundle, or `None` with `no_plot`.
///
/// # Errors
/// Returns an error for bad output patterns or formats, missing plot size,
/// write failures, or a failing renderer.
pub fn show(figure: &Figure, options: &ShowOptions) -> Result<Option<MimeBundle>> {
    let config = merged_config(options.config.as_ref());

    let settings = settings::current();

    if let Some(pattern) = &options.out_image {
        let include = options
            .include_plotlyjs
            .as_ref()
            .unwrap_or(&settings.plotlyjs);
        write_figure(&figure.to_plotly_json(), pattern, &config, include)?;
    }
    if options.no_plot {
        return Ok(None);
    }

    let renderer = renderer_by_name(&settings.renderer, &settings)?;
    let bundle = renderer.render(&figure.to_plotly_json(), &config)?;
    publish(&bundle);
    Ok(Some(bundle))
}

/// [`figure_mult`] followed by [`show`].
///
/// # Errors
/// Returns an error if the grid is invalid or showing fails.
pub fn show_mult<I>(
    items: I,
    subplots: &SubplotOptions,
    options: &ShowOptions,
) -> Result<Option<MimeBundle>>
where
    I: IntoIterator,
    I::Item: Into<SubplotItem>,
{
    show(&figure_mult(items, subplots)?, options)
}

#[cfg(test)]
#[path = "show_tests.rs"]
mod tests;
