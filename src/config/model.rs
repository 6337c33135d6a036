//! Configuration file model.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{PlotlyLightError, Result};
use crate::layout::Layout;
use crate::output::IncludePlotlyJs;
use crate::settings;

/// Contents of `.plotly-light.toml`.
///
/// ```toml
/// theme = "simple_white"
/// renderer = "iframe_connected"
/// colors = ["#0b8bee", "#d71131"]
///
/// [layout]
/// width = 600
/// font = { family = "Helvetica" }
///
/// [config]
/// scrollZoom = true
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    pub theme: Option<String>,
    /// Apply the default layout on top of the theme.
    pub keep_layout: Option<bool>,
    pub renderer: Option<String>,
    /// Colorway of the default layout.
    pub colors: Option<Vec<String>>,
    /// How written HTML files load plotly.js: `cdn`, `omit` or a path.
    pub plotlyjs: Option<String>,
    /// Merged into the default layout.
    pub layout: Option<toml::Table>,
    /// Merged into the plotly.js display config.
    pub config: Option<toml::Table>,
}

fn table_to_map(table: &toml::Table) -> Result<Map<String, Value>> {
    match serde_json::to_value(table)? {
        Value::Object(map) => Ok(map),
        other => Err(PlotlyLightError::Config(format!("expected a table, got {other}"))),
    }
}

impl Config {
    /// Default layout overrides as a [`Layout`].
    ///
    /// # Errors
    /// Returns an error if the table cannot be converted to JSON.
    pub fn layout(&self) -> Result<Option<Layout>> {
        self.layout
            .as_ref()
            .map(|table| table_to_map(table).map(Layout::from_map))
            .transpose()
    }

    #[must_use]
    pub fn include_plotlyjs(&self) -> IncludePlotlyJs {
        self.plotlyjs
            .as_deref()
            .map(|value| value.parse().unwrap_or_default())
            .unwrap_or_default()
    }

    /// Apply the configured defaults to the process-wide settings.
    ///
    /// Applies the layout, colors, theme, display config, plotly.js source
    /// and renderer, in that order.
    ///
    /// # Errors
    /// Returns an error for unknown theme or renderer names.
    pub fn apply(&self) -> Result<()> {
        if let Some(layout) = self.layout()? {
            settings::update_default_layout(&layout);
        }
        if let Some(colors) = &self.colors {
            settings::set_default_colors(colors);
        }
        if let Some(theme) = &self.theme {
            settings::set_default_theme(theme, self.keep_layout.unwrap_or(true))?;
        }
        if let Some(config) = &self.config {
            settings::update_default_config(table_to_map(config)?);
        }
        if self.plotlyjs.is_some() {
            settings::set_default_plotlyjs(self.include_plotlyjs());
        }
        if let Some(renderer) = &self.renderer {
            settings::set_default_renderer(renderer)?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
