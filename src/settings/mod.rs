//! Process-wide plot defaults: theme, layout, renderer and display config.
//!
//! The state is created lazily from the built-in defaults and only changes
//! through the setters below. Figures pick it up when they are rendered:
//! [`template`] becomes `layout.template` and [`current`] supplies the
//! renderer and plotly.js config.

mod themes;

use std::path::PathBuf;
use std::sync::{LazyLock, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use serde_json::{Map, Value};

use crate::defaults;
use crate::error::{PlotlyLightError, Result};
use crate::layout::{Layout, merge_layout, merge_values};
use crate::output::IncludePlotlyJs;
use crate::renderer::RENDERER_NAMES;

pub use themes::{THEME_NAMES, theme_layout};

/// Renderer used until another one is selected.
pub const DEFAULT_RENDERER: &str = "plotly_mimetype";

/// Snapshot of the default configuration state.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub theme: String,
    /// Whether the default layout is applied on top of the theme.
    pub keep_layout: bool,
    pub layout: Layout,
    /// Renderer name; may be `+`-joined, only the first one is used.
    pub renderer: String,
    /// plotly.js display config.
    pub config: Map<String, Value>,
    /// Directory the iframe renderers write into (the notebook's directory).
    pub iframe_root: Option<PathBuf>,
    /// How written HTML files load plotly.js unless a call says otherwise.
    pub plotlyjs: IncludePlotlyJs,
}

impl Default for Settings {
    fn default() -> Self {
        let config = match defaults::default_config() {
            Value::Object(map) => map,
            _ => Map::new(),
        };
        Self {
            theme: defaults::DEFAULT_THEME.to_string(),
            keep_layout: true,
            layout: defaults::default_layout(),
            renderer: DEFAULT_RENDERER.to_string(),
            config,
            iframe_root: None,
            plotlyjs: IncludePlotlyJs::Cdn,
        }
    }
}

impl Settings {
    /// Theme layout overlaid with the default layout (when kept).
    #[must_use]
    pub fn template(&self) -> Layout {
        let theme = theme_layout(&self.theme).unwrap_or_default();
        if self.keep_layout {
            merge_layout(&theme, [&self.layout], false)
        } else {
            theme
        }
    }

    /// First entry of the default colorway.
    #[must_use]
    pub fn primary_color(&self) -> Option<String> {
        self.layout
            .get("colorway")
            .and_then(Value::as_array)
            .and_then(|colors| colors.first())
            .and_then(Value::as_str)
            .map(str::to_string)
    }

    /// Name of the renderer actually used for `+`-joined names.
    #[must_use]
    pub fn renderer_name(&self) -> &str {
        first_renderer(&self.renderer)
    }
}

static SETTINGS: LazyLock<RwLock<Settings>> = LazyLock::new(|| RwLock::new(Settings::default()));

fn read() -> RwLockReadGuard<'static, Settings> {
    SETTINGS.read().unwrap_or_else(PoisonError::into_inner)
}

fn write() -> RwLockWriteGuard<'static, Settings> {
    SETTINGS.write().unwrap_or_else(PoisonError::into_inner)
}

fn first_renderer(name: &str) -> &str {
    name.split('+').next().unwrap_or(name)
}

/// Copy of the current state.
#[must_use]
pub fn current() -> Settings {
    read().clone()
}

/// Restore the built-in defaults.
pub fn reset() {
    *write() = Settings::default();
}

#[must_use]
pub fn template() -> Layout {
    read().template()
}

#[must_use]
pub fn primary_color() -> Option<String> {
    read().primary_color()
}

/// Change the default theme.
///
/// With `keep_layout`, the default layout set by [`set_default_layout`] keeps
/// overriding the theme.
///
/// # Errors
/// Returns an error if `name` is not a built-in theme.
pub fn set_default_theme(name: &str, keep_layout: bool) -> Result<()> {
    if !THEME_NAMES.contains(&name) {
        return Err(PlotlyLightError::invalid_option(
            "theme",
            name,
            "one of ggplot2, seaborn, simple_white, plotly, plotly_white, plotly_dark, none",
        ));
    }
    let mut settings = write();
    settings.theme = name.to_string();
    settings.keep_layout = keep_layout;
    tracing::debug!(theme = name, keep_layout, "default theme changed");
    Ok(())
}

/// Replace the default layout.
pub fn set_default_layout(layout: Layout) {
    let mut settings = write();
    settings.layout = layout;
    settings.keep_layout = true;
}

/// Deep-merge `layout` into the default layout.
pub fn update_default_layout(layout: &Layout) {
    let mut settings = write();
    settings.layout = merge_layout(&settings.layout, [layout], false);
    settings.keep_layout = true;
}

/// Change the default renderer. The display config carries over.
///
/// # Errors
/// Returns an error if any `+`-joined part is not a known renderer.
pub fn set_default_renderer(name: &str) -> Result<()> {
    if let Some(unknown) = name.split('+').find(|part| !RENDERER_NAMES.contains(part)) {
        return Err(PlotlyLightError::invalid_option(
            "renderer",
            unknown,
            "a built-in renderer name",
        ));
    }
    write().renderer = name.to_string();
    tracing::debug!(renderer = name, "default renderer changed");
    Ok(())
}

/// Directory that iframe renderers write their HTML files into.
pub fn set_iframe_root(root: Option<PathBuf>) {
    write().iframe_root = root;
}

/// Change how written HTML files load plotly.js.
pub fn set_default_plotlyjs(include: IncludePlotlyJs) {
    tracing::debug!(plotlyjs = %include, "default plotly.js source changed");
    write().plotlyjs = include;
}

/// Replace the plotly.js display config.
pub fn set_default_config(config: Map<String, Value>) {
    write().config = config;
}

/// Deep-merge `config` into the plotly.js display config.
pub fn update_default_config(config: Map<String, Value>) {
    let mut settings = write();
    let merged = merge_values(
        Value::Object(std::mem::take(&mut settings.config)),
        Value::Object(config),
    );
    settings.config = match merged {
        Value::Object(map) => map,
        _ => Map::new(),
    };
}

/// Replace the colorway of the default layout.
pub fn set_default_colors<S: AsRef<str>>(colors: &[S]) {
    let colorway: Vec<Value> = colors.iter().map(|c| Value::from(c.as_ref())).collect();
    let mut settings = write();
    settings.layout.set("colorway", colorway);
}

/// Serializes tests that touch the process-wide state.
#[cfg(test)]
pub(crate) fn test_guard() -> std::sync::MutexGuard<'static, ()> {
    static LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());
    let guard = LOCK.lock().unwrap_or_else(PoisonError::into_inner);
    reset();
    guard
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
