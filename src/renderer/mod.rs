//! Turning figure JSON into displayable MIME bundles.
//!
//! A [`Renderer`] produces a [`MimeBundle`] from the figure JSON and the
//! plotly.js config; [`publish`] hands the bundle to the notebook frontend.

mod iframe;

use std::fs;
use std::io::Write;
use std::path::PathBuf;

use serde_json::{Map, Value};

use crate::defaults::LOCAL_PLOTLYJS;
use crate::env::Environment;
use crate::error::{PlotlyLightError, Result};
use crate::output::html::{self, IncludePlotlyJs};
use crate::settings::Settings;

pub use iframe::IFrameRenderer;

/// Names accepted by [`renderer_by_name`] and the default-renderer setter.
pub const RENDERER_NAMES: &[&str] = &[
    "plotly_mimetype",
    "json",
    "notebook",
    "notebook_connected",
    "browser",
    "iframe",
    "iframe_connected",
];

pub const PLOTLY_MIME_TYPE: &str = "application/vnd.plotly.v1+json";
pub const HTML_MIME_TYPE: &str = "text/html";
pub const JSON_MIME_TYPE: &str = "application/json";
pub const TEXT_MIME_TYPE: &str = "text/plain";

/// Display payloads keyed by MIME type.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MimeBundle(Map<String, Value>);

impl MimeBundle {
    #[must_use]
    pub fn new() -> Self {
        Self(Map::new())
    }

    #[must_use]
    pub fn html(html: impl Into<String>) -> Self {
        Self::new().with(HTML_MIME_TYPE, html.into())
    }

    #[must_use]
    pub fn with(mut self, mime: &str, payload: impl Into<Value>) -> Self {
        self.0.insert(mime.to_string(), payload.into());
        self
    }

    #[must_use]
    pub fn get(&self, mime: &str) -> Option<&Value> {
        self.0.get(mime)
    }

    #[must_use]
    pub fn html_content(&self) -> Option<&str> {
        self.get(HTML_MIME_TYPE).and_then(Value::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    #[must_use]
    pub const fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }
}

/// Something that can display a figure.
pub trait Renderer {
    /// Render plotly figure JSON (`{"data": .., "layout": ..}`).
    ///
    /// # Errors
    /// Returns an error if the output cannot be produced or written.
    fn render(&self, figure: &Value, config: &Map<String, Value>) -> Result<MimeBundle>;
}

/// The plotly MIME type understood by `JupyterLab` and VS Code.
#[derive(Debug, Default, Clone, Copy)]
pub struct MimetypeRenderer;

impl Renderer for MimetypeRenderer {
    fn render(&self, figure: &Value, config: &Map<String, Value>) -> Result<MimeBundle> {
        let mut payload = figure.clone();
        payload["config"] = Value::Object(config.clone());
        Ok(MimeBundle::new().with(PLOTLY_MIME_TYPE, payload))
    }
}

/// Raw figure JSON.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonRenderer;

impl Renderer for JsonRenderer {
    fn render(&self, figure: &Value, _config: &Map<String, Value>) -> Result<MimeBundle> {
        Ok(MimeBundle::new().with(JSON_MIME_TYPE, figure.clone()))
    }
}

/// Inline `<div>` plus script.
///
/// The connected variant loads plotly.js from the CDN; the other one expects
/// the page to have loaded it already.
#[derive(Debug, Default, Clone, Copy)]
pub struct NotebookRenderer {
    pub connected: bool,
}

impl Renderer for NotebookRenderer {
    fn render(&self, figure: &Value, config: &Map<String, Value>) -> Result<MimeBundle> {
        let include = if self.connected {
            IncludePlotlyJs::Cdn
        } else {
            IncludePlotlyJs::Omit
        };
        let div = html::to_div(figure, config, &unique_id())?;
        Ok(MimeBundle::html(format!("{}{div}", include.script_tag())))
    }
}

/// Writes a standalone HTML file to the temp directory to be opened in a
/// browser.
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserRenderer;

impl Renderer for BrowserRenderer {
    fn render(&self, figure: &Value, config: &Map<String, Value>) -> Result<MimeBundle> {
        let path = std::env::temp_dir().join(format!("plotly-light-{}.html", unique_id()));
        let document = html::document(figure, config, &IncludePlotlyJs::Cdn, None)?;
        fs::write(&path, document)?;
        tracing::info!(path = %path.display(), "wrote figure for the browser");
        Ok(MimeBundle::new().with(TEXT_MIME_TYPE, path.display().to_string()))
    }
}

/// Random UUID v4 string, used for file names and div ids.
#[must_use]
pub fn unique_id() -> String {
    let mut bytes: [u8; 16] = rand::random();
    bytes[6] = (bytes[6] & 0x0f) | 0x40;
    bytes[8] = (bytes[8] & 0x3f) | 0x80;

    let hex: String = bytes.iter().map(|b| format!("{b:02x}")).collect();
    format!(
        "{}-{}-{}-{}-{}",
        &hex[0..8],
        &hex[8..12],
        &hex[12..16],
        &hex[16..20],
        &hex[20..32]
    )
}

/// Resolve a (possibly `+`-joined) renderer name; the first one is used.
///
/// Iframe renderers write into `settings.iframe_root`, or the working
/// directory when no notebook directory is known. `iframe_connected` loads
/// plotly.js from the CDN. `iframe` loads a local copy: the configured
/// plotly.js path, or `IFRAME_DIR/plotly.min.js` next to the figure files.
///
/// # Errors
/// Returns an error for unknown names or if the iframe directory cannot be
/// created.
pub fn renderer_by_name(name: &str, settings: &Settings) -> Result<Box<dyn Renderer>> {
    let first = name.split('+').next().unwrap_or(name);
    let renderer: Box<dyn Renderer> = match first {
        "plotly_mimetype" => Box::new(MimetypeRenderer),
        "json" => Box::new(JsonRenderer),
        "notebook" => Box::new(NotebookRenderer { connected: false }),
        "notebook_connected" => Box::new(NotebookRenderer { connected: true }),
        "browser" => Box::new(BrowserRenderer),
        "iframe" => Box::new(
            IFrameRenderer::new(iframe_root(settings)?)?
                .with_plotlyjs(local_plotlyjs(&settings.plotlyjs)),
        ),
        "iframe_connected" => Box::new(IFrameRenderer::new(iframe_root(settings)?)?),
        other => {
            return Err(PlotlyLightError::invalid_option(
                "renderer",
                other,
                "a built-in renderer name",
            ));
        }
    };
    Ok(renderer)
}

fn iframe_root(settings: &Settings) -> Result<PathBuf> {
    match &settings.iframe_root {
        Some(root) => Ok(root.clone()),
        None => Ok(std::env::current_dir()?),
    }
}

/// Script source of the offline iframe renderer: a file, never the CDN and
/// never omitted.
fn local_plotlyjs(configured: &IncludePlotlyJs) -> IncludePlotlyJs {
    match configured {
        IncludePlotlyJs::Path(src) => IncludePlotlyJs::Path(src.clone()),
        IncludePlotlyJs::Cdn | IncludePlotlyJs::Omit => {
            IncludePlotlyJs::Path(LOCAL_PLOTLYJS.to_string())
        }
    }
}

/// Evcxr display protocol for one payload.
fn evcxr_content(mime: &str, payload: &Value) -> String {
    let body = match payload {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    };
    format!("EVCXR_BEGIN_CONTENT {mime}\n{body}\nEVCXR_END_CONTENT\n")
}

/// One-line stand-in for a bundle where no frontend can display it: the text
/// payload, the file an iframe points at, or the MIME types.
#[must_use]
pub fn plain_text(bundle: &MimeBundle) -> String {
    if let Some(text) = bundle.get(TEXT_MIME_TYPE).and_then(Value::as_str) {
        return text.to_string();
    }
    let iframe_src = bundle.html_content().and_then(|html| {
        html.lines()
            .find_map(|line| line.trim().strip_prefix("src=\""))
            .and_then(|rest| rest.split('"').next())
    });
    if let Some(src) = iframe_src {
        return format!("Figure written to {src}");
    }
    let mimes: Vec<_> = bundle.iter().map(|(mime, _)| mime.as_str()).collect();
    format!("Figure ({})", mimes.join(", "))
}

/// Display a bundle in the current environment.
///
/// Inside an evcxr kernel every payload is emitted through the evcxr display
/// protocol. Elsewhere [`plain_text`] is printed and the HTML is logged.
pub fn publish(bundle: &MimeBundle) {
    let mut stdout = std::io::stdout().lock();
    let result = match Environment::detect() {
        Environment::Evcxr => bundle.iter().try_for_each(|(mime, payload)| {
            stdout.write_all(evcxr_content(mime, payload).as_bytes())
        }),
        Environment::Notebook | Environment::Terminal => {
            if let Some(html) = bundle.html_content() {
                tracing::debug!(html, "no notebook frontend for html output");
            }
            writeln!(stdout, "{}", plain_text(bundle))
        }
    };
    if let Err(err) = result.and_then(|()| stdout.flush()) {
        tracing::warn!("failed to publish figure: {err}");
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
