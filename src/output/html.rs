//! Standalone HTML for figures.

use std::fmt::{self, Write};
use std::str::FromStr;

use serde_json::{Map, Value};

use crate::defaults::DEFAULT_PLOT_HEIGHT;
use crate::error::Result;
use crate::figure::Figure;

/// plotly.js bundle loaded by connected outputs.
pub const PLOTLY_CDN: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";

/// How an HTML output gets hold of plotly.js.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum IncludePlotlyJs {
    /// `<script>` tag pointing at [`PLOTLY_CDN`].
    #[default]
    Cdn,
    /// `<script>` tag pointing at a local or remote file.
    Path(String),
    /// No script tag; the page must provide plotly.js.
    Omit,
}

impl IncludePlotlyJs {
    #[must_use]
    pub fn script_tag(&self) -> String {
        match self {
            Self::Cdn => format!(r#"<script charset="utf-8" src="{PLOTLY_CDN}"></script>"#),
            Self::Path(src) => format!(r#"<script charset="utf-8" src="{src}"></script>"#),
            Self::Omit => String::new(),
        }
    }
}

impl fmt::Display for IncludePlotlyJs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cdn => f.write_str("cdn"),
            Self::Path(src) => f.write_str(src),
            Self::Omit => f.write_str("omit"),
        }
    }
}

impl FromStr for IncludePlotlyJs {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(match s {
            "cdn" => Self::Cdn,
            "omit" | "none" | "false" => Self::Omit,
            path => Self::Path(path.to_string()),
        })
    }
}

/// JSON that is safe to place inside a `<script>` element.
fn script_json(value: &Value) -> Result<String> {
    Ok(serde_json::to_string(value)?.replace("</", "<\\/"))
}

fn css_size(value: Option<&Value>, fallback: &str) -> String {
    value
        .and_then(Value::as_f64)
        .map_or_else(|| fallback.to_string(), |px| format!("{px}px"))
}

/// The plot `<div>` and the script drawing into it.
///
/// # Errors
/// Returns an error if the figure cannot be serialized.
pub fn to_div(figure: &Value, config: &Map<String, Value>, div_id: &str) -> Result<String> {
    let empty = Value::Object(Map::new());
    let layout = figure.get("layout").unwrap_or(&empty);
    let data = figure.get("data").cloned().unwrap_or(Value::Array(Vec::new()));
    let width = css_size(layout.get("width"), "100%");
    let height = css_size(layout.get("height"), &format!("{DEFAULT_PLOT_HEIGHT}px"));

    let mut output = String::new();
    let _ = writeln!(
        output,
        r#"<div id="{div_id}" class="plotly-graph-div" style="height:{height}; width:{width};"></div>"#
    );
    let _ = writeln!(output, r#"<script type="text/javascript">"#);
    let _ = writeln!(output, "    window.PLOTLYENV=window.PLOTLYENV || {{}};");
    let _ = writeln!(output, r#"    if (document.getElementById("{div_id}")) {{"#);
    let _ = writeln!(
        output,
        r#"        Plotly.newPlot("{div_id}", {}, {}, {});"#,
        script_json(&data)?,
        script_json(layout)?,
        script_json(&Value::Object(config.clone()))?
    );
    let _ = writeln!(output, "    }}");
    output.push_str("</script>");
    Ok(output)
}

/// A complete HTML document showing figure JSON.
///
/// # Errors
/// Returns an error if the figure cannot be serialized.
pub fn document(
    figure: &Value,
    config: &Map<String, Value>,
    include: &IncludePlotlyJs,
    div_id: Option<&str>,
) -> Result<String> {
    let div_id = div_id.map_or_else(crate::renderer::unique_id, str::to_string);
    let div = to_div(figure, config, &div_id)?;

    let mut output = String::new();
    let _ = writeln!(output, "<html>");
    let _ = writeln!(output, "<head><meta charset=\"utf-8\" /></head>");
    let _ = writeln!(output, "<body>");
    let _ = writeln!(output, "    <div>");
    let script = include.script_tag();
    if !script.is_empty() {
        let _ = writeln!(output, "        {script}");
    }
    for line in div.lines() {
        let _ = writeln!(output, "        {line}");
    }
    let _ = writeln!(output, "    </div>");
    let _ = writeln!(output, "</body>");
    output.push_str("</html>\n");
    Ok(output)
}

/// Standalone HTML for a figure, with the default template applied.
///
/// # Errors
/// Returns an error if the figure cannot be serialized.
pub fn to_html(
    figure: &Figure,
    config: &Map<String, Value>,
    include: &IncludePlotlyJs,
    div_id: Option<&str>,
) -> Result<String> {
    document(&figure.to_plotly_json(), config, include, div_id)
}

#[cfg(test)]
#[path = "html_tests.rs"]
mod tests;
