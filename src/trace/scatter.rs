use serde_json::Value;

use super::{Trace, TraceKind, legend_props};
use crate::error::{PlotlyLightError, Result, ensure_len};
use crate::layout::Range;
use crate::props::{Data, Props};

/// Color of markers and lines: one color for the whole trace, or one value
/// per data point.
#[derive(Debug, Clone, PartialEq)]
pub enum ColorSpec {
    Single(String),
    /// Numeric values mapped through the color scale.
    Values(Vec<f64>),
    Names(Vec<String>),
}

impl ColorSpec {
    fn to_value(&self) -> Value {
        match self {
            Self::Single(color) => color.as_str().into(),
            Self::Values(values) => values.clone().into(),
            Self::Names(names) => names.clone().into(),
        }
    }
}

impl From<&str> for ColorSpec {
    fn from(color: &str) -> Self {
        Self::Single(color.to_string())
    }
}

/// Options for [`scatter`].
#[derive(Debug, Clone)]
#[allow(clippy::struct_excessive_bools)]
pub struct ScatterOptions {
    pub text: Option<Vec<String>>,
    /// `"[top|middle|bottom] [left|center|right]"`.
    pub text_pos: Option<String>,
    pub text_size: Option<f64>,
    pub text_col: Option<String>,
    pub opacity: Option<f64>,
    /// `"markers"`, `"lines"`, `"markers+lines"`, `"text"`, etc.
    pub mode: String,
    pub marker_size: f64,
    pub marker_width: Option<f64>,
    pub line_width: f64,
    pub col: Option<ColorSpec>,
    pub col_range: Range,
    pub col_scale: Option<String>,
    pub reverse_scale: bool,
    pub show_col_bar: bool,
    pub col_bar_title: Option<String>,
    pub col_bar_ticks: Option<Vec<f64>>,
    pub col_bar_x: Option<f64>,
    pub col_bar_y: Option<f64>,
    /// Area fill, e.g. `"toself"`.
    pub fill: Option<String>,
    pub fill_col: Option<String>,
    pub name: Option<String>,
    pub show_legend: bool,
    pub show_init: bool,
    /// Use WebGL (`scattergl`) instead of SVG.
    pub use_webgl: bool,
}

impl Default for ScatterOptions {
    fn default() -> Self {
        Self {
            text: None,
            text_pos: None,
            text_size: None,
            text_col: None,
            opacity: None,
            mode: "markers".to_string(),
            marker_size: 5.0,
            marker_width: None,
            line_width: 1.0,
            col: None,
            col_range: (None, None),
            col_scale: None,
            reverse_scale: false,
            show_col_bar: false,
            col_bar_title: None,
            col_bar_ticks: None,
            col_bar_x: None,
            col_bar_y: None,
            fill: None,
            fill_col: None,
            name: None,
            show_legend: false,
            show_init: true,
            use_webgl: true,
        }
    }
}

fn check_text_pos(pos: &str) -> Result<()> {
    let valid = pos.split_once(' ').is_some_and(|(vertical, horizontal)| {
        matches!(vertical, "top" | "middle" | "bottom")
            && matches!(horizontal, "left" | "center" | "right")
    });
    if valid {
        Ok(())
    } else {
        Err(PlotlyLightError::invalid_option(
            "text_pos",
            pos,
            "\"[top|middle|bottom] [left|center|right]\"",
        ))
    }
}

/// Color bar ticks and the color range they force.
///
/// The range is widened to cover every color value, every tick and the
/// requested range.
fn color_bar_range(
    col: Option<&ColorSpec>,
    ticks: &[f64],
    requested: Range,
) -> Result<(Vec<f64>, Range)> {
    let values = match col {
        Some(ColorSpec::Values(values)) if !values.is_empty() => values,
        _ => {
            return Err(PlotlyLightError::invalid_option(
                "col",
                "non-numeric",
                "a list of numbers when `col_bar_ticks` is set",
            ));
        }
    };
    let mut ticks = ticks.to_vec();
    ticks.sort_by(f64::total_cmp);

    let lower = values
        .iter()
        .chain(ticks.first())
        .chain(requested.0.as_ref())
        .copied()
        .fold(f64::INFINITY, f64::min);
    let upper = values
        .iter()
        .chain(ticks.last())
        .chain(requested.1.as_ref())
        .copied()
        .fold(f64::NEG_INFINITY, f64::max);

    Ok((ticks, (Some(lower), Some(upper))))
}

fn marker_props(options: &ScatterOptions, ticks: Option<Vec<f64>>, range: Range) -> Props {
    let color_bar = Props::new()
        .set_opt("title", options.col_bar_title.as_deref())
        .set_opt("tickmode", ticks.is_some().then_some("array"))
        .set_opt("tickvals", ticks)
        .set_opt("x", options.col_bar_x)
        .set_opt("y", options.col_bar_y);

    Props::new()
        .set("size", options.marker_size)
        .set_opt("color", options.col.as_ref().map(ColorSpec::to_value))
        .set_obj("colorbar", color_bar)
        .set_opt("colorscale", options.col_scale.as_deref())
        .set("reversescale", options.reverse_scale)
        .set("showscale", options.show_col_bar)
        .set_opt("cmin", range.0)
        .set_opt("cmax", range.1)
        .set_obj("line", Props::new().set_opt("width", options.marker_width))
}

/// Create a scatter trace.
///
/// # Errors
/// Returns an error if `x`, `y` and `text` differ in length, if `text_pos` is
/// malformed, or if `col_bar_ticks` is set without numeric per-point colors.
pub fn scatter(
    x: impl Into<Data>,
    y: impl Into<Data>,
    options: &ScatterOptions,
) -> Result<Trace> {
    let x = x.into();
    let y = y.into();
    ensure_len("y", y.len(), "len(x)", x.len())?;
    if let Some(text) = &options.text {
        ensure_len("text", text.len(), "len(x)", x.len())?;
    }
    if let Some(pos) = &options.text_pos {
        check_text_pos(pos)?;
    }

    let (ticks, range) = match &options.col_bar_ticks {
        Some(ticks) => {
            let (ticks, range) = color_bar_range(options.col.as_ref(), ticks, options.col_range)?;
            (Some(ticks), range)
        }
        None => (None, options.col_range),
    };

    let marker = (options.mode != "lines").then(|| marker_props(options, ticks, range));
    let line = (options.mode != "markers").then(|| {
        Props::new()
            .set("width", options.line_width)
            .set_opt("color", options.col.as_ref().map(ColorSpec::to_value))
    });

    let props = Props::new()
        .set("x", x.into_value())
        .set("y", y.into_value())
        .set_opt("text", options.text.clone())
        .set_opt("opacity", options.opacity)
        .set("mode", options.mode.as_str())
        .set_opt("hoverinfo", options.text.as_ref().map(|_| "text"))
        .set_opt("textposition", options.text_pos.as_deref())
        .set_obj(
            "textfont",
            Props::new()
                .set_opt("size", options.text_size)
                .set_opt("color", options.text_col.as_deref()),
        )
        .set_obj("marker", marker.unwrap_or_default())
        .set_obj("line", line.unwrap_or_default())
        .set_opt("fill", options.fill.as_deref())
        .set_opt("fillcolor", options.fill_col.as_deref());

    let kind = if options.use_webgl {
        TraceKind::Scattergl
    } else {
        TraceKind::Scatter
    };

    Ok(Trace::new(
        kind,
        legend_props(
            props,
            options.name.as_deref(),
            options.show_legend,
            options.show_init,
        ),
    ))
}

#[cfg(test)]
#[path = "scatter_tests.rs"]
mod tests;
