use super::{Trace, TraceKind, legend_props};
use crate::error::{Result, ensure_len};
use crate::props::{Data, Props};
use crate::settings;

const TRANSPARENT: &str = "rgba(255,255,255,0)";

/// Options for [`box_plot`].
#[derive(Debug, Clone)]
#[allow(clippy::struct_excessive_bools)]
pub struct BoxOptions {
    pub text: Option<Vec<String>>,
    pub name: Option<String>,
    pub col: Option<String>,
    pub opacity: f64,
    /// Plot the data points as well as the box.
    pub show_points: bool,
    /// Plot only the data points and hide the box.
    pub only_points: bool,
    pub marker_size: Option<f64>,
    pub horizontal: bool,
    pub show_legend: bool,
    pub show_init: bool,
}

impl Default for BoxOptions {
    fn default() -> Self {
        Self {
            text: None,
            name: None,
            col: None,
            opacity: 1.0,
            show_points: false,
            only_points: false,
            marker_size: None,
            horizontal: false,
            show_legend: false,
            show_init: true,
        }
    }
}

/// Place `data` on the value axis (`y`, or `x` when horizontal).
fn value_axis(props: Props, data: Data, horizontal: bool) -> Props {
    let key = if horizontal { "x" } else { "y" };
    props
        .set(key, data.into_value())
        .set_opt("orientation", horizontal.then_some("h"))
}

/// Create a box plot trace.
///
/// # Errors
/// Returns an error if `text` is given with a length other than `data`'s.
pub fn box_plot(data: impl Into<Data>, options: &BoxOptions) -> Result<Trace> {
    let data = data.into();
    if let Some(text) = &options.text {
        ensure_len("text", text.len(), "len(data)", data.len())?;
    }

    let only_points = options.only_points;
    let marker_col = match (&options.col, only_points) {
        (Some(col), _) => Some(col.clone()),
        (None, true) => settings::primary_color(),
        (None, false) => None,
    };

    let props = value_axis(Props::new(), data, options.horizontal)
        .set_opt("text", options.text.clone())
        .set_opt(
            "boxpoints",
            (options.show_points || only_points).then_some("all"),
        )
        .set_opt("pointpos", only_points.then_some(0))
        .set_opt("hoveron", only_points.then_some("points"))
        .set_opt("fillcolor", only_points.then_some(TRANSPARENT))
        .set_obj(
            "line",
            Props::new().set_opt("color", only_points.then_some(TRANSPARENT)),
        )
        .set_obj(
            "marker",
            Props::new()
                .set_opt("color", marker_col)
                .set_opt("size", options.marker_size),
        )
        .set("opacity", options.opacity);

    Ok(Trace::new(
        TraceKind::Box,
        legend_props(
            props,
            options.name.as_deref(),
            options.show_legend,
            options.show_init,
        ),
    ))
}

/// Which half of a violin is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Positive,
    Negative,
}

impl Side {
    const fn as_str(self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Negative => "negative",
        }
    }
}

/// Options for [`violin`].
#[derive(Debug, Clone)]
#[allow(clippy::struct_excessive_bools)]
pub struct ViolinOptions {
    pub text: Option<Vec<String>>,
    pub name: Option<String>,
    pub col: Option<String>,
    pub opacity: f64,
    /// Draw only one half; both halves when `None`.
    pub side: Option<Side>,
    /// Point position relative to the violin; defaults to 1 for the positive side.
    pub pointpos: Option<f64>,
    pub show_box: bool,
    pub show_points: bool,
    pub horizontal: bool,
    pub show_legend: bool,
    pub show_init: bool,
}

impl Default for ViolinOptions {
    fn default() -> Self {
        Self {
            text: None,
            name: None,
            col: None,
            opacity: 1.0,
            side: None,
            pointpos: None,
            show_box: false,
            show_points: false,
            horizontal: false,
            show_legend: false,
            show_init: true,
        }
    }
}

/// Create a violin plot trace.
///
/// # Errors
/// Returns an error if `text` is given with a length other than `data`'s.
pub fn violin(data: impl Into<Data>, options: &ViolinOptions) -> Result<Trace> {
    let data = data.into();
    if let Some(text) = &options.text {
        ensure_len("text", text.len(), "len(data)", data.len())?;
    }

    let pointpos = options
        .pointpos
        .or_else(|| (options.side == Some(Side::Positive)).then_some(1.0));

    let props = value_axis(Props::new(), data, options.horizontal)
        .set_opt("text", options.text.clone())
        .set_obj("box", Props::new().set("visible", options.show_box))
        .set_opt("points", options.show_points.then_some("all"))
        .set_obj(
            "marker",
            Props::new().set_opt("color", options.col.as_deref()),
        )
        .set("opacity", options.opacity)
        .set_opt("side", options.side.map(Side::as_str))
        .set_opt("pointpos", pointpos);

    Ok(Trace::new(
        TraceKind::Violin,
        legend_props(
            props,
            options.name.as_deref(),
            options.show_legend,
            options.show_init,
        ),
    ))
}

#[cfg(test)]
#[path = "box_plot_tests.rs"]
mod tests;
