//! Minimal layout construction from flat, optional settings.
//!
//! Only options that are set end up in the layout, so a layout built here can
//! be merged over defaults without clobbering them.

use serde_json::Value;

use super::{Layout, Shape};
use crate::props::Props;

/// Axis range; either end may be left open.
pub type Range = (Option<f64>, Option<f64>);

/// Tick placement on an axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ticks {
    Outside,
    Inside,
    /// No ticks.
    Off,
}

impl From<bool> for Ticks {
    fn from(show: bool) -> Self {
        if show { Self::Outside } else { Self::Off }
    }
}

impl Ticks {
    const fn as_str(self) -> &'static str {
        match self {
            Self::Outside => "outside",
            Self::Inside => "inside",
            Self::Off => "",
        }
    }
}

/// Whether bounding lines/ticks are mirrored to the opposite side of the plot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mirror {
    On,
    Off,
    Ticks,
    All,
    AllTicks,
}

impl From<bool> for Mirror {
    fn from(on: bool) -> Self {
        if on { Self::On } else { Self::Off }
    }
}

impl Mirror {
    fn to_value(self) -> Value {
        match self {
            Self::On => Value::Bool(true),
            Self::Off => Value::Bool(false),
            Self::Ticks => "ticks".into(),
            Self::All => "all".into(),
            Self::AllTicks => "allticks".into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Barmode {
    Group,
    Stack,
    Overlay,
    Relative,
}

impl Barmode {
    const fn as_str(self) -> &'static str {
        match self {
            Self::Group => "group",
            Self::Stack => "stack",
            Self::Overlay => "overlay",
            Self::Relative => "relative",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hovermode {
    Closest,
    X,
    Y,
    XUnified,
    YUnified,
    /// Hover labels disabled.
    Off,
}

impl Hovermode {
    fn to_value(self) -> Value {
        match self {
            Self::Closest => "closest".into(),
            Self::X => "x".into(),
            Self::Y => "y".into(),
            Self::XUnified => "x unified".into(),
            Self::YUnified => "y unified".into(),
            Self::Off => Value::Bool(false),
        }
    }
}

/// Plot margins in pixels. Any subset may be set.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Margin {
    pub t: Option<f64>,
    pub b: Option<f64>,
    pub l: Option<f64>,
    pub r: Option<f64>,
    pub pad: Option<f64>,
}

impl Margin {
    /// Same margin on all four sides.
    #[must_use]
    pub const fn uniform(px: f64) -> Self {
        Self {
            t: Some(px),
            b: Some(px),
            l: Some(px),
            r: Some(px),
            pad: None,
        }
    }

    fn to_props(self) -> Props {
        Props::new()
            .set_opt("t", self.t)
            .set_opt("b", self.b)
            .set_opt("l", self.l)
            .set_opt("r", self.r)
            .set_opt("pad", self.pad)
    }
}

/// Options for [`layout`].
///
/// `size` fills whichever of `width`/`height` is unset. `boxed` fills unset
/// bounding lines, mirrors and ticks of both axes. Every `xy_*` option
/// overrides the corresponding `x_*` and `y_*` options.
#[derive(Debug, Clone, Default)]
#[allow(clippy::struct_excessive_bools)]
pub struct LayoutOptions {
    // plot size
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub size: Option<f64>,
    // plot range
    pub x_range: Option<Range>,
    pub y_range: Option<Range>,
    pub xy_range: Option<Range>,
    // overall font
    pub font: Option<String>,
    pub font_col: Option<String>,
    pub font_size: Option<f64>,
    // titles
    pub title: Option<String>,
    pub x_title: Option<String>,
    pub y_title: Option<String>,
    pub x_titlefontsize: Option<f64>,
    pub y_titlefontsize: Option<f64>,
    pub xy_titlefontsize: Option<f64>,
    // bounding lines, zero lines, grids
    pub boxed: Option<bool>,
    pub x_grid: Option<bool>,
    pub y_grid: Option<bool>,
    pub xy_grid: Option<bool>,
    pub grid_col: Option<String>,
    pub grid_width: Option<f64>,
    pub x_zeroline: Option<bool>,
    pub y_zeroline: Option<bool>,
    pub xy_zeroline: Option<bool>,
    pub zeroline_col: Option<String>,
    pub zeroline_width: Option<f64>,
    pub x_bounding_line: Option<bool>,
    pub y_bounding_line: Option<bool>,
    pub xy_bounding_line: Option<bool>,
    pub bounding_line_col: Option<String>,
    pub bounding_line_width: Option<f64>,
    pub x_mirror: Option<Mirror>,
    pub y_mirror: Option<Mirror>,
    pub xy_mirror: Option<Mirror>,
    // axes
    pub anchor_axes: Option<bool>,
    pub x_category: Option<bool>,
    pub y_category: Option<bool>,
    pub x_logscale: Option<bool>,
    pub y_logscale: Option<bool>,
    pub x_reversed: Option<bool>,
    pub y_reversed: Option<bool>,
    pub x_axis_hide: Option<bool>,
    pub y_axis_hide: Option<bool>,
    // axis ticks
    pub x_ticks: Option<Ticks>,
    pub y_ticks: Option<Ticks>,
    pub xy_ticks: Option<Ticks>,
    pub x_dtick: Option<f64>,
    pub y_dtick: Option<f64>,
    pub xy_dtick: Option<f64>,
    pub x_ticks_minor: Option<Ticks>,
    pub y_ticks_minor: Option<Ticks>,
    pub xy_ticks_minor: Option<Ticks>,
    pub x_nticks_minor: Option<u32>,
    pub y_nticks_minor: Option<u32>,
    pub xy_nticks_minor: Option<u32>,
    pub x_ticklabel: Option<bool>,
    pub y_ticklabel: Option<bool>,
    pub x_tickformat: Option<String>,
    pub y_tickformat: Option<String>,
    pub x_tickfontsize: Option<f64>,
    pub y_tickfontsize: Option<f64>,
    pub xy_tickfontsize: Option<f64>,
    pub x_standoff: Option<f64>,
    pub y_standoff: Option<f64>,
    pub xy_standoff: Option<f64>,
    pub tick_col: Option<String>,
    pub tick_len: Option<f64>,
    pub tick_width: Option<f64>,
    // legend
    pub show_legend: Option<bool>,
    pub legend_horizontal: Option<bool>,
    pub legend_coord: Option<Range>,
    pub legend_border_col: Option<String>,
    pub legend_border_width: Option<f64>,
    pub margin: Option<Margin>,
    // shapes
    pub shapes: Option<Vec<Shape>>,
    // bar plot
    pub barmode: Option<Barmode>,
    // interactive features
    pub hovermode: Option<Hovermode>,
}

/// Per-axis settings after `boxed` and `xy_*` have been resolved.
#[derive(Debug, Default)]
struct AxisSettings<'a> {
    title: Option<&'a str>,
    title_font_size: Option<f64>,
    standoff: Option<f64>,
    category: Option<bool>,
    logscale: Option<bool>,
    range: Option<Range>,
    reversed: Option<bool>,
    hide: Option<bool>,
    ticks: Option<Ticks>,
    ticks_minor: Option<Ticks>,
    nticks_minor: Option<u32>,
    dtick: Option<f64>,
    ticklabel: Option<bool>,
    tickformat: Option<&'a str>,
    tickfontsize: Option<f64>,
    grid: Option<bool>,
    zeroline: Option<bool>,
    bounding_line: Option<bool>,
    mirror: Option<Mirror>,
    scaleanchor: Option<&'static str>,
}

/// Axis styling shared by both axes.
struct SharedAxisStyle<'a> {
    tick_col: Option<&'a str>,
    tick_len: Option<f64>,
    tick_width: Option<f64>,
    grid_col: Option<&'a str>,
    grid_width: Option<f64>,
    zeroline_col: Option<&'a str>,
    zeroline_width: Option<f64>,
    bounding_line_col: Option<&'a str>,
    bounding_line_width: Option<f64>,
}

impl LayoutOptions {
    fn x_axis(&self) -> AxisSettings<'_> {
        AxisSettings {
            title: self.x_title.as_deref(),
            title_font_size: self.xy_titlefontsize.or(self.x_titlefontsize),
            standoff: self.xy_standoff.or(self.x_standoff),
            category: self.x_category,
            logscale: self.x_logscale,
            range: self.xy_range.or(self.x_range),
            reversed: self.x_reversed,
            hide: self.x_axis_hide,
            ticks: self.xy_ticks.or(self.x_ticks).or(self.boxed.map(Ticks::from)),
            ticks_minor: self.xy_ticks_minor.or(self.x_ticks_minor),
            nticks_minor: self.xy_nticks_minor.or(self.x_nticks_minor),
            dtick: self.xy_dtick.or(self.x_dtick),
            ticklabel: self.x_ticklabel,
            tickformat: self.x_tickformat.as_deref(),
            tickfontsize: self.xy_tickfontsize.or(self.x_tickfontsize),
            grid: self.xy_grid.or(self.x_grid),
            zeroline: self.xy_zeroline.or(self.x_zeroline),
            bounding_line: self
                .xy_bounding_line
                .or(self.x_bounding_line)
                .or(self.boxed),
            mirror: self
                .xy_mirror
                .or(self.x_mirror)
                .or(self.boxed.map(Mirror::from)),
            scaleanchor: None,
        }
    }

    fn y_axis(&self) -> AxisSettings<'_> {
        AxisSettings {
            title: self.y_title.as_deref(),
            title_font_size: self.xy_titlefontsize.or(self.y_titlefontsize),
            standoff: self.xy_standoff.or(self.y_standoff),
            category: self.y_category,
            logscale: self.y_logscale,
            range: self.xy_range.or(self.y_range),
            reversed: self.y_reversed,
            hide: self.y_axis_hide,
            ticks: self.xy_ticks.or(self.y_ticks).or(self.boxed.map(Ticks::from)),
            ticks_minor: self.xy_ticks_minor.or(self.y_ticks_minor),
            nticks_minor: self.xy_nticks_minor.or(self.y_nticks_minor),
            dtick: self.xy_dtick.or(self.y_dtick),
            ticklabel: self.y_ticklabel,
            tickformat: self.y_tickformat.as_deref(),
            tickfontsize: self.xy_tickfontsize.or(self.y_tickfontsize),
            grid: self.xy_grid.or(self.y_grid),
            zeroline: self.xy_zeroline.or(self.y_zeroline),
            bounding_line: self
                .xy_bounding_line
                .or(self.y_bounding_line)
                .or(self.boxed),
            mirror: self
                .xy_mirror
                .or(self.y_mirror)
                .or(self.boxed.map(Mirror::from)),
            scaleanchor: (self.anchor_axes == Some(true)).then_some("x"),
        }
    }

    fn shared_axis_style(&self) -> SharedAxisStyle<'_> {
        SharedAxisStyle {
            tick_col: self.tick_col.as_deref(),
            tick_len: self.tick_len,
            tick_width: self.tick_width,
            grid_col: self.grid_col.as_deref(),
            grid_width: self.grid_width,
            zeroline_col: self.zeroline_col.as_deref(),
            zeroline_width: self.zeroline_width,
            bounding_line_col: self.bounding_line_col.as_deref(),
            bounding_line_width: self.bounding_line_width,
        }
    }

    fn legend_props(&self) -> Props {
        Props::new()
            .set_opt(
                "orientation",
                (self.legend_horizontal == Some(true)).then_some("h"),
            )
            .set_opt("bordercolor", self.legend_border_col.as_deref())
            .set_opt("borderwidth", self.legend_border_width)
            .set_opt("x", self.legend_coord.and_then(|(x, _)| x))
            .set_opt("y", self.legend_coord.and_then(|(_, y)| y))
    }
}

fn range_value((start, end): Range) -> Value {
    Value::Array(vec![start.into(), end.into()])
}

fn axis_props(axis: &AxisSettings<'_>, style: &SharedAxisStyle<'_>) -> Props {
    let axis_type = if axis.category == Some(true) {
        Some("category")
    } else if axis.logscale == Some(true) {
        Some("log")
    } else {
        None
    };

    Props::new()
        .set_opt("visible", axis.hide.map(|hide| !hide))
        .set_obj(
            "title",
            Props::new()
                .set_opt("text", axis.title)
                .set_obj("font", Props::new().set_opt("size", axis.title_font_size))
                .set_opt("standoff", axis.standoff),
        )
        .set_opt("type", axis_type)
        .set_opt("range", axis.range.map(range_value))
        .set_opt(
            "autorange",
            (axis.reversed == Some(true)).then_some("reversed"),
        )
        .set_opt("scaleanchor", axis.scaleanchor)
        .set_opt("ticks", axis.ticks.map(Ticks::as_str))
        .set_obj(
            "minor",
            Props::new()
                .set_opt("ticks", axis.ticks_minor.map(Ticks::as_str))
                .set_opt("nticks", axis.nticks_minor.map(|n| n + 1)),
        )
        .set_opt("dtick", axis.dtick)
        .set_opt("showticklabels", axis.ticklabel)
        .set_opt("tickformat", axis.tickformat)
        .set_obj("tickfont", Props::new().set_opt("size", axis.tickfontsize))
        .set_opt("tickcolor", style.tick_col)
        .set_opt("ticklen", style.tick_len)
        .set_opt("tickwidth", style.tick_width)
        .set_opt("showgrid", axis.grid)
        .set_opt("gridcolor", style.grid_col)
        .set_opt("gridwidth", style.grid_width)
        .set_opt("zeroline", axis.zeroline)
        .set_opt("zerolinecolor", style.zeroline_col)
        .set_opt("zerolinewidth", style.zeroline_width)
        .set_opt("showline", axis.bounding_line)
        .set_opt("linecolor", style.bounding_line_col)
        .set_opt("linewidth", style.bounding_line_width)
        .set_opt("mirror", axis.mirror.map(Mirror::to_value))
}

/// Create a minimal layout object containing only the options that are set.
#[must_use]
pub fn layout(options: &LayoutOptions) -> Layout {
    let width = options.width.or(options.size);
    let height = options.height.or(options.size);
    let style = options.shared_axis_style();

    let shapes = options
        .shapes
        .as_ref()
        .map(|shapes| Value::Array(shapes.iter().map(Shape::to_value).collect()));

    let props = Props::new()
        .set_opt("width", width)
        .set_opt("height", height)
        .set_obj(
            "font",
            Props::new()
                .set_opt("family", options.font.as_deref())
                .set_opt("size", options.font_size)
                .set_opt("color", options.font_col.as_deref()),
        )
        .set_obj("title", Props::new().set_opt("text", options.title.as_deref()))
        .set_obj("xaxis", axis_props(&options.x_axis(), &style))
        .set_obj("yaxis", axis_props(&options.y_axis(), &style))
        .set_opt("showlegend", options.show_legend)
        .set_obj("legend", options.legend_props())
        .set_obj("margin", options.margin.map(Margin::to_props).unwrap_or_default())
        .set_opt("shapes", shapes)
        .set_opt("barmode", options.barmode.map(Barmode::as_str))
        .set_opt("hovermode", options.hovermode.map(Hovermode::to_value));

    Layout::from_map(props.into_map())
}

#[cfg(test)]
#[path = "options_tests.rs"]
mod tests;
