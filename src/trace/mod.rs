//! Shorthand constructors for Plotly traces and shapes.
//!
//! Each constructor translates a small set of named options into one trace
//! (or a list of layout shapes). Lengths and enumerated options are checked
//! up front and reported as [`PlotlyLightError`](crate::PlotlyLightError).

mod bar;
mod binning;
mod box_plot;
mod histogram;
mod lines;
mod rect;
mod scatter;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::{PlotlyLightError, Result};
use crate::props::Props;

pub use bar::{BarOptions, bar};
pub use binning::{Histogram, histogram};
pub use box_plot::{BoxOptions, Side, ViolinOptions, box_plot, violin};
pub use histogram::{HistData, HistOptions, hist};
pub use lines::{Coord, LineShapeOptions, LinesOptions, lines, lines_shape};
pub use rect::{Point, RectOptions, RectShapeOptions, closures, rects, rects_shape};
pub use scatter::{ColorSpec, ScatterOptions, scatter};

/// Plotly trace type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TraceKind {
    Bar,
    Scatter,
    Scattergl,
    Histogram,
    Box,
    Violin,
}

/// One data series: its type plus Plotly properties.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Trace {
    #[serde(rename = "type")]
    kind: TraceKind,
    #[serde(flatten)]
    props: Map<String, Value>,
}

impl Trace {
    #[must_use]
    pub fn new(kind: TraceKind, props: Props) -> Self {
        Self {
            kind,
            props: props.into_map(),
        }
    }

    #[must_use]
    pub const fn kind(&self) -> TraceKind {
        self.kind
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.props.get(key)
    }

    #[must_use]
    pub const fn props(&self) -> &Map<String, Value> {
        &self.props
    }

    /// Attach the trace to a pair of (sub)plot axes, e.g. `("x2", "y2")`.
    pub(crate) fn set_axes(&mut self, xaxis: &str, yaxis: &str) {
        self.props.insert("xaxis".to_string(), xaxis.into());
        self.props.insert("yaxis".to_string(), yaxis.into());
    }

    #[must_use]
    pub fn to_value(&self) -> Value {
        let mut map = Map::new();
        map.insert(
            "type".to_string(),
            serde_json::to_value(self.kind).unwrap_or(Value::Null),
        );
        map.extend(self.props.clone());
        Value::Object(map)
    }
}

/// Common legend options shared by every trace constructor.
fn legend_props(props: Props, name: Option<&str>, show_legend: bool, show_init: bool) -> Props {
    props
        .set_opt("name", name)
        .set("showlegend", show_legend)
        .set_opt("visible", (!show_init).then_some("legendonly"))
}

/// Validate an axis reference of a shape: the axis itself or `"paper"`.
fn check_ref(option: &'static str, value: &str, axis: &str) -> Result<()> {
    if value == axis || value == "paper" {
        Ok(())
    } else {
        Err(PlotlyLightError::invalid_option(
            option,
            value,
            "the axis id or 'paper'",
        ))
    }
}

fn check_layer(layer: &str) -> Result<()> {
    if matches!(layer, "above" | "below") {
        Ok(())
    } else {
        Err(PlotlyLightError::invalid_option(
            "layer",
            layer,
            "'above' or 'below'",
        ))
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
