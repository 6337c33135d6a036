//! Font sizes and line widths proportional to the plot size.

use std::fmt;
use std::str::FromStr;

use serde_json::Value;

use super::Layout;
use crate::defaults;
use crate::error::PlotlyLightError;

/// Which plot dimension(s) the autoscale factor is derived from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ScaleBy {
    Width,
    Height,
    #[default]
    Mean,
    Min,
    Max,
}

impl ScaleBy {
    fn scale(self, width: f64, height: f64) -> f64 {
        let size = match self {
            Self::Width => width,
            Self::Height => height,
            Self::Mean => f64::midpoint(width, height),
            Self::Min => width.min(height),
            Self::Max => width.max(height),
        };
        size / defaults::PLOT_SIZE
    }
}

impl FromStr for ScaleBy {
    type Err = PlotlyLightError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "width" => Ok(Self::Width),
            "height" => Ok(Self::Height),
            "mean" => Ok(Self::Mean),
            "min" => Ok(Self::Min),
            "max" => Ok(Self::Max),
            other => Err(PlotlyLightError::invalid_option(
                "by",
                other,
                "one of width, height, mean, min, max",
            )),
        }
    }
}

impl fmt::Display for ScaleBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Width => write!(f, "width"),
            Self::Height => write!(f, "height"),
            Self::Mean => write!(f, "mean"),
            Self::Min => write!(f, "min"),
            Self::Max => write!(f, "max"),
        }
    }
}

/// Line widths scaled along with the plot, with their unscaled defaults.
const SCALED_AXIS_WIDTHS: &[(&str, f64)] = &[
    ("gridwidth", defaults::GRID_WIDTH),
    ("ticklen", defaults::TICK_LEN),
    ("tickwidth", defaults::TICK_WIDTH),
    ("linewidth", defaults::BOUNDING_LINE_WIDTH),
    ("zerolinewidth", defaults::ZEROLINE_WIDTH),
];

fn set_if_unset(layout: &mut Layout, path: &[&str], value: f64) {
    if layout.get_path(path).is_none_or(Value::is_null) {
        layout.set_path(path, value);
    }
}

/// Fill unset font size and line widths of `layout` in proportion to its size.
///
/// Missing width/height are set to [`defaults::PLOT_SIZE`]. The font size is
/// clamped to `[MIN_FONT_SIZE, MAX_FONT_SIZE]`; line widths never shrink
/// below their defaults.
pub fn autoscale_plot_font_sizes(layout: &mut Layout, by: ScaleBy) {
    let width = layout.width().unwrap_or(defaults::PLOT_SIZE);
    let height = layout.height().unwrap_or(defaults::PLOT_SIZE);
    layout.set("width", width);
    layout.set("height", height);

    let scale = by.scale(width, height);

    let font_size = (defaults::FONT_SIZE * scale)
        .max(defaults::MIN_FONT_SIZE)
        .min(defaults::MAX_FONT_SIZE);
    set_if_unset(layout, &["font", "size"], font_size);

    let scale = scale.max(1.0);
    for axis in ["xaxis", "yaxis"] {
        for (key, base) in SCALED_AXIS_WIDTHS {
            set_if_unset(layout, &[axis, key], base * scale);
        }
    }
    set_if_unset(
        layout,
        &["legend", "borderwidth"],
        defaults::LEGEND_BORDER_WIDTH * scale,
    );
}

#[cfg(test)]
#[path = "autoscale_tests.rs"]
mod tests;
