//! Built-in plot defaults: sizes, fonts, line widths, layout and display config.

use serde_json::{Value, json};

use crate::color::DEFAULT_COLORWAY;
use crate::layout::Layout;

/// Output resolution of static images.
pub const DPI: f64 = 300.0;
/// Physical edge length (inches) that a default-sized plot maps to at `DPI`.
pub const PLOT_INCH: f64 = 5.0;

/// Base width/height of plots; font sizes and line widths scale relative to it.
pub const PLOT_SIZE: f64 = 500.0;
pub const FONT_SIZE: f64 = 20.0;
/// Autoscaled font sizes are clamped to `[MIN_FONT_SIZE, MAX_FONT_SIZE]`.
pub const MIN_FONT_SIZE: f64 = 16.0;
pub const MAX_FONT_SIZE: f64 = 28.0;
pub const GRID_WIDTH: f64 = 1.0;
pub const TICK_LEN: f64 = 7.0;
pub const TICK_WIDTH: f64 = 1.2;
pub const NTICKS_MINOR: u32 = 1;
pub const BOUNDING_LINE_WIDTH: f64 = 1.0;
pub const ZEROLINE_WIDTH: f64 = 1.0;
pub const LEGEND_BORDER_WIDTH: f64 = 1.0;

/// Base theme; colors and some appearances are overridden by [`default_layout`].
pub const DEFAULT_THEME: &str = "simple_white";

/// Directory (relative to the notebook) holding rendered plot HTML files.
pub const IFRAME_DIR: &str = "iframe_figures";
/// plotly.js file the offline `iframe` renderer loads, relative to `IFRAME_DIR`.
pub const LOCAL_PLOTLYJS: &str = "plotly.min.js";

/// Height used for plots without an explicit layout height.
pub const DEFAULT_PLOT_HEIGHT: f64 = 525.0;
/// Extra iframe space so the iframe does not get its own scroll bar.
pub const IFRAME_BUFFER: f64 = 20.0;

const GRID_COLOR: &str = "rgb(232,232,232)";

fn axis_defaults() -> Value {
    json!({
        "automargin": true,
        "title": {"standoff": 15},
        "ticks": "outside",
        "ticklen": TICK_LEN,
        "tickwidth": TICK_WIDTH,
        "tickcolor": "black",
        "showgrid": false,
        "gridcolor": GRID_COLOR,
        "gridwidth": GRID_WIDTH,
        "showline": true,
        "linecolor": "black",
        "linewidth": BOUNDING_LINE_WIDTH,
        "zeroline": false,
        "zerolinecolor": "lightgray",
        "zerolinewidth": ZEROLINE_WIDTH,
        "minor": {"nticks": NTICKS_MINOR + 1},
    })
}

fn polar_axis() -> Value {
    json!({
        "gridcolor": GRID_COLOR,
        "linecolor": "black",
        "showgrid": false,
        "showline": false,
        "ticks": "",
    })
}

fn scene_axis() -> Value {
    json!({
        "backgroundcolor": "white",
        "gridcolor": GRID_COLOR,
        "gridwidth": 2,
        "linecolor": "black",
        "showbackground": true,
        "showgrid": false,
        "showline": false,
        "ticks": "",
        "zeroline": true,
        "zerolinecolor": "lightgray",
    })
}

fn sequential_scale() -> Value {
    json!([
        [0.0, "#440154"],
        [0.111_111_111_111_111_1, "#482878"],
        [0.222_222_222_222_222_2, "#3e4989"],
        [0.333_333_333_333_333_3, "#31688e"],
        [0.444_444_444_444_444_4, "#26828e"],
        [0.555_555_555_555_555_6, "#1f9e89"],
        [0.666_666_666_666_666_6, "#35b779"],
        [0.777_777_777_777_777_8, "#6ece58"],
        [0.888_888_888_888_888_8, "#b5de2b"],
        [1.0, "#fde725"],
    ])
}

fn diverging_scale() -> Value {
    json!([
        [0.0, "rgb(103,0,31)"],
        [0.1, "rgb(178,24,43)"],
        [0.2, "rgb(214,96,77)"],
        [0.3, "rgb(244,165,130)"],
        [0.4, "rgb(253,219,199)"],
        [0.5, "rgb(247,247,247)"],
        [0.6, "rgb(209,229,240)"],
        [0.7, "rgb(146,197,222)"],
        [0.8, "rgb(67,147,195)"],
        [0.9, "rgb(33,102,172)"],
        [1.0, "rgb(5,48,97)"],
    ])
}

/// The default layout applied on top of the default theme.
#[must_use]
pub fn default_layout() -> Layout {
    let mut ternary_a = polar_axis();
    ternary_a["showline"] = Value::Bool(true);

    let value = json!({
        "width": PLOT_SIZE,
        "height": PLOT_SIZE,
        "annotationdefaults": {"arrowhead": 0, "arrowwidth": 1},
        "autotypenumbers": "strict",
        "coloraxis": {
            "colorbar": {"outlinewidth": 1, "tickcolor": "lightgray", "ticks": ""}
        },
        "colorscale": {
            "diverging": diverging_scale(),
            "sequential": sequential_scale(),
            "sequentialminus": sequential_scale(),
        },
        "colorway": DEFAULT_COLORWAY,
        "paper_bgcolor": "white",
        "plot_bgcolor": "white",
        "font": {"color": "black", "family": "Arial", "size": FONT_SIZE},
        "title": {"x": 0.05},
        "legend": {"bordercolor": "black", "borderwidth": LEGEND_BORDER_WIDTH},
        "shapedefaults": {"fillcolor": "black", "line": {"width": 0}, "opacity": 1},
        "margin": {"b": 10, "l": 10, "r": 10, "t": 50},
        "hovermode": "closest",
        "hoverlabel": {"align": "left"},
        "mapbox": {"style": "light"},
        "xaxis": axis_defaults(),
        "yaxis": axis_defaults(),
        "geo": {
            "bgcolor": "white",
            "lakecolor": "white",
            "landcolor": "white",
            "showlakes": true,
            "showland": true,
            "subunitcolor": "white",
        },
        "polar": {
            "angularaxis": polar_axis(),
            "bgcolor": "white",
            "radialaxis": polar_axis(),
        },
        "scene": {
            "xaxis": scene_axis(),
            "yaxis": scene_axis(),
            "zaxis": scene_axis(),
        },
        "ternary": {
            "aaxis": ternary_a,
            "baxis": polar_axis(),
            "bgcolor": "white",
            "caxis": polar_axis(),
        },
    });

    match value {
        Value::Object(map) => Layout::from_map(map),
        _ => Layout::new(),
    }
}

/// The default plotly.js display config.
#[must_use]
pub fn default_config() -> Value {
    json!({
        "showTips": false,
        "displaylogo": false,
        "modeBarButtonsToAdd": ["hoverclosest", "hovercompare"],
        "toImageButtonOptions": {"format": "svg"},
    })
}

#[cfg(test)]
#[path = "defaults_tests.rs"]
mod tests;
