//! Minimal layouts of the built-in plotly.js themes.
//!
//! Only the properties that distinguish the themes are carried; plotly.js
//! fills in everything else.

use serde_json::{Value, json};

use crate::layout::Layout;

/// Names accepted by [`set_default_theme`](super::set_default_theme).
pub const THEME_NAMES: &[&str] = &[
    "ggplot2",
    "seaborn",
    "simple_white",
    "plotly",
    "plotly_white",
    "plotly_dark",
    "none",
];

const PLOTLY_COLORWAY: [&str; 10] = [
    "#636efa", "#EF553B", "#00cc96", "#ab63fa", "#FFA15A", "#19d3f3", "#FF6692", "#B6E880",
    "#FF97FF", "#FECB52",
];

fn grid_axes(grid: &str, line: &str) -> Value {
    json!({
        "gridcolor": grid,
        "linecolor": line,
        "ticks": "",
        "zerolinecolor": grid,
        "automargin": true,
    })
}

fn theme_value(name: &str) -> Option<Value> {
    let value = match name {
        "plotly" => json!({
            "colorway": PLOTLY_COLORWAY,
            "paper_bgcolor": "white",
            "plot_bgcolor": "#E5ECF6",
            "font": {"color": "#2a3f5f"},
            "xaxis": grid_axes("white", "white"),
            "yaxis": grid_axes("white", "white"),
        }),
        "plotly_white" => json!({
            "colorway": PLOTLY_COLORWAY,
            "paper_bgcolor": "white",
            "plot_bgcolor": "white",
            "font": {"color": "#2a3f5f"},
            "xaxis": grid_axes("#EBF0F8", "#EBF0F8"),
            "yaxis": grid_axes("#EBF0F8", "#EBF0F8"),
        }),
        "plotly_dark" => json!({
            "colorway": PLOTLY_COLORWAY,
            "paper_bgcolor": "rgb(17,17,17)",
            "plot_bgcolor": "rgb(17,17,17)",
            "font": {"color": "#f2f5fa"},
            "xaxis": grid_axes("#283442", "#506784"),
            "yaxis": grid_axes("#283442", "#506784"),
        }),
        "ggplot2" => json!({
            "colorway": ["#F8766D", "#A3A500", "#00BF7D", "#00B0F6", "#E76BF3"],
            "paper_bgcolor": "white",
            "plot_bgcolor": "rgb(237,237,237)",
            "font": {"color": "rgb(51,51,51)"},
            "xaxis": {"gridcolor": "white", "showgrid": true, "ticks": "outside", "tickcolor": "rgb(51,51,51)"},
            "yaxis": {"gridcolor": "white", "showgrid": true, "ticks": "outside", "tickcolor": "rgb(51,51,51)"},
        }),
        "seaborn" => json!({
            "colorway": ["rgb(76,114,176)", "rgb(221,132,82)", "rgb(85,168,104)", "rgb(196,78,82)",
                         "rgb(129,114,179)", "rgb(147,120,96)", "rgb(218,139,195)",
                         "rgb(140,140,140)", "rgb(204,185,116)", "rgb(100,181,205)"],
            "paper_bgcolor": "white",
            "plot_bgcolor": "rgb(234,234,242)",
            "font": {"color": "rgb(36,36,36)"},
            "xaxis": {"gridcolor": "white", "showgrid": true, "linecolor": "white", "ticks": ""},
            "yaxis": {"gridcolor": "white", "showgrid": true, "linecolor": "white", "ticks": ""},
        }),
        "simple_white" => json!({
            "colorway": ["#1F77B4", "#FF7F0E", "#2CA02C", "#D62728", "#9467BD",
                         "#8C564B", "#E377C2", "#7F7F7F", "#BCBD22", "#17BECF"],
            "paper_bgcolor": "white",
            "plot_bgcolor": "white",
            "font": {"color": "rgb(36,36,36)"},
            "xaxis": {"showgrid": false, "showline": true, "linecolor": "rgb(36,36,36)",
                      "ticks": "outside", "mirror": false, "zeroline": false},
            "yaxis": {"showgrid": false, "showline": true, "linecolor": "rgb(36,36,36)",
                      "ticks": "outside", "mirror": false, "zeroline": false},
        }),
        "none" => json!({}),
        _ => return None,
    };
    Some(value)
}

/// Layout of a built-in theme, `None` for unknown names.
#[must_use]
pub fn theme_layout(name: &str) -> Option<Layout> {
    match theme_value(name)? {
        Value::Object(map) => Some(Layout::from_map(map)),
        _ => None,
    }
}
