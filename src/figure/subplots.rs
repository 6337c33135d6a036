//! Grids of subplots assembled from traces and figures.

use serde_json::{Map, Value, json};

use super::Figure;
use crate::error::{PlotlyLightError, Result, ensure_len};
use crate::layout::{Layout, ScaleBy, autoscale_plot_font_sizes, merge_layout};
use crate::trace::Trace;

/// Which subplots share an axis.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SharedAxes {
    #[default]
    None,
    /// Subplots in the same column.
    Columns,
    /// Subplots in the same row.
    Rows,
    All,
}

/// One cell of the grid: a lone trace, or a figure whose layout applies to
/// that cell.
#[derive(Debug, Clone)]
pub enum SubplotItem {
    Trace(Trace),
    Figure(Figure),
}

impl From<Trace> for SubplotItem {
    fn from(trace: Trace) -> Self {
        Self::Trace(trace)
    }
}

impl From<Figure> for SubplotItem {
    fn from(figure: Figure) -> Self {
        Self::Figure(figure)
    }
}

impl SubplotItem {
    fn into_parts(self) -> (Vec<Trace>, Layout) {
        match self {
            Self::Trace(trace) => (vec![trace], Layout::new()),
            Self::Figure(figure) => figure.into_parts(),
        }
    }
}

/// Options for [`figure_mult`].
#[derive(Debug, Clone)]
pub struct SubplotOptions {
    /// Layout of the whole figure, merged last.
    pub layout: Option<Layout>,
    pub n_col: usize,
    /// Relative row heights, top to bottom.
    pub row_heights: Option<Vec<f64>>,
    /// Relative column widths, left to right.
    pub col_widths: Option<Vec<f64>>,
    /// Fraction of the figure width between columns.
    pub horizontal_spacing: f64,
    /// Fraction of the figure height between rows.
    pub vertical_spacing: f64,
    pub shared_xaxes: SharedAxes,
    pub shared_yaxes: SharedAxes,
    pub autoscale_font_by: ScaleBy,
}

impl Default for SubplotOptions {
    fn default() -> Self {
        Self {
            layout: None,
            n_col: 2,
            row_heights: None,
            col_widths: None,
            horizontal_spacing: 0.1,
            vertical_spacing: 0.2,
            shared_xaxes: SharedAxes::None,
            shared_yaxes: SharedAxes::None,
            autoscale_font_by: ScaleBy::Mean,
        }
    }
}

/// Axis id of the `index`-th (1-based) subplot, e.g. `x`, `x2`.
#[must_use]
pub fn axis_id(axis: char, index: usize) -> String {
    if index == 1 {
        axis.to_string()
    } else {
        format!("{axis}{index}")
    }
}

fn axis_key(axis: char, index: usize) -> String {
    if index == 1 {
        format!("{axis}axis")
    } else {
        format!("{axis}axis{index}")
    }
}

/// Domains of consecutive cells along one dimension.
///
/// `sizes` are relative; the cells plus `(n - 1)` gaps fill `[0, 1]`.
fn domains(sizes: &[f64], spacing: f64) -> Vec<(f64, f64)> {
    #[allow(clippy::cast_precision_loss)]
    let gaps = spacing * (sizes.len() - 1) as f64;
    let total: f64 = sizes.iter().sum();
    let mut start = 0.0;
    sizes
        .iter()
        .map(|size| {
            let end = start + (1.0 - gaps) * size / total;
            let domain = (start, end.min(1.0));
            start = end + spacing;
            domain
        })
        .collect()
}

fn check_sizes(option: &'static str, sizes: Option<&Vec<f64>>, n: usize) -> Result<Vec<f64>> {
    match sizes {
        Some(sizes) => {
            ensure_len(option, sizes.len(), "# of cells", n)?;
            if sizes.iter().any(|&s| !(s.is_finite() && s > 0.0)) {
                return Err(PlotlyLightError::invalid_option(
                    option,
                    format!("{sizes:?}"),
                    "positive relative sizes",
                ));
            }
            Ok(sizes.clone())
        }
        None => Ok(vec![1.0; n]),
    }
}

fn check_spacing(option: &'static str, spacing: f64, n: usize) -> Result<()> {
    #[allow(clippy::cast_precision_loss)]
    let gaps = spacing * n.saturating_sub(1) as f64;
    if (0.0..=1.0).contains(&spacing) && gaps < 1.0 {
        Ok(())
    } else {
        Err(PlotlyLightError::invalid_option(
            option,
            spacing,
            "a value in [0, 1] that leaves room for every cell",
        ))
    }
}

/// Index (1-based) of the subplot whose axis the cell `(row, col)` shares.
///
/// Axes are shared with the bottom row and the first column.
const fn shared_with(
    shared: SharedAxes,
    row: usize,
    col: usize,
    n_row: usize,
    n_col: usize,
) -> Option<usize> {
    let (r, c) = match shared {
        SharedAxes::None => return None,
        SharedAxes::Columns => (n_row - 1, col),
        SharedAxes::Rows => (row, 0),
        SharedAxes::All => (n_row - 1, 0),
    };
    if r == row && c == col {
        None
    } else {
        Some(r * n_col + c + 1)
    }
}

/// Whether cell `(row, col)` draws the tick labels of a shared axis.
const fn shows_tick_labels(
    shared: SharedAxes,
    row: usize,
    col: usize,
    n_row: usize,
    x: bool,
) -> bool {
    match shared {
        SharedAxes::None => true,
        SharedAxes::Rows if x => true,
        SharedAxes::Columns if !x => true,
        _ if x => row == n_row - 1,
        _ => col == 0,
    }
}

struct Grid {
    n_row: usize,
    n_col: usize,
    x_domains: Vec<(f64, f64)>,
    y_domains: Vec<(f64, f64)>,
}

impl Grid {
    fn new(n_items: usize, options: &SubplotOptions) -> Result<Self> {
        let n_col = options.n_col;
        if n_col == 0 {
            return Err(PlotlyLightError::invalid_option("n_col", 0, "at least 1"));
        }
        let n_row = n_items.div_ceil(n_col);
        check_spacing("horizontal_spacing", options.horizontal_spacing, n_col)?;
        check_spacing("vertical_spacing", options.vertical_spacing, n_row)?;
        let widths = check_sizes("col_widths", options.col_widths.as_ref(), n_col)?;
        let heights = check_sizes("row_heights", options.row_heights.as_ref(), n_row)?;

        // Rows are laid out top-down; domains are computed bottom-up.
        let bottom_up: Vec<f64> = heights.into_iter().rev().collect();
        let mut y_domains = domains(&bottom_up, options.vertical_spacing);
        y_domains.reverse();

        Ok(Self {
            n_row,
            n_col,
            x_domains: domains(&widths, options.horizontal_spacing),
            y_domains,
        })
    }

    fn axis(&self, axis: char, row: usize, col: usize, shared: SharedAxes) -> Map<String, Value> {
        let index = row * self.n_col + col + 1;
        let x = axis == 'x';
        let (domain, anchor) = if x {
            (self.x_domains[col], axis_id('y', index))
        } else {
            (self.y_domains[row], axis_id('x', index))
        };

        let mut map = Map::new();
        map.insert("anchor".to_string(), anchor.into());
        map.insert("domain".to_string(), json!([domain.0, domain.1]));
        if let Some(other) = shared_with(shared, row, col, self.n_row, self.n_col) {
            map.insert("matches".to_string(), axis_id(axis, other).into());
        }
        if !shows_tick_labels(shared, row, col, self.n_row, x) {
            map.insert("showticklabels".to_string(), false.into());
        }
        map
    }
}

/// Point axis references of a cell's own layout at the cell's axes.
fn retarget_axis(axis: &mut Value, index: usize) {
    for key in ["scaleanchor", "matches"] {
        if let Some(Value::String(target)) = axis.get(key) {
            let letter = target.chars().next().unwrap_or('x');
            axis[key] = axis_id(letter, index).into();
        }
    }
}

fn subplot_title(row: usize, col: usize, grid: &Grid, text: &str) -> Value {
    let (x0, x1) = grid.x_domains[col];
    json!({
        "text": text,
        "x": f64::midpoint(x0, x1),
        "y": grid.y_domains[row].1,
        "xref": "paper",
        "yref": "paper",
        "xanchor": "center",
        "yanchor": "bottom",
        "showarrow": false,
        "font": {"size": 16},
    })
}

/// Create a figure with one subplot per item, filling rows left to right.
///
/// # Errors
/// Returns an error for an empty item list, zero columns, spacings that do
/// not fit the grid, or row/column sizes that do not match the grid.
pub fn figure_mult<I>(items: I, options: &SubplotOptions) -> Result<Figure>
where
    I: IntoIterator,
    I::Item: Into<SubplotItem>,
{
    let items: Vec<SubplotItem> = items.into_iter().map(Into::into).collect();
    if items.is_empty() {
        return Err(PlotlyLightError::EmptyData);
    }
    let grid = Grid::new(items.len(), options)?;

    let mut layout = Layout::new();
    for row in 0..grid.n_row {
        for col in 0..grid.n_col {
            let index = row * grid.n_col + col + 1;
            layout.set(&axis_key('x', index), grid.axis('x', row, col, options.shared_xaxes));
            layout.set(&axis_key('y', index), grid.axis('y', row, col, options.shared_yaxes));
        }
    }

    let mut data = Vec::new();
    let mut titles = Vec::new();
    let mut images = Vec::new();
    for (i, item) in items.into_iter().enumerate() {
        let (row, col, index) = (i / grid.n_col, i % grid.n_col, i + 1);
        let (traces, sub_layout) = item.into_parts();
        let (x_id, y_id) = (axis_id('x', index), axis_id('y', index));

        for mut trace in traces {
            trace.set_axes(&x_id, &y_id);
            data.push(trace);
        }

        for axis in ['x', 'y'] {
            if let Some(mut own) = sub_layout.get(&format!("{axis}axis")).cloned() {
                retarget_axis(&mut own, index);
                let mut cell = Layout::new();
                cell.set(&axis_key(axis, index), own);
                layout = merge_layout(&layout, [&cell], false);
            }
        }

        if let Some(text) = sub_layout.get_path(&["title", "text"]).and_then(Value::as_str) {
            titles.push(subplot_title(row, col, &grid, text));
        }

        if let Some(Value::Array(own_images)) = sub_layout.get("images") {
            for image in own_images {
                let mut image = image.clone();
                image["xref"] = x_id.clone().into();
                image["yref"] = y_id.clone().into();
                images.push(image);
            }
        }
    }

    if !titles.is_empty() {
        layout.set("annotations", titles);
    }
    if !images.is_empty() {
        layout.set("images", images);
    }
    if let Some(overall) = &options.layout {
        layout = merge_layout(&layout, [overall], false);
    }
    autoscale_plot_font_sizes(&mut layout, options.autoscale_font_by);

    Ok(Figure::new(data, layout))
}

#[cfg(test)]
#[path = "subplots_tests.rs"]
mod tests;
