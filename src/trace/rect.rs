use serde_json::Value;

use super::{ColorSpec, Coord, ScatterOptions, Trace, check_layer, check_ref, scatter};
use crate::error::Result;
use crate::layout::Shape;
use crate::props::{Data, Props};

/// Polygon vertex `(x, y)`.
pub type Point = (f64, f64);

/// Options for [`closures`] and [`rects`].
#[derive(Debug, Clone)]
pub struct RectOptions {
    pub frame_width: f64,
    pub frame_col: Option<String>,
    /// Fill color; `None` leaves shapes unfilled. Use `rgba()` for transparency.
    pub fill_col: Option<String>,
    pub opacity: f64,
    pub name: Option<String>,
    pub show_legend: bool,
    pub show_init: bool,
    pub use_webgl: bool,
}

impl Default for RectOptions {
    fn default() -> Self {
        Self {
            frame_width: 1.0,
            frame_col: Some("black".to_string()),
            fill_col: Some("gray".to_string()),
            opacity: 1.0,
            name: None,
            show_legend: false,
            show_init: true,
            use_webgl: false,
        }
    }
}

/// Draw closed polygons as one trace. Each polygon is closed by repeating
/// its first vertex; empty polygons are skipped.
///
/// # Errors
/// Propagates errors from the underlying scatter trace construction.
pub fn closures(polygons: &[Vec<Point>], options: &RectOptions) -> Result<Trace> {
    let mut xs = Vec::new();
    let mut ys = Vec::new();
    for polygon in polygons {
        let Some(&(first_x, first_y)) = polygon.first() else {
            continue;
        };
        for &(x, y) in polygon {
            xs.push(Value::from(x));
            ys.push(Value::from(y));
        }
        xs.extend([Value::from(first_x), Value::Null]);
        ys.extend([Value::from(first_y), Value::Null]);
    }

    scatter(
        Data::from(xs),
        Data::from(ys),
        &ScatterOptions {
            mode: "lines".to_string(),
            line_width: options.frame_width,
            col: options.frame_col.as_deref().map(ColorSpec::from),
            opacity: Some(options.opacity),
            fill: options.fill_col.as_ref().map(|_| "toself".to_string()),
            fill_col: options.fill_col.clone(),
            name: options.name.clone(),
            show_legend: options.show_legend,
            show_init: options.show_init,
            use_webgl: options.use_webgl,
            ..Default::default()
        },
    )
}

/// Draw axis-aligned rectangles `(x0, y0, x1, y1)` as one trace.
///
/// # Errors
/// Propagates errors from the underlying scatter trace construction.
pub fn rects(coords: &[Coord], options: &RectOptions) -> Result<Trace> {
    let polygons: Vec<Vec<Point>> = coords
        .iter()
        .map(|&(x0, y0, x1, y1)| vec![(x0, y0), (x0, y1), (x1, y1), (x1, y0)])
        .collect();
    closures(&polygons, options)
}

/// Options for [`rects_shape`].
#[derive(Debug, Clone)]
pub struct RectShapeOptions {
    /// `"x"` or `"paper"`.
    pub xref: String,
    /// `"y"` or `"paper"`.
    pub yref: String,
    /// For a transparent rectangle use `"rgba(0,0,0,0)"`.
    pub fill_col: String,
    pub opacity: f64,
    pub frame_width: f64,
    pub frame_col: Option<String>,
    /// `"above"` or `"below"` the traces.
    pub layer: String,
}

impl Default for RectShapeOptions {
    fn default() -> Self {
        Self {
            xref: "x".to_string(),
            yref: "y".to_string(),
            fill_col: "grey".to_string(),
            opacity: 1.0,
            frame_width: 1.0,
            frame_col: Some("black".to_string()),
            layer: "above".to_string(),
        }
    }
}

/// Non-interactive rectangle shapes, one per coordinate.
///
/// # Errors
/// Returns an error if `xref`, `yref` or `layer` is not an allowed value.
pub fn rects_shape(coords: &[Coord], options: &RectShapeOptions) -> Result<Vec<Shape>> {
    check_ref("xref", &options.xref, "x")?;
    check_ref("yref", &options.yref, "y")?;
    check_layer(&options.layer)?;

    Ok(coords
        .iter()
        .map(|&(x0, y0, x1, y1)| {
            let props = Props::new()
                .set("type", "rect")
                .set("xref", options.xref.as_str())
                .set("yref", options.yref.as_str())
                .set("x0", x0)
                .set("y0", y0)
                .set("x1", x1)
                .set("y1", y1)
                .set("fillcolor", options.fill_col.as_str())
                .set("opacity", options.opacity)
                .set_obj(
                    "line",
                    Props::new()
                        .set_opt("color", options.frame_col.as_deref())
                        .set("width", options.frame_width),
                )
                .set("layer", options.layer.as_str());
            Shape::from_map(props.into_map())
        })
        .collect())
}

#[cfg(test)]
#[path = "rect_tests.rs"]
mod tests;
