use serde_json::Value;

use super::{ColorSpec, ScatterOptions, Trace, check_layer, check_ref, scatter};
use crate::error::{Result, ensure_len};
use crate::layout::Shape;
use crate::props::{Data, Props};

/// Line segment `(x0, y0, x1, y1)`.
pub type Coord = (f64, f64, f64, f64);

/// Options for [`lines`].
#[derive(Debug, Clone)]
pub struct LinesOptions {
    /// One text per segment.
    pub text: Option<Vec<String>>,
    pub width: f64,
    /// Line color; `None` leaves it to the layout's colorway.
    pub col: Option<String>,
    pub opacity: Option<f64>,
    pub name: Option<String>,
    pub show_legend: bool,
    pub show_init: bool,
    pub use_webgl: bool,
}

impl Default for LinesOptions {
    fn default() -> Self {
        Self {
            text: None,
            width: 1.0,
            col: Some("black".to_string()),
            opacity: None,
            name: None,
            show_legend: false,
            show_init: true,
            use_webgl: false,
        }
    }
}

/// Draw a collection of line segments sharing width and color as a single
/// scatter trace. Segments are separated by `null` points.
///
/// # Errors
/// Returns an error if `text` is given with a length other than the number
/// of segments.
pub fn lines(coords: &[Coord], options: &LinesOptions) -> Result<Trace> {
    let segments: Vec<[(Value, Value); 2]> = coords
        .iter()
        .map(|&(x0, y0, x1, y1)| {
            [
                (Value::from(x0), Value::from(y0)),
                (Value::from(x1), Value::from(y1)),
            ]
        })
        .collect();
    segment_trace(&segments, options)
}

/// Segments given as point pairs; x values may be categories.
pub(super) fn segment_trace(
    segments: &[[(Value, Value); 2]],
    options: &LinesOptions,
) -> Result<Trace> {
    let mut xs = Vec::with_capacity(segments.len() * 3);
    let mut ys = Vec::with_capacity(segments.len() * 3);
    for [(x0, y0), (x1, y1)] in segments {
        xs.extend([x0.clone(), x1.clone(), Value::Null]);
        ys.extend([y0.clone(), y1.clone(), Value::Null]);
    }

    let text = match &options.text {
        Some(text) => {
            ensure_len("text", text.len(), "# of lines", segments.len())?;
            Some(
                text.iter()
                    .flat_map(|t| [t.clone(), t.clone(), String::new()])
                    .collect(),
            )
        }
        None => None,
    };

    scatter(
        Data::from(xs),
        Data::from(ys),
        &ScatterOptions {
            text,
            mode: "lines".to_string(),
            line_width: options.width,
            col: options.col.as_deref().map(ColorSpec::from),
            opacity: options.opacity,
            name: options.name.clone(),
            show_legend: options.show_legend,
            show_init: options.show_init,
            use_webgl: options.use_webgl,
            ..Default::default()
        },
    )
}

/// Options for [`lines_shape`].
#[derive(Debug, Clone)]
pub struct LineShapeOptions {
    pub width: f64,
    pub col: String,
    pub opacity: Option<f64>,
    /// `"x"` or `"paper"` (relative position within the whole x-axis).
    pub xref: String,
    /// `"y"` or `"paper"`.
    pub yref: String,
    /// `"above"` or `"below"` the traces.
    pub layer: String,
}

impl Default for LineShapeOptions {
    fn default() -> Self {
        Self {
            width: 1.0,
            col: "black".to_string(),
            opacity: None,
            xref: "x".to_string(),
            yref: "y".to_string(),
            layer: "above".to_string(),
        }
    }
}

/// Non-interactive line shapes, one per segment.
///
/// # Errors
/// Returns an error if `xref`, `yref` or `layer` is not an allowed value.
pub fn lines_shape(coords: &[Coord], options: &LineShapeOptions) -> Result<Vec<Shape>> {
    check_ref("xref", &options.xref, "x")?;
    check_ref("yref", &options.yref, "y")?;
    check_layer(&options.layer)?;

    Ok(coords
        .iter()
        .map(|&(x0, y0, x1, y1)| {
            let props = Props::new()
                .set("type", "line")
                .set("xref", options.xref.as_str())
                .set("yref", options.yref.as_str())
                .set("x0", x0)
                .set("y0", y0)
                .set("x1", x1)
                .set("y1", y1)
                .set_obj(
                    "line",
                    Props::new()
                        .set("color", options.col.as_str())
                        .set("width", options.width),
                )
                .set_opt("opacity", options.opacity)
                .set("layer", options.layer.as_str());
            Shape::from_map(props.into_map())
        })
        .collect())
}

#[cfg(test)]
#[path = "lines_tests.rs"]
mod tests;
