use super::{Trace, TraceKind, legend_props};
use crate::error::{Result, ensure_len};
use crate::props::{Data, Props};

/// Options for [`bar`].
#[derive(Debug, Clone)]
pub struct BarOptions {
    pub text: Option<Vec<String>>,
    /// Draw bars horizontally (`orientation: "h"`).
    pub horizontal: bool,
    pub width: Option<f64>,
    pub col: Option<String>,
    pub line_width: Option<f64>,
    pub line_col: Option<String>,
    pub opacity: f64,
    pub name: Option<String>,
    pub show_legend: bool,
    /// If false, the trace starts hidden and can be toggled from the legend.
    pub show_init: bool,
}

impl Default for BarOptions {
    fn default() -> Self {
        Self {
            text: None,
            horizontal: false,
            width: None,
            col: None,
            line_width: None,
            line_col: None,
            opacity: 1.0,
            name: None,
            show_legend: false,
            show_init: true,
        }
    }
}

/// Create a bar trace.
///
/// # Errors
/// Returns an error if `x`, `y` and `text` differ in length.
pub fn bar(x: impl Into<Data>, y: impl Into<Data>, options: &BarOptions) -> Result<Trace> {
    let x = x.into();
    let y = y.into();
    ensure_len("y", y.len(), "len(x)", x.len())?;
    if let Some(text) = &options.text {
        ensure_len("text", text.len(), "len(x)", x.len())?;
    }

    let props = Props::new()
        .set("x", x.into_value())
        .set("y", y.into_value())
        .set_opt("text", options.text.clone())
        .set_opt("orientation", options.horizontal.then_some("h"))
        .set_opt("width", options.width)
        .set_obj(
            "marker",
            Props::new()
                .set_opt("color", options.col.as_deref())
                .set_obj(
                    "line",
                    Props::new()
                        .set_opt("color", options.line_col.as_deref())
                        .set_opt("width", options.line_width),
                ),
        )
        .set("opacity", options.opacity);

    Ok(Trace::new(
        TraceKind::Bar,
        legend_props(
            props,
            options.name.as_deref(),
            options.show_legend,
            options.show_init,
        ),
    ))
}

#[cfg(test)]
#[path = "bar_tests.rs"]
mod tests;
