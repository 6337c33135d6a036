//! Figures: traces plus a layout, serialized to Plotly figure JSON.

mod subplots;

use serde::Serialize;
use serde_json::{Map, Value, json};

use crate::error::Result;
use crate::layout::{Layout, ScaleBy, autoscale_plot_font_sizes};
use crate::settings;
use crate::trace::Trace;

pub use subplots::{SharedAxes, SubplotItem, SubplotOptions, axis_id, figure_mult};

/// A complete plot.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Figure {
    data: Vec<Trace>,
    layout: Layout,
}

impl Figure {
    #[must_use]
    pub const fn new(data: Vec<Trace>, layout: Layout) -> Self {
        Self { data, layout }
    }

    #[must_use]
    pub fn traces(&self) -> &[Trace] {
        &self.data
    }

    #[must_use]
    pub const fn layout(&self) -> &Layout {
        &self.layout
    }

    pub const fn layout_mut(&mut self) -> &mut Layout {
        &mut self.layout
    }

    pub fn add_trace(&mut self, trace: Trace) {
        self.data.push(trace);
    }

    /// Append an entry to `layout.images`.
    pub fn add_layout_image(&mut self, image: Map<String, Value>) {
        let mut images = match self.layout.remove("images") {
            Some(Value::Array(images)) => images,
            _ => Vec::new(),
        };
        images.push(Value::Object(image));
        self.layout.set("images", images);
    }

    #[must_use]
    pub fn into_parts(self) -> (Vec<Trace>, Layout) {
        (self.data, self.layout)
    }

    /// Figure JSON as stored, without the default template.
    #[must_use]
    pub fn to_value(&self) -> Value {
        json!({
            "data": self.data.iter().map(Trace::to_value).collect::<Vec<_>>(),
            "layout": self.layout.to_value(),
        })
    }

    /// Figure JSON ready for plotly.js: the current default template is
    /// attached unless the layout carries its own.
    #[must_use]
    pub fn to_plotly_json(&self) -> Value {
        let mut value = self.to_value();
        attach_template(&mut value);
        value
    }

    /// Serialized [`Figure::to_plotly_json`].
    ///
    /// # Errors
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.to_plotly_json())?)
    }
}

/// Attach the current default template to figure JSON whose layout has
/// none. Non-object figures and layouts are left alone.
pub fn attach_template(figure: &mut Value) {
    let Some(object) = figure.as_object_mut() else {
        return;
    };
    let layout = object
        .entry("layout")
        .or_insert_with(|| Value::Object(Map::new()));
    if let Some(layout) = layout.as_object_mut()
        && !layout.contains_key("template")
    {
        layout.insert(
            "template".to_string(),
            json!({"layout": settings::template().to_value()}),
        );
    }
}

/// Create a figure whose font sizes and line widths follow its size.
#[must_use]
pub fn figure(traces: Vec<Trace>, layout: Option<Layout>, by: ScaleBy) -> Figure {
    let mut layout = layout.unwrap_or_default();
    autoscale_plot_font_sizes(&mut layout, by);
    Figure::new(traces, layout)
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
