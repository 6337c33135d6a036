//! Plot layouts: construction, merging and size-dependent autoscaling.

mod autoscale;
mod merge;
mod options;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{PlotlyLightError, Result};

pub use autoscale::{ScaleBy, autoscale_plot_font_sizes};
pub use merge::{merge_layout, merge_values};
pub use options::{Barmode, Hovermode, LayoutOptions, Margin, Mirror, Range, Ticks, layout};

/// A Plotly layout object.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Layout(Map<String, Value>);

impl Layout {
    #[must_use]
    pub fn new() -> Self {
        Self(Map::new())
    }

    #[must_use]
    pub const fn from_map(map: Map<String, Value>) -> Self {
        Self(map)
    }

    /// Wrap a JSON value, which must be an object.
    ///
    /// # Errors
    /// Returns an error if `value` is not a JSON object.
    pub fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            other => Err(PlotlyLightError::Config(format!(
                "layout must be an object, got {other}"
            ))),
        }
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Look up a nested property, e.g. `["xaxis", "title", "text"]`.
    #[must_use]
    pub fn get_path(&self, path: &[&str]) -> Option<&Value> {
        let (first, rest) = path.split_first()?;
        rest.iter()
            .try_fold(self.0.get(*first)?, |value, key| value.get(*key))
    }

    pub fn set(&mut self, key: &str, value: impl Into<Value>) {
        self.0.insert(key.to_string(), value.into());
    }

    /// Set a nested property, creating intermediate objects as needed.
    /// Non-object intermediates are replaced.
    pub fn set_path(&mut self, path: &[&str], value: impl Into<Value>) {
        let Some((last, parents)) = path.split_last() else {
            return;
        };
        let mut map = &mut self.0;
        for key in parents {
            let slot = map
                .entry((*key).to_string())
                .or_insert_with(|| Value::Object(Map::new()));
            if !slot.is_object() {
                *slot = Value::Object(Map::new());
            }
            let Value::Object(inner) = slot else {
                return;
            };
            map = inner;
        }
        map.insert((*last).to_string(), value.into());
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.0.shift_remove(key)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn width(&self) -> Option<f64> {
        self.0.get("width").and_then(Value::as_f64)
    }

    #[must_use]
    pub fn height(&self) -> Option<f64> {
        self.0.get("height").and_then(Value::as_f64)
    }

    #[must_use]
    pub const fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    #[must_use]
    pub fn into_map(self) -> Map<String, Value> {
        self.0
    }

    #[must_use]
    pub fn to_value(&self) -> Value {
        Value::Object(self.0.clone())
    }
}

impl From<Map<String, Value>> for Layout {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

/// A non-interactive layout shape (line or rectangle).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Shape(Map<String, Value>);

impl Shape {
    #[must_use]
    pub const fn from_map(map: Map<String, Value>) -> Self {
        Self(map)
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    #[must_use]
    pub fn to_value(&self) -> Value {
        Value::Object(self.0.clone())
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
