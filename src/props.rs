//! Ordered JSON property maps and data columns.
//!
//! Every trace, shape and layout in this crate is a Plotly JSON object. Options
//! that were not set never reach the output: [`Props::set_opt`] skips `None`
//! and [`Props::set_obj`] skips nested objects that ended up empty.

use serde_json::{Map, Value};

/// Builder for an ordered JSON object.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Props(Map<String, Value>);

impl Props {
    #[must_use]
    pub fn new() -> Self {
        Self(Map::new())
    }

    #[must_use]
    pub fn set(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.0.insert(key.to_string(), value.into());
        self
    }

    #[must_use]
    pub fn set_opt<V: Into<Value>>(self, key: &str, value: Option<V>) -> Self {
        match value {
            Some(value) => self.set(key, value),
            None => self,
        }
    }

    /// Set a nested object unless it has no properties.
    #[must_use]
    pub fn set_obj(mut self, key: &str, props: Self) -> Self {
        if !props.0.is_empty() {
            self.0.insert(key.to_string(), Value::Object(props.0));
        }
        self
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn into_map(self) -> Map<String, Value> {
        self.0
    }

    #[must_use]
    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }
}

/// A column of plot data (coordinates, texts, per-point colors).
///
/// Elements may be numbers, strings or `null` (Plotly uses `null` to break
/// a line into separate segments).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Data(Vec<Value>);

impl Data {
    #[must_use]
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Value] {
        &self.0
    }

    #[must_use]
    pub fn into_value(self) -> Value {
        Value::Array(self.0)
    }

    /// Numeric view of the column, `None` if any element is not a number.
    #[must_use]
    pub fn as_f64(&self) -> Option<Vec<f64>> {
        self.0.iter().map(Value::as_f64).collect()
    }
}

impl<T: Into<Value>> From<Vec<T>> for Data {
    fn from(values: Vec<T>) -> Self {
        Self(values.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value> + Clone> From<&[T]> for Data {
    fn from(values: &[T]) -> Self {
        Self(values.iter().cloned().map(Into::into).collect())
    }
}

impl<T: Into<Value>, const N: usize> From<[T; N]> for Data {
    fn from(values: [T; N]) -> Self {
        Self(values.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
#[path = "props_tests.rs"]
mod tests;
