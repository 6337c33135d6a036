//! Right-biased layout merging.
//!
//! Layers are applied onto the base in argument order, so later values win:
//! - Objects are merged recursively (siblings of overridden keys survive)
//! - Arrays and scalars from the later layer replace the earlier value
//! - With `overwrite`, a top-level key present in a later layer replaces the
//!   earlier value wholesale instead of being merged into it

use serde_json::Value;

use super::Layout;

/// Merge two JSON values. `layer` takes precedence over `base`.
#[must_use]
pub fn merge_values(base: Value, layer: Value) -> Value {
    match (base, layer) {
        (Value::Object(mut base_map), Value::Object(layer_map)) => {
            for (key, layer_val) in layer_map {
                match base_map.get_mut(&key) {
                    Some(slot) => {
                        let base_val = std::mem::take(slot);
                        *slot = merge_values(base_val, layer_val);
                    }
                    None => {
                        base_map.insert(key, layer_val);
                    }
                }
            }
            Value::Object(base_map)
        }
        (_, layer) => layer,
    }
}

/// Merge multiple layouts. `base` is iteratively updated by each of `layers`
/// in order.
#[must_use]
pub fn merge_layout<'a, I>(base: &Layout, layers: I, overwrite: bool) -> Layout
where
    I: IntoIterator<Item = &'a Layout>,
{
    let mut merged = base.as_map().clone();
    for layer in layers {
        for (key, value) in layer.as_map() {
            match merged.get_mut(key) {
                Some(slot) if !overwrite => {
                    let base_val = std::mem::take(slot);
                    *slot = merge_values(base_val, value.clone());
                }
                Some(slot) => *slot = value.clone(),
                None => {
                    merged.insert(key.clone(), value.clone());
                }
            }
        }
    }
    Layout::from_map(merged)
}

#[cfg(test)]
#[path = "merge_tests.rs"]
mod tests;
