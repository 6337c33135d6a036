use serde_json::{Value, json};

use super::*;

#[test]
fn set_opt_skips_none() {
    let props = Props::new()
        .set_opt("width", Some(3))
        .set_opt::<f64>("opacity", None);
    assert_eq!(props.into_value(), json!({"width": 3}));
}

#[test]
fn set_obj_skips_empty_objects() {
    let props = Props::new()
        .set_obj("marker", Props::new().set_opt::<&str>("color", None))
        .set_obj("line", Props::new().set("width", 2));
    assert_eq!(props.into_value(), json!({"line": {"width": 2}}));
}

#[test]
fn keys_keep_insertion_order() {
    let props = Props::new().set("b", 1).set("a", 2).set("c", 3);
    let keys: Vec<_> = props.into_map().keys().cloned().collect();
    assert_eq!(keys, ["b", "a", "c"]);
}

#[test]
fn data_from_numbers_and_strings() {
    let numbers = Data::from(vec![1.0, 2.5]);
    assert_eq!(numbers.as_f64(), Some(vec![1.0, 2.5]));

    let labels = Data::from(["a", "b", "c"]);
    assert_eq!(labels.len(), 3);
    assert_eq!(labels.as_f64(), None);
}

#[test]
fn data_keeps_null_separators() {
    let data = Data::from(vec![Some(1), None, Some(2)]);
    assert_eq!(data.into_value(), json!([1, null, 2]));
}

#[test]
fn data_from_slice_clones() {
    let source = [Value::from(1), Value::from("x")];
    let data = Data::from(&source[..]);
    assert_eq!(data.as_slice(), &source);
}
