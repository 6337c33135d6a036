use serde_json::json;

use super::*;

#[test]
fn to_value_puts_type_first() {
    let trace = Trace::new(TraceKind::Scattergl, Props::new().set("x", vec![1]));
    let value = trace.to_value();

    let keys: Vec<_> = value.as_object().unwrap().keys().cloned().collect();
    assert_eq!(keys, ["type", "x"]);
    assert_eq!(value["type"], json!("scattergl"));
}

#[test]
fn serializes_like_to_value() {
    let trace = Trace::new(TraceKind::Box, Props::new().set("y", vec![1.0]));
    assert_eq!(serde_json::to_value(&trace).unwrap(), trace.to_value());
}

#[test]
fn set_axes_targets_subplot() {
    let mut trace = Trace::new(TraceKind::Bar, Props::new());
    trace.set_axes("x2", "y2");
    assert_eq!(trace.get("xaxis"), Some(&json!("x2")));
    assert_eq!(trace.get("yaxis"), Some(&json!("y2")));
}

#[test]
fn hidden_trace_is_legend_only() {
    let props = legend_props(Props::new(), Some("a"), true, false).into_value();
    assert_eq!(
        props,
        json!({"name": "a", "showlegend": true, "visible": "legendonly"})
    );
}

#[test]
fn shape_refs_accept_axis_or_paper() {
    assert!(check_ref("xref", "x", "x").is_ok());
    assert!(check_ref("xref", "paper", "x").is_ok());
    assert!(check_ref("xref", "y", "x").is_err());
    assert!(check_layer("below").is_ok());
    assert!(check_layer("middle").is_err());
}
