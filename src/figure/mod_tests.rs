use serde_json::json;

use super::*;
use crate::trace::{ScatterOptions, scatter};

fn points() -> Trace {
    scatter([1, 2], [3, 4], &ScatterOptions::default()).unwrap()
}

#[test]
fn figure_autoscales_layout() {
    let fig = figure(vec![points()], None, ScaleBy::Mean);

    assert_eq!(fig.traces().len(), 1);
    assert_eq!(fig.layout().width(), Some(500.0));
    assert_eq!(fig.layout().get_path(&["font", "size"]), Some(&json!(20.0)));
}

#[test]
fn figure_keeps_explicit_font_size() {
    let layout = Layout::from_value(json!({"font": {"size": 9}})).unwrap();
    let fig = figure(vec![], Some(layout), ScaleBy::Width);
    assert_eq!(fig.layout().get_path(&["font", "size"]), Some(&json!(9)));
}

#[test]
fn to_value_has_data_and_layout() {
    let mut fig = Figure::default();
    fig.add_trace(points());

    let value = fig.to_value();
    assert_eq!(value["data"][0]["type"], json!("scattergl"));
    assert_eq!(value["layout"], json!({}));
}

#[test]
fn plotly_json_attaches_default_template() {
    let _guard = settings::test_guard();
    let fig = Figure::new(vec![points()], Layout::new());

    let value = fig.to_plotly_json();
    assert_eq!(
        value["layout"]["template"]["layout"]["font"]["family"],
        json!("Arial")
    );
}

#[test]
fn plotly_json_keeps_own_template() {
    let layout = Layout::from_value(json!({"template": {"layout": {}}})).unwrap();
    let fig = Figure::new(vec![], layout);
    assert_eq!(fig.to_plotly_json()["layout"]["template"], json!({"layout": {}}));
}

#[test]
fn to_json_serializes_plotly_json() {
    let _guard = settings::test_guard();
    let fig = Figure::new(vec![points()], Layout::new());

    let parsed: Value = serde_json::from_str(&fig.to_json().unwrap()).unwrap();
    assert_eq!(parsed, fig.to_plotly_json());
}

#[test]
fn add_layout_image_appends() {
    let mut fig = Figure::default();
    fig.add_layout_image(Map::from_iter([("source".to_string(), json!("a.png"))]));
    fig.add_layout_image(Map::from_iter([("source".to_string(), json!("b.png"))]));

    assert_eq!(
        fig.layout().get("images"),
        Some(&json!([{"source": "a.png"}, {"source": "b.png"}]))
    );
}

#[test]
fn attach_template_fills_missing_layout() {
    let _guard = settings::test_guard();
    let mut value = json!({"data": []});

    attach_template(&mut value);

    assert_eq!(
        value["layout"]["template"]["layout"],
        settings::template().to_value()
    );
}

#[test]
fn attach_template_ignores_non_objects() {
    let mut value = json!([1, 2]);
    attach_template(&mut value);
    assert_eq!(value, json!([1, 2]));

    let mut value = json!({"layout": 5});
    attach_template(&mut value);
    assert_eq!(value, json!({"layout": 5}));
}
