use serde_json::json;

use super::*;

#[test]
fn rects_become_closed_polygons() {
    let trace = rects(&[(0.0, 0.0, 2.0, 1.0)], &RectOptions::default()).unwrap();

    assert_eq!(
        trace.get("x"),
        Some(&json!([0.0, 0.0, 2.0, 2.0, 0.0, null]))
    );
    assert_eq!(
        trace.get("y"),
        Some(&json!([0.0, 1.0, 1.0, 0.0, 0.0, null]))
    );
    assert_eq!(trace.get("fill"), Some(&json!("toself")));
    assert_eq!(trace.get("fillcolor"), Some(&json!("gray")));
    assert_eq!(trace.get("line"), Some(&json!({"width": 1.0, "color": "black"})));
}

#[test]
fn no_fill_color_means_no_fill() {
    let options = RectOptions {
        fill_col: None,
        frame_col: None,
        ..Default::default()
    };
    let trace = closures(&[vec![(0.0, 0.0), (1.0, 0.0), (0.5, 1.0)]], &options).unwrap();

    assert_eq!(trace.get("fill"), None);
    assert_eq!(trace.get("fillcolor"), None);
    assert_eq!(trace.get("line"), Some(&json!({"width": 1.0})));
}

#[test]
fn empty_polygons_are_skipped() {
    let trace = closures(&[vec![], vec![(1.0, 1.0)]], &RectOptions::default()).unwrap();
    assert_eq!(trace.get("x"), Some(&json!([1.0, 1.0, null])));
}

#[test]
fn rect_shapes_carry_fill_and_frame() {
    let shapes = rects_shape(
        &[(0.0, 0.0, 0.5, 1.0)],
        &RectShapeOptions {
            xref: "paper".to_string(),
            layer: "below".to_string(),
            ..Default::default()
        },
    )
    .unwrap();

    let shape = shapes[0].to_value();
    assert_eq!(shape["type"], json!("rect"));
    assert_eq!(shape["xref"], json!("paper"));
    assert_eq!(shape["fillcolor"], json!("grey"));
    assert_eq!(shape["line"], json!({"color": "black", "width": 1.0}));
    assert_eq!(shape["layer"], json!("below"));
}

#[test]
fn rect_shape_rejects_bad_refs() {
    let options = RectShapeOptions {
        yref: "x".to_string(),
        ..Default::default()
    };
    assert!(rects_shape(&[(0.0, 0.0, 1.0, 1.0)], &options).is_err());
}
