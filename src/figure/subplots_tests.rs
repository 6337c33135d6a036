use serde_json::json;

use super::*;
use crate::trace::{BarOptions, bar};

fn trace() -> Trace {
    bar([1], [2], &BarOptions::default()).unwrap()
}

fn titled(text: &str) -> Figure {
    let layout = Layout::from_value(json!({"title": {"text": text}})).unwrap();
    Figure::new(vec![trace()], layout)
}

fn domain(layout: &Layout, key: &str) -> (f64, f64) {
    let domain = layout.get_path(&[key, "domain"]).unwrap();
    (domain[0].as_f64().unwrap(), domain[1].as_f64().unwrap())
}

fn approx(actual: (f64, f64), expected: (f64, f64)) {
    assert!(
        (actual.0 - expected.0).abs() < 1e-9 && (actual.1 - expected.1).abs() < 1e-9,
        "{actual:?} != {expected:?}"
    );
}

#[test]
fn axis_ids_omit_first_index() {
    assert_eq!(axis_id('x', 1), "x");
    assert_eq!(axis_id('y', 3), "y3");
    assert_eq!(axis_key('x', 1), "xaxis");
    assert_eq!(axis_key('y', 2), "yaxis2");
}

#[test]
fn domains_fill_unit_interval_with_gaps() {
    let d = domains(&[1.0, 1.0], 0.1);
    approx(d[0], (0.0, 0.45));
    approx(d[1], (0.55, 1.0));

    let d = domains(&[3.0, 1.0], 0.0);
    approx(d[0], (0.0, 0.75));
    approx(d[1], (0.75, 1.0));
}

#[test]
fn lays_out_rows_top_down() {
    let fig = figure_mult(vec![trace(), trace(), trace()], &SubplotOptions::default()).unwrap();
    let layout = fig.layout();

    approx(domain(layout, "xaxis"), (0.0, 0.45));
    approx(domain(layout, "xaxis2"), (0.55, 1.0));
    approx(domain(layout, "yaxis"), (0.6, 1.0));
    approx(domain(layout, "yaxis3"), (0.0, 0.4));
    // The empty fourth cell still gets axes.
    assert!(layout.get("xaxis4").is_some());
    assert_eq!(layout.get_path(&["xaxis3", "anchor"]), Some(&json!("y3")));
}

#[test]
fn assigns_traces_to_their_cell() {
    let fig = figure_mult(vec![trace(), trace()], &SubplotOptions::default()).unwrap();

    assert_eq!(fig.traces()[0].get("xaxis"), Some(&json!("x")));
    assert_eq!(fig.traces()[1].get("xaxis"), Some(&json!("x2")));
    assert_eq!(fig.traces()[1].get("yaxis"), Some(&json!("y2")));
}

#[test]
fn shares_x_axes_within_columns() {
    let options = SubplotOptions {
        shared_xaxes: SharedAxes::Columns,
        ..Default::default()
    };
    let fig = figure_mult(vec![trace(), trace(), trace(), trace()], &options).unwrap();
    let layout = fig.layout();

    assert_eq!(layout.get_path(&["xaxis", "matches"]), Some(&json!("x3")));
    assert_eq!(layout.get_path(&["xaxis", "showticklabels"]), Some(&json!(false)));
    assert_eq!(layout.get_path(&["xaxis3", "matches"]), None);
    assert_eq!(layout.get_path(&["xaxis3", "showticklabels"]), None);
    assert_eq!(layout.get_path(&["yaxis2", "matches"]), None);
}

#[test]
fn shares_y_axes_within_rows() {
    let options = SubplotOptions {
        shared_yaxes: SharedAxes::Rows,
        ..Default::default()
    };
    let fig = figure_mult(vec![trace(), trace()], &options).unwrap();
    let layout = fig.layout();

    assert_eq!(layout.get_path(&["yaxis2", "matches"]), Some(&json!("y")));
    assert_eq!(layout.get_path(&["yaxis2", "showticklabels"]), Some(&json!(false)));
    assert_eq!(layout.get_path(&["yaxis", "matches"]), None);
}

#[test]
fn collects_subplot_titles() {
    let fig = figure_mult(
        vec![SubplotItem::from(titled("left")), SubplotItem::from(trace())],
        &SubplotOptions::default(),
    )
    .unwrap();

    let annotations = fig.layout().get("annotations").unwrap().as_array().unwrap();
    assert_eq!(annotations.len(), 1);
    assert_eq!(annotations[0]["text"], json!("left"));
    assert_eq!(annotations[0]["xref"], json!("paper"));
    assert!((annotations[0]["x"].as_f64().unwrap() - 0.225).abs() < 1e-9);
}

#[test]
fn omits_titles_when_none_given() {
    let fig = figure_mult(vec![trace()], &SubplotOptions::default()).unwrap();
    assert_eq!(fig.layout().get("annotations"), None);
}

#[test]
fn copies_cell_axis_options_and_retargets_anchors() {
    let layout = Layout::from_value(json!({
        "xaxis": {"title": {"text": "time"}},
        "yaxis": {"scaleanchor": "x"},
    }))
    .unwrap();
    let fig = figure_mult(
        vec![SubplotItem::from(trace()), Figure::new(vec![trace()], layout).into()],
        &SubplotOptions::default(),
    )
    .unwrap();
    let merged = fig.layout();

    assert_eq!(merged.get_path(&["xaxis2", "title", "text"]), Some(&json!("time")));
    assert_eq!(merged.get_path(&["xaxis2", "anchor"]), Some(&json!("y2")));
    assert_eq!(merged.get_path(&["yaxis2", "scaleanchor"]), Some(&json!("x2")));
}

#[test]
fn reanchors_layout_images() {
    let mut fig = Figure::new(vec![trace()], Layout::new());
    fig.add_layout_image(
        json!({"source": "a.png", "xref": "x", "yref": "y"})
            .as_object()
            .cloned()
            .unwrap(),
    );
    let merged = figure_mult(
        vec![SubplotItem::from(trace()), fig.into()],
        &SubplotOptions::default(),
    )
    .unwrap();

    let images = merged.layout().get("images").unwrap();
    assert_eq!(images[0]["xref"], json!("x2"));
    assert_eq!(images[0]["yref"], json!("y2"));
    assert_eq!(images[0]["source"], json!("a.png"));
}

#[test]
fn overall_layout_wins_and_is_autoscaled() {
    let options = SubplotOptions {
        layout: Some(Layout::from_value(json!({"width": 1000, "height": 500})).unwrap()),
        ..Default::default()
    };
    let fig = figure_mult(vec![trace()], &options).unwrap();
    let layout = fig.layout();

    assert_eq!(layout.width(), Some(1000.0));
    assert_eq!(layout.get_path(&["font", "size"]), Some(&json!(28.0)));
}

#[test]
fn rejects_bad_grids() {
    assert!(matches!(
        figure_mult(Vec::<Trace>::new(), &SubplotOptions::default()),
        Err(PlotlyLightError::EmptyData)
    ));

    let zero_cols = SubplotOptions {
        n_col: 0,
        ..Default::default()
    };
    assert!(figure_mult(vec![trace()], &zero_cols).is_err());

    let crowded = SubplotOptions {
        n_col: 1,
        vertical_spacing: 0.5,
        ..Default::default()
    };
    assert!(figure_mult(vec![trace(), trace(), trace()], &crowded).is_err());

    let widths = SubplotOptions {
        col_widths: Some(vec![1.0]),
        ..Default::default()
    };
    assert!(figure_mult(vec![trace()], &widths).is_err());
}
