use indexmap::IndexMap;
use serde_json::json;

use super::*;
use crate::PlotlyLightError;
use crate::trace::TraceKind;

fn sized(bin_size: f64) -> HistOptions {
    HistOptions {
        bin_size: Some(bin_size),
        ..Default::default()
    }
}

#[test]
fn bins_numeric_data_centered_on_values() {
    let trace = hist(vec![1.0, 2.0, 2.0, 3.0], &sized(1.0)).unwrap();

    assert_eq!(trace.kind(), TraceKind::Bar);
    assert_eq!(trace.get("x"), Some(&json!([1.0, 2.0, 3.0])));
    assert_eq!(trace.get("y"), Some(&json!([1.0, 2.0, 1.0])));
}

#[test]
fn relative_numeric_counts_are_fractions() {
    let options = HistOptions {
        relative: true,
        ..sized(1.0)
    };
    let trace = hist(vec![1.0, 2.0, 2.0, 3.0], &options).unwrap();
    assert_eq!(trace.get("y"), Some(&json!([0.25, 0.5, 0.25])));
}

#[test]
fn uses_bin_num_without_bin_size() {
    let options = HistOptions {
        bin_num: 4,
        ..Default::default()
    };
    let trace = hist(vec![0.0, 4.0], &options).unwrap();

    let y = trace.get("y").and_then(|y| y.as_array()).unwrap();
    assert_eq!(y.len(), 4);
    let total: f64 = y.iter().filter_map(serde_json::Value::as_f64).sum();
    assert!((total - 2.0).abs() < 1e-12);
}

#[test]
fn explicit_range_drops_outside_values() {
    let options = HistOptions {
        start: Some(1.0),
        end: Some(2.0),
        ..sized(1.0)
    };
    let trace = hist(vec![1.0, 2.0, 10.0], &options).unwrap();
    assert_eq!(trace.get("x"), Some(&json!([1.0, 2.0])));
    assert_eq!(trace.get("y"), Some(&json!([1.0, 1.0])));
}

#[test]
fn counts_categorical_values_in_first_seen_order() {
    let trace = hist(vec!["b", "a", "b"], &HistOptions::default()).unwrap();
    assert_eq!(trace.get("x"), Some(&json!(["b", "a"])));
    assert_eq!(trace.get("y"), Some(&json!([2.0, 1.0])));
}

#[test]
fn relative_categorical_counts_are_percentages() {
    let mut counts = IndexMap::new();
    counts.insert("yes".to_string(), 3.0);
    counts.insert("no".to_string(), 1.0);
    let options = HistOptions {
        relative: true,
        ..Default::default()
    };
    let trace = hist(counts, &options).unwrap();
    assert_eq!(trace.get("y"), Some(&json!([75.0, 25.0])));
}

#[test]
fn draws_bins_as_vertical_lines() {
    let options = HistOptions {
        use_lines: true,
        col: Some("red".to_string()),
        ..sized(1.0)
    };
    let trace = hist(vec![1.0, 2.0, 2.0], &options).unwrap();

    assert_eq!(trace.kind(), TraceKind::Scattergl);
    assert_eq!(
        trace.get("x"),
        Some(&json!([1.0, 1.0, null, 2.0, 2.0, null]))
    );
    assert_eq!(
        trace.get("y"),
        Some(&json!([0.0, 1.0, null, 0.0, 2.0, null]))
    );
    assert_eq!(trace.get("line"), Some(&json!({"width": 1.0, "color": "red"})));
}

#[test]
fn lines_keep_category_keys() {
    let options = HistOptions {
        use_lines: true,
        text: Some(vec!["first".to_string(), "second".to_string()]),
        ..Default::default()
    };
    let trace = hist(vec!["a", "b", "a"], &options).unwrap();

    assert_eq!(trace.get("x"), Some(&json!(["a", "a", null, "b", "b", null])));
    assert_eq!(
        trace.get("y"),
        Some(&json!([0.0, 2.0, null, 0.0, 1.0, null]))
    );
    assert_eq!(
        trace.get("text"),
        Some(&json!(["first", "first", "", "second", "second", ""]))
    );
}

#[test]
fn raw_histogram_defers_binning_to_plotly() {
    let options = HistOptions {
        use_histogram: true,
        relative: true,
        ..sized(0.5)
    };
    let trace = hist(vec![1.0, 2.0], &options).unwrap();

    assert_eq!(trace.kind(), TraceKind::Histogram);
    assert_eq!(trace.get("xbins"), Some(&json!({"size": 0.5})));
    assert_eq!(trace.get("histnorm"), Some(&json!("percent")));
}

#[test]
fn raw_histogram_requires_numeric_data() {
    let options = HistOptions {
        use_histogram: true,
        ..Default::default()
    };
    assert!(matches!(
        hist(vec!["a"], &options),
        Err(PlotlyLightError::InvalidOption { option: "data", .. })
    ));
}

#[test]
fn rejects_empty_data() {
    assert!(matches!(
        hist(Vec::<f64>::new(), &HistOptions::default()),
        Err(PlotlyLightError::EmptyData)
    ));
}

#[test]
fn text_must_match_bin_count() {
    let options = HistOptions {
        text: Some(vec!["only one".to_string()]),
        ..sized(1.0)
    };
    let err = hist(vec![1.0, 2.0, 3.0], &options).unwrap_err();
    assert_eq!(err.to_string(), "Length of `text` (1) != # of bins (3)");
}

#[test]
fn rejects_non_positive_bin_size() {
    assert!(hist(vec![1.0, 2.0], &sized(0.0)).is_err());
}
