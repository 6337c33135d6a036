use super::*;

#[test]
fn counts_values_into_equal_bins() {
    let h = histogram(&[0.0, 1.0, 1.5, 2.0, 3.9, 4.0], 4, (0.0, 4.0), None).unwrap();

    assert_eq!(h.edges, vec![0.0, 1.0, 2.0, 3.0, 4.0]);
    // last bin is closed on the right
    assert_eq!(h.counts, vec![1.0, 2.0, 1.0, 2.0]);
}

#[test]
fn ignores_out_of_range_and_nan_values() {
    let h = histogram(&[-1.0, 0.5, 10.0, f64::NAN], 2, (0.0, 2.0), None).unwrap();
    assert_eq!(h.counts, vec![1.0, 0.0]);
}

#[test]
fn applies_weights() {
    let values = [0.0, 0.0, 1.0, 1.0];
    let weights = [0.25; 4];
    let h = histogram(&values, 2, (0.0, 1.0), Some(&weights)).unwrap();
    assert_eq!(h.counts, vec![0.5, 0.5]);
}

#[test]
fn degenerate_range_is_widened() {
    let h = histogram(&[3.0, 3.0], 1, (3.0, 3.0), None).unwrap();
    assert_eq!(h.edges, vec![2.5, 3.5]);
    assert_eq!(h.counts, vec![2.0]);
}

#[test]
fn tiny_range_is_kept() {
    let h = histogram(&[0.0, 1e-17], 1, (0.0, 1e-17), None).unwrap();
    assert_eq!(h.edges, vec![0.0, 1e-17]);
    assert_eq!(h.counts, vec![2.0]);
}

#[test]
fn centers_are_bin_midpoints() {
    let h = histogram(&[], 2, (0.0, 2.0), None).unwrap();
    assert_eq!(h.centers(), vec![0.5, 1.5]);
}

#[test]
fn value_on_inner_edge_goes_to_upper_bin() {
    // 0.3 is not exactly representable; the edge correction keeps it in bin 3
    let h = histogram(&[0.3], 10, (0.0, 1.0), None).unwrap();
    let index = h.counts.iter().position(|&c| c > 0.0).unwrap();
    assert!(h.edges[index] <= 0.3 && 0.3 < h.edges[index + 1]);
}

#[test]
fn rejects_invalid_arguments() {
    assert!(histogram(&[1.0], 0, (0.0, 1.0), None).is_err());
    assert!(histogram(&[1.0], 1, (2.0, 1.0), None).is_err());
    assert!(histogram(&[1.0], 1, (0.0, f64::INFINITY), None).is_err());
    assert!(histogram(&[1.0, 2.0], 1, (0.0, 2.0), Some(&[1.0])).is_err());
}
