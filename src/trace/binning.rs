//! Equal-width histogram binning.
//!
//! Matches numpy's `histogram` with an integer bin count and explicit range:
//! bins are half-open `[lo, hi)` except the last, which is closed; values
//! outside the range are ignored.

use crate::error::{PlotlyLightError, Result, ensure_len};

/// Bin counts (or summed weights) and the `counts.len() + 1` bin edges.
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    pub counts: Vec<f64>,
    pub edges: Vec<f64>,
}

impl Histogram {
    /// Midpoint of each bin.
    #[must_use]
    pub fn centers(&self) -> Vec<f64> {
        self.edges
            .windows(2)
            .map(|pair| f64::midpoint(pair[0], pair[1]))
            .collect()
    }
}

fn linspace(lo: f64, hi: f64, bins: usize) -> Vec<f64> {
    #[allow(clippy::cast_precision_loss)]
    let step = (hi - lo) / bins as f64;
    (0..=bins)
        .map(|i| {
            if i == bins {
                hi
            } else {
                #[allow(clippy::cast_precision_loss)]
                let offset = i as f64 * step;
                lo + offset
            }
        })
        .collect()
}

/// Locate the bin of `value`, or `None` if it lies outside the edges.
fn bin_index(value: f64, edges: &[f64]) -> Option<usize> {
    let bins = edges.len() - 1;
    let (lo, hi) = (edges[0], edges[bins]);
    if !(lo..=hi).contains(&value) {
        return None;
    }
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    let mut index = (((value - lo) / (hi - lo)) * bins as f64) as usize;
    index = index.min(bins - 1);
    // Floating point error can put a value one bin off; settle on the edges.
    if value < edges[index] {
        index -= 1;
    } else if index != bins - 1 && value >= edges[index + 1] {
        index += 1;
    }
    Some(index)
}

/// Count `values` into `bins` equal-width bins over `range`.
///
/// A degenerate range (`lo == hi`) is widened to `lo - 0.5 ..= hi + 0.5`.
///
/// # Errors
/// Returns an error if `bins` is zero, the range is not finite or reversed,
/// or `weights` differs in length from `values`.
pub fn histogram(
    values: &[f64],
    bins: usize,
    range: (f64, f64),
    weights: Option<&[f64]>,
) -> Result<Histogram> {
    if bins == 0 {
        return Err(PlotlyLightError::invalid_option("bins", 0, "a positive bin count"));
    }
    let (mut lo, mut hi) = range;
    if !lo.is_finite() || !hi.is_finite() || lo > hi {
        return Err(PlotlyLightError::invalid_option(
            "range",
            format!("({lo}, {hi})"),
            "a finite range with start <= end",
        ));
    }
    if let Some(weights) = weights {
        ensure_len("weights", weights.len(), "len(data)", values.len())?;
    }
    #[allow(clippy::float_cmp)]
    let degenerate = lo == hi;
    if degenerate {
        lo -= 0.5;
        hi += 0.5;
    }

    let edges = linspace(lo, hi, bins);
    let mut counts = vec![0.0; bins];
    for (i, &value) in values.iter().enumerate() {
        if let Some(index) = bin_index(value, &edges) {
            counts[index] += weights.map_or(1.0, |w| w[i]);
        }
    }

    Ok(Histogram { counts, edges })
}

#[cfg(test)]
#[path = "binning_tests.rs"]
mod tests;
