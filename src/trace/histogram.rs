use indexmap::IndexMap;

use serde_json::Value;

use super::lines::segment_trace;
use super::{BarOptions, LinesOptions, Trace, TraceKind, bar, binning, legend_props};
use crate::error::{PlotlyLightError, Result, ensure_len};
use crate::props::{Data, Props};

/// Input of [`hist`].
#[derive(Debug, Clone, PartialEq)]
pub enum HistData {
    /// Raw numbers, binned into equal-width bins.
    Numeric(Vec<f64>),
    /// Raw categorical values, counted per distinct value.
    Categorical(Vec<String>),
    /// Precomputed counts per value, in display order.
    Counts(IndexMap<String, f64>),
}

impl HistData {
    fn is_empty(&self) -> bool {
        match self {
            Self::Numeric(values) => values.is_empty(),
            Self::Categorical(values) => values.is_empty(),
            Self::Counts(counts) => counts.is_empty(),
        }
    }
}

impl From<Vec<f64>> for HistData {
    fn from(values: Vec<f64>) -> Self {
        Self::Numeric(values)
    }
}

impl From<&[f64]> for HistData {
    fn from(values: &[f64]) -> Self {
        Self::Numeric(values.to_vec())
    }
}

impl From<Vec<String>> for HistData {
    fn from(values: Vec<String>) -> Self {
        Self::Categorical(values)
    }
}

impl From<Vec<&str>> for HistData {
    fn from(values: Vec<&str>) -> Self {
        Self::Categorical(values.into_iter().map(str::to_string).collect())
    }
}

impl From<IndexMap<String, f64>> for HistData {
    fn from(counts: IndexMap<String, f64>) -> Self {
        Self::Counts(counts)
    }
}

/// Options for [`hist`].
#[derive(Debug, Clone)]
#[allow(clippy::struct_excessive_bools)]
pub struct HistOptions {
    /// One text per bin (numeric data) or per distinct value.
    pub text: Option<Vec<String>>,
    /// Start of the plot range; defaults to the minimum value.
    pub start: Option<f64>,
    /// End of the plot range; defaults to the maximum value.
    pub end: Option<f64>,
    /// Width of each bin. Takes precedence over `bin_num`.
    pub bin_size: Option<f64>,
    pub bin_num: usize,
    /// Relative frequencies instead of counts.
    pub relative: bool,
    pub col: Option<String>,
    pub opacity: f64,
    /// Draw one vertical line per bin instead of bars; suited to large data.
    pub use_lines: bool,
    /// Line width when `use_lines` is set.
    pub line_width: f64,
    /// Use WebGL when `use_lines` is set.
    pub use_webgl: bool,
    /// Emit a raw Plotly `histogram` trace and let plotly.js do the binning.
    pub use_histogram: bool,
    pub name: Option<String>,
    pub show_legend: bool,
    pub show_init: bool,
}

impl Default for HistOptions {
    fn default() -> Self {
        Self {
            text: None,
            start: None,
            end: None,
            bin_size: None,
            bin_num: 10,
            relative: false,
            col: None,
            opacity: 1.0,
            use_lines: false,
            line_width: 1.0,
            use_webgl: true,
            use_histogram: false,
            name: None,
            show_legend: false,
            show_init: true,
        }
    }
}

fn to_trace(x: Data, y: Vec<f64>, options: &HistOptions) -> Result<Trace> {
    if options.use_lines {
        // One vertical segment per bin or category, keeping category keys on x.
        let segments: Vec<[(Value, Value); 2]> = x
            .as_slice()
            .iter()
            .zip(&y)
            .map(|(x, &y)| [(x.clone(), Value::from(0.0)), (x.clone(), Value::from(y))])
            .collect();
        return segment_trace(
            &segments,
            &LinesOptions {
                text: options.text.clone(),
                width: options.line_width,
                col: options.col.clone(),
                opacity: Some(options.opacity),
                name: options.name.clone(),
                show_legend: options.show_legend,
                show_init: options.show_init,
                use_webgl: options.use_webgl,
            },
        );
    }

    bar(
        x,
        y,
        &BarOptions {
            text: options.text.clone(),
            col: options.col.clone(),
            opacity: options.opacity,
            name: options.name.clone(),
            show_legend: options.show_legend,
            show_init: options.show_init,
            ..Default::default()
        },
    )
}

fn raw_histogram(values: &[f64], options: &HistOptions) -> Trace {
    let props = Props::new()
        .set("x", values.to_vec())
        .set_obj(
            "xbins",
            Props::new()
                .set_opt("start", options.start)
                .set_opt("end", options.end)
                .set_opt("size", options.bin_size),
        )
        .set("histnorm", if options.relative { "percent" } else { "" })
        .set_obj("marker", Props::new().set_opt("color", options.col.as_deref()))
        .set("opacity", options.opacity);

    Trace::new(
        TraceKind::Histogram,
        legend_props(
            props,
            options.name.as_deref(),
            options.show_legend,
            options.show_init,
        ),
    )
}

fn count_categories(values: &[String]) -> IndexMap<String, f64> {
    let mut counts = IndexMap::new();
    for value in values {
        *counts.entry(value.clone()).or_insert(0.0) += 1.0;
    }
    counts
}

/// Relative frequencies in percent.
fn to_percent(counts: IndexMap<String, f64>) -> IndexMap<String, f64> {
    let total: f64 = counts.values().sum();
    counts
        .into_iter()
        .map(|(key, count)| (key, count / total * 100.0))
        .collect()
}

fn categorical_hist(counts: IndexMap<String, f64>, options: &HistOptions) -> Result<Trace> {
    let counts = if options.relative {
        to_percent(counts)
    } else {
        counts
    };
    if let Some(text) = &options.text {
        ensure_len("text", text.len(), "# of data", counts.len())?;
    }
    let (keys, values): (Vec<String>, Vec<f64>) = counts.into_iter().unzip();
    to_trace(Data::from(keys), values, options)
}

/// Bin count and bin size derived from the plot range and options.
fn bin_layout(start: f64, end: f64, options: &HistOptions) -> (usize, f64) {
    match options.bin_size {
        Some(size) => {
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let bins = ((end - start + size) / size).ceil() as usize;
            (bins, size)
        }
        None => {
            #[allow(clippy::cast_precision_loss)]
            let size = (end - start) / options.bin_num as f64;
            (options.bin_num, size)
        }
    }
}

fn numeric_hist(values: &[f64], options: &HistOptions) -> Result<Trace> {
    let start = options
        .start
        .unwrap_or_else(|| values.iter().copied().fold(f64::INFINITY, f64::min));
    let end = options
        .end
        .unwrap_or_else(|| values.iter().copied().fold(f64::NEG_INFINITY, f64::max));
    if let Some(size) = options.bin_size
        && size <= 0.0
    {
        return Err(PlotlyLightError::invalid_option(
            "bin_size",
            size,
            "a positive bin width",
        ));
    }
    let (bins, bin_size) = bin_layout(start, end, options);

    #[allow(clippy::cast_precision_loss)]
    let weights = options
        .relative
        .then(|| vec![1.0 / values.len() as f64; values.len()]);
    let binned = binning::histogram(
        values,
        bins,
        (start - bin_size / 2.0, end + bin_size / 2.0),
        weights.as_deref(),
    )?;

    if let Some(text) = &options.text {
        ensure_len("text", text.len(), "# of bins", binned.counts.len())?;
    }
    to_trace(Data::from(binned.centers()), binned.counts, options)
}

/// Create a histogram trace.
///
/// Numeric data is binned here and drawn as bars (or lines); categorical data
/// and precomputed counts are drawn one bar per distinct value.
///
/// # Errors
/// Returns an error for empty data, mismatched `text` length, invalid bin
/// settings, or `use_histogram` with non-numeric data.
pub fn hist(data: impl Into<HistData>, options: &HistOptions) -> Result<Trace> {
    let data = data.into();
    if data.is_empty() {
        return Err(PlotlyLightError::EmptyData);
    }

    if options.use_histogram {
        return match &data {
            HistData::Numeric(values) => Ok(raw_histogram(values, options)),
            _ => Err(PlotlyLightError::invalid_option(
                "data",
                "categorical",
                "numeric data when `use_histogram` is set",
            )),
        };
    }

    match data {
        HistData::Numeric(values) => numeric_hist(&values, options),
        HistData::Categorical(values) => categorical_hist(count_categories(&values), options),
        HistData::Counts(counts) => categorical_hist(counts, options),
    }
}

#[cfg(test)]
#[path = "histogram_tests.rs"]
mod tests;
