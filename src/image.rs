//! Image files shown as plots with pixel-accurate axes.

use std::fs;
use std::path::Path;

use image::ImageFormat;
use serde_json::{Map, json};

use crate::defaults;
use crate::error::{PlotlyLightError, Result};
use crate::figure::Figure;
use crate::layout::{
    Layout, LayoutOptions, Margin, ScaleBy, autoscale_plot_font_sizes, layout, merge_layout,
};
use crate::output::{ShowOptions, show};
use crate::renderer::{MimeBundle, publish};

/// Options for [`image`] and [`show_image`].
#[derive(Debug, Clone)]
pub struct ImageOptions {
    /// Plot width including the axis labels.
    pub width: Option<f64>,
    /// Plot height including the axis labels.
    pub height: Option<f64>,
    /// Neither side of the plot gets smaller than this.
    pub min_size: f64,
    /// Room reserved for axis ticks and labels.
    pub axis_label_size: f64,
    /// Axis range mapped onto the image; defaults to pixel coordinates.
    pub x_range: Option<(f64, f64)>,
    pub y_range: Option<(f64, f64)>,
    /// `"above"` or `"below"` the traces.
    pub layer: String,
    pub opacity: Option<f64>,
    /// Overrides the generated layout except for the axis ranges.
    pub layout: Option<Layout>,
    pub autoscale_font_by: ScaleBy,
    /// Show a plain `<img>` instead of an interactive plot.
    pub static_image: bool,
}

impl Default for ImageOptions {
    fn default() -> Self {
        Self {
            width: None,
            height: None,
            min_size: 100.0,
            axis_label_size: 100.0,
            x_range: None,
            y_range: None,
            layer: "above".to_string(),
            opacity: None,
            layout: None,
            autoscale_font_by: ScaleBy::Mean,
            static_image: false,
        }
    }
}

const BASE64_CHARS: &[u8; 64] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

fn base64_encode(data: &[u8]) -> String {
    let mut encoded = String::with_capacity(data.len().div_ceil(3) * 4);
    for chunk in data.chunks(3) {
        let mut buf = [0u8; 3];
        buf[..chunk.len()].copy_from_slice(chunk);
        let bits = (u32::from(buf[0]) << 16) | (u32::from(buf[1]) << 8) | u32::from(buf[2]);

        for (i, shift) in [18, 12, 6, 0].into_iter().enumerate() {
            if i <= chunk.len() {
                encoded.push(char::from(BASE64_CHARS[((bits >> shift) & 63) as usize]));
            } else {
                encoded.push('=');
            }
        }
    }
    encoded
}

/// Inline `data:` URI of an image file.
fn data_uri(path: &Path) -> Result<String> {
    let mime = ImageFormat::from_path(path)
        .map(|format| format.to_mime_type())
        .unwrap_or("application/octet-stream");
    let bytes = fs::read(path).map_err(|source| PlotlyLightError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(format!("data:{mime};base64,{}", base64_encode(&bytes)))
}

fn image_size(path: &Path) -> Result<(f64, f64)> {
    let (width, height) =
        image::image_dimensions(path).map_err(|source| PlotlyLightError::Image {
            path: path.to_path_buf(),
            source,
        })?;
    Ok((f64::from(width), f64::from(height)))
}

/// Axis ranges covered by the image; a missing range follows the aspect ratio.
fn axis_ranges(options: &ImageOptions, width: f64, height: f64) -> ((f64, f64), (f64, f64)) {
    let ratio = height / width;
    match (options.x_range, options.y_range) {
        (Some(x), Some(y)) => (x, y),
        (Some((x0, x1)), None) => ((x0, x1), (0.0, (x1 - x0) * ratio)),
        (None, Some((y0, y1))) => ((0.0, (y1 - y0) / ratio), (y0, y1)),
        (None, None) => ((0.0, width), (0.0, height)),
    }
}

/// Plot size that keeps the aspect ratio inside the axis labels.
fn plot_size(options: &ImageOptions, ratio: f64) -> (f64, f64) {
    let label = options.axis_label_size;
    let (width, height) = match (options.width, options.height) {
        (Some(w), Some(h)) => {
            let (w, h) = (w - label, h - label);
            (w.min(h / ratio), h.min(w * ratio))
        }
        (Some(w), None) => (w - label, (w - label) * ratio),
        (None, Some(h)) => ((h - label) / ratio, h - label),
        (None, None) => {
            let side = defaults::PLOT_SIZE - label;
            (side.min(side / ratio), side.min(side * ratio))
        }
    };

    let clamp = |name: &str, size: f64| {
        if size < options.min_size {
            tracing::warn!(
                "{name} ({size:.1}) is too small. Setting the minimum value, {}.",
                options.min_size
            );
            options.min_size
        } else {
            size
        }
    };
    (
        clamp("Width", width + label),
        clamp("Height", height + label),
    )
}

/// Create a figure showing an image file.
///
/// The image is stretched over the axis ranges, so data traces added to the
/// figure line up with image coordinates (pixels by default).
///
/// # Errors
/// Returns an error if the file cannot be read or decoded.
pub fn image(path: impl AsRef<Path>, options: &ImageOptions) -> Result<Figure> {
    let path = path.as_ref();
    let (image_width, image_height) = image_size(path)?;
    let ((x0, x1), (y0, y1)) = axis_ranges(options, image_width, image_height);
    let (width, height) = plot_size(options, image_height / image_width);
    tracing::debug!(
        "plot = W {width:.1} x H {height:.1}, range = x[{x0:.1}..{x1:.1}] - y[{y0:.1}..{y1:.1}]"
    );

    let base = layout(&LayoutOptions {
        width: Some(width),
        height: Some(height),
        boxed: Some(false),
        anchor_axes: Some(true),
        x_ticklabel: Some(options.x_range.is_some()),
        y_ticklabel: Some(options.y_range.is_some()),
        margin: Some(Margin::uniform(5.0)),
        ..Default::default()
    });
    let ranges = layout(&LayoutOptions {
        x_range: Some((Some(x0), Some(x1))),
        y_range: Some((Some(y0), Some(y1))),
        ..Default::default()
    });
    let mut merged = merge_layout(&base, options.layout.iter().chain([&ranges]), false);
    merged.set_path(&["xaxis", "constrain"], "domain");
    merged.set_path(&["yaxis", "constrain"], "domain");

    let mut figure = Figure::new(Vec::new(), merged);
    let mut props = Map::new();
    props.insert("source".to_string(), data_uri(path)?.into());
    for (key, value) in [
        ("xref", json!("x")),
        ("yref", json!("y")),
        ("x", json!(x0)),
        ("y", json!(y1)),
        ("sizex", json!(x1 - x0)),
        ("sizey", json!(y0 - y1)),
        ("sizing", json!("stretch")),
        ("layer", json!(options.layer)),
    ] {
        props.insert(key.to_string(), value);
    }
    if let Some(opacity) = options.opacity {
        props.insert("opacity".to_string(), opacity.into());
    }
    figure.add_layout_image(props);
    autoscale_plot_font_sizes(figure.layout_mut(), options.autoscale_font_by);

    Ok(figure)
}

/// Static `<img>` element with the image inlined.
fn img_html(path: &Path, options: &ImageOptions) -> Result<String> {
    let mut html = format!("<img src=\"{}\"", data_uri(path)?);
    if let Some(width) = options.width {
        html.push_str(&format!(" width=\"{width}\""));
    }
    if let Some(height) = options.height {
        html.push_str(&format!(" height=\"{height}\""));
    }
    html.push_str("/>");
    Ok(html)
}

/// Show an image file, interactively or as a plain `<img>`.
///
/// # Errors
/// Returns an error if the file cannot be read or rendering fails.
pub fn show_image(
    path: impl AsRef<Path>,
    options: &ImageOptions,
    show_options: &ShowOptions,
) -> Result<Option<MimeBundle>> {
    let path = path.as_ref();
    if options.static_image {
        let bundle = MimeBundle::html(img_html(path, options)?);
        if !show_options.no_plot {
            publish(&bundle);
        }
        return Ok(Some(bundle));
    }
    show(&image(path, options)?, show_options)
}

#[cfg(test)]
#[path = "image_tests.rs"]
mod tests;
