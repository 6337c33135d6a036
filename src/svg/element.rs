//! Primitive SVG elements: circles and text.

use std::fmt;
use std::fmt::Write;

use super::format::{fmt_num, html_escape};

/// Base trait for SVG elements.
pub trait SvgElement {
    /// Render the element to an SVG string.
    fn render(&self) -> String;
}

/// Text anchor position for labels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TextAnchor {
    Start,
    #[default]
    Middle,
    End,
}

impl fmt::Display for TextAnchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start => write!(f, "start"),
            Self::Middle => write!(f, "middle"),
            Self::End => write!(f, "end"),
        }
    }
}

/// A filled, stroked circle.
#[derive(Debug, Clone, PartialEq)]
pub struct Circle {
    pub cx: f64,
    pub cy: f64,
    pub r: f64,
    pub fill: String,
    pub fill_opacity: f64,
    pub stroke: String,
    pub stroke_width: f64,
    /// Tooltip shown on hover.
    pub title: Option<String>,
}

impl Circle {
    #[must_use]
    pub fn new(cx: f64, cy: f64, r: f64) -> Self {
        Self {
            cx,
            cy,
            r,
            fill: "none".to_string(),
            fill_opacity: 1.0,
            stroke: "black".to_string(),
            stroke_width: 1.0,
            title: None,
        }
    }

    #[must_use]
    pub fn with_fill(mut self, fill: impl Into<String>, opacity: f64) -> Self {
        self.fill = fill.into();
        self.fill_opacity = opacity;
        self
    }

    #[must_use]
    pub fn with_stroke(mut self, stroke: impl Into<String>, width: f64) -> Self {
        self.stroke = stroke.into();
        self.stroke_width = width;
        self
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}

impl SvgElement for Circle {
    fn render(&self) -> String {
        let mut output = format!(
            r#"<circle cx="{}" cy="{}" r="{}" fill="{}" fill-opacity="{}" stroke="{}" stroke-width="{}""#,
            fmt_num(self.cx),
            fmt_num(self.cy),
            fmt_num(self.r),
            html_escape(&self.fill),
            fmt_num(self.fill_opacity),
            html_escape(&self.stroke),
            fmt_num(self.stroke_width),
        );
        match &self.title {
            Some(title) => {
                let _ = write!(
                    output,
                    ">\n    <title>{}</title>\n</circle>",
                    html_escape(title)
                );
            }
            None => output.push_str("/>"),
        }
        output
    }
}

/// A single line of text.
#[derive(Debug, Clone, PartialEq)]
pub struct Text {
    pub x: f64,
    pub y: f64,
    pub content: String,
    pub font_size: f64,
    pub anchor: TextAnchor,
    pub bold: bool,
}

impl Text {
    #[must_use]
    pub fn new(x: f64, y: f64, content: impl Into<String>) -> Self {
        Self {
            x,
            y,
            content: content.into(),
            font_size: 12.0,
            anchor: TextAnchor::Middle,
            bold: false,
        }
    }

    #[must_use]
    pub const fn with_font_size(mut self, size: f64) -> Self {
        self.font_size = size;
        self
    }

    #[must_use]
    pub const fn with_anchor(mut self, anchor: TextAnchor) -> Self {
        self.anchor = anchor;
        self
    }

    #[must_use]
    pub const fn bold(mut self) -> Self {
        self.bold = true;
        self
    }
}

impl SvgElement for Text {
    fn render(&self) -> String {
        let weight = if self.bold { r#" font-weight="bold""# } else { "" };
        // dominant-baseline keeps (x, y) at the vertical center of the glyphs
        format!(
            r#"<text x="{}" y="{}" text-anchor="{}" dominant-baseline="central" font-size="{}"{weight}>{}</text>"#,
            fmt_num(self.x),
            fmt_num(self.y),
            self.anchor,
            fmt_num(self.font_size),
            html_escape(&self.content),
        )
    }
}

#[cfg(test)]
#[path = "element_tests.rs"]
mod tests;
