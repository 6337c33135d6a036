//! SVG document builder.

use std::fmt::Write;

use super::element::SvgElement;
use super::format::{fmt_num, html_escape};

/// Builder for standalone SVG documents.
#[derive(Debug, Default)]
pub struct SvgBuilder {
    width: f64,
    height: f64,
    title: String,
    background: Option<String>,
    elements: Vec<String>,
}

impl SvgBuilder {
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            title: String::new(),
            background: None,
            elements: Vec::new(),
        }
    }

    /// Accessible title (`<title>`), not drawn.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    #[must_use]
    pub fn with_background(mut self, color: impl Into<String>) -> Self {
        self.background = Some(color.into());
        self
    }

    #[must_use]
    pub fn push_element<E: SvgElement>(mut self, element: &E) -> Self {
        self.elements.push(element.render());
        self
    }

    #[must_use]
    pub fn build(self) -> String {
        let mut output = String::new();
        let (width, height) = (fmt_num(self.width), fmt_num(self.height));

        let _ = writeln!(
            output,
            r#"<svg width="{width}" height="{height}" viewBox="0 0 {width} {height}" xmlns="http://www.w3.org/2000/svg" font-family="Arial, sans-serif" role="img">"#,
        );

        if !self.title.is_empty() {
            let escaped = html_escape(&self.title);
            let _ = writeln!(output, "    <title>{escaped}</title>");
        }
        if let Some(color) = &self.background {
            let _ = writeln!(
                output,
                r#"    <rect width="100%" height="100%" fill="{}"/>"#,
                html_escape(color)
            );
        }

        for element in self.elements {
            for line in element.lines() {
                let _ = writeln!(output, "    {line}");
            }
        }

        output.push_str("</svg>");
        output
    }
}

#[cfg(test)]
#[path = "builder_tests.rs"]
mod tests;
