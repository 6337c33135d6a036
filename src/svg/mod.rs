//! Static SVG primitives for diagrams that plotly.js does not draw.

mod builder;
mod element;
mod format;

pub use builder::SvgBuilder;
pub use element::{Circle, SvgElement, Text, TextAnchor};
pub use format::{fmt_num, html_escape};
