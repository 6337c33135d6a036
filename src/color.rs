//! Human-readable, predefined colors.
//!
//! `blue`, `lightblue`, `red`, `yellow`, `green` and `purple` follow the
//! University of Tokyo visual identity palette.

/// Named colors in display order.
pub const COLORS: &[(&str, &str)] = &[
    ("blue", "#0b8bee"),
    ("lightblue", "#5bdeff"),
    ("darkblue", "#000080"),
    ("red", "#d71131"),
    ("lightred", "#fa8072"),
    ("darkred", "#800000"),
    ("yellow", "#ffcd00"),
    ("lightyellow", "#ffff00"),
    ("darkyellow", "#ab7d00"),
    ("green", "#35ca00"),
    ("lightgreen", "#00ff00"),
    ("darkgreen", "#006400"),
    ("purple", "#8f07aa"),
    ("lightpurple", "#ee82ee"),
    ("darkpurple", "#4e1e66"),
];

/// Trace colors cycled through by default.
pub const DEFAULT_COLORWAY: &[&str] = &[
    "#0b8bee", // blue
    "#ffcd00", // yellow
    "#d71131", // red
    "#000080", // darkblue
    "#35ca00", // green
    "#fa8072", // lightred
    "#5bdeff", // lightblue
    "#800000", // darkred
    "#00ff00", // lightgreen
    "#8f07aa", // purple
];

/// Look up a named color.
#[must_use]
pub fn color(name: &str) -> Option<&'static str> {
    COLORS
        .iter()
        .find(|(key, _)| *key == name)
        .map(|(_, hex)| *hex)
}

#[cfg(test)]
#[path = "color_tests.rs"]
mod tests;
