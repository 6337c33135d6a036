//! Shorthand Plotly trace and layout builders with notebook display glue.
//!
//! Traces and layouts are plain Plotly JSON ([`trace::Trace`],
//! [`layout::Layout`]); [`output::show`] renders a [`figure::Figure`] with the
//! process-wide defaults held by [`settings`].

pub mod cli;
pub mod color;
pub mod commands;
pub mod config;
pub mod crawl;
pub mod defaults;
pub mod env;
pub mod error;
pub mod figure;
pub mod image;
pub mod layout;
pub mod output;
pub mod props;
pub mod renderer;
pub mod settings;
pub mod svg;
pub mod trace;
pub mod venn;

pub use error::{PlotlyLightError, Result};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_ERROR: i32 = 2;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
