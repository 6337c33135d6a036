//! Displaying figures and writing them to files.

pub mod html;
mod show;

pub use html::{IncludePlotlyJs, to_html};
pub use show::{
    OutputFormat, ShowOptions, export_scale, parse_out_pattern, show, show_mult,
    write_figure,
};
