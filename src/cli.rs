use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::output::IncludePlotlyJs;

#[derive(Parser, Debug)]
#[command(name = "plotly-light")]
#[command(author, version, about = "Plotly figure output and notebook housekeeping")]
#[command(long_about = "Write Plotly figure JSON as standalone HTML and prune iframe \
    figure files that no notebook shows any more.\n\n\
    Exit codes:\n  \
    0 - Success\n  \
    2 - Configuration or runtime error")]
pub struct Cli {
    /// Increase log verbosity (-v, -vv for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Skip loading the configuration file
    #[arg(long, global = true)]
    pub no_config: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Delete iframe figure HTML files no notebook refers to
    Prune(PruneArgs),

    /// Write figure JSON to HTML or JSON files
    Render(RenderArgs),

    /// Configuration file utilities
    Config(ConfigArgs),
}

#[derive(Parser, Debug)]
pub struct PruneArgs {
    /// Directory holding the notebooks
    #[arg(default_value = ".")]
    pub dir: PathBuf,

    /// List unused files without deleting them
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Parser, Debug)]
pub struct RenderArgs {
    /// Figure JSON file (`{"data": [...], "layout": {...}}`)
    pub figure: PathBuf,

    /// Output file pattern, e.g. `fig.html` or `fig.{html,json}`
    #[arg(short, long)]
    pub output: String,

    /// plotly.js source for HTML output: cdn, omit or a script path
    #[arg(long)]
    pub plotlyjs: Option<IncludePlotlyJs>,

    /// Do not attach the default template to the layout
    #[arg(long)]
    pub no_template: bool,
}

#[derive(Parser, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Display the effective defaults after applying the configuration file
    Show {
        /// Path to configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: ShowFormat,
    },
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ShowFormat {
    #[default]
    Text,
    Json,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
