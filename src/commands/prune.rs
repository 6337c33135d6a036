use std::fmt::Write;
use std::path::Path;

use crate::cli::PruneArgs;
use crate::crawl::{self, PruneReport};
use crate::{EXIT_ERROR, EXIT_SUCCESS, PlotlyLightError, Result};

#[must_use]
pub fn run_prune(args: &PruneArgs) -> i32 {
    match run_prune_impl(&args.dir, args.dry_run) {
        Ok(report) => {
            print!("{}", format_prune_report(&report, args.dry_run));
            EXIT_SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_ERROR
        }
    }
}

/// Prune (or with `dry_run` only list) unused iframe figures under `dir`.
///
/// # Errors
/// Returns an error if `dir` is not a directory or pruning fails.
pub fn run_prune_impl(dir: &Path, dry_run: bool) -> Result<PruneReport> {
    if !dir.is_dir() {
        return Err(PlotlyLightError::Config(format!(
            "Not a directory: {}",
            dir.display()
        )));
    }
    if dry_run {
        crawl::unused_htmls(dir)
    } else {
        crawl::remove_unused_htmls(dir)
    }
}

#[must_use]
pub fn format_prune_report(report: &PruneReport, dry_run: bool) -> String {
    let verb = if dry_run { "Unused" } else { "Removed" };
    let mut output = String::new();
    for path in &report.removed {
        let _ = writeln!(output, "{verb}: {}", path.display());
    }
    let _ = writeln!(
        output,
        "{} kept, {} {}",
        report.kept.len(),
        report.removed.len(),
        verb.to_ascii_lowercase()
    );
    output
}

#[cfg(test)]
#[path = "prune_tests.rs"]
mod tests;
