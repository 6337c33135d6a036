//! Pruning iframe HTML files that no notebook output refers to.
//!
//! The iframe renderer never overwrites its files, so re-running cells leaves
//! old plots behind. A file is kept while any `*.ipynb` in the notebook
//! directory still shows it in a cell output.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use globset::{Glob, GlobMatcher};
use regex::Regex;
use serde_json::Value;
use walkdir::WalkDir;

use crate::defaults::IFRAME_DIR;
use crate::error::{PlotlyLightError, Result};

static IFRAME_SRC: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r#"^src="({}/[^"/]+\.html)"$"#, regex::escape(IFRAME_DIR)))
        .expect("Invalid regex")
});

/// Outcome of a pruning pass, as paths relative to the notebook directory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PruneReport {
    pub kept: Vec<PathBuf>,
    pub removed: Vec<PathBuf>,
}

fn matcher(pattern: &str) -> Result<GlobMatcher> {
    Glob::new(pattern)
        .map(|glob| glob.compile_matcher())
        .map_err(|source| PlotlyLightError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })
}

/// Files directly inside `dir` whose names match `pattern`, sorted.
fn files_matching(dir: &Path, pattern: &str) -> Result<Vec<PathBuf>> {
    let matcher = matcher(pattern)?;
    let mut files = Vec::new();
    for entry in WalkDir::new(dir).min_depth(1).max_depth(1).sort_by_file_name() {
        let entry = entry.map_err(|err| PlotlyLightError::Io(err.into()))?;
        if entry.file_type().is_file() && matcher.is_match(entry.file_name()) {
            files.push(entry.into_path());
        }
    }
    Ok(files)
}

/// Lines of a notebook output's `text/html`, stored as one string or a list.
fn html_lines(html: &Value) -> Vec<&str> {
    match html {
        Value::String(text) => text.lines().collect(),
        Value::Array(parts) => parts
            .iter()
            .filter_map(Value::as_str)
            .flat_map(str::lines)
            .collect(),
        _ => Vec::new(),
    }
}

/// Iframe HTML files shown in the outputs of a notebook.
///
/// # Errors
/// Returns an error if the notebook cannot be read or is not valid JSON.
pub fn html_list_in_notebook(path: &Path) -> Result<Vec<String>> {
    let content = fs::read_to_string(path).map_err(|source| PlotlyLightError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    let notebook: Value =
        serde_json::from_str(&content).map_err(|source| PlotlyLightError::Notebook {
            path: path.to_path_buf(),
            source,
        })?;

    let outputs = notebook
        .get("cells")
        .and_then(Value::as_array)
        .into_iter()
        .flatten()
        .filter_map(|cell| cell.get("outputs").and_then(Value::as_array))
        .flatten();

    let mut htmls = Vec::new();
    for output in outputs {
        let Some(html) = output.get("data").and_then(|data| data.get("text/html")) else {
            continue;
        };
        htmls.extend(
            html_lines(html)
                .into_iter()
                .filter_map(|line| IFRAME_SRC.captures(line.trim_end()))
                .map(|caps| caps[1].to_string()),
        );
    }
    Ok(htmls)
}

/// Sort the iframe HTML files under `root` into used and unused ones
/// without deleting anything.
///
/// # Errors
/// Returns an error if a notebook is unreadable or malformed, or the
/// directory cannot be listed.
pub fn unused_htmls(root: &Path) -> Result<PruneReport> {
    let iframe_dir = root.join(IFRAME_DIR);
    if !iframe_dir.is_dir() {
        return Ok(PruneReport::default());
    }

    let mut referenced = BTreeSet::new();
    for notebook in files_matching(root, "*.ipynb")? {
        referenced.extend(html_list_in_notebook(&notebook)?);
    }

    let mut report = PruneReport::default();
    for file in files_matching(&iframe_dir, "*.html")? {
        let Some(name) = file.file_name().and_then(|name| name.to_str()) else {
            continue;
        };
        let relative = format!("{IFRAME_DIR}/{name}");
        if referenced.contains(&relative) {
            report.kept.push(PathBuf::from(relative));
        } else {
            report.removed.push(PathBuf::from(relative));
        }
    }
    Ok(report)
}

/// Delete iframe HTML files under `root` that no notebook in `root` shows.
///
/// # Errors
/// Returns an error if a notebook is unreadable or malformed, or a file
/// cannot be deleted.
pub fn remove_unused_htmls(root: &Path) -> Result<PruneReport> {
    let report = unused_htmls(root)?;
    for file in &report.removed {
        fs::remove_file(root.join(file))?;
    }
    tracing::info!(
        kept = report.kept.len(),
        removed = report.removed.len(),
        "pruned unused iframe figures"
    );
    Ok(report)
}

#[cfg(test)]
#[path = "crawl_tests.rs"]
mod tests;
