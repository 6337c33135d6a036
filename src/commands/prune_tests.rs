use std::fs;
use std::path::PathBuf;

use serde_json::json;
use tempfile::TempDir;

use super::*;
use crate::defaults::IFRAME_DIR;

fn notebook_dir() -> TempDir {
    let dir = TempDir::new().unwrap();
    let iframe_dir = dir.path().join(IFRAME_DIR);
    fs::create_dir_all(&iframe_dir).unwrap();
    fs::write(iframe_dir.join("used.html"), "").unwrap();
    fs::write(iframe_dir.join("stale.html"), "").unwrap();
    let notebook = json!({"cells": [{"outputs": [{"data": {
        "text/html": ["<iframe\n", format!("src=\"{IFRAME_DIR}/used.html\"\n"), "></iframe>"]
    }}]}]});
    fs::write(dir.path().join("plots.ipynb"), notebook.to_string()).unwrap();
    dir
}

#[test]
fn dry_run_keeps_files() {
    let dir = notebook_dir();

    let report = run_prune_impl(dir.path(), true).unwrap();

    assert_eq!(report.removed, vec![PathBuf::from(IFRAME_DIR).join("stale.html")]);
    assert!(dir.path().join(IFRAME_DIR).join("stale.html").exists());
}

#[test]
fn prune_removes_unused_files() {
    let dir = notebook_dir();

    let report = run_prune_impl(dir.path(), false).unwrap();

    assert_eq!(report.kept.len(), 1);
    assert!(!dir.path().join(IFRAME_DIR).join("stale.html").exists());
    assert!(dir.path().join(IFRAME_DIR).join("used.html").exists());
}

#[test]
fn prune_rejects_missing_directory() {
    let dir = TempDir::new().unwrap();

    let err = run_prune_impl(&dir.path().join("missing"), false).unwrap_err();

    assert!(err.to_string().contains("Not a directory"));
}

#[test]
fn report_lists_removed_files() {
    let report = PruneReport {
        kept: vec![PathBuf::from("iframe_figures/a.html")],
        removed: vec![PathBuf::from("iframe_figures/b.html")],
    };

    assert_eq!(
        format_prune_report(&report, false),
        "Removed: iframe_figures/b.html\n1 kept, 1 removed\n"
    );
    assert_eq!(
        format_prune_report(&report, true),
        "Unused: iframe_figures/b.html\n1 kept, 1 unused\n"
    );
}
