use serde_json::json;
use tempfile::TempDir;

use super::*;

fn iframe_output(name: &str) -> Value {
    json!({
        "output_type": "display_data",
        "data": {
            "text/html": [
                "<iframe\n",
                "scrolling=\"no\"\n",
                format!("src=\"{IFRAME_DIR}/{name}\"\n"),
                "></iframe>\n"
            ]
        }
    })
}

fn write_notebook(dir: &Path, file: &str, outputs: Vec<Value>) {
    let notebook = json!({
        "cells": [
            {"cell_type": "markdown", "source": ["# title"]},
            {"cell_type": "code", "outputs": outputs},
        ],
        "nbformat": 4,
    });
    fs::write(dir.join(file), notebook.to_string()).unwrap();
}

fn touch_html(dir: &Path, name: &str) {
    let iframe_dir = dir.join(IFRAME_DIR);
    fs::create_dir_all(&iframe_dir).unwrap();
    fs::write(iframe_dir.join(name), "<html></html>").unwrap();
}

#[test]
fn lists_iframe_sources_in_outputs() {
    let dir = TempDir::new().unwrap();
    write_notebook(
        dir.path(),
        "a.ipynb",
        vec![
            iframe_output("one.html"),
            json!({"output_type": "stream", "text": ["src=\"iframe_figures/x.html\"\n"]}),
            json!({"data": {"text/html": "<b>no iframe</b>"}}),
            iframe_output("two.html"),
        ],
    );

    let htmls = html_list_in_notebook(&dir.path().join("a.ipynb")).unwrap();
    assert_eq!(
        htmls,
        vec![format!("{IFRAME_DIR}/one.html"), format!("{IFRAME_DIR}/two.html")]
    );
}

#[test]
fn accepts_html_as_single_string() {
    let dir = TempDir::new().unwrap();
    let output = json!({"data": {"text/html": "<iframe\nsrc=\"iframe_figures/s.html\"\n></iframe>"}});
    write_notebook(dir.path(), "a.ipynb", vec![output]);

    let htmls = html_list_in_notebook(&dir.path().join("a.ipynb")).unwrap();
    assert_eq!(htmls, vec!["iframe_figures/s.html".to_string()]);
}

#[test]
fn ignores_sources_outside_iframe_dir() {
    let dir = TempDir::new().unwrap();
    let output = json!({"data": {"text/html": ["src=\"other/a.html\"\n", "src=\"iframe_figures/a.png\"\n"]}});
    write_notebook(dir.path(), "a.ipynb", vec![output]);

    assert!(html_list_in_notebook(&dir.path().join("a.ipynb")).unwrap().is_empty());
}

#[test]
fn notebook_without_cells_has_no_htmls() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("a.ipynb"), "{}").unwrap();
    assert!(html_list_in_notebook(&dir.path().join("a.ipynb")).unwrap().is_empty());
}

#[test]
fn malformed_notebook_is_an_error() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("bad.ipynb"), "{not json").unwrap();
    assert!(matches!(
        html_list_in_notebook(&dir.path().join("bad.ipynb")),
        Err(PlotlyLightError::Notebook { .. })
    ));
}

#[test]
fn removes_only_unreferenced_files() {
    let dir = TempDir::new().unwrap();
    write_notebook(dir.path(), "a.ipynb", vec![iframe_output("used-a.html")]);
    write_notebook(dir.path(), "b.ipynb", vec![iframe_output("used-b.html")]);
    for name in ["used-a.html", "used-b.html", "stale.html"] {
        touch_html(dir.path(), name);
    }
    fs::write(dir.path().join(IFRAME_DIR).join("notes.txt"), "").unwrap();

    let report = remove_unused_htmls(dir.path()).unwrap();

    assert_eq!(report.removed, vec![PathBuf::from(format!("{IFRAME_DIR}/stale.html"))]);
    assert_eq!(report.kept.len(), 2);
    let iframe_dir = dir.path().join(IFRAME_DIR);
    assert!(!iframe_dir.join("stale.html").exists());
    assert!(iframe_dir.join("used-a.html").exists());
    assert!(iframe_dir.join("used-b.html").exists());
    assert!(iframe_dir.join("notes.txt").exists());
}

#[test]
fn dry_run_deletes_nothing() {
    let dir = TempDir::new().unwrap();
    touch_html(dir.path(), "stale.html");

    let report = unused_htmls(dir.path()).unwrap();
    assert_eq!(report.removed.len(), 1);
    assert!(dir.path().join(IFRAME_DIR).join("stale.html").exists());
}

#[test]
fn missing_iframe_dir_is_a_no_op() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("bad.ipynb"), "{not json").unwrap();
    assert_eq!(remove_unused_htmls(dir.path()).unwrap(), PruneReport::default());
}

#[test]
fn malformed_notebook_aborts_pruning() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("bad.ipynb"), "{not json").unwrap();
    touch_html(dir.path(), "stale.html");

    assert!(remove_unused_htmls(dir.path()).is_err());
    assert!(dir.path().join(IFRAME_DIR).join("stale.html").exists());
}
