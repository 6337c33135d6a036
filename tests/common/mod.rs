#![allow(dead_code)]

use std::fs;
use std::path::Path;

use serde_json::{Value, json};
use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the plotly-light binary.
#[macro_export]
macro_rules! plotly_light {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("plotly-light"))
    };
}

pub const IFRAME_DIR: &str = "iframe_figures";

/// Creates a temporary notebook directory with test fixtures.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    /// Creates a new test fixture with an empty temp directory.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Creates a file with the given content in the temp directory.
    pub fn create_file(&self, relative_path: &str, content: &str) {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    /// Returns the path to the temp directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn exists(&self, relative_path: &str) -> bool {
        self.dir.path().join(relative_path).exists()
    }

    pub fn read(&self, relative_path: &str) -> String {
        fs::read_to_string(self.dir.path().join(relative_path)).expect("Failed to read file")
    }

    pub fn create_config(&self, content: &str) {
        self.create_file(".plotly-light.toml", content);
    }

    /// Creates an iframe figure file named `<name>.html`.
    pub fn create_iframe_figure(&self, name: &str) {
        self.create_file(&format!("{IFRAME_DIR}/{name}.html"), "<html></html>");
    }

    /// Creates a notebook whose outputs show the given iframe figures.
    pub fn create_notebook(&self, name: &str, figures: &[&str]) {
        let outputs: Vec<Value> = figures
            .iter()
            .map(|figure| {
                json!({
                    "output_type": "display_data",
                    "data": {"text/html": [
                        "<iframe\n",
                        "    scrolling=\"no\"\n",
                        format!("src=\"{IFRAME_DIR}/{figure}.html\"\n"),
                        "></iframe>\n",
                    ]},
                })
            })
            .collect();
        let notebook = json!({
            "cells": [{"cell_type": "code", "source": [], "outputs": outputs}],
            "metadata": {},
            "nbformat": 4,
            "nbformat_minor": 5,
        });
        self.create_file(name, &notebook.to_string());
    }
}

/// A small figure with an explicit size.
pub fn sized_figure() -> Value {
    json!({
        "data": [{"type": "scatter", "x": [1, 2, 3], "y": [3, 1, 2], "mode": "markers"}],
        "layout": {"width": 400, "height": 400},
    })
}
