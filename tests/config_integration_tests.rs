//! Integration tests for the `config` command.

mod common;

use common::TestFixture;
use predicates::prelude::*;
use serde_json::Value;

#[test]
fn config_show_builtin_defaults() {
    let fixture = TestFixture::new();

    plotly_light!()
        .current_dir(fixture.path())
        .args(["--no-config", "config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("built-in defaults"))
        .stdout(predicate::str::contains("Theme:    simple_white"))
        .stdout(predicate::str::contains("Renderer: plotly_mimetype"));
}

#[test]
fn config_show_discovers_file_in_ancestor() {
    let fixture = TestFixture::new();
    fixture.create_config("renderer = \"iframe_connected\"\ncolors = [\"red\", \"blue\"]\n");
    fixture.create_file("notebooks/keep.txt", "");

    plotly_light!()
        .current_dir(fixture.path().join("notebooks"))
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains(".plotly-light.toml"))
        .stdout(predicate::str::contains("Renderer: iframe_connected"))
        .stdout(predicate::str::contains("Colors:   red, blue"));
}

#[test]
fn config_show_json_with_custom_path() {
    let fixture = TestFixture::new();
    fixture.create_file("custom.toml", "[config]\nscrollZoom = true\n");

    let output = plotly_light!()
        .current_dir(fixture.path())
        .args(["config", "show", "--config", "custom.toml", "--format", "json"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["config"]["scrollZoom"], true);
    assert_eq!(json["config"]["displaylogo"], false);
}

#[test]
fn config_show_invalid_toml() {
    let fixture = TestFixture::new();
    fixture.create_config("theme = [[[");

    plotly_light!()
        .current_dir(fixture.path())
        .args(["config", "show"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn config_show_unknown_theme() {
    let fixture = TestFixture::new();
    fixture.create_config("theme = \"solarized\"\n");

    plotly_light!()
        .current_dir(fixture.path())
        .args(["config", "show"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("solarized"));
}
