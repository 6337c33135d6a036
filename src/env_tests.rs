use std::collections::HashMap;
use std::ffi::OsString;
use std::fs;

use tempfile::TempDir;

use super::*;
use crate::defaults::IFRAME_DIR;

fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<OsString> {
    let vars: HashMap<String, OsString> = vars
        .iter()
        .map(|(key, value)| ((*key).to_string(), OsString::from(value)))
        .collect();
    move |key| vars.get(key).cloned()
}

#[test]
fn detects_terminal_without_kernel_variables() {
    assert_eq!(Environment::detect_from(lookup(&[])), Environment::Terminal);
    assert!(!Environment::Terminal.is_interactive());
}

#[test]
fn detects_notebook_from_jupyter_variables() {
    assert_eq!(
        Environment::detect_from(lookup(&[("JPY_PARENT_PID", "42")])),
        Environment::Notebook
    );
    assert_eq!(
        Environment::detect_from(lookup(&[("JUPYTER_RUNTIME_DIR", "/run/jupyter")])),
        Environment::Notebook
    );
}

#[test]
fn evcxr_takes_precedence_over_notebook() {
    let env = Environment::detect_from(lookup(&[
        ("JPY_PARENT_PID", "42"),
        ("EVCXR_IS_RUNTIME", "1"),
    ]));

    assert_eq!(env, Environment::Evcxr);
    assert!(env.is_interactive());
}

#[test]
fn notebook_path_requires_ipynb_extension() {
    assert_eq!(
        notebook_path_from(Some(OsString::from("/work/analysis.ipynb"))),
        Some(PathBuf::from("/work/analysis.ipynb"))
    );
    assert_eq!(notebook_path_from(Some(OsString::from("/work/console"))), None);
    assert_eq!(notebook_path_from(None), None);
}

#[test]
fn configure_in_terminal_only_applies_config() {
    let _guard = settings::test_guard();
    let config = Config {
        theme: Some("plotly".to_string()),
        ..Config::default()
    };

    configure(Environment::Terminal, Some(&config), None);

    let current = settings::current();
    assert_eq!(current.theme, "plotly");
    assert_eq!(current.renderer, settings::DEFAULT_RENDERER);
    assert!(current.iframe_root.is_none());
}

#[test]
fn configure_in_notebook_switches_to_iframes_and_prunes() {
    let _guard = settings::test_guard();
    let dir = TempDir::new().unwrap();
    let iframe_dir = dir.path().join(IFRAME_DIR);
    fs::create_dir_all(&iframe_dir).unwrap();
    fs::write(iframe_dir.join("orphan.html"), "<html></html>").unwrap();

    configure(Environment::Notebook, None, Some(dir.path()));

    let current = settings::current();
    assert_eq!(current.renderer, "iframe_connected");
    assert_eq!(current.iframe_root.as_deref(), Some(dir.path()));
    assert!(!iframe_dir.join("orphan.html").exists());
}

#[test]
fn configured_renderer_is_kept_in_notebook() {
    let _guard = settings::test_guard();
    let dir = TempDir::new().unwrap();
    let config = Config {
        renderer: Some("notebook".to_string()),
        ..Config::default()
    };

    configure(Environment::Evcxr, Some(&config), Some(dir.path()));

    assert_eq!(settings::current().renderer, "notebook");
}

#[test]
fn invalid_config_falls_back_to_defaults() {
    let _guard = settings::test_guard();
    let config = Config {
        theme: Some("unknown".to_string()),
        ..Config::default()
    };

    configure(Environment::Terminal, Some(&config), None);

    assert_eq!(settings::current(), settings::Settings::default());
}

#[test]
fn malformed_notebook_does_not_abort_setup() {
    let _guard = settings::test_guard();
    let dir = TempDir::new().unwrap();
    fs::create_dir_all(dir.path().join(IFRAME_DIR)).unwrap();
    fs::write(dir.path().join("broken.ipynb"), "{not json").unwrap();

    configure(Environment::Notebook, None, Some(dir.path()));

    let current = settings::current();
    assert_eq!(current.renderer, "iframe_connected");
}
