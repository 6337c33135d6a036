//! Config file discovery: current dir, ancestors, user config, fallback.

use std::path::{Path, PathBuf};

use crate::config::{Config, FileConfigLoader};

use super::mock_fs::MockFileSystem;

#[test]
fn returns_default_when_no_config_found() {
    let loader = FileConfigLoader::with_fs(MockFileSystem::new());

    let result = loader.load().unwrap();

    assert_eq!(result.config, Config::default());
    assert!(result.path.is_none());
}

#[test]
fn loads_local_config_from_current_directory() {
    let fs = MockFileSystem::new()
        .with_current_dir("/my/project")
        .with_file("/my/project/.plotly-light.toml", "theme = \"plotly\"\n");

    let result = FileConfigLoader::with_fs(fs).load().unwrap();

    assert_eq!(result.config.theme.as_deref(), Some("plotly"));
    assert_eq!(
        result.path.as_deref(),
        Some(Path::new("/my/project/.plotly-light.toml"))
    );
}

#[test]
fn finds_local_config_in_ancestor_directory() {
    let fs = MockFileSystem::new()
        .with_current_dir("/my/project/notebooks/deep")
        .with_file("/my/project/.plotly-light.toml", "renderer = \"json\"\n");

    let result = FileConfigLoader::with_fs(fs).load().unwrap();

    assert_eq!(result.config.renderer.as_deref(), Some("json"));
}

#[test]
fn nearest_local_config_wins() {
    let fs = MockFileSystem::new()
        .with_current_dir("/my/project/sub")
        .with_file("/my/project/.plotly-light.toml", "theme = \"plotly\"\n")
        .with_file("/my/project/sub/.plotly-light.toml", "theme = \"seaborn\"\n");

    let result = FileConfigLoader::with_fs(fs).load().unwrap();

    assert_eq!(result.config.theme.as_deref(), Some("seaborn"));
}

#[test]
fn loads_user_config_as_fallback() {
    let fs = MockFileSystem::new()
        .with_config_dir(Some(PathBuf::from("/home/testuser/.config/plotly-light")))
        .with_file(
            "/home/testuser/.config/plotly-light/config.toml",
            "colors = [\"red\"]\n",
        );

    let result = FileConfigLoader::with_fs(fs).load().unwrap();

    assert_eq!(result.config.colors, Some(vec!["red".to_string()]));
}

#[test]
fn local_config_takes_priority_over_user_config() {
    let fs = MockFileSystem::new()
        .with_file("/project/.plotly-light.toml", "theme = \"ggplot2\"\n")
        .with_file(
            "/home/user/.config/plotly-light/config.toml",
            "theme = \"plotly_dark\"\n",
        );

    let result = FileConfigLoader::with_fs(fs).load().unwrap();

    assert_eq!(result.config.theme.as_deref(), Some("ggplot2"));
}

#[test]
fn missing_config_dir_falls_back_to_default() {
    let fs = MockFileSystem::new().with_config_dir(None);

    let result = FileConfigLoader::with_fs(fs).load().unwrap();

    assert!(result.path.is_none());
}
