//! Filesystem abstraction for testability.

use std::path::{Path, PathBuf};

/// Filesystem operations needed to discover and read configuration files.
pub trait FileSystem {
    /// Read file contents as a string.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read.
    fn read_to_string(&self, path: &Path) -> std::io::Result<String>;

    fn exists(&self, path: &Path) -> bool;

    /// Get the current working directory.
    ///
    /// # Errors
    /// Returns an error if the current directory cannot be determined.
    fn current_dir(&self) -> std::io::Result<PathBuf>;

    /// Platform-specific configuration directory for plotly-light.
    ///
    /// - Windows: `%APPDATA%\plotly-light`
    /// - macOS: `~/Library/Application Support/plotly-light`
    /// - Linux: `~/.config/plotly-light` (XDG)
    fn config_dir(&self) -> Option<PathBuf>;
}

/// Real filesystem implementation.
#[derive(Debug, Default, Clone, Copy)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn read_to_string(&self, path: &Path) -> std::io::Result<String> {
        std::fs::read_to_string(path)
    }

    fn exists(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn current_dir(&self) -> std::io::Result<PathBuf> {
        std::env::current_dir().map(|dir| dunce::simplified(&dir).to_path_buf())
    }

    fn config_dir(&self) -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "plotly-light")
            .map(|dirs| dirs.config_dir().to_path_buf())
    }
}
