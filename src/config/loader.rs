use std::path::{Path, PathBuf};

use super::Config;
use super::filesystem::{FileSystem, RealFileSystem};
use crate::error::{PlotlyLightError, Result};

pub const LOCAL_CONFIG_NAME: &str = ".plotly-light.toml";
const USER_CONFIG_NAME: &str = "config.toml";

/// A loaded configuration and the file it came from.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadResult {
    pub config: Config,
    /// `None` when no configuration file was found.
    pub path: Option<PathBuf>,
}

/// Loads configuration from the filesystem.
///
/// Search order:
/// 1. `.plotly-light.toml` in the current directory or its nearest ancestor
/// 2. `config.toml` in the platform-specific user config directory
/// 3. `Config::default()` if neither exists
#[derive(Debug, Default)]
pub struct FileConfigLoader<F: FileSystem = RealFileSystem> {
    fs: F,
}

impl FileConfigLoader<RealFileSystem> {
    #[must_use]
    pub const fn new() -> Self {
        Self { fs: RealFileSystem }
    }
}

impl<F: FileSystem> FileConfigLoader<F> {
    #[must_use]
    pub const fn with_fs(fs: F) -> Self {
        Self { fs }
    }

    fn local_config_path(&self) -> Option<PathBuf> {
        let cwd = self.fs.current_dir().ok()?;
        cwd.ancestors()
            .map(|dir| dir.join(LOCAL_CONFIG_NAME))
            .find(|path| self.fs.exists(path))
    }

    fn user_config_path(&self) -> Option<PathBuf> {
        self.fs
            .config_dir()
            .map(|dir| dir.join(USER_CONFIG_NAME))
            .filter(|path| self.fs.exists(path))
    }

    fn parse_config(content: &str, path: &Path) -> Result<Config> {
        toml::from_str(content).map_err(|err| {
            PlotlyLightError::Config(format!("{}: {}", path.display(), err.message()))
        })
    }

    /// Load the first configuration file found.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(&self) -> Result<LoadResult> {
        match self.local_config_path().or_else(|| self.user_config_path()) {
            Some(path) => self.load_from_path(&path),
            None => Ok(LoadResult::default()),
        }
    }

    /// Load configuration from a specific path.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_path(&self, path: &Path) -> Result<LoadResult> {
        let content = self
            .fs
            .read_to_string(path)
            .map_err(|source| PlotlyLightError::FileRead {
                path: path.to_path_buf(),
                source,
            })?;
        let config = Self::parse_config(&content, path)?;
        tracing::debug!(path = %path.display(), "loaded configuration");
        Ok(LoadResult {
            config,
            path: Some(path.to_path_buf()),
        })
    }
}

#[cfg(test)]
#[path = "loader_tests/mod.rs"]
mod tests;
