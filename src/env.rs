//! Runtime environment detection and notebook setup.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::config::{Config, FileConfigLoader};
use crate::crawl;
use crate::error::Result;
use crate::settings;

/// Where figures end up when they are shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    /// A Jupyter kernel other than evcxr.
    Notebook,
    /// The evcxr Jupyter kernel, which displays the `EVCXR_BEGIN_CONTENT` protocol.
    Evcxr,
    Terminal,
}

impl Environment {
    /// Detect the environment from the process environment variables.
    #[must_use]
    pub fn detect() -> Self {
        Self::detect_from(|key| std::env::var_os(key))
    }

    /// Detect the environment from an arbitrary variable lookup.
    pub fn detect_from(lookup: impl Fn(&str) -> Option<OsString>) -> Self {
        if lookup("EVCXR_IS_RUNTIME").is_some() {
            Self::Evcxr
        } else if lookup("JPY_PARENT_PID").is_some() || lookup("JUPYTER_RUNTIME_DIR").is_some() {
            Self::Notebook
        } else {
            Self::Terminal
        }
    }

    /// Whether figures are displayed by a notebook frontend.
    #[must_use]
    pub const fn is_interactive(self) -> bool {
        matches!(self, Self::Notebook | Self::Evcxr)
    }
}

/// Path of the running notebook, if the kernel reports one.
#[must_use]
pub fn notebook_path() -> Option<PathBuf> {
    notebook_path_from(std::env::var_os("JPY_SESSION_NAME"))
}

fn notebook_path_from(session: Option<OsString>) -> Option<PathBuf> {
    let path = PathBuf::from(session?);
    path.extension()
        .is_some_and(|ext| ext == "ipynb")
        .then_some(path)
}

/// Directory of the running notebook; the kernel's working directory when
/// the notebook path is unknown.
#[must_use]
pub fn notebook_dir() -> Option<PathBuf> {
    notebook_path()
        .and_then(|path| path.parent().map(Path::to_path_buf))
        .filter(|dir| dir.is_dir())
        .or_else(|| std::env::current_dir().ok())
        .map(|dir| dunce::simplified(&dir).to_path_buf())
}

/// Set up plot defaults for this process.
///
/// Resets the defaults, applies the configuration file and, inside a
/// notebook, switches to the iframe renderer and prunes unused iframe
/// files. Nothing here fails: problems are logged and the defaults stay
/// non-interactive.
pub fn init() -> Environment {
    let env = Environment::detect();
    let config = match FileConfigLoader::new().load() {
        Ok(result) => Some(result.config),
        Err(err) => {
            tracing::warn!("ignoring configuration: {err}");
            None
        }
    };
    let root = if env.is_interactive() {
        notebook_dir()
    } else {
        None
    };
    configure(env, config.as_ref(), root.as_deref());
    env
}

/// Apply `config` and, for interactive environments with a known notebook
/// directory, the iframe setup rooted at `notebook_dir`.
pub fn configure(env: Environment, config: Option<&Config>, notebook_dir: Option<&Path>) {
    settings::reset();
    if let Some(config) = config
        && let Err(err) = config.apply()
    {
        tracing::warn!("failed to apply configuration: {err}");
    }

    if !env.is_interactive() {
        return;
    }
    let Some(root) = notebook_dir else {
        tracing::warn!("notebook directory unknown, keeping the default renderer");
        return;
    };
    let keep_renderer = config.is_some_and(|config| config.renderer.is_some());
    if let Err(err) = setup_iframes(root, keep_renderer) {
        tracing::warn!("iframe renderer setup failed: {err}");
    }
}

fn setup_iframes(root: &Path, keep_renderer: bool) -> Result<()> {
    settings::set_iframe_root(Some(root.to_path_buf()));
    if !keep_renderer {
        settings::set_default_renderer("iframe_connected")?;
    }
    crawl::remove_unused_htmls(root)?;
    Ok(())
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
