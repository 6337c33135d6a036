use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlotlyLightError {
    #[error("Length of `{what}` ({actual}) != {expected_what} ({expected})")]
    LengthMismatch {
        what: &'static str,
        actual: usize,
        expected_what: &'static str,
        expected: usize,
    },

    #[error("Invalid value for `{option}`: {value:?} (expected {expected})")]
    InvalidOption {
        option: &'static str,
        value: String,
        expected: &'static str,
    },

    #[error("Empty data")]
    EmptyData,

    #[error("Unsupported output format: {0}")]
    UnsupportedFormat(String),

    #[error("Invalid output file pattern: {0}")]
    InvalidOutputPattern(String),

    #[error("width and height must be set to write {0}")]
    MissingSize(String),

    #[error("Failed to read image: {path}")]
    Image {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid notebook {path}: {source}")]
    Notebook {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid glob pattern: {pattern}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),
}

impl PlotlyLightError {
    /// Shorthand for an option whose value is not in its allowed set.
    pub fn invalid_option(
        option: &'static str,
        value: impl std::fmt::Display,
        expected: &'static str,
    ) -> Self {
        Self::InvalidOption {
            option,
            value: value.to_string(),
            expected,
        }
    }
}

pub type Result<T> = std::result::Result<T, PlotlyLightError>;

/// Fail with [`PlotlyLightError::LengthMismatch`] unless both lengths agree.
///
/// # Errors
/// Returns an error if `actual != expected`.
pub fn ensure_len(
    what: &'static str,
    actual: usize,
    expected_what: &'static str,
    expected: usize,
) -> Result<()> {
    if actual == expected {
        Ok(())
    } else {
        Err(PlotlyLightError::LengthMismatch {
            what,
            actual,
            expected_what,
            expected,
        })
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
