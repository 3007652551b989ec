use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for iconkit operations
#[derive(Error, Diagnostic, Debug)]
pub enum IconError {
    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(iconkit::io))]
    Io { path: PathBuf, message: String },

    #[error("Parse error: {message}")]
    #[diagnostic(code(iconkit::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Build error: {message}")]
    #[diagnostic(code(iconkit::build))]
    Build {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Render error with {path}: {message}")]
    #[diagnostic(code(iconkit::render))]
    Render { path: PathBuf, message: String },
}

impl IconError {
    /// Wrap an IO error with the path it concerns.
    pub fn io(path: impl Into<PathBuf>, context: &str, err: impl std::fmt::Display) -> Self {
        IconError::Io {
            path: path.into(),
            message: format!("{}: {}", context, err),
        }
    }
}

pub type Result<T> = std::result::Result<T, IconError>;
