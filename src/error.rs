//! Error types for manifest-split
//!
//! Library code returns `SplitError` through `SplitResult`; the binary wraps
//! these with `anyhow` context at the top level.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for manifest-split operations
pub type SplitResult<T> = Result<T, SplitError>;

/// Main error type for manifest-split operations
#[derive(Error, Debug)]
pub enum SplitError {
    /// A module's source path is not inside any known project
    #[error("unknown module path for module '{module}': {path}")]
    UnknownModulePath { module: String, path: String },

    /// module-info.json entry is missing data the closure relies on
    #[error("invalid module-info entry '{module}': {message}")]
    InvalidModule { module: String, message: String },

    /// module-info.json could not be parsed at all
    #[error("invalid module-info file {file}: {message}")]
    InvalidModuleInfo { file: PathBuf, message: String },

    /// Override document element without its required attribute
    #[error("<{element}> in {file} is missing required attribute '{attribute}'")]
    MissingAttribute {
        element: String,
        attribute: String,
        file: PathBuf,
    },

    /// Malformed XML in a manifest or override document
    #[error("invalid XML in {file}: {message}")]
    Xml { file: PathBuf, message: String },

    /// A project listing line that is not `path : name`
    #[error("malformed project listing line {line}: '{content}'")]
    InvalidProjectListing { line: usize, content: String },

    /// External tool could not be spawned or exited unsuccessfully
    #[error("{tool} failed: {message}")]
    ToolFailed { tool: String, message: String },

    /// Settings file could not be parsed
    #[error("invalid settings in {file}: {message}")]
    InvalidSettings { file: PathBuf, message: String },

    /// A required input was neither given on the command line nor derivable
    #[error("missing required input {flag}: {hint}")]
    MissingInput { flag: String, hint: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl SplitError {
    /// Whether the error is a usage problem (exit code 2) rather than a runtime failure.
    pub fn is_usage(&self) -> bool {
        matches!(self, SplitError::MissingInput { .. })
    }

    pub(crate) fn tool(tool: impl Into<String>, message: impl std::fmt::Display) -> Self {
        SplitError::ToolFailed {
            tool: tool.into(),
            message: message.to_string(),
        }
    }

    pub(crate) fn xml(file: impl Into<PathBuf>, message: impl std::fmt::Display) -> Self {
        SplitError::Xml {
            file: file.into(),
            message: message.to_string(),
        }
    }
}
