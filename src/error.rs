//! Error types for tsgen
//!
//! Uses `thiserror` for library errors; the binary wraps them in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for scaffolding operations
pub type ScaffoldResult<T> = Result<T, ScaffoldError>;

/// Main error type for scaffolding operations
#[derive(Error, Debug)]
pub enum ScaffoldError {
    /// No project name was given and none could be obtained interactively
    #[error("project name is not specified")]
    MissingProjectName,

    /// The operator cancelled the prompt, or there is no terminal to prompt on
    #[error("prompt aborted: {reason}")]
    PromptAborted { reason: String },

    /// A bundled asset could not be read
    #[error("failed to read asset {path}: {source}")]
    AssetRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A directory in the output tree could not be created
    #[error("failed to create directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A generated file could not be written
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A template asset is not valid UTF-8
    #[error("template {name} is not valid UTF-8")]
    TemplateEncoding { name: String },

    /// Configuration file could not be parsed
    #[error("invalid configuration in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },
}

impl ScaffoldError {
    /// Path the error refers to, if any.
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            ScaffoldError::AssetRead { path, .. }
            | ScaffoldError::CreateDir { path, .. }
            | ScaffoldError::Write { path, .. } => Some(path),
            ScaffoldError::InvalidConfig { file, .. } => Some(file),
            _ => None,
        }
    }

    /// Short machine-readable identifier used in JSON error events.
    pub fn kind(&self) -> &'static str {
        match self {
            ScaffoldError::MissingProjectName => "missing_project_name",
            ScaffoldError::PromptAborted { .. } => "prompt_aborted",
            ScaffoldError::AssetRead { .. } => "asset_read",
            ScaffoldError::CreateDir { .. } => "create_dir",
            ScaffoldError::Write { .. } => "write",
            ScaffoldError::TemplateEncoding { .. } => "template_encoding",
            ScaffoldError::InvalidConfig { .. } => "invalid_config",
        }
    }
}
