//! Error types for Capstan operations.
//!
//! This module defines [`CapstanError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `CapstanError` for domain-specific errors that need distinct handling
//! - Use `anyhow::Error` (via `CapstanError::Other`) for unexpected errors
//! - Subcommand errors bubble to `main`, which prints one line and exits 1

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for Capstan operations.
#[derive(Debug, Error)]
pub enum CapstanError {
    /// An external program could not be started (not found, permission denied).
    #[error("Failed to start '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// A capture-mode command exited with a non-zero code.
    #[error("'{program}' failed with exit code {code:?}")]
    CommandFailed { program: String, code: Option<i32> },

    /// `new` refuses to overwrite an existing directory.
    #[error("Directory already exists: {path}")]
    ProjectExists { path: PathBuf },

    /// A required git remote is not configured.
    #[error("Git remote '{remote}' is not configured")]
    MissingRemote { remote: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CapstanError {
    /// Exit code carried by a [`CapstanError::CommandFailed`], if any.
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            Self::CommandFailed { code, .. } => *code,
            _ => None,
        }
    }
}

/// Result type alias for Capstan operations.
pub type Result<T> = std::result::Result<T, CapstanError>;
