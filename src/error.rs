//! Error types for civet operations.
//!
//! This module defines [`CivetError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! Check execution deliberately does NOT use these types: a missing file or a
//! failing command is a recorded outcome, not an error. `CivetError` covers
//! the genuinely fatal paths (unreadable config, invalid schema, IO on the
//! config file itself).

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for civet operations.
#[derive(Debug, Error)]
pub enum CivetError {
    /// Configuration file not found at an explicitly requested location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Invalid configuration structure or values.
    #[error("Invalid configuration: {message}")]
    ConfigValidationError { message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for civet operations.
pub type Result<T> = std::result::Result<T, CivetError>;
