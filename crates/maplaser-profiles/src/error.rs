//! Error types for the profile crate.
//!
//! This module provides structured error types for laser profile loading
//! and validation. Every validation error names the offending field so a
//! broken profile can be fixed without guesswork.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while locating, parsing, or validating a profile.
#[derive(Error, Debug)]
pub enum ProfileError {
    /// The profiles directory does not exist.
    #[error("Laser profiles directory '{}' not found", .0.display())]
    DirectoryNotFound(PathBuf),

    /// No profile file with this name exists.
    #[error("Laser profile '{name}' not found. {hint}")]
    NotFound { name: String, hint: String },

    /// The file extension is not one of the supported formats.
    #[error("Unsupported profile format: {0}")]
    UnsupportedFormat(String),

    /// A required section or key is missing from the profile.
    #[error("Profile missing required '{0}'")]
    MissingField(String),

    /// An operation is missing one of its settings.
    #[error("Operation '{operation}' missing required '{key}' key")]
    MissingSetting {
        operation: String,
        key: &'static str,
    },

    /// A fill operation has no raster density.
    #[error("Operation '{0}' missing required 'density' key for fill operation")]
    MissingDensity(String),

    /// A setting is outside its valid range.
    #[error("Operation '{operation}' {key} must be integer {min}-{max}, got: {value}")]
    OutOfRange {
        operation: String,
        key: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },

    /// A text field is present but empty.
    #[error("Profile field '{0}' must not be empty")]
    EmptyField(String),

    /// I/O error during file operations.
    #[error("I/O error: {0}")]
    IoError(#[from] io::Error),

    /// JSON deserialization error.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// TOML deserialization error.
    #[error("TOML error: {0}")]
    TomlError(#[from] toml::de::Error),
}

impl ProfileError {
    /// Whether the profile was found but its contents are invalid
    pub fn is_validation_error(&self) -> bool {
        matches!(
            self,
            ProfileError::MissingField(_)
                | ProfileError::MissingSetting { .. }
                | ProfileError::MissingDensity(_)
                | ProfileError::OutOfRange { .. }
                | ProfileError::EmptyField(_)
        )
    }
}

/// Result type alias for profile operations.
pub type ProfileResult<T> = Result<T, ProfileError>;
