//! Error handling for maplaser core types
//!
//! Configuration values that are parsed before any geometry work begins
//! (physical sizes, canvas dimensions) report failures through [`CoreError`].
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Core error type
///
/// Represents failures while parsing or validating core configuration values.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    /// Size string was not of the form `WxH`
    #[error("Invalid size format: {input}. Expected 'WxH' like '8x12'")]
    InvalidSizeFormat {
        /// The rejected input.
        input: String,
    },

    /// Size components could not be parsed as numbers
    #[error("Invalid size values: {input}. Must be numbers")]
    InvalidSizeValues {
        /// The rejected input.
        input: String,
    },

    /// A size component was zero, negative, or not finite
    #[error("Invalid size {input}: {axis} must be greater than zero")]
    NonPositiveSize {
        /// The rejected input.
        input: String,
        /// Which component failed ("width" or "height").
        axis: &'static str,
    },
}

impl CoreError {
    /// Check if this error came from parsing a physical size
    pub fn is_size_error(&self) -> bool {
        matches!(
            self,
            CoreError::InvalidSizeFormat { .. }
                | CoreError::InvalidSizeValues { .. }
                | CoreError::NonPositiveSize { .. }
        )
    }
}

/// Result type using CoreError
pub type Result<T> = std::result::Result<T, CoreError>;
