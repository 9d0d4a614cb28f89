//! Error types for the render crate.
//!
//! Degenerate geometry is never an error: it is skipped and counted in
//! [`crate::ExtractionStats`]. The only fatal geometry condition is a road
//! graph with no usable coordinates, since no transform can be derived.

use thiserror::Error;

/// Errors that can occur while rendering map data.
#[derive(Error, Debug)]
pub enum RenderError {
    /// No road graph node carries both coordinates.
    #[error("Graph has no nodes with coordinates")]
    NoCoordinates,

    /// The laser-job document could not be serialized.
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

/// Result type alias for render operations.
pub type RenderResult<T> = Result<T, RenderError>;
