//! # maplaser Core
//!
//! Core types and utilities shared by every maplaser crate:
//! feature categories and processing modes, physical page sizes and the
//! canvas they map to, identifier generation, and the core error type.

pub mod category;
pub mod error;
pub mod ids;
pub mod units;

pub use category::{FeatureCategory, ProcessingMode};
pub use error::{CoreError, Result};
pub use ids::{IdGenerator, SequentialIdGenerator, UuidGenerator};
pub use units::{CanvasSpec, PhysicalSize, MM_PER_INCH, SUPPORTED_SIZES, UNITS_PER_INCH};
