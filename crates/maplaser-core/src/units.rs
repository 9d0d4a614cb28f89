//! Physical sizes and canvas dimensions
//!
//! Output pages are specified in inches (`"8x12"`) and drawn on a canvas
//! scaled at a fixed number of drawing units per inch. Both output formats
//! derive their dimensions from the same [`CanvasSpec`].

use crate::error::{CoreError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Millimetres per inch
pub const MM_PER_INCH: f64 = 25.4;

/// Drawing units per inch on the output canvas
pub const UNITS_PER_INCH: f64 = 100.0;

/// Page sizes the laser bed presets are tuned for
pub const SUPPORTED_SIZES: [&str; 3] = ["8x12", "12x18", "18x24"];

/// Physical page size in inches
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PhysicalSize {
    pub width: f64,
    pub height: f64,
}

impl PhysicalSize {
    /// Create a size, rejecting zero, negative, or non-finite components
    pub fn new(width: f64, height: f64) -> Result<Self> {
        let input = format!("{}x{}", width, height);
        Self::checked(width, height, &input)
    }

    fn checked(width: f64, height: f64, input: &str) -> Result<Self> {
        if !width.is_finite() || width <= 0.0 {
            return Err(CoreError::NonPositiveSize {
                input: input.to_string(),
                axis: "width",
            });
        }
        if !height.is_finite() || height <= 0.0 {
            return Err(CoreError::NonPositiveSize {
                input: input.to_string(),
                axis: "height",
            });
        }
        Ok(Self { width, height })
    }

    /// Whether this is one of [`SUPPORTED_SIZES`]
    pub fn is_standard(&self) -> bool {
        let rendered = self.to_string();
        SUPPORTED_SIZES.iter().any(|s| *s == rendered)
    }

    pub fn width_mm(&self) -> f64 {
        self.width * MM_PER_INCH
    }

    pub fn height_mm(&self) -> f64 {
        self.height * MM_PER_INCH
    }
}

impl FromStr for PhysicalSize {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self> {
        let lowered = s.trim().to_lowercase();
        let parts: Vec<&str> = lowered.split('x').collect();
        if parts.len() != 2 {
            return Err(CoreError::InvalidSizeFormat {
                input: s.to_string(),
            });
        }

        let width = parts[0].trim().parse::<f64>();
        let height = parts[1].trim().parse::<f64>();
        match (width, height) {
            (Ok(w), Ok(h)) => {
                let size = Self::checked(w, h, s)?;
                if !size.is_standard() {
                    tracing::warn!(
                        "Non-standard size {} (standard: {})",
                        size,
                        SUPPORTED_SIZES.join(", ")
                    );
                }
                Ok(size)
            }
            _ => Err(CoreError::InvalidSizeValues {
                input: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for PhysicalSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Canvas dimensions in drawing units
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CanvasSpec {
    pub width: f64,
    pub height: f64,
    pub units_per_inch: f64,
    pub physical: PhysicalSize,
}

impl CanvasSpec {
    /// Canvas at the default [`UNITS_PER_INCH`] scale
    pub fn from_physical(size: PhysicalSize) -> Self {
        Self::with_scale(size, UNITS_PER_INCH)
    }

    pub fn with_scale(size: PhysicalSize, units_per_inch: f64) -> Self {
        Self {
            width: size.width * units_per_inch,
            height: size.height * units_per_inch,
            units_per_inch,
            physical: size,
        }
    }

    /// Horizontal center of the canvas
    pub fn center_x(&self) -> f64 {
        self.width / 2.0
    }

    pub fn width_mm(&self) -> f64 {
        self.physical.width_mm()
    }

    pub fn height_mm(&self) -> f64 {
        self.physical.height_mm()
    }
}
