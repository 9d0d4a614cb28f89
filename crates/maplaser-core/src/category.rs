//! Feature categories and laser processing modes
//!
//! Every drawable feature belongs to exactly one [`FeatureCategory`]. The
//! category drives color lookup, layer assignment, and which laser operation
//! settings apply. The [`ProcessingMode`] for a category is fixed.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Canonical feature category: five road grades plus water, parks, and text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeatureCategory {
    Motorway,
    Primary,
    Secondary,
    Tertiary,
    Residential,
    Water,
    Parks,
    Text,
}

impl FeatureCategory {
    /// All categories in layer order (bottom to top for fills, then roads by grade)
    pub const ALL: [FeatureCategory; 8] = [
        Self::Water,
        Self::Parks,
        Self::Motorway,
        Self::Primary,
        Self::Secondary,
        Self::Tertiary,
        Self::Residential,
        Self::Text,
    ];

    /// Road grades from most to least significant
    pub const ROADS: [FeatureCategory; 5] = [
        Self::Motorway,
        Self::Primary,
        Self::Secondary,
        Self::Tertiary,
        Self::Residential,
    ];

    pub fn is_road(self) -> bool {
        matches!(
            self,
            Self::Motorway | Self::Primary | Self::Secondary | Self::Tertiary | Self::Residential
        )
    }

    /// Fill categories require a raster density setting
    pub fn is_fill(self) -> bool {
        matches!(self, Self::Water | Self::Parks)
    }

    pub fn processing_mode(self) -> ProcessingMode {
        match self {
            Self::Water | Self::Parks => ProcessingMode::FillVectorEngraving,
            Self::Text => ProcessingMode::BitmapEngraving,
            _ => ProcessingMode::VectorEngraving,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Motorway => "motorway",
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Tertiary => "tertiary",
            Self::Residential => "residential",
            Self::Water => "water",
            Self::Parks => "parks",
            Self::Text => "text",
        }
    }

    /// Human-readable name used for layer titles
    pub fn title(self) -> &'static str {
        match self {
            Self::Motorway => "Motorway",
            Self::Primary => "Primary",
            Self::Secondary => "Secondary",
            Self::Tertiary => "Tertiary",
            Self::Residential => "Residential",
            Self::Water => "Water",
            Self::Parks => "Parks",
            Self::Text => "Text",
        }
    }
}

impl fmt::Display for FeatureCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FeatureCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.as_str() == s.to_lowercase())
            .ok_or_else(|| format!("Unknown feature category: {}", s))
    }
}

/// Laser behavior class bound to a category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProcessingMode {
    /// Score along the outline, stroke only
    VectorEngraving,
    /// Raster fill of a closed area
    FillVectorEngraving,
    /// Solid engrave
    BitmapEngraving,
}

impl ProcessingMode {
    /// Outline modes leave the interior unfilled
    pub fn is_outline(self) -> bool {
        matches!(self, Self::VectorEngraving)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::VectorEngraving => "VECTOR_ENGRAVING",
            Self::FillVectorEngraving => "FILL_VECTOR_ENGRAVING",
            Self::BitmapEngraving => "BITMAP_ENGRAVING",
        }
    }
}

impl fmt::Display for ProcessingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
