use crate::error::{ProfileError, ProfileResult};
use maplaser_core::FeatureCategory;
use serde::{Deserialize, Serialize};

/// Valid laser power in percent
pub const POWER_RANGE: (i64, i64) = (1, 100);
/// Valid head speed in mm/s
pub const SPEED_RANGE: (i64, i64) = (1, 400);
/// Valid raster density in lines per mm
pub const DENSITY_RANGE: (i64, i64) = (1, 100);

/// Power, speed, and optional density for one laser operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaserOperation {
    pub power: u32,
    pub speed: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub density: Option<u32>,
}

impl LaserOperation {
    /// Outline operation without density
    pub fn new(power: u32, speed: u32) -> Self {
        Self {
            power,
            speed,
            density: None,
        }
    }

    /// Fill operation with a raster density
    pub fn with_density(power: u32, speed: u32, density: u32) -> Self {
        Self {
            power,
            speed,
            density: Some(density),
        }
    }

    /// Check ranges; `operation` names the setting in error messages
    pub fn validate(&self, operation: &str, require_density: bool) -> ProfileResult<()> {
        check_range(operation, "power", self.power as i64, POWER_RANGE)?;
        check_range(operation, "speed", self.speed as i64, SPEED_RANGE)?;
        match self.density {
            Some(density) => check_range(operation, "density", density as i64, DENSITY_RANGE),
            None if require_density => Err(ProfileError::MissingDensity(operation.to_string())),
            None => Ok(()),
        }
    }
}

pub(crate) fn check_range(
    operation: &str,
    key: &'static str,
    value: i64,
    (min, max): (i64, i64),
) -> ProfileResult<()> {
    if value < min || value > max {
        return Err(ProfileError::OutOfRange {
            operation: operation.to_string(),
            key,
            value,
            min,
            max,
        });
    }
    Ok(())
}

/// Stock material loaded into the machine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Material {
    pub name: String,
    /// Thickness in millimetres
    pub thickness: f64,
}

/// Complete profile: machine, material, and one operation per category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaserProfile {
    pub machine: String,
    pub material: Material,

    // Score operations (roads)
    pub score_roads_motorway: LaserOperation,
    pub score_roads_primary: LaserOperation,
    pub score_roads_secondary: LaserOperation,
    pub score_roads_tertiary: LaserOperation,
    pub score_roads_residential: LaserOperation,

    // Fill operations
    pub engrave_fill_water: LaserOperation,
    pub engrave_fill_parks: LaserOperation,

    // Solid operations
    pub engrave_solid_text: LaserOperation,
}

impl LaserProfile {
    /// Operation settings for a category
    pub fn setting(&self, category: FeatureCategory) -> &LaserOperation {
        match category {
            FeatureCategory::Motorway => &self.score_roads_motorway,
            FeatureCategory::Primary => &self.score_roads_primary,
            FeatureCategory::Secondary => &self.score_roads_secondary,
            FeatureCategory::Tertiary => &self.score_roads_tertiary,
            FeatureCategory::Residential => &self.score_roads_residential,
            FeatureCategory::Water => &self.engrave_fill_water,
            FeatureCategory::Parks => &self.engrave_fill_parks,
            FeatureCategory::Text => &self.engrave_solid_text,
        }
    }

    /// Dotted profile key of the operation for a category
    pub fn operation_key(category: FeatureCategory) -> &'static str {
        match category {
            FeatureCategory::Motorway => "score.roads_motorway",
            FeatureCategory::Primary => "score.roads_primary",
            FeatureCategory::Secondary => "score.roads_secondary",
            FeatureCategory::Tertiary => "score.roads_tertiary",
            FeatureCategory::Residential => "score.roads_residential",
            FeatureCategory::Water => "engrave_fill.water",
            FeatureCategory::Parks => "engrave_fill.parks",
            FeatureCategory::Text => "engrave_solid.text",
        }
    }

    /// Validate every operation; density is required exactly for fills
    pub fn validate(&self) -> ProfileResult<()> {
        if self.machine.trim().is_empty() {
            return Err(ProfileError::EmptyField("machine".to_string()));
        }
        if self.material.name.trim().is_empty() {
            return Err(ProfileError::EmptyField("material.name".to_string()));
        }
        for category in FeatureCategory::ALL {
            self.setting(category)
                .validate(Self::operation_key(category), category.is_fill())?;
        }
        Ok(())
    }
}
