//! Profile file loading
//!
//! Profiles are TOML or JSON documents shaped like:
//!
//! ```toml
//! machine = "xTool S1"
//!
//! [material]
//! name = "Basswood"
//! thickness = 3
//!
//! [operations.score.roads_primary]
//! power = 35
//! speed = 140
//!
//! [operations.engrave_fill.water]
//! power = 30
//! speed = 300
//! density = 60
//! ```
//!
//! Every key is read as optional first so that a missing section produces a
//! message naming it instead of a generic deserializer error.

use crate::error::{ProfileError, ProfileResult};
use crate::model::{
    check_range, LaserOperation, LaserProfile, Material, DENSITY_RANGE, POWER_RANGE, SPEED_RANGE,
};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Extensions recognized as profile files, in lookup order
pub const PROFILE_EXTENSIONS: [&str; 2] = ["toml", "json"];

#[derive(Debug, Default, Deserialize)]
struct RawProfile {
    machine: Option<String>,
    material: Option<RawMaterial>,
    operations: Option<RawOperations>,
}

#[derive(Debug, Default, Deserialize)]
struct RawMaterial {
    name: Option<String>,
    thickness: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
struct RawOperations {
    score: Option<RawScore>,
    engrave_fill: Option<RawFill>,
    engrave_solid: Option<RawSolid>,
}

#[derive(Debug, Default, Deserialize)]
struct RawScore {
    roads_motorway: Option<RawOperation>,
    roads_primary: Option<RawOperation>,
    roads_secondary: Option<RawOperation>,
    roads_tertiary: Option<RawOperation>,
    roads_residential: Option<RawOperation>,
}

#[derive(Debug, Default, Deserialize)]
struct RawFill {
    water: Option<RawOperation>,
    parks: Option<RawOperation>,
}

#[derive(Debug, Default, Deserialize)]
struct RawSolid {
    text: Option<RawOperation>,
}

#[derive(Debug, Default, Deserialize)]
struct RawOperation {
    power: Option<i64>,
    speed: Option<i64>,
    density: Option<i64>,
}

fn required<T>(value: Option<T>, field: &str) -> ProfileResult<T> {
    value.ok_or_else(|| ProfileError::MissingField(field.to_string()))
}

impl RawOperation {
    fn validate(self, operation: &str, require_density: bool) -> ProfileResult<LaserOperation> {
        let power = self.power.ok_or_else(|| ProfileError::MissingSetting {
            operation: operation.to_string(),
            key: "power",
        })?;
        check_range(operation, "power", power, POWER_RANGE)?;

        let speed = self.speed.ok_or_else(|| ProfileError::MissingSetting {
            operation: operation.to_string(),
            key: "speed",
        })?;
        check_range(operation, "speed", speed, SPEED_RANGE)?;

        let density = match self.density {
            Some(density) => {
                check_range(operation, "density", density, DENSITY_RANGE)?;
                Some(density as u32)
            }
            None if require_density => {
                return Err(ProfileError::MissingDensity(operation.to_string()))
            }
            None => None,
        };

        Ok(LaserOperation {
            power: power as u32,
            speed: speed as u32,
            density,
        })
    }
}

impl RawProfile {
    fn into_profile(self) -> ProfileResult<LaserProfile> {
        let machine = required(self.machine, "machine")?;
        let material = required(self.material, "material")?;
        let operations = required(self.operations, "operations")?;

        let material = Material {
            name: required(material.name, "material.name")?,
            thickness: required(material.thickness, "material.thickness")?,
        };

        let score = required(operations.score, "operations.score")?;
        let score_op = |op: Option<RawOperation>, name: &str| -> ProfileResult<LaserOperation> {
            required(op, &format!("operations.score.{}", name))?
                .validate(&format!("score.{}", name), false)
        };
        let score_roads_motorway = score_op(score.roads_motorway, "roads_motorway")?;
        let score_roads_primary = score_op(score.roads_primary, "roads_primary")?;
        let score_roads_secondary = score_op(score.roads_secondary, "roads_secondary")?;
        let score_roads_tertiary = score_op(score.roads_tertiary, "roads_tertiary")?;
        let score_roads_residential = score_op(score.roads_residential, "roads_residential")?;

        let fill = required(operations.engrave_fill, "operations.engrave_fill")?;
        let engrave_fill_water = required(fill.water, "operations.engrave_fill.water")?
            .validate("engrave_fill.water", true)?;
        let engrave_fill_parks = required(fill.parks, "operations.engrave_fill.parks")?
            .validate("engrave_fill.parks", true)?;

        let solid = required(operations.engrave_solid, "operations.engrave_solid")?;
        let engrave_solid_text = required(solid.text, "operations.engrave_solid.text")?
            .validate("engrave_solid.text", false)?;

        let profile = LaserProfile {
            machine,
            material,
            score_roads_motorway,
            score_roads_primary,
            score_roads_secondary,
            score_roads_tertiary,
            score_roads_residential,
            engrave_fill_water,
            engrave_fill_parks,
            engrave_solid_text,
        };
        profile.validate()?;
        Ok(profile)
    }
}

impl LaserProfile {
    /// Parse and validate a TOML profile
    pub fn from_toml_str(content: &str) -> ProfileResult<Self> {
        let raw: RawProfile = toml::from_str(content)?;
        raw.into_profile()
    }

    /// Parse and validate a JSON profile
    pub fn from_json_str(content: &str) -> ProfileResult<Self> {
        let raw: RawProfile = serde_json::from_str(content)?;
        raw.into_profile()
    }

    /// Load a profile file, choosing the parser by extension
    pub fn load_from_file(path: &Path) -> ProfileResult<Self> {
        let content = std::fs::read_to_string(path)?;

        let profile = match path.extension().and_then(|e| e.to_str()) {
            Some("toml") => Self::from_toml_str(&content)?,
            Some("json") => Self::from_json_str(&content)?,
            other => {
                return Err(ProfileError::UnsupportedFormat(
                    other.unwrap_or("<none>").to_string(),
                ))
            }
        };

        tracing::info!(
            "Loaded laser profile: {} / {}",
            profile.machine,
            profile.material.name
        );
        Ok(profile)
    }
}

/// Names of the profiles in `dir`, sorted, without extensions
pub fn available_profiles(dir: &Path) -> Vec<String> {
    let Ok(entries) = std::fs::read_dir(dir) else {
        return Vec::new();
    };

    let mut names: Vec<String> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| {
            path.extension()
                .and_then(|e| e.to_str())
                .is_some_and(|e| PROFILE_EXTENSIONS.contains(&e))
        })
        .filter_map(|path| path.file_stem().and_then(|s| s.to_str()).map(String::from))
        .collect();
    names.sort();
    names.dedup();
    names
}

/// Resolve `name` inside `dir` to a profile file path
pub fn find_profile(dir: &Path, name: &str) -> ProfileResult<PathBuf> {
    if !dir.exists() {
        return Err(ProfileError::DirectoryNotFound(dir.to_path_buf()));
    }

    for ext in PROFILE_EXTENSIONS {
        let candidate = dir.join(format!("{}.{}", name, ext));
        if candidate.exists() {
            return Ok(candidate);
        }
    }

    let available = available_profiles(dir);
    let hint = if available.is_empty() {
        format!("No profiles available in '{}'", dir.display())
    } else {
        format!("Available profiles: {}", available.join(", "))
    };
    Err(ProfileError::NotFound {
        name: name.to_string(),
        hint,
    })
}

/// Find and load the profile called `name` from `dir`
pub fn load_profile(dir: &Path, name: &str) -> ProfileResult<LaserProfile> {
    let path = find_profile(dir, name)?;
    LaserProfile::load_from_file(&path)
}
