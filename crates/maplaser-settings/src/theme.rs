//! Laser theme options
//!
//! Themes are JSON (or TOML) documents describing the poster look. Only the
//! optional `laser` section matters here: it switches categories on or off
//! and sets the colors that identify each category in the laser software.
//!
//! Missing keys fall back to [`LaserThemeOptions::default`]. A partial
//! `road_colors` table is merged over the default road colors rather than
//! replacing them.

use crate::error::{SettingsError, SettingsResult};
use maplaser_core::FeatureCategory;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Color used for a road category the theme does not mention
pub const FALLBACK_ROAD_COLOR: &str = "#BB0000";

/// Inclusion flags and colors for laser output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaserThemeOptions {
    pub include_roads: bool,
    pub include_water: bool,
    pub include_parks: bool,
    pub include_text: bool,
    pub road_colors: BTreeMap<FeatureCategory, String>,
    pub water_color: String,
    pub parks_color: String,
    pub text_color: String,
}

impl Default for LaserThemeOptions {
    fn default() -> Self {
        let road_colors = [
            (FeatureCategory::Motorway, "#FF0000"),
            (FeatureCategory::Primary, "#EE0000"),
            (FeatureCategory::Secondary, "#DD0000"),
            (FeatureCategory::Tertiary, "#CC0000"),
            (FeatureCategory::Residential, "#BB0000"),
        ]
        .into_iter()
        .map(|(c, hex)| (c, hex.to_string()))
        .collect();

        Self {
            include_roads: true,
            include_water: true,
            include_parks: true,
            include_text: true,
            road_colors,
            water_color: "#FFFF00".to_string(),
            parks_color: "#FFFFAA".to_string(),
            text_color: "#000000".to_string(),
        }
    }
}

/// The `laser` section as written in a theme file
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct LaserSection {
    include_roads: Option<bool>,
    include_water: Option<bool>,
    include_parks: Option<bool>,
    include_text: Option<bool>,
    road_colors: Option<BTreeMap<String, String>>,
    water_color: Option<String>,
    parks_color: Option<String>,
    text_color: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct ThemeDocument {
    name: Option<String>,
    laser: Option<LaserSection>,
}

impl LaserThemeOptions {
    /// Whether features of `category` should be extracted at all
    pub fn includes(&self, category: FeatureCategory) -> bool {
        match category {
            FeatureCategory::Water => self.include_water,
            FeatureCategory::Parks => self.include_parks,
            FeatureCategory::Text => self.include_text,
            _ => self.include_roads,
        }
    }

    /// Configured road color, if the theme has one for this category
    pub fn road_color(&self, category: FeatureCategory) -> Option<&str> {
        self.road_colors.get(&category).map(String::as_str)
    }

    /// Options from an already-parsed theme document
    pub fn from_theme_value(theme: &serde_json::Value) -> SettingsResult<Self> {
        let document = ThemeDocument::deserialize(theme)?;
        Self::from_document(document)
    }

    /// Options from a JSON theme string
    pub fn from_json_str(content: &str) -> SettingsResult<Self> {
        let document: ThemeDocument = serde_json::from_str(content)?;
        Self::from_document(document)
    }

    /// Options from a TOML theme string
    pub fn from_toml_str(content: &str) -> SettingsResult<Self> {
        let document: ThemeDocument = toml::from_str(content)?;
        Self::from_document(document)
    }

    /// Load a theme file, choosing the parser by extension
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let content = std::fs::read_to_string(path)?;

        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Self::from_json_str(&content),
            Some("toml") => Self::from_toml_str(&content),
            other => Err(SettingsError::UnsupportedFormat(
                other.unwrap_or("<none>").to_string(),
            )),
        }
    }

    fn from_document(document: ThemeDocument) -> SettingsResult<Self> {
        let Some(section) = document.laser else {
            tracing::debug!(
                "Theme {} has no laser section, using defaults",
                document.name.as_deref().unwrap_or("<unnamed>")
            );
            return Ok(Self::default());
        };

        let mut options = Self::default();
        if let Some(v) = section.include_roads {
            options.include_roads = v;
        }
        if let Some(v) = section.include_water {
            options.include_water = v;
        }
        if let Some(v) = section.include_parks {
            options.include_parks = v;
        }
        if let Some(v) = section.include_text {
            options.include_text = v;
        }

        if let Some(colors) = section.road_colors {
            for (key, color) in colors {
                match key.parse::<FeatureCategory>() {
                    Ok(category) if category.is_road() => {
                        options.road_colors.insert(category, color);
                    }
                    _ => tracing::warn!("Ignoring road color for unknown road type '{}'", key),
                }
            }
        }

        if let Some(color) = section.water_color {
            options.water_color = color;
        }
        if let Some(color) = section.parks_color {
            options.parks_color = color;
        }
        if let Some(color) = section.text_color {
            options.text_color = color;
        }

        options.validate()?;
        Ok(options)
    }

    /// Check every color is a `#RGB` or `#RRGGBB` hex string
    pub fn validate(&self) -> SettingsResult<()> {
        for (category, color) in &self.road_colors {
            check_hex_color(&format!("road_colors.{}", category), color)?;
        }
        check_hex_color("water_color", &self.water_color)?;
        check_hex_color("parks_color", &self.parks_color)?;
        check_hex_color("text_color", &self.text_color)?;
        Ok(())
    }
}

fn check_hex_color(key: &str, color: &str) -> SettingsResult<()> {
    let digits = color.strip_prefix('#').unwrap_or("");
    let valid = matches!(digits.len(), 3 | 6) && digits.chars().all(|c| c.is_ascii_hexdigit());
    if !valid {
        return Err(SettingsError::InvalidSetting {
            key: key.to_string(),
            reason: format!("expected a hex color like #RRGGBB, got '{}'", color),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_defaults_without_laser_section() {
        let options = LaserThemeOptions::from_theme_value(&json!({"name": "Noir"})).unwrap();
        assert_eq!(options, LaserThemeOptions::default());
        assert_eq!(options.road_color(FeatureCategory::Primary), Some("#EE0000"));
    }

    #[test]
    fn test_borrowed_theme_value_is_left_intact() {
        let theme = json!({"name": "Noir", "laser": {"water_color": "#00FFFF"}});
        let before = theme.clone();
        let options = LaserThemeOptions::from_theme_value(&theme).unwrap();
        assert_eq!(options.water_color, "#00FFFF");
        assert_eq!(theme, before);

        let err = LaserThemeOptions::from_theme_value(&json!({"laser": {"include_water": "yes"}}))
            .unwrap_err();
        assert!(matches!(err, SettingsError::JsonError(_)));
    }

    #[test]
    fn test_partial_road_colors_merge() {
        let theme = json!({
            "laser": {
                "road_colors": {"motorway": "#123456"},
                "include_text": false
            }
        });
        let options = LaserThemeOptions::from_theme_value(&theme).unwrap();
        assert_eq!(options.road_color(FeatureCategory::Motorway), Some("#123456"));
        assert_eq!(options.road_color(FeatureCategory::Tertiary), Some("#CC0000"));
        assert!(!options.include_text);
        assert!(options.include_water);
    }

    #[test]
    fn test_includes_by_category() {
        let options = LaserThemeOptions {
            include_roads: false,
            include_parks: false,
            ..Default::default()
        };
        assert!(!options.includes(FeatureCategory::Residential));
        assert!(!options.includes(FeatureCategory::Parks));
        assert!(options.includes(FeatureCategory::Water));
        assert!(options.includes(FeatureCategory::Text));
    }

    #[test]
    fn test_unknown_road_type_ignored() {
        let theme = json!({"laser": {"road_colors": {"cycleway": "#00FF00"}}});
        let options = LaserThemeOptions::from_theme_value(&theme).unwrap();
        assert_eq!(options.road_colors.len(), 5);
    }

    #[test]
    fn test_invalid_color_rejected() {
        let theme = json!({"laser": {"water_color": "blue"}});
        let err = LaserThemeOptions::from_theme_value(&theme).unwrap_err();
        assert!(err.to_string().starts_with("Invalid setting 'water_color'"));
    }

    #[test]
    fn test_toml_theme() {
        let options = LaserThemeOptions::from_toml_str(
            "name = \"Blueprint\"\n[laser]\ninclude_water = false\nparks_color = \"#0F0\"\n",
        )
        .unwrap();
        assert!(!options.include_water);
        assert_eq!(options.parks_color, "#0F0");
    }
}
