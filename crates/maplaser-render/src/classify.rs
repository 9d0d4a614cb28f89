//! Road classification and color resolution

use maplaser_core::FeatureCategory;
use maplaser_settings::{LaserThemeOptions, FALLBACK_ROAD_COLOR};

/// Map a raw road type label to its road grade
///
/// Link roads share the grade of the road they connect to and trunks are
/// drawn as primaries. Anything unrecognized is residential.
pub fn classify_road(label: &str) -> FeatureCategory {
    match label {
        "motorway" | "motorway_link" => FeatureCategory::Motorway,
        "trunk" | "trunk_link" | "primary" | "primary_link" => FeatureCategory::Primary,
        "secondary" | "secondary_link" => FeatureCategory::Secondary,
        "tertiary" | "tertiary_link" => FeatureCategory::Tertiary,
        _ => FeatureCategory::Residential,
    }
}

/// Resolves categories to theme colors
#[derive(Debug, Clone, Copy)]
pub struct CategoryClassifier<'a> {
    theme: &'a LaserThemeOptions,
}

impl<'a> CategoryClassifier<'a> {
    pub fn new(theme: &'a LaserThemeOptions) -> Self {
        Self { theme }
    }

    pub fn classify_road(&self, label: &str) -> FeatureCategory {
        classify_road(label)
    }

    /// Color that identifies `category` in the output documents
    pub fn resolve_color(&self, category: FeatureCategory) -> &'a str {
        resolve_color(category, self.theme)
    }
}

/// Theme color for a category; roads without a configured color fall back
/// to [`FALLBACK_ROAD_COLOR`]
pub fn resolve_color(category: FeatureCategory, theme: &LaserThemeOptions) -> &str {
    match category {
        FeatureCategory::Water => theme.water_color.as_str(),
        FeatureCategory::Parks => theme.parks_color.as_str(),
        FeatureCategory::Text => theme.text_color.as_str(),
        road => theme.road_color(road).unwrap_or(FALLBACK_ROAD_COLOR),
    }
}
