//! XCS laser-job document
//!
//! A JSON project for xTool Creative Space style software. Every feature
//! record becomes one element carrying its path data and the laser
//! operation from the profile; elements are grouped into one layer per
//! category that actually has elements.

use crate::classify::resolve_color;
use crate::error::RenderResult;
use crate::extract::FeatureRecord;
use crate::map_data::MapData;
use chrono::{DateTime, Utc};
use maplaser_core::{CanvasSpec, FeatureCategory, IdGenerator, ProcessingMode};
use maplaser_profiles::{LaserProfile, Material};
use maplaser_settings::LaserThemeOptions;
use serde::{Deserialize, Serialize};

pub const XCS_VERSION: &str = "1.0";
pub const XCS_GENERATOR: &str = "maplaser";
pub const XCS_UNIT: &str = "mm";
pub const STROKE_WIDTH: f64 = 1.0;

/// Complete laser-job project
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct XcsProject {
    pub version: String,
    pub created: DateTime<Utc>,
    pub generator: String,
    pub machine: String,
    pub material: Material,
    pub canvas: XcsCanvas,
    pub layers: Vec<XcsLayer>,
    pub elements: Vec<XcsElement>,
    pub metadata: XcsMetadata,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct XcsCanvas {
    pub width: f64,
    pub height: f64,
    pub unit: String,
    pub view_box: XcsViewBox,
}

/// Canvas-unit extent the element paths are expressed in
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct XcsViewBox {
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct XcsLayer {
    pub id: String,
    pub name: String,
    pub color: String,
    pub visible: bool,
    pub locked: bool,
    /// Element ids, in element order
    pub elements: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct XcsElement {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub z_index: usize,
    pub visible: bool,
    pub locked: bool,
    pub data: XcsElementData,
    pub processing: XcsProcessing,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct XcsElementData {
    pub path: String,
    pub stroke: String,
    pub stroke_width: f64,
    pub fill: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct XcsProcessing {
    pub mode: ProcessingMode,
    pub power: u32,
    pub speed: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub density: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct XcsMetadata {
    pub city: String,
    pub country: String,
    pub coordinates: XcsCoordinates,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct XcsCoordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl XcsProject {
    pub fn layer(&self, name: &str) -> Option<&XcsLayer> {
        self.layers.iter().find(|l| l.name == name)
    }

    pub fn element(&self, id: &str) -> Option<&XcsElement> {
        self.elements.iter().find(|e| e.id == id)
    }

    pub fn to_json_pretty(&self) -> RenderResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json_str(content: &str) -> RenderResult<Self> {
        Ok(serde_json::from_str(content)?)
    }
}

/// Layer title for a category
pub fn layer_name(category: FeatureCategory) -> String {
    if category.is_road() {
        format!("Roads - {}", category.title())
    } else {
        category.title().to_string()
    }
}

/// Build the laser-job project for the extracted features
pub fn build_xcs(
    features: &[FeatureRecord],
    canvas: &CanvasSpec,
    profile: &LaserProfile,
    theme: &LaserThemeOptions,
    map: &MapData,
    ids: &mut dyn IdGenerator,
) -> XcsProject {
    let mut layers = Vec::new();
    let mut elements = Vec::new();

    for category in FeatureCategory::ALL {
        let members: Vec<&FeatureRecord> =
            features.iter().filter(|f| f.category == category).collect();
        if members.is_empty() {
            continue;
        }

        let mut element_ids = Vec::with_capacity(members.len());
        for feature in members {
            let element = build_element(feature, profile, elements.len(), ids);
            element_ids.push(element.id.clone());
            elements.push(element);
        }

        layers.push(XcsLayer {
            id: ids.next_id(),
            name: layer_name(category),
            color: resolve_color(category, theme).to_string(),
            visible: true,
            locked: false,
            elements: element_ids,
        });
    }

    tracing::debug!(
        "Built XCS project with {} layers and {} elements",
        layers.len(),
        elements.len()
    );

    XcsProject {
        version: XCS_VERSION.to_string(),
        created: Utc::now(),
        generator: XCS_GENERATOR.to_string(),
        machine: profile.machine.clone(),
        material: profile.material.clone(),
        canvas: XcsCanvas {
            width: canvas.width_mm(),
            height: canvas.height_mm(),
            unit: XCS_UNIT.to_string(),
            view_box: XcsViewBox {
                width: canvas.width,
                height: canvas.height,
            },
        },
        layers,
        elements,
        metadata: XcsMetadata {
            city: map.city.clone(),
            country: map.country.clone(),
            coordinates: XcsCoordinates {
                latitude: map.point.0,
                longitude: map.point.1,
            },
        },
    }
}

fn build_element(
    feature: &FeatureRecord,
    profile: &LaserProfile,
    z_index: usize,
    ids: &mut dyn IdGenerator,
) -> XcsElement {
    let mode = feature.category.processing_mode();
    let operation = profile.setting(feature.category);

    let fill = if mode.is_outline() {
        "none".to_string()
    } else {
        feature.color.clone()
    };

    XcsElement {
        id: ids.next_id(),
        kind: if feature.is_text() { "text" } else { "path" }.to_string(),
        z_index,
        visible: true,
        locked: false,
        data: XcsElementData {
            path: feature.path_data(),
            stroke: feature.color.clone(),
            stroke_width: STROKE_WIDTH,
            fill,
            text: feature.label.as_ref().map(|l| l.content.clone()),
        },
        processing: XcsProcessing {
            mode,
            power: operation.power,
            speed: operation.speed,
            density: if feature.category.is_fill() {
                operation.density
            } else {
                None
            },
        },
    }
}
