//! Dual-format export
//!
//! [`DualFormatExporter`] runs the whole pipeline for one map: it derives the
//! bounding box and transform from the road graph, extracts features once,
//! and renders both documents from that single feature set. Nothing is
//! written to disk here.

pub mod svg;
pub mod xcs;

pub use svg::{render_svg, xml_escape, SVG_LAYERS};
pub use xcs::{
    build_xcs, layer_name, XcsCanvas, XcsCoordinates, XcsElement, XcsElementData, XcsLayer,
    XcsMetadata, XcsProcessing, XcsProject, XcsViewBox,
};

use crate::bounds::BoundingBox;
use crate::error::RenderResult;
use crate::extract::{extract_features, ExtractionStats, FeatureRecord};
use crate::map_data::MapData;
use crate::transform::CoordinateTransform;
use maplaser_core::{CanvasSpec, IdGenerator};
use maplaser_profiles::LaserProfile;
use maplaser_settings::LaserThemeOptions;

/// Both documents rendered from one extraction pass
#[derive(Debug, Clone)]
pub struct DualExport {
    pub svg: String,
    pub xcs: XcsProject,
    pub features: Vec<FeatureRecord>,
    pub stats: ExtractionStats,
}

impl DualExport {
    /// The laser-job document as pretty-printed JSON
    pub fn xcs_json(&self) -> RenderResult<String> {
        self.xcs.to_json_pretty()
    }
}

/// Renders SVG and XCS documents that share one canvas and feature set
#[derive(Debug, Clone, Copy)]
pub struct DualFormatExporter<'a> {
    canvas: &'a CanvasSpec,
    profile: &'a LaserProfile,
    theme: &'a LaserThemeOptions,
}

impl<'a> DualFormatExporter<'a> {
    pub fn new(
        canvas: &'a CanvasSpec,
        profile: &'a LaserProfile,
        theme: &'a LaserThemeOptions,
    ) -> Self {
        Self {
            canvas,
            profile,
            theme,
        }
    }

    pub fn export(&self, map: &MapData, ids: &mut dyn IdGenerator) -> RenderResult<DualExport> {
        let bounds = BoundingBox::from_graph(&map.roads)?;
        let transform = CoordinateTransform::new(bounds, self.canvas);

        let extraction = extract_features(map, &transform, self.canvas, self.theme);
        let svg = render_svg(&extraction.features, self.canvas);
        let xcs = build_xcs(
            &extraction.features,
            self.canvas,
            self.profile,
            self.theme,
            map,
            ids,
        );

        tracing::info!(
            "Exported {} at {}: {} SVG bytes, {} XCS elements",
            map.city,
            self.canvas.physical,
            svg.len(),
            xcs.elements.len()
        );

        Ok(DualExport {
            svg,
            xcs,
            features: extraction.features,
            stats: extraction.stats,
        })
    }
}
