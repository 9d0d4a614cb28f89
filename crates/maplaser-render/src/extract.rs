//! Feature extraction
//!
//! Walks the map data once and produces the [`FeatureRecord`]s that both
//! exporters consume. Output order is water, parks, roads, text; within a
//! category the source iteration order is kept.
//!
//! Bad data is never fatal here. Edges without usable endpoints and rows
//! without geometry are skipped, logged at debug level, and counted in
//! [`ExtractionStats`].

use crate::classify::CategoryClassifier;
use crate::flatten::GeometryFlattener;
use crate::map_data::{GraphEdge, MapData, PolygonCollection, RoadGraph};
use crate::path::{join_path_data, PathDescriptor};
use crate::transform::{CanvasPoint, CoordinateTransform};
use maplaser_core::{CanvasSpec, FeatureCategory};
use maplaser_settings::LaserThemeOptions;
use std::collections::BTreeMap;

/// Half the width of the placeholder line drawn under a text label
pub const LABEL_PLACEHOLDER_HALF_WIDTH: f64 = 100.0;

/// Text placeholder; the geometry is a horizontal line at the baseline
#[derive(Debug, Clone, PartialEq)]
pub struct TextLabel {
    pub content: String,
    /// Baseline center
    pub anchor: CanvasPoint,
    pub font_size: f64,
    pub bold: bool,
    pub opacity: Option<f64>,
}

/// One drawable feature ready for export
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureRecord {
    pub category: FeatureCategory,
    pub color: String,
    pub paths: Vec<PathDescriptor>,
    pub label: Option<TextLabel>,
    /// Raw road type for roads, label kind for text
    pub source_label: Option<String>,
}

impl FeatureRecord {
    /// Path data shared verbatim by the SVG and XCS documents
    pub fn path_data(&self) -> String {
        join_path_data(&self.paths)
    }

    pub fn is_text(&self) -> bool {
        self.label.is_some()
    }
}

/// Counts of emitted features and skipped source items
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractionStats {
    pub emitted: BTreeMap<FeatureCategory, usize>,
    pub edges_missing_coordinates: usize,
    pub edges_empty_geometry: usize,
    pub polygons_null_geometry: usize,
    pub polygons_empty_geometry: usize,
}

impl ExtractionStats {
    pub fn emitted(&self, category: FeatureCategory) -> usize {
        self.emitted.get(&category).copied().unwrap_or(0)
    }

    pub fn total_emitted(&self) -> usize {
        self.emitted.values().sum()
    }

    pub fn total_skipped(&self) -> usize {
        self.edges_missing_coordinates
            + self.edges_empty_geometry
            + self.polygons_null_geometry
            + self.polygons_empty_geometry
    }

    fn record(&mut self, category: FeatureCategory) {
        *self.emitted.entry(category).or_insert(0) += 1;
    }
}

/// Result of one extraction pass
#[derive(Debug, Clone)]
pub struct Extraction {
    pub features: Vec<FeatureRecord>,
    pub stats: ExtractionStats,
}

impl Extraction {
    pub fn by_category(&self, category: FeatureCategory) -> impl Iterator<Item = &FeatureRecord> {
        self.features.iter().filter(move |f| f.category == category)
    }
}

/// Turns map data into feature records through one shared transform
pub struct FeatureExtractor<'a> {
    transform: &'a CoordinateTransform,
    canvas: &'a CanvasSpec,
    theme: &'a LaserThemeOptions,
    classifier: CategoryClassifier<'a>,
}

impl<'a> FeatureExtractor<'a> {
    pub fn new(
        transform: &'a CoordinateTransform,
        canvas: &'a CanvasSpec,
        theme: &'a LaserThemeOptions,
    ) -> Self {
        Self {
            transform,
            canvas,
            theme,
            classifier: CategoryClassifier::new(theme),
        }
    }

    pub fn extract(&self, map: &MapData) -> Extraction {
        let mut features = Vec::new();
        let mut stats = ExtractionStats::default();

        if self.theme.includes(FeatureCategory::Water) {
            if let Some(water) = &map.water {
                self.extract_polygons(water, FeatureCategory::Water, &mut features, &mut stats);
            }
        }
        if self.theme.includes(FeatureCategory::Parks) {
            if let Some(parks) = &map.parks {
                self.extract_polygons(parks, FeatureCategory::Parks, &mut features, &mut stats);
            }
        }
        if self.theme.include_roads {
            self.extract_roads(&map.roads, &mut features, &mut stats);
        }
        if self.theme.includes(FeatureCategory::Text) {
            self.extract_text(map, &mut features, &mut stats);
        }

        tracing::info!(
            "Extracted {} features (water={}, parks={}, roads={}, text={}), skipped {}",
            stats.total_emitted(),
            stats.emitted(FeatureCategory::Water),
            stats.emitted(FeatureCategory::Parks),
            FeatureCategory::ROADS
                .iter()
                .map(|c| stats.emitted(*c))
                .sum::<usize>(),
            stats.emitted(FeatureCategory::Text),
            stats.total_skipped()
        );

        Extraction { features, stats }
    }

    fn extract_roads(
        &self,
        graph: &RoadGraph,
        features: &mut Vec<FeatureRecord>,
        stats: &mut ExtractionStats,
    ) {
        let flattener = GeometryFlattener::new(self.transform);

        for edge in &graph.edges {
            let Some(paths) = self.edge_paths(graph, edge, &flattener, stats) else {
                continue;
            };

            let road_type = edge.road_type();
            let category = self.classifier.classify_road(road_type);
            stats.record(category);
            features.push(FeatureRecord {
                category,
                color: self.classifier.resolve_color(category).to_string(),
                paths,
                label: None,
                source_label: Some(road_type.to_string()),
            });
        }
    }

    fn edge_paths(
        &self,
        graph: &RoadGraph,
        edge: &GraphEdge,
        flattener: &GeometryFlattener<'_>,
        stats: &mut ExtractionStats,
    ) -> Option<Vec<PathDescriptor>> {
        if let Some(geometry) = &edge.geometry {
            let paths = flattener.flatten(geometry);
            if paths.is_empty() {
                tracing::debug!(
                    "Skipping edge {}->{}: {} geometry has no coordinates",
                    edge.u,
                    edge.v,
                    geometry.kind()
                );
                stats.edges_empty_geometry += 1;
                return None;
            }
            return Some(paths);
        }

        match (graph.node_coords(edge.u), graph.node_coords(edge.v)) {
            (Some((x1, y1)), Some((x2, y2))) => Some(vec![PathDescriptor::open(vec![
                self.transform.apply(x1, y1),
                self.transform.apply(x2, y2),
            ])]),
            _ => {
                tracing::debug!(
                    "Skipping edge {}->{}: endpoint missing coordinates",
                    edge.u,
                    edge.v
                );
                stats.edges_missing_coordinates += 1;
                None
            }
        }
    }

    fn extract_polygons(
        &self,
        collection: &PolygonCollection,
        category: FeatureCategory,
        features: &mut Vec<FeatureRecord>,
        stats: &mut ExtractionStats,
    ) {
        let flattener = GeometryFlattener::new(self.transform);
        let color = self.classifier.resolve_color(category);

        for (index, row) in collection.rows.iter().enumerate() {
            let Some(geometry) = &row.geometry else {
                tracing::debug!("Skipping {} row {}: null geometry", category, index);
                stats.polygons_null_geometry += 1;
                continue;
            };

            let paths = flattener.flatten(geometry);
            if paths.is_empty() {
                tracing::debug!(
                    "Skipping {} row {}: {} geometry produced no paths",
                    category,
                    index,
                    geometry.kind()
                );
                stats.polygons_empty_geometry += 1;
                continue;
            }

            stats.record(category);
            features.push(FeatureRecord {
                category,
                color: color.to_string(),
                paths,
                label: None,
                source_label: None,
            });
        }
    }

    fn extract_text(
        &self,
        map: &MapData,
        features: &mut Vec<FeatureRecord>,
        stats: &mut ExtractionStats,
    ) {
        let ch = self.canvas.height;
        let (lat, lon) = map.point;

        let labels = [
            ("city", map.city.to_uppercase(), 0.05, 0.88, true, None),
            ("country", map.country.to_uppercase(), 0.025, 0.92, false, None),
            (
                "coordinates",
                format_coordinates(lat, lon),
                0.015,
                0.95,
                false,
                Some(0.7),
            ),
        ];

        let color = self.classifier.resolve_color(FeatureCategory::Text);
        for (kind, content, size_ratio, baseline_ratio, bold, opacity) in labels {
            let anchor = CanvasPoint::new(self.canvas.center_x(), ch * baseline_ratio);
            stats.record(FeatureCategory::Text);
            features.push(FeatureRecord {
                category: FeatureCategory::Text,
                color: color.to_string(),
                paths: vec![placeholder_line(anchor)],
                label: Some(TextLabel {
                    content,
                    anchor,
                    font_size: ch * size_ratio,
                    bold,
                    opacity,
                }),
                source_label: Some(kind.to_string()),
            });
        }
    }
}

/// Extract every included feature of `map`
pub fn extract_features(
    map: &MapData,
    transform: &CoordinateTransform,
    canvas: &CanvasSpec,
    theme: &LaserThemeOptions,
) -> Extraction {
    FeatureExtractor::new(transform, canvas, theme).extract(map)
}

/// `"48.8566° N / 2.3522° E"`
pub fn format_coordinates(lat: f64, lon: f64) -> String {
    let ns = if lat >= 0.0 { 'N' } else { 'S' };
    let ew = if lon >= 0.0 { 'E' } else { 'W' };
    format!("{:.4}° {} / {:.4}° {}", lat.abs(), ns, lon.abs(), ew)
}

fn placeholder_line(anchor: CanvasPoint) -> PathDescriptor {
    PathDescriptor::open(vec![
        CanvasPoint::new(anchor.x - LABEL_PLACEHOLDER_HALF_WIDTH, anchor.y),
        CanvasPoint::new(anchor.x + LABEL_PLACEHOLDER_HALF_WIDTH, anchor.y),
    ])
}
