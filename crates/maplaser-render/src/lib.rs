//! # maplaser-render
//!
//! Geometry-to-canvas rendering for laser posters.
//!
//! The pipeline takes a [`MapData`] snapshot through four stages:
//!
//! 1. [`CoordinateTransform`] maps geographic coordinates onto the canvas.
//! 2. [`GeometryFlattener`] turns nested geometries into flat paths.
//! 3. [`FeatureExtractor`] classifies and colors every road, water body,
//!    park, and text label into [`FeatureRecord`]s.
//! 4. [`DualFormatExporter`] renders the records as an SVG drawing and an
//!    XCS laser-job project.

pub mod bounds;
pub mod classify;
pub mod error;
pub mod export;
pub mod extract;
pub mod flatten;
pub mod geometry;
pub mod map_data;
pub mod path;
pub mod transform;

pub use bounds::BoundingBox;
pub use classify::{classify_road, resolve_color, CategoryClassifier};
pub use error::{RenderError, RenderResult};
pub use export::{
    build_xcs, render_svg, DualExport, DualFormatExporter, XcsElement, XcsLayer, XcsProject,
};
pub use extract::{
    extract_features, format_coordinates, Extraction, ExtractionStats, FeatureExtractor,
    FeatureRecord, TextLabel,
};
pub use flatten::GeometryFlattener;
pub use geometry::{Geometry, Position};
pub use map_data::{
    GraphEdge, GraphNode, HighwayTag, MapData, NodeId, PolygonCollection, PolygonRow, RoadGraph,
};
pub use path::{join_path_data, PathDescriptor};
pub use transform::{CanvasPoint, CoordinateTransform, MARGIN_FACTOR};
