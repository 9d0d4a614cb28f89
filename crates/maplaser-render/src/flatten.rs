//! Recursive geometry flattening
//!
//! Turns any [`Geometry`] into zero or more canvas-space
//! [`PathDescriptor`]s. Collections are walked member by member and their
//! sub-paths are kept separate. Unsupported kinds and empty coordinate
//! sequences produce nothing instead of failing, since partial map data is
//! normal.

use crate::geometry::{Geometry, Position};
use crate::path::PathDescriptor;
use crate::transform::CoordinateTransform;

/// Flattens geometries through one shared transform
#[derive(Debug, Clone, Copy)]
pub struct GeometryFlattener<'a> {
    transform: &'a CoordinateTransform,
}

impl<'a> GeometryFlattener<'a> {
    pub fn new(transform: &'a CoordinateTransform) -> Self {
        Self { transform }
    }

    /// All flat paths for a geometry, in member order
    pub fn flatten(&self, geometry: &Geometry) -> Vec<PathDescriptor> {
        let mut out = Vec::new();
        self.flatten_into(geometry, &mut out);
        out
    }

    fn flatten_into(&self, geometry: &Geometry, out: &mut Vec<PathDescriptor>) {
        match geometry {
            Geometry::LineString { coordinates } => out.extend(self.line(coordinates)),
            Geometry::Polygon { coordinates } => out.extend(self.polygon(coordinates)),
            Geometry::MultiLineString { coordinates } => {
                out.extend(coordinates.iter().filter_map(|line| self.line(line)));
            }
            Geometry::MultiPolygon { coordinates } => {
                out.extend(coordinates.iter().filter_map(|rings| self.polygon(rings)));
            }
            Geometry::GeometryCollection { geometries } => {
                for member in geometries {
                    self.flatten_into(member, out);
                }
            }
            Geometry::Unsupported => {
                tracing::trace!("Skipping unsupported geometry");
            }
        }
    }

    fn line(&self, coords: &[Position]) -> Option<PathDescriptor> {
        if coords.is_empty() {
            return None;
        }
        Some(PathDescriptor::open(self.project(coords)))
    }

    /// Exterior ring only; holes are not rendered
    fn polygon(&self, rings: &[Vec<Position>]) -> Option<PathDescriptor> {
        let exterior = rings.first().filter(|ring| !ring.is_empty())?;
        Some(PathDescriptor::closed(self.project(exterior)))
    }

    fn project(&self, coords: &[Position]) -> Vec<crate::transform::CanvasPoint> {
        coords
            .iter()
            .map(|&[x, y]| self.transform.apply(x, y))
            .collect()
    }
}
