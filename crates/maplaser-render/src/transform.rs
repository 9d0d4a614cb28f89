//! Geographic to canvas coordinate transformation
//!
//! Maps a geographic bounding box onto the canvas with one uniform scale,
//! centered, with a 5% border. The vertical axis is flipped: canvas origin
//! is top-left while geographic north increases upward.
//!
//! One transform is built per export and shared by every feature in both
//! output documents.

use crate::bounds::BoundingBox;
use maplaser_core::CanvasSpec;

/// Fraction of the canvas the content may occupy
pub const MARGIN_FACTOR: f64 = 0.95;

/// A point in canvas space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasPoint {
    pub x: f64,
    pub y: f64,
}

impl CanvasPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Fixed geographic-to-canvas mapping
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoordinateTransform {
    bounds: BoundingBox,
    canvas_height: f64,
    scale: f64,
    offset_x: f64,
    offset_y: f64,
}

impl CoordinateTransform {
    pub fn new(bounds: BoundingBox, canvas: &CanvasSpec) -> Self {
        let width = bounds.width();
        let height = bounds.height();
        // A zero extent would divide by zero; treat it as one unit instead.
        let width_divisor = if width > 0.0 { width } else { 1.0 };
        let height_divisor = if height > 0.0 { height } else { 1.0 };

        let scale =
            (canvas.width / width_divisor).min(canvas.height / height_divisor) * MARGIN_FACTOR;
        let offset_x = (canvas.width - width * scale) / 2.0;
        let offset_y = (canvas.height - height * scale) / 2.0;

        tracing::debug!(
            "Canvas transform: scale={:.4} offset=({:.2}, {:.2}) degenerate={}",
            scale,
            offset_x,
            offset_y,
            bounds.is_degenerate()
        );

        Self {
            bounds,
            canvas_height: canvas.height,
            scale,
            offset_x,
            offset_y,
        }
    }

    /// Transform a geographic coordinate to canvas space
    pub fn apply(&self, x: f64, y: f64) -> CanvasPoint {
        let cx = (x - self.bounds.min_x) * self.scale + self.offset_x;
        let cy = self.canvas_height - ((y - self.bounds.min_y) * self.scale + self.offset_y);
        CanvasPoint::new(cx, cy)
    }

    pub fn bounds(&self) -> &BoundingBox {
        &self.bounds
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn offset(&self) -> (f64, f64) {
        (self.offset_x, self.offset_y)
    }
}
