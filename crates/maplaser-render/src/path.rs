//! Flat canvas-space paths and their path-data text
//!
//! [`PathDescriptor::to_path_data`] is the only place coordinates are turned
//! into text. Both exporters go through it, so the same feature always
//! produces byte-identical path data in the SVG and the laser-job document.

use crate::transform::CanvasPoint;

/// Ordered canvas points forming an open polyline or a closed ring
#[derive(Debug, Clone, PartialEq)]
pub struct PathDescriptor {
    pub points: Vec<CanvasPoint>,
    pub closed: bool,
}

impl PathDescriptor {
    pub fn open(points: Vec<CanvasPoint>) -> Self {
        Self {
            points,
            closed: false,
        }
    }

    pub fn closed(points: Vec<CanvasPoint>) -> Self {
        Self {
            points,
            closed: true,
        }
    }

    /// Number of line-to segments after the initial move
    pub fn segment_count(&self) -> usize {
        self.points.len().saturating_sub(1)
    }

    /// `M x,y L x,y ...` with an explicit ` Z` for closed rings
    pub fn to_path_data(&self) -> String {
        let mut points = self.points.iter();
        let Some(first) = points.next() else {
            return String::new();
        };

        let mut d = format!("M {},{}", f(first.x), f(first.y));
        for pt in points {
            d.push_str(&format!(" L {},{}", f(pt.x), f(pt.y)));
        }
        if self.closed {
            d.push_str(" Z");
        }
        d
    }
}

/// Concatenate several descriptors into one path-data string
pub fn join_path_data(paths: &[PathDescriptor]) -> String {
    paths
        .iter()
        .map(PathDescriptor::to_path_data)
        .filter(|d| !d.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Format a coordinate with 2 decimal places, treating -0 as 0
fn f(n: f64) -> String {
    let s = format!("{:.2}", n);
    if s == "-0.00" {
        "0.00".to_string()
    } else {
        s
    }
}
