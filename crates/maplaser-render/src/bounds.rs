use crate::error::{RenderError, RenderResult};
use crate::map_data::RoadGraph;

/// Geographic bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl BoundingBox {
    /// Box spanning two corners, in any order
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self {
            min_x: x1.min(x2),
            max_x: x1.max(x2),
            min_y: y1.min(y2),
            max_y: y1.max(y2),
        }
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    /// Zero width or zero height
    pub fn is_degenerate(&self) -> bool {
        self.width() == 0.0 || self.height() == 0.0
    }

    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.min_x && x <= self.max_x && y >= self.min_y && y <= self.max_y
    }

    /// Smallest box around every point; `None` when there are no points
    pub fn from_points(points: impl IntoIterator<Item = (f64, f64)>) -> Option<Self> {
        let mut iter = points.into_iter();
        let (x0, y0) = iter.next()?;
        let mut bbox = Self::new(x0, y0, x0, y0);
        for (x, y) in iter {
            bbox.min_x = bbox.min_x.min(x);
            bbox.max_x = bbox.max_x.max(x);
            bbox.min_y = bbox.min_y.min(y);
            bbox.max_y = bbox.max_y.max(y);
        }
        Some(bbox)
    }

    /// Extent of every road-graph node that has both coordinates
    pub fn from_graph(graph: &RoadGraph) -> RenderResult<Self> {
        Self::from_points(graph.nodes.values().filter_map(|n| n.coords()))
            .ok_or(RenderError::NoCoordinates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map_data::GraphNode;

    #[test]
    fn test_bounds_from_graph_skip_partial_nodes() {
        let mut graph = RoadGraph::new();
        graph.add_node(1, GraphNode::at(-1.0, 5.0));
        graph.add_node(2, GraphNode::at(3.0, 2.0));
        graph.add_node(
            3,
            GraphNode {
                x: Some(100.0),
                y: None,
            },
        );

        let bbox = BoundingBox::from_graph(&graph).unwrap();
        assert_eq!(bbox, BoundingBox::new(-1.0, 2.0, 3.0, 5.0));
        assert_eq!(bbox.width(), 4.0);
        assert_eq!(bbox.height(), 3.0);
        assert!(!bbox.is_degenerate());
    }

    #[test]
    fn test_graph_without_coordinates_fails() {
        let mut graph = RoadGraph::new();
        assert!(matches!(
            BoundingBox::from_graph(&graph),
            Err(RenderError::NoCoordinates)
        ));

        graph.add_node(1, GraphNode { x: None, y: Some(1.0) });
        assert!(matches!(
            BoundingBox::from_graph(&graph),
            Err(RenderError::NoCoordinates)
        ));
    }

    #[test]
    fn test_single_node_is_degenerate() {
        let mut graph = RoadGraph::new();
        graph.add_node(7, GraphNode::at(2.0, 2.0));
        let bbox = BoundingBox::from_graph(&graph).unwrap();
        assert!(bbox.is_degenerate());
        assert!(bbox.contains(2.0, 2.0));
    }
}
