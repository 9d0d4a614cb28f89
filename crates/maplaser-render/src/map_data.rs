//! Input map data: a road graph plus optional water and park polygons
//!
//! This is the snapshot handed over by the data-acquisition step. It is only
//! ever read; extraction never mutates it.

use crate::geometry::Geometry;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Graph node identifier
pub type NodeId = i64;

/// Road type used when an edge carries no label
pub const DEFAULT_ROAD_TYPE: &str = "unclassified";

/// Graph node; either coordinate may be missing in partial data
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphNode {
    #[serde(default)]
    pub x: Option<f64>,
    #[serde(default)]
    pub y: Option<f64>,
}

impl GraphNode {
    pub fn at(x: f64, y: f64) -> Self {
        Self {
            x: Some(x),
            y: Some(y),
        }
    }

    /// Both coordinates, when present
    pub fn coords(&self) -> Option<(f64, f64)> {
        Some((self.x?, self.y?))
    }
}

/// Raw road type label: a single string or a list of candidates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum HighwayTag {
    One(String),
    Many(Vec<String>),
}

/// Directed road segment between two nodes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphEdge {
    pub u: NodeId,
    pub v: NodeId,
    #[serde(default)]
    pub geometry: Option<Geometry>,
    #[serde(default)]
    pub highway: Option<HighwayTag>,
}

impl GraphEdge {
    /// Edge without explicit geometry
    pub fn between(u: NodeId, v: NodeId, highway: &str) -> Self {
        Self {
            u,
            v,
            geometry: None,
            highway: Some(HighwayTag::One(highway.to_string())),
        }
    }

    /// Road type label; the first entry of a list wins
    pub fn road_type(&self) -> &str {
        match &self.highway {
            Some(HighwayTag::One(label)) => label,
            Some(HighwayTag::Many(labels)) => labels
                .first()
                .map(String::as_str)
                .unwrap_or(DEFAULT_ROAD_TYPE),
            None => DEFAULT_ROAD_TYPE,
        }
    }
}

/// Road network graph
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RoadGraph {
    #[serde(default)]
    pub nodes: BTreeMap<NodeId, GraphNode>,
    #[serde(default)]
    pub edges: Vec<GraphEdge>,
}

impl RoadGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_node(&mut self, id: NodeId, node: GraphNode) {
        self.nodes.insert(id, node);
    }

    pub fn add_edge(&mut self, edge: GraphEdge) {
        self.edges.push(edge);
    }

    /// Coordinates of a node, if it exists and has both
    pub fn node_coords(&self, id: NodeId) -> Option<(f64, f64)> {
        self.nodes.get(&id).and_then(GraphNode::coords)
    }
}

/// One row of a polygon collection
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PolygonRow {
    #[serde(default)]
    pub geometry: Option<Geometry>,
}

/// Water or park features
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PolygonCollection {
    #[serde(default)]
    pub rows: Vec<PolygonRow>,
}

impl PolygonCollection {
    pub fn from_geometries(geometries: impl IntoIterator<Item = Geometry>) -> Self {
        Self {
            rows: geometries
                .into_iter()
                .map(|g| PolygonRow { geometry: Some(g) })
                .collect(),
        }
    }
}

/// Everything needed to render one poster
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MapData {
    pub city: String,
    pub country: String,
    /// `(latitude, longitude)` of the map center
    pub point: (f64, f64),
    /// Map radius in metres
    #[serde(default)]
    pub distance: u32,
    pub roads: RoadGraph,
    #[serde(default)]
    pub water: Option<PolygonCollection>,
    #[serde(default)]
    pub parks: Option<PolygonCollection>,
}
