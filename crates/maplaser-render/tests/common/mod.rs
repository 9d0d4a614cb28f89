#![allow(dead_code)]

use maplaser_core::{CanvasSpec, PhysicalSize};
use maplaser_profiles::{LaserOperation, LaserProfile, Material};
use maplaser_render::{GraphEdge, GraphNode, MapData, RoadGraph};
use quick_xml::events::Event;
use quick_xml::Reader;
use std::collections::BTreeMap;

pub fn canvas(w: f64, h: f64) -> CanvasSpec {
    CanvasSpec::from_physical(PhysicalSize::new(w, h).unwrap())
}

pub fn profile() -> LaserProfile {
    LaserProfile {
        machine: "xTool S1 20W".to_string(),
        material: Material {
            name: "Basswood plywood".to_string(),
            thickness: 3.0,
        },
        score_roads_motorway: LaserOperation::new(45, 120),
        score_roads_primary: LaserOperation::new(40, 140),
        score_roads_secondary: LaserOperation::new(35, 160),
        score_roads_tertiary: LaserOperation::new(30, 180),
        score_roads_residential: LaserOperation::new(25, 200),
        engrave_fill_water: LaserOperation::with_density(30, 300, 60),
        engrave_fill_parks: LaserOperation::with_density(20, 350, 40),
        engrave_solid_text: LaserOperation::new(60, 100),
    }
}

/// Two nodes on the unit square joined by one primary road
pub fn single_primary_map() -> MapData {
    let mut roads = RoadGraph::new();
    roads.add_node(1, GraphNode::at(0.0, 0.0));
    roads.add_node(2, GraphNode::at(1.0, 1.0));
    roads.add_edge(GraphEdge::between(1, 2, "primary"));

    MapData {
        city: "Testville".to_string(),
        country: "Nowhere".to_string(),
        point: (0.5, 0.5),
        distance: 1000,
        roads,
        water: None,
        parks: None,
    }
}

/// Path data and text content found in an SVG, keyed by top-level layer id
#[derive(Debug, Default)]
pub struct SvgLayers {
    pub paths: BTreeMap<String, Vec<String>>,
    pub texts: Vec<String>,
    pub width: String,
    pub height: String,
    pub view_box: String,
}

pub fn parse_svg(svg: &str) -> SvgLayers {
    let mut reader = Reader::from_str(svg);
    reader.config_mut().trim_text(true);

    let mut layers = SvgLayers::default();
    let mut group_stack: Vec<String> = Vec::new();
    let mut in_text = false;

    loop {
        match reader.read_event() {
            Ok(Event::Start(ref e)) => match e.name().as_ref() {
                b"svg" => {
                    for attr in e.attributes().flatten() {
                        let key = std::str::from_utf8(attr.key.as_ref()).unwrap_or("");
                        let value = std::str::from_utf8(&attr.value).unwrap_or("").to_string();
                        match key {
                            "width" => layers.width = value,
                            "height" => layers.height = value,
                            "viewBox" => layers.view_box = value,
                            _ => {}
                        }
                    }
                }
                b"g" => {
                    let id = e
                        .attributes()
                        .flatten()
                        .find(|a| a.key.as_ref() == b"id")
                        .map(|a| String::from_utf8_lossy(&a.value).to_string());
                    let layer = id
                        .or_else(|| group_stack.last().cloned())
                        .unwrap_or_default();
                    group_stack.push(layer);
                }
                b"text" => in_text = true,
                _ => {}
            },
            Ok(Event::Empty(ref e)) => {
                if e.name().as_ref() == b"path" {
                    let d = e
                        .attributes()
                        .flatten()
                        .find(|a| a.key.as_ref() == b"d")
                        .map(|a| String::from_utf8_lossy(&a.value).to_string())
                        .unwrap_or_default();
                    let layer = group_stack.last().cloned().unwrap_or_default();
                    layers.paths.entry(layer).or_default().push(d);
                }
            }
            Ok(Event::Text(ref e)) => {
                if in_text {
                    layers.texts.push(String::from_utf8_lossy(e).to_string());
                }
            }
            Ok(Event::End(ref e)) => match e.name().as_ref() {
                b"g" => {
                    group_stack.pop();
                }
                b"text" => in_text = false,
                _ => {}
            },
            Ok(Event::Eof) => break,
            Err(e) => panic!("invalid SVG at {}: {:?}", reader.buffer_position(), e),
            _ => {}
        }
    }

    layers
}
