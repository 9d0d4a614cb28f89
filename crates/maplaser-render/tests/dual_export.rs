mod common;

use common::{canvas, parse_svg, profile, single_primary_map};
use maplaser_core::{FeatureCategory, ProcessingMode, SequentialIdGenerator};
use maplaser_render::{
    DualFormatExporter, Geometry, GraphEdge, GraphNode, PolygonCollection, PolygonRow,
    RenderError, XcsProject,
};
use maplaser_settings::LaserThemeOptions;

fn roads_only() -> LaserThemeOptions {
    LaserThemeOptions {
        include_text: false,
        ..LaserThemeOptions::default()
    }
}

#[test]
fn test_single_primary_edge_end_to_end() {
    let map = single_primary_map();
    let canvas = canvas(8.0, 12.0);
    let profile = profile();
    let theme = roads_only();
    let mut ids = SequentialIdGenerator::new("el");

    let export = DualFormatExporter::new(&canvas, &profile, &theme)
        .export(&map, &mut ids)
        .unwrap();

    let svg = parse_svg(&export.svg);
    assert_eq!(svg.width, "8in");
    assert_eq!(svg.height, "12in");
    assert_eq!(svg.view_box, "0 0 800 1200");
    assert_eq!(
        svg.paths.get("roads").cloned().unwrap_or_default(),
        vec!["M 20.00,980.00 L 780.00,220.00".to_string()]
    );
    assert!(svg.paths.get("water").is_none());

    let xcs = &export.xcs;
    assert_eq!(xcs.layers.len(), 1);
    assert_eq!(xcs.layers[0].name, "Roads - Primary");
    assert_eq!(xcs.layers[0].color, "#EE0000");
    assert_eq!(xcs.layers[0].elements, vec!["el-1".to_string()]);

    assert_eq!(xcs.elements.len(), 1);
    let element = &xcs.elements[0];
    assert_eq!(element.kind, "path");
    assert_eq!(element.z_index, 0);
    assert_eq!(element.data.path, "M 20.00,980.00 L 780.00,220.00");
    assert_eq!(element.data.fill, "none");
    assert_eq!(element.processing.mode, ProcessingMode::VectorEngraving);
    assert_eq!(element.processing.power, 40);
    assert_eq!(element.processing.speed, 140);
    assert_eq!(element.processing.density, None);

    assert!((xcs.canvas.width - 203.2).abs() < 1e-9);
    assert!((xcs.canvas.height - 304.8).abs() < 1e-9);
    assert_eq!(xcs.canvas.unit, "mm");
    assert_eq!(xcs.canvas.view_box.width, 800.0);
    assert_eq!(xcs.machine, "xTool S1 20W");
    assert_eq!(xcs.metadata.city, "Testville");
}

#[test]
fn test_documents_agree_per_category() {
    let mut map = single_primary_map();
    map.roads.add_node(3, GraphNode::at(0.5, 0.0));
    map.roads.add_edge(GraphEdge::between(1, 3, "motorway"));
    map.roads.add_edge(GraphEdge::between(3, 2, "living_street"));
    map.roads.add_edge(GraphEdge::between(2, 1, "trunk_link"));
    map.water = Some(PolygonCollection::from_geometries([
        Geometry::polygon([[0.1, 0.1], [0.3, 0.1], [0.3, 0.3]]),
        Geometry::MultiPolygon {
            coordinates: vec![
                vec![vec![[0.6, 0.6], [0.7, 0.6], [0.7, 0.7]]],
                vec![vec![[0.8, 0.8], [0.9, 0.8], [0.9, 0.9]]],
            ],
        },
    ]));
    map.parks = Some(PolygonCollection::from_geometries([Geometry::polygon([
        [0.2, 0.5],
        [0.4, 0.5],
        [0.4, 0.7],
    ])]));

    let canvas = canvas(12.0, 18.0);
    let profile = profile();
    let theme = LaserThemeOptions::default();
    let export = DualFormatExporter::new(&canvas, &profile, &theme)
        .export(&map, &mut SequentialIdGenerator::default())
        .unwrap();

    let svg = parse_svg(&export.svg);
    let xcs = &export.xcs;

    let xcs_paths = |categories: &[FeatureCategory]| -> Vec<String> {
        let mut paths: Vec<String> = xcs
            .layers
            .iter()
            .filter(|l| {
                categories
                    .iter()
                    .any(|c| maplaser_render::export::layer_name(*c) == l.name)
            })
            .flat_map(|l| l.elements.iter())
            .filter_map(|id| xcs.element(id))
            .map(|e| e.data.path.clone())
            .collect();
        paths.sort();
        paths
    };
    let svg_paths = |layer: &str| -> Vec<String> {
        let mut paths = svg.paths.get(layer).cloned().unwrap_or_default();
        paths.sort();
        paths
    };

    assert_eq!(svg_paths("water"), xcs_paths(&[FeatureCategory::Water]));
    assert_eq!(svg_paths("parks"), xcs_paths(&[FeatureCategory::Parks]));
    assert_eq!(svg_paths("roads"), xcs_paths(&FeatureCategory::ROADS[..]));
    assert_eq!(svg_paths("water").len(), 2);
    assert_eq!(svg_paths("roads").len(), 4);

    let xcs_texts: Vec<String> = xcs
        .elements
        .iter()
        .filter(|e| e.kind == "text")
        .filter_map(|e| e.data.text.clone())
        .collect();
    assert_eq!(svg.texts, xcs_texts);
    assert_eq!(svg.texts.len(), 3);

    // Multipolygon members stay separate sub-paths inside one element
    let multi = xcs
        .elements
        .iter()
        .find(|e| e.data.path.matches('M').count() == 2)
        .unwrap();
    assert_eq!(multi.data.path.matches(" Z").count(), 2);
    assert_eq!(multi.processing.mode, ProcessingMode::FillVectorEngraving);
    assert_eq!(multi.processing.density, Some(60));
    assert_eq!(multi.data.fill, "#FFFF00");
}

#[test]
fn test_layer_order_and_z_index() {
    let mut map = single_primary_map();
    map.roads.add_edge(GraphEdge::between(2, 1, "motorway"));
    map.parks = Some(PolygonCollection::from_geometries([Geometry::polygon([
        [0.2, 0.5],
        [0.4, 0.5],
        [0.4, 0.7],
    ])]));

    let canvas = canvas(8.0, 12.0);
    let profile = profile();
    let theme = LaserThemeOptions::default();
    let export = DualFormatExporter::new(&canvas, &profile, &theme)
        .export(&map, &mut SequentialIdGenerator::default())
        .unwrap();

    let names: Vec<&str> = export.xcs.layers.iter().map(|l| l.name.as_str()).collect();
    assert_eq!(
        names,
        vec!["Parks", "Roads - Motorway", "Roads - Primary", "Text"]
    );

    for (index, element) in export.xcs.elements.iter().enumerate() {
        assert_eq!(element.z_index, index);
    }

    let text_layer = export.xcs.layer("Text").unwrap();
    assert_eq!(text_layer.elements.len(), 3);
    let city = export.xcs.element(&text_layer.elements[0]).unwrap();
    assert_eq!(city.kind, "text");
    assert_eq!(city.data.text.as_deref(), Some("TESTVILLE"));
    assert_eq!(city.processing.mode, ProcessingMode::BitmapEngraving);
    assert_eq!(city.processing.power, 60);
}

#[test]
fn test_water_excluded_when_disabled() {
    let mut map = single_primary_map();
    map.water = Some(PolygonCollection::from_geometries([Geometry::polygon([
        [0.1, 0.1],
        [0.3, 0.1],
        [0.3, 0.3],
    ])]));

    let canvas = canvas(8.0, 12.0);
    let profile = profile();
    let theme = LaserThemeOptions {
        include_water: false,
        ..LaserThemeOptions::default()
    };
    let export = DualFormatExporter::new(&canvas, &profile, &theme)
        .export(&map, &mut SequentialIdGenerator::default())
        .unwrap();

    assert!(export.xcs.layer("Water").is_none());
    assert!(!export.svg.contains("#FFFF00"));
    assert!(export.svg.contains("<g id=\"water\">"));
    assert!(parse_svg(&export.svg).paths.get("water").is_none());
}

#[test]
fn test_skipped_rows_are_counted_not_fatal() {
    let mut map = single_primary_map();
    map.roads.add_edge(GraphEdge::between(1, 42, "secondary"));
    map.parks = Some(PolygonCollection {
        rows: vec![
            PolygonRow { geometry: None },
            PolygonRow {
                geometry: Some(Geometry::Unsupported),
            },
        ],
    });

    let canvas = canvas(8.0, 12.0);
    let profile = profile();
    let theme = roads_only();
    let export = DualFormatExporter::new(&canvas, &profile, &theme)
        .export(&map, &mut SequentialIdGenerator::default())
        .unwrap();

    assert_eq!(export.stats.edges_missing_coordinates, 1);
    assert_eq!(export.stats.polygons_null_geometry, 1);
    assert_eq!(export.stats.polygons_empty_geometry, 1);
    assert_eq!(export.xcs.elements.len(), 1);
    assert!(export.xcs.layer("Roads - Secondary").is_none());
}

#[test]
fn test_graph_without_coordinates_fails() {
    let mut map = single_primary_map();
    for node in map.roads.nodes.values_mut() {
        node.y = None;
    }

    let canvas = canvas(8.0, 12.0);
    let profile = profile();
    let theme = LaserThemeOptions::default();
    let result = DualFormatExporter::new(&canvas, &profile, &theme)
        .export(&map, &mut SequentialIdGenerator::default());
    assert!(matches!(result, Err(RenderError::NoCoordinates)));
}

#[test]
fn test_xcs_json_shape() {
    let map = single_primary_map();
    let canvas = canvas(8.0, 12.0);
    let profile = profile();
    let theme = roads_only();
    let export = DualFormatExporter::new(&canvas, &profile, &theme)
        .export(&map, &mut SequentialIdGenerator::new("el"))
        .unwrap();

    let json = export.xcs_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["version"], "1.0");
    assert_eq!(value["generator"], "maplaser");
    assert_eq!(value["canvas"]["viewBox"]["height"], 1200.0);
    assert_eq!(value["elements"][0]["type"], "path");
    assert_eq!(value["elements"][0]["zIndex"], 0);
    assert_eq!(value["elements"][0]["data"]["strokeWidth"], 1.0);
    assert_eq!(value["elements"][0]["processing"]["mode"], "VECTOR_ENGRAVING");
    assert!(value["elements"][0]["processing"].get("density").is_none());
    assert!(value["elements"][0]["data"].get("text").is_none());
    assert_eq!(value["metadata"]["coordinates"]["latitude"], 0.5);
    assert!(chrono::DateTime::parse_from_rfc3339(value["created"].as_str().unwrap()).is_ok());

    let parsed = XcsProject::from_json_str(&json).unwrap();
    assert_eq!(parsed.elements, export.xcs.elements);
    assert_eq!(parsed.layers, export.xcs.layers);
    assert_eq!(parsed.created, export.xcs.created);
}
