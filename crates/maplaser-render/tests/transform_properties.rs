use maplaser_core::{CanvasSpec, FeatureCategory, PhysicalSize};
use maplaser_render::{
    classify_road, BoundingBox, CoordinateTransform, Geometry, GeometryFlattener, MARGIN_FACTOR,
};
use proptest::prelude::*;

const EPS: f64 = 1e-6;

fn canvas(w: f64, h: f64) -> CanvasSpec {
    CanvasSpec::from_physical(PhysicalSize::new(w, h).unwrap())
}

proptest! {
    #[test]
    fn points_inside_bounds_stay_inside_margin(
        min_x in -180.0f64..180.0,
        min_y in -90.0f64..90.0,
        bw in 0.0f64..10.0,
        bh in 0.0f64..10.0,
        tx in 0.0f64..=1.0,
        ty in 0.0f64..=1.0,
        w in 1.0f64..30.0,
        h in 1.0f64..30.0,
    ) {
        let canvas = canvas(w, h);
        let bounds = BoundingBox::new(min_x, min_y, min_x + bw, min_y + bh);
        let t = CoordinateTransform::new(bounds, &canvas);

        let p = t.apply(min_x + tx * bw, min_y + ty * bh);
        let border = (1.0 - MARGIN_FACTOR) / 2.0;
        prop_assert!(p.x.is_finite() && p.y.is_finite());
        prop_assert!(p.x >= canvas.width * border - EPS);
        prop_assert!(p.x <= canvas.width * (1.0 - border) + EPS);
        prop_assert!(p.y >= canvas.height * border - EPS);
        prop_assert!(p.y <= canvas.height * (1.0 - border) + EPS);
    }

    #[test]
    fn vertical_axis_is_inverted(
        y1 in -50.0f64..50.0,
        dy in 0.001f64..50.0,
    ) {
        let canvas = canvas(8.0, 12.0);
        let bounds = BoundingBox::new(0.0, -50.0, 10.0, 100.0);
        let t = CoordinateTransform::new(bounds, &canvas);
        prop_assert!(t.apply(5.0, y1 + dy).y < t.apply(5.0, y1).y);
    }

    #[test]
    fn line_flattens_to_one_move_and_n_minus_one_lines(
        points in prop::collection::vec((0.0f64..1.0, 0.0f64..1.0), 1..20),
    ) {
        let canvas = canvas(8.0, 12.0);
        let t = CoordinateTransform::new(BoundingBox::new(0.0, 0.0, 1.0, 1.0), &canvas);
        let geometry = Geometry::line(points.iter().map(|&(x, y)| [x, y]));

        let paths = GeometryFlattener::new(&t).flatten(&geometry);
        prop_assert_eq!(paths.len(), 1);
        let d = paths[0].to_path_data();
        let tokens: Vec<&str> = d.split_whitespace().collect();
        prop_assert_eq!(tokens.iter().filter(|t| **t == "M").count(), 1);
        prop_assert_eq!(tokens.iter().filter(|t| **t == "L").count(), points.len() - 1);
        prop_assert!(!tokens.contains(&"Z"));
    }

    #[test]
    fn unknown_labels_are_residential(label in "[a-z_]{1,16}") {
        let known = [
            "motorway", "motorway_link", "trunk", "trunk_link", "primary", "primary_link",
            "secondary", "secondary_link", "tertiary", "tertiary_link",
        ];
        prop_assume!(!known.contains(&label.as_str()));
        prop_assert_eq!(classify_road(&label), FeatureCategory::Residential);
    }
}
