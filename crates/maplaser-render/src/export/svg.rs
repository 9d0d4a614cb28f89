//! SVG document export
//!
//! Produces a physically sized SVG (`width`/`height` in inches, `viewBox` in
//! canvas units) with four top-level layers in z-order: water, parks, roads,
//! text. The layer groups are always present, even when empty, so laser
//! software sees a stable structure.

use crate::extract::{FeatureRecord, TextLabel};
use maplaser_core::{CanvasSpec, FeatureCategory};

/// Layer group ids in z-order
pub const SVG_LAYERS: [&str; 4] = ["water", "parks", "roads", "text"];

/// Render feature records as a complete SVG document
pub fn render_svg(features: &[FeatureRecord], canvas: &CanvasSpec) -> String {
    let mut svg = String::new();

    svg.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    svg.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{}in\" height=\"{}in\" viewBox=\"0 0 {} {}\">\n",
        canvas.physical.width, canvas.physical.height, canvas.width, canvas.height
    ));

    for layer in SVG_LAYERS {
        svg.push_str(&format!("  <g id=\"{}\">\n", layer));
        match layer {
            "water" => render_fills(&mut svg, features, FeatureCategory::Water),
            "parks" => render_fills(&mut svg, features, FeatureCategory::Parks),
            "roads" => render_roads(&mut svg, features),
            _ => render_text(&mut svg, features),
        }
        svg.push_str("  </g>\n");
    }

    svg.push_str("</svg>\n");

    tracing::debug!("Rendered SVG with {} features", features.len());
    svg
}

fn render_fills(svg: &mut String, features: &[FeatureRecord], category: FeatureCategory) {
    for feature in features.iter().filter(|f| f.category == category) {
        svg.push_str(&format!(
            "    <path d=\"{}\" fill=\"{}\" stroke=\"none\"/>\n",
            feature.path_data(),
            xml_escape(&feature.color)
        ));
    }
}

/// Roads share one stroke group per color, in first-seen order
fn render_roads(svg: &mut String, features: &[FeatureRecord]) {
    let mut groups: Vec<(&str, Vec<&FeatureRecord>)> = Vec::new();
    for feature in features.iter().filter(|f| f.category.is_road()) {
        match groups.iter_mut().find(|(color, _)| *color == feature.color) {
            Some((_, members)) => members.push(feature),
            None => groups.push((feature.color.as_str(), vec![feature])),
        }
    }

    for (color, members) in groups {
        svg.push_str(&format!(
            "    <g stroke=\"{}\" fill=\"none\" stroke-width=\"1\">\n",
            xml_escape(color)
        ));
        for feature in members {
            svg.push_str(&format!("      <path d=\"{}\"/>\n", feature.path_data()));
        }
        svg.push_str("    </g>\n");
    }
}

fn render_text(svg: &mut String, features: &[FeatureRecord]) {
    for feature in features.iter().filter(|f| f.category == FeatureCategory::Text) {
        if let Some(label) = &feature.label {
            svg.push_str(&text_element(label, &feature.color));
        }
    }
}

fn text_element(label: &TextLabel, color: &str) -> String {
    let mut attrs = format!(
        "x=\"{:.2}\" y=\"{:.2}\" text-anchor=\"middle\" font-family=\"sans-serif\" font-size=\"{:.2}\" fill=\"{}\"",
        label.anchor.x,
        label.anchor.y,
        label.font_size,
        xml_escape(color)
    );
    if label.bold {
        attrs.push_str(" font-weight=\"bold\"");
    }
    if let Some(opacity) = label.opacity {
        attrs.push_str(&format!(" opacity=\"{}\"", opacity));
    }
    format!("    <text {}>{}</text>\n", attrs, xml_escape(&label.content))
}

/// Escape XML special characters for text content and attribute values
pub fn xml_escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            other => out.push(other),
        }
    }
    out
}
