//! Geographic geometry values
//!
//! A closed tagged union over the geometry kinds the flattener understands,
//! serialized in GeoJSON shape (`{"type": "LineString", "coordinates": ...}`).
//! Any other `type` deserializes to [`Geometry::Unsupported`]. Positions
//! may carry extra components such as elevation; only `x` and `y` are kept.

use serde::de::{self, IgnoredAny, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Geographic position as `[x, y]` (longitude, latitude)
pub type Position = [f64; 2];

/// Vector geometry in geographic coordinates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Geometry {
    LineString {
        #[serde(deserialize_with = "positions")]
        coordinates: Vec<Position>,
    },
    /// Rings; the first is the exterior, the rest are holes
    Polygon {
        #[serde(deserialize_with = "rings")]
        coordinates: Vec<Vec<Position>>,
    },
    MultiLineString {
        #[serde(deserialize_with = "rings")]
        coordinates: Vec<Vec<Position>>,
    },
    MultiPolygon {
        #[serde(deserialize_with = "polygons")]
        coordinates: Vec<Vec<Vec<Position>>>,
    },
    GeometryCollection {
        geometries: Vec<Geometry>,
    },
    #[serde(other)]
    Unsupported,
}

impl Geometry {
    pub fn line(points: impl IntoIterator<Item = Position>) -> Self {
        Geometry::LineString {
            coordinates: points.into_iter().collect(),
        }
    }

    /// Polygon without holes
    pub fn polygon(exterior: impl IntoIterator<Item = Position>) -> Self {
        Geometry::Polygon {
            coordinates: vec![exterior.into_iter().collect()],
        }
    }

    /// GeoJSON type name
    pub fn kind(&self) -> &'static str {
        match self {
            Geometry::LineString { .. } => "LineString",
            Geometry::Polygon { .. } => "Polygon",
            Geometry::MultiLineString { .. } => "MultiLineString",
            Geometry::MultiPolygon { .. } => "MultiPolygon",
            Geometry::GeometryCollection { .. } => "GeometryCollection",
            Geometry::Unsupported => "Unsupported",
        }
    }
}

/// A GeoJSON position of two or more numbers, trimmed to `[x, y]`
struct LenientPosition(Position);

impl<'de> Deserialize<'de> for LenientPosition {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct PositionVisitor;

        impl<'de> Visitor<'de> for PositionVisitor {
            type Value = LenientPosition;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a position of at least two numbers")
            }

            fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
                let x: f64 = seq
                    .next_element()?
                    .ok_or_else(|| de::Error::invalid_length(0, &self))?;
                let y: f64 = seq
                    .next_element()?
                    .ok_or_else(|| de::Error::invalid_length(1, &self))?;
                while seq.next_element::<IgnoredAny>()?.is_some() {}
                Ok(LenientPosition([x, y]))
            }
        }

        deserializer.deserialize_seq(PositionVisitor)
    }
}

fn positions<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<Position>, D::Error> {
    let raw = Vec::<LenientPosition>::deserialize(deserializer)?;
    Ok(raw.into_iter().map(|p| p.0).collect())
}

fn rings<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<Vec<Position>>, D::Error> {
    let raw = Vec::<Vec<LenientPosition>>::deserialize(deserializer)?;
    Ok(raw
        .into_iter()
        .map(|ring| ring.into_iter().map(|p| p.0).collect())
        .collect())
}

fn polygons<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Vec<Vec<Vec<Position>>>, D::Error> {
    let raw = Vec::<Vec<Vec<LenientPosition>>>::deserialize(deserializer)?;
    Ok(raw
        .into_iter()
        .map(|rings| {
            rings
                .into_iter()
                .map(|ring| ring.into_iter().map(|p| p.0).collect())
                .collect()
        })
        .collect())
}
