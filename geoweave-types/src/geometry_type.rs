//! See documentation for [`GeometryHint`].
use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// Kind of geometry a coordinate tree or a geometry value represents.
///
/// The hint is decided once at the format boundary (WKT tag, GeoJSON `"type"` member) and then
/// matched exhaustively by the assembling code.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize)]
pub enum GeometryHint {
    /// Not known or not applicable.
    #[default]
    Unknown,
    /// Single point.
    Point,
    /// Collection of points.
    MultiPoint,
    /// Sequence of points.
    LineString,
    /// Collection of line strings.
    MultiLineString,
    /// Outer ring with optional holes.
    Polygon,
    /// Collection of polygons.
    MultiPolygon,
    /// Collection of arbitrary geometries.
    GeometryCollection,
}

impl GeometryHint {
    /// Name of the geometry type as used by the `"type"` member of GeoJSON objects.
    ///
    /// Returns `None` for [`GeometryHint::Unknown`].
    pub fn geojson_name(&self) -> Option<&'static str> {
        Some(match self {
            Self::Unknown => return None,
            Self::Point => "Point",
            Self::MultiPoint => "MultiPoint",
            Self::LineString => "LineString",
            Self::MultiLineString => "MultiLineString",
            Self::Polygon => "Polygon",
            Self::MultiPolygon => "MultiPolygon",
            Self::GeometryCollection => "GeometryCollection",
        })
    }

    /// Parses a GeoJSON geometry type name. The comparison is case-sensitive, as GeoJSON requires.
    pub fn from_geojson_name(name: &str) -> Option<Self> {
        Some(match name {
            "Point" => Self::Point,
            "MultiPoint" => Self::MultiPoint,
            "LineString" => Self::LineString,
            "MultiLineString" => Self::MultiLineString,
            "Polygon" => Self::Polygon,
            "MultiPolygon" => Self::MultiPolygon,
            "GeometryCollection" => Self::GeometryCollection,
            _ => return None,
        })
    }
}

impl Display for GeometryHint {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.geojson_name().unwrap_or("Unknown"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn geojson_names() {
        for hint in [
            GeometryHint::Point,
            GeometryHint::MultiPoint,
            GeometryHint::LineString,
            GeometryHint::MultiLineString,
            GeometryHint::Polygon,
            GeometryHint::MultiPolygon,
            GeometryHint::GeometryCollection,
        ] {
            let name = hint.geojson_name().expect("known hint");
            assert_eq!(GeometryHint::from_geojson_name(name), Some(hint));
        }

        assert_eq!(GeometryHint::Unknown.geojson_name(), None);
        assert_eq!(GeometryHint::from_geojson_name("point"), None);
        assert_eq!(GeometryHint::from_geojson_name("Feature"), None);
    }
}
