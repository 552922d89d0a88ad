use geoweave_types::{GeometryFactory, GeometryHint, Geom, SpatialGeometry};
use log::debug;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use super::assemble::GeometryAssembler;
use super::json_tree::{to_value, JsonKind, JsonNode};
use super::position::Position;

/// Kind of a GeoJSON object, as given by its `"type"` member.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GeoJsonType {
    /// `Point` geometry.
    Point,
    /// `MultiPoint` geometry.
    MultiPoint,
    /// `LineString` geometry.
    LineString,
    /// `MultiLineString` geometry.
    MultiLineString,
    /// `Polygon` geometry.
    Polygon,
    /// `MultiPolygon` geometry.
    MultiPolygon,
    /// `GeometryCollection` geometry.
    GeometryCollection,
    /// `Feature` object wrapping a geometry.
    Feature,
    /// `FeatureCollection` object.
    FeatureCollection,
}

impl GeoJsonType {
    /// Parses the `"type"` member value. Names are case-sensitive.
    pub fn from_name(name: &str) -> Option<Self> {
        Some(match name {
            "Feature" => Self::Feature,
            "FeatureCollection" => Self::FeatureCollection,
            other => match GeometryHint::from_geojson_name(other)? {
                GeometryHint::Point => Self::Point,
                GeometryHint::MultiPoint => Self::MultiPoint,
                GeometryHint::LineString => Self::LineString,
                GeometryHint::MultiLineString => Self::MultiLineString,
                GeometryHint::Polygon => Self::Polygon,
                GeometryHint::MultiPolygon => Self::MultiPolygon,
                GeometryHint::GeometryCollection => Self::GeometryCollection,
                GeometryHint::Unknown => return None,
            },
        })
    }

    /// Reads the type of a GeoJSON object.
    pub fn of<N: JsonNode>(node: &N) -> Option<Self> {
        let name = node.get("type")?.as_str()?;
        let result = Self::from_name(name);
        if result.is_none() {
            debug!("Unknown GeoJSON object type '{name}'");
        }

        result
    }

    /// Name used in the `"type"` member.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Feature => "Feature",
            Self::FeatureCollection => "FeatureCollection",
            geometry => match geometry.geometry_hint().and_then(|h| h.geojson_name()) {
                Some(name) => name,
                None => "Unknown",
            },
        }
    }

    /// Geometry kind for geometry objects, `None` for features and feature collections.
    pub fn geometry_hint(&self) -> Option<GeometryHint> {
        Some(match self {
            Self::Point => GeometryHint::Point,
            Self::MultiPoint => GeometryHint::MultiPoint,
            Self::LineString => GeometryHint::LineString,
            Self::MultiLineString => GeometryHint::MultiLineString,
            Self::Polygon => GeometryHint::Polygon,
            Self::MultiPolygon => GeometryHint::MultiPolygon,
            Self::GeometryCollection => GeometryHint::GeometryCollection,
            Self::Feature | Self::FeatureCollection => return None,
        })
    }
}

/// Normalizes a GeoJSON object into a plain geometry object.
///
/// * Geometry objects are copied with only their `type`, `coordinates` (or `geometries`) and `crs`
///   members.
/// * A `Feature` is replaced by its normalized `geometry`. If the geometry has no `crs` member, the
///   one of the feature is used.
/// * A `FeatureCollection` becomes a `GeometryCollection` of the normalized geometries of its
///   features, in the same order. Features without a valid geometry are skipped. The `crs` member
///   of the collection is kept.
///
/// Returns `None` if the object is not a GeoJSON object of a known type, or if required members
/// are missing.
pub fn extract_geojson<N: JsonNode>(node: &N) -> Option<Value> {
    let object_type = GeoJsonType::of(node)?;
    let mut normalized = match object_type {
        GeoJsonType::Feature => extract_geojson(node.get("geometry")?)?,
        GeoJsonType::FeatureCollection => {
            let geometries: Vec<Value> = node
                .get("features")?
                .as_array()?
                .iter()
                .enumerate()
                .filter_map(|(index, feature)| {
                    let geometry = extract_geojson(feature);
                    if geometry.is_none() {
                        debug!("Feature {index} of the collection has no valid geometry, skipped");
                    }
                    geometry
                })
                .collect();

            json!({ "type": "GeometryCollection", "geometries": geometries })
        }
        GeoJsonType::GeometryCollection => {
            let geometries = node
                .get("geometries")?
                .as_array()?
                .iter()
                .map(extract_geojson)
                .collect::<Option<Vec<_>>>()?;

            json!({ "type": "GeometryCollection", "geometries": geometries })
        }
        geometry_type => {
            let coordinates = node.get("coordinates")?;
            if coordinates.as_array().is_none() {
                debug!("GeoJSON {} has no coordinates array", geometry_type.name());
                return None;
            }

            json!({ "type": geometry_type.name(), "coordinates": to_value(coordinates) })
        }
    };

    if let (Some(crs), Value::Object(members)) = (node.get("crs"), &mut normalized) {
        if !members.contains_key("crs") && crs.is_object() {
            members.insert("crs".to_string(), to_value(crs));
        }
    }

    Some(normalized)
}

/// Name of a named CRS object: `{"type": "name", "properties": {"name": "..."}}`.
///
/// Other CRS forms are not recognized.
pub fn crs_name<N: JsonNode>(crs: &N) -> Option<&str> {
    if crs.get("type")?.as_str()? != "name" {
        return None;
    }

    crs.get("properties")?.get("name")?.as_str()
}

/// SRID encoded in a CRS name such as `EPSG:4326` or `urn:ogc:def:crs:EPSG::4326`.
///
/// `urn:ogc:def:crs:OGC:1.3:CRS84`, the GeoJSON default, gives 4326.
pub fn srid_from_crs_name(name: &str) -> Option<i32> {
    if name.eq_ignore_ascii_case("urn:ogc:def:crs:OGC:1.3:CRS84") {
        return Some(4326);
    }

    let code = if let Some(code) = name.strip_prefix("EPSG:") {
        code
    } else if name.starts_with("urn:ogc:def:crs:EPSG:") {
        // The version part between the authority and the code can be empty.
        name.rsplit(':').next()?
    } else {
        return None;
    };

    code.parse().ok()
}

/// Builds the position tree from a `coordinates` array.
///
/// If the first element of the array is itself an array, the result is a set of the positions of
/// every element. Otherwise the array is a single coordinate: it must start with two numbers, any
/// further ordinates are ignored. Every node of the tree gets the given hint.
pub fn fetch_coordinates<N: JsonNode>(array: &N, hint: GeometryHint) -> Option<Position> {
    let items = array.as_array()?;
    match items.first()?.kind() {
        JsonKind::Array(_) => {
            let children = items
                .iter()
                .map(|item| fetch_coordinates(item, hint))
                .collect::<Option<Vec<_>>>()?;
            Some(Position::set(hint, children))
        }
        _ => {
            let [x, y, ..] = items else {
                return None;
            };
            Some(Position::coordinate(x.as_f64()?, y.as_f64()?, hint))
        }
    }
}

/// Reads kernel geometries from GeoJSON trees.
///
/// Accepts geometry objects, features and feature collections (see [`extract_geojson`]).
#[derive(Debug, Clone, Default)]
pub struct GeoJsonReader<F> {
    factory: F,
}

impl<F: GeometryFactory> GeoJsonReader<F> {
    /// Creates a new reader.
    pub fn new(factory: F) -> Self {
        Self { factory }
    }

    /// Factory used to construct geometries.
    pub fn factory(&self) -> &F {
        &self.factory
    }

    /// Reads the geometry of the object. Returns `None` if the object does not contain a valid
    /// geometry.
    ///
    /// A geometry collection is only valid if all of its members are valid.
    pub fn extract_geometry<N: JsonNode>(&self, node: &N) -> Option<Geom<F::Point>> {
        let normalized = extract_geojson(node)?;
        self.assemble(&normalized)
    }

    /// Same as [`GeoJsonReader::extract_geometry`], but also reads the named CRS of the object.
    ///
    /// The SRID is taken from the CRS name if it encodes an EPSG code, otherwise the SRID of the
    /// factory is used.
    pub fn extract_spatial<N: JsonNode>(&self, node: &N) -> Option<SpatialGeometry<F::Point>> {
        let normalized = extract_geojson(node)?;
        let geometry = self.assemble(&normalized)?;

        let crs = JsonNode::get(&normalized, "crs").and_then(crs_name);
        let srid = crs
            .and_then(srid_from_crs_name)
            .unwrap_or_else(|| self.factory.srid());

        let spatial = SpatialGeometry::new(geometry, srid);
        Some(match crs {
            Some(name) => spatial.with_crs_name(name),
            None => spatial,
        })
    }

    fn assemble(&self, normalized: &Value) -> Option<Geom<F::Point>> {
        let hint = GeoJsonType::of(normalized)?.geometry_hint()?;
        if hint == GeometryHint::GeometryCollection {
            let members = JsonNode::get(normalized, "geometries")?
                .as_array()?
                .iter()
                .map(|member| self.assemble(member))
                .collect::<Option<Vec<_>>>()?;
            return Some(Geom::GeometryBag(self.factory.geometry_bag(members)));
        }

        let position = fetch_coordinates(JsonNode::get(normalized, "coordinates")?, hint)?;
        GeometryAssembler::new(&self.factory).assemble(&position)
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use geoweave_types::cartesian::Point2;
    use geoweave_types::{CartesianFactory, DEFAULT_SRID};

    use super::*;

    fn reader() -> GeoJsonReader<CartesianFactory<Point2>> {
        GeoJsonReader::new(CartesianFactory::new())
    }

    fn named_crs(name: &str) -> Value {
        json!({ "type": "name", "properties": { "name": name } })
    }

    #[test]
    fn object_types() {
        assert_eq!(GeoJsonType::from_name("Feature"), Some(GeoJsonType::Feature));
        assert_eq!(GeoJsonType::from_name("MultiPolygon"), Some(GeoJsonType::MultiPolygon));
        assert_eq!(GeoJsonType::from_name("feature"), None);
        assert_eq!(GeoJsonType::MultiLineString.name(), "MultiLineString");
        assert_eq!(GeoJsonType::FeatureCollection.geometry_hint(), None);
        assert_eq!(GeoJsonType::of(&json!({ "type": "Topology" })), None);
    }

    #[test]
    fn geometry_is_normalized() {
        let value = json!({ "type": "Point", "coordinates": [1.0, 2.0], "bbox": [1.0, 2.0, 1.0, 2.0] });
        assert_eq!(
            extract_geojson(&value),
            Some(json!({ "type": "Point", "coordinates": [1.0, 2.0] }))
        );
        assert_eq!(extract_geojson(&json!({ "type": "Point" })), None);
        assert_eq!(extract_geojson(&json!({ "type": "Point", "coordinates": 1.0 })), None);
        assert_eq!(extract_geojson(&json!([1.0, 2.0])), None);
    }

    #[test]
    fn feature_crs_is_pushed_down() {
        let feature = json!({
            "type": "Feature",
            "crs": named_crs("EPSG:3857"),
            "properties": { "name": "a" },
            "geometry": { "type": "Point", "coordinates": [1.0, 2.0] },
        });
        assert_eq!(
            extract_geojson(&feature),
            Some(json!({ "type": "Point", "coordinates": [1.0, 2.0], "crs": named_crs("EPSG:3857") }))
        );

        let own_crs = json!({
            "type": "Feature",
            "crs": named_crs("EPSG:3857"),
            "geometry": { "type": "Point", "coordinates": [1.0, 2.0], "crs": named_crs("EPSG:4326") },
        });
        assert_eq!(
            extract_geojson(&own_crs).and_then(|v| v.get("crs").cloned()),
            Some(named_crs("EPSG:4326"))
        );

        assert_eq!(
            extract_geojson(&json!({ "type": "Feature", "geometry": null })),
            None
        );
    }

    #[test]
    fn feature_collection() {
        let collection = json!({
            "type": "FeatureCollection",
            "crs": named_crs("EPSG:4326"),
            "features": [
                { "type": "Feature", "geometry": { "type": "Point", "coordinates": [1.0, 2.0] } },
                { "type": "Feature", "geometry": null },
                { "type": "Feature", "geometry": { "type": "Point", "coordinates": [3.0, 4.0] } },
            ],
        });

        let normalized = extract_geojson(&collection).expect("valid collection");
        assert_eq!(normalized["type"], "GeometryCollection");
        assert_eq!(normalized["geometries"].as_array().map(Vec::len), Some(2));
        assert_eq!(normalized["geometries"][1]["coordinates"], json!([3.0, 4.0]));
        assert_eq!(normalized["crs"], named_crs("EPSG:4326"));
    }

    #[test]
    fn crs_names() {
        assert_eq!(crs_name(&named_crs("EPSG:4326")), Some("EPSG:4326"));
        assert_eq!(
            crs_name(&json!({ "type": "link", "properties": { "href": "http://example.com/crs" } })),
            None
        );
        assert_eq!(crs_name(&json!({ "type": "name" })), None);

        assert_eq!(srid_from_crs_name("EPSG:4326"), Some(4326));
        assert_eq!(srid_from_crs_name("urn:ogc:def:crs:EPSG::3857"), Some(3857));
        assert_eq!(srid_from_crs_name("urn:ogc:def:crs:EPSG:6.6:2154"), Some(2154));
        assert_eq!(srid_from_crs_name("urn:ogc:def:crs:OGC:1.3:CRS84"), Some(4326));
        assert_eq!(srid_from_crs_name("local"), None);
    }

    #[test]
    fn coordinates_tree() {
        let polygon = json!([[[0.0, 0.0], [4.0, 0.0, 7.0], [4.0, 4.0], [0.0, 0.0]]]);
        let position = fetch_coordinates(&polygon, GeometryHint::Polygon).expect("valid array");
        assert_eq!(position.depth(), 2);
        assert_eq!(position.children()[0].leaf_count(), 4);
        assert_eq!(position.children()[0].children()[1].x(), 4.0);
        assert_eq!(position.hint(), GeometryHint::Polygon);

        assert_eq!(fetch_coordinates(&json!([1.0]), GeometryHint::Point), None);
        assert_eq!(fetch_coordinates(&json!([]), GeometryHint::LineString), None);
        assert_eq!(fetch_coordinates(&json!([[1.0, 2.0], 3.0]), GeometryHint::LineString), None);
        assert_eq!(fetch_coordinates(&json!(["1", 2.0]), GeometryHint::Point), None);
    }

    #[test]
    fn geometry_collection_needs_all_members() {
        let collection = json!({
            "type": "GeometryCollection",
            "geometries": [
                { "type": "Point", "coordinates": [1.0, 2.0] },
                { "type": "LineString", "coordinates": [[0.0, 0.0], [1.0, 1.0]] },
            ],
        });
        assert_matches!(
            reader().extract_geometry(&collection),
            Some(Geom::GeometryBag(bag)) if bag.len() == 2
        );

        let broken = json!({
            "type": "GeometryCollection",
            "geometries": [
                { "type": "Point", "coordinates": [1.0, 2.0] },
                { "type": "LineString", "coordinates": [[0.0, 0.0]] },
            ],
        });
        assert_eq!(reader().extract_geometry(&broken), None);
    }

    #[test]
    fn spatial() {
        let feature = json!({
            "type": "Feature",
            "crs": named_crs("urn:ogc:def:crs:EPSG::2056"),
            "geometry": { "type": "Point", "coordinates": [2600000.0, 1200000.0] },
        });
        let spatial = reader().extract_spatial(&feature).expect("valid feature");
        assert_eq!(spatial.srid, 2056);
        assert_eq!(spatial.crs_name.as_deref(), Some("urn:ogc:def:crs:EPSG::2056"));

        let point = json!({ "type": "Point", "coordinates": [1.0, 2.0], "crs": named_crs("local") });
        let spatial = reader().extract_spatial(&point).expect("valid point");
        assert_eq!(spatial.srid, DEFAULT_SRID);
        assert_eq!(spatial.crs_name.as_deref(), Some("local"));
    }
}
