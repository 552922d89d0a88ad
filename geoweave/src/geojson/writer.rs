use geoweave_types::cartesian::CartesianPoint2d;
use geoweave_types::impls::Polygon;
use geoweave_types::{Contour, Geom, Polygon as _, SpatialGeometry};
use log::debug;
use num_traits::ToPrimitive;
use serde_json::{json, Value};

/// Writes geometries as GeoJSON geometry objects.
///
/// Rings and segments are written as `LineString`s (rings with the closing point repeated) and
/// ring sets as `MultiLineString`s.
///
/// JSON has no representation of non-finite numbers, so NaN and infinite coordinates are written
/// as `null`. Such positions are not read back.
#[derive(Debug, Copy, Clone, Default)]
pub struct GeoJsonWriter;

impl GeoJsonWriter {
    /// Creates a new writer.
    pub fn new() -> Self {
        Self
    }

    /// GeoJSON object of the geometry.
    pub fn write<P: CartesianPoint2d>(&self, geometry: &Geom<P>) -> Value {
        match geometry {
            Geom::Point(p) => object("Point", position(p)),
            Geom::PointBag(bag) => object("MultiPoint", bag.iter().map(position).collect()),
            Geom::Polyline(line) => object("LineString", contour(line)),
            Geom::PolylineBag(bag) => object("MultiLineString", bag.iter().map(contour).collect()),
            Geom::Ring(ring) => object("LineString", contour(ring)),
            Geom::RingSet(set) => object("MultiLineString", set.iter().map(contour).collect()),
            Geom::Polygon(p) => object("Polygon", polygon(p)),
            Geom::PolygonBag(bag) => object("MultiPolygon", bag.iter().map(polygon).collect()),
            Geom::GeometryBag(bag) => json!({
                "type": "GeometryCollection",
                "geometries": bag.iter().map(|g| self.write(g)).collect::<Vec<_>>(),
            }),
            Geom::Segment(s) => object("LineString", json!([position(&s.0), position(&s.1)])),
        }
    }

    /// GeoJSON object of the geometry with a named `crs` member if the CRS name is known.
    pub fn write_spatial<P: CartesianPoint2d>(&self, spatial: &SpatialGeometry<P>) -> Value {
        let mut value = self.write(&spatial.geometry);
        if let (Some(name), Value::Object(members)) = (&spatial.crs_name, &mut value) {
            members.insert(
                "crs".to_string(),
                json!({ "type": "name", "properties": { "name": name } }),
            );
        }

        value
    }
}

fn object(geometry_type: &str, coordinates: Value) -> Value {
    json!({ "type": geometry_type, "coordinates": coordinates })
}

fn position(point: &impl CartesianPoint2d) -> Value {
    let (x, y) = (point.x().to_f64(), point.y().to_f64());
    if !x.zip(y).is_some_and(|(x, y)| x.is_finite() && y.is_finite()) {
        debug!("Writing non-finite coordinate ({x:?}, {y:?}) as null");
    }

    json!([x, y])
}

fn contour<C>(contour: &C) -> Value
where
    C: Contour,
    C::Point: CartesianPoint2d,
{
    contour.iter_points_closing().map(position).collect()
}

fn polygon<P: CartesianPoint2d>(polygon: &Polygon<P>) -> Value {
    polygon.iter_contours().map(contour).collect()
}

#[cfg(test)]
mod tests {
    use geoweave_types::cartesian::Point2;
    use geoweave_types::impls::{PointBag, Ring, RingSet};
    use geoweave_types::{GeometryBag, Segment};

    use super::*;

    fn triangle() -> Ring<Point2> {
        Ring::new(vec![
            Point2::new(0.0, 0.0),
            Point2::new(4.0, 0.0),
            Point2::new(4.0, 4.0),
        ])
    }

    #[test]
    fn rings_are_closed() {
        let writer = GeoJsonWriter::new();
        assert_eq!(
            writer.write(&Geom::Ring(triangle())),
            json!({ "type": "LineString", "coordinates": [[0.0, 0.0], [4.0, 0.0], [4.0, 4.0], [0.0, 0.0]] })
        );
        assert_eq!(
            writer.write(&Geom::Polygon(Polygon::from(triangle()))),
            json!({ "type": "Polygon", "coordinates": [[[0.0, 0.0], [4.0, 0.0], [4.0, 4.0], [0.0, 0.0]]] })
        );
        assert_eq!(
            writer.write(&Geom::RingSet(RingSet::from(vec![triangle()])))["type"],
            "MultiLineString"
        );
    }

    #[test]
    fn points_and_segments() {
        let writer = GeoJsonWriter::new();
        assert_eq!(
            writer.write(&Geom::PointBag(PointBag::from(vec![Point2::new(1, 2), Point2::new(3, 4)]))),
            json!({ "type": "MultiPoint", "coordinates": [[1.0, 2.0], [3.0, 4.0]] })
        );
        assert_eq!(
            writer.write(&Geom::Segment(Segment(Point2::new(0.0, 0.0), Point2::new(1.0, 1.0)))),
            json!({ "type": "LineString", "coordinates": [[0.0, 0.0], [1.0, 1.0]] })
        );
    }

    #[test]
    fn non_finite_coordinates_are_null() {
        let writer = GeoJsonWriter::new();
        assert_eq!(
            writer.write(&Geom::Point(Point2::new(f64::NAN, 2.0))),
            json!({ "type": "Point", "coordinates": [null, 2.0] })
        );
        assert_eq!(
            writer.write(&Geom::Point(Point2::new(1.0, f64::NEG_INFINITY))),
            json!({ "type": "Point", "coordinates": [1.0, null] })
        );
    }

    #[test]
    fn collection_with_crs() {
        let writer = GeoJsonWriter::new();
        let bag = GeometryBag::from(vec![Geom::Point(Point2::new(1.0, 2.0))]);
        let spatial = SpatialGeometry::new(Geom::GeometryBag(bag), 4326).with_crs_name("EPSG:4326");
        assert_eq!(
            writer.write_spatial(&spatial),
            json!({
                "type": "GeometryCollection",
                "geometries": [{ "type": "Point", "coordinates": [1.0, 2.0] }],
                "crs": { "type": "name", "properties": { "name": "EPSG:4326" } },
            })
        );

        let unnamed = SpatialGeometry::new(Geom::Point(Point2::new(1.0, 2.0)), 4326);
        assert_eq!(writer.write_spatial(&unnamed).get("crs"), None);
    }
}
