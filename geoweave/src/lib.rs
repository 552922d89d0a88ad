//! Geometry interchange and topology preparation.
//!
//! The crate reads vector geometries from [WKT](wkt) and [GeoJSON](geojson) text into the value
//! types of the [`geoweave_types`] kernel, writes them back, and builds [planar topology
//! graphs](topology) from them: nodes and edges with cyclic ring edge lists, enumerated in
//! coordinate order so that coincident points of different shapes come next to each other.
//!
//! ```
//! use geoweave::topology::{PlanarGraph, PlanarNodes};
//!
//! let a = geoweave::read_wkt("POLYGON((0 0, 4 0, 4 4, 0 4, 0 0))").unwrap().unwrap();
//! let b = geoweave::read_geojson_str(
//!     r#"{"type": "LineString", "coordinates": [[4, 4], [8, 8], [8, 0]]}"#,
//! )
//! .unwrap()
//! .unwrap();
//!
//! let mut graph = PlanarGraph::new();
//! graph.add_geometry(&a);
//! graph.add_geometry(&b);
//!
//! assert_eq!(graph.node_count(), 7);
//! ```

use geoweave_types::cartesian::Point2;
use geoweave_types::{CartesianFactory, Geom, GeoweaveTypesError};

pub mod error;
pub mod geojson;
pub mod topology;
pub mod wkt;

pub use error::GeoweaveError;

/// Reads WKT or EWKT text into a geometry with `f64` coordinates.
///
/// Returns `Ok(None)` for `EMPTY` geometries.
pub fn read_wkt(text: &str) -> Result<Option<Geom<Point2>>, GeoweaveError> {
    Ok(wkt::WktReader::new(CartesianFactory::new()).read(text)?)
}

/// Parses GeoJSON text and reads its geometry with `f64` coordinates.
///
/// Invalid JSON is an error. Valid JSON that does not contain a valid geometry gives `Ok(None)`.
pub fn read_geojson_str(text: &str) -> Result<Option<Geom<Point2>>, GeoweaveError> {
    let value: serde_json::Value = serde_json::from_str(text)?;
    Ok(geojson::GeoJsonReader::new(CartesianFactory::new()).extract_geometry(&value))
}

/// Reads WKT text and converts the geometry into a concrete kernel type.
///
/// ```
/// use geoweave_types::cartesian::Point2;
/// use geoweave_types::impls::Polygon;
///
/// let polygon: Option<Polygon<Point2>> =
///     geoweave::read_wkt_as("POLYGON((0 0, 4 0, 4 4, 0 0))").unwrap();
/// assert_eq!(polygon.map(|p| p.outer.len()), Some(3));
/// assert!(geoweave::read_wkt_as::<Polygon<Point2>>("POINT(1 2)").is_err());
/// ```
pub fn read_wkt_as<G>(text: &str) -> Result<Option<G>, GeoweaveError>
where
    G: TryFrom<Geom<Point2>, Error = GeoweaveTypesError>,
{
    Ok(read_wkt(text)?.map(G::try_from).transpose()?)
}
