//! Reading and writing of GeoJSON geometries.
//!
//! Reading is done in three steps:
//! 1. [`extract_geojson`] normalizes features and feature collections into geometry objects;
//! 2. [`fetch_coordinates`] turns the `coordinates` array into a [`Position`] tree;
//! 3. [`GeometryAssembler`] builds a kernel geometry from the tree.
//!
//! [`GeoJsonReader`] runs all of them. The reading code only accesses JSON through the
//! [`JsonNode`] trait.

mod assemble;
mod extract;
mod json_tree;
mod position;
mod writer;

pub use assemble::GeometryAssembler;
pub use extract::{
    crs_name, extract_geojson, fetch_coordinates, srid_from_crs_name, GeoJsonReader, GeoJsonType,
};
pub use json_tree::{to_value, JsonKind, JsonNode};
pub use position::{Position, PositionSet};
pub use writer::GeoJsonWriter;
