//! Geometry kernel of the `geoweave` crate family.
//!
//! The crate defines the value types all readers produce and all writers consume:
//! * traits describing points, contours and polygons ([`cartesian::CartesianPoint2d`],
//!   [`Contour`], [`Polygon`]);
//! * simple implementations of these traits in the [`impls`] module;
//! * the [`Geom`] sum type that holds any of them;
//! * the [`GeometryFactory`] trait, the single way readers construct geometries.
//!
//! With the `geo-types` feature (enabled by default) the `geo_types` coordinate and point types can
//! be used as the point type of the kernel, and kernel geometries convert into
//! `geo_types::Geometry`.

pub mod cartesian;
pub mod contour;
pub mod error;
pub mod factory;
pub mod geometry;
pub mod geometry_type;
pub mod impls;
mod polygon;
pub mod segment;
mod spatial;

#[cfg(feature = "geo-types")]
mod geo_types;

pub use contour::Contour;
pub use error::GeoweaveTypesError;
pub use factory::{CartesianFactory, FactoryNum, GeometryFactory, DEFAULT_SRID};
pub use geometry::{Geom, GeometryBag};
pub use geometry_type::GeometryHint;
pub use polygon::Polygon;
pub use segment::Segment;
pub use spatial::SpatialGeometry;
