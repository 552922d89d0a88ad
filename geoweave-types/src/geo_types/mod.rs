//! Integration with the [`geo_types`] crate.
//!
//! `geo_types` points and coordinates can be used as the point type of a
//! [`CartesianFactory`](crate::CartesianFactory), their line strings and polygons implement the
//! [`Contour`](crate::Contour) and [`Polygon`](crate::Polygon) traits, and any kernel geometry can
//! be converted into a [`geo_types::Geometry`].

mod contour;
mod geometry;
mod point;
