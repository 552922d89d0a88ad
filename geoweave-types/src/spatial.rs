use serde::{Deserialize, Serialize};

use crate::geometry::Geom;

/// A geometry together with its spatial reference metadata.
///
/// The metadata is carried as read from the source text and is never interpreted: no coordinate
/// transformation is done based on it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpatialGeometry<P> {
    /// The geometry.
    pub geometry: Geom<P>,
    /// Spatial reference identifier, either read from the source or the factory default.
    pub srid: i32,
    /// Name of the coordinate reference system, if the source declared one (GeoJSON `crs` member).
    pub crs_name: Option<String>,
}

impl<P> SpatialGeometry<P> {
    /// Creates a new instance without a CRS name.
    pub fn new(geometry: Geom<P>, srid: i32) -> Self {
        Self {
            geometry,
            srid,
            crs_name: None,
        }
    }

    /// Sets the CRS name.
    pub fn with_crs_name(mut self, crs_name: impl Into<String>) -> Self {
        self.crs_name = Some(crs_name.into());
        self
    }
}
