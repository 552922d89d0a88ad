//! Error types used by the crate.

use geoweave_types::GeoweaveTypesError;
use thiserror::Error;

use crate::wkt::WktError;

/// Geoweave error type.
#[derive(Debug, Error)]
pub enum GeoweaveError {
    /// WKT text could not be parsed.
    #[error("failed to parse WKT: {0}")]
    Wkt(#[from] WktError),
    /// JSON text could not be parsed.
    #[error("failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),
    /// Geometry conversion error.
    #[error(transparent)]
    Types(#[from] GeoweaveTypesError),
}
