//! Kernel errors.

use thiserror::Error;

/// Error of a kernel operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeoweaveTypesError {
    /// A geometry could not be converted into the requested type. The message names the expected
    /// and the actual kind.
    #[error("cannot convert geometry: {0}")]
    Conversion(String),
}
