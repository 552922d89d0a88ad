//! Types and functions on geometries in cartesian coordinates.

mod dedup;
mod point;
mod rect;
mod traits;

pub use dedup::{dedup_adjacent, strip_closing_point};
pub use point::Point2;
pub use rect::Rect;
pub use traits::*;
