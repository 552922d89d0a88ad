//! Implementations of geometry traits.

mod multi_contour;
mod multi_point;
mod multi_polygon;
mod polygon;
mod polyline;

pub use multi_contour::{PolylineBag, RingSet};
pub use multi_point::PointBag;
pub use multi_polygon::PolygonBag;
pub use polygon::Polygon;
pub use polyline::{Polyline, Ring};
