use serde::{Deserialize, Serialize};

use crate::cartesian::CartesianPoint2d;

/// A straight line segment between two points.
///
/// Contour iterators produce segments of references (`Segment<&P>`), while
/// [`GeometryFactory::segment`](crate::GeometryFactory::segment) creates owned ones.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Segment<P>(pub P, pub P);

impl<P> Segment<P> {
    /// Creates a new segment.
    pub fn new(start: P, end: P) -> Self {
        Self(start, end)
    }
}

impl<P: CartesianPoint2d> Segment<P> {
    /// Returns true if both ends of the segment are at the same point.
    pub fn is_degenerate(&self) -> bool {
        self.0.equal(&self.1)
    }
}
