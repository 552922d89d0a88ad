use serde::{Deserialize, Serialize};

use crate::impls::polyline::Ring;

/// Simple implementation of the [`Polygon`](crate::Polygon) trait.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct Polygon<P> {
    /// Outer ring.
    pub outer: Ring<P>,
    /// Holes.
    pub holes: Vec<Ring<P>>,
}

impl<P> Polygon<P> {
    /// Creates a new polygon.
    pub fn new(outer: Ring<P>, holes: Vec<Ring<P>>) -> Self {
        Self { outer, holes }
    }
}

impl<P> crate::polygon::Polygon for Polygon<P> {
    type Contour = Ring<P>;

    fn outer_contour(&self) -> &Self::Contour {
        &self.outer
    }

    fn inner_contours(&self) -> impl Iterator<Item = &'_ Self::Contour> {
        self.holes.iter()
    }
}

impl<P> From<Ring<P>> for Polygon<P> {
    fn from(value: Ring<P>) -> Self {
        Self {
            outer: value,
            holes: vec![],
        }
    }
}
