use serde::{Deserialize, Serialize};

use crate::impls::polyline::{Polyline, Ring};

/// A collection of open polylines.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct PolylineBag<P>(Vec<Polyline<P>>);

impl<P> PolylineBag<P> {
    /// Polylines of the bag.
    pub fn lines(&self) -> &[Polyline<P>] {
        &self.0
    }

    /// Iterates over the polylines.
    pub fn iter(&self) -> impl Iterator<Item = &'_ Polyline<P>> {
        self.0.iter()
    }

    /// Number of polylines.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the bag contains no polylines.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<P> From<Vec<Polyline<P>>> for PolylineBag<P> {
    fn from(value: Vec<Polyline<P>>) -> Self {
        Self(value)
    }
}

/// A set of rings, that are not organized into polygons.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct RingSet<P>(Vec<Ring<P>>);

impl<P> RingSet<P> {
    /// Rings of the set.
    pub fn rings(&self) -> &[Ring<P>] {
        &self.0
    }

    /// Iterates over the rings.
    pub fn iter(&self) -> impl Iterator<Item = &'_ Ring<P>> {
        self.0.iter()
    }

    /// Number of rings.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the set contains no rings.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<P> From<Vec<Ring<P>>> for RingSet<P> {
    fn from(value: Vec<Ring<P>>) -> Self {
        Self(value)
    }
}
