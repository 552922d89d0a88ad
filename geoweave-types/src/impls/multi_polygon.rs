use serde::{Deserialize, Serialize};

use crate::impls::polygon::Polygon;

/// A collection of polygons.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct PolygonBag<P> {
    /// Member polygons.
    pub parts: Vec<Polygon<P>>,
}

impl<P> From<Vec<Polygon<P>>> for PolygonBag<P> {
    fn from(parts: Vec<Polygon<P>>) -> Self {
        Self { parts }
    }
}

impl<P> PolygonBag<P> {
    /// Returns reference to the member polygons.
    pub fn parts(&self) -> &[Polygon<P>] {
        &self.parts
    }

    /// Iterates over polygons.
    pub fn iter(&self) -> impl Iterator<Item = &'_ Polygon<P>> {
        self.parts.iter()
    }

    /// Number of polygons.
    pub fn len(&self) -> usize {
        self.parts.len()
    }

    /// Returns true if the bag contains no polygons.
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }
}
