use serde::{Deserialize, Serialize};

/// A collection of points.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct PointBag<P>(Vec<P>);

impl<P> PointBag<P> {
    /// Points of the bag.
    pub fn points(&self) -> &[P] {
        &self.0
    }

    /// Iterates over the points.
    pub fn iter(&self) -> impl Iterator<Item = &'_ P> {
        self.0.iter()
    }

    /// Number of points in the bag.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the bag contains no points.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<P> From<Vec<P>> for PointBag<P> {
    fn from(value: Vec<P>) -> Self {
        Self(value)
    }
}

impl<P> From<PointBag<P>> for Vec<P> {
    fn from(value: PointBag<P>) -> Self {
        value.0
    }
}
