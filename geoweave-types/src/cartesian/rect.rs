use serde::{Deserialize, Serialize};

use crate::cartesian::traits::{CartesianNum, CartesianPoint2d};

/// Axis-aligned rectangle (envelope) in cartesian coordinates.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rect<N = f64> {
    /// Minimum X.
    pub x_min: N,
    /// Minimum Y.
    pub y_min: N,
    /// Maximum X.
    pub x_max: N,
    /// Maximum Y.
    pub y_max: N,
}

fn lesser<N: PartialOrd>(a: N, b: N) -> N {
    if b < a {
        b
    } else {
        a
    }
}

fn greater<N: PartialOrd>(a: N, b: N) -> N {
    if b > a {
        b
    } else {
        a
    }
}

impl<N: CartesianNum> Rect<N> {
    /// Creates a new rectangle.
    pub fn new(x_min: N, y_min: N, x_max: N, y_max: N) -> Self {
        Self {
            x_min,
            y_min,
            x_max,
            y_max,
        }
    }

    /// Width of the rectangle.
    pub fn width(&self) -> N {
        self.x_max - self.x_min
    }

    /// Height of the rectangle.
    pub fn height(&self) -> N {
        self.y_max - self.y_min
    }

    /// Returns the smallest rectangle containing both `self` and `other`.
    pub fn merge(&self, other: Self) -> Self {
        Self {
            x_min: lesser(self.x_min, other.x_min),
            y_min: lesser(self.y_min, other.y_min),
            x_max: greater(self.x_max, other.x_max),
            y_max: greater(self.y_max, other.y_max),
        }
    }

    /// Zero-sized rectangle at the given point.
    pub fn from_point(p: &impl CartesianPoint2d<Num = N>) -> Self {
        Self::new(p.x(), p.y(), p.x(), p.y())
    }

    /// Envelope of the points. Returns `None` if the iterator is empty.
    pub fn from_points<P: CartesianPoint2d<Num = N>>(
        points: impl IntoIterator<Item = P>,
    ) -> Option<Self> {
        points
            .into_iter()
            .map(|p| Self::from_point(&p))
            .reduce(|acc, rect| acc.merge(rect))
    }

    /// Merges all the rectangles into one. Returns `None` if the iterator is empty.
    pub fn merge_all(rects: impl IntoIterator<Item = Self>) -> Option<Self> {
        rects.into_iter().reduce(|acc, rect| acc.merge(rect))
    }

    /// Returns true if the point is inside the rectangle or on its border.
    pub fn contains(&self, point: &impl CartesianPoint2d<Num = N>) -> bool {
        self.x_min <= point.x()
            && self.x_max >= point.x()
            && self.y_min <= point.y()
            && self.y_max >= point.y()
    }
}
