use std::cmp::Ordering;

use num_traits::{Bounded, FromPrimitive, Num, ToPrimitive};

/// Numeric type that can be used as a coordinate of a [`CartesianPoint2d`].
///
/// This trait is auto-implemented for all types satisfying its bounds (`f64`, `f32`, `i32` etc).
pub trait CartesianNum: Num + Copy + PartialOrd + Bounded + FromPrimitive + ToPrimitive {}

impl<T> CartesianNum for T where T: Num + Copy + PartialOrd + Bounded + FromPrimitive + ToPrimitive {}

/// A point in 2d cartesian coordinates.
pub trait CartesianPoint2d {
    /// Numeric type of the coordinates.
    type Num: CartesianNum;

    /// X coordinate.
    fn x(&self) -> Self::Num;
    /// Y coordinate.
    fn y(&self) -> Self::Num;

    /// Returns true if both coordinates of the points are exactly equal.
    ///
    /// Points with `NaN` coordinates are never equal to anything, including themselves.
    fn equal(&self, other: &impl CartesianPoint2d<Num = Self::Num>) -> bool {
        self.x() == other.x() && self.y() == other.y()
    }

    /// Lexicographic order of the points: first by X, then by Y.
    ///
    /// The order is total: `NaN` coordinates are placed after all other values and are equal to
    /// each other.
    fn cmp_coordinates(&self, other: &impl CartesianPoint2d<Num = Self::Num>) -> Ordering {
        cmp_num(self.x(), other.x()).then_with(|| cmp_num(self.y(), other.y()))
    }
}

impl<T: CartesianPoint2d> CartesianPoint2d for &T {
    type Num = T::Num;

    fn x(&self) -> Self::Num {
        (*self).x()
    }

    fn y(&self) -> Self::Num {
        (*self).y()
    }
}

/// Point type that can be created from its coordinates.
pub trait NewCartesianPoint2d: CartesianPoint2d + Sized {
    /// Creates a new point.
    fn new(x: Self::Num, y: Self::Num) -> Self;
}

#[allow(clippy::eq_op)]
fn cmp_num<N: PartialOrd>(a: N, b: N) -> Ordering {
    match a.partial_cmp(&b) {
        Some(ordering) => ordering,
        // Only NaN-like values are unordered, and they are the only ones not equal to themselves.
        None => match (a != a, b != b) {
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            _ => Ordering::Equal,
        },
    }
}
