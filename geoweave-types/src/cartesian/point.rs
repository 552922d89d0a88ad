use approx::AbsDiffEq;
use serde::{Deserialize, Serialize};

use crate::cartesian::traits::{CartesianNum, CartesianPoint2d, NewCartesianPoint2d};

/// Point of the plane, the default point type of readers.
///
/// Coordinates are accessed through [`CartesianPoint2d`].
#[derive(Debug, Default, Copy, Clone, PartialEq, Hash, Serialize, Deserialize)]
pub struct Point2<Num = f64> {
    x: Num,
    y: Num,
}

impl<Num> Point2<Num> {
    /// Point at `(x, y)`.
    pub const fn new(x: Num, y: Num) -> Self {
        Self { x, y }
    }

    /// `[x, y]`, the GeoJSON position order.
    pub fn coords(&self) -> [Num; 2]
    where
        Num: Copy,
    {
        [self.x, self.y]
    }
}

impl<Num> AbsDiffEq for Point2<Num>
where
    Num: AbsDiffEq<Num, Epsilon = Num> + Copy,
{
    type Epsilon = Num;

    fn default_epsilon() -> Self::Epsilon {
        Num::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.x.abs_diff_eq(&other.x, epsilon) && self.y.abs_diff_eq(&other.y, epsilon)
    }
}

impl<Num: CartesianNum> CartesianPoint2d for Point2<Num> {
    type Num = Num;

    fn x(&self) -> Num {
        self.x
    }

    fn y(&self) -> Num {
        self.y
    }
}

impl<Num: CartesianNum> NewCartesianPoint2d for Point2<Num> {
    fn new(x: Num, y: Num) -> Self {
        Self::new(x, y)
    }
}
