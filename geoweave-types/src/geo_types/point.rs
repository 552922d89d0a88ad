use geo_types::{Coord, CoordNum, Point};

use crate::cartesian::{CartesianNum, CartesianPoint2d, NewCartesianPoint2d};

impl<T: CoordNum + CartesianNum> CartesianPoint2d for Coord<T> {
    type Num = T;

    fn x(&self) -> T {
        self.x
    }

    fn y(&self) -> T {
        self.y
    }
}

impl<T: CoordNum + CartesianNum> NewCartesianPoint2d for Coord<T> {
    fn new(x: T, y: T) -> Self {
        Coord { x, y }
    }
}

impl<T: CoordNum + CartesianNum> CartesianPoint2d for Point<T> {
    type Num = T;

    fn x(&self) -> T {
        Point::x(*self)
    }

    fn y(&self) -> T {
        Point::y(*self)
    }
}

impl<T: CoordNum + CartesianNum> NewCartesianPoint2d for Point<T> {
    fn new(x: T, y: T) -> Self {
        Point::from(Coord { x, y })
    }
}
