mod cartesian_point;

pub use cartesian_point::{CartesianNum, CartesianPoint2d, NewCartesianPoint2d};
