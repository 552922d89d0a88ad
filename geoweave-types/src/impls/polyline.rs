use serde::{Deserialize, Serialize};

/// Open sequence of points. Simple [`crate::Contour`] implementation.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct Polyline<Point> {
    points: Vec<Point>,
}

impl<Point> Polyline<Point> {
    /// Creates a new polyline.
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// Points of the polyline.
    pub fn points(&self) -> &[Point] {
        &self.points
    }
}

impl<Point> std::ops::Deref for Polyline<Point> {
    type Target = [Point];

    fn deref(&self) -> &Self::Target {
        &self.points
    }
}

impl<P> crate::contour::Contour for Polyline<P> {
    type Point = P;

    fn is_closed(&self) -> bool {
        false
    }

    fn iter_points(&self) -> impl Iterator<Item = &P> {
        self.points.iter()
    }
}

/// Closed sequence of points.
///
/// The closing point is not stored: the last point of a ring is connected to the first one
/// implicitly. Use [`GeometryFactory::ring`](crate::GeometryFactory::ring) to create a ring from a
/// point sequence that repeats the first point at the end.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct Ring<Point> {
    points: Vec<Point>,
}

impl<Point> Ring<Point> {
    /// Creates a new ring. The points are stored as given.
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// Points of the ring, without the closing point.
    pub fn points(&self) -> &[Point] {
        &self.points
    }
}

impl<Point> std::ops::Deref for Ring<Point> {
    type Target = [Point];

    fn deref(&self) -> &Self::Target {
        &self.points
    }
}

impl<P> crate::contour::Contour for Ring<P> {
    type Point = P;

    fn is_closed(&self) -> bool {
        true
    }

    fn iter_points(&self) -> impl Iterator<Item = &P> {
        self.points.iter()
    }
}
