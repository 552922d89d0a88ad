//! Construction of kernel geometries.
//!
//! All the readers of the crate family create geometries only through the [`GeometryFactory`]
//! trait. The factory decides the point type (and so the coordinate numeric type) and the default
//! SRID of the created geometries.

use std::fmt::{Debug, Formatter};
use std::marker::PhantomData;

use crate::cartesian::{strip_closing_point, CartesianPoint2d, NewCartesianPoint2d, Point2};
use crate::geometry::{Geom, GeometryBag};
use crate::impls::{PointBag, Polygon, PolygonBag, Polyline, PolylineBag, Ring, RingSet};
use crate::segment::Segment;

/// SRID assigned to geometries when the source does not specify one and the factory was not
/// configured otherwise.
pub const DEFAULT_SRID: i32 = 0;

/// Numeric type of the coordinates of the points created by a factory.
pub type FactoryNum<F> = <<F as GeometryFactory>::Point as CartesianPoint2d>::Num;

/// Constructor of kernel geometries, parameterized by the point type.
///
/// All methods are pure constructors with default implementations. The only normalization done
/// is in [`GeometryFactory::ring`], which drops a closing point that repeats the first one.
pub trait GeometryFactory {
    /// Point type of the created geometries.
    type Point: NewCartesianPoint2d;

    /// SRID used for geometries that do not declare their own.
    fn srid(&self) -> i32 {
        DEFAULT_SRID
    }

    /// Creates a point from its coordinates.
    fn point(
        &self,
        x: <Self::Point as CartesianPoint2d>::Num,
        y: <Self::Point as CartesianPoint2d>::Num,
    ) -> Self::Point {
        Self::Point::new(x, y)
    }

    /// Creates a point with the same coordinates as the given one.
    fn point_from(
        &self,
        coordinate: &impl CartesianPoint2d<Num = <Self::Point as CartesianPoint2d>::Num>,
    ) -> Self::Point {
        self.point(coordinate.x(), coordinate.y())
    }

    /// Creates a collection of points.
    fn point_bag(&self, points: Vec<Self::Point>) -> PointBag<Self::Point> {
        PointBag::from(points)
    }

    /// Creates an open polyline.
    fn polyline(&self, points: Vec<Self::Point>) -> Polyline<Self::Point> {
        Polyline::new(points)
    }

    /// Creates a collection of polylines.
    fn polyline_bag(&self, lines: Vec<Polyline<Self::Point>>) -> PolylineBag<Self::Point> {
        PolylineBag::from(lines)
    }

    /// Creates a ring. If the last point equals the first one, it is not stored.
    fn ring(&self, mut points: Vec<Self::Point>) -> Ring<Self::Point> {
        strip_closing_point(&mut points);
        Ring::new(points)
    }

    /// Creates a set of rings.
    fn ring_set(&self, rings: Vec<Ring<Self::Point>>) -> RingSet<Self::Point> {
        RingSet::from(rings)
    }

    /// Creates a polygon from its outer ring and holes.
    fn polygon(
        &self,
        outer: Ring<Self::Point>,
        holes: Vec<Ring<Self::Point>>,
    ) -> Polygon<Self::Point> {
        Polygon::new(outer, holes)
    }

    /// Creates a collection of polygons.
    fn polygon_bag(&self, polygons: Vec<Polygon<Self::Point>>) -> PolygonBag<Self::Point> {
        PolygonBag::from(polygons)
    }

    /// Creates a collection of mixed geometries.
    fn geometry_bag(&self, geometries: Vec<Geom<Self::Point>>) -> GeometryBag<Self::Point> {
        GeometryBag::from(geometries)
    }

    /// Creates a segment.
    fn segment(&self, start: Self::Point, end: Self::Point) -> Segment<Self::Point> {
        Segment::new(start, end)
    }
}

/// Default [`GeometryFactory`] implementation creating points of type `P`.
pub struct CartesianFactory<P = Point2> {
    srid: i32,
    point_type: PhantomData<fn() -> P>,
}

impl<P> CartesianFactory<P> {
    /// Creates a new factory with [`DEFAULT_SRID`].
    pub fn new() -> Self {
        Self {
            srid: DEFAULT_SRID,
            point_type: PhantomData,
        }
    }

    /// Sets the SRID assigned to geometries that do not declare their own.
    pub fn with_srid(mut self, srid: i32) -> Self {
        self.srid = srid;
        self
    }
}

impl<P> Default for CartesianFactory<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P> Clone for CartesianFactory<P> {
    fn clone(&self) -> Self {
        Self {
            srid: self.srid,
            point_type: PhantomData,
        }
    }
}

impl<P> Debug for CartesianFactory<P> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CartesianFactory")
            .field("srid", &self.srid)
            .finish()
    }
}

impl<P: NewCartesianPoint2d> GeometryFactory for CartesianFactory<P> {
    type Point = P;

    fn srid(&self) -> i32 {
        self.srid
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ring_drops_closing_point() {
        let factory = CartesianFactory::<Point2>::new();
        let ring = factory.ring(vec![
            factory.point(0.0, 0.0),
            factory.point(4.0, 0.0),
            factory.point(4.0, 4.0),
            factory.point(0.0, 0.0),
        ]);
        assert_eq!(ring.len(), 3);

        let open = factory.ring(vec![factory.point(0.0, 0.0), factory.point(4.0, 0.0)]);
        assert_eq!(open.len(), 2);
    }

    #[test]
    fn srid() {
        assert_eq!(CartesianFactory::<Point2>::new().srid(), DEFAULT_SRID);
        assert_eq!(
            CartesianFactory::<Point2<i32>>::default()
                .with_srid(4326)
                .srid(),
            4326
        );
    }

    #[test]
    fn point_from() {
        let factory = CartesianFactory::<Point2<i32>>::new();
        let point = factory.point_from(&Point2::new(3, 7));
        assert_eq!(point, Point2::new(3, 7));
    }
}
