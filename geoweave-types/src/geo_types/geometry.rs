use geo_types::{
    Coord, CoordNum, Geometry, GeometryCollection, Line, LineString, MultiLineString, MultiPoint,
    MultiPolygon, Point,
};

use crate::cartesian::CartesianPoint2d;
use crate::contour::Contour;
use crate::geometry::Geom;
use crate::impls::Polygon;

fn to_coord<T: CoordNum, P: CartesianPoint2d<Num = T>>(p: &P) -> Coord<T> {
    Coord { x: p.x(), y: p.y() }
}

fn to_line_string<T, C>(contour: &C) -> LineString<T>
where
    T: CoordNum,
    C: Contour,
    C::Point: CartesianPoint2d<Num = T>,
{
    LineString::new(contour.iter_points_closing().map(to_coord).collect())
}

fn to_polygon<T, P>(polygon: &Polygon<P>) -> geo_types::Polygon<T>
where
    T: CoordNum,
    P: CartesianPoint2d<Num = T>,
{
    geo_types::Polygon::new(
        to_line_string(&polygon.outer),
        polygon.holes.iter().map(to_line_string).collect(),
    )
}

impl<T, P> From<&Geom<P>> for Geometry<T>
where
    T: CoordNum,
    P: CartesianPoint2d<Num = T>,
{
    fn from(value: &Geom<P>) -> Self {
        match value {
            Geom::Point(p) => Geometry::Point(Point(to_coord(p))),
            Geom::PointBag(v) => Geometry::MultiPoint(MultiPoint::new(
                v.iter().map(|p| Point(to_coord(p))).collect(),
            )),
            Geom::Polyline(v) => Geometry::LineString(to_line_string(v)),
            Geom::PolylineBag(v) => Geometry::MultiLineString(MultiLineString::new(
                v.iter().map(to_line_string).collect(),
            )),
            Geom::Ring(v) => Geometry::LineString(to_line_string(v)),
            Geom::RingSet(v) => Geometry::MultiLineString(MultiLineString::new(
                v.iter().map(to_line_string).collect(),
            )),
            Geom::Polygon(v) => Geometry::Polygon(to_polygon(v)),
            Geom::PolygonBag(v) => {
                Geometry::MultiPolygon(MultiPolygon::new(v.iter().map(to_polygon).collect()))
            }
            Geom::GeometryBag(v) => Geometry::GeometryCollection(GeometryCollection(
                v.iter().map(Geometry::from).collect(),
            )),
            Geom::Segment(s) => Geometry::Line(Line::new(to_coord(&s.0), to_coord(&s.1))),
        }
    }
}

impl<T, P> From<Geom<P>> for Geometry<T>
where
    T: CoordNum,
    P: CartesianPoint2d<Num = T>,
{
    fn from(value: Geom<P>) -> Self {
        Geometry::from(&value)
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;
    use crate::cartesian::Point2;
    use crate::factory::{CartesianFactory, GeometryFactory};
    use crate::geometry::GeometryBag;

    #[test]
    fn ring_is_closed_in_geo_types() {
        let factory = CartesianFactory::<Point2>::new();
        let ring = factory.ring(vec![
            factory.point(0.0, 0.0),
            factory.point(1.0, 0.0),
            factory.point(1.0, 1.0),
        ]);

        let geometry = Geometry::from(Geom::Ring(ring));
        assert_matches!(geometry, Geometry::LineString(line) if line.is_closed() && line.0.len() == 4);
    }

    #[test]
    fn collection() {
        let factory = CartesianFactory::<Point2<i32>>::new();
        let bag = GeometryBag::from(vec![
            Geom::Point(factory.point(1, 2)),
            Geom::Segment(factory.segment(factory.point(0, 0), factory.point(3, 4))),
        ]);

        let Geometry::GeometryCollection(collection) = Geometry::from(Geom::GeometryBag(bag)) else {
            panic!("expected collection");
        };
        assert_eq!(collection.0.len(), 2);
        assert_eq!(collection.0[0], Geometry::Point(Point::new(1, 2)));
        assert_matches!(collection.0[1], Geometry::Line(_));
    }

    #[test]
    fn geo_types_points_in_factory() {
        let factory = CartesianFactory::<Coord<f64>>::new();
        let line = factory.polyline(vec![factory.point(0.0, 0.0), factory.point(2.0, 1.0)]);
        assert_eq!(line[1], Coord { x: 2.0, y: 1.0 });
    }
}
