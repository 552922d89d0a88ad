use std::fmt::Write;

use geoweave_types::cartesian::CartesianPoint2d;
use geoweave_types::impls::Polygon;
use geoweave_types::{Contour, Geom, Polygon as _};
use num_traits::ToPrimitive;

/// Writes geometries as WKT text.
///
/// Rings are written as `LINEARRING` with the closing point repeated, ring sets as
/// `MULTILINESTRING` and segments as two-point `LINESTRING`s. Neither SRID nor extra dimensions
/// are ever written.
///
/// Non-finite coordinates are written as `NaN`, `inf` and `-inf`, which [`WktReader`] reads back.
///
/// [`WktReader`]: super::WktReader
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct WktWriter {
    precision: Option<usize>,
}

impl WktWriter {
    /// Creates a writer that prints coordinates with the shortest exact representation.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of digits after the decimal point. `None` writes the shortest
    /// representation that reads back to the same value.
    pub fn with_precision(mut self, precision: Option<usize>) -> Self {
        self.precision = precision;
        self
    }

    /// Returns WKT text of the geometry.
    pub fn write<P: CartesianPoint2d>(&self, geometry: &Geom<P>) -> String {
        let mut out = String::new();
        // Writing into a string cannot fail.
        let _ = self.write_to(geometry, &mut out);
        out
    }

    /// Writes WKT text of the geometry into `out`.
    pub fn write_to<P: CartesianPoint2d>(
        &self,
        geometry: &Geom<P>,
        out: &mut impl Write,
    ) -> std::fmt::Result {
        match geometry {
            Geom::Point(p) => {
                out.write_str("POINT (")?;
                self.write_point(p, out)?;
                out.write_char(')')
            }
            Geom::PointBag(bag) => {
                out.write_str("MULTIPOINT")?;
                self.write_list(out, bag.iter(), |p, out| {
                    out.write_char('(')?;
                    self.write_point(p, out)?;
                    out.write_char(')')
                })
            }
            Geom::Polyline(line) => {
                out.write_str("LINESTRING")?;
                self.write_contour(line, out)
            }
            Geom::PolylineBag(bag) => {
                out.write_str("MULTILINESTRING")?;
                self.write_list(out, bag.iter(), |line, out| self.write_contour(line, out))
            }
            Geom::Ring(ring) => {
                out.write_str("LINEARRING")?;
                self.write_contour(ring, out)
            }
            Geom::RingSet(set) => {
                out.write_str("MULTILINESTRING")?;
                self.write_list(out, set.iter(), |ring, out| self.write_contour(ring, out))
            }
            Geom::Polygon(polygon) => {
                out.write_str("POLYGON")?;
                self.write_polygon(polygon, out)
            }
            Geom::PolygonBag(bag) => {
                out.write_str("MULTIPOLYGON")?;
                self.write_list(out, bag.iter(), |polygon, out| {
                    self.write_polygon(polygon, out)
                })
            }
            Geom::GeometryBag(bag) => {
                out.write_str("GEOMETRYCOLLECTION")?;
                self.write_list(out, bag.iter(), |member, out| self.write_to(member, out))
            }
            Geom::Segment(segment) => {
                out.write_str("LINESTRING (")?;
                self.write_point(&segment.0, out)?;
                out.write_str(", ")?;
                self.write_point(&segment.1, out)?;
                out.write_char(')')
            }
        }
    }

    /// Writes ` (<item>, <item>)` or ` EMPTY`.
    fn write_list<T, W: Write>(
        &self,
        out: &mut W,
        items: impl Iterator<Item = T>,
        mut write_item: impl FnMut(T, &mut W) -> std::fmt::Result,
    ) -> std::fmt::Result {
        let mut items = items.peekable();
        if items.peek().is_none() {
            return out.write_str(" EMPTY");
        }

        out.write_str(" (")?;
        for (index, item) in items.enumerate() {
            if index > 0 {
                out.write_str(", ")?;
            }
            write_item(item, out)?;
        }
        out.write_char(')')
    }

    fn write_contour<C, W>(&self, contour: &C, out: &mut W) -> std::fmt::Result
    where
        C: Contour,
        C::Point: CartesianPoint2d,
        W: Write,
    {
        self.write_list(out, contour.iter_points_closing(), |p, out| {
            self.write_point(p, out)
        })
    }

    fn write_polygon<P: CartesianPoint2d, W: Write>(
        &self,
        polygon: &Polygon<P>,
        out: &mut W,
    ) -> std::fmt::Result {
        if polygon.outer.is_empty() {
            return out.write_str(" EMPTY");
        }

        self.write_list(
            out,
            polygon.iter_contours(),
            |ring, out| self.write_contour(ring, out),
        )
    }

    fn write_point(&self, point: &impl CartesianPoint2d, out: &mut impl Write) -> std::fmt::Result {
        self.write_number(point.x().to_f64(), out)?;
        out.write_char(' ')?;
        self.write_number(point.y().to_f64(), out)
    }

    fn write_number(&self, value: Option<f64>, out: &mut impl Write) -> std::fmt::Result {
        let value = value.unwrap_or(f64::NAN);
        match self.precision {
            Some(precision) => write!(out, "{value:.precision$}"),
            None => write!(out, "{value}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use geoweave_types::cartesian::Point2;
    use geoweave_types::impls::{PointBag, PolygonBag, Polyline, Ring, RingSet};
    use geoweave_types::{CartesianFactory, GeometryBag, Segment};
    use insta::assert_snapshot;

    use super::*;
    use crate::wkt::WktReader;

    fn square(offset: f64) -> Ring<Point2> {
        Ring::new(vec![
            Point2::new(offset, offset),
            Point2::new(offset + 4.0, offset),
            Point2::new(offset + 4.0, offset + 4.0),
            Point2::new(offset, offset + 4.0),
        ])
    }

    #[test]
    fn simple_geometries() {
        let writer = WktWriter::new();
        assert_snapshot!(writer.write(&Geom::Point(Point2::new(1.0, -2.5))), @"POINT (1 -2.5)");
        assert_snapshot!(
            writer.write(&Geom::Polyline(Polyline::new(vec![Point2::new(0.0, 0.0), Point2::new(1.0, 1.0)]))),
            @"LINESTRING (0 0, 1 1)"
        );
        assert_snapshot!(
            writer.write(&Geom::Ring(square(0.0))),
            @"LINEARRING (0 0, 4 0, 4 4, 0 4, 0 0)"
        );
        assert_snapshot!(
            writer.write(&Geom::Segment(Segment(Point2::new(0.0, 0.0), Point2::new(3.0, 4.0)))),
            @"LINESTRING (0 0, 3 4)"
        );
    }

    #[test]
    fn polygons() {
        let writer = WktWriter::new();
        let polygon = Polygon::new(
            square(0.0),
            vec![Ring::new(vec![
                Point2::new(1.0, 1.0),
                Point2::new(2.0, 1.0),
                Point2::new(2.0, 2.0),
            ])],
        );
        assert_snapshot!(
            writer.write(&Geom::Polygon(polygon)),
            @"POLYGON ((0 0, 4 0, 4 4, 0 4, 0 0), (1 1, 2 1, 2 2, 1 1))"
        );

        let bag = PolygonBag::from(vec![Polygon::from(square(0.0)), Polygon::from(square(10.0))]);
        assert_snapshot!(
            writer.write(&Geom::PolygonBag(bag)),
            @"MULTIPOLYGON (((0 0, 4 0, 4 4, 0 4, 0 0)), ((10 10, 14 10, 14 14, 10 14, 10 10)))"
        );
    }

    #[test]
    fn collections() {
        let writer = WktWriter::new();
        let points = PointBag::from(vec![Point2::new(1.0, 2.0), Point2::new(3.0, 4.0)]);
        assert_snapshot!(writer.write(&Geom::PointBag(points.clone())), @"MULTIPOINT ((1 2), (3 4))");
        assert_snapshot!(
            writer.write(&Geom::RingSet(RingSet::from(vec![square(0.0)]))),
            @"MULTILINESTRING ((0 0, 4 0, 4 4, 0 4, 0 0))"
        );

        let bag = GeometryBag::from(vec![
            Geom::Point(Point2::new(1.0, 2.0)),
            Geom::PointBag(points),
        ]);
        assert_snapshot!(
            writer.write(&Geom::GeometryBag(bag)),
            @"GEOMETRYCOLLECTION (POINT (1 2), MULTIPOINT ((1 2), (3 4)))"
        );
    }

    #[test]
    fn empty_geometries() {
        let writer = WktWriter::new();
        assert_snapshot!(writer.write(&Geom::<Point2>::PointBag(PointBag::from(vec![]))), @"MULTIPOINT EMPTY");
        assert_snapshot!(writer.write(&Geom::<Point2>::Polyline(Polyline::new(vec![]))), @"LINESTRING EMPTY");
        assert_snapshot!(writer.write(&Geom::<Point2>::Polygon(Polygon::default())), @"POLYGON EMPTY");
        assert_snapshot!(
            writer.write(&Geom::<Point2>::GeometryBag(GeometryBag::default())),
            @"GEOMETRYCOLLECTION EMPTY"
        );
    }

    #[test]
    fn precision() {
        let writer = WktWriter::new().with_precision(Some(2));
        assert_snapshot!(writer.write(&Geom::Point(Point2::new(1.0, 1.0 / 3.0))), @"POINT (1.00 0.33)");

        let writer = WktWriter::new();
        assert_snapshot!(writer.write(&Geom::Point(Point2::new(3, 4))), @"POINT (3 4)");
    }

    #[test]
    fn non_finite_coordinates() {
        let writer = WktWriter::new();
        let point = Geom::Point(Point2::new(f64::INFINITY, f64::NEG_INFINITY));
        let text = writer.write(&point);
        assert_snapshot!(text, @"POINT (inf -inf)");

        let reader = WktReader::new(CartesianFactory::<Point2>::new());
        assert_eq!(reader.read(&text), Ok(Some(point)));

        let text = writer.write(&Geom::Point(Point2::new(f64::NAN, 1.0)));
        assert_snapshot!(text, @"POINT (NaN 1)");
        assert!(matches!(
            reader.read(&text),
            Ok(Some(Geom::Point(p))) if p.x().is_nan() && p.y() == 1.0
        ));
    }
}
