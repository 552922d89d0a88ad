use geo_types::{Coord, CoordNum, LineString};

use crate::contour::Contour;
use crate::polygon::Polygon;

/// A closed line string repeats its first coordinate at the end. The repeated coordinate is not
/// yielded, the same as for [`Ring`](crate::impls::Ring).
impl<T: CoordNum> Contour for LineString<T> {
    type Point = Coord<T>;

    fn is_closed(&self) -> bool {
        LineString::is_closed(self)
    }

    fn iter_points(&self) -> impl Iterator<Item = &'_ Coord<T>> {
        let points = match self.0.split_last() {
            Some((_, open)) if self.is_closed() => open,
            _ => &self.0[..],
        };
        points.iter()
    }
}

impl<T: CoordNum> Polygon for geo_types::Polygon<T> {
    type Contour = LineString<T>;

    fn outer_contour(&self) -> &LineString<T> {
        self.exterior()
    }

    fn inner_contours(&self) -> impl Iterator<Item = &'_ LineString<T>> {
        self.interiors().iter()
    }
}
