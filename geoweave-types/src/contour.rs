//! Point sequences.
//!
//! A contour is either open, like a [`Polyline`](crate::impls::Polyline), or closed, like a
//! [`Ring`](crate::impls::Ring), where the last point connects back to the first one.
//!
//! WKT and GeoJSON mark a line string as closed by repeating the first position at the end. Kernel
//! contours never store that repeated point: readers drop it, and writers put it back through
//! [`Contour::iter_points_closing`].

use crate::segment::Segment;

/// Sequence of points, open or closed.
pub trait Contour {
    /// Point type.
    type Point;

    /// Returns true if the last point is connected to the first one.
    fn is_closed(&self) -> bool;

    /// Stored points. The first point is not repeated at the end of a closed contour.
    fn iter_points(&self) -> impl Iterator<Item = &'_ Self::Point>;

    /// Points with the first point repeated at the end if the contour is closed.
    fn iter_points_closing(&self) -> impl Iterator<Item = &Self::Point> {
        let closing = if self.is_closed() {
            self.iter_points().next()
        } else {
            None
        };

        self.iter_points().chain(closing)
    }

    /// Segments between consecutive points, including the closing segment of a closed contour.
    fn iter_segments(&self) -> impl Iterator<Item = Segment<&'_ Self::Point>> {
        let mut points = self.iter_points_closing();
        let first = points.next();
        points.scan(first, |previous, point| {
            let segment = Segment((*previous)?, point);
            *previous = Some(point);
            Some(segment)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cartesian::Point2;
    use crate::impls::{Polyline, Ring};

    #[test]
    fn iter_points_closing() {
        let line = Polyline::new(vec![Point2::new(0.0, 0.0), Point2::new(1.0, 1.0)]);
        assert_eq!(line.iter_points_closing().count(), 2);
        assert_eq!(
            line.iter_points_closing().last(),
            Some(&Point2::new(1.0, 1.0))
        );

        let ring = Ring::new(vec![Point2::new(0.0, 0.0), Point2::new(1.0, 1.0)]);
        assert_eq!(ring.iter_points_closing().count(), 3);
        assert_eq!(
            ring.iter_points_closing().last(),
            Some(&Point2::new(0.0, 0.0))
        );
    }

    #[test]
    fn iter_segments() {
        let line = Polyline::new(vec![Point2::new(0.0, 0.0)]);
        assert_eq!(line.iter_segments().count(), 0);

        let line = Polyline::new(vec![Point2::new(0.0, 0.0), Point2::new(1.0, 1.0)]);
        assert_eq!(line.iter_segments().count(), 1);
        assert_eq!(
            line.iter_segments().last(),
            Some(Segment(&Point2::new(0.0, 0.0), &Point2::new(1.0, 1.0)))
        );

        let ring = Ring::new(vec![Point2::new(0.0, 0.0), Point2::new(1.0, 1.0)]);
        assert_eq!(ring.iter_segments().count(), 2);
        assert_eq!(
            ring.iter_segments().last(),
            Some(Segment(&Point2::new(1.0, 1.0), &Point2::new(0.0, 0.0)))
        );
    }
}
