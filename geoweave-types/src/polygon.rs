use crate::contour::Contour;
use crate::segment::Segment;

/// Area shape bounded by an outer contour, with any number of inner contours cut out of it.
pub trait Polygon {
    /// Type of the boundary contours.
    type Contour: Contour;

    /// Boundary of the shape.
    fn outer_contour(&self) -> &Self::Contour;
    /// Boundaries of the holes.
    fn inner_contours(&self) -> impl Iterator<Item = &'_ Self::Contour>;

    /// Outer contour followed by the holes.
    fn iter_contours(&self) -> impl Iterator<Item = &'_ Self::Contour> {
        std::iter::once(self.outer_contour()).chain(self.inner_contours())
    }

    /// Number of contours, counting the outer one.
    fn contour_count(&self) -> usize {
        1 + self.inner_contours().count()
    }

    /// Segments of all contours, outer contour first.
    fn iter_segments(
        &self,
    ) -> impl Iterator<Item = Segment<&'_ <Self::Contour as Contour>::Point>> {
        self.iter_contours().flat_map(|contour| contour.iter_segments())
    }
}
