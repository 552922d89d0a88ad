//! Geometry sum type produced by the readers and consumed by the writers and topology graph.

use serde::{Deserialize, Serialize};

use crate::cartesian::{CartesianPoint2d, Rect};
use crate::contour::Contour;
use crate::error::GeoweaveTypesError;
use crate::geometry_type::GeometryHint;
use crate::impls::{Polygon, PointBag, PolygonBag, Polyline, PolylineBag, Ring, RingSet};
use crate::segment::Segment;

/// Any geometry of the kernel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Geom<P> {
    /// Single point.
    Point(P),
    /// Collection of points.
    PointBag(PointBag<P>),
    /// Open chain of points.
    Polyline(Polyline<P>),
    /// Collection of polylines.
    PolylineBag(PolylineBag<P>),
    /// Closed chain of points.
    Ring(Ring<P>),
    /// Set of rings.
    RingSet(RingSet<P>),
    /// Polygon with optional holes.
    Polygon(Polygon<P>),
    /// Collection of polygons.
    PolygonBag(PolygonBag<P>),
    /// Collection of geometries of any kind.
    GeometryBag(GeometryBag<P>),
    /// Line segment.
    Segment(Segment<P>),
}

/// A heterogeneous collection of geometries.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GeometryBag<P>(Vec<Geom<P>>);

impl<P> GeometryBag<P> {
    /// Member geometries.
    pub fn geometries(&self) -> &[Geom<P>] {
        &self.0
    }

    /// Iterates over member geometries.
    pub fn iter(&self) -> impl Iterator<Item = &'_ Geom<P>> {
        self.0.iter()
    }

    /// Number of member geometries.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the bag has no members.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<P> From<Vec<Geom<P>>> for GeometryBag<P> {
    fn from(value: Vec<Geom<P>>) -> Self {
        Self(value)
    }
}

impl<P> Geom<P> {
    /// Kind of the geometry as it would be written to WKT or GeoJSON.
    ///
    /// Rings and segments are written as line strings, and ring sets as multi line strings.
    pub fn hint(&self) -> GeometryHint {
        match self {
            Geom::Point(_) => GeometryHint::Point,
            Geom::PointBag(_) => GeometryHint::MultiPoint,
            Geom::Polyline(_) | Geom::Ring(_) | Geom::Segment(_) => GeometryHint::LineString,
            Geom::PolylineBag(_) | Geom::RingSet(_) => GeometryHint::MultiLineString,
            Geom::Polygon(_) => GeometryHint::Polygon,
            Geom::PolygonBag(_) => GeometryHint::MultiPolygon,
            Geom::GeometryBag(_) => GeometryHint::GeometryCollection,
        }
    }

    /// Returns true if the geometry has no points.
    pub fn is_empty(&self) -> bool {
        match self {
            Geom::Point(_) | Geom::Segment(_) => false,
            Geom::PointBag(v) => v.is_empty(),
            Geom::Polyline(v) => v.is_empty(),
            Geom::PolylineBag(v) => v.iter().all(|l| l.is_empty()),
            Geom::Ring(v) => v.is_empty(),
            Geom::RingSet(v) => v.iter().all(|r| r.is_empty()),
            Geom::Polygon(v) => v.outer.is_empty(),
            Geom::PolygonBag(v) => v.iter().all(|p| p.outer.is_empty()),
            Geom::GeometryBag(v) => v.iter().all(Geom::is_empty),
        }
    }
}

impl<P: CartesianPoint2d> Geom<P> {
    /// Envelope of all points of the geometry. Returns `None` for empty geometries.
    pub fn envelope(&self) -> Option<Rect<P::Num>> {
        match self {
            Geom::Point(p) => Some(Rect::from_point(p)),
            Geom::PointBag(v) => Rect::from_points(v.iter()),
            Geom::Polyline(v) => Rect::from_points(v.iter_points()),
            Geom::PolylineBag(v) => {
                Rect::merge_all(v.iter().filter_map(|l| Rect::from_points(l.iter_points())))
            }
            Geom::Ring(v) => Rect::from_points(v.iter_points()),
            Geom::RingSet(v) => {
                Rect::merge_all(v.iter().filter_map(|r| Rect::from_points(r.iter_points())))
            }
            // Holes are inside the outer ring.
            Geom::Polygon(v) => Rect::from_points(v.outer.iter_points()),
            Geom::PolygonBag(v) => Rect::merge_all(
                v.iter()
                    .filter_map(|p| Rect::from_points(p.outer.iter_points())),
            ),
            Geom::GeometryBag(v) => Rect::merge_all(v.iter().filter_map(Geom::envelope)),
            Geom::Segment(s) => Some(Rect::from_point(&s.0).merge(Rect::from_point(&s.1))),
        }
    }
}

macro_rules! geom_variant {
    ($variant:ident, $ty:ty, $name:literal) => {
        impl<P> From<$ty> for Geom<P> {
            fn from(value: $ty) -> Self {
                Self::$variant(value)
            }
        }

        impl<P> TryFrom<Geom<P>> for $ty {
            type Error = GeoweaveTypesError;

            fn try_from(value: Geom<P>) -> Result<Self, Self::Error> {
                match value {
                    Geom::$variant(v) => Ok(v),
                    other => Err(GeoweaveTypesError::Conversion(format!(
                        "expected {}, got {}",
                        $name,
                        other.hint()
                    ))),
                }
            }
        }
    };
}

geom_variant!(PointBag, PointBag<P>, "point bag");
geom_variant!(Polyline, Polyline<P>, "polyline");
geom_variant!(PolylineBag, PolylineBag<P>, "polyline bag");
geom_variant!(Ring, Ring<P>, "ring");
geom_variant!(RingSet, RingSet<P>, "ring set");
geom_variant!(Polygon, Polygon<P>, "polygon");
geom_variant!(PolygonBag, PolygonBag<P>, "polygon bag");
geom_variant!(GeometryBag, GeometryBag<P>, "geometry bag");
geom_variant!(Segment, Segment<P>, "segment");
