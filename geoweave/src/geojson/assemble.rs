use geoweave_types::impls::{PointBag, Polygon, PolygonBag, Polyline, PolylineBag, Ring};
use geoweave_types::{FactoryNum, GeometryFactory, GeometryHint, Geom};
use log::debug;
use num_traits::FromPrimitive;

use super::position::Position;

/// Builds kernel geometries from position trees.
///
/// Assembly never fails loudly: any structural mismatch (wrong nesting, too few points, non-finite
/// coordinates, coordinates not representable by the factory's numeric type) gives `None` and no
/// partial result.
#[derive(Debug, Clone, Copy)]
pub struct GeometryAssembler<'a, F> {
    factory: &'a F,
}

impl<'a, F: GeometryFactory> GeometryAssembler<'a, F> {
    /// Creates an assembler constructing geometries with the given factory.
    pub fn new(factory: &'a F) -> Self {
        Self { factory }
    }

    /// Assembles a geometry of the kind given by the hint of the root position.
    ///
    /// Collections are not represented by position trees, so `GeometryCollection` and `Unknown`
    /// hints always give `None`.
    pub fn assemble(&self, position: &Position) -> Option<Geom<F::Point>> {
        let hint = position.hint();
        let geometry = match hint {
            GeometryHint::Point => self.point(position).map(Geom::Point),
            GeometryHint::MultiPoint => self.multi_point(position).map(Geom::PointBag),
            GeometryHint::LineString => self.line_string(position).map(Geom::Polyline),
            GeometryHint::MultiLineString => {
                self.multi_line_string(position).map(Geom::PolylineBag)
            }
            GeometryHint::Polygon => self.polygon(position).map(Geom::Polygon),
            GeometryHint::MultiPolygon => self.multi_polygon(position).map(Geom::PolygonBag),
            GeometryHint::GeometryCollection | GeometryHint::Unknown => None,
        };

        if geometry.is_none() {
            debug!("Coordinates do not form a valid {hint} geometry");
        }

        geometry
    }

    /// A leaf with finite coordinates.
    pub fn point(&self, position: &Position) -> Option<F::Point> {
        if !position.is_finite_coordinate() {
            return None;
        }

        Some(self.factory.point(
            FactoryNum::<F>::from_f64(position.x())?,
            FactoryNum::<F>::from_f64(position.y())?,
        ))
    }

    /// A set of at least two points.
    pub fn multi_point(&self, position: &Position) -> Option<PointBag<F::Point>> {
        Some(self.factory.point_bag(self.points(position, 2)?))
    }

    /// A set of at least two points.
    pub fn line_string(&self, position: &Position) -> Option<Polyline<F::Point>> {
        Some(self.factory.polyline(self.points(position, 2)?))
    }

    /// A non-empty set of valid line strings.
    pub fn multi_line_string(&self, position: &Position) -> Option<PolylineBag<F::Point>> {
        let lines = self
            .members(position)?
            .iter()
            .map(|line| self.line_string(line))
            .collect::<Option<Vec<_>>>()?;

        Some(self.factory.polyline_bag(lines))
    }

    /// A non-empty set of rings, the first one being the outer ring and the rest holes.
    pub fn polygon(&self, position: &Position) -> Option<Polygon<F::Point>> {
        let (outer, holes) = self.members(position)?.split_first()?;
        let outer = self.ring(outer)?;
        let holes = holes
            .iter()
            .map(|hole| self.ring(hole))
            .collect::<Option<Vec<_>>>()?;

        Some(self.factory.polygon(outer, holes))
    }

    /// A non-empty set of valid polygons.
    pub fn multi_polygon(&self, position: &Position) -> Option<PolygonBag<F::Point>> {
        let polygons = self
            .members(position)?
            .iter()
            .map(|polygon| self.polygon(polygon))
            .collect::<Option<Vec<_>>>()?;

        Some(self.factory.polygon_bag(polygons))
    }

    fn ring(&self, position: &Position) -> Option<Ring<F::Point>> {
        Some(self.factory.ring(self.points(position, 3)?))
    }

    fn members<'p>(&self, position: &'p Position) -> Option<&'p [Position]> {
        let children = position.children();
        (position.is_set() && !children.is_empty()).then_some(children)
    }

    fn points(&self, position: &Position, min_count: usize) -> Option<Vec<F::Point>> {
        if !position.is_set() || position.leaf_count() < min_count {
            return None;
        }

        position
            .children()
            .iter()
            .map(|child| self.point(child))
            .collect()
    }
}
