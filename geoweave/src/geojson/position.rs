use geoweave_types::cartesian::Rect;
use geoweave_types::GeometryHint;

/// Node of the coordinate tree extracted from a GeoJSON `coordinates` member.
///
/// A position is either a coordinate leaf or a [`PositionSet`] of child positions. The depth of the
/// tree follows the nesting of the source arrays: a polygon is a set of rings, each ring a set of
/// leaves.
#[derive(Debug, Clone, PartialEq)]
pub enum Position {
    /// Single coordinate.
    Coordinate {
        /// X coordinate as read, can be non-finite.
        x: f64,
        /// Y coordinate as read, can be non-finite.
        y: f64,
        /// Kind of geometry the coordinate belongs to.
        hint: GeometryHint,
    },
    /// Ordered set of child positions.
    Set(PositionSet),
}

/// Container node of the position tree.
#[derive(Debug, Clone, PartialEq)]
pub struct PositionSet {
    hint: GeometryHint,
    children: Vec<Position>,
}

impl PositionSet {
    /// Creates a new set.
    pub fn new(hint: GeometryHint, children: Vec<Position>) -> Self {
        Self { hint, children }
    }

    /// Geometry kind hint.
    pub fn hint(&self) -> GeometryHint {
        self.hint
    }

    /// Child positions.
    pub fn children(&self) -> &[Position] {
        &self.children
    }
}

impl Position {
    /// Creates a coordinate leaf.
    pub fn coordinate(x: f64, y: f64, hint: GeometryHint) -> Self {
        Self::Coordinate { x, y, hint }
    }

    /// Creates a set node.
    pub fn set(hint: GeometryHint, children: Vec<Position>) -> Self {
        Self::Set(PositionSet::new(hint, children))
    }

    /// X coordinate of a leaf. `NaN` for sets.
    pub fn x(&self) -> f64 {
        match self {
            Self::Coordinate { x, .. } => *x,
            Self::Set(_) => f64::NAN,
        }
    }

    /// Y coordinate of a leaf. `NaN` for sets.
    pub fn y(&self) -> f64 {
        match self {
            Self::Coordinate { y, .. } => *y,
            Self::Set(_) => f64::NAN,
        }
    }

    /// Geometry kind hint of the node.
    pub fn hint(&self) -> GeometryHint {
        match self {
            Self::Coordinate { hint, .. } => *hint,
            Self::Set(set) => set.hint,
        }
    }

    /// Returns true if the node is a set.
    pub fn is_set(&self) -> bool {
        matches!(self, Self::Set(_))
    }

    /// Returns true if the node is a leaf with finite coordinates.
    pub fn is_finite_coordinate(&self) -> bool {
        match self {
            Self::Coordinate { x, y, .. } => x.is_finite() && y.is_finite(),
            Self::Set(_) => false,
        }
    }

    /// Children of a set. Empty for leaves.
    pub fn children(&self) -> &[Position] {
        match self {
            Self::Coordinate { .. } => &[],
            Self::Set(set) => &set.children,
        }
    }

    /// Number of direct children that are leaves.
    pub fn leaf_count(&self) -> usize {
        self.children().iter().filter(|c| !c.is_set()).count()
    }

    /// Nesting depth: 0 for a leaf, 1 for a set of leaves etc. An empty set has depth 1.
    pub fn depth(&self) -> usize {
        match self {
            Self::Coordinate { .. } => 0,
            Self::Set(set) => 1 + set.children.iter().map(Position::depth).max().unwrap_or(0),
        }
    }

    /// Envelope of all finite leaves of the tree.
    pub fn envelope(&self) -> Option<Rect> {
        match self {
            Self::Coordinate { x, y, .. } => {
                (x.is_finite() && y.is_finite()).then(|| Rect::new(*x, *y, *x, *y))
            }
            Self::Set(set) => Rect::merge_all(set.children.iter().filter_map(Position::envelope)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ring() -> Position {
        Position::set(
            GeometryHint::Polygon,
            vec![
                Position::coordinate(0.0, 0.0, GeometryHint::Polygon),
                Position::coordinate(4.0, 0.0, GeometryHint::Polygon),
                Position::coordinate(4.0, 3.0, GeometryHint::Polygon),
                Position::coordinate(f64::NAN, 10.0, GeometryHint::Polygon),
            ],
        )
    }

    #[test]
    fn set_has_no_coordinates() {
        let set = ring();
        assert!(set.is_set());
        assert!(set.x().is_nan() && set.y().is_nan());
        assert_eq!(set.leaf_count(), 4);
        assert_eq!(set.children()[1].x(), 4.0);
        assert!(!set.children()[3].is_finite_coordinate());
    }

    #[test]
    fn depth() {
        let polygon = Position::set(GeometryHint::Polygon, vec![ring(), ring()]);
        assert_eq!(polygon.depth(), 2);
        assert_eq!(polygon.leaf_count(), 0);
        assert_eq!(Position::set(GeometryHint::LineString, vec![]).depth(), 1);
        assert_eq!(Position::coordinate(1.0, 1.0, GeometryHint::Point).depth(), 0);
    }

    #[test]
    fn envelope_skips_non_finite() {
        let polygon = Position::set(GeometryHint::Polygon, vec![ring()]);
        assert_eq!(polygon.envelope(), Some(Rect::new(0.0, 0.0, 4.0, 3.0)));
        assert_eq!(Position::set(GeometryHint::Polygon, vec![]).envelope(), None);
    }
}
