use crate::cartesian::CartesianPoint2d;

/// Collapses every run of consecutive equal points into a single point.
///
/// Only adjacent duplicates are removed: `A, B, A` stays unchanged.
pub fn dedup_adjacent<P: CartesianPoint2d>(points: &mut Vec<P>) {
    points.dedup_by(|next, prev| prev.equal(&*next));
}

/// Removes the last point of the sequence if it is equal to the first one.
///
/// Returns true if the point was removed. A single point is never removed.
pub fn strip_closing_point<P: CartesianPoint2d>(points: &mut Vec<P>) -> bool {
    let closes = match (points.first(), points.last()) {
        (Some(first), Some(last)) if points.len() > 1 => first.equal(last),
        _ => false,
    };

    if closes {
        points.pop();
    }

    closes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cartesian::Point2;

    fn points(coords: &[(f64, f64)]) -> Vec<Point2> {
        coords.iter().map(|&(x, y)| Point2::new(x, y)).collect()
    }

    #[test]
    fn dedup_collapses_runs() {
        let mut line = points(&[(0.0, 0.0), (1.0, 1.0), (1.0, 1.0), (1.0, 1.0), (2.0, 2.0)]);
        dedup_adjacent(&mut line);
        assert_eq!(line, points(&[(0.0, 0.0), (1.0, 1.0), (2.0, 2.0)]));
    }

    #[test]
    fn dedup_keeps_non_adjacent() {
        let mut line = points(&[(0.0, 0.0), (1.0, 1.0), (0.0, 0.0)]);
        dedup_adjacent(&mut line);
        assert_eq!(line.len(), 3);
    }

    #[test]
    fn strip_closing() {
        let mut ring = points(&[(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 0.0)]);
        assert!(strip_closing_point(&mut ring));
        assert_eq!(ring.len(), 3);
        assert!(!strip_closing_point(&mut ring));

        let mut single = points(&[(1.0, 1.0)]);
        assert!(!strip_closing_point(&mut single));
        assert_eq!(single.len(), 1);

        let mut empty: Vec<Point2> = vec![];
        assert!(!strip_closing_point(&mut empty));
    }
}
