use geoweave_types::cartesian::CartesianPoint2d;

use super::arena::NodeArena;
use super::node::{Node, NodeId, ParentShape};
use super::node_front::NodeFront;
use super::planar_nodes::PlanarNodes;

/// Graph of loose points: one node per point, no edges.
#[derive(Debug, Clone)]
pub struct PlanarPointGraph<P> {
    nodes: NodeArena<P>,
}

impl<P> Default for PlanarPointGraph<P> {
    fn default() -> Self {
        Self {
            nodes: NodeArena::default(),
        }
    }
}

impl<P> PlanarPointGraph<P> {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a point.
    pub fn add(&mut self, point: P) {
        let ordinal = self.nodes.len();
        self.nodes.push(point, ParentShape::Point(ordinal));
    }

    /// Adds a point and pushes the id of its node into `nodes`.
    pub fn add_collect(&mut self, point: P, nodes: &mut Vec<NodeId>) {
        let ordinal = self.nodes.len();
        nodes.push(self.nodes.push(point, ParentShape::Point(ordinal)));
    }

    /// Node by id.
    pub fn node(&self, id: NodeId) -> Option<&Node<P>> {
        self.nodes.get(id)
    }

    /// Nodes in creation order.
    pub fn nodes(&self) -> &[Node<P>] {
        self.nodes.nodes()
    }
}

impl<P: CartesianPoint2d> PlanarNodes for PlanarPointGraph<P> {
    type Point = P;
    type Handle = NodeId;

    fn close(&mut self) {
        self.nodes.close();
    }

    fn open(&mut self) {
        self.nodes.open();
    }

    fn is_closed(&self) -> bool {
        self.nodes.is_closed()
    }

    fn node_count(&self) -> usize {
        self.nodes.len()
    }

    fn node_front(&mut self) -> NodeFront<'_, P> {
        self.nodes.close();
        self.nodes.front()
    }
}

#[cfg(test)]
mod tests {
    use geoweave_types::cartesian::Point2;

    use super::*;

    #[test]
    fn sorted_enumeration() {
        let mut graph = PlanarPointGraph::new();
        graph.add(Point2::new(2.0, 2.0));
        graph.add(Point2::new(1.0, 1.0));
        graph.add(Point2::new(1.0, 1.0));
        assert!(!graph.is_closed());

        let order: Vec<_> = graph.node_front().map(|(id, _)| id.index()).collect();
        assert_eq!(order, vec![1, 2, 0]);
        assert!(graph.is_closed());

        let mut front = graph.node_front();
        let run = front.take_coincident();
        assert_eq!(run.len(), 2);
        assert!(run.iter().all(|(_, node)| *node.point() == Point2::new(1.0, 1.0)));
        assert_eq!(front.take_coincident().len(), 1);
        assert!(front.take_coincident().is_empty());
    }

    #[test]
    fn open_keeps_order() {
        let mut graph = PlanarPointGraph::new();
        graph.add(Point2::new(5.0, 0.0));
        graph.add(Point2::new(0.0, 5.0));
        graph.close();
        graph.open();
        assert!(!graph.is_closed());

        let mut collected = vec![];
        graph.add_collect(Point2::new(-1.0, 0.0), &mut collected);
        assert_eq!(collected.len(), 1);
        assert_eq!(
            graph.node(collected[0]).map(|n| n.parent()),
            Some(ParentShape::Point(2))
        );

        let points: Vec<_> = graph.node_front().map(|(_, n)| *n.point()).collect();
        assert_eq!(
            points,
            vec![
                Point2::new(-1.0, 0.0),
                Point2::new(0.0, 5.0),
                Point2::new(5.0, 0.0)
            ]
        );
    }

    #[test]
    fn cursor() {
        let mut graph = PlanarPointGraph::new();
        graph.add(Point2::new(1.0, 0.0));
        graph.add(Point2::new(0.0, 0.0));

        let mut front = graph.node_front();
        assert_eq!(front.len(), 2);
        assert_eq!(front.current().map(|(id, _)| id), Some(NodeId::new(1)));
        assert!(front.move_next());
        assert_eq!(front.current().map(|(id, _)| id), Some(NodeId::new(0)));
        assert!(!front.move_next());
        assert!(front.current().is_none());
        assert!(!front.move_next());

        front.reset();
        assert_eq!(front.count(), 2);
    }
}
