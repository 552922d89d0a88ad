use geoweave_types::cartesian::CartesianPoint2d;
use geoweave_types::Segment;
use log::trace;

use super::arena::{EdgeArena, NodeArena};
use super::edge::{Edge, EdgeId};
use super::node::{Node, NodeId, ParentShape};
use super::node_front::NodeFront;
use super::planar_nodes::PlanarNodes;

/// Graph of independent segments: two nodes and one unlinked edge per segment.
#[derive(Debug, Clone)]
pub struct PlanarSegmentGraph<P> {
    nodes: NodeArena<P>,
    edges: EdgeArena,
}

impl<P> Default for PlanarSegmentGraph<P> {
    fn default() -> Self {
        Self {
            nodes: NodeArena::default(),
            edges: EdgeArena::default(),
        }
    }
}

impl<P: CartesianPoint2d> PlanarSegmentGraph<P> {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a segment. Zero-length segments are ignored.
    pub fn add(&mut self, segment: Segment<P>) {
        self.add_collect(segment, &mut vec![], &mut vec![]);
    }

    /// Adds a segment and pushes the ids of the created node and edge into the collectors.
    pub fn add_collect(
        &mut self,
        segment: Segment<P>,
        nodes: &mut Vec<NodeId>,
        edges: &mut Vec<EdgeId>,
    ) {
        if segment.is_degenerate() {
            trace!("Zero-length segment is not added to the graph");
            return;
        }

        let parent = ParentShape::Segment(self.edges.len());
        let Segment(a, b) = segment;
        let start = self.nodes.push(a, parent);
        let end = self.nodes.push(b, parent);
        let edge = self.edges.push(&mut self.nodes, start, end, None);

        nodes.extend([start, end]);
        edges.push(edge);
    }
}

impl<P> PlanarSegmentGraph<P> {
    /// Node by id.
    pub fn node(&self, id: NodeId) -> Option<&Node<P>> {
        self.nodes.get(id)
    }

    /// Nodes in creation order.
    pub fn nodes(&self) -> &[Node<P>] {
        self.nodes.nodes()
    }

    /// Edge by id.
    pub fn edge(&self, id: EdgeId) -> Option<&Edge> {
        self.edges.get(id)
    }

    /// Edges in creation order, one per segment.
    pub fn edges(&self) -> &[Edge] {
        self.edges.edges()
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}

impl<P: CartesianPoint2d> PlanarNodes for PlanarSegmentGraph<P> {
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
    fn segments() {
        let mut graph = PlanarSegmentGraph::new();
        graph.add(Segment(Point2::new(0.0, 0.0), Point2::new(2.0, 0.0)));
        graph.add(Segment(Point2::new(1.0, 1.0), Point2::new(1.0, 1.0)));

        let (mut nodes, mut edges) = (vec![], vec![]);
        graph.add_collect(
            Segment(Point2::new(2.0, 0.0), Point2::new(2.0, 3.0)),
            &mut nodes,
            &mut edges,
        );

        assert_eq!(graph.node_count(), 4);
        assert_eq!(graph.edge_count(), 2);
        assert_eq!(nodes, vec![NodeId::new(2), NodeId::new(3)]);
        assert_eq!(edges, vec![EdgeId::new(1)]);

        let edge = graph.edge(edges[0]).copied().expect("edge exists");
        assert_eq!((edge.start(), edge.end()), (nodes[0], nodes[1]));
        assert_eq!((edge.next(), edge.previous()), (None, None));
        assert_eq!(
            graph.node(nodes[1]).map(|n| n.parent()),
            Some(ParentShape::Segment(1))
        );

        let coincident: Vec<_> = graph
            .node_front()
            .filter(|(_, node)| *node.point() == Point2::new(2.0, 0.0))
            .map(|(id, _)| id.index())
            .collect();
        assert_eq!(coincident, vec![1, 2]);
    }
}
