use geoweave_types::cartesian::CartesianPoint2d;

use super::edge::{Edge, EdgeId};
use super::node::{Node, NodeId, ParentShape};
use super::node_front::NodeFront;

/// Nodes of one graph in creation order, plus their coordinate order.
///
/// Sorting a permutation instead of the nodes keeps [`NodeId`]s stored in edges valid.
#[derive(Debug, Clone)]
pub(crate) struct NodeArena<P> {
    nodes: Vec<Node<P>>,
    order: Vec<NodeId>,
    closed: bool,
}

impl<P> Default for NodeArena<P> {
    fn default() -> Self {
        Self {
            nodes: vec![],
            order: vec![],
            closed: false,
        }
    }
}

impl<P> NodeArena<P> {
    /// Adding a node to a closed arena opens it.
    pub(crate) fn push(&mut self, point: P, parent: ParentShape) -> NodeId {
        let id = NodeId::new(self.nodes.len());
        self.nodes.push(Node::new(point, parent));
        self.order.push(id);
        self.closed = false;
        id
    }

    pub(crate) fn get(&self, id: NodeId) -> Option<&Node<P>> {
        self.nodes.get(id.index())
    }

    pub(crate) fn attach(&mut self, id: NodeId, edge: EdgeId) {
        if let Some(node) = self.nodes.get_mut(id.index()) {
            node.attach(edge);
        }
    }

    pub(crate) fn nodes(&self) -> &[Node<P>] {
        &self.nodes
    }

    pub(crate) fn len(&self) -> usize {
        self.nodes.len()
    }

    pub(crate) fn is_closed(&self) -> bool {
        self.closed
    }

    pub(crate) fn open(&mut self) {
        self.closed = false;
    }

    pub(crate) fn front(&self) -> NodeFront<'_, P> {
        NodeFront::new(
            self.order
                .iter()
                .filter_map(|id| Some((*id, self.get(*id)?)))
                .collect(),
        )
    }
}

impl<P: CartesianPoint2d> NodeArena<P> {
    pub(crate) fn close(&mut self) {
        if self.closed {
            return;
        }

        let nodes = &self.nodes;
        self.order.sort_by(|a, b| {
            nodes[a.index()]
                .point()
                .cmp_coordinates(nodes[b.index()].point())
        });
        self.closed = true;
    }
}

/// Edges of one graph in creation order.
#[derive(Debug, Clone, Default)]
pub(crate) struct EdgeArena {
    edges: Vec<Edge>,
}

impl EdgeArena {
    /// Creates an edge linked after `previous` and registers it in both end nodes.
    pub(crate) fn push<P>(
        &mut self,
        nodes: &mut NodeArena<P>,
        start: NodeId,
        end: NodeId,
        previous: Option<EdgeId>,
    ) -> EdgeId {
        let id = EdgeId::new(self.edges.len());
        self.edges.push(Edge::new(start, end, previous));
        if let Some(previous) = previous {
            self.link(previous, id);
        }

        nodes.attach(start, id);
        nodes.attach(end, id);
        id
    }

    /// Makes `next` follow `previous`.
    pub(crate) fn link(&mut self, previous: EdgeId, next: EdgeId) {
        if let Some(edge) = self.edges.get_mut(previous.index()) {
            edge.set_next(next);
        }
        if let Some(edge) = self.edges.get_mut(next.index()) {
            edge.set_previous(previous);
        }
    }

    pub(crate) fn get(&self, id: EdgeId) -> Option<&Edge> {
        self.edges.get(id.index())
    }

    pub(crate) fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub(crate) fn len(&self) -> usize {
        self.edges.len()
    }
}
