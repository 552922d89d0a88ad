use serde::{Deserialize, Serialize};

use super::edge::EdgeId;

/// Index of a node in the graph that created it.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct NodeId(usize);

impl NodeId {
    pub(crate) fn new(index: usize) -> Self {
        Self(index)
    }

    /// Position of the node in creation order.
    pub fn index(&self) -> usize {
        self.0
    }
}

/// Shape a node was created from.
///
/// The value is the ordinal of the shape among the shapes of the same kind added to the graph
/// that owns the node.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ParentShape {
    /// Loose point.
    Point(usize),
    /// Segment.
    Segment(usize),
    /// Open chain.
    Chain(usize),
    /// Closed ring.
    Ring(usize),
}

/// A point of the topology graph together with the edges incident to it.
///
/// Nodes are identified by their [`NodeId`], not by coordinates: two nodes at the same point stay
/// distinct and only become adjacent in the sorted node order of a closed graph.
#[derive(Debug, Clone)]
pub struct Node<P> {
    point: P,
    parent: ParentShape,
    edges: Vec<EdgeId>,
}

impl<P> Node<P> {
    pub(crate) fn new(point: P, parent: ParentShape) -> Self {
        Self {
            point,
            parent,
            edges: vec![],
        }
    }

    /// Point of the node.
    pub fn point(&self) -> &P {
        &self.point
    }

    /// Shape the node was created from.
    pub fn parent(&self) -> ParentShape {
        self.parent
    }

    /// Edges starting or ending at the node, in creation order.
    pub fn edges(&self) -> &[EdgeId] {
        &self.edges
    }

    pub(crate) fn attach(&mut self, edge: EdgeId) {
        self.edges.push(edge);
    }
}
