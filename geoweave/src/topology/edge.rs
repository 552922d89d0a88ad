use serde::{Deserialize, Serialize};

use super::node::NodeId;

/// Index of an edge in the graph that created it.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EdgeId(usize);

impl EdgeId {
    pub(crate) fn new(index: usize) -> Self {
        Self(index)
    }

    /// Position of the edge in creation order.
    pub fn index(&self) -> usize {
        self.0
    }
}

/// Directed connection between two nodes.
///
/// Edges of one chain are linked into a list in traversal order. Edges of a ring form a cycle: the
/// last edge goes back to the first node and its `next` is the first edge.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Edge {
    start: NodeId,
    end: NodeId,
    next: Option<EdgeId>,
    previous: Option<EdgeId>,
}

impl Edge {
    pub(crate) fn new(start: NodeId, end: NodeId, previous: Option<EdgeId>) -> Self {
        Self {
            start,
            end,
            next: None,
            previous,
        }
    }

    /// First node.
    pub fn start(&self) -> NodeId {
        self.start
    }

    /// Last node.
    pub fn end(&self) -> NodeId {
        self.end
    }

    /// Following edge of the same chain or ring.
    pub fn next(&self) -> Option<EdgeId> {
        self.next
    }

    /// Preceding edge of the same chain or ring.
    pub fn previous(&self) -> Option<EdgeId> {
        self.previous
    }

    pub(crate) fn set_next(&mut self, next: EdgeId) {
        self.next = Some(next);
    }

    pub(crate) fn set_previous(&mut self, previous: EdgeId) {
        self.previous = Some(previous);
    }
}
