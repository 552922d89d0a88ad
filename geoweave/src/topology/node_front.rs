use geoweave_types::cartesian::CartesianPoint2d;

use super::node::{Node, NodeId};

/// Forward cursor over the nodes of a closed graph in coordinate order.
///
/// The cursor captures the sorted node references when created, so it does not observe later
/// changes of the graph (the borrow checker prevents them anyway). It starts at the first node and
/// can be restarted with [`NodeFront::reset`].
///
/// `H` is the handle type identifying nodes in the graph: [`NodeId`] for single graphs and
/// [`NodeHandle`](super::NodeHandle) for [`PlanarGraph`](super::PlanarGraph).
#[derive(Debug, Clone)]
pub struct NodeFront<'g, P, H = NodeId> {
    nodes: Vec<(H, &'g Node<P>)>,
    index: usize,
}

impl<'g, P, H: Copy> NodeFront<'g, P, H> {
    pub(crate) fn new(nodes: Vec<(H, &'g Node<P>)>) -> Self {
        Self { nodes, index: 0 }
    }

    /// Node the cursor is at. `None` after the last node.
    pub fn current(&self) -> Option<(H, &'g Node<P>)> {
        self.nodes.get(self.index).copied()
    }

    /// Advances to the next node. Returns false if the cursor moved past the last node.
    pub fn move_next(&mut self) -> bool {
        if self.index < self.nodes.len() {
            self.index += 1;
        }

        self.index < self.nodes.len()
    }

    /// Moves the cursor back to the first node.
    pub fn reset(&mut self) {
        self.index = 0;
    }

    /// Number of nodes the cursor goes through.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl<'g, P: CartesianPoint2d, H: Copy> NodeFront<'g, P, H> {
    /// Returns the current node and all following nodes at the same point, and moves the cursor
    /// past them. Returns an empty vector after the last node.
    pub fn take_coincident(&mut self) -> Vec<(H, &'g Node<P>)> {
        let Some((_, first)) = self.current() else {
            return vec![];
        };

        let count = self.nodes[self.index..]
            .iter()
            .take_while(|(_, node)| node.point().equal(first.point()))
            .count()
            // NaN points are not equal even to themselves, but still form a run of one.
            .max(1);

        let run = self.nodes[self.index..self.index + count].to_vec();
        self.index += count;
        run
    }
}

impl<'g, P, H: Copy> Iterator for NodeFront<'g, P, H> {
    type Item = (H, &'g Node<P>);

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.current()?;
        self.index += 1;
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.nodes.len().saturating_sub(self.index);
        (remaining, Some(remaining))
    }
}
