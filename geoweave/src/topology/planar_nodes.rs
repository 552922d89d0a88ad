use super::node_front::NodeFront;

/// Open/closed node container shared by all planar graphs.
///
/// A graph is open while shapes are added. Closing sorts the nodes by coordinates (X, then Y), so
/// that nodes at the same point from different shapes come next to each other. Closing a closed
/// graph does nothing. Opening only clears the closed flag: the node order and contents are kept.
pub trait PlanarNodes {
    /// Point type of the nodes.
    type Point;
    /// Handle identifying a node in the graph.
    type Handle: Copy;

    /// Sorts the nodes. The sort is stable: coincident nodes keep their creation order.
    fn close(&mut self);

    /// Marks the graph as open.
    fn open(&mut self);

    /// Returns true if the graph was closed and no nodes were added since.
    fn is_closed(&self) -> bool;

    /// Number of nodes in the graph.
    fn node_count(&self) -> usize;

    /// Closes the graph and returns a cursor over its nodes in coordinate order.
    fn node_front(&mut self) -> NodeFront<'_, Self::Point, Self::Handle>;
}
