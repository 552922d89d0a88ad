//! Planar topology graphs.
//!
//! Graphs store the points of shapes as nodes and the straight pieces between them as edges, in
//! index arenas. Edges of a chain are linked with `previous`/`next` ids, and the edges of a ring
//! form a cycle. Closing a graph sorts its nodes by coordinates, and [`NodeFront`] then walks them
//! in that order, which puts coincident points of different shapes next to each other.

mod arena;
mod chain_graph;
mod edge;
mod node;
mod node_front;
mod planar_graph;
mod planar_nodes;
mod point_graph;
mod segment_graph;
mod segment_group;

pub use chain_graph::{PlanarChainGraph, MIN_CHAIN_POINTS};
pub use edge::{Edge, EdgeId};
pub use node::{Node, NodeId, ParentShape};
pub use node_front::NodeFront;
pub use planar_graph::{NodeHandle, NodeSource, PlanarGraph};
pub use planar_nodes::PlanarNodes;
pub use point_graph::PlanarPointGraph;
pub use segment_graph::PlanarSegmentGraph;
pub use segment_group::SegmentGroup;
