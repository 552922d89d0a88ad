use geoweave_types::cartesian::{dedup_adjacent, strip_closing_point, CartesianPoint2d};
use geoweave_types::impls::{Polygon, Polyline, Ring};
use geoweave_types::Polygon as _;
use log::trace;

use super::arena::{EdgeArena, NodeArena};
use super::edge::{Edge, EdgeId};
use super::node::{Node, NodeId, ParentShape};
use super::node_front::NodeFront;
use super::planar_nodes::PlanarNodes;

/// Minimum number of distinct consecutive points of a chain or ring to be added to a graph.
pub const MIN_CHAIN_POINTS: usize = 3;

/// Graph of point chains.
///
/// Every added chain gets one node per point and one edge per pair of consecutive points, linked in
/// the chain order. A ring also gets an edge from its last point to the first one, which closes the
/// edge list into a cycle.
#[derive(Debug, Clone)]
pub struct PlanarChainGraph<P> {
    nodes: NodeArena<P>,
    edges: EdgeArena,
    chain_count: usize,
    ring_count: usize,
}

impl<P> Default for PlanarChainGraph<P> {
    fn default() -> Self {
        Self {
            nodes: NodeArena::default(),
            edges: EdgeArena::default(),
            chain_count: 0,
            ring_count: 0,
        }
    }
}

impl<P: CartesianPoint2d> PlanarChainGraph<P> {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a chain of points.
    ///
    /// Consecutive equal points are merged first and, for rings, a last point equal to the first
    /// one is dropped. If less than [`MIN_CHAIN_POINTS`] points remain, nothing is added.
    pub fn add(&mut self, points: Vec<P>, is_ring: bool) {
        self.add_collect(points, is_ring, &mut vec![], &mut vec![]);
    }

    /// Same as [`PlanarChainGraph::add`], and pushes the ids of the nodes and edges created by
    /// this call into the collectors.
    pub fn add_collect(
        &mut self,
        mut points: Vec<P>,
        is_ring: bool,
        nodes: &mut Vec<NodeId>,
        edges: &mut Vec<EdgeId>,
    ) {
        dedup_adjacent(&mut points);
        if is_ring {
            strip_closing_point(&mut points);
        }

        if points.len() < MIN_CHAIN_POINTS {
            trace!(
                "Chain with {} distinct points is not added to the graph",
                points.len()
            );
            return;
        }

        let parent = if is_ring {
            self.ring_count += 1;
            ParentShape::Ring(self.ring_count - 1)
        } else {
            self.chain_count += 1;
            ParentShape::Chain(self.chain_count - 1)
        };

        let first_node = nodes.len();
        nodes.extend(points.into_iter().map(|p| self.nodes.push(p, parent)));
        let created = &nodes[first_node..];

        let first_edge = edges.len();
        let mut previous = None;
        for pair in created.windows(2) {
            let edge = self.edges.push(&mut self.nodes, pair[0], pair[1], previous);
            edges.push(edge);
            previous = Some(edge);
        }

        if is_ring {
            if let (Some(&last), Some(&first)) = (created.last(), created.first()) {
                let wrap = self.edges.push(&mut self.nodes, last, first, previous);
                self.edges.link(wrap, edges[first_edge]);
                edges.push(wrap);
            }
        }
    }

    /// Adds the points of a polyline as an open chain.
    pub fn add_polyline(&mut self, polyline: &Polyline<P>)
    where
        P: Clone,
    {
        self.add(polyline.points().to_vec(), false);
    }

    /// Adds a ring.
    pub fn add_ring(&mut self, ring: &Ring<P>)
    where
        P: Clone,
    {
        self.add(ring.points().to_vec(), true);
    }

    /// Adds the outer ring and all holes of a polygon as rings.
    pub fn add_polygon(&mut self, polygon: &Polygon<P>)
    where
        P: Clone,
    {
        for ring in polygon.iter_contours() {
            self.add_ring(ring);
        }
    }
}

impl<P> PlanarChainGraph<P> {
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

    /// Edges in creation order.
    pub fn edges(&self) -> &[Edge] {
        self.edges.edges()
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Number of chains and rings added.
    pub fn shape_count(&self) -> usize {
        self.chain_count + self.ring_count
    }

    /// Follows `next` links from `start`. Stops at the end of a chain, or before coming back to
    /// `start` for a ring.
    pub fn walk(&self, start: EdgeId) -> impl Iterator<Item = EdgeId> + '_ {
        std::iter::successors(self.edge(start).map(|_| start), move |id| {
            self.edge(*id)?.next().filter(|next| *next != start)
        })
    }
}

impl<P: CartesianPoint2d> PlanarNodes for PlanarChainGraph<P> {
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
