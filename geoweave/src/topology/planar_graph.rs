use geoweave_types::cartesian::CartesianPoint2d;
use geoweave_types::impls::Polygon;
use geoweave_types::{Geom, Polygon as _, Segment};
use log::trace;
use serde::{Deserialize, Serialize};

use super::chain_graph::PlanarChainGraph;
use super::node::{Node, NodeId};
use super::node_front::NodeFront;
use super::planar_nodes::PlanarNodes;
use super::point_graph::PlanarPointGraph;
use super::segment_graph::PlanarSegmentGraph;

/// Sub-graph of a [`PlanarGraph`] a node belongs to.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeSource {
    /// Loose points graph.
    Points,
    /// Segments graph.
    Segments,
    /// Chain graph with the given index in [`PlanarGraph::chains`].
    Chain(usize),
    /// Ring graph with the given index in [`PlanarGraph::rings`].
    Ring(usize),
    /// Polygon graph with the given index in [`PlanarGraph::polygons`].
    Polygon(usize),
}

/// Identifies a node of a [`PlanarGraph`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeHandle {
    /// Sub-graph owning the node.
    pub source: NodeSource,
    /// Id of the node in the sub-graph.
    pub node: NodeId,
}

/// Topology graph of shapes of mixed kinds.
///
/// Loose points and segments go into one shared graph each. Every chain, ring and polygon gets its
/// own [`PlanarChainGraph`]. All nodes are registered in one master index, which is what closing
/// sorts and what [`PlanarNodes::node_front`] enumerates, so coincident nodes of any shapes become
/// adjacent.
#[derive(Debug, Clone)]
pub struct PlanarGraph<P> {
    points: PlanarPointGraph<P>,
    segments: PlanarSegmentGraph<P>,
    chains: Vec<PlanarChainGraph<P>>,
    rings: Vec<PlanarChainGraph<P>>,
    polygons: Vec<PlanarChainGraph<P>>,
    index: Vec<NodeHandle>,
    closed: bool,
}

impl<P> Default for PlanarGraph<P> {
    fn default() -> Self {
        Self {
            points: PlanarPointGraph::default(),
            segments: PlanarSegmentGraph::default(),
            chains: vec![],
            rings: vec![],
            polygons: vec![],
            index: vec![],
            closed: false,
        }
    }
}

impl<P: CartesianPoint2d + Clone> PlanarGraph<P> {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a loose point.
    pub fn add_point(&mut self, point: P) {
        let mut nodes = vec![];
        self.points.add_collect(point, &mut nodes);
        self.register(NodeSource::Points, nodes);
    }

    /// Adds a segment. Zero-length segments are ignored.
    pub fn add_segment(&mut self, segment: Segment<P>) {
        let mut nodes = vec![];
        self.segments.add_collect(segment, &mut nodes, &mut vec![]);
        self.register(NodeSource::Segments, nodes);
    }

    /// Adds an open chain. See [`PlanarChainGraph::add`] for the handling of degenerate chains.
    pub fn add_chain(&mut self, points: Vec<P>) {
        if let Some(graph) = Self::chain_graph([(points, false)]) {
            self.push_graph(NodeSource::Chain(self.chains.len()), graph);
        }
    }

    /// Adds a ring.
    pub fn add_ring(&mut self, points: Vec<P>) {
        if let Some(graph) = Self::chain_graph([(points, true)]) {
            self.push_graph(NodeSource::Ring(self.rings.len()), graph);
        }
    }

    /// Adds the rings of a polygon into one chain graph.
    pub fn add_polygon(&mut self, polygon: &Polygon<P>) {
        let rings = polygon
            .iter_contours()
            .map(|ring| (ring.points().to_vec(), true));

        if let Some(graph) = Self::chain_graph(rings) {
            self.push_graph(NodeSource::Polygon(self.polygons.len()), graph);
        }
    }

    /// Adds all shapes of a geometry.
    pub fn add_geometry(&mut self, geometry: &Geom<P>) {
        match geometry {
            Geom::Point(p) => self.add_point(p.clone()),
            Geom::PointBag(bag) => bag.iter().for_each(|p| self.add_point(p.clone())),
            Geom::Polyline(line) => self.add_chain(line.points().to_vec()),
            Geom::PolylineBag(bag) => bag
                .iter()
                .for_each(|line| self.add_chain(line.points().to_vec())),
            Geom::Ring(ring) => self.add_ring(ring.points().to_vec()),
            Geom::RingSet(set) => set
                .iter()
                .for_each(|ring| self.add_ring(ring.points().to_vec())),
            Geom::Polygon(polygon) => self.add_polygon(polygon),
            Geom::PolygonBag(bag) => bag.iter().for_each(|polygon| self.add_polygon(polygon)),
            Geom::GeometryBag(bag) => bag.iter().for_each(|member| self.add_geometry(member)),
            Geom::Segment(segment) => self.add_segment(segment.clone()),
        }
    }

    fn chain_graph(
        chains: impl IntoIterator<Item = (Vec<P>, bool)>,
    ) -> Option<(PlanarChainGraph<P>, Vec<NodeId>)> {
        let mut graph = PlanarChainGraph::new();
        let mut nodes = vec![];
        for (points, is_ring) in chains {
            graph.add_collect(points, is_ring, &mut nodes, &mut vec![]);
        }

        if nodes.is_empty() {
            trace!("Shape has no valid chains and is not added to the graph");
            return None;
        }

        Some((graph, nodes))
    }

    fn push_graph(
        &mut self,
        source: NodeSource,
        (graph, nodes): (PlanarChainGraph<P>, Vec<NodeId>),
    ) {
        match source {
            NodeSource::Chain(_) => self.chains.push(graph),
            NodeSource::Ring(_) => self.rings.push(graph),
            NodeSource::Polygon(_) => self.polygons.push(graph),
            NodeSource::Points | NodeSource::Segments => return,
        }

        self.register(source, nodes);
    }
}

impl<P> PlanarGraph<P> {
    fn register(&mut self, source: NodeSource, nodes: Vec<NodeId>) {
        if nodes.is_empty() {
            return;
        }

        self.index
            .extend(nodes.into_iter().map(|node| NodeHandle { source, node }));
        self.closed = false;
    }

    /// Node by handle.
    pub fn node(&self, handle: NodeHandle) -> Option<&Node<P>> {
        match handle.source {
            NodeSource::Points => self.points.node(handle.node),
            NodeSource::Segments => self.segments.node(handle.node),
            NodeSource::Chain(i) => self.chains.get(i)?.node(handle.node),
            NodeSource::Ring(i) => self.rings.get(i)?.node(handle.node),
            NodeSource::Polygon(i) => self.polygons.get(i)?.node(handle.node),
        }
    }

    /// Graph of loose points.
    pub fn points(&self) -> &PlanarPointGraph<P> {
        &self.points
    }

    /// Graph of segments.
    pub fn segments(&self) -> &PlanarSegmentGraph<P> {
        &self.segments
    }

    /// Graphs of open chains, one per chain.
    pub fn chains(&self) -> &[PlanarChainGraph<P>] {
        &self.chains
    }

    /// Graphs of rings, one per ring.
    pub fn rings(&self) -> &[PlanarChainGraph<P>] {
        &self.rings
    }

    /// Graphs of polygons, one per polygon.
    pub fn polygons(&self) -> &[PlanarChainGraph<P>] {
        &self.polygons
    }

    fn resolved(&self) -> Vec<(NodeHandle, &Node<P>)> {
        self.index
            .iter()
            .filter_map(|handle| Some((*handle, self.node(*handle)?)))
            .collect()
    }
}

impl<P: CartesianPoint2d> PlanarNodes for PlanarGraph<P> {
    type Point = P;
    type Handle = NodeHandle;

    fn close(&mut self) {
        if self.closed {
            return;
        }

        let mut resolved = self.resolved();
        resolved.sort_by(|(_, a), (_, b)| a.point().cmp_coordinates(b.point()));
        let sorted = resolved.into_iter().map(|(handle, _)| handle).collect();

        self.index = sorted;
        self.closed = true;
    }

    fn open(&mut self) {
        self.closed = false;
    }

    fn is_closed(&self) -> bool {
        self.closed
    }

    fn node_count(&self) -> usize {
        self.index.len()
    }

    fn node_front(&mut self) -> NodeFront<'_, P, NodeHandle> {
        self.close();
        NodeFront::new(self.resolved())
    }
}
