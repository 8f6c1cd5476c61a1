//! Weighted street graph and builder.
//!
//! # Data layout
//!
//! The graph uses **Compressed Sparse Row (CSR)** format for outgoing arcs.
//! Given a `NodeId n`, its outgoing arcs occupy the slice:
//!
//! ```text
//! edge_to[ node_out_start[n] .. node_out_start[n+1] ]
//! ```
//!
//! Every undirected street is stored as two arcs sharing one weight.  Arc
//! arrays (`edge_from`, `edge_to`, `edge_weight`) are sorted by source node
//! and indexed by `EdgeId`, so iterating a node's neighbours is a contiguous
//! memory scan.
//!
//! # Spatial index
//!
//! An R-tree (via `rstar`) maps `[lon, lat]` to the nearest `NodeId`.  Used to
//! snap a raw position onto the closest named location.
//!
//! # Lifetime
//!
//! A `WeightedGraph` is built per routing request from one risk snapshot and
//! dropped when the request completes.  It has no mutating methods.

use rstar::{PointDistance, RTree, RTreeObject, AABB};

use sr_core::{EdgeId, GeoPoint, NodeId};

// ── R-tree node entry ─────────────────────────────────────────────────────────

/// Entry stored in the R-tree spatial index: a 2-D `[lon, lat]` point with
/// the associated `NodeId`.
#[derive(Clone)]
struct NodeEntry {
    point: [f64; 2], // [lon, lat]
    id: NodeId,
}

impl RTreeObject for NodeEntry {
    type Envelope = AABB<[f64; 2]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

impl PointDistance for NodeEntry {
    /// Squared Euclidean distance in lon/lat space.  Sufficient for snapping
    /// within a city.
    fn distance_2(&self, point: &[f64; 2]) -> f64 {
        let dlon = self.point[0] - point[0];
        let dlat = self.point[1] - point[1];
        dlon * dlon + dlat * dlat
    }
}

// ── WeightedGraph ─────────────────────────────────────────────────────────────

/// Undirected street graph in CSR format, with risk-derived arc weights and a
/// spatial index for node snapping.
///
/// Do not construct directly; use [`GraphBuilder`] or
/// [`build_weighted_graph`](crate::build_weighted_graph).
pub struct WeightedGraph {
    // ── Node data ─────────────────────────────────────────────────────────
    /// Geographic position of each node.  Indexed by `NodeId`.
    pub node_pos: Vec<GeoPoint>,

    // ── CSR arc adjacency ─────────────────────────────────────────────────
    /// CSR row pointer.  Outgoing arcs of node `n` are at EdgeIds
    /// `node_out_start[n] .. node_out_start[n+1]`.
    /// Length = `node_count + 1`.
    pub node_out_start: Vec<u32>,

    // ── Arc data (indexed by EdgeId = position in sorted order) ──────────
    /// Source node of each arc.  Needed for path reconstruction.
    pub edge_from: Vec<NodeId>,

    /// Destination node of each arc.
    pub edge_to: Vec<NodeId>,

    /// Traversal weight of each arc.  Always ≥ 1.
    pub edge_weight: Vec<u32>,

    // ── Spatial index ─────────────────────────────────────────────────────
    spatial_idx: RTree<NodeEntry>,
}

impl WeightedGraph {
    // ── Graph dimensions ──────────────────────────────────────────────────

    pub fn node_count(&self) -> usize {
        self.node_pos.len()
    }

    /// Number of directed arcs (twice the number of streets).
    pub fn edge_count(&self) -> usize {
        self.edge_to.len()
    }

    pub fn street_count(&self) -> usize {
        self.edge_to.len() / 2
    }

    pub fn is_empty(&self) -> bool {
        self.node_pos.is_empty()
    }

    #[inline]
    pub fn contains(&self, node: NodeId) -> bool {
        node.index() < self.node_count()
    }

    // ── Graph traversal ───────────────────────────────────────────────────

    /// Iterator over the `EdgeId`s of all outgoing arcs from `node`.
    ///
    /// This is a contiguous index range — no heap allocation.
    #[inline]
    pub fn out_edges(&self, node: NodeId) -> impl Iterator<Item = EdgeId> + '_ {
        let start = self.node_out_start[node.index()] as usize;
        let end   = self.node_out_start[node.index() + 1] as usize;
        (start..end).map(|i| EdgeId(i as u32))
    }

    #[inline]
    pub fn out_degree(&self, node: NodeId) -> usize {
        let start = self.node_out_start[node.index()] as usize;
        let end   = self.node_out_start[node.index() + 1] as usize;
        end - start
    }

    /// Weight of the street between `a` and `b`, or `None` if they are not
    /// adjacent.
    pub fn weight_between(&self, a: NodeId, b: NodeId) -> Option<u32> {
        if !self.contains(a) || !self.contains(b) {
            return None;
        }
        self.out_edges(a)
            .find(|e| self.edge_to[e.index()] == b)
            .map(|e| self.edge_weight[e.index()])
    }

    // ── Spatial queries ───────────────────────────────────────────────────

    /// Return the `NodeId` of the nearest node to `pos`.
    ///
    /// Returns `None` only if the graph has no nodes.
    pub fn snap_to_node(&self, pos: GeoPoint) -> Option<NodeId> {
        self.spatial_idx
            .nearest_neighbor(&[pos.lon, pos.lat])
            .map(|e| e.id)
    }
}

// ── GraphBuilder ──────────────────────────────────────────────────────────────

/// Construct a [`WeightedGraph`] incrementally, then call [`build`](Self::build).
///
/// `build()` sorts arcs by source node (stable, so arcs of one node keep
/// insertion order), constructs the CSR arrays, and bulk-loads the R-tree.
///
/// # Example
///
/// ```
/// use sr_core::GeoPoint;
/// use sr_spatial::GraphBuilder;
///
/// let mut b = GraphBuilder::new();
/// let a = b.add_node(GeoPoint::new(-74.0060, 40.7128));
/// let c = b.add_node(GeoPoint::new(-73.9960, 40.7228));
/// b.add_street(a, c, 1);
/// let graph = b.build();
/// assert_eq!(graph.node_count(), 2);
/// assert_eq!(graph.edge_count(), 2); // one arc per direction
/// ```
pub struct GraphBuilder {
    nodes:    Vec<GeoPoint>,
    raw_arcs: Vec<RawArc>,
}

struct RawArc {
    from:   NodeId,
    to:     NodeId,
    weight: u32,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self { nodes: Vec::new(), raw_arcs: Vec::new() }
    }

    /// Pre-allocate for the expected number of nodes and streets.
    pub fn with_capacity(nodes: usize, streets: usize) -> Self {
        Self {
            nodes:    Vec::with_capacity(nodes),
            raw_arcs: Vec::with_capacity(streets * 2),
        }
    }

    /// Add a node and return its `NodeId` (sequential from 0).
    pub fn add_node(&mut self, pos: GeoPoint) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(pos);
        id
    }

    /// Add an undirected street as two arcs.  A zero weight is raised to 1 so
    /// every arc stays strictly positive.
    pub fn add_street(&mut self, a: NodeId, b: NodeId, weight: u32) {
        let weight = weight.max(1);
        self.raw_arcs.push(RawArc { from: a, to: b, weight });
        self.raw_arcs.push(RawArc { from: b, to: a, weight });
    }

    pub fn node_count(&self) -> usize { self.nodes.len() }
    pub fn edge_count(&self) -> usize { self.raw_arcs.len() }

    /// Consume the builder and produce a [`WeightedGraph`].
    ///
    /// Time complexity: O(E log E) for the arc sort + O(N log N) for the
    /// R-tree bulk load, where N = nodes, E = arcs.
    pub fn build(self) -> WeightedGraph {
        let node_count = self.nodes.len();
        let edge_count = self.raw_arcs.len();

        // Stable sort keeps per-node arc order deterministic.
        let mut raw = self.raw_arcs;
        raw.sort_by_key(|e| e.from.0);

        let edge_from:   Vec<NodeId> = raw.iter().map(|e| e.from).collect();
        let edge_to:     Vec<NodeId> = raw.iter().map(|e| e.to).collect();
        let edge_weight: Vec<u32>    = raw.iter().map(|e| e.weight).collect();

        // Build CSR row pointer (node_out_start).
        let mut node_out_start = vec![0u32; node_count + 1];
        for e in &raw {
            node_out_start[e.from.index() + 1] += 1;
        }
        for i in 1..=node_count {
            node_out_start[i] += node_out_start[i - 1];
        }
        debug_assert_eq!(node_out_start[node_count] as usize, edge_count);

        let entries: Vec<NodeEntry> = self
            .nodes
            .iter()
            .enumerate()
            .map(|(i, &pos)| NodeEntry {
                point: [pos.lon, pos.lat],
                id: NodeId(i as u32),
            })
            .collect();
        let spatial_idx = RTree::bulk_load(entries);

        WeightedGraph {
            node_pos: self.nodes,
            node_out_start,
            edge_from,
            edge_to,
            edge_weight,
            spatial_idx,
        }
    }
}

impl Default for GraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}
