//! Routing trait and default Dijkstra implementation.
//!
//! # Pluggability
//!
//! The routing service calls the planner through the [`Router`] trait, so a
//! different search (A*, bidirectional Dijkstra) can be swapped in without
//! touching graph assembly.  The default [`DijkstraRouter`] is exact for the
//! strictly positive weights produced by weight assignment.
//!
//! # Determinism
//!
//! The heap is keyed by `(cost, NodeId)`, so equal-cost nodes are settled in
//! ascending `NodeId` order, and a node's predecessor is only replaced on a
//! strictly cheaper cost.  A fixed graph therefore always yields the same
//! path, including among equal-cost alternatives.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use log::debug;

use sr_core::{EdgeId, NodeId};

use crate::network::WeightedGraph;
use crate::SpatialError;

// ── RoutePath ─────────────────────────────────────────────────────────────────

/// The result of a routing query: the nodes visited from source to
/// destination inclusive, and the summed arc weight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutePath {
    /// Never empty; `nodes[0]` is the source, `nodes[last]` the destination.
    pub nodes: Vec<NodeId>,
    pub total_weight: u64,
}

impl RoutePath {
    /// `true` if the source and destination are the same node.
    pub fn is_trivial(&self) -> bool {
        self.nodes.len() == 1
    }

    /// Number of streets traversed.
    pub fn hop_count(&self) -> usize {
        self.nodes.len().saturating_sub(1)
    }
}

// ── Router trait ──────────────────────────────────────────────────────────────

/// Pluggable minimum-weight path search.
///
/// # Thread safety
///
/// Implementations must be `Send + Sync`; one router serves every concurrent
/// request.
pub trait Router: Send + Sync {
    /// Compute the minimum-weight path from `from` to `to`.
    ///
    /// Returns [`SpatialError::UnknownNode`] if either endpoint is outside
    /// the graph and [`SpatialError::NoPath`] if `to` is unreachable.
    /// `from == to` yields the single-node path.  Every id in the returned
    /// path must belong to `graph`.
    fn route(
        &self,
        graph: &WeightedGraph,
        from: NodeId,
        to: NodeId,
    ) -> Result<RoutePath, SpatialError>;
}

// ── DijkstraRouter ────────────────────────────────────────────────────────────

/// Standard Dijkstra's algorithm over the CSR street graph, using
/// `edge_weight` as cost.
#[derive(Copy, Clone, Debug, Default)]
pub struct DijkstraRouter;

impl Router for DijkstraRouter {
    fn route(
        &self,
        graph: &WeightedGraph,
        from: NodeId,
        to: NodeId,
    ) -> Result<RoutePath, SpatialError> {
        dijkstra(graph, from, to)
    }
}

// ── Dijkstra internals ────────────────────────────────────────────────────────

fn dijkstra(graph: &WeightedGraph, from: NodeId, to: NodeId) -> Result<RoutePath, SpatialError> {
    for node in [from, to] {
        if !graph.contains(node) {
            return Err(SpatialError::UnknownNode(node));
        }
    }
    if from == to {
        return Ok(RoutePath { nodes: vec![from], total_weight: 0 });
    }

    let n = graph.node_count();
    // dist[v] = best known cost to reach v.
    let mut dist      = vec![u64::MAX; n];
    // prev_edge[v] = EdgeId that reached v; EdgeId::INVALID for unreached nodes.
    let mut prev_edge = vec![EdgeId::INVALID; n];

    dist[from.index()] = 0;

    // Min-heap: (cost, node). Reverse makes BinaryHeap (max) behave as min-heap.
    // Secondary key NodeId ensures deterministic tie-breaking.
    let mut heap: BinaryHeap<Reverse<(u64, NodeId)>> = BinaryHeap::new();
    heap.push(Reverse((0, from)));

    let mut settled = 0usize;
    while let Some(Reverse((cost, node))) = heap.pop() {
        if node == to {
            debug!("dijkstra {from} → {to}: cost {cost}, {settled} nodes settled");
            return Ok(reconstruct(graph, &prev_edge, from, to, cost));
        }

        // Skip stale heap entries.
        if cost > dist[node.index()] {
            continue;
        }
        settled += 1;

        for edge in graph.out_edges(node) {
            let neighbor = graph.edge_to[edge.index()];
            let new_cost = cost.saturating_add(u64::from(graph.edge_weight[edge.index()]));

            if new_cost < dist[neighbor.index()] {
                dist[neighbor.index()] = new_cost;
                prev_edge[neighbor.index()] = edge;
                heap.push(Reverse((new_cost, neighbor)));
            }
        }
    }

    debug!("dijkstra {from} → {to}: unreachable after {settled} nodes settled");
    Err(SpatialError::NoPath { from, to })
}

fn reconstruct(
    graph: &WeightedGraph,
    prev_edge: &[EdgeId],
    from: NodeId,
    to: NodeId,
    total_weight: u64,
) -> RoutePath {
    let mut nodes = vec![to];
    let mut cur = to;
    while cur != from {
        let e = prev_edge[cur.index()];
        cur = graph.edge_from[e.index()];
        nodes.push(cur);
    }
    nodes.reverse();
    RoutePath { nodes, total_weight }
}
