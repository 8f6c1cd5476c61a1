//! The routing facade.
//!
//! # Request flow
//!
//! 1. Resolve the endpoint names against the catalog.  An unknown name fails
//!    here, before any risk data is read.
//! 2. Take one risk snapshot from the provider.
//! 3. Build a fresh [`WeightedGraph`] against that snapshot.
//! 4. Run the router and translate node ids back to names and coordinates.
//!
//! Nothing is cached between requests, so a zone edit is visible to the next
//! request that starts after it.  Requests share only immutable state (the
//! map, the policy, the router) and each gets its own graph, so any number
//! may run concurrently.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use sr_core::{GeoPoint, MapConfig, NodeId};
use sr_risk::{RiskAssessment, RiskZoneProvider};
use sr_spatial::{
    DijkstraRouter, RoutePath, Router, SpatialError, WeightPolicy, WeightedGraph,
    build_weighted_graph,
};

use crate::{RouteError, ServiceConfig, ServiceResult};

// ── PlannedRoute ──────────────────────────────────────────────────────────────

/// A planned route, ready to serialize for the client.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlannedRoute {
    /// Node names from start to end inclusive.
    pub path_nodes: Vec<String>,
    /// `(lon, lat)` of each entry in `path_nodes`, same order.
    pub path_coordinates: Vec<(f64, f64)>,
    /// Sum of street weights along the path.
    pub total_weight: u64,
    /// Great-circle length of the path in metres.
    pub length_m: f64,
}

impl PlannedRoute {
    pub fn hop_count(&self) -> usize {
        self.path_nodes.len().saturating_sub(1)
    }
}

// ── RoutingService ────────────────────────────────────────────────────────────

/// Plans minimum-risk walking routes over a fixed street map.
///
/// Generic over the risk source `P` and the search `R`; see
/// [`RoutingService::new`] for the default Dijkstra setup.
pub struct RoutingService<P, R = DijkstraRouter> {
    map:      MapConfig,
    provider: P,
    router:   R,
    policy:   WeightPolicy,
}

impl<P: RiskZoneProvider> RoutingService<P, DijkstraRouter> {
    /// Validate `map` and `config` and build a service using Dijkstra.
    ///
    /// Fails if a street references an undeclared node, a street is declared
    /// twice or loops onto itself, a coordinate is not finite, or the weight
    /// policy is invalid.
    pub fn new(map: MapConfig, provider: P, config: &ServiceConfig) -> ServiceResult<Self> {
        Self::with_router(map, provider, DijkstraRouter, config)
    }
}

impl<P: RiskZoneProvider, R: Router> RoutingService<P, R> {
    pub fn with_router(
        map: MapConfig,
        provider: P,
        router: R,
        config: &ServiceConfig,
    ) -> ServiceResult<Self> {
        map.validate()?;
        config.validate()?;
        info!(
            "routing service ready: {} nodes, {} streets, policy {:?}",
            map.catalog().len(),
            map.streets().len(),
            config.weight_policy
        );
        Ok(Self { map, provider, router, policy: config.weight_policy })
    }

    pub fn map(&self) -> &MapConfig {
        &self.map
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub fn policy(&self) -> WeightPolicy {
        self.policy
    }

    /// All node names in declaration order.
    pub fn node_names(&self) -> Vec<String> {
        self.map.catalog().names().map(str::to_owned).collect()
    }

    /// Plan the minimum-weight route between two named nodes.
    ///
    /// `start == end` yields the single-node route with weight 0.
    pub fn plan_route(&self, start: &str, end: &str) -> Result<PlannedRoute, RouteError> {
        let from = self.resolve(start)?;
        let to = self.resolve(end)?;
        debug!("route request {start} → {end}");

        let graph = self.fresh_graph()?;
        self.search(&graph, from, to)
    }

    /// Plan a route from an arbitrary position: the start is the street node
    /// nearest to `position`.
    pub fn plan_route_from(
        &self,
        position: GeoPoint,
        end: &str,
    ) -> Result<PlannedRoute, RouteError> {
        let to = self.resolve(end)?;
        if !position.is_finite() {
            warn!("route request rejected: non-finite position {position:?}");
            return Err(RouteError::InvalidPosition(position));
        }

        let graph = self.fresh_graph()?;
        let from = graph.snap_to_node(position).ok_or_else(|| RouteError::NoPath {
            from: position.to_string(),
            to:   end.to_owned(),
        })?;
        debug!(
            "route request {position} → {end}: snapped to {}",
            self.map.catalog().name(from)
        );
        self.search(&graph, from, to)
    }

    /// Risk score at `point` under the current zones; the baseline score
    /// when no zone covers it.
    pub fn risk_at(&self, point: GeoPoint) -> Result<RiskAssessment, RouteError> {
        if !point.is_finite() {
            return Err(RouteError::InvalidPosition(point));
        }
        let snapshot = self.provider.snapshot().inspect_err(|e| {
            warn!("risk lookup at {point} failed: {e}");
        })?;
        Ok(snapshot.assess(point))
    }

    // ── internals ────────────────────────────────────────────────────────────

    fn resolve(&self, name: &str) -> Result<NodeId, RouteError> {
        self.map.catalog().id_of(name).ok_or_else(|| {
            warn!("route request rejected: unknown node {name:?}");
            RouteError::UnknownNode { requested: name.to_owned(), valid: self.node_names() }
        })
    }

    fn fresh_graph(&self) -> Result<WeightedGraph, RouteError> {
        let snapshot = self.provider.snapshot().inspect_err(|e| {
            warn!("risk snapshot unavailable, aborting request: {e}");
        })?;
        build_weighted_graph(&self.map, &snapshot, &self.policy).map_err(|e| {
            warn!("graph build failed: {e}");
            RouteError::Graph(e)
        })
    }

    fn search(
        &self,
        graph: &WeightedGraph,
        from: NodeId,
        to: NodeId,
    ) -> Result<PlannedRoute, RouteError> {
        let catalog = self.map.catalog();
        match self.router.route(graph, from, to) {
            Ok(path) => {
                // `package` indexes the catalog with these ids.
                if let Some(&stray) = path.nodes.iter().find(|&&n| !graph.contains(n)) {
                    warn!("router returned {stray}, which is not in the graph");
                    return Err(RouteError::Graph(SpatialError::UnknownNode(stray)));
                }
                Ok(self.package(path))
            }
            Err(SpatialError::NoPath { .. }) => {
                debug!("no route {} → {}", catalog.name(from), catalog.name(to));
                Err(RouteError::NoPath {
                    from: catalog.name(from).to_owned(),
                    to:   catalog.name(to).to_owned(),
                })
            }
            Err(e) => {
                warn!("router failed: {e}");
                Err(RouteError::Graph(e))
            }
        }
    }

    fn package(&self, path: RoutePath) -> PlannedRoute {
        let catalog = self.map.catalog();
        let points: Vec<GeoPoint> = path.nodes.iter().map(|&n| catalog.pos(n)).collect();
        let length_m = points.windows(2).fold(0.0, |acc, w| acc + w[0].distance_m(w[1]));

        PlannedRoute {
            path_nodes:       path.nodes.iter().map(|&n| catalog.name(n).to_owned()).collect(),
            path_coordinates: points.iter().map(|p| p.to_tuple()).collect(),
            total_weight:     path.total_weight,
            length_m,
        }
    }
}
