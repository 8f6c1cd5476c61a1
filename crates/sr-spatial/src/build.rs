//! Per-request graph assembly from static topology and a risk snapshot.

use log::debug;

use sr_core::{MapConfig, NodeCatalog, NodeId};
use sr_risk::RiskIndex;

use crate::network::{GraphBuilder, WeightedGraph};
use crate::weight::WeightPolicy;
use crate::SpatialResult;

/// Build a fresh [`WeightedGraph`] from `map`, weighting every street against
/// `risk` under `policy`.
///
/// Fails with [`SpatialError::Config`](crate::SpatialError::Config) if a
/// street references an undeclared node, loops onto itself, or is declared
/// twice, and with
/// [`SpatialError::InvalidPolicy`](crate::SpatialError::InvalidPolicy) for an
/// invalid policy.  `NodeId`s in the result match the catalog's.
pub fn build_weighted_graph(
    map: &MapConfig,
    risk: &RiskIndex,
    policy: &WeightPolicy,
) -> SpatialResult<WeightedGraph> {
    policy.validate()?;
    let streets = map.resolve_streets()?;
    let catalog = map.catalog();

    let weights = street_weights(catalog, &streets, risk, policy);
    let penalized = weights.iter().filter(|&&w| w > policy.baseline()).count();

    let mut b = GraphBuilder::with_capacity(catalog.len(), streets.len());
    for &pos in catalog.positions() {
        b.add_node(pos);
    }
    for (&(from, to), weight) in streets.iter().zip(weights) {
        b.add_street(from, to, weight);
    }

    let graph = b.build();
    debug!(
        "weighted graph built: {} nodes, {} streets, {} in risk zones ({} zones indexed)",
        graph.node_count(),
        graph.street_count(),
        penalized,
        risk.len()
    );
    Ok(graph)
}

#[cfg(not(feature = "parallel"))]
fn street_weights(
    catalog: &NodeCatalog,
    streets: &[(NodeId, NodeId)],
    risk: &RiskIndex,
    policy: &WeightPolicy,
) -> Vec<u32> {
    streets
        .iter()
        .map(|&(a, b)| policy.edge_weight(catalog.pos(a), catalog.pos(b), risk))
        .collect()
}

#[cfg(feature = "parallel")]
fn street_weights(
    catalog: &NodeCatalog,
    streets: &[(NodeId, NodeId)],
    risk: &RiskIndex,
    policy: &WeightPolicy,
) -> Vec<u32> {
    use rayon::prelude::*;

    streets
        .par_iter()
        .map(|&(a, b)| policy.edge_weight(catalog.pos(a), catalog.pos(b), risk))
        .collect()
}
