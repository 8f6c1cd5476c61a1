//! Node catalog and static map configuration.
//!
//! The map is fixed configuration: a catalog of named locations plus the
//! list of streets connecting them.  It is constructed once at startup and
//! injected into the routing service; nothing here is mutated per request.
//!
//! Streets are kept by *name* and resolved to `NodeId` pairs on demand by
//! [`MapConfig::resolve_streets`], so a street referring to an undeclared
//! node is reported with both names intact.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::{ConfigError, ConfigResult, GeoPoint, NodeId};

#[cfg(feature = "fx-hash")]
type NameMap = rustc_hash::FxHashMap<String, NodeId>;
#[cfg(not(feature = "fx-hash"))]
type NameMap = std::collections::HashMap<String, NodeId>;

// ── NodeCatalog ───────────────────────────────────────────────────────────────

/// Named locations with fixed coordinates, indexed densely by `NodeId` in
/// declaration order.
#[derive(Clone, Debug, Default)]
pub struct NodeCatalog {
    names:     Vec<String>,
    positions: Vec<GeoPoint>,
    by_name:   NameMap,
}

impl NodeCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a location and return its `NodeId` (sequential from 0).
    pub fn add(&mut self, name: impl Into<String>, pos: GeoPoint) -> ConfigResult<NodeId> {
        let name = name.into();
        if self.by_name.contains_key(&name) {
            return Err(ConfigError::DuplicateNode(name));
        }
        if !pos.is_finite() {
            return Err(ConfigError::InvalidCoordinate { name });
        }
        let id = NodeId::try_from(self.names.len())
            .map_err(|_| ConfigError::Parse("node catalog exceeds u32 capacity".into()))?;
        self.by_name.insert(name.clone(), id);
        self.names.push(name);
        self.positions.push(pos);
        Ok(id)
    }

    pub fn id_of(&self, name: &str) -> Option<NodeId> {
        self.by_name.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// Name of `id`.  Panics if `id` did not come from this catalog.
    #[inline]
    pub fn name(&self, id: NodeId) -> &str {
        &self.names[id.index()]
    }

    /// Position of `id`.  Panics if `id` did not come from this catalog.
    #[inline]
    pub fn pos(&self, id: NodeId) -> GeoPoint {
        self.positions[id.index()]
    }

    pub fn positions(&self) -> &[GeoPoint] {
        &self.positions
    }

    /// All names in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.names.iter().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &str, GeoPoint)> + '_ {
        self.names
            .iter()
            .zip(&self.positions)
            .enumerate()
            .map(|(i, (name, &pos))| (NodeId(i as u32), name.as_str(), pos))
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

// ── MapConfig ─────────────────────────────────────────────────────────────────

/// An undirected street between two named locations.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Street {
    pub from: String,
    pub to:   String,
}

/// The complete static map: node catalog plus street list.
///
/// # Example
///
/// ```
/// use sr_core::{GeoPoint, MapConfig, NodeCatalog};
///
/// let mut catalog = NodeCatalog::new();
/// catalog.add("home", GeoPoint::new(-74.0060, 40.7128)).unwrap();
/// catalog.add("work", GeoPoint::new(-73.9850, 40.7528)).unwrap();
///
/// let map = MapConfig::new(catalog).with_street("home", "work");
/// assert!(map.validate().is_ok());
/// ```
#[derive(Clone, Debug, Default)]
pub struct MapConfig {
    catalog: NodeCatalog,
    streets: Vec<Street>,
}

impl MapConfig {
    pub fn new(catalog: NodeCatalog) -> Self {
        Self { catalog, streets: Vec::new() }
    }

    /// Declare an undirected street.  Endpoints are checked by
    /// [`resolve_streets`](Self::resolve_streets), not here.
    pub fn add_street(&mut self, from: impl Into<String>, to: impl Into<String>) {
        self.streets.push(Street { from: from.into(), to: to.into() });
    }

    /// Fluent form of [`add_street`](Self::add_street).
    pub fn with_street(mut self, from: impl Into<String>, to: impl Into<String>) -> Self {
        self.add_street(from, to);
        self
    }

    pub fn catalog(&self) -> &NodeCatalog {
        &self.catalog
    }

    pub fn streets(&self) -> &[Street] {
        &self.streets
    }

    /// Resolve every street to a `(NodeId, NodeId)` pair in declaration order.
    ///
    /// Rejects unknown endpoints, self-loops, and duplicate streets (in either
    /// direction).
    pub fn resolve_streets(&self) -> ConfigResult<Vec<(NodeId, NodeId)>> {
        let mut seen = HashSet::with_capacity(self.streets.len());
        let mut out = Vec::with_capacity(self.streets.len());

        for street in &self.streets {
            let a = self.lookup_endpoint(street, &street.from)?;
            let b = self.lookup_endpoint(street, &street.to)?;
            if a == b {
                return Err(ConfigError::SelfLoop(street.from.clone()));
            }
            if !seen.insert((a.min(b), a.max(b))) {
                return Err(ConfigError::DuplicateStreet {
                    from: street.from.clone(),
                    to:   street.to.clone(),
                });
            }
            out.push((a, b));
        }

        Ok(out)
    }

    /// Full topology check, run once at startup.
    pub fn validate(&self) -> ConfigResult<()> {
        self.resolve_streets().map(|_| ())
    }

    fn lookup_endpoint(&self, street: &Street, name: &str) -> ConfigResult<NodeId> {
        self.catalog.id_of(name).ok_or_else(|| ConfigError::UnknownEndpoint {
            from:    street.from.clone(),
            to:      street.to.clone(),
            missing: name.to_owned(),
        })
    }
}
