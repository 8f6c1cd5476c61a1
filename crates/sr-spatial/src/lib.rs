//! `sr-spatial` — risk-weighted street graph and minimum-risk routing.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                    |
//! |-------------|-------------------------------------------------------------|
//! | [`network`] | `WeightedGraph` (CSR + R-tree), `GraphBuilder`              |
//! | [`weight`]  | `WeightPolicy`, midpoint risk weighting                     |
//! | [`build`]   | `build_weighted_graph` (map + risk snapshot → graph)        |
//! | [`router`]  | `Router` trait, `RoutePath`, `DijkstraRouter`               |
//! | [`error`]   | `SpatialError`, `SpatialResult<T>`                          |
//!
//! # Feature flags
//!
//! | Flag       | Effect                                                    |
//! |------------|-----------------------------------------------------------|
//! | `parallel` | Street weights computed with Rayon.                       |
//! | `serde`    | Derives `Serialize`/`Deserialize` on `WeightPolicy`.      |

pub mod build;
pub mod error;
pub mod network;
pub mod router;
pub mod weight;


pub use build::build_weighted_graph;
pub use error::{SpatialError, SpatialResult};
pub use network::{GraphBuilder, WeightedGraph};
pub use router::{DijkstraRouter, RoutePath, Router};
pub use weight::{BASELINE_WEIGHT, RISK_PENALTY_WEIGHT, WeightPolicy};
