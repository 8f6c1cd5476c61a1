//! `sr-service` — the safe-route planning facade.
//!
//! Wires the static map (`sr-core`), the live risk zones (`sr-risk`) and the
//! weighted graph and router (`sr-spatial`) into one request-level API:
//! [`RoutingService::plan_route`].
//!
//! # Crate layout
//!
//! | Module      | Contents                                                |
//! |-------------|---------------------------------------------------------|
//! | [`service`] | `RoutingService`, `PlannedRoute`                        |
//! | [`config`]  | `ServiceConfig` (JSON)                                  |
//! | [`error`]   | `RouteError` (per request), `ServiceError` (startup)    |

pub mod config;
pub mod error;
pub mod service;


pub use config::ServiceConfig;
pub use error::{RouteError, ServiceError, ServiceResult};
pub use service::{PlannedRoute, RoutingService};
