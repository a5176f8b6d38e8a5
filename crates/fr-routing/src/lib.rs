//! `fr-routing` — route candidates, ranking, and selection state.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                 |
//! |---------------|----------------------------------------------------------|
//! | [`candidate`] | `RouteCandidate`, `TurnInstruction`                      |
//! | [`route_set`] | `rank_routes`, `RouteSet` (ranked alternatives + active) |
//! | [`provider`]  | `RouteProvider` trait — seam to the external router      |
//! | [`error`]     | `RoutingError`, `RoutingResult<T>`                       |
//!
//! # Selection model
//!
//! Alternatives for one (origin, destination) pair form a [`RouteSet`].
//! The set ranks its members once at construction (fastest first, stable)
//! and tracks exactly one **selected** member, defaulting to the fastest.
//! Selection by index is defensive: an out-of-bounds index is a no-op, since
//! selection requests come from UI events that can race a route refresh.

pub mod candidate;
pub mod error;
pub mod provider;
pub mod route_set;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use candidate::{RouteCandidate, TurnInstruction};
pub use error::{RoutingError, RoutingResult};
pub use provider::RouteProvider;
pub use route_set::{rank_routes, RouteSet};
