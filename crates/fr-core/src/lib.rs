//! `fr-core` — foundational types for the fire-response core.
//!
//! This crate is a dependency of every other `fr-*` crate.  It intentionally
//! has no `fr-*` dependencies and minimal external ones (only `thiserror`,
//! plus optional `serde`).
//!
//! # What lives here
//!
//! | Module    | Contents                                             |
//! |-----------|------------------------------------------------------|
//! | [`geo`]   | `GeoPoint`, haversine distance, forward azimuth,     |
//! |           | `BoundingBox`                                        |
//! | [`units`] | km ↔ feet ↔ metres conversions, time helpers         |
//! | [`ids`]   | `HydrantId`, `IncidentId`                            |
//! | [`error`] | `FrError`, `FrResult`                                |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                   |
//! |---------|----------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.      |

pub mod error;
pub mod geo;
pub mod ids;
pub mod units;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{FrError, FrResult};
pub use geo::{BoundingBox, GeoPoint};
pub use ids::{HydrantId, IncidentId};
