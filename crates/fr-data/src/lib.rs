//! `fr-data` — hydrant and hazard-road reference data plus proximity lookup.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                    |
//! |---------------|-------------------------------------------------------------|
//! | [`hydrant`]   | `Hydrant`, `HydrantCondition`                               |
//! | [`hazard`]    | `HazardRoad`, `HazardSeverity`                              |
//! | [`proximity`] | `nearest_hydrant`, `ProximityResult`, connection threshold  |
//! | [`loader`]    | CSV survey loader, JSON envelope loaders                    |
//! | [`error`]     | `DataError`, `DataResult<T>`                                |
//!
//! # Ingestion boundary
//!
//! Hydrants and hazard roads are reference data owned by an external store;
//! this crate only reads them.  All validation happens in [`loader`]: it is
//! the one place coordinates are range-checked and free-text condition /
//! severity labels are folded into the closed enums.  Everything downstream
//! (proximity, dispatch) can assume well-formed data.

pub mod error;
pub mod hazard;
pub mod hydrant;
pub mod loader;
pub mod proximity;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{DataError, DataResult};
pub use hazard::{HazardRoad, HazardSeverity};
pub use hydrant::{Hydrant, HydrantCondition};
pub use proximity::{nearest_hydrant, ProximityResult, DEFAULT_CONNECTION_RANGE_FEET};
