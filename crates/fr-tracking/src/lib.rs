//! `fr-tracking` — timestamped positions and movement-metrics estimation.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                   |
//! |--------------|------------------------------------------------------------|
//! | [`position`] | `Position` — `GeoPoint` + timestamp + accuracy             |
//! | [`movement`] | `MovementMetrics`, `MovementTracker`, `estimate_movement`  |
//! | [`watch`]    | `PositionSource` + `TrackObserver` seams                   |
//! | [`error`]    | `TrackingError`, `TrackingResult<T>`                       |
//!
//! # Estimation model
//!
//! Speed and heading are derived from the **two most recent** samples only —
//! there is no filtering or smoothing, so estimation is stateless given
//! those inputs.  The only carried state is the degenerate-input policy:
//! a non-positive elapsed time keeps the previous speed, an unmoved position
//! keeps the previous heading.  [`MovementTracker`] packages that policy
//! behind a one-sample-at-a-time `push` API.

pub mod error;
pub mod movement;
pub mod position;
pub mod watch;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{TrackingError, TrackingResult};
pub use movement::{estimate_movement, MovementMetrics, MovementTracker};
pub use position::Position;
pub use watch::{PositionSource, TrackObserver};
