//! `fr-dispatch` — the stateful dispatch host and collaborator seams.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                  |
//! |----------------|-----------------------------------------------------------|
//! | [`config`]     | `DispatchConfig` — thresholds, service-area bounds        |
//! | [`dispatcher`] | `Dispatcher` — current position, route selection,         |
//! |                | tracking flag, proximity refresh                          |
//! | [`collab`]     | `Geocoder`, `WeatherProvider`, `IncidentReporter` seams   |
//! |                | and their serde request/response types                    |
//! | [`error`]      | `DispatchError`, `DispatchResult<T>`                      |
//!
//! # Host model
//!
//! The browser original keeps "current position", "selected route", and
//! "tracking on/off" in module-level globals mutated from a dozen event
//! handlers.  [`Dispatcher`] collapses those into one value with controlled
//! mutation points; every event handler becomes a method call, and the pure
//! computation crates (`fr-data`, `fr-routing`, `fr-tracking`) do the work.

pub mod collab;
pub mod config;
pub mod dispatcher;
pub mod error;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use collab::{
    GeocodeHit, Geocoder, IncidentFeedback, IncidentRecord, IncidentReporter, WeatherProvider,
    WeatherReading,
};
pub use config::DispatchConfig;
pub use dispatcher::{Dispatcher, PositionUpdate};
pub use error::{DispatchError, DispatchResult};
