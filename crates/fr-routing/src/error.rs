//! Routing-subsystem error type.

use thiserror::Error;

use fr_core::GeoPoint;

/// Errors produced by `fr-routing` providers.
#[derive(Debug, Error)]
pub enum RoutingError {
    #[error("no route from {from} to {to}")]
    NoRoute { from: GeoPoint, to: GeoPoint },

    #[error("routing provider error: {0}")]
    Provider(String),
}

pub type RoutingResult<T> = Result<T, RoutingError>;
