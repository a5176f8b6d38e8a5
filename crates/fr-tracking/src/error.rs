//! Tracking-subsystem error type.

use thiserror::Error;

/// Errors surfaced by [`PositionSource`][crate::PositionSource]
/// implementations.  Estimation itself never fails — degenerate input has
/// defined fallback behavior.
#[derive(Debug, Error)]
pub enum TrackingError {
    #[error("geolocation unavailable: {0}")]
    Unavailable(String),

    #[error("geolocation timed out after {0} ms")]
    Timeout(u64),

    #[error("geolocation permission denied")]
    PermissionDenied,
}

pub type TrackingResult<T> = Result<T, TrackingError>;
