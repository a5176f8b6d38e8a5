//! Routing provider trait — the seam to the external routing service.
//!
//! The core never performs I/O; applications implement this trait over their
//! routing client (or a fixture in tests) and hand the resulting candidates
//! to [`RouteSet`][crate::RouteSet].

use fr_core::GeoPoint;

use crate::{RouteCandidate, RoutingError};

/// Pluggable source of route alternatives.
///
/// # Thread safety
///
/// Implementations must be `Send + Sync` so a provider can be shared by an
/// event-driven host without wrapping.
pub trait RouteProvider: Send + Sync {
    /// Compute route alternatives from `from` to `to`.
    ///
    /// An empty `Vec` is a valid answer ("no alternatives found") distinct
    /// from [`RoutingError::NoRoute`], which means the provider is certain
    /// the destination is unreachable.
    fn routes(&self, from: GeoPoint, to: GeoPoint) -> Result<Vec<RouteCandidate>, RoutingError>;
}
