//! Dispatch-subsystem error type.

use thiserror::Error;

use fr_data::DataError;
use fr_routing::RoutingError;
use fr_tracking::TrackingError;

/// Errors surfaced by the dispatch host and collaborator seams.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// A route was requested before any position fix arrived.
    #[error("no current position fix")]
    NoPosition,

    /// An incident record was requested with no route selected.
    #[error("no route selected")]
    NoRouteSelected,

    #[error(transparent)]
    Routing(#[from] RoutingError),

    #[error(transparent)]
    Data(#[from] DataError),

    #[error(transparent)]
    Tracking(#[from] TrackingError),

    /// A collaborator (geocoder, weather, incident service) failed.
    #[error("collaborator error: {0}")]
    Collaborator(String),
}

pub type DispatchResult<T> = Result<T, DispatchError>;
