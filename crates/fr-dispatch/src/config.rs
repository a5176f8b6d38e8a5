//! Dispatch host configuration.

use serde::{Deserialize, Serialize};

use fr_core::{BoundingBox, GeoPoint};
use fr_data::DEFAULT_CONNECTION_RANGE_FEET;

/// Top-level dispatch configuration.
///
/// Typically loaded from a TOML/JSON file by the application crate and
/// passed to [`Dispatcher::new`][crate::Dispatcher::new].
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct DispatchConfig {
    /// Maximum hose-connection distance in feet.  Station policy, not a
    /// physical constant — confirm changes with the fire service.
    pub connection_range_feet: f64,

    /// Bounding box applied to geocoder searches.
    pub search_bounds: BoundingBox,

    /// Minimum incident reports before the remote service accepts a
    /// training request.
    pub min_training_incidents: usize,
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            connection_range_feet: DEFAULT_CONNECTION_RANGE_FEET,
            search_bounds: default_service_area(),
            min_training_incidents: 5,
        }
    }
}

/// Default service area: the Santa Cruz, Laguna response district.
fn default_service_area() -> BoundingBox {
    BoundingBox::new(GeoPoint::new(14.20, 121.35), GeoPoint::new(14.32, 121.45))
}
