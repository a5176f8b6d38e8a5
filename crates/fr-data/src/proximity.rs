//! Nearest-hydrant resolution.
//!
//! A linear scan over the hydrant list.  The whole service area has a few
//! dozen hydrants, so there is nothing to index; the scan also gives the
//! deterministic tie-break (below) for free.

use fr_core::{units, GeoPoint, HydrantId};

use crate::Hydrant;

/// Maximum hose-connection distance in feet.
///
/// Domain policy from the fire service, not a physical law — call sites take
/// it as a parameter and `DispatchConfig` makes it configurable per
/// deployment.
pub const DEFAULT_CONNECTION_RANGE_FEET: f64 = 50.0;

/// Outcome of a nearest-hydrant query.  Computed on demand, never stored.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ProximityResult {
    /// The winning hydrant, or `None` when the list holds no serviceable
    /// hydrant (not an error — the UI shows "no hydrant nearby").
    pub hydrant: Option<HydrantId>,

    /// Great-circle distance to the winner in km; `f64::INFINITY` when
    /// `hydrant` is `None`.
    pub distance_km: f64,

    /// Same distance converted to feet (the unit of the range policy).
    pub distance_feet: f64,

    /// `distance_feet <= max_range_feet` — the hydrant is close enough for a
    /// hose connection.  Always `false` when `hydrant` is `None`.
    pub within_range: bool,
}

impl ProximityResult {
    /// The "no serviceable hydrant" result.
    pub fn none() -> Self {
        Self {
            hydrant:       None,
            distance_km:   f64::INFINITY,
            distance_feet: f64::INFINITY,
            within_range:  false,
        }
    }
}

/// Find the nearest serviceable hydrant to `point`.
///
/// Hydrants whose condition is `Unserviceable` are skipped entirely.  Among
/// the rest the minimum haversine distance wins; on an exact distance tie the
/// **first occurrence in input order** wins (the strict `<` comparison never
/// replaces an equal-distance incumbent).  That makes results stable across
/// calls for a fixed input list.
pub fn nearest_hydrant(
    point:          GeoPoint,
    hydrants:       &[Hydrant],
    max_range_feet: f64,
) -> ProximityResult {
    let mut best: Option<(HydrantId, f64)> = None;

    for hydrant in hydrants {
        if !hydrant.is_serviceable() {
            continue;
        }
        let d = point.distance_km(hydrant.position);
        match best {
            Some((_, best_d)) if d >= best_d => {}
            _ => best = Some((hydrant.id, d)),
        }
    }

    match best {
        None => ProximityResult::none(),
        Some((id, distance_km)) => {
            let distance_feet = units::km_to_feet(distance_km);
            ProximityResult {
                hydrant: Some(id),
                distance_km,
                distance_feet,
                within_range: distance_feet <= max_range_feet,
            }
        }
    }
}
