//! Route candidate and turn instruction types.

use fr_core::{units, GeoPoint};

/// One step of turn-by-turn guidance.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TurnInstruction {
    /// Human-readable instruction ("Turn left onto P. Guevarra Ave").
    pub text: String,

    /// Distance covered by this step in metres.
    pub distance_m: f64,
}

/// One computed route between an origin and a destination.
///
/// Produced by the external routing collaborator; this crate only ranks and
/// selects among them.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RouteCandidate {
    /// Total travel time in seconds.
    pub total_secs: f64,

    /// Total travel distance in metres.
    pub total_meters: f64,

    /// Route geometry, origin to destination.
    pub path: Vec<GeoPoint>,

    /// Turn-by-turn guidance, in travel order.  May be empty.
    pub instructions: Vec<TurnInstruction>,
}

impl RouteCandidate {
    /// Travel time in whole minutes, rounded — the unit shown as ETA.
    #[inline]
    pub fn duration_min(&self) -> u32 {
        units::secs_to_minutes(self.total_secs)
    }

    /// Travel distance in kilometres.
    #[inline]
    pub fn distance_km(&self) -> f64 {
        units::m_to_km(self.total_meters)
    }

    /// First guidance step, or a generic fallback when the provider sent no
    /// instructions.
    pub fn first_instruction(&self) -> &str {
        self.instructions
            .first()
            .map(|i| i.text.as_str())
            .unwrap_or("Follow the route")
    }
}
