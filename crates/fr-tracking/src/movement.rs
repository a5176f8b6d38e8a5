//! Speed and heading estimation from successive position samples.

use fr_core::units;

use crate::Position;

// ── MovementMetrics ───────────────────────────────────────────────────────────

/// Instantaneous speed and heading of the tracked unit.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MovementMetrics {
    /// Ground speed in km/h.
    pub speed_kmh: f64,

    /// Compass heading in degrees, `[0, 360)`.
    pub heading_deg: f64,
}

impl MovementMetrics {
    /// The at-rest baseline: 0 km/h, heading due north.
    pub const STATIONARY: MovementMetrics = MovementMetrics {
        speed_kmh:   0.0,
        heading_deg: 0.0,
    };
}

impl Default for MovementMetrics {
    fn default() -> Self {
        Self::STATIONARY
    }
}

// ── Estimation ────────────────────────────────────────────────────────────────

/// Derive metrics from two samples, carrying `last` through degenerate input.
///
/// - Elapsed time ≤ 0 (clock skew, duplicated fix): **speed is kept** from
///   `last` — recomputing would divide by zero or invert sign.
/// - `prev.point == curr.point`: **heading is kept** from `last` — the
///   bearing of a zero-length vector is undefined.
///
/// Both are defined fallback behaviors, not errors.
pub fn estimate_movement(
    prev: &Position,
    curr: &Position,
    last: MovementMetrics,
) -> MovementMetrics {
    let elapsed_hours = units::secs_to_hours(curr.elapsed_secs_since(prev));

    let speed_kmh = if elapsed_hours > 0.0 {
        prev.point.distance_km(curr.point) / elapsed_hours
    } else {
        last.speed_kmh
    };

    let heading_deg = if prev.point == curr.point {
        last.heading_deg
    } else {
        prev.point.bearing_deg(curr.point)
    };

    MovementMetrics { speed_kmh, heading_deg }
}

// ── MovementTracker ───────────────────────────────────────────────────────────

/// Consumes a stream of position samples and maintains current metrics.
///
/// The tracker is the stateful face of [`estimate_movement`]: it remembers
/// the previous sample and the last metrics so each geolocation callback
/// reduces to a single [`push`](Self::push).
#[derive(Clone, Debug, Default)]
pub struct MovementTracker {
    previous: Option<Position>,
    metrics:  MovementMetrics,
}

impl MovementTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one sample; returns the metrics after applying it.
    ///
    /// The first sample only establishes the baseline — metrics stay at
    /// their current value (initially [`MovementMetrics::STATIONARY`]).
    pub fn push(&mut self, sample: Position) -> MovementMetrics {
        if let Some(prev) = self.previous {
            self.metrics = estimate_movement(&prev, &sample, self.metrics);
        }
        self.previous = Some(sample);
        self.metrics
    }

    /// Current metrics without feeding a sample.
    #[inline]
    pub fn metrics(&self) -> MovementMetrics {
        self.metrics
    }

    /// Last sample fed, if any.
    #[inline]
    pub fn last_position(&self) -> Option<&Position> {
        self.previous.as_ref()
    }

    /// Drop history and reset metrics to stationary.  Called when tracking
    /// stops, so a later restart does not compute a huge teleport speed from
    /// the stale previous fix.
    pub fn reset(&mut self) {
        self.previous = None;
        self.metrics = MovementMetrics::STATIONARY;
    }
}
