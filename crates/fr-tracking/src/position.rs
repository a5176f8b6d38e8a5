//! Timestamped position samples.

use fr_core::GeoPoint;

/// One geolocation fix.
///
/// Timestamps are Unix milliseconds as delivered by geolocation providers.
/// The only arithmetic the core performs on them is subtraction, and a later
/// sample carrying an **earlier** timestamp is an expected input (clock skew,
/// duplicated fix) — see the degenerate-input policy in
/// [`movement`][crate::movement].
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub point: GeoPoint,

    /// Unix timestamp in milliseconds.
    pub timestamp_ms: i64,

    /// Reported horizontal accuracy in metres, if the provider gave one.
    pub accuracy_m: Option<f64>,
}

impl Position {
    pub fn new(point: GeoPoint, timestamp_ms: i64) -> Self {
        Self { point, timestamp_ms, accuracy_m: None }
    }

    /// Seconds elapsed from `earlier` to `self`.  Negative when the clock
    /// went backwards; callers apply the degenerate-input policy.
    #[inline]
    pub fn elapsed_secs_since(&self, earlier: &Position) -> f64 {
        (self.timestamp_ms - earlier.timestamp_ms) as f64 / 1_000.0
    }
}
