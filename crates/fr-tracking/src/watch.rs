//! Geolocation seams: sample source and tracking observer.
//!
//! The browser original wires callbacks straight into global mutable state.
//! Here the producer side is a trait the application implements over its
//! geolocation client, and the consumer side is an observer with no-op
//! defaults so UI layers subscribe to exactly the events they render.
//! "Unsubscribing" is dropping the observer — each estimate depends only on
//! the two most recent samples, so there is no in-flight state to reconcile.

use crate::{MovementMetrics, Position, TrackingError};

/// Pluggable source of position fixes.
///
/// Single-shot mode is [`sample`](Self::sample); continuous ("watch") mode
/// is the host calling `sample` per delivery interval, or the platform
/// pushing fixes into [`MovementTracker::push`][crate::MovementTracker::push]
/// directly.  Timeout and permission semantics live in the implementation,
/// surfaced as [`TrackingError`].
pub trait PositionSource: Send {
    /// Obtain one position fix.
    fn sample(&mut self) -> Result<Position, TrackingError>;
}

/// Callbacks invoked by the dispatch host as tracking progresses.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
pub trait TrackObserver {
    /// A new fix was processed; `metrics` already reflects it.
    fn on_sample(&mut self, _position: &Position, _metrics: MovementMetrics) {}

    /// Continuous tracking was switched on.
    fn on_tracking_started(&mut self) {}

    /// Continuous tracking was switched off and the tracker reset.
    fn on_tracking_stopped(&mut self) {}
}

/// A [`TrackObserver`] that does nothing.  Use when the host is driven
/// headless (tests, replay).
pub struct NoopTrackObserver;

impl TrackObserver for NoopTrackObserver {}
