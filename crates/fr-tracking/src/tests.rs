//! Unit tests for fr-tracking.

use fr_core::GeoPoint;

use crate::{estimate_movement, MovementMetrics, MovementTracker, Position};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn pos(lat: f64, lon: f64, timestamp_ms: i64) -> Position {
    Position::new(GeoPoint::new(lat, lon), timestamp_ms)
}

// ── Position ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod position {
    use super::*;

    #[test]
    fn elapsed_seconds() {
        let a = pos(14.0, 121.0, 10_000);
        let b = pos(14.0, 121.0, 70_000);
        assert_eq!(b.elapsed_secs_since(&a), 60.0);
        assert_eq!(a.elapsed_secs_since(&b), -60.0);
    }

    #[test]
    fn accuracy_defaults_to_none() {
        assert_eq!(pos(14.0, 121.0, 0).accuracy_m, None);
    }
}

// ── estimate_movement ─────────────────────────────────────────────────────────

#[cfg(test)]
mod estimate {
    use super::*;

    #[test]
    fn due_north_minute() {
        // ~111 m north over 60 s → ~6.7 km/h, heading ~0°.
        let prev = pos(14.0, 121.0, 0);
        let curr = pos(14.001, 121.0, 60_000);
        let m = estimate_movement(&prev, &curr, MovementMetrics::STATIONARY);
        assert!(m.speed_kmh > 0.0);
        assert!((m.speed_kmh - 6.67).abs() < 0.1, "got {} km/h", m.speed_kmh);
        assert!(m.heading_deg < 0.01 || m.heading_deg > 359.99, "got {}°", m.heading_deg);
    }

    #[test]
    fn non_positive_elapsed_keeps_speed() {
        let last = MovementMetrics { speed_kmh: 42.0, heading_deg: 90.0 };
        let prev = pos(14.0, 121.0, 60_000);

        // Duplicate timestamp.
        let dup = pos(14.001, 121.0, 60_000);
        let m = estimate_movement(&prev, &dup, last);
        assert_eq!(m.speed_kmh, 42.0);

        // Clock went backwards.
        let skew = pos(14.001, 121.0, 30_000);
        let m = estimate_movement(&prev, &skew, last);
        assert_eq!(m.speed_kmh, 42.0);
        // The unit did move, so heading still updates.
        assert!(m.heading_deg < 0.01 || m.heading_deg > 359.99);
    }

    #[test]
    fn identical_points_keep_heading() {
        let last = MovementMetrics { speed_kmh: 42.0, heading_deg: 135.0 };
        let prev = pos(14.0, 121.0, 0);
        let curr = pos(14.0, 121.0, 60_000);
        let m = estimate_movement(&prev, &curr, last);
        assert_eq!(m.heading_deg, 135.0);
        // Time advanced without displacement: speed drops to zero.
        assert_eq!(m.speed_kmh, 0.0);
    }

    #[test]
    fn eastbound_heading() {
        let prev = pos(14.0, 121.0, 0);
        let curr = pos(14.0, 121.001, 30_000);
        let m = estimate_movement(&prev, &curr, MovementMetrics::STATIONARY);
        assert!((m.heading_deg - 90.0).abs() < 0.01);
    }
}

// ── MovementTracker ───────────────────────────────────────────────────────────

#[cfg(test)]
mod tracker {
    use super::*;

    #[test]
    fn first_sample_is_baseline_only() {
        let mut t = MovementTracker::new();
        let m = t.push(pos(14.0, 121.0, 0));
        assert_eq!(m, MovementMetrics::STATIONARY);
        assert_eq!(t.last_position().unwrap().timestamp_ms, 0);
    }

    #[test]
    fn second_sample_produces_metrics() {
        let mut t = MovementTracker::new();
        t.push(pos(14.0, 121.0, 0));
        let m = t.push(pos(14.001, 121.0, 60_000));
        assert!(m.speed_kmh > 6.0);
        assert_eq!(t.metrics(), m);
    }

    #[test]
    fn stationary_stream_keeps_last_heading() {
        let mut t = MovementTracker::new();
        t.push(pos(14.0, 121.0, 0));
        t.push(pos(14.0, 121.001, 30_000)); // eastbound leg
        let heading = t.metrics().heading_deg;
        assert!((heading - 90.0).abs() < 0.01);

        // Unit parks: same point, time advancing.
        let m = t.push(pos(14.0, 121.001, 60_000));
        assert_eq!(m.heading_deg, heading);
        assert_eq!(m.speed_kmh, 0.0);
    }

    #[test]
    fn out_of_order_sample_keeps_speed() {
        let mut t = MovementTracker::new();
        t.push(pos(14.0, 121.0, 0));
        t.push(pos(14.001, 121.0, 60_000));
        let speed = t.metrics().speed_kmh;

        // Provider re-delivers an old fix.
        let m = t.push(pos(14.002, 121.0, 50_000));
        assert_eq!(m.speed_kmh, speed);
    }

    #[test]
    fn reset_clears_history() {
        let mut t = MovementTracker::new();
        t.push(pos(14.0, 121.0, 0));
        t.push(pos(14.001, 121.0, 60_000));
        t.reset();
        assert_eq!(t.metrics(), MovementMetrics::STATIONARY);
        assert!(t.last_position().is_none());

        // A fresh baseline after reset must not see the stale fix.
        let m = t.push(pos(14.5, 121.5, 120_000));
        assert_eq!(m, MovementMetrics::STATIONARY);
    }
}
