//! Unit conversion constants and helpers.
//!
//! Internal canonical units are kilometres (distance) and seconds (time).
//! Feet appear only at the hydrant-connection policy boundary, where the
//! threshold is specified in feet by the fire service.

/// Feet per kilometre.
pub const FEET_PER_KM: f64 = 3_280.84;

/// Seconds per hour.
pub const SECS_PER_HOUR: f64 = 3_600.0;

#[inline]
pub fn km_to_feet(km: f64) -> f64 {
    km * FEET_PER_KM
}

#[inline]
pub fn m_to_km(m: f64) -> f64 {
    m / 1_000.0
}

#[inline]
pub fn secs_to_hours(secs: f64) -> f64 {
    secs / SECS_PER_HOUR
}

/// Whole minutes, rounded to nearest — matches how ETAs are reported.
#[inline]
pub fn secs_to_minutes(secs: f64) -> u32 {
    (secs / 60.0).round() as u32
}
