//! External-collaborator seams.
//!
//! The core never opens a socket.  Applications implement these traits over
//! their HTTP clients; tests implement them over fixtures.  The serde types
//! mirror the collaborator JSON so a trait implementation is a thin
//! serialize-send-deserialize wrapper.

use serde::{Deserialize, Serialize};

use fr_core::{BoundingBox, GeoPoint};

use crate::DispatchError;

// ── Geocoding ─────────────────────────────────────────────────────────────────

/// One free-text search result.
#[derive(Clone, Debug, PartialEq)]
pub struct GeocodeHit {
    /// Display name ("Santa Cruz Public Market").
    pub name: String,

    pub point: GeoPoint,
}

/// Free-text to coordinate resolution, bounded to the service area.
pub trait Geocoder {
    /// Raw provider query.  `bounds` is a hint the provider may or may not
    /// honor; [`bounded_search`](Self::bounded_search) enforces it.
    fn search(
        &self,
        query: &str,
        bounds: &BoundingBox,
    ) -> Result<Vec<GeocodeHit>, DispatchError>;

    /// [`search`](Self::search) with the host-side policy applied: queries
    /// shorter than 2 characters return empty without hitting the provider,
    /// and hits outside `bounds` are dropped.
    fn bounded_search(
        &self,
        query: &str,
        bounds: &BoundingBox,
    ) -> Result<Vec<GeocodeHit>, DispatchError> {
        if query.trim().len() < 2 {
            return Ok(vec![]);
        }
        let mut hits = self.search(query, bounds)?;
        hits.retain(|hit| bounds.contains(hit.point));
        Ok(hits)
    }
}

// ── Weather ───────────────────────────────────────────────────────────────────

/// Ambient weather at the station, used to pre-fill incident reports.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WeatherReading {
    pub temperature_c: f64,
    pub humidity_pct: f64,
    pub wind_speed_kmh: f64,
    /// Provider condition label ("Clear", "Rain", …).
    pub condition: String,
}

impl WeatherReading {
    /// Fixed default used when every weather endpoint fails: typical dry
    /// conditions for the service area.
    pub fn fallback() -> Self {
        Self {
            temperature_c:  28.0,
            humidity_pct:   75.0,
            wind_speed_kmh: 12.0,
            condition:      "Clear".to_string(),
        }
    }
}

/// Source of [`WeatherReading`]s.
pub trait WeatherProvider {
    fn current(&self) -> Result<WeatherReading, DispatchError>;

    /// [`current`](Self::current), substituting [`WeatherReading::fallback`]
    /// when the provider fails.  Never errors.
    fn current_or_fallback(&self) -> WeatherReading {
        match self.current() {
            Ok(reading) => reading,
            Err(e) => {
                log::warn!("weather provider failed ({e}), using fallback reading");
                WeatherReading::fallback()
            }
        }
    }
}

// ── Incident reporting ────────────────────────────────────────────────────────

/// An incident report submitted to the remote learning service.
///
/// Field names match the service's JSON schema verbatim.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct IncidentRecord {
    pub location: String,
    pub type_of_occupancy: String,
    pub response_time_min: u32,
    pub distance_km: f64,
    pub temperature_c: f64,
    pub humidity_pct: f64,
    pub wind_speed_kmh: f64,
    pub weather_condition: String,
    pub road_condition: String,
}

impl IncidentRecord {
    /// The request body the service expects: the record wrapped in an
    /// `incident_data` envelope.
    pub fn request_body(&self) -> serde_json::Value {
        serde_json::json!({ "incident_data": self })
    }
}

/// Structured feedback returned by the learning service.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct IncidentFeedback {
    /// Model accuracy after incorporating the report, in `[0, 1]`.
    pub accuracy: f64,

    /// Human-readable performance suggestions.
    #[serde(default)]
    pub suggestions: Vec<String>,

    /// Present when the service wants more data before retraining.
    #[serde(default)]
    pub training_recommendation: Option<String>,
}

/// Submission seam to the remote incident/ML service.  Opaque JSON
/// request/response; retraining cadence and model internals stay on the
/// service side.
pub trait IncidentReporter {
    fn submit(&self, record: &IncidentRecord) -> Result<IncidentFeedback, DispatchError>;
}
