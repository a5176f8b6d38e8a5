//! Reference-data loaders — the ingestion boundary.
//!
//! # CSV format (hydrant survey)
//!
//! One row per hydrant:
//!
//! ```csv
//! number,address,latitude,longitude,condition,remarks
//! H-001,P. Guevarra Ave,14.280248,121.394529,Operational,Low Pressure
//! H-002,Pedro Guevarra St,14.280069,121.394703,Operational,High Pressure
//! H-016,Gatid crossing,14.277512,121.419285,Unserviceable,Unserviceable
//! ```
//!
//! Rows receive sequential `HydrantId`s in file order (the proximity
//! tie-break depends on that order staying stable).
//!
//! # JSON envelopes (external data source)
//!
//! The hydrant/hazard store answers reads with wrapped arrays:
//!
//! ```json
//! { "hydrants": [ { "number": "H-001", "address": "...", "latitude": 14.28,
//!                   "longitude": 121.39, "condition": "Operational",
//!                   "remarks": "Low Pressure" } ] }
//! { "hazard_roads": [ { "name": "Riverside Rd", "severity": "high",
//!                       "reason": "flooding",
//!                       "coordinates": [[14.27, 121.40], [14.28, 121.41]] } ] }
//! ```
//!
//! # Validation
//!
//! This is the one place coordinates are range-checked
//! ([`GeoPoint::in_valid_range`]) and condition/severity labels are folded
//! into the closed enums.  Unknown labels trigger the documented fallbacks
//! (`Unserviceable` / `Low`) with a warning; out-of-range coordinates are a
//! hard [`DataError::CoordinateRange`].

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use fr_core::{GeoPoint, HydrantId};

use crate::hazard::{HazardRoad, HazardSeverity};
use crate::hydrant::{Hydrant, HydrantCondition};
use crate::DataError;

// ── Records ───────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct HydrantRecord {
    number:    String,
    address:   String,
    latitude:  f64,
    longitude: f64,
    condition: String,
    remarks:   String,
}

#[derive(Deserialize)]
struct HydrantEnvelope {
    hydrants: Vec<HydrantRecord>,
}

#[derive(Deserialize)]
struct HazardRoadRecord {
    name:        String,
    severity:    String,
    reason:      String,
    coordinates: Vec<[f64; 2]>, // [lat, lon] pairs
}

#[derive(Deserialize)]
struct HazardRoadEnvelope {
    hazard_roads: Vec<HazardRoadRecord>,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load hydrants from a survey CSV file.
pub fn load_hydrants_csv(path: &Path) -> Result<Vec<Hydrant>, DataError> {
    let file = std::fs::File::open(path).map_err(DataError::Io)?;
    load_hydrants_reader(file)
}

/// Like [`load_hydrants_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or loading from network
/// streams.
pub fn load_hydrants_reader<R: Read>(reader: R) -> Result<Vec<Hydrant>, DataError> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut hydrants = Vec::new();

    for result in csv_reader.deserialize::<HydrantRecord>() {
        let record = result.map_err(|e| DataError::Parse(e.to_string()))?;
        hydrants.push(hydrant_from_record(record, hydrants.len())?);
    }

    log::info!("loaded {} hydrants", hydrants.len());
    Ok(hydrants)
}

/// Parse the external store's `{"hydrants": [...]}` JSON envelope.
pub fn hydrants_from_json<R: Read>(reader: R) -> Result<Vec<Hydrant>, DataError> {
    let envelope: HydrantEnvelope =
        serde_json::from_reader(reader).map_err(|e| DataError::Parse(e.to_string()))?;

    let mut hydrants = Vec::with_capacity(envelope.hydrants.len());
    for record in envelope.hydrants {
        hydrants.push(hydrant_from_record(record, hydrants.len())?);
    }

    log::info!("loaded {} hydrants from JSON envelope", hydrants.len());
    Ok(hydrants)
}

/// Parse the external store's `{"hazard_roads": [...]}` JSON envelope.
pub fn hazard_roads_from_json<R: Read>(reader: R) -> Result<Vec<HazardRoad>, DataError> {
    let envelope: HazardRoadEnvelope =
        serde_json::from_reader(reader).map_err(|e| DataError::Parse(e.to_string()))?;

    let mut roads = Vec::with_capacity(envelope.hazard_roads.len());
    for record in envelope.hazard_roads {
        let path = record
            .coordinates
            .iter()
            .map(|&[lat, lon]| checked_point(lat, lon))
            .collect::<Result<Vec<GeoPoint>, DataError>>()?;

        let severity = HazardSeverity::parse_label(&record.severity).unwrap_or_else(|| {
            log::warn!(
                "hazard road {:?}: unknown severity {:?}, treating as low",
                record.name, record.severity
            );
            HazardSeverity::Low
        });

        roads.push(HazardRoad {
            name: record.name,
            path,
            severity,
            reason: record.reason,
        });
    }

    log::info!("loaded {} hazard roads", roads.len());
    Ok(roads)
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn hydrant_from_record(record: HydrantRecord, index: usize) -> Result<Hydrant, DataError> {
    let position = checked_point(record.latitude, record.longitude)?;

    let condition = HydrantCondition::parse_label(&record.condition).unwrap_or_else(|| {
        log::warn!(
            "hydrant {:?}: unknown condition {:?}, treating as unserviceable",
            record.number, record.condition
        );
        HydrantCondition::Unserviceable
    });

    Ok(Hydrant {
        id: HydrantId(index as u32),
        number: record.number,
        address: record.address,
        position,
        condition,
        remarks: record.remarks,
    })
}

fn checked_point(lat: f64, lon: f64) -> Result<GeoPoint, DataError> {
    let point = GeoPoint::new(lat, lon);
    if !point.in_valid_range() {
        return Err(DataError::CoordinateRange { lat, lon });
    }
    Ok(point)
}
