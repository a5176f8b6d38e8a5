//! Unit tests for fr-data.

use fr_core::{GeoPoint, HydrantId};

use crate::{Hydrant, HydrantCondition};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn hydrant(id: u32, lat: f64, lon: f64, condition: HydrantCondition) -> Hydrant {
    Hydrant {
        id:        HydrantId(id),
        number:    format!("H-{id:03}"),
        address:   "test".to_string(),
        position:  GeoPoint::new(lat, lon),
        condition,
        remarks:   String::new(),
    }
}

// ── HydrantCondition ──────────────────────────────────────────────────────────

#[cfg(test)]
mod condition {
    use super::*;

    #[test]
    fn parse_known_labels() {
        assert_eq!(
            HydrantCondition::parse_label("Operational"),
            Some(HydrantCondition::Operational)
        );
        assert_eq!(
            HydrantCondition::parse_label("  unserviceable "),
            Some(HydrantCondition::Unserviceable)
        );
        assert_eq!(
            HydrantCondition::parse_label("MAINTENANCE"),
            Some(HydrantCondition::Maintenance)
        );
    }

    #[test]
    fn unknown_label_falls_back_to_unserviceable() {
        assert_eq!(HydrantCondition::parse_label("rusty"), None);
        assert_eq!(
            HydrantCondition::from_label("rusty"),
            HydrantCondition::Unserviceable
        );
    }

    #[test]
    fn serviceability() {
        assert!(HydrantCondition::Operational.is_serviceable());
        assert!(HydrantCondition::Maintenance.is_serviceable());
        assert!(HydrantCondition::Damaged.is_serviceable());
        assert!(HydrantCondition::Inactive.is_serviceable());
        assert!(!HydrantCondition::Unserviceable.is_serviceable());
    }

    #[test]
    fn display_roundtrip() {
        assert_eq!(HydrantCondition::Operational.to_string(), "operational");
        assert_eq!(
            HydrantCondition::parse_label(HydrantCondition::Damaged.as_str()),
            Some(HydrantCondition::Damaged)
        );
    }
}

// ── HazardSeverity ────────────────────────────────────────────────────────────

#[cfg(test)]
mod severity {
    use crate::HazardSeverity;

    #[test]
    fn parse_known_labels() {
        assert_eq!(HazardSeverity::parse_label("high"), Some(HazardSeverity::High));
        assert_eq!(HazardSeverity::parse_label("Medium"), Some(HazardSeverity::Medium));
    }

    #[test]
    fn unknown_label_falls_back_to_low() {
        assert_eq!(HazardSeverity::from_label("catastrophic"), HazardSeverity::Low);
    }

    #[test]
    fn ordering() {
        assert!(HazardSeverity::Low < HazardSeverity::Medium);
        assert!(HazardSeverity::Medium < HazardSeverity::High);
    }
}

// ── Proximity ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod proximity {
    use super::*;
    use crate::{nearest_hydrant, DEFAULT_CONNECTION_RANGE_FEET};

    #[test]
    fn empty_list_yields_none() {
        let result = nearest_hydrant(
            GeoPoint::new(14.28, 121.41),
            &[],
            DEFAULT_CONNECTION_RANGE_FEET,
        );
        assert_eq!(result.hydrant, None);
        assert!(!result.within_range);
        assert!(result.distance_km.is_infinite());
    }

    #[test]
    fn all_unserviceable_yields_none() {
        let hydrants = vec![
            hydrant(0, 14.2810, 121.4165, HydrantCondition::Unserviceable),
            hydrant(1, 14.2811, 121.4166, HydrantCondition::Unserviceable),
        ];
        let result = nearest_hydrant(
            GeoPoint::new(14.2810, 121.4165),
            &hydrants,
            DEFAULT_CONNECTION_RANGE_FEET,
        );
        assert_eq!(result.hydrant, None);
        assert!(!result.within_range);
    }

    #[test]
    fn never_picks_unserviceable_even_when_closest() {
        let hydrants = vec![
            // Sits exactly at the query point but is unserviceable.
            hydrant(0, 14.2810, 121.4165, HydrantCondition::Unserviceable),
            // ~1 km away but operational.
            hydrant(1, 14.2900, 121.4165, HydrantCondition::Operational),
        ];
        let result = nearest_hydrant(GeoPoint::new(14.2810, 121.4165), &hydrants, 50.0);
        assert_eq!(result.hydrant, Some(HydrantId(1)));
    }

    #[test]
    fn picks_minimum_distance() {
        let hydrants = vec![
            hydrant(0, 14.290, 121.420, HydrantCondition::Operational),
            hydrant(1, 14.281, 121.417, HydrantCondition::Operational),
            hydrant(2, 14.270, 121.400, HydrantCondition::Operational),
        ];
        let result = nearest_hydrant(GeoPoint::new(14.2810, 121.4165), &hydrants, 50.0);
        assert_eq!(result.hydrant, Some(HydrantId(1)));
    }

    #[test]
    fn tie_prefers_first_occurrence() {
        // Two serviceable hydrants at the same surveyed position.
        let hydrants = vec![
            hydrant(0, 14.2815, 121.4170, HydrantCondition::Operational),
            hydrant(1, 14.2815, 121.4170, HydrantCondition::Operational),
        ];
        let result = nearest_hydrant(GeoPoint::new(14.2810, 121.4165), &hydrants, 50.0);
        assert_eq!(result.hydrant, Some(HydrantId(0)));
    }

    #[test]
    fn close_hydrant_is_within_range() {
        // Surveyed pair a few metres apart — well inside 50 feet.
        let hydrants = vec![hydrant(0, 14.281046, 121.416473, HydrantCondition::Operational)];
        let result = nearest_hydrant(
            GeoPoint::new(14.2810, 121.4165),
            &hydrants,
            DEFAULT_CONNECTION_RANGE_FEET,
        );
        assert_eq!(result.hydrant, Some(HydrantId(0)));
        assert!(result.within_range, "got {} feet", result.distance_feet);
        assert!(result.distance_feet < DEFAULT_CONNECTION_RANGE_FEET);
    }

    #[test]
    fn distant_hydrant_is_out_of_range() {
        // ~61 m north of the query point — roughly 200 feet.
        let hydrants = vec![hydrant(0, 14.28155, 121.4165, HydrantCondition::Operational)];
        let result = nearest_hydrant(
            GeoPoint::new(14.2810, 121.4165),
            &hydrants,
            DEFAULT_CONNECTION_RANGE_FEET,
        );
        assert_eq!(result.hydrant, Some(HydrantId(0)));
        assert!(!result.within_range, "got {} feet", result.distance_feet);
        assert!(result.distance_feet > 150.0 && result.distance_feet < 250.0);
    }

    #[test]
    fn range_threshold_is_configurable() {
        let hydrants = vec![hydrant(0, 14.28155, 121.4165, HydrantCondition::Operational)];
        let point = GeoPoint::new(14.2810, 121.4165);
        assert!(!nearest_hydrant(point, &hydrants, 50.0).within_range);
        assert!(nearest_hydrant(point, &hydrants, 500.0).within_range);
    }

    #[test]
    fn feet_conversion_consistent() {
        let hydrants = vec![hydrant(0, 14.2900, 121.4165, HydrantCondition::Operational)];
        let result = nearest_hydrant(GeoPoint::new(14.2810, 121.4165), &hydrants, 50.0);
        assert!((result.distance_feet - result.distance_km * 3280.84).abs() < 1e-9);
    }
}

// ── Loaders ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod loader {
    use std::io::Cursor;

    use super::*;
    use crate::loader::{hazard_roads_from_json, hydrants_from_json, load_hydrants_reader};
    use crate::{DataError, HazardSeverity};

    const CSV: &str = "\
number,address,latitude,longitude,condition,remarks
H-001,P. Guevarra Ave,14.280248,121.394529,Operational,Low Pressure
H-016,Gatid crossing,14.277512,121.419285,Unserviceable,Unserviceable
H-017,Duhat Rd,14.275834,121.419642,operational,High Pressure
";

    #[test]
    fn csv_roundtrip() {
        let hydrants = load_hydrants_reader(Cursor::new(CSV)).unwrap();
        assert_eq!(hydrants.len(), 3);
        assert_eq!(hydrants[0].id, HydrantId(0));
        assert_eq!(hydrants[0].number, "H-001");
        assert_eq!(hydrants[0].condition, HydrantCondition::Operational);
        assert_eq!(hydrants[1].condition, HydrantCondition::Unserviceable);
        // Lower-case label in the file parses too.
        assert_eq!(hydrants[2].condition, HydrantCondition::Operational);
        assert!((hydrants[0].position.lat - 14.280248).abs() < 1e-9);
    }

    #[test]
    fn csv_unknown_condition_falls_back() {
        let csv = "number,address,latitude,longitude,condition,remarks\n\
                   H-001,x,14.28,121.39,Rusty,none\n";
        let hydrants = load_hydrants_reader(Cursor::new(csv)).unwrap();
        assert_eq!(hydrants[0].condition, HydrantCondition::Unserviceable);
    }

    #[test]
    fn csv_out_of_range_coordinate_rejected() {
        let csv = "number,address,latitude,longitude,condition,remarks\n\
                   H-001,x,94.28,121.39,Operational,none\n";
        let err = load_hydrants_reader(Cursor::new(csv)).unwrap_err();
        assert!(matches!(err, DataError::CoordinateRange { .. }));
    }

    #[test]
    fn json_hydrant_envelope() {
        let json = r#"{"hydrants":[
            {"number":"H-001","address":"a","latitude":14.280248,
             "longitude":121.394529,"condition":"Operational","remarks":"Low Pressure"}
        ]}"#;
        let hydrants = hydrants_from_json(Cursor::new(json)).unwrap();
        assert_eq!(hydrants.len(), 1);
        assert_eq!(hydrants[0].condition, HydrantCondition::Operational);
    }

    #[test]
    fn json_hazard_envelope() {
        let json = r#"{"hazard_roads":[
            {"name":"Riverside Rd","severity":"high","reason":"flooding",
             "coordinates":[[14.27,121.40],[14.28,121.41]]}
        ]}"#;
        let roads = hazard_roads_from_json(Cursor::new(json)).unwrap();
        assert_eq!(roads.len(), 1);
        assert_eq!(roads[0].severity, HazardSeverity::High);
        assert_eq!(roads[0].path.len(), 2);
        assert!((roads[0].path[1].lon - 121.41).abs() < 1e-9);
    }

    #[test]
    fn json_unknown_severity_falls_back() {
        let json = r#"{"hazard_roads":[
            {"name":"x","severity":"apocalyptic","reason":"r","coordinates":[[14.27,121.40]]}
        ]}"#;
        let roads = hazard_roads_from_json(Cursor::new(json)).unwrap();
        assert_eq!(roads[0].severity, HazardSeverity::Low);
    }

    #[test]
    fn json_bad_coordinate_rejected() {
        let json = r#"{"hazard_roads":[
            {"name":"x","severity":"low","reason":"r","coordinates":[[14.27,181.40]]}
        ]}"#;
        let err = hazard_roads_from_json(Cursor::new(json)).unwrap_err();
        assert!(matches!(err, DataError::CoordinateRange { .. }));
    }
}
