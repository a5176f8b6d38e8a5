//! Hydrant reference data and condition enum.

use fr_core::{GeoPoint, HydrantId};

// ── HydrantCondition ──────────────────────────────────────────────────────────

/// Present condition of a hydrant, as recorded in the survey data.
///
/// The survey records free text; [`from_label`](Self::from_label) folds it
/// into this closed enum at the ingestion boundary.  **Fallback policy**: an
/// unrecognized label maps to `Unserviceable` — the most restrictive variant,
/// so a hydrant with unknown condition is never offered for connection.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum HydrantCondition {
    Operational,
    #[default]
    Unserviceable,
    Maintenance,
    Damaged,
    Inactive,
}

impl HydrantCondition {
    /// Parse a condition label, case-insensitive.  `None` for unknown labels.
    pub fn parse_label(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "operational"   => Some(HydrantCondition::Operational),
            "unserviceable" => Some(HydrantCondition::Unserviceable),
            "maintenance"   => Some(HydrantCondition::Maintenance),
            "damaged"       => Some(HydrantCondition::Damaged),
            "inactive"      => Some(HydrantCondition::Inactive),
            _ => None,
        }
    }

    /// Parse with the documented fallback: unknown labels become
    /// `Unserviceable`.
    #[inline]
    pub fn from_label(s: &str) -> Self {
        Self::parse_label(s).unwrap_or(HydrantCondition::Unserviceable)
    }

    /// `true` for every condition except `Unserviceable`.
    ///
    /// A hydrant under maintenance or flagged damaged still shows up in
    /// proximity results — crews decide on site.  Only `Unserviceable` is
    /// excluded outright.
    #[inline]
    pub fn is_serviceable(self) -> bool {
        !matches!(self, HydrantCondition::Unserviceable)
    }

    /// Label used in tables and popups.
    pub fn as_str(self) -> &'static str {
        match self {
            HydrantCondition::Operational   => "operational",
            HydrantCondition::Unserviceable => "unserviceable",
            HydrantCondition::Maintenance   => "maintenance",
            HydrantCondition::Damaged       => "damaged",
            HydrantCondition::Inactive      => "inactive",
        }
    }
}

impl std::fmt::Display for HydrantCondition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Hydrant ───────────────────────────────────────────────────────────────────

/// A surveyed fire hydrant.
///
/// Immutable reference data: create/update/delete lives in the external
/// hydrant store, this crate only reads snapshots of it.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hydrant {
    pub id: HydrantId,

    /// Asset tag painted on the hydrant (e.g. `"H-014"`).
    pub number: String,

    /// Street address or landmark description.
    pub address: String,

    pub position: GeoPoint,

    pub condition: HydrantCondition,

    /// Free-text pressure notes from the survey ("High Pressure", …).
    pub remarks: String,
}

impl Hydrant {
    /// Shorthand for `condition.is_serviceable()`.
    #[inline]
    pub fn is_serviceable(&self) -> bool {
        self.condition.is_serviceable()
    }
}
