//! Hazard-road reference data.

use fr_core::GeoPoint;

// ── HazardSeverity ────────────────────────────────────────────────────────────

/// Severity of a hazard road.
///
/// **Fallback policy**: an unrecognized severity label maps to `Low` — the
/// lowest severity, so bad data dims a road on the map rather than painting
/// phantom high-severity hazards.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum HazardSeverity {
    #[default]
    Low,
    Medium,
    High,
}

impl HazardSeverity {
    /// Parse a severity label, case-insensitive.  `None` for unknown labels.
    pub fn parse_label(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "low"    => Some(HazardSeverity::Low),
            "medium" => Some(HazardSeverity::Medium),
            "high"   => Some(HazardSeverity::High),
            _ => None,
        }
    }

    /// Parse with the documented fallback: unknown labels become `Low`.
    #[inline]
    pub fn from_label(s: &str) -> Self {
        Self::parse_label(s).unwrap_or(HazardSeverity::Low)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            HazardSeverity::Low    => "low",
            HazardSeverity::Medium => "medium",
            HazardSeverity::High   => "high",
        }
    }
}

impl std::fmt::Display for HazardSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── HazardRoad ────────────────────────────────────────────────────────────────

/// A road segment flagged as hazardous for response routing.
///
/// Read-only reference data, owned externally like [`Hydrant`][crate::Hydrant].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HazardRoad {
    pub name: String,

    /// Ordered polyline along the road centreline.
    pub path: Vec<GeoPoint>,

    pub severity: HazardSeverity,

    /// Why the road is flagged ("flooding", "narrow bridge", …).
    pub reason: String,
}
