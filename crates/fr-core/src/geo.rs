//! Geographic coordinate type and great-circle math.
//!
//! `GeoPoint` uses `f64` (double-precision) latitude/longitude.  Hydrant
//! survey coordinates are recorded to six decimal places (~0.1 m) and the
//! connection threshold is tens of feet, so the rounding error of single
//! precision would be a visible fraction of the distances we compare.

/// Mean Earth radius in kilometres (spherical model).
pub const EARTH_RADIUS_KM: f64 = 6_371.0;

/// A WGS-84 geographic coordinate in decimal degrees.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    #[inline]
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// `true` when latitude ∈ [-90, 90] and longitude ∈ [-180, 180].
    ///
    /// The distance and bearing functions do **not** check this — they are
    /// hot-path pure math and their output is simply meaningless for
    /// out-of-range inputs.  The `fr-data` loaders reject such coordinates
    /// at the ingestion boundary, so validated data never carries them.
    #[inline]
    pub fn in_valid_range(self) -> bool {
        (-90.0..=90.0).contains(&self.lat) && (-180.0..=180.0).contains(&self.lon)
    }

    /// Haversine great-circle distance in kilometres.
    ///
    /// Spherical Earth, R = 6371 km.  Symmetric, and exactly zero when both
    /// points are identical (`d_lat == d_lon == 0` short-circuits the
    /// formula to `atan2(0, 1) == 0`).
    pub fn distance_km(self, other: GeoPoint) -> f64 {
        let d_lat = (other.lat - self.lat).to_radians();
        let d_lon = (other.lon - self.lon).to_radians();

        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();

        let a = (d_lat * 0.5).sin().powi(2)
            + lat1.cos() * lat2.cos() * (d_lon * 0.5).sin().powi(2);

        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
        EARTH_RADIUS_KM * c
    }

    /// Haversine distance in metres.
    #[inline]
    pub fn distance_m(self, other: GeoPoint) -> f64 {
        self.distance_km(other) * 1_000.0
    }

    /// Initial bearing (forward azimuth) from `self` to `other`, in degrees
    /// normalized to `[0, 360)`.
    ///
    /// Standard formula:
    /// `atan2(sin Δλ · cos φ₂, cos φ₁ · sin φ₂ − sin φ₁ · cos φ₂ · cos Δλ)`.
    ///
    /// The bearing of a zero-length vector is undefined; this returns `0.0`
    /// for identical points (`atan2(0, 0)`).  Callers that must keep the
    /// previous heading instead (movement tracking) check for equality first.
    pub fn bearing_deg(self, other: GeoPoint) -> f64 {
        let d_lon = (other.lon - self.lon).to_radians();
        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();

        let y = d_lon.sin() * lat2.cos();
        let x = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * d_lon.cos();

        (y.atan2(x).to_degrees() + 360.0) % 360.0
    }
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lon)
    }
}

// ── BoundingBox ───────────────────────────────────────────────────────────────

/// An axis-aligned geographic bounding box (south-west / north-east corners).
///
/// Used to constrain geocoder searches to the service area.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoundingBox {
    pub south_west: GeoPoint,
    pub north_east: GeoPoint,
}

impl BoundingBox {
    #[inline]
    pub fn new(south_west: GeoPoint, north_east: GeoPoint) -> Self {
        Self { south_west, north_east }
    }

    /// `true` if `point` lies inside the box (corners inclusive).
    #[inline]
    pub fn contains(self, point: GeoPoint) -> bool {
        point.lat >= self.south_west.lat
            && point.lat <= self.north_east.lat
            && point.lon >= self.south_west.lon
            && point.lon <= self.north_east.lon
    }
}
