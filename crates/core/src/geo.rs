//! Geographic points and great-circle distance.

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Mean Earth radius used by the Haversine formula, in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Valid latitude range in degrees.
pub const LATITUDE_RANGE: std::ops::RangeInclusive<f64> = -90.0..=90.0;
/// Valid longitude range in degrees.
pub const LONGITUDE_RANGE: std::ops::RangeInclusive<f64> = -180.0..=180.0;

/// Centre of Kelibia, the reference point for the proximity premium.
pub const KELIBIA_CENTER: GeoPoint = GeoPoint {
    latitude: 36.8578,
    longitude: 11.0920,
};

// ---------------------------------------------------------------------------
// GeoPoint
// ---------------------------------------------------------------------------

/// A latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Check that both coordinates are finite and inside their valid ranges.
    ///
    /// Distance is only meaningful for valid points, so callers at the
    /// request boundary run this before handing the point to the pricing
    /// rules.
    pub fn validate(&self) -> Result<(), CoreError> {
        validate_coordinate(self.latitude, &LATITUDE_RANGE, "lat")?;
        validate_coordinate(self.longitude, &LONGITUDE_RANGE, "lng")
    }
}

fn validate_coordinate(
    value: f64,
    range: &std::ops::RangeInclusive<f64>,
    name: &str,
) -> Result<(), CoreError> {
    if !range.contains(&value) {
        // NaN fails `contains`, so it lands here too.
        return Err(CoreError::Validation(format!(
            "{name} must be between {} and {}, got {value}",
            range.start(),
            range.end()
        )));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Distance
// ---------------------------------------------------------------------------

/// Great-circle distance between two points in kilometres (Haversine).
///
/// `a = sin²(Δlat/2) + cos(lat1)·cos(lat2)·sin²(Δlng/2)`, `c = 2·asin(√a)`,
/// result `R·c` with `R = 6371`.
pub fn distance_km(p1: GeoPoint, p2: GeoPoint) -> f64 {
    let dlat = (p2.latitude - p1.latitude).to_radians();
    let dlng = (p2.longitude - p1.longitude).to_radians();

    let a = (dlat / 2.0).sin().powi(2)
        + p1.latitude.to_radians().cos()
            * p2.latitude.to_radians().cos()
            * (dlng / 2.0).sin().powi(2);

    // Rounding can push `a` a hair above 1 for near-antipodal points.
    let c = 2.0 * a.min(1.0).sqrt().asin();
    EARTH_RADIUS_KM * c
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
