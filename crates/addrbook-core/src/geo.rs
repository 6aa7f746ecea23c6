// crates/addrbook-core/src/geo.rs

//! # Coordinate validation and great-circle distance
//!
//! The geometric core of the crate. Everything here is a pure function over
//! `f64` degrees: no I/O, no state, safe to call from any number of threads.
//!
//! Coordinate system:
//! - Latitude: degrees north, valid range [-90, 90]
//! - Longitude: degrees east, valid range [-180, 180]
//! - Distance: kilometers

use crate::error::{AddrBookError, Result};
use serde::{Deserialize, Serialize};

/// Mean Earth radius in kilometers.
///
/// Every distance this crate reports is derived from this one constant, so it
/// must never change for a dataset whose historical distance comparisons
/// matter. Kilometers are the fixed unit for this deployment.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Which coordinate axis a validation error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Axis {
    Latitude,
    Longitude,
}

impl Axis {
    /// Lower bound of the valid range for this axis, in degrees.
    pub fn min(&self) -> f64 {
        match self {
            Axis::Latitude => -90.0,
            Axis::Longitude => -180.0,
        }
    }

    /// Upper bound of the valid range for this axis, in degrees.
    pub fn max(&self) -> f64 {
        match self {
            Axis::Latitude => 90.0,
            Axis::Longitude => 180.0,
        }
    }
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Axis::Latitude => write!(f, "latitude"),
            Axis::Longitude => write!(f, "longitude"),
        }
    }
}

/// Checks that a coordinate pair lies within valid geographic ranges.
///
/// Latitude must be in [-90, 90] and longitude in [-180, 180]; the boundary
/// values themselves (poles, antimeridian) are legitimate coordinates and
/// accepted. Values are passed through unchanged on success: out-of-range
/// input is rejected, never wrapped or normalized. NaN fails the range check
/// and is rejected on the axis it arrived on.
///
/// Latitude is checked first, so a pair that is bad on both axes reports
/// latitude.
///
/// # Examples
/// ```rust
/// use addrbook_core::geo::validate;
///
/// assert!(validate(90.0, -180.0).is_ok());
/// assert!(validate(90.0000001, 0.0).is_err());
/// ```
pub fn validate(lat: f64, lon: f64) -> Result<()> {
    check_axis(Axis::Latitude, lat)?;
    check_axis(Axis::Longitude, lon)?;
    Ok(())
}

fn check_axis(axis: Axis, value: f64) -> Result<()> {
    // contains() is false for NaN, which is exactly what we want
    if !(axis.min()..=axis.max()).contains(&value) {
        return Err(AddrBookError::InvalidCoordinate { axis, value });
    }
    Ok(())
}

/// A validated (latitude, longitude) pair in degrees.
///
/// Construction goes through [`validate`], so holding a `GeoPoint` is proof
/// the pair is in range. Query points for proximity searches are built from
/// this type; an invalid pair never reaches the distance math.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    lat: f64,
    lon: f64,
}

impl GeoPoint {
    /// Builds a point, failing with `InvalidCoordinate` if either axis is out
    /// of range.
    pub fn new(lat: f64, lon: f64) -> Result<Self> {
        validate(lat, lon)?;
        Ok(Self { lat, lon })
    }

    pub fn lat(&self) -> f64 {
        self.lat
    }

    pub fn lon(&self) -> f64 {
        self.lon
    }
}

/// Great-circle distance between two coordinate pairs, in kilometers.
///
/// Haversine formula over a sphere of radius [`EARTH_RADIUS_KM`]:
///
/// ```text
/// a = sin²(Δlat/2) + cos(lat1)·cos(lat2)·sin²(Δlon/2)
/// c = 2·atan2(√a, √(1−a))
/// d = R·c
/// ```
///
/// All work is done in `f64`; `a` is clamped to [0, 1] so rounding near
/// antipodal or coincident points cannot push it outside the domain of the
/// square roots. Symmetric in its arguments.
pub fn haversine_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let d_lat = (lat2 - lat1).to_radians();
    let d_lon = (lon2 - lon1).to_radians();

    let a = ((d_lat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (d_lon / 2.0).sin().powi(2))
    .clamp(0.0, 1.0);

    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    EARTH_RADIUS_KM * c
}

/// Distance from a validated query point to a raw candidate pair.
///
/// Candidates come from the store, whose invariant guarantees their ranges,
/// so no re-validation happens here.
pub fn distance_from_km(origin: GeoPoint, lat: f64, lon: f64) -> f64 {
    haversine_km(origin.lat, origin.lon, lat, lon)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_full_valid_range() {
        for lat in [-90.0, -45.0, 0.0, 45.0, 90.0] {
            for lon in [-180.0, -90.0, 0.0, 90.0, 180.0] {
                assert!(validate(lat, lon).is_ok(), "({lat}, {lon}) should be valid");
            }
        }
    }

    #[test]
    fn rejects_just_outside_boundaries() {
        assert!(matches!(
            validate(90.0000001, 0.0),
            Err(AddrBookError::InvalidCoordinate {
                axis: Axis::Latitude,
                ..
            })
        ));
        assert!(matches!(
            validate(0.0, -180.0000001),
            Err(AddrBookError::InvalidCoordinate {
                axis: Axis::Longitude,
                ..
            })
        ));
    }

    #[test]
    fn reports_the_offending_axis_and_value() {
        match validate(100.0, 77.5) {
            Err(AddrBookError::InvalidCoordinate { axis, value }) => {
                assert_eq!(axis, Axis::Latitude);
                assert_eq!(value, 100.0);
            }
            other => panic!("expected InvalidCoordinate, got {other:?}"),
        }
        match validate(12.9, 500.0) {
            Err(AddrBookError::InvalidCoordinate { axis, value }) => {
                assert_eq!(axis, Axis::Longitude);
                assert_eq!(value, 500.0);
            }
            other => panic!("expected InvalidCoordinate, got {other:?}"),
        }
    }

    #[test]
    fn rejects_nan() {
        assert!(validate(f64::NAN, 0.0).is_err());
        assert!(validate(0.0, f64::NAN).is_err());
    }

    #[test]
    fn geopoint_is_a_validation_gate() {
        assert!(GeoPoint::new(40.7306, -73.9352).is_ok());
        assert!(GeoPoint::new(-90.1, 0.0).is_err());
    }

    #[test]
    fn distance_same_point_is_zero() {
        let dist = haversine_km(12.9716, 77.5946, 12.9716, 77.5946);
        assert!(dist.abs() < 0.0001, "expected ~0 km, got {dist}");
    }

    #[test]
    fn distance_is_symmetric() {
        let ab = haversine_km(40.7128, -74.0060, 34.0522, -118.2437);
        let ba = haversine_km(34.0522, -118.2437, 40.7128, -74.0060);
        assert!((ab - ba).abs() < 1e-9, "symmetry violated: {ab} vs {ba}");
    }

    #[test]
    fn quarter_great_circle() {
        // Equator/prime-meridian to the equator at 90°E is a quarter of the
        // great circle: R·π/2.
        let dist = haversine_km(0.0, 0.0, 0.0, 90.0);
        let expected = EARTH_RADIUS_KM * std::f64::consts::FRAC_PI_2;
        assert!(
            (dist - expected).abs() < 0.001,
            "expected {expected} km, got {dist}"
        );
    }

    #[test]
    fn bangalore_to_mysore() {
        // Known fixture: roughly 128 km apart.
        let dist = haversine_km(12.9716, 77.5946, 12.2958, 76.6394);
        assert!(
            (dist - 128.0).abs() < 13.0,
            "expected ~128 km, got {dist}"
        );
    }

    #[test]
    fn new_york_to_los_angeles() {
        let dist = haversine_km(40.7306, -73.9352, 34.0522, -118.2437);
        assert!(
            (dist - 3935.0).abs() < 40.0,
            "expected ~3935 km, got {dist}"
        );
    }

    #[test]
    fn antipodal_points_stay_in_domain() {
        // a can round slightly above 1.0 here without the clamp
        let dist = haversine_km(0.0, 0.0, 0.0, 180.0);
        let half_circumference = EARTH_RADIUS_KM * std::f64::consts::PI;
        assert!(
            (dist - half_circumference).abs() < 0.001,
            "expected {half_circumference} km, got {dist}"
        );
    }
}
