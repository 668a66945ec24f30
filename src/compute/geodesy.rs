//! Geodesic helpers: angle conversion, longitude span at a latitude,
//! antimeridian wraparound and great-circle distance.

use crate::constants::{E2, EARTH_EQUATORIAL_RADIUS, EPSILON};
use crate::types::Coordinate;
use geo::{Distance, Haversine, Point};
use std::f64::consts::PI;

/// Converts degrees to radians.
pub fn degrees_to_radians(degrees: f64) -> f64 {
    degrees * PI / 180.0
}

/// Converts a distance in meters to a span of longitude degrees at the given
/// latitude, on the WGS84 ellipsoid.
///
/// At the poles a degree of longitude has no length, so any positive distance
/// spans the full 360 degrees. The result never exceeds 360.
///
/// # Examples
///
/// ```
/// use spatio_geohash::compute::geodesy::meters_to_longitude_degrees;
///
/// let at_equator = meters_to_longitude_degrees(1000.0, 0.0);
/// assert!((at_equator - 0.008983152841195214).abs() < 1e-12);
///
/// assert_eq!(meters_to_longitude_degrees(1000.0, 90.0), 360.0);
/// ```
pub fn meters_to_longitude_degrees(distance: f64, latitude: f64) -> f64 {
    let radians = degrees_to_radians(latitude);
    let num = radians.cos() * EARTH_EQUATORIAL_RADIUS * PI / 180.0;
    let denom = 1.0 / (1.0 - E2 * radians.sin() * radians.sin()).sqrt();
    let delta_degrees = num * denom;

    if delta_degrees < EPSILON {
        if distance > 0.0 { 360.0 } else { 0.0 }
    } else {
        (distance / delta_degrees).min(360.0)
    }
}

/// Wraps a longitude into `[-180, 180]`.
///
/// Values already in range are returned untouched, so both 180 and -180 are
/// preserved. Multiples of a full turn are removed.
///
/// ```
/// use spatio_geohash::compute::geodesy::wrap_longitude;
///
/// assert_eq!(wrap_longitude(182.0), -178.0);
/// assert_eq!(wrap_longitude(-182.0), 178.0);
/// assert_eq!(wrap_longitude(810.0), 90.0);
/// ```
pub fn wrap_longitude(longitude: f64) -> f64 {
    if (-180.0..=180.0).contains(&longitude) {
        return longitude;
    }

    let adjusted = longitude + 180.0;
    if adjusted > 0.0 {
        (adjusted % 360.0) - 180.0
    } else {
        180.0 - (-adjusted % 360.0)
    }
}

/// Great-circle distance between two coordinates in kilometers.
///
/// Range scans over-approximate a circle; callers use this to drop the
/// candidates that fall outside the radius.
///
/// ```
/// use spatio_geohash::{Coordinate, compute::geodesy::distance_km};
///
/// let sf = Coordinate::new(37.7749, -122.4194);
/// let la = Coordinate::new(34.0522, -118.2437);
/// let d = distance_km(&sf, &la);
/// assert!(d > 550.0 && d < 570.0);
/// ```
pub fn distance_km(a: &Coordinate, b: &Coordinate) -> f64 {
    let a: Point = (*a).into();
    let b: Point = (*b).into();
    Haversine.distance(a, b) / 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-6,
            "expected {} got {}",
            expected,
            actual
        );
    }

    #[test]
    fn test_degrees_to_radians() {
        assert_close(degrees_to_radians(0.0), 0.0);
        assert_close(degrees_to_radians(45.0), 0.7853981634);
        assert_close(degrees_to_radians(90.0), 1.5707963268);
        assert_close(degrees_to_radians(135.0), 2.3561944902);
        assert_close(degrees_to_radians(180.0), PI);
        assert_close(degrees_to_radians(-90.0), -1.5707963268);
    }

    #[test]
    fn test_meters_to_longitude_degrees() {
        assert_close(meters_to_longitude_degrees(1000.0, 0.0), 0.008983153);
        assert_close(meters_to_longitude_degrees(111_320.0, 0.0), 1.000004574);
        assert_close(meters_to_longitude_degrees(107_550.0, 15.0), 0.999995453);
        assert_close(meters_to_longitude_degrees(96_486.0, 30.0), 0.999997083);
        assert_close(meters_to_longitude_degrees(78_847.0, 45.0), 1.000002067);
        assert_close(meters_to_longitude_degrees(55_800.0, 60.0), 0.999999935);
        assert_close(meters_to_longitude_degrees(28_902.0, 75.0), 0.999999753);
    }

    #[test]
    fn test_meters_to_longitude_degrees_is_symmetric_in_latitude() {
        for lat in [10.0, 33.3, 66.6, 89.0] {
            assert_close(
                meters_to_longitude_degrees(5000.0, lat),
                meters_to_longitude_degrees(5000.0, -lat),
            );
        }
    }

    #[test]
    fn test_meters_to_longitude_degrees_caps_at_full_circle() {
        assert_eq!(meters_to_longitude_degrees(1e9, 0.0), 360.0);
        assert_eq!(meters_to_longitude_degrees(1000.0, 90.0), 360.0);
        assert_eq!(meters_to_longitude_degrees(1000.0, -90.0), 360.0);
    }

    #[test]
    fn test_meters_to_longitude_degrees_zero_distance() {
        assert_eq!(meters_to_longitude_degrees(0.0, 0.0), 0.0);
        assert_eq!(meters_to_longitude_degrees(0.0, 90.0), 0.0);
        assert_eq!(meters_to_longitude_degrees(0.0, -90.0), 0.0);
    }

    #[test]
    fn test_wrap_longitude_in_range_is_identity() {
        for lon in [0.0, 1.0, -1.0, 179.9, -179.9, 180.0, -180.0] {
            assert_eq!(wrap_longitude(lon), lon);
        }
    }

    #[test]
    fn test_wrap_longitude_positive() {
        assert_close(wrap_longitude(182.0), -178.0);
        assert_close(wrap_longitude(270.0), -90.0);
        assert_close(wrap_longitude(360.0), 0.0);
        assert_close(wrap_longitude(540.0), -180.0);
        assert_close(wrap_longitude(630.0), -90.0);
        assert_close(wrap_longitude(720.0), 0.0);
        assert_close(wrap_longitude(810.0), 90.0);
    }

    #[test]
    fn test_wrap_longitude_negative() {
        assert_close(wrap_longitude(-182.0), 178.0);
        assert_close(wrap_longitude(-270.0), 90.0);
        assert_close(wrap_longitude(-360.0), 0.0);
        assert_close(wrap_longitude(-450.0), -90.0);
        assert_close(wrap_longitude(-540.0), 180.0);
        assert_close(wrap_longitude(-630.0), 90.0);
        assert_close(wrap_longitude(-720.0), 0.0);
    }

    #[test]
    fn test_wrap_longitude_stays_in_range() {
        let mut lon = -1000.0;
        while lon <= 1000.0 {
            let wrapped = wrap_longitude(lon);
            assert!((-180.0..=180.0).contains(&wrapped), "{} -> {}", lon, wrapped);
            lon += 7.25;
        }
    }

    #[test]
    fn test_distance_km() {
        let a = Coordinate::new(0.0, 0.0);
        assert_eq!(distance_km(&a, &a), 0.0);

        // One degree of arc on the mean-radius sphere.
        let b = Coordinate::new(0.0, 1.0);
        assert!((distance_km(&a, &b) - 111.195).abs() < 0.01);
        assert!((distance_km(&a, &b) - distance_km(&b, &a)).abs() < 1e-9);
    }
}
