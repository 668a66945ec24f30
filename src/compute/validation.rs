//! Validation for coordinates, radii, precisions and geohash strings.
//!
//! The encoder and range planner clamp whatever they are given. These checks
//! back the strict mode of [`crate::QueryPlanner`] for callers that prefer an
//! error over a silently adjusted result.

use crate::constants::{BASE32, MAX_PRECISION};
use crate::error::{GeohashError, Result};
use crate::types::Coordinate;

/// Validates that a coordinate has a finite latitude in `[-90, 90]` and a
/// finite longitude in `[-180, 180]`.
///
/// # Examples
///
/// ```
/// use spatio_geohash::{Coordinate, validation::validate_coordinate};
///
/// assert!(validate_coordinate(&Coordinate::new(40.7128, -74.0060)).is_ok());
/// assert!(validate_coordinate(&Coordinate::new(95.0, -74.0)).is_err());
/// assert!(validate_coordinate(&Coordinate::new(40.0, 200.0)).is_err());
/// ```
pub fn validate_coordinate(coordinate: &Coordinate) -> Result<()> {
    let (lat, lon) = (coordinate.lat, coordinate.lon);

    if !lat.is_finite() {
        return Err(GeohashError::InvalidInput(format!(
            "Latitude must be finite, got: {}",
            lat
        )));
    }

    if !lon.is_finite() {
        return Err(GeohashError::InvalidInput(format!(
            "Longitude must be finite, got: {}",
            lon
        )));
    }

    if !(-90.0..=90.0).contains(&lat) {
        return Err(GeohashError::InvalidInput(format!(
            "Latitude out of range [-90.0, 90.0]: {}",
            lat
        )));
    }

    if !(-180.0..=180.0).contains(&lon) {
        return Err(GeohashError::InvalidInput(format!(
            "Longitude out of range [-180.0, 180.0]: {}",
            lon
        )));
    }

    Ok(())
}

/// Validates a search radius in kilometers.
///
/// Zero is accepted and yields the ranges of the center cell's neighbourhood.
///
/// ```
/// use spatio_geohash::validation::validate_radius_km;
///
/// assert!(validate_radius_km(10.0).is_ok());
/// assert!(validate_radius_km(0.0).is_ok());
/// assert!(validate_radius_km(-1.0).is_err());
/// assert!(validate_radius_km(f64::NAN).is_err());
/// ```
pub fn validate_radius_km(radius_km: f64) -> Result<()> {
    if !radius_km.is_finite() {
        return Err(GeohashError::InvalidInput(format!(
            "Radius must be finite, got: {}",
            radius_km
        )));
    }

    if radius_km < 0.0 {
        return Err(GeohashError::InvalidInput(format!(
            "Radius must be non-negative, got: {}",
            radius_km
        )));
    }

    Ok(())
}

/// Validates a geohash length in `[1, 22]`.
pub fn validate_precision(precision: i32) -> Result<()> {
    if !(1..=MAX_PRECISION).contains(&precision) {
        return Err(GeohashError::InvalidInput(format!(
            "Geohash precision must be between 1 and {}, got: {}",
            MAX_PRECISION, precision
        )));
    }
    Ok(())
}

/// Validates that a geohash is non-empty and uses only the base-32 alphabet.
///
/// ```
/// use spatio_geohash::validation::validate_geohash;
///
/// assert!(validate_geohash("9q8yywe56g").is_ok());
/// assert!(validate_geohash("").is_err());
/// assert!(validate_geohash("9q8a").is_err());
/// ```
pub fn validate_geohash(geohash: &str) -> Result<()> {
    if geohash.is_empty() {
        return Err(GeohashError::InvalidInput(
            "Geohash must not be empty".to_string(),
        ));
    }

    if let Some((idx, c)) = geohash
        .char_indices()
        .find(|(_, c)| !c.is_ascii() || !BASE32.contains(&(*c as u8)))
    {
        return Err(GeohashError::InvalidInput(format!(
            "Invalid geohash character {:?} at index {} in {:?}",
            c, idx, geohash
        )));
    }

    Ok(())
}
