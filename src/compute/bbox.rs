//! Sizing geohash cells to a search circle.
//!
//! Longitude degrees shrink toward the poles, so the bit budget is computed
//! separately at the northern and southern edge of the circle and the smaller
//! of the latitude and longitude budgets wins.

use super::geodesy::{meters_to_longitude_degrees, wrap_longitude};
use crate::constants::{
    EARTH_MERIDIONAL_CIRCUMFERENCE, MAXIMUM_BITS_PRECISION, METERS_PER_DEGREE_LATITUDE,
};
use crate::types::Coordinate;
use smallvec::SmallVec;

/// Nine sample points of a bounding box; fits on the stack.
pub type BoundingBoxSamples = SmallVec<[Coordinate; 9]>;

/// Bits of latitude needed so that a cell is no taller than `resolution` meters.
pub fn latitude_bits_for_resolution(resolution: f64) -> f64 {
    (EARTH_MERIDIONAL_CIRCUMFERENCE / 2.0 / resolution)
        .log2()
        .min(MAXIMUM_BITS_PRECISION as f64)
}

/// Bits of longitude needed so that a cell at `latitude` is no wider than
/// `resolution` meters.
///
/// Returns 1 when the longitude span degenerates to zero.
pub fn longitude_bits_for_resolution(resolution: f64, latitude: f64) -> f64 {
    let degrees = meters_to_longitude_degrees(resolution, latitude);
    if degrees.abs() > 0.000001 {
        (360.0 / degrees).log2().max(1.0)
    } else {
        1.0
    }
}

/// Latitudes of the northern and southern edges of a box of `size` meters
/// around `latitude`, clamped to the poles.
fn latitude_bounds(latitude: f64, size: f64) -> (f64, f64) {
    let delta = size / METERS_PER_DEGREE_LATITUDE;
    let north = (latitude + delta).min(90.0);
    let south = (latitude - delta).max(-90.0);
    (north, south)
}

/// Number of geohash bits whose cells are no larger than a box of `size`
/// meters around `coordinate`.
///
/// The result lies in `[1, 110]`. Near the poles the longitude budget
/// collapses, which drives the result down to a single bit.
///
/// # Examples
///
/// ```
/// use spatio_geohash::{Coordinate, compute::bbox::bounding_box_bits};
///
/// assert_eq!(bounding_box_bits(Coordinate::new(35.0, 0.0), 1000.0), 28);
/// assert_eq!(bounding_box_bits(Coordinate::new(90.0, 0.0), 1000.0), 1);
/// ```
pub fn bounding_box_bits(coordinate: Coordinate, size: f64) -> u32 {
    let (north, south) = latitude_bounds(coordinate.lat, size);

    let bits_lat = latitude_bits_for_resolution(size).floor() * 2.0;
    let bits_lon_north = longitude_bits_for_resolution(size, north).floor() * 2.0 - 1.0;
    let bits_lon_south = longitude_bits_for_resolution(size, south).floor() * 2.0 - 1.0;

    let bits = bits_lat
        .min(bits_lon_north)
        .min(bits_lon_south)
        .min(MAXIMUM_BITS_PRECISION as f64);

    // NaN falls through to 1 as well.
    if bits >= 1.0 { bits as u32 } else { 1 }
}

/// The center of a circle plus the eight points on its bounding box.
///
/// Order is fixed: center latitude first, then the northern edge, then the
/// southern edge; within each row center, west, east longitude. West and east
/// longitudes are wrapped across the antimeridian.
pub fn bounding_box_coordinates(center: Coordinate, radius: f64) -> BoundingBoxSamples {
    let (north, south) = latitude_bounds(center.lat, radius);

    let lon_degrees_north = meters_to_longitude_degrees(radius, north);
    let lon_degrees_south = meters_to_longitude_degrees(radius, south);
    let lon_degrees = lon_degrees_north.max(lon_degrees_south);

    let west = wrap_longitude(center.lon - lon_degrees);
    let east = wrap_longitude(center.lon + lon_degrees);

    let mut samples = BoundingBoxSamples::new();
    for lat in [center.lat, north, south] {
        for lon in [center.lon, west, east] {
            samples.push(Coordinate::new(lat, lon));
        }
    }
    samples
}
