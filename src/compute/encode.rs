//! Geohash encoding by interleaved binary subdivision.

use crate::constants::{BASE32, BITS_PER_CHAR, DEFAULT_PRECISION, MAX_PRECISION};
use crate::types::Coordinate;

/// Clamps a requested geohash length into `[1, MAX_PRECISION]`.
pub fn clamp_precision(precision: i32) -> usize {
    precision.clamp(1, MAX_PRECISION) as usize
}

/// Encodes a coordinate as a geohash of `precision` characters.
///
/// Precision is clamped to `[1, 22]`. Bits alternate between longitude (first)
/// and latitude; a value lying exactly on a midpoint takes the lower half.
/// Latitude and longitude are not validated: out-of-range values saturate to
/// the nearest edge cell.
///
/// # Examples
///
/// ```
/// use spatio_geohash::{Coordinate, encode_geohash};
///
/// let hash = encode_geohash(Coordinate::new(37.7853074, -122.4054274), 10);
/// assert_eq!(hash, "9q8yywe56g");
///
/// assert_eq!(encode_geohash(Coordinate::new(-90.0, -180.0), 4), "0000");
/// assert_eq!(encode_geohash(Coordinate::new(90.0, 180.0), 0), "z");
/// ```
pub fn encode_geohash(coordinate: Coordinate, precision: i32) -> String {
    let precision = clamp_precision(precision);

    let mut lon_range = (-180.0_f64, 180.0_f64);
    let mut lat_range = (-90.0_f64, 90.0_f64);

    let mut hash = String::with_capacity(precision);
    let mut hash_val = 0usize;
    let mut bits = 0u32;
    let mut even = true;

    while hash.len() < precision {
        let (value, range) = if even {
            (coordinate.lon, &mut lon_range)
        } else {
            (coordinate.lat, &mut lat_range)
        };

        let middle = (range.0 + range.1) / 2.0;
        if value > middle {
            hash_val = (hash_val << 1) + 1;
            range.0 = middle;
        } else {
            hash_val <<= 1;
            range.1 = middle;
        }

        even = !even;
        if bits < BITS_PER_CHAR - 1 {
            bits += 1;
        } else {
            hash.push(BASE32[hash_val] as char);
            bits = 0;
            hash_val = 0;
        }
    }

    hash
}

/// Encodes a coordinate at the default precision of 10 characters.
pub fn encode_geohash_default(coordinate: Coordinate) -> String {
    encode_geohash(coordinate, DEFAULT_PRECISION)
}
