//! Lexicographic range derivation for geohash prefixes and circles.

use super::bbox::{bounding_box_bits, bounding_box_coordinates};
use super::encode::encode_geohash;
use crate::constants::{BASE32, BITS_PER_CHAR, SENTINEL};
use crate::types::{Coordinate, QueryRange};

/// Position of an alphabet character.
///
/// # Panics
///
/// Panics if `c` is not a geohash character. Callers only pass characters
/// produced by the encoder or checked by [`crate::validation`].
fn base32_index(c: u8) -> usize {
    BASE32
        .iter()
        .position(|&b| b == c)
        .unwrap_or_else(|| panic!("character {:?} is not in the geohash alphabet", c as char))
}

/// Range covering every geohash that shares the first `bits` bits of `geohash`.
///
/// When `geohash` is shorter than the characters needed for `bits`, the whole
/// prefix is kept and the range is closed with the `~` sentinel. The same
/// sentinel replaces an upper bound that would run past `z`.
///
/// # Panics
///
/// Panics if the character holding the last significant bit is not part of
/// the geohash alphabet.
///
/// # Examples
///
/// ```
/// use spatio_geohash::{QueryRange, geohash_query};
///
/// assert_eq!(geohash_query("64m9yn96mx", 6), QueryRange::new("60", "6h"));
/// assert_eq!(geohash_query("6", 10), QueryRange::new("6", "6~"));
/// assert_eq!(geohash_query("64z178", 12), QueryRange::new("64s", "64~"));
/// ```
pub fn geohash_query(geohash: &str, bits: u32) -> QueryRange {
    let precision = bits.div_ceil(BITS_PER_CHAR) as usize;
    if geohash.len() < precision {
        return QueryRange::new(geohash, format!("{}{}", geohash, SENTINEL));
    }
    if precision == 0 {
        return QueryRange::new(char::from(BASE32[0]).to_string(), SENTINEL.to_string());
    }

    let hash = &geohash[..precision];
    let base = &hash[..precision - 1];
    let last_value = base32_index(hash.as_bytes()[precision - 1]);

    let significant_bits = bits - base.len() as u32 * BITS_PER_CHAR;
    let unused_bits = BITS_PER_CHAR - significant_bits;

    let start_value = (last_value >> unused_bits) << unused_bits;
    let end_value = start_value + (1 << unused_bits);

    let start = format!("{}{}", base, BASE32[start_value] as char);
    let end = if end_value > 31 {
        format!("{}{}", base, SENTINEL)
    } else {
        format!("{}{}", base, BASE32[end_value] as char)
    };

    QueryRange::new(start, end)
}

/// Range queries that together cover a circle of `radius_km` around `center`.
///
/// The circle's bounding box is sampled at nine points, each encoded at a
/// precision matched to the radius; ranges repeated by neighbouring samples
/// are dropped, keeping the order in which they were first produced. A sorted
/// scan over every returned range yields a superset of the keys inside the
/// circle.
///
/// # Examples
///
/// ```
/// use spatio_geohash::{Coordinate, QueryRange, geohash_queries};
///
/// let tokyo = Coordinate::new(35.68944, 139.69167);
/// assert_eq!(
///     geohash_queries(tokyo, 10.0),
///     vec![QueryRange::new("xn77", "xn78"), QueryRange::new("xn76", "xn77")]
/// );
/// ```
pub fn geohash_queries(center: Coordinate, radius_km: f64) -> Vec<QueryRange> {
    let radius = radius_km * 1000.0;
    let query_bits = bounding_box_bits(center, radius).max(1);
    let precision = query_bits.div_ceil(BITS_PER_CHAR) as i32;

    log::debug!(
        "Planning ranges for ({}, {}) radius {} km: {} bits, {} chars",
        center.lat,
        center.lon,
        radius_km,
        query_bits,
        precision
    );

    let mut queries: Vec<QueryRange> = Vec::with_capacity(9);
    for coordinate in bounding_box_coordinates(center, radius) {
        let hash = encode_geohash(coordinate, precision);
        let query = geohash_query(&hash, query_bits);
        log::trace!(
            "Sample ({}, {}) -> {} -> {}",
            coordinate.lat,
            coordinate.lon,
            hash,
            query
        );
        if !queries.contains(&query) {
            queries.push(query);
        }
    }

    log::debug!("Planned {} range(s)", queries.len());
    queries
}
