//! Geohash alphabet and geodesic constants shared by the encoder and the
//! query planner.

/// Number of bits packed into one geohash character.
pub const BITS_PER_CHAR: u32 = 5;

/// Base-32 geohash alphabet. Omits `a`, `i`, `l` and `o`; ASCII order of the
/// characters matches their semantic order.
pub const BASE32: &[u8; 32] = b"0123456789bcdefghjkmnpqrstuvwxyz";

/// Upper-bound sentinel that sorts after every character of [`BASE32`].
pub const SENTINEL: char = '~';

/// Default number of characters produced by the encoder.
pub const DEFAULT_PRECISION: i32 = 10;

/// Longest geohash the encoder will produce.
pub const MAX_PRECISION: i32 = 22;

/// Upper bound on the bit precision of a range query.
pub const MAXIMUM_BITS_PRECISION: u32 = 22 * BITS_PER_CHAR;

/// Length of one degree of latitude, in meters.
pub const METERS_PER_DEGREE_LATITUDE: f64 = 110_574.0;

/// Earth's meridional circumference, in meters.
pub const EARTH_MERIDIONAL_CIRCUMFERENCE: f64 = 40_007_860.0;

/// Earth's equatorial radius (WGS84), in meters.
pub const EARTH_EQUATORIAL_RADIUS: f64 = 6_378_137.0;

/// Squared eccentricity of the WGS84 ellipsoid.
pub const E2: f64 = 0.00669447819799;

/// Tolerance below which a longitude degree is treated as zero length.
pub const EPSILON: f64 = 1e-12;
