//! Value types passed through the encoder and the range planner.
use geo::Point;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A geographic coordinate in degrees.
///
/// Latitude comes first, matching the `(lat, lon)` convention of geohash
/// tooling. Conversions to and from [`geo::Point`] map longitude to `x` and
/// latitude to `y`.
///
/// # Examples
///
/// ```
/// use spatio_geohash::Coordinate;
/// use geo::Point;
///
/// let tokyo = Coordinate::new(35.68944, 139.69167);
/// let point: Point = tokyo.into();
/// assert_eq!(point.x(), 139.69167);
/// assert_eq!(Coordinate::from(point), tokyo);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinate {
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    pub fn lat(&self) -> f64 {
        self.lat
    }

    pub fn lon(&self) -> f64 {
        self.lon
    }
}

impl From<Point<f64>> for Coordinate {
    fn from(point: Point<f64>) -> Self {
        Self::new(point.y(), point.x())
    }
}

impl From<Coordinate> for Point<f64> {
    fn from(coordinate: Coordinate) -> Self {
        Point::new(coordinate.lon, coordinate.lat)
    }
}

impl From<(f64, f64)> for Coordinate {
    /// Builds a coordinate from a `(lat, lon)` tuple.
    fn from((lat, lon): (f64, f64)) -> Self {
        Self::new(lat, lon)
    }
}

/// A closed lexicographic range `[start, end]` over geohash keys.
///
/// A sorted scan from `start` to `end` inclusive returns every geohash that
/// shares the bit prefix the range was built from. `end` may carry the `~`
/// sentinel when no exact upper geohash exists.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QueryRange {
    pub start: String,
    pub end: String,
}

impl QueryRange {
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }

    /// Inclusive lexicographic membership test.
    ///
    /// ```
    /// use spatio_geohash::QueryRange;
    ///
    /// let range = QueryRange::new("xn76", "xn77");
    /// assert!(range.contains("xn76u"));
    /// assert!(range.contains("xn77"));
    /// assert!(!range.contains("xn77u"));
    /// ```
    pub fn contains(&self, geohash: &str) -> bool {
        self.start.as_str() <= geohash && geohash <= self.end.as_str()
    }

    pub fn as_tuple(&self) -> (&str, &str) {
        (&self.start, &self.end)
    }
}

impl fmt::Display for QueryRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.start, self.end)
    }
}

impl From<QueryRange> for (String, String) {
    fn from(range: QueryRange) -> Self {
        (range.start, range.end)
    }
}

impl<S: Into<String>> From<(S, S)> for QueryRange {
    fn from((start, end): (S, S)) -> Self {
        Self::new(start, end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinate_point_roundtrip() {
        let coord = Coordinate::new(40.7128, -74.0060);
        let point: Point = coord.into();
        assert_eq!(point.x(), -74.0060);
        assert_eq!(point.y(), 40.7128);
        assert_eq!(Coordinate::from(point), coord);
    }

    #[test]
    fn test_coordinate_from_tuple_is_lat_lon() {
        let coord: Coordinate = (10.0, 20.0).into();
        assert_eq!(coord.lat(), 10.0);
        assert_eq!(coord.lon(), 20.0);
    }

    #[test]
    fn test_range_contains_sentinel_end() {
        let range = QueryRange::new("64s", "64~");
        assert!(range.contains("64s"));
        assert!(range.contains("64zzzz"));
        assert!(!range.contains("64r"));
        assert!(!range.contains("65"));
    }

    #[test]
    fn test_range_display_and_tuple() {
        let range = QueryRange::new("60", "6h");
        assert_eq!(range.to_string(), "[60, 6h]");
        assert_eq!(range.as_tuple(), ("60", "6h"));

        let (start, end): (String, String) = range.into();
        assert_eq!(start, "60");
        assert_eq!(end, "6h");
    }

    #[test]
    fn test_range_serialization() {
        let range = QueryRange::new("xn76", "xn77");
        let json = serde_json::to_string(&range).unwrap();
        assert_eq!(json, r#"{"start":"xn76","end":"xn77"}"#);

        let back: QueryRange = serde_json::from_str(&json).unwrap();
        assert_eq!(back, range);
    }
}
