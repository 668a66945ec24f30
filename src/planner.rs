//! Configured front-end over the compute layer.

use crate::compute::encode::encode_geohash;
use crate::compute::query::geohash_queries;
use crate::compute::validation::{validate_coordinate, validate_radius_km};
use crate::config::Config;
use crate::error::{GeohashError, Result};
use crate::types::{Coordinate, QueryRange};

/// Encodes locations and plans range scans according to a [`Config`].
///
/// In the default lenient mode input is clamped exactly like the free
/// functions in [`crate::compute`], with a warning logged for anything out of
/// range. With `strict_validation` the same input is rejected.
///
/// # Examples
///
/// ```rust
/// use spatio_geohash::{Config, Coordinate, QueryPlanner};
///
/// let planner = QueryPlanner::new(Config::default().with_geohash_precision(8))?;
///
/// let tokyo = Coordinate::new(35.68944, 139.69167);
/// let key = planner.encode(&tokyo)?;
/// assert_eq!(key.len(), 8);
///
/// let ranges = planner.queries(&tokyo, 10.0)?;
/// assert!(planner.matches(&tokyo, &ranges));
/// # Ok::<(), spatio_geohash::GeohashError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct QueryPlanner {
    config: Config,
}

impl QueryPlanner {
    pub fn new(config: Config) -> Result<Self> {
        config.validate().map_err(GeohashError::Config)?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Geohash of `coordinate` at the configured precision.
    pub fn encode(&self, coordinate: &Coordinate) -> Result<String> {
        self.enforce(validate_coordinate(coordinate))?;
        Ok(encode_geohash(*coordinate, self.config.geohash_precision))
    }

    /// Ranges covering a circle of `radius_km` around `center`, deduplicated
    /// in first-seen order.
    pub fn queries(&self, center: &Coordinate, radius_km: f64) -> Result<Vec<QueryRange>> {
        self.enforce(validate_coordinate(center))?;
        self.enforce(validate_radius_km(radius_km))?;

        Ok(geohash_queries(*center, radius_km))
    }

    /// Whether the geohash of `coordinate` falls in any of `ranges`.
    ///
    /// Useful to check which stored keys a set of scans would return; the
    /// ranges over-approximate the circle, so follow up with
    /// [`crate::compute::geodesy::distance_km`] for an exact filter.
    pub fn matches(&self, coordinate: &Coordinate, ranges: &[QueryRange]) -> bool {
        let hash = encode_geohash(*coordinate, self.config.geohash_precision);
        ranges.iter().any(|range| range.contains(&hash))
    }

    /// Propagates a validation failure in strict mode; logs and continues
    /// otherwise.
    fn enforce(&self, check: Result<()>) -> Result<()> {
        match check {
            Err(e) if self.config.strict_validation => Err(e),
            Err(e) => {
                log::warn!("Clamping out-of-range input: {}", e);
                Ok(())
            }
            Ok(()) => Ok(()),
        }
    }
}
