//! Geohash encoding and range-scan planning for proximity search over sorted
//! key-value stores.
//!
//! ## Features
//! - **Encoding**: base-32 geohashes of 1-22 characters
//! - **Cell sizing**: bit precision matched to a search radius, aware of
//!   longitude compression toward the poles
//! - **Range planning**: deduplicated `[start, end]` lexicographic ranges that
//!   cover a circle; run each as an inclusive scan over geohash keys
//! - **Strict mode**: opt-in validation through [`QueryPlanner`]
//!
//! Scans return a superset of the keys inside the circle. Filter the results
//! with [`distance_km`] for an exact answer.
//!
//! ```rust
//! use spatio_geohash::{Coordinate, encode_geohash, geohash_queries};
//!
//! let key = encode_geohash(Coordinate::new(37.7853074, -122.4054274), 10);
//! assert_eq!(key, "9q8yywe56g");
//!
//! let tokyo = Coordinate::new(35.68944, 139.69167);
//! for range in geohash_queries(tokyo, 10.0) {
//!     // scan keys in [range.start, range.end]
//!     assert!(range.start < range.end);
//! }
//! ```

pub mod compute;
pub mod config;
pub mod constants;
pub mod error;
pub mod planner;
pub mod types;

pub use config::Config;
pub use error::{GeohashError, Result};
pub use planner::QueryPlanner;
pub use types::{Coordinate, QueryRange};

pub use compute::{
    bounding_box_bits, bounding_box_coordinates, degrees_to_radians, distance_km,
    encode_geohash, encode_geohash_default, geohash_queries, geohash_query,
    meters_to_longitude_degrees, wrap_longitude,
};

pub use compute::validation;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common imports
pub mod prelude {

    pub use crate::{Config, GeohashError, QueryPlanner, Result};

    pub use crate::{Coordinate, QueryRange};

    pub use crate::{distance_km, encode_geohash, geohash_queries, geohash_query};

    pub use crate::validation;
}
