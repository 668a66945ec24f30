//! Compute layer: geodesy, encoding, cell sizing and range derivation.
//!
//! Every function here is pure and clamps rather than rejects its input, so
//! they can be called from any thread without coordination. Validation lives
//! in [`validation`] and is applied by [`crate::QueryPlanner`] in strict mode.

pub mod bbox;
pub mod encode;
pub mod geodesy;
pub mod query;
pub mod validation;

pub use bbox::{bounding_box_bits, bounding_box_coordinates};
pub use encode::{encode_geohash, encode_geohash_default};
pub use geodesy::{degrees_to_radians, distance_km, meters_to_longitude_degrees, wrap_longitude};
pub use query::{geohash_queries, geohash_query};
