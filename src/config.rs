//! Configuration for [`crate::QueryPlanner`].
//!
//! Loadable from JSON, or TOML with the `toml` feature.
use crate::compute::validation::validate_precision;
use crate::constants::{DEFAULT_PRECISION, MAX_PRECISION};
use crate::error::{GeohashError, Result};
use serde::de::Error;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Planner configuration
///
/// # Example
///
/// ```rust
/// use spatio_geohash::Config;
///
/// let json = r#"{ "geohash_precision": 12, "strict_validation": true }"#;
/// let config = Config::from_json(json).unwrap();
/// assert_eq!(config.geohash_precision, 12);
/// assert!(config.strict_validation);
///
/// assert!(Config::from_json(r#"{ "geohash_precision": 30 }"#).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Characters produced when encoding a location (1-22, default: 10)
    #[serde(default = "Config::default_geohash_precision")]
    pub geohash_precision: i32,

    /// Reject out-of-range input instead of clamping it
    #[serde(default)]
    pub strict_validation: bool,
}

impl Config {
    const fn default_geohash_precision() -> i32 {
        DEFAULT_PRECISION
    }

    pub fn with_geohash_precision(mut self, precision: i32) -> Self {
        assert!(
            (1..=MAX_PRECISION).contains(&precision),
            "Geohash precision must be between 1 and 22"
        );
        self.geohash_precision = precision;
        self
    }

    pub fn with_strict_validation(mut self, strict: bool) -> Self {
        self.strict_validation = strict;
        self
    }

    pub fn validate(&self) -> std::result::Result<(), String> {
        validate_precision(self.geohash_precision).map_err(|e| e.to_string())
    }

    pub fn from_json(json: &str) -> std::result::Result<Self, serde_json::Error> {
        let config: Config = serde_json::from_str(json)?;
        if let Err(e) = config.validate() {
            return Err(serde_json::Error::custom(e));
        }
        Ok(config)
    }

    pub fn to_json(&self) -> std::result::Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    #[cfg(feature = "toml")]
    pub fn from_toml(toml_str: &str) -> std::result::Result<Self, toml::de::Error> {
        let config: Config = toml::from_str(toml_str)?;
        if let Err(e) = config.validate() {
            return Err(toml::de::Error::custom(e));
        }
        Ok(config)
    }

    #[cfg(feature = "toml")]
    pub fn to_toml(&self) -> std::result::Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Loads a configuration file, picking the format from its extension.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => {
                Self::from_json(&contents).map_err(|e| GeohashError::Config(e.to_string()))
            }
            #[cfg(feature = "toml")]
            Some("toml") => {
                Self::from_toml(&contents).map_err(|e| GeohashError::Config(e.to_string()))
            }
            other => Err(GeohashError::Config(format!(
                "Unsupported config format: {}",
                other.unwrap_or("<none>")
            ))),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            geohash_precision: Self::default_geohash_precision(),
            strict_validation: false,
        }
    }
}
