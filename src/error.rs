//! Error types for the strict validation and configuration layers.

use thiserror::Error;

/// Errors surfaced by the validating entry points.
///
/// The encoding and range-derivation functions in [`crate::compute`] clamp
/// their inputs and never return these; only [`crate::QueryPlanner`] in strict
/// mode, [`crate::validation`] and [`crate::Config`] do.
#[derive(Debug, Error)]
pub enum GeohashError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, GeohashError>;
