//! Error types raised while loading biometric tables.
#![forbid(unsafe_code)]

use thiserror::Error;

/// Errors raised while parsing or validating biometric reference data.
#[derive(Debug, Error)]
pub enum TableError {
    /// The JSON payload could not be decoded.
    #[error("failed to parse biometric tables")]
    Parse {
        /// Source error from `serde_json`.
        #[source]
        source: serde_json::Error,
    },
    /// An entry has an empty species key.
    #[error("{table} entry {index} has an empty species name")]
    EmptySpecies {
        /// Table holding the entry.
        table: &'static str,
        /// Zero-based position of the entry.
        index: usize,
    },
    /// A scientific-name key would never match a normalised query.
    #[error("scientific name {species:?} must be lowercase without surrounding spaces")]
    UnnormalisedKey {
        /// Offending key.
        species: String,
    },
    /// A length-weight coefficient is not a positive finite number.
    #[error("length-weight coefficients for {species} must be positive and finite, got a={a}, b={b}")]
    InvalidCoefficients {
        /// Species key of the entry.
        species: String,
        /// Scale coefficient.
        a: f64,
        /// Exponent.
        b: f64,
    },
    /// A fillet yield lies outside `0.0..=1.0`.
    #[error("fillet yield for {species} must lie in 0..=1, got {ratio}")]
    InvalidRatio {
        /// Species key of the entry.
        species: String,
        /// Rejected ratio.
        ratio: f64,
    },
}

impl From<serde_json::Error> for TableError {
    fn from(source: serde_json::Error) -> Self {
        Self::Parse { source }
    }
}
