//! Error types raised while loading regulation tables.
#![forbid(unsafe_code)]

use thiserror::Error;

/// Errors raised while parsing or validating regulation reference data.
#[derive(Debug, Error)]
pub enum TableError {
    /// The JSON payload could not be decoded.
    #[error("failed to parse regulation tables")]
    Parse {
        /// Source error from `serde_json`.
        #[source]
        source: serde_json::Error,
    },
    /// A month-day string or pair does not name a calendar day.
    #[error("{value:?} is not a valid month-day")]
    InvalidMonthDay {
        /// Offending input, as written.
        value: String,
    },
    /// An entry has an empty species key.
    #[error("{table} entry {index} has an empty species name")]
    EmptySpecies {
        /// Table holding the entry.
        table: &'static str,
        /// Zero-based position of the entry.
        index: usize,
    },
    /// A ban-season entry lists no windows.
    #[error("ban season for {species} lists no windows")]
    NoWindows {
        /// Species key of the entry.
        species: String,
    },
    /// A size or weight limit is not a positive finite number.
    #[error("size limit for {species} must be positive and finite, got {value}")]
    InvalidLimit {
        /// Species key of the entry.
        species: String,
        /// Rejected limit.
        value: f64,
    },
}

impl From<serde_json::Error> for TableError {
    fn from(source: serde_json::Error) -> Self {
        Self::Parse { source }
    }
}
