//! Error types emitted by the Catchwise CLI.
//!
//! Keep this error type reasonably small, as every command helper returns
//! `Result<_, CliError>` and the workspace enables `clippy::result_large_err`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use catchwise_core::MeasurementError;
use thiserror::Error;

/// Errors emitted by the Catchwise CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        /// Option name as spelt on the command line.
        field: &'static str,
        /// Environment variable that can supply the option.
        env: &'static str,
    },
    /// An input file could not be opened.
    #[error("failed to open {field} at {path:?}: {source}")]
    OpenInput {
        /// Option that named the file.
        field: &'static str,
        /// Requested path.
        path: Utf8PathBuf,
        /// Source error from the filesystem.
        #[source]
        source: std::io::Error,
    },
    /// An input file did not hold the expected JSON.
    #[error("failed to parse {field} JSON at {path:?}: {source}")]
    ParseInput {
        /// Option that named the file.
        field: &'static str,
        /// Requested path.
        path: Utf8PathBuf,
        /// Source error from `serde_json`.
        #[source]
        source: serde_json::Error,
    },
    /// A regulation table override was rejected.
    #[error("regulation tables at {path:?} are invalid: {source}")]
    RegulationTables {
        /// Requested path.
        path: Utf8PathBuf,
        /// Validation or parse failure.
        #[source]
        source: catchwise_regulation::TableError,
    },
    /// A biometric table override was rejected.
    #[error("biometric tables at {path:?} are invalid: {source}")]
    BiometricTables {
        /// Requested path.
        path: Utf8PathBuf,
        /// Validation or parse failure.
        #[source]
        source: catchwise_biometrics::TableError,
    },
    /// A supplied length or weight was unusable.
    #[error(transparent)]
    Measurement(#[from] MeasurementError),
    /// Serialising the command output failed.
    #[error("failed to serialise output: {0}")]
    SerialiseOutput(#[source] serde_json::Error),
    /// Writing the command output failed.
    #[error("failed to write output: {0}")]
    WriteOutput(#[source] std::io::Error),
}
