//! Capability-based file access for command inputs.

use std::io::{self, BufReader};
use std::sync::Arc;

use camino::Utf8Path;
use cap_std::{ambient_authority, fs_utf8};
use catchwise_biometrics::BiometricTables;
use catchwise_regulation::RegulationTables;
use serde::de::DeserializeOwned;

use crate::{ARG_BIOMETRIC_TABLES, ARG_REGULATION_TABLES, CliError};

/// Open a UTF-8 file path using ambient authority.
pub(crate) fn open_utf8_file(path: &Utf8Path) -> io::Result<fs_utf8::File> {
    fs_utf8::File::open_ambient(path, ambient_authority())
}

fn open_input(path: &Utf8Path, field: &'static str) -> Result<BufReader<fs_utf8::File>, CliError> {
    let file = open_utf8_file(path).map_err(|source| CliError::OpenInput {
        field,
        path: path.to_path_buf(),
        source,
    })?;
    Ok(BufReader::new(file))
}

/// Decode a JSON document named by `field`.
pub(crate) fn read_json<T: DeserializeOwned>(
    path: &Utf8Path,
    field: &'static str,
) -> Result<T, CliError> {
    let reader = open_input(path, field)?;
    serde_json::from_reader(reader).map_err(|source| CliError::ParseInput {
        field,
        path: path.to_path_buf(),
        source,
    })
}

/// Built-in regulation tables, or a validated override from disk.
pub(crate) fn regulation_tables(
    path: Option<&Utf8Path>,
) -> Result<Arc<RegulationTables>, CliError> {
    let Some(override_path) = path else {
        return Ok(RegulationTables::standard());
    };
    log::info!("loading regulation tables from {override_path}");
    let reader = open_input(override_path, ARG_REGULATION_TABLES)?;
    RegulationTables::from_reader(reader)
        .map(Arc::new)
        .map_err(|source| CliError::RegulationTables {
            path: override_path.to_path_buf(),
            source,
        })
}

/// Built-in biometric tables, or a validated override from disk.
pub(crate) fn biometric_tables(path: Option<&Utf8Path>) -> Result<Arc<BiometricTables>, CliError> {
    let Some(override_path) = path else {
        return Ok(BiometricTables::standard());
    };
    log::info!("loading biometric tables from {override_path}");
    let reader = open_input(override_path, ARG_BIOMETRIC_TABLES)?;
    BiometricTables::from_reader(reader)
        .map(Arc::new)
        .map_err(|source| CliError::BiometricTables {
            path: override_path.to_path_buf(),
            source,
        })
}
