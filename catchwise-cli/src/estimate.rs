//! `estimate` command: weight and fillet yield from a measured length.

use std::io::Write;

use camino::Utf8PathBuf;
use catchwise_biometrics::BiometricEstimator;
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::files::biometric_tables;
use crate::{
    ARG_BIOMETRIC_TABLES, ARG_LENGTH_CM, ARG_SCIENTIFIC_NAME, ARG_SPECIES, CliError,
    ENV_ESTIMATE_LENGTH_CM, write_json,
};

/// CLI arguments for the `estimate` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Estimate whole weight with the length-weight law W = a*L^b \
                 for the given scientific name, and the fillet share for the \
                 given common name. Unknown species use default constants.",
    about = "Estimate weight and fillet yield"
)]
#[ortho_config(prefix = "CATCHWISE")]
pub(crate) struct EstimateArgs {
    /// Measured body length in centimetres.
    #[arg(long = ARG_LENGTH_CM, value_name = "cm")]
    #[serde(default)]
    pub(crate) length_cm: Option<f64>,
    /// Scientific name, e.g. "Pagrus major".
    #[arg(long = ARG_SCIENTIFIC_NAME, value_name = "name")]
    #[serde(default)]
    pub(crate) scientific_name: Option<String>,
    /// Common name used for the fillet yield, e.g. "참돔".
    #[arg(long = ARG_SPECIES, value_name = "name")]
    #[serde(default)]
    pub(crate) species: Option<String>,
    /// JSON file replacing the built-in biometric tables.
    #[arg(long = ARG_BIOMETRIC_TABLES, value_name = "path")]
    #[serde(default)]
    pub(crate) biometric_tables: Option<Utf8PathBuf>,
}

impl EstimateArgs {
    pub(crate) fn into_config(self) -> Result<EstimateConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        EstimateConfig::try_from(merged)
    }
}

/// Resolved `estimate` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct EstimateConfig {
    pub(crate) length_cm: f64,
    pub(crate) scientific_name: Option<String>,
    pub(crate) species: Option<String>,
    pub(crate) biometric_tables: Option<Utf8PathBuf>,
}

impl TryFrom<EstimateArgs> for EstimateConfig {
    type Error = CliError;

    fn try_from(args: EstimateArgs) -> Result<Self, Self::Error> {
        let length_cm = args.length_cm.ok_or(CliError::MissingArgument {
            field: ARG_LENGTH_CM,
            env: ENV_ESTIMATE_LENGTH_CM,
        })?;
        Ok(Self {
            length_cm,
            scientific_name: args.scientific_name,
            species: args.species,
            biometric_tables: args.biometric_tables,
        })
    }
}

/// Output of the `estimate` command.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct EstimateReport {
    /// Whole weight in kilograms, rounded to two decimals.
    pub(crate) estimated_weight: f64,
    pub(crate) fillet_yield: f64,
    /// Unrounded whole weight times yield, in kilograms.
    pub(crate) fillet_weight: f64,
}

pub(crate) fn execute_estimate(config: &EstimateConfig) -> Result<EstimateReport, CliError> {
    let estimator = BiometricEstimator::new(biometric_tables(config.biometric_tables.as_deref())?);
    let whole = estimator.estimate_weight(config.scientific_name.as_deref(), config.length_cm)?;
    let fillet_weight = estimator.estimate_fillet_weight(
        config.species.as_deref(),
        config.scientific_name.as_deref(),
        config.length_cm,
    )?;
    Ok(EstimateReport {
        estimated_weight: round_to_hundredths(whole),
        fillet_yield: estimator.estimate_yield(config.species.as_deref()),
        fillet_weight,
    })
}

/// Round a weight in kilograms to two decimals, the precision shown to
/// buyers.
#[expect(
    clippy::float_arithmetic,
    reason = "rounding to hundredths scales through floating point"
)]
pub(crate) fn round_to_hundredths(kg: f64) -> f64 {
    (kg * 100.0).round() / 100.0
}

pub(crate) fn run_estimate_with(
    args: EstimateArgs,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let config = args.into_config()?;
    let report = execute_estimate(&config)?;
    write_json(writer, &report)
}
