//! `assess` command: estimate weight, then check regulations with it.

use std::io::Write;

use camino::Utf8PathBuf;
use catchwise_biometrics::BiometricEstimator;
use catchwise_core::Measurement;
use catchwise_regulation::ComplianceChecker;
use chrono::NaiveDate;
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::estimate::round_to_hundredths;
use crate::files::{biometric_tables, regulation_tables};
use crate::{
    ARG_BIOMETRIC_TABLES, ARG_DATE, ARG_LENGTH_CM, ARG_REGULATION_TABLES, ARG_SCIENTIFIC_NAME,
    ARG_SPECIES, ARG_UNIT_PRICE_PER_KG, CliError, ENV_ASSESS_LENGTH_CM, ENV_ASSESS_SPECIES,
    reference_date, write_json,
};

/// CLI arguments for the `assess` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Assess an identified specimen: estimate its weight from the \
                 measured length, then check closed seasons and size limits \
                 using that length and the rounded weight estimate. With a \
                 unit price, the report also carries a market price.",
    about = "Estimate weight and check regulations in one step"
)]
#[ortho_config(prefix = "CATCHWISE")]
pub(crate) struct AssessArgs {
    /// Species name as identified, e.g. "대문어".
    #[arg(long = ARG_SPECIES, value_name = "name")]
    #[serde(default)]
    pub(crate) species: Option<String>,
    /// Scientific name used for the length-weight law.
    #[arg(long = ARG_SCIENTIFIC_NAME, value_name = "name")]
    #[serde(default)]
    pub(crate) scientific_name: Option<String>,
    /// Measured body length in centimetres.
    #[arg(long = ARG_LENGTH_CM, value_name = "cm")]
    #[serde(default)]
    pub(crate) length_cm: Option<f64>,
    /// Date to check, as YYYY-MM-DD.
    #[arg(long = ARG_DATE, value_name = "date")]
    #[serde(default)]
    pub(crate) date: Option<NaiveDate>,
    /// Market price per kilogram; enables `marketPrice` in the report.
    #[arg(long = ARG_UNIT_PRICE_PER_KG, value_name = "price")]
    #[serde(default)]
    pub(crate) unit_price_per_kg: Option<f64>,
    /// JSON file replacing the built-in regulation tables.
    #[arg(long = ARG_REGULATION_TABLES, value_name = "path")]
    #[serde(default)]
    pub(crate) regulation_tables: Option<Utf8PathBuf>,
    /// JSON file replacing the built-in biometric tables.
    #[arg(long = ARG_BIOMETRIC_TABLES, value_name = "path")]
    #[serde(default)]
    pub(crate) biometric_tables: Option<Utf8PathBuf>,
}

impl AssessArgs {
    pub(crate) fn into_config(self) -> Result<AssessConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        AssessConfig::try_from(merged)
    }
}

/// Resolved `assess` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct AssessConfig {
    pub(crate) species: String,
    pub(crate) scientific_name: Option<String>,
    pub(crate) length_cm: f64,
    pub(crate) date: NaiveDate,
    pub(crate) unit_price_per_kg: Option<f64>,
    pub(crate) regulation_tables: Option<Utf8PathBuf>,
    pub(crate) biometric_tables: Option<Utf8PathBuf>,
}

impl TryFrom<AssessArgs> for AssessConfig {
    type Error = CliError;

    fn try_from(args: AssessArgs) -> Result<Self, Self::Error> {
        let species = args.species.ok_or(CliError::MissingArgument {
            field: ARG_SPECIES,
            env: ENV_ASSESS_SPECIES,
        })?;
        let length_cm = args.length_cm.ok_or(CliError::MissingArgument {
            field: ARG_LENGTH_CM,
            env: ENV_ASSESS_LENGTH_CM,
        })?;
        Ok(Self {
            species,
            scientific_name: args.scientific_name,
            length_cm,
            date: reference_date(args.date),
            unit_price_per_kg: args.unit_price_per_kg,
            regulation_tables: args.regulation_tables,
            biometric_tables: args.biometric_tables,
        })
    }
}

/// Output of the `assess` command.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct AssessReport {
    pub(crate) seafood_type: String,
    /// Whole weight in kilograms, rounded to two decimals.
    pub(crate) estimated_weight: f64,
    pub(crate) currently_forbidden: bool,
    pub(crate) reason: Option<String>,
    pub(crate) fillet_yield: f64,
    /// Unit price times the rounded weight, truncated toward zero.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) market_price: Option<i64>,
}

#[expect(
    clippy::float_arithmetic,
    reason = "price is unit price times weight"
)]
#[expect(
    clippy::cast_possible_truncation,
    reason = "market prices are whole currency units, truncated toward zero"
)]
fn market_price(unit_price_per_kg: f64, weight_kg: f64) -> Result<i64, CliError> {
    let price = Measurement::unit_price_per_kg(unit_price_per_kg)?;
    let total = price.value() * weight_kg;
    if !total.is_finite() || total >= 9.0e18 {
        return Err(price.out_of_range().into());
    }
    Ok(total.trunc() as i64)
}

pub(crate) fn execute_assess(config: &AssessConfig) -> Result<AssessReport, CliError> {
    let estimator = BiometricEstimator::new(biometric_tables(config.biometric_tables.as_deref())?);
    let checker = ComplianceChecker::new(regulation_tables(config.regulation_tables.as_deref())?);

    // The check sees the same rounded weight the buyer sees.
    let estimated_weight = round_to_hundredths(
        estimator.estimate_weight(config.scientific_name.as_deref(), config.length_cm)?,
    );
    let verdict = checker.check(
        &config.species,
        Some(config.length_cm),
        Some(estimated_weight),
        config.date,
    )?;
    let market_price = config
        .unit_price_per_kg
        .map(|unit| market_price(unit, estimated_weight))
        .transpose()?;
    Ok(AssessReport {
        seafood_type: config.species.clone(),
        estimated_weight,
        currently_forbidden: verdict.forbidden,
        reason: verdict.reason_message(),
        fillet_yield: estimator.estimate_yield(Some(&config.species)),
        market_price,
    })
}

pub(crate) fn run_assess_with(args: AssessArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    let report = execute_assess(&config)?;
    write_json(writer, &report)
}
