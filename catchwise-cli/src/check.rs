//! `check` command: apply catch regulations to one specimen.

use std::io::Write;

use camino::Utf8PathBuf;
use catchwise_regulation::{ComplianceChecker, Verdict};
use chrono::NaiveDate;
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::files::regulation_tables;
use crate::{
    ARG_DATE, ARG_LENGTH_CM, ARG_REGULATION_TABLES, ARG_SPECIES, ARG_WEIGHT_KG, CliError,
    ENV_CHECK_SPECIES, reference_date, write_json,
};

/// CLI arguments for the `check` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Check whether a specimen may be sold. Closed seasons are \
                 checked first, then minimum length or weight. The date \
                 defaults to today.",
    about = "Check a specimen against catch regulations"
)]
#[ortho_config(prefix = "CATCHWISE")]
pub(crate) struct CheckArgs {
    /// Species name as identified, e.g. "고등어".
    #[arg(long = ARG_SPECIES, value_name = "name")]
    #[serde(default)]
    pub(crate) species: Option<String>,
    /// Measured body length in centimetres.
    #[arg(long = ARG_LENGTH_CM, value_name = "cm")]
    #[serde(default)]
    pub(crate) length_cm: Option<f64>,
    /// Measured or estimated weight in kilograms.
    #[arg(long = ARG_WEIGHT_KG, value_name = "kg")]
    #[serde(default)]
    pub(crate) weight_kg: Option<f64>,
    /// Date to check, as YYYY-MM-DD.
    #[arg(long = ARG_DATE, value_name = "date")]
    #[serde(default)]
    pub(crate) date: Option<NaiveDate>,
    /// JSON file replacing the built-in regulation tables.
    #[arg(long = ARG_REGULATION_TABLES, value_name = "path")]
    #[serde(default)]
    pub(crate) regulation_tables: Option<Utf8PathBuf>,
}

impl CheckArgs {
    pub(crate) fn into_config(self) -> Result<CheckConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        CheckConfig::try_from(merged)
    }
}

/// Resolved `check` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct CheckConfig {
    pub(crate) species: String,
    pub(crate) length_cm: Option<f64>,
    pub(crate) weight_kg: Option<f64>,
    pub(crate) date: NaiveDate,
    pub(crate) regulation_tables: Option<Utf8PathBuf>,
}

impl TryFrom<CheckArgs> for CheckConfig {
    type Error = CliError;

    fn try_from(args: CheckArgs) -> Result<Self, Self::Error> {
        let species = args.species.ok_or(CliError::MissingArgument {
            field: ARG_SPECIES,
            env: ENV_CHECK_SPECIES,
        })?;
        Ok(Self {
            species,
            length_cm: args.length_cm,
            weight_kg: args.weight_kg,
            date: reference_date(args.date),
            regulation_tables: args.regulation_tables,
        })
    }
}

pub(crate) fn execute_check(config: &CheckConfig) -> Result<Verdict, CliError> {
    let tables = regulation_tables(config.regulation_tables.as_deref())?;
    let checker = ComplianceChecker::new(tables);
    let verdict = checker.check(
        &config.species,
        config.length_cm,
        config.weight_kg,
        config.date,
    )?;
    Ok(verdict)
}

pub(crate) fn run_check_with(args: CheckArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    let verdict = execute_check(&config)?;
    write_json(writer, &verdict)
}
