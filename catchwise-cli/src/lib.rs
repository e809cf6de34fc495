//! Command-line interface for the Catchwise engine.
//!
//! Every subcommand reads its inputs from flags, `CATCHWISE_CMDS_*`
//! environment variables or configuration files (merged by `ortho_config`)
//! and prints a single JSON document on stdout.
#![forbid(unsafe_code)]

use std::io::Write;

use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use serde::Serialize;

mod assess;
mod check;
mod error;
mod estimate;
mod files;
mod route;

pub use error::CliError;

use assess::AssessArgs;
use check::CheckArgs;
use estimate::EstimateArgs;
use route::RouteArgs;

pub(crate) const ARG_REQUEST_PATH: &str = "request-path";
pub(crate) const ARG_SPECIES: &str = "species";
pub(crate) const ARG_SCIENTIFIC_NAME: &str = "scientific-name";
pub(crate) const ARG_LENGTH_CM: &str = "length-cm";
pub(crate) const ARG_WEIGHT_KG: &str = "weight-kg";
pub(crate) const ARG_DATE: &str = "date";
pub(crate) const ARG_REGULATION_TABLES: &str = "regulation-tables";
pub(crate) const ARG_BIOMETRIC_TABLES: &str = "biometric-tables";
pub(crate) const ARG_UNIT_PRICE_PER_KG: &str = "unit-price-per-kg";
pub(crate) const ENV_ROUTE_REQUEST_PATH: &str = "CATCHWISE_CMDS_ROUTE_REQUEST_PATH";
pub(crate) const ENV_CHECK_SPECIES: &str = "CATCHWISE_CMDS_CHECK_SPECIES";
pub(crate) const ENV_ESTIMATE_LENGTH_CM: &str = "CATCHWISE_CMDS_ESTIMATE_LENGTH_CM";
pub(crate) const ENV_ASSESS_SPECIES: &str = "CATCHWISE_CMDS_ASSESS_SPECIES";
pub(crate) const ENV_ASSESS_LENGTH_CM: &str = "CATCHWISE_CMDS_ASSESS_LENGTH_CM";

/// Run the Catchwise CLI with the current process arguments and environment.
///
/// # Errors
/// Returns [`CliError`] when arguments, configuration or inputs are invalid,
/// or when the output cannot be written.
pub fn run() -> Result<(), CliError> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // --help and --version are not failures.
        Err(err) if !err.use_stderr() => {
            err.print().map_err(CliError::WriteOutput)?;
            return Ok(());
        }
        Err(err) => return Err(CliError::ArgumentParsing(err)),
    };
    let mut stdout = std::io::stdout().lock();
    run_with(cli, &mut stdout)
}

fn run_with(cli: Cli, writer: &mut dyn Write) -> Result<(), CliError> {
    match cli.command {
        Command::Route(args) => route::run_route_with(args, writer),
        Command::Check(args) => check::run_check_with(args, writer),
        Command::Estimate(args) => estimate::run_estimate_with(args, writer),
        Command::Assess(args) => assess::run_assess_with(args, writer),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "catchwise",
    about = "Route planning and catch-compliance checks for seafood markets",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Order merchant stops into a short visiting tour.
    Route(RouteArgs),
    /// Check a specimen against closed seasons and size limits.
    Check(CheckArgs),
    /// Estimate weight and fillet yield from a measured length.
    Estimate(EstimateArgs),
    /// Estimate weight, then check the specimen with that weight.
    Assess(AssessArgs),
}

/// The reference date, defaulting to today's local calendar date.
fn reference_date(date: Option<NaiveDate>) -> NaiveDate {
    date.unwrap_or_else(|| Local::now().date_naive())
}

fn write_json<T: Serialize>(writer: &mut dyn Write, value: &T) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(value).map_err(CliError::SerialiseOutput)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}

#[cfg(test)]
mod tests;
