//! Season and size rules applied to a single specimen.

use std::sync::Arc;

use catchwise_core::{Measurement, MeasurementError, Quantity};
use chrono::NaiveDate;

use crate::{BanWindow, RegulationTables, SizeLimit, Verdict, Violation};

/// Decides whether a specimen may be sold on a given day.
///
/// Species names are resolved independently against the ban-season and
/// size-limit tables: exact key first, then the first key in declared order
/// that contains the name or is contained by it.
///
/// # Examples
/// ```
/// use catchwise_regulation::ComplianceChecker;
/// use chrono::NaiveDate;
///
/// let checker = ComplianceChecker::standard();
/// let autumn = NaiveDate::from_ymd_opt(2025, 9, 1).expect("date");
///
/// let verdict = checker.check("고등어", Some(21.0), None, autumn)?;
/// assert!(verdict.forbidden);
/// assert_eq!(verdict.reason_message().as_deref(), Some("체장 금지 규격 (21.0cm 이하)"));
///
/// let verdict = checker.check("고등어", Some(25.0), None, autumn)?;
/// assert!(!verdict.forbidden);
/// # Ok::<(), catchwise_core::MeasurementError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ComplianceChecker {
    tables: Arc<RegulationTables>,
}

impl Default for ComplianceChecker {
    fn default() -> Self {
        Self::standard()
    }
}

impl ComplianceChecker {
    /// Checker over caller-supplied tables.
    #[must_use]
    pub const fn new(tables: Arc<RegulationTables>) -> Self {
        Self { tables }
    }

    /// Checker over the built-in tables.
    #[must_use]
    pub fn standard() -> Self {
        Self::new(RegulationTables::standard())
    }

    /// Tables backing this checker.
    #[must_use]
    pub fn tables(&self) -> &RegulationTables {
        &self.tables
    }

    /// Check a specimen of `species` on `today`.
    ///
    /// Closed seasons are checked first and short-circuit the size rules.
    /// Length limits are inclusive (a specimen exactly at the limit is
    /// undersized); weight limits are strict. A size rule only applies when
    /// the matching measurement is supplied.
    ///
    /// # Errors
    /// Returns [`MeasurementError`] when a supplied length or weight is
    /// negative or not finite.
    pub fn check(
        &self,
        species: &str,
        length_cm: Option<f64>,
        weight_kg: Option<f64>,
        today: NaiveDate,
    ) -> Result<Verdict, MeasurementError> {
        let length = Measurement::optional(Quantity::LengthCm, length_cm)?;
        let weight = Measurement::optional(Quantity::WeightKg, weight_kg)?;

        let violation = self
            .season_violation(species, today)
            .or_else(|| self.size_violation(species, length, weight));
        log::debug!("compliance check for {species:?} on {today}: {violation:?}");
        Ok(violation.map_or_else(Verdict::allowed, Verdict::forbidden))
    }

    /// Closed seasons registered for the table key `species` resolves to.
    ///
    /// Returns an empty slice when no key matches.
    #[must_use]
    pub fn ban_windows(&self, species: &str) -> &[BanWindow] {
        self.tables
            .ban_seasons
            .resolve(species)
            .map(|hit| hit.value.windows.as_slice())
            .unwrap_or_default()
    }

    fn season_violation(&self, species: &str, today: NaiveDate) -> Option<Violation> {
        let hit = self.tables.ban_seasons.resolve(species)?;
        let window = hit.value.active_on(today)?;
        Some(Violation::BanSeason {
            species: hit.species.to_owned(),
            window: *window,
        })
    }

    #[expect(
        clippy::float_arithmetic,
        reason = "weights are compared in grams against the table threshold"
    )]
    fn size_violation(
        &self,
        species: &str,
        length: Option<Measurement>,
        weight: Option<Measurement>,
    ) -> Option<Violation> {
        let hit = self.tables.size_limits.resolve(species)?;
        match *hit.value {
            SizeLimit::MinLengthCm(limit_cm) => {
                let measured = length?.value();
                (measured <= limit_cm).then(|| Violation::UndersizedLength {
                    species: hit.species.to_owned(),
                    limit_cm,
                })
            }
            SizeLimit::MinWeightG(limit_g) => {
                let grams = weight?.value() * 1000.0;
                (grams < limit_g).then(|| Violation::UnderweightMass {
                    species: hit.species.to_owned(),
                    limit_g,
                })
            }
        }
    }
}
