//! Weight and fillet estimates from a measured length.

use std::sync::Arc;

use catchwise_core::{Measurement, MeasurementError};

use crate::tables::normalise_scientific;
use crate::{BiometricTables, FilletYield, LengthWeight};

/// Estimates whole-fish weight and fillet yield.
///
/// Weight lookups use the scientific name, lowercased and trimmed, matched
/// exactly. Yield lookups use the common name, trimmed, matched exactly and
/// then by containment in table order. Misses fall back to
/// [`LengthWeight::DEFAULT`] and [`FilletYield::DEFAULT`].
///
/// # Examples
/// ```
/// use catchwise_biometrics::BiometricEstimator;
///
/// let estimator = BiometricEstimator::standard();
///
/// let kg = estimator.estimate_weight(Some("Pagrus major"), 30.0)?;
/// assert!((kg - 0.015 * 30.0_f64.powf(2.95) / 1000.0).abs() < 1e-12);
///
/// assert_eq!(estimator.estimate_yield(Some("프리미엄광어")), 0.48);
/// assert_eq!(estimator.estimate_yield(None), 0.35);
/// # Ok::<(), catchwise_core::MeasurementError>(())
/// ```
#[derive(Debug, Clone)]
pub struct BiometricEstimator {
    tables: Arc<BiometricTables>,
}

impl Default for BiometricEstimator {
    fn default() -> Self {
        Self::standard()
    }
}

impl BiometricEstimator {
    /// Estimator over caller-supplied tables.
    #[must_use]
    pub const fn new(tables: Arc<BiometricTables>) -> Self {
        Self { tables }
    }

    /// Estimator over the built-in tables.
    #[must_use]
    pub fn standard() -> Self {
        Self::new(BiometricTables::standard())
    }

    /// Tables backing this estimator.
    #[must_use]
    pub fn tables(&self) -> &BiometricTables {
        &self.tables
    }

    /// Length-weight coefficients for a scientific name.
    #[must_use]
    pub fn coefficients(&self, scientific_name: Option<&str>) -> LengthWeight {
        let Some(name) = scientific_name else {
            return LengthWeight::DEFAULT;
        };
        let key = normalise_scientific(name);
        if let Some(found) = self.tables.length_weight.get(&key) {
            return *found;
        }
        log::debug!("no length-weight coefficients for {key:?}; using defaults");
        LengthWeight::DEFAULT
    }

    /// Estimated whole weight in kilograms.
    ///
    /// The value is not rounded.
    ///
    /// # Errors
    /// Returns [`MeasurementError`] when `length_cm` is negative or not
    /// finite, or so large that the power law overflows.
    #[expect(
        clippy::float_arithmetic,
        reason = "grams are converted to kilograms"
    )]
    pub fn estimate_weight(
        &self,
        scientific_name: Option<&str>,
        length_cm: f64,
    ) -> Result<f64, MeasurementError> {
        let length = Measurement::length_cm(length_cm)?;
        let grams = self.coefficients(scientific_name).mass_g(length.value());
        if !grams.is_finite() {
            return Err(length.out_of_range());
        }
        Ok(grams / 1000.0)
    }

    /// Fillet yield ratio for a common name.
    #[must_use]
    pub fn estimate_yield(&self, common_name: Option<&str>) -> f64 {
        let term = common_name.map(str::trim).unwrap_or_default();
        self.tables.fillet_yield.resolve(term).map_or_else(
            || {
                log::debug!("no fillet yield for {term:?}; using default");
                FilletYield::DEFAULT.ratio
            },
            |hit| hit.value.ratio,
        )
    }

    /// Estimated fillet weight in kilograms: whole weight times yield.
    ///
    /// # Errors
    /// See [`BiometricEstimator::estimate_weight`].
    #[expect(
        clippy::float_arithmetic,
        reason = "fillet weight is a product of two estimates"
    )]
    pub fn estimate_fillet_weight(
        &self,
        common_name: Option<&str>,
        scientific_name: Option<&str>,
        length_cm: f64,
    ) -> Result<f64, MeasurementError> {
        let whole = self.estimate_weight(scientific_name, length_cm)?;
        Ok(whole * self.estimate_yield(common_name))
    }
}
