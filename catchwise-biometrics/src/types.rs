//! Allometric coefficients and yield ratios.
#![forbid(unsafe_code)]

use serde::{Deserialize, Serialize};

/// Coefficients of the length-weight law `W = a · L^b`.
///
/// `L` is total length in centimetres and `W` is mass in grams.
///
/// # Examples
/// ```
/// use catchwise_biometrics::LengthWeight;
///
/// let cube = LengthWeight::new(0.01, 3.0);
/// assert!((cube.mass_g(10.0) - 10.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LengthWeight {
    /// Scale coefficient.
    pub a: f64,
    /// Allometric exponent.
    pub b: f64,
}

impl LengthWeight {
    /// Coefficients used when a species is not in the table.
    pub const DEFAULT: Self = Self::new(0.01, 3.0);

    /// Coefficients `a` and `b`.
    #[must_use]
    pub const fn new(a: f64, b: f64) -> Self {
        Self { a, b }
    }

    /// Predicted mass in grams for a length in centimetres.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "the length-weight law is a floating-point power law"
    )]
    pub fn mass_g(&self, length_cm: f64) -> f64 {
        self.a * length_cm.powf(self.b)
    }

    /// Whether both coefficients are positive finite numbers.
    #[must_use]
    pub fn is_usable(&self) -> bool {
        [self.a, self.b]
            .iter()
            .all(|value| value.is_finite() && *value > 0.0)
    }
}

impl Default for LengthWeight {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Share of a whole fish's mass recovered as fillet.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FilletYield {
    /// Ratio in `0.0..=1.0`.
    pub ratio: f64,
}

impl FilletYield {
    /// Ratio used when a species is not in the table.
    pub const DEFAULT: Self = Self::new(0.35);

    /// Yield of `ratio`.
    #[must_use]
    pub const fn new(ratio: f64) -> Self {
        Self { ratio }
    }

    /// Whether the ratio lies in `0.0..=1.0`.
    #[must_use]
    pub fn is_usable(&self) -> bool {
        (0.0..=1.0).contains(&self.ratio)
    }
}

impl Default for FilletYield {
    fn default() -> Self {
        Self::DEFAULT
    }
}
