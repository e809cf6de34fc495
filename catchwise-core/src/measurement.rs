//! Validation for caller-supplied physical measurements.
//!
//! Lengths and weights arrive from users or vision models. They must be
//! finite and non-negative before any power law or threshold comparison
//! touches them.

use std::fmt;

use thiserror::Error;

/// The physical quantity a measurement describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quantity {
    /// Body length in centimetres.
    LengthCm,
    /// Body mass in kilograms.
    WeightKg,
    /// Market price per kilogram, in the caller's currency.
    UnitPricePerKg,
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LengthCm => f.write_str("length (cm)"),
            Self::WeightKg => f.write_str("weight (kg)"),
            Self::UnitPricePerKg => f.write_str("unit price (per kg)"),
        }
    }
}

/// Errors returned by [`Measurement::new`].
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum MeasurementError {
    /// The value was NaN or infinite.
    #[error("{quantity} must be a finite number, got {value}")]
    NotFinite {
        /// Quantity being validated.
        quantity: Quantity,
        /// Rejected value.
        value: f64,
    },
    /// The value was below zero.
    #[error("{quantity} must not be negative, got {value}")]
    Negative {
        /// Quantity being validated.
        quantity: Quantity,
        /// Rejected value.
        value: f64,
    },
    /// The value was finite but too large for a derived estimate to stay
    /// finite.
    #[error("{quantity} is too large to estimate from, got {value}")]
    OutOfRange {
        /// Quantity being validated.
        quantity: Quantity,
        /// Rejected value.
        value: f64,
    },
}

/// A validated, finite, non-negative measurement.
///
/// # Examples
/// ```
/// use catchwise_core::{Measurement, MeasurementError, Quantity};
///
/// let length = Measurement::new(Quantity::LengthCm, 32.5)?;
/// assert_eq!(length.value(), 32.5);
///
/// assert!(Measurement::new(Quantity::WeightKg, f64::NAN).is_err());
/// # Ok::<(), MeasurementError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurement {
    quantity: Quantity,
    value: f64,
}

impl Measurement {
    /// Validate `value` as a measurement of `quantity`.
    ///
    /// # Errors
    /// Returns [`MeasurementError::NotFinite`] for NaN or infinite input and
    /// [`MeasurementError::Negative`] for values below zero.
    pub fn new(quantity: Quantity, value: f64) -> Result<Self, MeasurementError> {
        if !value.is_finite() {
            return Err(MeasurementError::NotFinite { quantity, value });
        }
        if value < 0.0 {
            return Err(MeasurementError::Negative { quantity, value });
        }
        Ok(Self { quantity, value })
    }

    /// Validate an optional value, passing `None` through untouched.
    ///
    /// # Errors
    /// Propagates [`Measurement::new`] failures for present values.
    pub fn optional(quantity: Quantity, value: Option<f64>) -> Result<Option<Self>, MeasurementError> {
        value.map(|raw| Self::new(quantity, raw)).transpose()
    }

    /// Length in centimetres.
    ///
    /// # Errors
    /// See [`Measurement::new`].
    pub fn length_cm(value: f64) -> Result<Self, MeasurementError> {
        Self::new(Quantity::LengthCm, value)
    }

    /// Weight in kilograms.
    ///
    /// # Errors
    /// See [`Measurement::new`].
    pub fn weight_kg(value: f64) -> Result<Self, MeasurementError> {
        Self::new(Quantity::WeightKg, value)
    }

    /// Market price per kilogram.
    ///
    /// # Errors
    /// See [`Measurement::new`].
    pub fn unit_price_per_kg(value: f64) -> Result<Self, MeasurementError> {
        Self::new(Quantity::UnitPricePerKg, value)
    }

    /// Error reporting that a quantity derived from this measurement left the
    /// finite range.
    #[must_use]
    pub const fn out_of_range(&self) -> MeasurementError {
        MeasurementError::OutOfRange {
            quantity: self.quantity,
            value: self.value,
        }
    }

    /// The measured quantity.
    #[must_use]
    pub const fn quantity(&self) -> Quantity {
        self.quantity
    }

    /// The validated value.
    #[must_use]
    pub const fn value(&self) -> f64 {
        self.value
    }
}
