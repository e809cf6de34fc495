//! Biometric estimates for the Catchwise marketplace.
//!
//! A [`BiometricEstimator`] turns a measured length into an estimated whole
//! weight through the length-weight law `W = a · L^b` and looks up the share
//! of that weight recovered as fillet. Coefficients and yields live in
//! ordered [`BiometricTables`]; unknown species fall back to
//! [`LengthWeight::DEFAULT`] and [`FilletYield::DEFAULT`].

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod error;
mod estimator;
mod tables;
mod types;

pub use error::TableError;
pub use estimator::BiometricEstimator;
pub use tables::BiometricTables;
pub use types::{FilletYield, LengthWeight};

#[cfg(test)]
mod tests;
