//! Facade crate for the Catchwise marketplace engine.
//!
//! This crate re-exports the core domain types and exposes the route planner,
//! compliance checker and biometric estimator behind feature flags.

#![forbid(unsafe_code)]

pub use catchwise_core::{
    CoordinateSource, Measurement, MeasurementError, Point, PointId, Quantity, RoutePlanner,
    SharedTables, SpeciesEntry, SpeciesMatch, SpeciesTable, Tour,
};

#[cfg(feature = "planner")]
pub use catchwise_planner::{
    MstPlanner, SpanningEdge, SpanningTree, minimum_spanning_tree, plan, plan_points,
};

#[cfg(feature = "regulation")]
pub use catchwise_regulation::{
    BanSchedule, BanWindow, ComplianceChecker, MonthDay, RegulationTables, SizeLimit, Verdict,
    Violation,
};

#[cfg(feature = "regulation")]
pub use catchwise_regulation::TableError as RegulationTableError;

#[cfg(feature = "biometrics")]
pub use catchwise_biometrics::{BiometricEstimator, BiometricTables, FilletYield, LengthWeight};

#[cfg(feature = "biometrics")]
pub use catchwise_biometrics::TableError as BiometricTableError;
