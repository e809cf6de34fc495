//! Core domain types for the Catchwise engine.
//!
//! The crate holds the vocabulary shared by the planner, regulation and
//! biometrics crates: geolocated merchant [`Point`]s, the visiting [`Tour`],
//! the [`CoordinateSource`] and [`RoutePlanner`] boundaries, the ordered
//! [`SpeciesTable`] used for first-match-wins species lookups, and
//! [`Measurement`] validation for caller-supplied lengths and weights.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod coordinates;
pub mod measurement;
pub mod planner;
pub mod point;
pub mod shared;
pub mod species_table;
pub mod tour;

pub use coordinates::CoordinateSource;
pub use measurement::{Measurement, MeasurementError, Quantity};
pub use planner::RoutePlanner;
pub use point::{Point, PointId};
pub use shared::SharedTables;
pub use species_table::{SpeciesEntry, SpeciesMatch, SpeciesTable};
pub use tour::Tour;

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;
