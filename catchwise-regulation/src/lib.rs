//! Catch regulations for the Catchwise marketplace.
//!
//! The crate answers one question: may this specimen be sold today? A
//! [`ComplianceChecker`] resolves a free-form species name against ordered
//! [`RegulationTables`] and applies two kinds of rule:
//! - **Closed seasons**: inclusive [`BanWindow`]s between two month-days,
//!   wrapping over New Year when the start falls after the end.
//! - **Minimum sizes**: a [`SizeLimit`] in centimetres (inclusive) or, for
//!   species regulated by mass, in grams (strict).
//!
//! A season match wins over any size rule. The outcome is a [`Verdict`] whose
//! reason is a typed [`Violation`].
//!
//! # Examples
//!
//! ```
//! use catchwise_regulation::{ComplianceChecker, Violation};
//! use chrono::NaiveDate;
//!
//! let checker = ComplianceChecker::standard();
//! let christmas = NaiveDate::from_ymd_opt(2025, 12, 25).expect("date");
//!
//! let verdict = checker.check("문치가자미", Some(30.0), None, christmas)?;
//! assert!(matches!(verdict.reason, Some(Violation::BanSeason { .. })));
//! assert_eq!(verdict.reason_message().as_deref(), Some("금지 기간입니다 (12-1~1-31)"));
//! # Ok::<(), catchwise_core::MeasurementError>(())
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod checker;
mod error;
mod tables;
mod types;
mod verdict;

pub use checker::ComplianceChecker;
pub use error::TableError;
pub use tables::RegulationTables;
pub use types::{BanSchedule, BanWindow, MonthDay, SizeLimit};
pub use verdict::{Verdict, Violation};
