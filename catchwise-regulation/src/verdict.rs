//! Outcome of a compliance check.
#![forbid(unsafe_code)]

use std::fmt;

use serde::{Serialize, Serializer};

use crate::BanWindow;

/// The rule a specimen breaks.
///
/// `Display` renders the user-facing message shown by the marketplace.
#[derive(Debug, Clone, PartialEq)]
pub enum Violation {
    /// The species is in a closed season.
    BanSeason {
        /// Table key the name resolved to.
        species: String,
        /// Window containing the checked date.
        window: BanWindow,
    },
    /// The specimen is at or below the minimum length.
    UndersizedLength {
        /// Table key the name resolved to.
        species: String,
        /// Threshold in centimetres.
        limit_cm: f64,
    },
    /// The specimen is below the minimum mass.
    UnderweightMass {
        /// Table key the name resolved to.
        species: String,
        /// Threshold in grams.
        limit_g: f64,
    },
}

impl Violation {
    /// Table key of the rule that fired.
    #[must_use]
    pub fn species(&self) -> &str {
        match self {
            Self::BanSeason { species, .. }
            | Self::UndersizedLength { species, .. }
            | Self::UnderweightMass { species, .. } => species,
        }
    }
}

impl fmt::Display for Violation {
    // Limits print with a trailing ".0" when integral (`35.0cm`), matching the
    // messages users already know.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BanSeason { window, .. } => write!(f, "금지 기간입니다 ({window})"),
            Self::UndersizedLength { limit_cm, .. } => {
                write!(f, "체장 금지 규격 ({limit_cm:?}cm 이하)")
            }
            Self::UnderweightMass { limit_g, .. } => write!(f, "체중 금지 규격 ({limit_g:?}g 이하)"),
        }
    }
}

/// Whether a specimen may be sold, and why not.
///
/// Serialises as `{"forbidden": bool, "reason": string | null}`.
///
/// # Examples
/// ```
/// use catchwise_regulation::Verdict;
///
/// let verdict = Verdict::allowed();
/// assert!(!verdict.forbidden);
/// assert_eq!(
///     serde_json::to_string(&verdict).expect("encode verdict"),
///     r#"{"forbidden":false,"reason":null}"#
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Verdict {
    /// Whether any rule forbids the specimen.
    pub forbidden: bool,
    /// The rule that fired, when forbidden.
    #[serde(serialize_with = "reason_as_message")]
    pub reason: Option<Violation>,
}

impl Verdict {
    /// No rule applies.
    #[must_use]
    pub const fn allowed() -> Self {
        Self {
            forbidden: false,
            reason: None,
        }
    }

    /// `violation` forbids the specimen.
    #[must_use]
    pub const fn forbidden(violation: Violation) -> Self {
        Self {
            forbidden: true,
            reason: Some(violation),
        }
    }

    /// The rendered reason message, if any.
    #[must_use]
    pub fn reason_message(&self) -> Option<String> {
        self.reason.as_ref().map(ToString::to_string)
    }
}

#[expect(
    clippy::ref_option,
    reason = "serde serialize_with passes &Option<T>"
)]
fn reason_as_message<S>(reason: &Option<Violation>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match reason {
        Some(violation) => serializer.collect_str(violation),
        None => serializer.serialize_none(),
    }
}
