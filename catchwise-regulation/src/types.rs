//! Calendar windows and size thresholds used by the regulation tables.
#![forbid(unsafe_code)]

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::TableError;

/// Leap year used to validate month-day pairs so that February 29 is legal.
const REFERENCE_LEAP_YEAR: i32 = 2000;

/// A day of the year without a year, written `M-D`.
///
/// Ordering is by month, then day.
///
/// # Examples
/// ```
/// use catchwise_regulation::MonthDay;
///
/// let start: MonthDay = "12-1".parse()?;
/// assert_eq!(start.month(), 12);
/// assert_eq!(start.to_string(), "12-1");
/// assert!("2-30".parse::<MonthDay>().is_err());
/// # Ok::<(), catchwise_regulation::TableError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MonthDay {
    month: u32,
    day: u32,
}

impl MonthDay {
    /// Validate a month and day.
    ///
    /// # Errors
    /// Returns [`TableError::InvalidMonthDay`] when the pair does not exist in
    /// a leap year.
    pub fn new(month: u32, day: u32) -> Result<Self, TableError> {
        if NaiveDate::from_ymd_opt(REFERENCE_LEAP_YEAR, month, day).is_none() {
            return Err(TableError::InvalidMonthDay {
                value: format!("{month}-{day}"),
            });
        }
        Ok(Self { month, day })
    }

    /// Build from parts already known to be valid.
    pub(crate) const fn from_parts(month: u32, day: u32) -> Self {
        Self { month, day }
    }

    /// Month-day of a calendar date.
    #[must_use]
    pub fn of(date: NaiveDate) -> Self {
        Self {
            month: date.month(),
            day: date.day(),
        }
    }

    /// Month, 1 to 12.
    #[must_use]
    pub const fn month(&self) -> u32 {
        self.month
    }

    /// Day of the month.
    #[must_use]
    pub const fn day(&self) -> u32 {
        self.day
    }
}

impl fmt::Display for MonthDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.month, self.day)
    }
}

impl FromStr for MonthDay {
    type Err = TableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || TableError::InvalidMonthDay {
            value: s.to_owned(),
        };
        let (month_text, day_text) = s.trim().split_once('-').ok_or_else(invalid)?;
        let month = month_text.parse().map_err(|_| invalid())?;
        let day = day_text.parse().map_err(|_| invalid())?;
        Self::new(month, day).map_err(|_| invalid())
    }
}

impl TryFrom<String> for MonthDay {
    type Error = TableError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<MonthDay> for String {
    fn from(value: MonthDay) -> Self {
        value.to_string()
    }
}

/// An inclusive closed season between two month-days.
///
/// A window whose start falls after its end wraps over New Year.
///
/// # Examples
/// ```
/// use catchwise_regulation::{BanWindow, MonthDay};
/// use chrono::NaiveDate;
///
/// let winter = BanWindow::new(MonthDay::new(12, 1)?, MonthDay::new(1, 31)?);
/// assert!(winter.wraps_year());
/// assert!(winter.contains(NaiveDate::from_ymd_opt(2025, 1, 15).expect("date")));
/// assert!(!winter.contains(NaiveDate::from_ymd_opt(2025, 6, 1).expect("date")));
/// # Ok::<(), catchwise_regulation::TableError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BanWindow {
    /// First closed day.
    pub start: MonthDay,
    /// Last closed day.
    pub end: MonthDay,
}

impl BanWindow {
    /// Window from `start` to `end`, both inclusive.
    #[must_use]
    pub const fn new(start: MonthDay, end: MonthDay) -> Self {
        Self { start, end }
    }

    /// Whether the window runs from one year into the next.
    #[must_use]
    pub fn wraps_year(&self) -> bool {
        self.start > self.end
    }

    /// Whether `date` falls inside the window.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.contains_month_day(MonthDay::of(date))
    }

    /// Whether `day` falls inside the window.
    #[must_use]
    pub fn contains_month_day(&self, day: MonthDay) -> bool {
        if self.wraps_year() {
            day >= self.start || day <= self.end
        } else {
            self.start <= day && day <= self.end
        }
    }
}

impl fmt::Display for BanWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}~{}", self.start, self.end)
    }
}

/// Closed seasons registered for one species, checked in order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BanSchedule {
    /// Windows in declared order.
    pub windows: Vec<BanWindow>,
}

impl BanSchedule {
    /// Schedule over `windows`.
    #[must_use]
    pub const fn new(windows: Vec<BanWindow>) -> Self {
        Self { windows }
    }

    /// First window containing `date`, if any.
    #[must_use]
    pub fn active_on(&self, date: NaiveDate) -> Option<&BanWindow> {
        self.windows.iter().find(|window| window.contains(date))
    }
}

/// Minimum legal size for a species.
///
/// Most species are measured by body length. A few are only regulated by
/// mass; those carry a gram threshold instead.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SizeLimit {
    /// Specimens at or below this length in centimetres are undersized.
    MinLengthCm(f64),
    /// Specimens strictly below this mass in grams are underweight.
    MinWeightG(f64),
}

impl SizeLimit {
    /// The raw threshold, in the variant's unit.
    #[must_use]
    pub const fn threshold(&self) -> f64 {
        match *self {
            Self::MinLengthCm(value) | Self::MinWeightG(value) => value,
        }
    }
}
