//! Regulation reference tables and the built-in Korean catch rules.

use std::io::Read;
use std::sync::{Arc, LazyLock};

use catchwise_core::{SpeciesEntry, SpeciesTable};
use serde::{Deserialize, Serialize};

use crate::{BanSchedule, BanWindow, MonthDay, SizeLimit, TableError};

/// Closed seasons and minimum sizes, each an ordered species table.
///
/// Tables load from JSON shaped like
/// `{"ban_seasons": [{"species": "대구", "windows": [{"start": "1-16",
/// "end": "2-15"}]}], "size_limits": [{"species": "대구", "min_length_cm":
/// 35.0}]}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RegulationTables {
    /// Closed seasons per species.
    pub ban_seasons: SpeciesTable<BanSchedule>,
    /// Minimum legal size per species.
    pub size_limits: SpeciesTable<SizeLimit>,
}

static STANDARD: LazyLock<Arc<RegulationTables>> =
    LazyLock::new(|| Arc::new(RegulationTables::built_in()));

impl RegulationTables {
    /// Shared handle to the built-in tables.
    ///
    /// # Examples
    /// ```
    /// use catchwise_regulation::RegulationTables;
    ///
    /// let tables = RegulationTables::standard();
    /// assert_eq!(tables.ban_seasons.len(), 33);
    /// assert!(tables.validate().is_ok());
    /// ```
    #[must_use]
    pub fn standard() -> Arc<Self> {
        Arc::clone(&STANDARD)
    }

    /// Decode and validate tables from a JSON string.
    ///
    /// # Errors
    /// Returns [`TableError::Parse`] for malformed JSON and any error reported
    /// by [`RegulationTables::validate`].
    pub fn from_json_str(json: &str) -> Result<Self, TableError> {
        let tables: Self = serde_json::from_str(json)?;
        tables.validate()?;
        Ok(tables)
    }

    /// Decode and validate tables from a JSON reader.
    ///
    /// # Errors
    /// See [`RegulationTables::from_json_str`].
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, TableError> {
        let tables: Self = serde_json::from_reader(reader)?;
        tables.validate()?;
        Ok(tables)
    }

    /// Check every entry for usable values.
    ///
    /// # Errors
    /// Returns [`TableError::EmptySpecies`] for blank keys,
    /// [`TableError::NoWindows`] for ban entries without windows,
    /// [`TableError::InvalidMonthDay`] for impossible calendar days and
    /// [`TableError::InvalidLimit`] for limits that are not positive finite
    /// numbers.
    pub fn validate(&self) -> Result<(), TableError> {
        for (index, entry) in self.ban_seasons.iter().enumerate() {
            require_species("ban_seasons", index, &entry.species)?;
            if entry.value.windows.is_empty() {
                return Err(TableError::NoWindows {
                    species: entry.species.clone(),
                });
            }
            for window in &entry.value.windows {
                MonthDay::new(window.start.month(), window.start.day())?;
                MonthDay::new(window.end.month(), window.end.day())?;
            }
        }
        for (index, entry) in self.size_limits.iter().enumerate() {
            require_species("size_limits", index, &entry.species)?;
            let value = entry.value.threshold();
            if !value.is_finite() || value <= 0.0 {
                return Err(TableError::InvalidLimit {
                    species: entry.species.clone(),
                    value,
                });
            }
        }
        Ok(())
    }

    fn built_in() -> Self {
        Self {
            ban_seasons: BAN_SEASONS
                .iter()
                .map(|(species, windows)| {
                    SpeciesEntry::new(*species, BanSchedule::new(windows.to_vec()))
                })
                .collect(),
            size_limits: SIZE_LIMITS
                .iter()
                .map(|(species, limit)| SpeciesEntry::new(*species, *limit))
                .collect(),
        }
    }
}

fn require_species(table: &'static str, index: usize, species: &str) -> Result<(), TableError> {
    if species.trim().is_empty() {
        return Err(TableError::EmptySpecies { table, index });
    }
    Ok(())
}

const fn window(start_month: u32, start_day: u32, end_month: u32, end_day: u32) -> BanWindow {
    BanWindow::new(
        MonthDay::from_parts(start_month, start_day),
        MonthDay::from_parts(end_month, end_day),
    )
}

const fn cm(value: f64) -> SizeLimit {
    SizeLimit::MinLengthCm(value)
}

// 참조기 carries two overlapping windows from different notices; either one
// closes the season.
const BAN_SEASONS: &[(&str, &[BanWindow])] = &[
    ("대구", &[window(1, 16, 2, 15)]),
    ("문치가자미", &[window(12, 1, 1, 31)]),
    ("연어", &[window(10, 1, 11, 30)]),
    ("전어", &[window(5, 1, 7, 15)]),
    ("쥐노래미", &[window(11, 1, 12, 31)]),
    ("참홍어", &[window(6, 1, 7, 15)]),
    ("참조기", &[window(7, 1, 7, 31), window(4, 22, 8, 10)]),
    ("갈치", &[window(7, 1, 7, 31)]),
    ("고등어", &[window(4, 1, 6, 30)]),
    ("말쥐치", &[window(6, 1, 7, 31)]),
    ("옥돔", &[window(7, 21, 8, 20)]),
    ("명태", &[window(1, 1, 12, 31)]),
    ("삼치", &[window(5, 1, 5, 31)]),
    ("감성돔", &[window(5, 1, 5, 31)]),
    ("꽃게", &[window(6, 1, 9, 30)]),
    ("대게", &[window(6, 1, 11, 30)]),
    ("붉은대게", &[window(7, 10, 8, 25)]),
    ("대하", &[window(5, 1, 6, 30)]),
    ("새조개", &[window(6, 16, 9, 30)]),
    ("소라", &[window(6, 1, 8, 31)]),
    ("전복", &[window(9, 1, 10, 31)]),
    ("코끼리조개", &[window(5, 1, 6, 30)]),
    ("키조개", &[window(7, 1, 8, 31)]),
    ("가리비", &[window(3, 1, 6, 30)]),
    ("오분자기", &[window(7, 1, 8, 31)]),
    ("넓미역", &[window(9, 1, 11, 30)]),
    ("우뭇가사리", &[window(11, 1, 3, 31)]),
    ("톳", &[window(10, 1, 1, 31)]),
    ("해삼", &[window(7, 1, 7, 31)]),
    ("살오징어", &[window(4, 1, 5, 31)]),
    ("낙지", &[window(6, 1, 6, 30)]),
    ("주꾸미", &[window(5, 11, 8, 31)]),
    ("참문어", &[window(5, 16, 6, 30)]),
];

// Shellfish limits are shell width or height; 살오징어 is mantle length.
const SIZE_LIMITS: &[(&str, SizeLimit)] = &[
    ("문치가자미", cm(20.0)),
    ("참가자미", cm(20.0)),
    ("감성돔", cm(25.0)),
    ("돌돔", cm(24.0)),
    ("참돔", cm(24.0)),
    ("넙치", cm(35.0)),
    ("농어", cm(30.0)),
    ("대구", cm(35.0)),
    ("도루묵", cm(11.0)),
    ("민어", cm(33.0)),
    ("방어", cm(30.0)),
    ("볼락", cm(15.0)),
    ("붕장어", cm(35.0)),
    ("조피볼락", cm(23.0)),
    ("쥐노래미", cm(20.0)),
    ("참홍어", cm(42.0)),
    ("갈치", cm(18.0)),
    ("고등어", cm(21.0)),
    ("참조기", cm(15.0)),
    ("말쥐치", cm(18.0)),
    ("갯장어", cm(40.0)),
    ("미거지", cm(40.0)),
    ("용가자미", cm(20.0)),
    ("기름가자미", cm(20.0)),
    ("청어", cm(20.0)),
    ("꽃게", cm(6.4)),
    ("대게", cm(9.0)),
    ("소라", cm(5.0)),
    ("마대오분자기", cm(4.0)),
    ("전복", cm(7.0)),
    ("기수재첩", cm(1.5)),
    ("키조개", cm(18.0)),
    ("대문어", SizeLimit::MinWeightG(600.0)),
    ("살오징어", cm(15.0)),
];
