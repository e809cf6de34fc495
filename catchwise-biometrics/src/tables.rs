//! Biometric reference tables and the built-in market species data.

use std::io::Read;
use std::sync::{Arc, LazyLock};

use catchwise_core::{SpeciesEntry, SpeciesTable};
use serde::{Deserialize, Serialize};

use crate::{FilletYield, LengthWeight, TableError};

/// Length-weight coefficients by scientific name and fillet yields by common
/// name.
///
/// Tables load from JSON shaped like
/// `{"length_weight": [{"species": "pagrus major", "a": 0.015, "b": 2.95}],
/// "fillet_yield": [{"species": "참돔", "ratio": 0.38}]}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BiometricTables {
    /// Coefficients keyed by lowercase scientific name.
    pub length_weight: SpeciesTable<LengthWeight>,
    /// Yield ratios keyed by Korean common name, in lookup order.
    pub fillet_yield: SpeciesTable<FilletYield>,
}

static STANDARD: LazyLock<Arc<BiometricTables>> =
    LazyLock::new(|| Arc::new(BiometricTables::built_in()));

impl BiometricTables {
    /// Shared handle to the built-in tables.
    ///
    /// # Examples
    /// ```
    /// use catchwise_biometrics::BiometricTables;
    ///
    /// let tables = BiometricTables::standard();
    /// assert_eq!(tables.length_weight.len(), 13);
    /// assert_eq!(tables.fillet_yield.len(), 16);
    /// ```
    #[must_use]
    pub fn standard() -> Arc<Self> {
        Arc::clone(&STANDARD)
    }

    /// Decode and validate tables from a JSON string.
    ///
    /// # Errors
    /// Returns [`TableError::Parse`] for malformed JSON and any error reported
    /// by [`BiometricTables::validate`].
    pub fn from_json_str(json: &str) -> Result<Self, TableError> {
        let tables: Self = serde_json::from_str(json)?;
        tables.validate()?;
        Ok(tables)
    }

    /// Decode and validate tables from a JSON reader.
    ///
    /// # Errors
    /// See [`BiometricTables::from_json_str`].
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, TableError> {
        let tables: Self = serde_json::from_reader(reader)?;
        tables.validate()?;
        Ok(tables)
    }

    /// Check every entry for usable values.
    ///
    /// # Errors
    /// Returns [`TableError::EmptySpecies`] for blank keys,
    /// [`TableError::UnnormalisedKey`] for scientific names that are not
    /// lowercase and trimmed, [`TableError::InvalidCoefficients`] for
    /// coefficients that are not positive finite numbers and
    /// [`TableError::InvalidRatio`] for yields outside `0.0..=1.0`.
    pub fn validate(&self) -> Result<(), TableError> {
        for (index, entry) in self.length_weight.iter().enumerate() {
            require_species("length_weight", index, &entry.species)?;
            if normalise_scientific(&entry.species) != entry.species {
                return Err(TableError::UnnormalisedKey {
                    species: entry.species.clone(),
                });
            }
            if !entry.value.is_usable() {
                return Err(TableError::InvalidCoefficients {
                    species: entry.species.clone(),
                    a: entry.value.a,
                    b: entry.value.b,
                });
            }
        }
        for (index, entry) in self.fillet_yield.iter().enumerate() {
            require_species("fillet_yield", index, &entry.species)?;
            if !entry.value.is_usable() {
                return Err(TableError::InvalidRatio {
                    species: entry.species.clone(),
                    ratio: entry.value.ratio,
                });
            }
        }
        Ok(())
    }

    fn built_in() -> Self {
        Self {
            length_weight: LENGTH_WEIGHT
                .iter()
                .map(|(species, a, b)| SpeciesEntry::new(*species, LengthWeight::new(*a, *b)))
                .collect(),
            fillet_yield: FILLET_YIELD
                .iter()
                .map(|(species, ratio)| SpeciesEntry::new(*species, FilletYield::new(*ratio)))
                .collect(),
        }
    }
}

/// Lowercase and trim a scientific name into table-key form.
pub(crate) fn normalise_scientific(name: &str) -> String {
    name.to_lowercase().trim().to_owned()
}

fn require_species(table: &'static str, index: usize, species: &str) -> Result<(), TableError> {
    if species.trim().is_empty() {
        return Err(TableError::EmptySpecies { table, index });
    }
    Ok(())
}

const LENGTH_WEIGHT: &[(&str, f64, f64)] = &[
    ("scomber japonicus", 0.005, 3.15),
    ("scomber scombrus", 0.005, 3.15),
    ("paralichthys olivaceus", 0.007, 3.05),
    ("pagrus major", 0.015, 2.95),
    // Hairtail is long and thin.
    ("trichiurus lepturus", 0.0005, 3.4),
    ("engraulis japonicus", 0.006, 3.0),
    ("clupea pallasii", 0.009, 3.1),
    ("gadus macrocephalus", 0.008, 3.05),
    ("theragra chalcogramma", 0.006, 3.0),
    ("sebastes schlegelii", 0.012, 3.0),
    ("konosirus punctatus", 0.01, 3.0),
    ("seriola quinqueradiata", 0.012, 2.95),
    ("lateolabrax japonicus", 0.010, 3.0),
];

const FILLET_YIELD: &[(&str, f64)] = &[
    ("광어", 0.48),
    ("넙치", 0.48),
    ("우럭", 0.30),
    ("조피볼락", 0.30),
    ("참돔", 0.38),
    ("연어", 0.65),
    ("고등어", 0.50),
    ("전어", 0.45),
    ("농어", 0.40),
    ("감성돔", 0.35),
    ("돌돔", 0.35),
    ("방어", 0.45),
    ("숭어", 0.40),
    ("오징어", 0.60),
    ("낙지", 0.85),
    ("문어", 0.80),
];
