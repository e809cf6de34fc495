//! Ordered species lookup tables.
//!
//! Regulation and biometric reference data are keyed by species names that
//! arrive from an identification service in free form ("프리미엄광어",
//! "전복류"). Lookups first try an exact key match and then scan the keys in
//! declared order, accepting the first key that contains the name or is
//! contained by it. The table is a list, not a map, so the first match is the
//! same on every run.

use std::slice;

/// A species key paired with its reference value.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpeciesEntry<V> {
    /// Species name used as the lookup key.
    pub species: String,
    /// Reference value registered for the species.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub value: V,
}

impl<V> SpeciesEntry<V> {
    /// Pair a species key with a value.
    pub fn new(species: impl Into<String>, value: V) -> Self {
        Self {
            species: species.into(),
            value,
        }
    }
}

/// Result of resolving a name against a [`SpeciesTable`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpeciesMatch<'a, V> {
    /// Key of the matched entry.
    pub species: &'a str,
    /// Value of the matched entry.
    pub value: &'a V,
    /// Whether the key equalled the queried name.
    pub exact: bool,
}

/// Species reference data in declared order.
///
/// # Examples
/// ```
/// use catchwise_core::SpeciesTable;
///
/// let table = SpeciesTable::from_pairs([("광어", 0.48), ("우럭", 0.30)]);
///
/// let hit = table.resolve("프리미엄광어").expect("containment match");
/// assert_eq!(hit.species, "광어");
/// assert_eq!(*hit.value, 0.48);
/// assert!(!hit.exact);
///
/// assert!(table.resolve("연어").is_none());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct SpeciesTable<V> {
    entries: Vec<SpeciesEntry<V>>,
}

impl<V> Default for SpeciesTable<V> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<V> SpeciesTable<V> {
    /// Build a table from entries, keeping their order.
    #[must_use]
    pub const fn new(entries: Vec<SpeciesEntry<V>>) -> Self {
        Self { entries }
    }

    /// Build a table from `(species, value)` pairs, keeping their order.
    pub fn from_pairs<I, K>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
    {
        pairs
            .into_iter()
            .map(|(species, value)| SpeciesEntry::new(species, value))
            .collect()
    }

    /// Append an entry after all existing ones.
    #[must_use]
    pub fn with_entry(mut self, species: impl Into<String>, value: V) -> Self {
        self.entries.push(SpeciesEntry::new(species, value));
        self
    }

    /// Number of entries.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table holds no entries.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over entries in declared order.
    pub fn iter(&self) -> slice::Iter<'_, SpeciesEntry<V>> {
        self.entries.iter()
    }

    /// Look up a key by exact equality only.
    #[must_use]
    pub fn get(&self, species: &str) -> Option<&V> {
        self.entries
            .iter()
            .find(|entry| entry.species == species)
            .map(|entry| &entry.value)
    }

    /// Resolve a free-form species name.
    ///
    /// Tries an exact key match first. Otherwise returns the first entry, in
    /// declared order, whose key contains `name` or is contained in `name`.
    /// Empty names and empty keys never match.
    #[must_use]
    pub fn resolve(&self, name: &str) -> Option<SpeciesMatch<'_, V>> {
        if name.is_empty() {
            return None;
        }
        let exact = self.entries.iter().find(|entry| entry.species == name);
        let (entry, is_exact) = match exact {
            Some(entry) => (entry, true),
            None => (
                self.entries.iter().find(|entry| {
                    !entry.species.is_empty()
                        && (name.contains(entry.species.as_str())
                            || entry.species.contains(name))
                })?,
                false,
            ),
        };
        log::debug!(
            "resolved species {name:?} to {:?} (exact: {is_exact})",
            entry.species
        );
        Some(SpeciesMatch {
            species: entry.species.as_str(),
            value: &entry.value,
            exact: is_exact,
        })
    }
}

impl<V> FromIterator<SpeciesEntry<V>> for SpeciesTable<V> {
    fn from_iter<I: IntoIterator<Item = SpeciesEntry<V>>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a, V> IntoIterator for &'a SpeciesTable<V> {
    type Item = &'a SpeciesEntry<V>;
    type IntoIter = slice::Iter<'a, SpeciesEntry<V>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
