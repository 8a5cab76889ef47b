//! Stable frequency counting
//!
//! A [`FrequencyTable`] counts distinct string values while remembering the
//! order in which each value was first seen. Sorting by count is stable, and
//! both [`FrequencyTable::argmax`] and [`FrequencyTable::mode`] resolve ties in
//! favour of the entry that comes first in the current order.

use rustc_hash::FxHashMap;
use serde::ser::{Serialize, SerializeMap, Serializer};

/// Insertion-ordered value counts
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    entries: Vec<(String, usize)>,
    positions: FxHashMap<String, usize>,
}

impl FrequencyTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one occurrence of `value`
    pub fn count(&mut self, value: &str) {
        if let Some(&position) = self.positions.get(value) {
            self.entries[position].1 += 1;
        } else {
            self.positions.insert(value.to_owned(), self.entries.len());
            self.entries.push((value.to_owned(), 1));
        }
    }

    /// Number of occurrences of `value`, zero if never counted
    #[must_use]
    pub fn get(&self, value: &str) -> usize {
        self.positions
            .get(value)
            .map_or(0, |&position| self.entries[position].1)
    }

    /// Sum of all counts
    #[must_use]
    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, count)| count).sum()
    }

    /// Number of distinct values
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Reorder by descending count; equal counts keep their relative order
    #[must_use]
    pub fn sorted_desc(mut self) -> Self {
        self.entries.sort_by(|a, b| b.1.cmp(&a.1));
        self.positions = self
            .entries
            .iter()
            .enumerate()
            .map(|(position, (value, _))| (value.clone(), position))
            .collect();
        self
    }

    /// The first entry holding the maximum count
    #[must_use]
    pub fn argmax(&self) -> Option<(&str, usize)> {
        self.entries
            .iter()
            .fold(None, |best: Option<&(String, usize)>, entry| match best {
                Some(current) if current.1 >= entry.1 => Some(current),
                _ => Some(entry),
            })
            .map(|(value, count)| (value.as_str(), *count))
    }

    /// Most frequent value, ties going to the first seen
    #[must_use]
    pub fn mode(&self) -> Option<&str> {
        self.argmax().map(|(value, _)| value)
    }

    /// Iterate `(value, count)` pairs in the current order
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.entries
            .iter()
            .map(|(value, count)| (value.as_str(), *count))
    }
}

impl<'a> FromIterator<&'a str> for FrequencyTable {
    fn from_iter<T: IntoIterator<Item = &'a str>>(iter: T) -> Self {
        let mut table = Self::new();
        for value in iter {
            table.count(value);
        }
        table
    }
}

impl Serialize for FrequencyTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (value, count) in &self.entries {
            map.serialize_entry(value, count)?;
        }
        map.end()
    }
}
