//! Priority-ordered sort configuration.
//!
//! Position in a [`SorterList`] is priority: index 0 is the primary key of
//! the multi-key sort. The set of fields is fixed at construction; entries
//! can only be reordered or have their direction changed.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::labels::DEFAULT_SORTER_FIELDS;
use crate::{GameField, ModelError, Result};

/// Sort direction of a single sorter entry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Ascending,
    Descending,
    #[default]
    Unsorted,
}

impl SortDirection {
    /// Short code used by the radio group values (`asc`, `desc`, `ns`).
    pub fn as_code(&self) -> &'static str {
        match self {
            SortDirection::Ascending => "asc",
            SortDirection::Descending => "desc",
            SortDirection::Unsorted => "ns",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Ascending => "ascending",
            SortDirection::Descending => "descending",
            SortDirection::Unsorted => "unsorted",
        }
    }

    pub fn is_active(&self) -> bool {
        !matches!(self, SortDirection::Unsorted)
    }

    /// Cycle ascending -> descending -> unsorted -> ascending.
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Unsorted,
            SortDirection::Unsorted => SortDirection::Ascending,
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortDirection {
    type Err = ModelError;

    /// Convert a raw UI value into a direction.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortDirection::Ascending),
            "desc" | "descending" => Ok(SortDirection::Descending),
            "ns" | "unsorted" | "none" => Ok(SortDirection::Unsorted),
            _ => Err(ModelError::UnknownDirection(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SorterEntry {
    pub field: GameField,
    #[serde(default)]
    pub direction: SortDirection,
}

impl SorterEntry {
    pub fn new(field: GameField, direction: SortDirection) -> Self {
        Self { field, direction }
    }

    pub fn unsorted(field: GameField) -> Self {
        Self::new(field, SortDirection::Unsorted)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SorterList {
    entries: Vec<SorterEntry>,
}

impl Default for SorterList {
    fn default() -> Self {
        Self::default_sorters()
    }
}

impl SorterList {
    /// Year, genre, platform; all unsorted.
    pub fn default_sorters() -> Self {
        Self {
            entries: DEFAULT_SORTER_FIELDS
                .iter()
                .copied()
                .map(SorterEntry::unsorted)
                .collect(),
        }
    }

    /// One unsorted entry per field, in the given priority order.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::DuplicateSorterField`] if a field repeats.
    pub fn with_fields<I>(fields: I) -> Result<Self>
    where
        I: IntoIterator<Item = GameField>,
    {
        Self::from_entries(fields.into_iter().map(SorterEntry::unsorted).collect())
    }

    /// # Errors
    ///
    /// Returns [`ModelError::DuplicateSorterField`] if a field repeats.
    pub fn from_entries(entries: Vec<SorterEntry>) -> Result<Self> {
        for (idx, entry) in entries.iter().enumerate() {
            if entries[..idx].iter().any(|prior| prior.field == entry.field) {
                return Err(ModelError::DuplicateSorterField(entry.field));
            }
        }
        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[SorterEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&SorterEntry> {
        self.entries.get(index)
    }

    /// Replace the whole list.
    ///
    /// # Errors
    ///
    /// The new list must hold exactly the same fields, otherwise
    /// [`ModelError::SorterFieldsChanged`] or
    /// [`ModelError::DuplicateSorterField`] is returned and nothing changes.
    pub fn set_entries(&mut self, entries: Vec<SorterEntry>) -> Result<()> {
        let replacement = Self::from_entries(entries)?;
        let mut expected: Vec<GameField> = self.fields().collect();
        let mut actual: Vec<GameField> = replacement.fields().collect();
        expected.sort();
        actual.sort();
        if expected != actual {
            return Err(ModelError::SorterFieldsChanged {
                expected: join_fields(&expected),
                actual: join_fields(&actual),
            });
        }
        *self = replacement;
        Ok(())
    }

    /// # Errors
    ///
    /// Returns [`ModelError::SorterIndexOutOfRange`] for an unknown position.
    pub fn set_direction(&mut self, index: usize, direction: SortDirection) -> Result<()> {
        let len = self.entries.len();
        let entry = self
            .entries
            .get_mut(index)
            .ok_or(ModelError::SorterIndexOutOfRange { index, len })?;
        entry.direction = direction;
        Ok(())
    }

    /// Swap an entry with its predecessor; a no-op for the first entry.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::SorterIndexOutOfRange`] for an unknown position.
    pub fn move_up(&mut self, index: usize) -> Result<()> {
        self.check_index(index)?;
        if index > 0 {
            self.entries.swap(index - 1, index);
        }
        Ok(())
    }

    /// Swap an entry with its successor; a no-op for the last entry.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::SorterIndexOutOfRange`] for an unknown position.
    pub fn move_down(&mut self, index: usize) -> Result<()> {
        self.check_index(index)?;
        if index + 1 < self.entries.len() {
            self.entries.swap(index, index + 1);
        }
        Ok(())
    }

    pub fn fields(&self) -> impl Iterator<Item = GameField> + '_ {
        self.entries.iter().map(|entry| entry.field)
    }

    /// Entries that take part in sorting, highest priority first.
    pub fn active_keys(&self) -> impl Iterator<Item = &SorterEntry> {
        self.entries
            .iter()
            .filter(|entry| entry.direction.is_active())
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index < self.entries.len() {
            Ok(())
        } else {
            Err(ModelError::SorterIndexOutOfRange {
                index,
                len: self.entries.len(),
            })
        }
    }
}

impl fmt::Display for SorterList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .entries
            .iter()
            .map(|entry| format!("{}:{}", entry.field, entry.direction.as_code()))
            .collect();
        write!(f, "[{}]", parts.join(", "))
    }
}

fn join_fields(fields: &[GameField]) -> String {
    fields
        .iter()
        .map(GameField::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}
