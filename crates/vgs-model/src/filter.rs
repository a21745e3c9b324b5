use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::{Game, GameField};

/// Accepted values per field.
///
/// A field that is absent, or mapped to an empty set, imposes no
/// restriction. Restrictions on different fields compose with AND.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FilterSelection {
    values: BTreeMap<GameField, BTreeSet<String>>,
}

impl FilterSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the accepted set for one field.
    pub fn set<I, S>(&mut self, field: GameField, values: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.values
            .insert(field, values.into_iter().map(Into::into).collect());
    }

    /// Builder form of [`FilterSelection::set`].
    #[must_use]
    pub fn with<I, S>(mut self, field: GameField, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.set(field, values);
        self
    }

    /// Flip one value in or out of a field's accepted set.
    ///
    /// Returns true when the value is accepted afterwards.
    pub fn toggle(&mut self, field: GameField, value: impl Into<String>) -> bool {
        let value = value.into();
        let set = self.values.entry(field).or_default();
        if set.remove(&value) {
            false
        } else {
            set.insert(value);
            true
        }
    }

    pub fn clear_field(&mut self, field: GameField) {
        self.values.remove(&field);
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }

    /// Accepted values for a field; `None` when the field is unrestricted.
    pub fn values(&self, field: GameField) -> Option<&BTreeSet<String>> {
        self.values.get(&field).filter(|set| !set.is_empty())
    }

    pub fn is_selected(&self, field: GameField, value: &str) -> bool {
        self.values
            .get(&field)
            .is_some_and(|set| set.contains(value))
    }

    /// Fields carrying a non-empty restriction, in field order.
    pub fn active_fields(&self) -> impl Iterator<Item = (GameField, &BTreeSet<String>)> {
        self.values
            .iter()
            .filter(|(_, set)| !set.is_empty())
            .map(|(field, set)| (*field, set))
    }

    pub fn is_unrestricted(&self) -> bool {
        self.active_fields().next().is_none()
    }

    /// True when the record passes every active restriction.
    pub fn matches(&self, game: &Game) -> bool {
        self.active_fields()
            .all(|(field, accepted)| accepted.contains(&*field.text_of(game)))
    }
}
