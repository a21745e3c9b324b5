//! Distinct values offered by the filter panel.
//!
//! Options are always computed from the full loaded dataset, never from the
//! filtered rows, so a restriction on one field does not hide choices on
//! another.

use std::collections::BTreeMap;

use serde::Serialize;

use vgs_model::{Game, GameField};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptionValue {
    pub value: String,
    pub count: usize,
}

/// The choices for one filterable field, sorted by value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterOptions {
    pub field: GameField,
    pub values: Vec<OptionValue>,
}

pub fn distinct_values(dataset: &[Game], field: GameField) -> Vec<OptionValue> {
    let mut counts: BTreeMap<String, usize> = BTreeMap::new();
    for game in dataset {
        *counts.entry(field.text_of(game).into_owned()).or_default() += 1;
    }
    counts
        .into_iter()
        .map(|(value, count)| OptionValue { value, count })
        .collect()
}

pub fn filter_options(dataset: &[Game], fields: &[GameField]) -> Vec<FilterOptions> {
    fields
        .iter()
        .map(|field| FilterOptions {
            field: *field,
            values: distinct_values(dataset, *field),
        })
        .collect()
}
