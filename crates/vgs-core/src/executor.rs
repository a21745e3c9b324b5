//! Applies the filter and sorter configuration to the loaded dataset.

use std::cmp::Ordering;

use tracing::debug;

use vgs_model::{FilterSelection, Game, SortDirection, SorterList};

/// Produce the rows to display.
///
/// Works on a copy of `dataset`; the canonical rows are never reordered.
/// Filtering keeps a record iff it passes every active field restriction.
/// Sorting is a stable multi-key sort over the active sorter entries, so
/// records equal on every key keep their dataset order.
pub fn execute(dataset: &[Game], filters: &FilterSelection, sorters: &SorterList) -> Vec<Game> {
    debug!(sorters = %sorters, "applying sorter configuration");
    let mut rows = filter_games(dataset, filters);
    sort_games(&mut rows, sorters);
    rows
}

pub fn filter_games(dataset: &[Game], filters: &FilterSelection) -> Vec<Game> {
    if filters.is_unrestricted() {
        return dataset.to_vec();
    }
    dataset
        .iter()
        .filter(|game| filters.matches(game))
        .cloned()
        .collect()
}

/// Stable sort by the active sorters; position 0 is the primary key.
///
/// Unparsable numeric values sort after every valid value in either
/// direction.
pub fn sort_games(rows: &mut [Game], sorters: &SorterList) {
    let keys: Vec<_> = sorters.active_keys().copied().collect();
    if keys.is_empty() {
        return;
    }
    rows.sort_by(|left, right| {
        for entry in &keys {
            let ascending = entry.field.compare(left, right);
            let invalid = entry.field.sort_key(left).is_invalid()
                || entry.field.sort_key(right).is_invalid();
            let ordering = match entry.direction {
                // Invalid values stay last when the order is reversed.
                SortDirection::Descending if !invalid => ascending.reverse(),
                SortDirection::Ascending | SortDirection::Descending | SortDirection::Unsorted => {
                    ascending
                }
            };
            if ordering != Ordering::Equal {
                return ordering;
            }
        }
        Ordering::Equal
    });
}
