//! `--filter` and `--sort` argument values.

use std::str::FromStr;

use vgs_model::{FilterSelection, GameField, ModelError, SortDirection, SorterEntry, SorterList};

/// `FIELD=VALUE`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterArg {
    pub field: GameField,
    pub value: String,
}

impl FromStr for FilterArg {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (field, value) = s
            .split_once('=')
            .ok_or_else(|| format!("expected FIELD=VALUE, got '{s}'"))?;
        let field = field.parse::<GameField>().map_err(|e| e.to_string())?;
        Ok(Self {
            field,
            value: value.to_string(),
        })
    }
}

/// `FIELD` or `FIELD:DIR`; the direction defaults to ascending.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortArg {
    pub field: GameField,
    pub direction: SortDirection,
}

impl FromStr for SortArg {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (field, direction) = match s.split_once(':') {
            Some((field, direction)) => (
                field,
                direction
                    .parse::<SortDirection>()
                    .map_err(|e| e.to_string())?,
            ),
            None => (s, SortDirection::Ascending),
        };
        let field = field.parse::<GameField>().map_err(|e| e.to_string())?;
        Ok(Self { field, direction })
    }
}

/// Group repeated `--filter` flags into one selection.
pub fn build_filters(args: &[FilterArg]) -> FilterSelection {
    let mut filters = FilterSelection::new();
    for arg in args {
        if !filters.is_selected(arg.field, &arg.value) {
            filters.toggle(arg.field, arg.value.clone());
        }
    }
    filters
}

/// Put the `--sort` fields first, in flag order, followed by the remaining
/// configured sorter fields in their configured order.
///
/// A field not present in the configured list is added to it.
///
/// # Errors
///
/// Fails when the same field is passed to `--sort` twice.
pub fn build_sorters(configured: &SorterList, args: &[SortArg]) -> Result<SorterList, ModelError> {
    let mut entries: Vec<SorterEntry> = args
        .iter()
        .map(|arg| SorterEntry::new(arg.field, arg.direction))
        .collect();
    for entry in configured.entries() {
        if !args.iter().any(|arg| arg.field == entry.field) {
            entries.push(*entry);
        }
    }
    SorterList::from_entries(entries)
}
