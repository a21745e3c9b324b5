//! Data model for the video game sales browser.
//!
//! A [`Game`] is one row of the sales dataset after sentinel exclusion and
//! type coercion. [`FilterSelection`] and [`SorterList`] hold the user-edited
//! query configuration that the core executor applies on demand.

pub mod error;
pub mod field;
pub mod filter;
pub mod game;
pub mod labels;
pub mod sorter;

pub use error::{ModelError, Result};
pub use field::{GameField, SortKey};
pub use filter::FilterSelection;
pub use game::Game;
pub use labels::{
    Caption, DEFAULT_SORTER_FIELDS, FILTER_FIELDS, FieldLabel, Locale, TABLE_COLUMNS, caption,
    column_label, direction_label, filter_label, sorter_label, table_columns, trigger_label,
};
pub use sorter::{SortDirection, SorterEntry, SorterList};
