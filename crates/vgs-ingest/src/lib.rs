//! Loading of the `vgsales.csv` dataset into [`vgs_model::Game`] records.

pub mod columns;
pub mod error;
pub mod reader;

pub use columns::{ColumnIndex, REQUIRED_COLUMNS};
pub use error::{IngestError, Result};
pub use reader::{DEFAULT_DATA_PATH, LoadReport, SENTINEL_MISSING, load_games, read_games};
