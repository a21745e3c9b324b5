//! Query execution and view state for the video game sales browser.
//!
//! # Data flow
//!
//! ```text
//! load_games() -> ViewSession::finish_load()
//!                   |  canonical dataset (fixed for the session)
//!                   v
//!   set_filters() / set_sorters() / apply_sorter_event()   (no effect on rows)
//!                   |
//!                   v
//!              trigger()  -> executor::execute() -> displayed dataset
//!                   |
//!                   v
//!            current_page() -> PageView
//! ```

pub mod error;
pub mod executor;
pub mod options;
pub mod pagination;
pub mod session;
pub mod settings;

pub use error::SettingsError;
pub use executor::{execute, filter_games, sort_games};
pub use options::{FilterOptions, OptionValue, distinct_values, filter_options};
pub use pagination::{DEFAULT_PAGE_SIZE, PageView, page_count, paginate};
pub use session::{LoadState, SorterEvent, ViewSession};
pub use settings::ViewSettings;
