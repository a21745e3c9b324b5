//! State of one browsing session.
//!
//! The session owns the canonical dataset, the rows currently displayed and
//! the user-edited filter and sorter configuration. Edits to the
//! configuration never touch the displayed rows; only [`ViewSession::trigger`]
//! recomputes them.

use std::time::Instant;

use tracing::{info, info_span, warn};

use vgs_ingest::{IngestError, LoadReport};
use vgs_model::{
    FilterSelection, Game, GameField, ModelError, SortDirection, SorterEntry, SorterList,
};

use crate::executor;
use crate::options::{FilterOptions, filter_options};
use crate::pagination::{PageView, paginate};
use crate::settings::ViewSettings;

/// Progress of the one-off dataset load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    /// Load not finished; both datasets are empty.
    Pending,
    Loaded { rows: usize, dropped: usize },
    /// Load failed; both datasets stay empty and the message is shown.
    Failed(String),
}

/// Edit issued by a sorter row, addressed by position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SorterEvent {
    MoveUp(usize),
    MoveDown(usize),
    SetDirection(usize, SortDirection),
}

#[derive(Debug, Clone)]
pub struct ViewSession {
    load_state: LoadState,
    data: Vec<Game>,
    displayed: Vec<Game>,
    filters: FilterSelection,
    sorters: SorterList,
    page: usize,
    page_size: usize,
}

impl ViewSession {
    pub fn new(sorters: SorterList, page_size: usize) -> Self {
        Self {
            load_state: LoadState::Pending,
            data: Vec::new(),
            displayed: Vec::new(),
            filters: FilterSelection::new(),
            sorters,
            page: 1,
            page_size: page_size.max(1),
        }
    }

    /// # Errors
    ///
    /// Fails when the configured sorter fields repeat.
    pub fn from_settings(settings: &ViewSettings) -> Result<Self, ModelError> {
        Ok(Self::new(settings.sorter_list()?, settings.page_size))
    }

    /// Record the outcome of the dataset load.
    ///
    /// On success both the canonical and displayed datasets receive the
    /// loaded rows. On failure both stay empty and the state carries the
    /// error message.
    pub fn finish_load(&mut self, result: Result<LoadReport, IngestError>) {
        match result {
            Ok(report) => {
                self.load_state = LoadState::Loaded {
                    rows: report.games.len(),
                    dropped: report.dropped_rows,
                };
                self.displayed = report.games.clone();
                self.data = report.games;
            }
            Err(error) => {
                warn!(%error, "dataset load failed");
                self.load_state = LoadState::Failed(error.to_string());
                self.data.clear();
                self.displayed.clear();
            }
        }
        self.page = 1;
    }

    pub fn load_state(&self) -> &LoadState {
        &self.load_state
    }

    /// The full dataset as loaded.
    pub fn data(&self) -> &[Game] {
        &self.data
    }

    /// Rows published by the last trigger (or the full dataset after load).
    pub fn displayed(&self) -> &[Game] {
        &self.displayed
    }

    pub fn filters(&self) -> &FilterSelection {
        &self.filters
    }

    /// Replace the filter selection wholesale.
    pub fn set_filters(&mut self, filters: FilterSelection) {
        self.filters = filters;
    }

    pub fn sorters(&self) -> &SorterList {
        &self.sorters
    }

    /// Replace the sorter entries wholesale.
    ///
    /// # Errors
    ///
    /// The entries must be a permutation of the current fields.
    pub fn set_sorters(&mut self, entries: Vec<SorterEntry>) -> Result<(), ModelError> {
        self.sorters.set_entries(entries)
    }

    /// # Errors
    ///
    /// Fails when the event addresses a position that does not exist.
    pub fn apply_sorter_event(&mut self, event: SorterEvent) -> Result<(), ModelError> {
        match event {
            SorterEvent::MoveUp(index) => self.sorters.move_up(index),
            SorterEvent::MoveDown(index) => self.sorters.move_down(index),
            SorterEvent::SetDirection(index, direction) => {
                self.sorters.set_direction(index, direction)
            }
        }
    }

    /// Recompute the displayed rows from the current configuration and go
    /// back to the first page. Returns the number of rows displayed.
    pub fn trigger(&mut self) -> usize {
        let span = info_span!("trigger");
        let _guard = span.enter();
        let start = Instant::now();
        self.displayed = executor::execute(&self.data, &self.filters, &self.sorters);
        self.page = 1;
        info!(
            rows = self.displayed.len(),
            of = self.data.len(),
            active_filters = self.filters.active_fields().count(),
            active_sorters = self.sorters.active_keys().count(),
            duration_ms = start.elapsed().as_millis(),
            "displayed rows recomputed"
        );
        self.displayed.len()
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn current_page(&self) -> PageView<'_> {
        paginate(&self.displayed, self.page_size, self.page)
    }

    /// Jump to a 1-based page, clamped to the available range. Returns the
    /// page actually selected.
    pub fn set_page(&mut self, page: usize) -> usize {
        self.page = paginate(&self.displayed, self.page_size, page).page;
        self.page
    }

    pub fn next_page(&mut self) -> usize {
        self.set_page(self.page + 1)
    }

    pub fn prev_page(&mut self) -> usize {
        self.set_page(self.page.saturating_sub(1))
    }

    /// Filter panel choices, drawn from the full dataset.
    pub fn filter_options(&self, fields: &[GameField]) -> Vec<FilterOptions> {
        filter_options(&self.data, fields)
    }
}

impl Default for ViewSession {
    fn default() -> Self {
        Self::new(SorterList::default_sorters(), crate::DEFAULT_PAGE_SIZE)
    }
}
