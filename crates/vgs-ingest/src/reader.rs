//! Dataset loader.

use std::borrow::Cow;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::time::Instant;

use csv::{ByteRecord, ReaderBuilder};
use tracing::{debug, info, info_span, warn};

use vgs_model::Game;

use crate::columns::ColumnIndex;
use crate::error::{IngestError, Result};

/// Marker for a missing value; rows carrying it in Year or Publisher are dropped.
pub const SENTINEL_MISSING: &str = "N/A";

/// Location of the dataset relative to the working directory.
pub const DEFAULT_DATA_PATH: &str = "vgsales.csv";

/// Outcome of a load.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadReport {
    /// Records kept, in file order.
    pub games: Vec<Game>,
    /// Data rows seen (excluding the header).
    pub total_rows: usize,
    /// Rows excluded because Year or Publisher was the sentinel.
    pub dropped_rows: usize,
    /// Numeric cells that could not be parsed and were kept as invalid values.
    pub malformed_numeric: usize,
}

/// Load the dataset from a CSV file.
///
/// # Errors
///
/// Fails when the file cannot be opened, its CSV framing is broken, or a
/// required column is missing.
pub fn load_games(path: &Path) -> Result<LoadReport> {
    let file = File::open(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IngestError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IngestError::FileRead {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;
    read_games(file, &path.display().to_string())
}

/// Load the dataset from any byte stream; `input` names it in errors and logs.
///
/// # Errors
///
/// Fails when the CSV framing is broken or a required column is missing.
pub fn read_games<R: Read>(reader: R, input: &str) -> Result<LoadReport> {
    let span = info_span!("load", input = %input);
    let _guard = span.enter();
    let start = Instant::now();

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);
    let headers = reader
        .byte_headers()
        .map_err(|source| csv_error(input, source))?;
    let columns = ColumnIndex::from_headers(headers, input)?;

    let mut report = LoadReport::default();
    for record in reader.byte_records() {
        let record = record.map_err(|source| csv_error(input, source))?;
        report.total_rows += 1;
        if cell(&record, columns.year) == SENTINEL_MISSING
            || cell(&record, columns.publisher) == SENTINEL_MISSING
        {
            report.dropped_rows += 1;
            continue;
        }
        let game = build_game(&record, &columns, &mut report.malformed_numeric);
        report.games.push(game);
    }

    if report.malformed_numeric > 0 {
        warn!(
            malformed = report.malformed_numeric,
            "kept rows with unparsable numeric cells"
        );
    }
    info!(
        rows = report.games.len(),
        total = report.total_rows,
        dropped = report.dropped_rows,
        duration_ms = start.elapsed().as_millis(),
        "dataset loaded"
    );
    Ok(report)
}

/// Cell text with invalid UTF-8 replaced; a missing cell reads as empty.
fn cell(record: &ByteRecord, idx: usize) -> Cow<'_, str> {
    record
        .get(idx)
        .map_or(Cow::Borrowed(""), String::from_utf8_lossy)
}

fn build_game(record: &ByteRecord, columns: &ColumnIndex, malformed: &mut usize) -> Game {
    let text = |idx: usize| cell(record, idx);
    let line = record.position().map_or(0, csv::Position::line);

    let rank = text(columns.rank);
    let id = rank.trim().parse::<i64>().ok();
    if id.is_none() {
        *malformed += 1;
        debug!(line, value = %rank, "unparsable Rank");
    }

    let sales = text(columns.global_sales);
    let global_sales = sales.trim().parse::<f64>().unwrap_or_else(|_| {
        *malformed += 1;
        debug!(line, value = %sales, "unparsable Global_Sales");
        f64::NAN
    });

    Game {
        id,
        name: text(columns.name).into_owned(),
        platform: text(columns.platform).into_owned(),
        year: text(columns.year).into_owned(),
        genre: text(columns.genre).into_owned(),
        publisher: text(columns.publisher).into_owned(),
        global_sales,
    }
}

fn csv_error(input: &str, source: csv::Error) -> IngestError {
    IngestError::Csv {
        input: input.to_string(),
        source,
    }
}
