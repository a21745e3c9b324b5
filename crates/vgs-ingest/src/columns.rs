//! Header lookup for the sales CSV.

use csv::ByteRecord;

use crate::error::{IngestError, Result};

/// Headers that must be present; any other column is ignored.
pub const REQUIRED_COLUMNS: [&str; 7] = [
    "Rank",
    "Name",
    "Platform",
    "Year",
    "Genre",
    "Publisher",
    "Global_Sales",
];

/// Positions of the required columns within a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnIndex {
    pub rank: usize,
    pub name: usize,
    pub platform: usize,
    pub year: usize,
    pub genre: usize,
    pub publisher: usize,
    pub global_sales: usize,
}

impl ColumnIndex {
    /// Locate every required column by exact (normalized) header name.
    ///
    /// # Errors
    ///
    /// Returns [`IngestError::MissingColumn`] naming the first absent header.
    pub fn from_headers(headers: &ByteRecord, input: &str) -> Result<Self> {
        let names: Vec<String> = headers
            .iter()
            .map(|raw| normalize_header(&String::from_utf8_lossy(raw)))
            .collect();
        let mut positions = [0usize; REQUIRED_COLUMNS.len()];
        for (slot, column) in positions.iter_mut().zip(REQUIRED_COLUMNS) {
            *slot = names
                .iter()
                .position(|name| name == column)
                .ok_or_else(|| IngestError::MissingColumn {
                    column,
                    input: input.to_string(),
                })?;
        }
        let [rank, name, platform, year, genre, publisher, global_sales] = positions;
        Ok(Self {
            rank,
            name,
            platform,
            year,
            genre,
            publisher,
            global_sales,
        })
    }
}

fn normalize_header(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_columns_in_any_order() {
        let headers = ByteRecord::from(vec![
            "Global_Sales",
            "NA_Sales",
            "Publisher",
            "Genre",
            "Year",
            "Platform",
            "Name",
            "Rank",
        ]);
        let index = ColumnIndex::from_headers(&headers, "test").unwrap();
        assert_eq!(index.global_sales, 0);
        assert_eq!(index.publisher, 2);
        assert_eq!(index.rank, 7);
    }

    #[test]
    fn strips_bom_and_whitespace() {
        let headers = ByteRecord::from(vec![
            "\u{feff}Rank",
            " Name ",
            "Platform",
            "Year",
            "Genre",
            "Publisher",
            "Global_Sales",
        ]);
        let index = ColumnIndex::from_headers(&headers, "test").unwrap();
        assert_eq!(index.rank, 0);
        assert_eq!(index.name, 1);
    }

    #[test]
    fn reports_missing_column() {
        let headers = ByteRecord::from(vec!["Rank", "Name", "Platform", "Year", "Genre"]);
        let err = ColumnIndex::from_headers(&headers, "short.csv").unwrap_err();
        assert!(matches!(
            err,
            IngestError::MissingColumn {
                column: "Publisher",
                ..
            }
        ));
    }
}
