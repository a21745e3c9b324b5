//! Loading the dataset from disk.

use std::io::Write;

use vgs_ingest::{IngestError, SENTINEL_MISSING, load_games};

fn write_csv(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn sentinel_year_row_is_excluded() {
    let file = write_csv(
        "Rank,Name,Platform,Year,Genre,Publisher,Global_Sales\n\
         1,Wii Sports,Wii,2006,Sports,Nintendo,82.74\n\
         2,Unknown Year,Wii,N/A,Sports,Nintendo,1.5\n",
    );
    let report = load_games(file.path()).unwrap();
    assert_eq!(report.games.len(), 1);
    assert_eq!(report.games[0].id, Some(1));
    assert_eq!(report.dropped_rows, 1);
}

#[test]
fn no_loaded_record_carries_the_sentinel() {
    let file = write_csv(
        "Rank,Name,Platform,Year,Genre,Publisher,Global_Sales\n\
         1,A,Wii,2006,Sports,Nintendo,1\n\
         2,B,DS,N/A,Sports,Nintendo,1\n\
         3,C,DS,2007,Sports,N/A,1\n\
         4,D,PS2,N/A,Racing,N/A,1\n\
         5,E,PS2,2004,Racing,Sony,1\n",
    );
    let report = load_games(file.path()).unwrap();
    assert_eq!(report.games.len(), 2);
    assert!(
        report
            .games
            .iter()
            .all(|game| game.year != SENTINEL_MISSING && game.publisher != SENTINEL_MISSING)
    );
}

#[test]
fn quoted_names_with_commas_survive() {
    let file = write_csv(
        "Rank,Name,Platform,Year,Genre,Publisher,Global_Sales\n\
         9,\"New Super Mario Bros., Deluxe\",Wii,2009,Platform,Nintendo,28.62\n",
    );
    let report = load_games(file.path()).unwrap();
    assert_eq!(report.games[0].name, "New Super Mario Bros., Deluxe");
}

#[test]
fn missing_file_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("vgsales.csv");
    let err = load_games(&path).unwrap_err();
    assert!(matches!(err, IngestError::FileNotFound { .. }));
}
