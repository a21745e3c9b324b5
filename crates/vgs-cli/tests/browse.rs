//! Driving the interactive session with scripted input.

use std::io::Cursor;

use vgs_cli::browse::run_browse;
use vgs_core::ViewSession;
use vgs_ingest::{IngestError, read_games};
use vgs_model::Locale;

const DATA: &str = "\
Rank,Name,Platform,Year,Genre,Publisher,Global_Sales
1,Alpha Tennis,Wii,2006,Sports,Nintendo,82.74
2,Brain Puzzler,DS,2005,Puzzle,Nintendo,20.22
3,Comet Racer,Wii,2008,Racing,Nintendo,35.82
4,Dropped Title,Wii,N/A,Racing,Nintendo,1.00
";

fn session() -> ViewSession {
    let mut session = ViewSession::default();
    session.finish_load(read_games(DATA.as_bytes(), "inline"));
    session
}

fn run(session: &mut ViewSession, script: &str) -> String {
    run_in(session, Locale::En, script)
}

fn run_in(session: &mut ViewSession, locale: Locale, script: &str) -> String {
    let mut output = Vec::new();
    run_browse(session, locale, false, Cursor::new(script), &mut output).unwrap();
    String::from_utf8(output).unwrap()
}

#[test]
fn reports_load_summary_first() {
    let mut session = session();
    let output = run(&mut session, "quit\n");
    assert!(output.starts_with("Loaded 3 games (1 rows skipped for N/A year or publisher)"));
}

#[test]
fn filter_then_show_displays_matching_rows() {
    let mut session = session();
    let output = run(&mut session, "filter platform Wii\nsort 1 desc\nshow\n");
    assert!(output.contains("[x] Filter by Platform: Wii (enter 'show' to apply)"));
    assert!(output.contains("[Show] 2 / 3"));
    assert!(output.contains("Comet Racer"));
    assert!(output.contains("Alpha Tennis"));
    assert!(!output.contains("Brain Puzzler"));
    assert!(output.contains("Rows 1-2 of 2 | page 1/1"));

    let names: Vec<&str> = session
        .displayed()
        .iter()
        .map(|game| game.name.as_str())
        .collect();
    assert_eq!(names, vec!["Comet Racer", "Alpha Tennis"]);
}

#[test]
fn edits_without_show_leave_table_untouched() {
    let mut session = session();
    run(&mut session, "filter genre Puzzle\nup 3\nsort 2 asc\n");
    assert_eq!(session.displayed().len(), 3);
    assert_eq!(session.sorters().to_string(), "[year:ns, platform:asc, genre:ns]");
}

#[test]
fn toggling_twice_removes_the_filter() {
    let mut session = session();
    let output = run(&mut session, "filter year 2006\nfilter year 2006\nfilters\n");
    assert!(output.contains("[ ] Filter by Year: 2006"));
    assert!(output.trim_end().ends_with("(none)"));
    assert!(session.filters().is_unrestricted());
}

#[test]
fn bad_commands_are_reported_and_session_continues() {
    let mut session = session();
    let output = run(&mut session, "jump\nsort 9 asc\nshow\n");
    assert!(output.contains("error: unknown command: 'jump'"));
    assert!(output.contains("error: sorter index 9 out of range (3 sorters configured)"));
    assert!(output.contains("[Show] 3 / 3"));
}

#[test]
fn options_list_values_from_the_full_dataset() {
    let mut session = session();
    let output = run(&mut session, "filter platform Wii\nshow\noptions platform\n");
    assert!(output.contains("Filter by Platform"));
    assert!(output.contains("DS"));
}

#[test]
fn failed_load_is_shown_and_table_is_empty() {
    let mut session = ViewSession::default();
    session.finish_load(Err(IngestError::FileNotFound {
        path: "missing/vgsales.csv".into(),
    }));
    let output = run(&mut session, "show\n");
    assert!(output.starts_with("Dataset unavailable: CSV file not found: missing/vgsales.csv"));
    assert!(output.contains("Rows 0-0 of 0 | page 1/1"));
}

#[test]
fn sorter_errors_use_prompt_positions() {
    let mut session = session();
    let output = run(&mut session, "sort 4 asc\nup 5\ndown 3\n");
    assert!(output.contains("error: sorter index 4 out of range (3 sorters configured)"));
    assert!(output.contains("error: sorter index 5 out of range (3 sorters configured)"));
    assert_eq!(session.sorters().to_string(), "[year:ns, genre:ns, platform:ns]");
}

#[test]
fn paging_stops_at_either_end() {
    let mut session = session();
    let output = run(&mut session, "show\nprev\nnext\n");
    assert!(output.contains("Already on the first page."));
    assert!(output.contains("Already on the last page."));
    assert_eq!(session.current_page().page, 1);
}

#[test]
fn russian_session_localizes_prompts() {
    let mut session = session();
    let output = run_in(&mut session, Locale::Ru, "help\nfilters\nsorters\n");
    assert!(output.starts_with("Загружено игр: 3"));
    assert!(output.contains("Введите 'help' для списка команд."));
    assert!(output.contains("Команды:"));
    assert!(output.contains("(нет)"));
    assert!(output.contains("Сортировка по Году"));
    assert!(output.contains("Порядок"));
    assert!(!output.contains("Move"));
}
