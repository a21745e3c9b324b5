//! Query execution scenarios.

mod common;

use common::{game, ids};
use vgs_core::{execute, filter_games};
use vgs_model::{FilterSelection, GameField, SortDirection, SorterEntry, SorterList};

#[test]
fn platform_filter_keeps_matching_rows() {
    let dataset = vec![
        game(1, "Wii", "Sports", "2006"),
        game(2, "DS", "Sports", "2006"),
        game(3, "Wii", "Racing", "2008"),
    ];
    let filters = FilterSelection::new().with(GameField::Platform, ["Wii"]);
    let rows = execute(&dataset, &filters, &SorterList::default_sorters());
    assert_eq!(ids(&rows), vec![1, 3]);
}

#[test]
fn empty_platform_set_leaves_only_genre_restriction() {
    let dataset = vec![
        game(1, "Wii", "Sports", "2006"),
        game(2, "DS", "Sports", "2006"),
        game(3, "Wii", "Racing", "2008"),
    ];
    let filters = FilterSelection::new()
        .with(GameField::Platform, Vec::<String>::new())
        .with(GameField::Genre, ["Sports"]);
    let rows = filter_games(&dataset, &filters);
    assert_eq!(ids(&rows), vec![1, 2]);
}

#[test]
fn execution_does_not_reorder_the_source() {
    let dataset = vec![
        game(2, "DS", "Sports", "2007"),
        game(1, "Wii", "Sports", "2006"),
    ];
    let sorters = SorterList::from_entries(vec![SorterEntry::new(
        GameField::Year,
        SortDirection::Ascending,
    )])
    .unwrap();
    let rows = execute(&dataset, &FilterSelection::new(), &sorters);
    assert_eq!(ids(&rows), vec![1, 2]);
    assert_eq!(ids(&dataset), vec![2, 1]);
}

// Sorters reorder the displayed rows on trigger, not just the configuration.

#[test]
fn trigger_applies_sorters_in_priority_order() {
    let dataset = vec![
        game(1, "Wii", "Sports", "2006"),
        game(2, "DS", "Action", "2006"),
        game(3, "PS2", "Action", "2004"),
        game(4, "GB", "Sports", "2004"),
    ];
    let mut sorters = SorterList::default_sorters();
    sorters.set_direction(0, SortDirection::Descending).unwrap();
    sorters.set_direction(1, SortDirection::Ascending).unwrap();
    let rows = execute(&dataset, &FilterSelection::new(), &sorters);
    assert_eq!(ids(&rows), vec![2, 1, 3, 4]);

    // Genre first, then year descending.
    sorters.move_up(1).unwrap();
    let rows = execute(&dataset, &FilterSelection::new(), &sorters);
    assert_eq!(ids(&rows), vec![2, 3, 1, 4]);
}

#[test]
fn unsorted_entries_are_skipped_when_ranking_keys() {
    let dataset = vec![
        game(1, "Wii", "Sports", "2006"),
        game(2, "DS", "Sports", "2006"),
        game(3, "3DS", "Sports", "2006"),
    ];
    let mut sorters = SorterList::default_sorters();
    sorters.set_direction(2, SortDirection::Ascending).unwrap();
    let rows = execute(&dataset, &FilterSelection::new(), &sorters);
    assert_eq!(ids(&rows), vec![3, 2, 1]);
}

#[test]
fn sort_is_stable_for_equal_keys() {
    let dataset = vec![
        game(5, "Wii", "Sports", "2006"),
        game(1, "DS", "Sports", "2006"),
        game(9, "Wii", "Sports", "2006"),
    ];
    let mut sorters = SorterList::default_sorters();
    sorters.set_direction(1, SortDirection::Descending).unwrap();
    let rows = execute(&dataset, &FilterSelection::new(), &sorters);
    assert_eq!(ids(&rows), vec![5, 1, 9]);
}
