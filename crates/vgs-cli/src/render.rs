//! Terminal rendering of the filter panel, sorter panel and table page.

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ColumnConstraint, ContentArrangement, Table, Width,
};
use serde::Serialize;

use vgs_core::{FilterOptions, LoadState, PageView};
use vgs_model::{
    Caption, FilterSelection, Game, GameField, Locale, SortDirection, SorterList, caption,
    direction_label, filter_label, sorter_label, table_columns, trigger_label,
};

/// Terminal width the tables are laid out for.
const TABLE_WIDTH: u16 = 140;

pub fn page_table(page: &PageView<'_>, locale: Locale, styled: bool) -> Table {
    let columns = table_columns(locale);
    let mut table = Table::new();
    table.set_header(
        columns
            .iter()
            .map(|column| header_cell(column.name))
            .collect::<Vec<_>>(),
    );
    apply_page_table_style(&mut table, styled);
    for (idx, column) in columns.iter().enumerate() {
        if column.field.is_numeric() {
            align_column(&mut table, idx, CellAlignment::Right);
        }
    }
    for game in page.rows {
        table.add_row(
            columns
                .iter()
                .map(|column| game_cell(game, column.field))
                .collect::<Vec<_>>(),
        );
    }
    table
}

/// "Rows 16-30 of 120 | page 2/8"
pub fn page_footer(page: &PageView<'_>, locale: Locale) -> String {
    match locale {
        Locale::En => format!(
            "Rows {}-{} of {} | page {}/{}",
            page.first_row,
            page.last_row(),
            page.total_rows,
            page.page,
            page.page_count
        ),
        Locale::Ru => format!(
            "Строки {}-{} из {} | страница {}/{}",
            page.first_row,
            page.last_row(),
            page.total_rows,
            page.page,
            page.page_count
        ),
    }
}

/// One row per (field, value) with the value's row count and selection mark.
///
/// `limit` caps the values listed per field; the rest are summarized.
pub fn filter_panel(
    options: &[FilterOptions],
    filters: &FilterSelection,
    locale: Locale,
    limit: Option<usize>,
    styled: bool,
) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell(""),
        header_cell(caption(Caption::Filter, locale)),
        header_cell(caption(Caption::Value, locale)),
        header_cell(caption(Caption::Rows, locale)),
    ]);
    apply_panel_style(&mut table, styled);
    align_column(&mut table, 0, CellAlignment::Center);
    align_column(&mut table, 3, CellAlignment::Right);
    for option in options {
        let caption = filter_label(option.field, locale);
        let shown = limit.unwrap_or(option.values.len());
        for (idx, value) in option.values.iter().take(shown).enumerate() {
            let selected = filters.is_selected(option.field, &value.value);
            table.add_row(vec![
                checkbox_cell(selected),
                if idx == 0 {
                    Cell::new(&caption).add_attribute(Attribute::Bold)
                } else {
                    Cell::new("")
                },
                Cell::new(&value.value),
                dim_cell(value.count),
            ]);
        }
        let hidden = option.values.len().saturating_sub(shown);
        if hidden > 0 {
            table.add_row(vec![
                Cell::new(""),
                Cell::new(""),
                dim_cell(format!("... {hidden} more")),
                Cell::new(""),
            ]);
        }
    }
    table
}

/// Sorter rows with their three-way direction radio group.
pub fn sorter_panel(sorters: &SorterList, locale: Locale, styled: bool) -> Table {
    let directions = [
        SortDirection::Ascending,
        SortDirection::Descending,
        SortDirection::Unsorted,
    ];
    let mut header = vec![
        header_cell("#"),
        header_cell(caption(Caption::Sorter, locale)),
        header_cell(caption(Caption::Move, locale)),
    ];
    header.extend(
        directions
            .iter()
            .map(|direction| header_cell(direction_label(*direction, locale))),
    );
    let mut table = Table::new();
    table.set_header(header);
    apply_panel_style(&mut table, styled);
    for idx in [0, 2, 3, 4, 5] {
        align_column(&mut table, idx, CellAlignment::Center);
    }
    let last = sorters.len().saturating_sub(1);
    for (idx, entry) in sorters.entries().iter().enumerate() {
        let moves = match (idx == 0, idx == last) {
            (true, true) => "",
            (true, false) => "  ↓",
            (false, true) => "↑  ",
            (false, false) => "↑ ↓",
        };
        let mut row = vec![
            Cell::new(idx + 1),
            Cell::new(sorter_label(entry.field, locale)),
            dim_cell(moves),
        ];
        row.extend(
            directions
                .iter()
                .map(|direction| radio_cell(entry.direction == *direction)),
        );
        table.add_row(row);
    }
    table
}

/// Plain-text sorter summary, one numbered line per entry.
pub fn describe_sorters(sorters: &SorterList, locale: Locale) -> String {
    sorters
        .entries()
        .iter()
        .enumerate()
        .map(|(idx, entry)| {
            format!(
                "{}. {}: {}",
                idx + 1,
                sorter_label(entry.field, locale),
                direction_label(entry.direction, locale)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Plain-text filter summary; "(none)" when unrestricted.
pub fn describe_filters(filters: &FilterSelection, locale: Locale) -> String {
    if filters.is_unrestricted() {
        return caption(Caption::NoFilters, locale).to_string();
    }
    filters
        .active_fields()
        .map(|(field, values)| {
            let values: Vec<&str> = values.iter().map(String::as_str).collect();
            format!("{}: {}", filter_label(field, locale), values.join(", "))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn load_status(state: &LoadState, locale: Locale) -> String {
    match (locale, state) {
        (Locale::En, LoadState::Pending) => "Loading dataset...".to_string(),
        (Locale::En, LoadState::Loaded { rows, dropped }) => {
            format!("Loaded {rows} games ({dropped} rows skipped for N/A year or publisher)")
        }
        (Locale::En, LoadState::Failed(message)) => format!("Dataset unavailable: {message}"),
        (Locale::Ru, LoadState::Pending) => "Загрузка данных...".to_string(),
        (Locale::Ru, LoadState::Loaded { rows, dropped }) => {
            format!("Загружено игр: {rows} (пропущено строк с N/A в году или издателе: {dropped})")
        }
        (Locale::Ru, LoadState::Failed(message)) => format!("Данные недоступны: {message}"),
    }
}

/// Caption printed above a freshly triggered table.
pub fn trigger_banner(shown: usize, total: usize, locale: Locale) -> String {
    format!("[{}] {shown} / {total}", trigger_label(locale))
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PageJson<'a> {
    page: usize,
    page_count: usize,
    total_rows: usize,
    rows: &'a [Game],
}

/// # Errors
///
/// Fails only if serialization fails.
pub fn page_json(page: &PageView<'_>) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&PageJson {
        page: page.page,
        page_count: page.page_count,
        total_rows: page.total_rows,
        rows: page.rows,
    })
}

fn game_cell(game: &Game, field: GameField) -> Cell {
    match field {
        GameField::Id => match game.id {
            Some(id) => Cell::new(id),
            None => dim_cell("NaN"),
        },
        GameField::GlobalSales if game.global_sales.is_nan() => dim_cell("NaN"),
        GameField::GlobalSales => Cell::new(format!("{:.2}", game.global_sales)),
        GameField::Name => Cell::new(&game.name).add_attribute(Attribute::Bold),
        GameField::Platform | GameField::Year | GameField::Genre | GameField::Publisher => {
            Cell::new(field.text_of(game))
        }
    }
}

fn apply_page_table_style(table: &mut Table, styled: bool) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(TABLE_WIDTH);
    if !styled {
        table.force_no_tty();
    }
    if table.column_count() >= 7 {
        table.set_constraints(vec![
            ColumnConstraint::LowerBoundary(Width::Fixed(6)),
            ColumnConstraint::UpperBoundary(Width::Percentage(40)),
            ColumnConstraint::LowerBoundary(Width::Fixed(8)),
            ColumnConstraint::UpperBoundary(Width::Percentage(25)),
            ColumnConstraint::LowerBoundary(Width::Fixed(8)),
            ColumnConstraint::LowerBoundary(Width::Fixed(8)),
            ColumnConstraint::LowerBoundary(Width::Fixed(10)),
        ]);
    }
}

fn apply_panel_style(table: &mut Table, styled: bool) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(TABLE_WIDTH);
    if !styled {
        table.force_no_tty();
    }
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn checkbox_cell(checked: bool) -> Cell {
    if checked {
        Cell::new("[x]")
            .fg(Color::Green)
            .add_attribute(Attribute::Bold)
    } else {
        dim_cell("[ ]")
    }
}

fn radio_cell(selected: bool) -> Cell {
    if selected {
        Cell::new("(*)")
            .fg(Color::Green)
            .add_attribute(Attribute::Bold)
    } else {
        dim_cell("( )")
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
