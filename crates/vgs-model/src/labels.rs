//! Display labels for columns, filter controls and sorter rows.
//!
//! English is the default; Russian keeps the legacy captions.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{GameField, ModelError, SortDirection};

/// Column order of the paginated table.
pub const TABLE_COLUMNS: [GameField; 7] = [
    GameField::Id,
    GameField::Name,
    GameField::Year,
    GameField::Publisher,
    GameField::Platform,
    GameField::Genre,
    GameField::GlobalSales,
];

/// Fields offered in the filter panel.
pub const FILTER_FIELDS: [GameField; 4] = [
    GameField::Publisher,
    GameField::Platform,
    GameField::Genre,
    GameField::Year,
];

/// Sorter rows created at startup, highest priority first.
pub const DEFAULT_SORTER_FIELDS: [GameField; 3] =
    [GameField::Year, GameField::Genre, GameField::Platform];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Ru,
}

impl Locale {
    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Ru => "ru",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Locale {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "en" | "english" => Ok(Locale::En),
            "ru" | "russian" => Ok(Locale::Ru),
            _ => Err(ModelError::UnknownLocale(s.to_string())),
        }
    }
}

/// A field paired with its caption.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldLabel {
    pub field: GameField,
    pub name: &'static str,
}

pub fn column_label(field: GameField, locale: Locale) -> &'static str {
    match (locale, field) {
        (Locale::En, GameField::Id) => "ID",
        (Locale::En, GameField::Name) => "Name",
        (Locale::En, GameField::Year) => "Release Year",
        (Locale::En, GameField::Publisher) => "Publisher",
        (Locale::En, GameField::Platform) => "Platform",
        (Locale::En, GameField::Genre) => "Genre",
        (Locale::En, GameField::GlobalSales) => "Global Sales (millions of units)",
        (Locale::Ru, GameField::Id) => "ID",
        (Locale::Ru, GameField::Name) => "Название",
        (Locale::Ru, GameField::Year) => "Год издания",
        (Locale::Ru, GameField::Publisher) => "Издатель",
        (Locale::Ru, GameField::Platform) => "Платформа",
        (Locale::Ru, GameField::Genre) => "Жанр",
        (Locale::Ru, GameField::GlobalSales) => "Продажи (млн. шт.)",
    }
}

pub fn filter_label(field: GameField, locale: Locale) -> String {
    match locale {
        Locale::En => format!("Filter by {}", field_noun(field, locale)),
        Locale::Ru => format!("Фильтр по {}", field_noun(field, locale)),
    }
}

pub fn sorter_label(field: GameField, locale: Locale) -> String {
    match locale {
        Locale::En => format!("Sort by {}", field_noun(field, locale)),
        Locale::Ru => format!("Сортировка по {}", field_noun(field, locale)),
    }
}

pub fn direction_label(direction: SortDirection, locale: Locale) -> &'static str {
    match (locale, direction) {
        (Locale::En, SortDirection::Ascending) => "ascending",
        (Locale::En, SortDirection::Descending) => "descending",
        (Locale::En, SortDirection::Unsorted) => "unsorted",
        (Locale::Ru, SortDirection::Ascending) => "По возрастанию",
        (Locale::Ru, SortDirection::Descending) => "По убыванию",
        (Locale::Ru, SortDirection::Unsorted) => "Не сортировать",
    }
}

/// Caption of the button that recomputes the displayed rows.
pub fn trigger_label(locale: Locale) -> &'static str {
    match locale {
        Locale::En => "Show",
        Locale::Ru => "Показать",
    }
}

pub fn table_columns(locale: Locale) -> Vec<FieldLabel> {
    TABLE_COLUMNS
        .iter()
        .map(|field| FieldLabel {
            field: *field,
            name: column_label(*field, locale),
        })
        .collect()
}

/// Fixed captions of the terminal panels and prompts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Caption {
    Filter,
    Value,
    Rows,
    Sorter,
    Move,
    Filters,
    Sorters,
    NoFilters,
    FirstPage,
    LastPage,
    HelpHint,
}

pub fn caption(caption: Caption, locale: Locale) -> &'static str {
    match (locale, caption) {
        (Locale::En, Caption::Filter) => "Filter",
        (Locale::En, Caption::Value) => "Value",
        (Locale::En, Caption::Rows) => "Rows",
        (Locale::En, Caption::Sorter) => "Sorter",
        (Locale::En, Caption::Move) => "Move",
        (Locale::En, Caption::Filters) => "Filters",
        (Locale::En, Caption::Sorters) => "Sorters",
        (Locale::En, Caption::NoFilters) => "(none)",
        (Locale::En, Caption::FirstPage) => "Already on the first page.",
        (Locale::En, Caption::LastPage) => "Already on the last page.",
        (Locale::En, Caption::HelpHint) => "Type 'help' for commands.",
        (Locale::Ru, Caption::Filter) => "Фильтр",
        (Locale::Ru, Caption::Value) => "Значение",
        (Locale::Ru, Caption::Rows) => "Строки",
        (Locale::Ru, Caption::Sorter) => "Сортировка",
        (Locale::Ru, Caption::Move) => "Порядок",
        (Locale::Ru, Caption::Filters) => "Фильтры",
        (Locale::Ru, Caption::Sorters) => "Сортировки",
        (Locale::Ru, Caption::NoFilters) => "(нет)",
        (Locale::Ru, Caption::FirstPage) => "Это первая страница.",
        (Locale::Ru, Caption::LastPage) => "Это последняя страница.",
        (Locale::Ru, Caption::HelpHint) => "Введите 'help' для списка команд.",
    }
}

// Dative forms for Russian captions ("по Году").
fn field_noun(field: GameField, locale: Locale) -> &'static str {
    match (locale, field) {
        (Locale::En, GameField::Id) => "ID",
        (Locale::En, GameField::Name) => "Name",
        (Locale::En, GameField::Year) => "Year",
        (Locale::En, GameField::Publisher) => "Publisher",
        (Locale::En, GameField::Platform) => "Platform",
        (Locale::En, GameField::Genre) => "Genre",
        (Locale::En, GameField::GlobalSales) => "Global Sales",
        (Locale::Ru, GameField::Id) => "ID",
        (Locale::Ru, GameField::Name) => "Названию",
        (Locale::Ru, GameField::Year) => "Году",
        (Locale::Ru, GameField::Publisher) => "Издателю",
        (Locale::Ru, GameField::Platform) => "Платформе",
        (Locale::Ru, GameField::Genre) => "Жанру",
        (Locale::Ru, GameField::GlobalSales) => "Продажам",
    }
}
