//! Record fields and their natural ordering.

use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{Game, ModelError};

/// A column of the [`Game`] record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GameField {
    Id,
    Name,
    Platform,
    Year,
    Genre,
    Publisher,
    GlobalSales,
}

impl GameField {
    pub const ALL: [GameField; 7] = [
        GameField::Id,
        GameField::Name,
        GameField::Platform,
        GameField::Year,
        GameField::Genre,
        GameField::Publisher,
        GameField::GlobalSales,
    ];

    /// Canonical key, matching the serialized record field name.
    pub fn as_str(&self) -> &'static str {
        match self {
            GameField::Id => "id",
            GameField::Name => "name",
            GameField::Platform => "platform",
            GameField::Year => "year",
            GameField::Genre => "genre",
            GameField::Publisher => "publisher",
            GameField::GlobalSales => "globalSales",
        }
    }

    /// True for columns compared numerically.
    pub fn is_numeric(&self) -> bool {
        matches!(self, GameField::Id | GameField::GlobalSales)
    }

    /// The raw string a filter value is compared against.
    pub fn text_of<'a>(&self, game: &'a Game) -> Cow<'a, str> {
        match self {
            GameField::Id => match game.id {
                Some(id) => Cow::Owned(id.to_string()),
                None => Cow::Borrowed("NaN"),
            },
            GameField::Name => Cow::Borrowed(&game.name),
            GameField::Platform => Cow::Borrowed(&game.platform),
            GameField::Year => Cow::Borrowed(&game.year),
            GameField::Genre => Cow::Borrowed(&game.genre),
            GameField::Publisher => Cow::Borrowed(&game.publisher),
            GameField::GlobalSales => Cow::Owned(game.global_sales.to_string()),
        }
    }

    /// The value used when ordering records by this field.
    pub fn sort_key<'a>(&self, game: &'a Game) -> SortKey<'a> {
        match self {
            GameField::Id => game.id.map_or(SortKey::Invalid, SortKey::Int),
            GameField::GlobalSales if game.global_sales.is_nan() => SortKey::Invalid,
            GameField::GlobalSales => SortKey::Float(game.global_sales),
            GameField::Name => SortKey::Text(&game.name),
            GameField::Platform => SortKey::Text(&game.platform),
            GameField::Year => SortKey::Text(&game.year),
            GameField::Genre => SortKey::Text(&game.genre),
            GameField::Publisher => SortKey::Text(&game.publisher),
        }
    }

    /// Ascending natural order of two records on this field; invalid numeric
    /// values come after every valid one.
    pub fn compare(&self, left: &Game, right: &Game) -> Ordering {
        let a = self.sort_key(left);
        let b = self.sort_key(right);
        match (a.is_invalid(), b.is_invalid()) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            (false, false) => a.natural_cmp(&b).unwrap_or(Ordering::Equal),
        }
    }
}

impl fmt::Display for GameField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GameField {
    type Err = ModelError;

    /// Case-insensitive; accepts camelCase, snake_case and the CSV header names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|ch| *ch != '_' && *ch != '-')
            .collect::<String>()
            .to_lowercase();
        match normalized.as_str() {
            "id" | "rank" => Ok(GameField::Id),
            "name" => Ok(GameField::Name),
            "platform" => Ok(GameField::Platform),
            "year" => Ok(GameField::Year),
            "genre" => Ok(GameField::Genre),
            "publisher" => Ok(GameField::Publisher),
            "globalsales" | "sales" => Ok(GameField::GlobalSales),
            _ => Err(ModelError::UnknownField(s.to_string())),
        }
    }
}

/// Comparable projection of a field value.
///
/// `Invalid` stands for a numeric cell the loader could not parse.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SortKey<'a> {
    Int(i64),
    Float(f64),
    Text(&'a str),
    Invalid,
}

impl SortKey<'_> {
    pub fn is_invalid(&self) -> bool {
        matches!(self, SortKey::Invalid)
    }

    /// Natural ordering between two valid keys of the same field.
    ///
    /// Returns `None` when either key is invalid so callers decide where
    /// unparsable values land.
    pub fn natural_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (SortKey::Int(a), SortKey::Int(b)) => Some(a.cmp(b)),
            (SortKey::Float(a), SortKey::Float(b)) => a.partial_cmp(b),
            (SortKey::Text(a), SortKey::Text(b)) => Some(a.cmp(b)),
            _ => None,
        }
    }
}
