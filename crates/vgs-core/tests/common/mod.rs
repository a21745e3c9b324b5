#![allow(dead_code)]

use vgs_model::Game;

pub fn game(id: i64, platform: &str, genre: &str, year: &str) -> Game {
    Game {
        id: Some(id),
        name: format!("Game {id}"),
        platform: platform.to_string(),
        year: year.to_string(),
        genre: genre.to_string(),
        publisher: "Nintendo".to_string(),
        global_sales: id as f64,
    }
}

pub fn ids(rows: &[Game]) -> Vec<i64> {
    rows.iter().filter_map(|game| game.id).collect()
}
