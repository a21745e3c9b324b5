use serde::{Deserialize, Serialize};

/// One video game sales record.
///
/// `year` is a free-form label taken verbatim from the source. Numeric
/// columns keep whatever the loader could coerce: an unparsable rank becomes
/// `id: None` and an unparsable sales figure becomes `NaN`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Game {
    pub id: Option<i64>,
    pub name: String,
    pub platform: String,
    pub year: String,
    pub genre: String,
    pub publisher: String,
    pub global_sales: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_camel_case_keys() {
        let game = Game {
            id: Some(1),
            name: "Wii Sports".to_string(),
            platform: "Wii".to_string(),
            year: "2006".to_string(),
            genre: "Sports".to_string(),
            publisher: "Nintendo".to_string(),
            global_sales: 82.74,
        };
        let json = serde_json::to_string(&game).expect("serialize game");
        assert!(json.contains("\"globalSales\":82.74"));
    }
}
