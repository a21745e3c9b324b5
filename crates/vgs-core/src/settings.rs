//! View settings loaded from an optional TOML file.
//!
//! ```toml
//! data_path = "vgsales.csv"
//! page_size = 15
//! locale = "en"
//! sorters = ["year", "genre", "platform"]
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::info;

use vgs_ingest::DEFAULT_DATA_PATH;
use vgs_model::{DEFAULT_SORTER_FIELDS, GameField, Locale, SorterList};

use crate::error::SettingsError;
use crate::pagination::DEFAULT_PAGE_SIZE;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewSettings {
    /// CSV dataset to load.
    pub data_path: PathBuf,
    /// Rows per table page.
    pub page_size: usize,
    /// Language of table headers and panel captions.
    pub locale: Locale,
    /// Sorter rows, highest priority first.
    pub sorters: Vec<GameField>,
}

impl Default for ViewSettings {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            page_size: DEFAULT_PAGE_SIZE,
            locale: Locale::default(),
            sorters: DEFAULT_SORTER_FIELDS.to_vec(),
        }
    }
}

impl ViewSettings {
    /// Read and validate a settings file.
    ///
    /// # Errors
    ///
    /// Returns an error when the file cannot be read or parsed, or when the
    /// values fail [`ViewSettings::validate`].
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let content = fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let settings: Self = toml::from_str(&content).map_err(|source| SettingsError::Toml {
            path: path.to_path_buf(),
            source,
        })?;
        settings.validate()?;
        info!(path = %path.display(), "loaded settings");
        Ok(settings)
    }

    /// # Errors
    ///
    /// Rejects a zero page size and an empty or duplicated sorter list.
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.page_size == 0 {
            return Err(SettingsError::InvalidPageSize);
        }
        if self.sorters.is_empty() {
            return Err(SettingsError::NoSorters);
        }
        self.sorter_list()?;
        Ok(())
    }

    /// The initial sorter list: one unsorted entry per configured field.
    ///
    /// # Errors
    ///
    /// Fails when a field is listed twice.
    pub fn sorter_list(&self) -> Result<SorterList, vgs_model::ModelError> {
        SorterList::with_fields(self.sorters.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_match_the_page() {
        let settings = ViewSettings::default();
        assert_eq!(settings.data_path, PathBuf::from("vgsales.csv"));
        assert_eq!(settings.page_size, 15);
        assert_eq!(settings.locale, Locale::En);
        assert_eq!(
            settings.sorter_list().unwrap(),
            SorterList::default_sorters()
        );
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "page_size = 25\nlocale = \"ru\"").unwrap();
        let settings = ViewSettings::load(file.path()).unwrap();
        assert_eq!(settings.page_size, 25);
        assert_eq!(settings.locale, Locale::Ru);
        assert_eq!(settings.sorters, DEFAULT_SORTER_FIELDS.to_vec());
    }

    #[test]
    fn sorter_fields_use_record_keys() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "sorters = [\"globalSales\", \"year\"]").unwrap();
        let settings = ViewSettings::load(file.path()).unwrap();
        assert_eq!(
            settings.sorters,
            vec![GameField::GlobalSales, GameField::Year]
        );
    }

    #[test]
    fn zero_page_size_is_rejected() {
        let settings = ViewSettings {
            page_size: 0,
            ..ViewSettings::default()
        };
        assert!(matches!(
            settings.validate(),
            Err(SettingsError::InvalidPageSize)
        ));
    }

    #[test]
    fn duplicate_sorters_are_rejected() {
        let settings = ViewSettings {
            sorters: vec![GameField::Year, GameField::Year],
            ..ViewSettings::default()
        };
        assert!(matches!(settings.validate(), Err(SettingsError::Sorters(_))));
    }

    #[test]
    fn empty_sorters_are_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "sorters = []").unwrap();
        let err = ViewSettings::load(file.path()).unwrap_err();
        assert!(matches!(err, SettingsError::NoSorters));
    }

    #[test]
    fn bad_toml_reports_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "page_size = \"many\"").unwrap();
        let err = ViewSettings::load(file.path()).unwrap_err();
        assert!(matches!(err, SettingsError::Toml { .. }));
    }
}
