use std::path::PathBuf;

use vgs_model::ModelError;

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("failed to read settings file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse settings file {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("page size must be at least 1")]
    InvalidPageSize,

    #[error("at least one sorter field is required")]
    NoSorters,

    #[error("invalid sorter configuration: {0}")]
    Sorters(#[from] ModelError),
}
