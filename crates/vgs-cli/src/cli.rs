//! CLI argument definitions for the sales browser.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use vgs_model::{GameField, Locale, ModelError};

use vgs_cli::query_args::{FilterArg, SortArg};

#[derive(Parser)]
#[command(
    name = "vgsales",
    version,
    about = "Browse video game sales - filter, sort and page through vgsales.csv",
    long_about = "Browse the video game sales dataset in the terminal.\n\n\
                  Rows whose Year or Publisher is N/A are skipped at load time.\n\
                  Filters and sorters are applied when the table is shown."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Dataset to load (overrides the settings file).
    #[arg(long = "data", value_name = "CSV", global = true)]
    pub data: Option<PathBuf>,

    /// TOML settings file (data path, page size, locale, sorter fields).
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Language of table headers and captions.
    #[arg(long = "locale", value_name = "en|ru", value_parser = parse_locale, global = true)]
    pub locale: Option<Locale>,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Apply filters and sorters once and print a page of the table.
    Show(ShowArgs),

    /// List the distinct values available to each filter.
    Options(OptionsArgs),

    /// Interactive session: edit filters and sorters, then `show`.
    Browse(BrowseArgs),
}

#[derive(Parser)]
pub struct ShowArgs {
    /// Keep rows whose FIELD equals VALUE; repeat to accept several values.
    ///
    /// Values for the same field are alternatives; different fields must all match.
    #[arg(long = "filter", short = 'f', value_name = "FIELD=VALUE")]
    pub filters: Vec<FilterArg>,

    /// Sort by FIELD (asc, desc or ns; default asc). Earlier flags take priority.
    #[arg(long = "sort", short = 's', value_name = "FIELD[:DIR]")]
    pub sorts: Vec<SortArg>,

    /// Page to print (1-based; clamped to the last page).
    #[arg(long = "page", short = 'p', default_value_t = 1)]
    pub page: usize,

    /// Rows per page (overrides the settings file).
    #[arg(long = "page-size", value_parser = clap::value_parser!(u16).range(1..))]
    pub page_size: Option<u16>,

    /// Output format.
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: OutputFormatArg,
}

#[derive(Parser)]
pub struct OptionsArgs {
    /// Only list these fields (default: publisher, platform, genre, year).
    #[arg(long = "field", value_name = "FIELD", value_parser = parse_field)]
    pub fields: Vec<GameField>,
}

#[derive(Parser)]
pub struct BrowseArgs {
    /// Rows per page (overrides the settings file).
    #[arg(long = "page-size", value_parser = clap::value_parser!(u16).range(1..))]
    pub page_size: Option<u16>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormatArg {
    Table,
    Json,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

fn parse_field(raw: &str) -> Result<GameField, String> {
    raw.parse().map_err(|error: ModelError| error.to_string())
}

fn parse_locale(raw: &str) -> Result<Locale, String> {
    raw.parse().map_err(|error: ModelError| error.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn locale_flag_uses_model_parser() {
        let cli = Cli::try_parse_from(["vgsales", "--locale", "RU", "options"]).unwrap();
        assert_eq!(cli.locale, Some(Locale::Ru));

        let err = Cli::try_parse_from(["vgsales", "--locale", "de", "options"])
            .err()
            .expect("unknown locale rejected");
        assert!(err.to_string().contains("unknown locale: de"));
    }
}
