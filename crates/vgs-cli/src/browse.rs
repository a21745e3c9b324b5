//! Line-oriented interactive session.
//!
//! Filter and sorter edits only change the configuration; the table is
//! recomputed when the user enters `show`.

use std::io::{BufRead, Write};
use std::str::FromStr;

use anyhow::{Context, Result};

use vgs_core::{SorterEvent, ViewSession};
use vgs_model::{
    Caption, FILTER_FIELDS, GameField, Locale, ModelError, SortDirection, caption, filter_label,
};

use crate::render::{
    describe_filters, filter_panel, load_status, page_footer, page_table, sorter_panel,
    trigger_banner,
};

const HELP_EN: &str = "\
Commands:
  filter <field> <value>   toggle a filter value (publisher, platform, genre, year)
  clear [field]            drop all filters, or those of one field
  sort <n> <asc|desc|ns>   set the direction of sorter n
  up <n> | down <n>        move sorter n up or down in priority
  show                     apply filters and sorters to the table
  page <n> | next | prev   move between table pages
  filters | sorters        print the current configuration
  options <field>          list the values a field can be filtered by
  help | quit";

const HELP_RU: &str = "\
Команды:
  filter <поле> <значение>  включить или выключить значение фильтра (publisher, platform, genre, year)
  clear [поле]              сбросить все фильтры или фильтры одного поля
  sort <n> <asc|desc|ns>    задать направление сортировки n
  up <n> | down <n>         поднять или опустить сортировку n по приоритету
  show                      применить фильтры и сортировки к таблице
  page <n> | next | prev    перейти между страницами таблицы
  filters | sorters         показать текущие настройки
  options <поле>            перечислить значения поля для фильтра
  help | quit";

pub fn help_text(locale: Locale) -> &'static str {
    match locale {
        Locale::En => HELP_EN,
        Locale::Ru => HELP_RU,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowseCommand {
    Filter { field: GameField, value: String },
    Clear(Option<GameField>),
    /// Sorter positions are 0-based here; the prompt uses 1-based numbers.
    Sort { index: usize, direction: SortDirection },
    Up(usize),
    Down(usize),
    Show,
    Page(usize),
    Next,
    Prev,
    Filters,
    Sorters,
    Options(GameField),
    Help,
    Quit,
}

impl FromStr for BrowseCommand {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let line = s.trim();
        let (verb, rest) = split_word(line);
        match verb.to_lowercase().as_str() {
            "filter" | "f" => {
                let (field, value) = split_word(rest);
                if value.is_empty() {
                    return Err("usage: filter <field> <value>".to_string());
                }
                Ok(BrowseCommand::Filter {
                    field: parse_field(field)?,
                    value: value.to_string(),
                })
            }
            "clear" => {
                if rest.is_empty() {
                    Ok(BrowseCommand::Clear(None))
                } else {
                    Ok(BrowseCommand::Clear(Some(parse_field(rest)?)))
                }
            }
            "sort" => {
                let (position, direction) = split_word(rest);
                Ok(BrowseCommand::Sort {
                    index: parse_position(position)?,
                    direction: direction
                        .parse::<SortDirection>()
                        .map_err(|e| e.to_string())?,
                })
            }
            "up" => Ok(BrowseCommand::Up(parse_position(rest)?)),
            "down" => Ok(BrowseCommand::Down(parse_position(rest)?)),
            "show" | "s" => Ok(BrowseCommand::Show),
            "page" => rest
                .parse::<usize>()
                .map(BrowseCommand::Page)
                .map_err(|_| format!("invalid page number: '{rest}'")),
            "next" | "n" => Ok(BrowseCommand::Next),
            "prev" | "p" => Ok(BrowseCommand::Prev),
            "filters" => Ok(BrowseCommand::Filters),
            "sorters" => Ok(BrowseCommand::Sorters),
            "options" => Ok(BrowseCommand::Options(parse_field(rest)?)),
            "help" | "?" => Ok(BrowseCommand::Help),
            "quit" | "exit" | "q" => Ok(BrowseCommand::Quit),
            _ => Err(format!("unknown command: '{verb}' (try help)")),
        }
    }
}

/// Run commands from `input` until `quit` or end of input.
///
/// # Errors
///
/// Fails only when reading input or writing output fails; bad commands are
/// reported on `output` and the session continues.
pub fn run_browse<R: BufRead, W: Write>(
    session: &mut ViewSession,
    locale: Locale,
    styled: bool,
    input: R,
    output: &mut W,
) -> Result<()> {
    writeln!(output, "{}", load_status(session.load_state(), locale))?;
    writeln!(output, "{}", caption(Caption::HelpHint, locale))?;
    for line in input.lines() {
        let line = line.context("read command")?;
        if line.trim().is_empty() {
            continue;
        }
        let command = match line.parse::<BrowseCommand>() {
            Ok(command) => command,
            Err(message) => {
                writeln!(output, "error: {message}")?;
                continue;
            }
        };
        if command == BrowseCommand::Quit {
            break;
        }
        execute_command(session, &command, locale, styled, output)?;
    }
    Ok(())
}

fn execute_command<W: Write>(
    session: &mut ViewSession,
    command: &BrowseCommand,
    locale: Locale,
    styled: bool,
    output: &mut W,
) -> Result<()> {
    match command {
        BrowseCommand::Filter { field, value } => {
            let mut filters = session.filters().clone();
            let selected = filters.toggle(*field, value.clone());
            session.set_filters(filters);
            let mark = if selected { "[x]" } else { "[ ]" };
            writeln!(
                output,
                "{mark} {}: {value} (enter 'show' to apply)",
                filter_label(*field, locale)
            )?;
        }
        BrowseCommand::Clear(field) => {
            let mut filters = session.filters().clone();
            match field {
                Some(field) => filters.clear_field(*field),
                None => filters.clear(),
            }
            session.set_filters(filters);
            writeln!(output, "{}", describe_filters(session.filters(), locale))?;
        }
        BrowseCommand::Sort { index, direction } => {
            let event = SorterEvent::SetDirection(*index, *direction);
            sorter_edit(session, event, locale, styled, output)?;
        }
        BrowseCommand::Up(index) => {
            sorter_edit(session, SorterEvent::MoveUp(*index), locale, styled, output)?;
        }
        BrowseCommand::Down(index) => {
            sorter_edit(session, SorterEvent::MoveDown(*index), locale, styled, output)?;
        }
        BrowseCommand::Show => {
            let shown = session.trigger();
            writeln!(output, "{}", trigger_banner(shown, session.data().len(), locale))?;
            write_page(session, locale, styled, output)?;
        }
        BrowseCommand::Page(page) => {
            session.set_page(*page);
            write_page(session, locale, styled, output)?;
        }
        BrowseCommand::Next => {
            if session.current_page().has_next() {
                session.next_page();
                write_page(session, locale, styled, output)?;
            } else {
                writeln!(output, "{}", caption(Caption::LastPage, locale))?;
            }
        }
        BrowseCommand::Prev => {
            if session.current_page().has_prev() {
                session.prev_page();
                write_page(session, locale, styled, output)?;
            } else {
                writeln!(output, "{}", caption(Caption::FirstPage, locale))?;
            }
        }
        BrowseCommand::Filters => {
            writeln!(output, "{}", describe_filters(session.filters(), locale))?;
        }
        BrowseCommand::Sorters => {
            writeln!(output, "{}", sorter_panel(session.sorters(), locale, styled))?;
        }
        BrowseCommand::Options(field) => {
            let options = session.filter_options(&[*field]);
            writeln!(
                output,
                "{}",
                filter_panel(&options, session.filters(), locale, None, styled)
            )?;
        }
        BrowseCommand::Help => writeln!(output, "{}", help_text(locale))?,
        BrowseCommand::Quit => {}
    }
    Ok(())
}

fn sorter_edit<W: Write>(
    session: &mut ViewSession,
    event: SorterEvent,
    locale: Locale,
    styled: bool,
    output: &mut W,
) -> Result<()> {
    match session.apply_sorter_event(event) {
        Ok(()) => writeln!(output, "{}", sorter_panel(session.sorters(), locale, styled))?,
        // Positions are 1-based at the prompt.
        Err(ModelError::SorterIndexOutOfRange { index, len }) => {
            let error = ModelError::SorterIndexOutOfRange {
                index: index + 1,
                len,
            };
            writeln!(output, "error: {error}")?;
        }
        Err(error) => writeln!(output, "error: {error}")?,
    }
    Ok(())
}

fn write_page<W: Write>(
    session: &ViewSession,
    locale: Locale,
    styled: bool,
    output: &mut W,
) -> Result<()> {
    let page = session.current_page();
    writeln!(output, "{}", page_table(&page, locale, styled))?;
    writeln!(output, "{}", page_footer(&page, locale))?;
    Ok(())
}

fn split_word(text: &str) -> (&str, &str) {
    match text.trim().split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (text.trim(), ""),
    }
}

fn parse_field(raw: &str) -> Result<GameField, String> {
    let field = raw.parse::<GameField>().map_err(|e| e.to_string())?;
    if FILTER_FIELDS.contains(&field) {
        Ok(field)
    } else {
        Err(format!("'{raw}' cannot be filtered (use publisher, platform, genre or year)"))
    }
}

fn parse_position(raw: &str) -> Result<usize, String> {
    match raw.trim().parse::<usize>() {
        Ok(0) => Err("sorter positions start at 1".to_string()),
        Ok(position) => Ok(position - 1),
        Err(_) => Err(format!("invalid sorter position: '{raw}'")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_filter_with_spaces_in_value() {
        assert_eq!(
            "filter publisher Electronic Arts".parse::<BrowseCommand>(),
            Ok(BrowseCommand::Filter {
                field: GameField::Publisher,
                value: "Electronic Arts".to_string(),
            })
        );
    }

    #[test]
    fn sorter_positions_are_one_based() {
        assert_eq!(
            "sort 2 desc".parse::<BrowseCommand>(),
            Ok(BrowseCommand::Sort {
                index: 1,
                direction: SortDirection::Descending,
            })
        );
        assert_eq!("up 1".parse::<BrowseCommand>(), Ok(BrowseCommand::Up(0)));
        assert!("down 0".parse::<BrowseCommand>().is_err());
    }

    #[test]
    fn only_filter_fields_are_accepted() {
        assert!("filter name Tetris".parse::<BrowseCommand>().is_err());
        assert!("options globalSales".parse::<BrowseCommand>().is_err());
        assert_eq!(
            "clear genre".parse::<BrowseCommand>(),
            Ok(BrowseCommand::Clear(Some(GameField::Genre)))
        );
    }

    #[test]
    fn rejects_unknown_verbs_and_directions() {
        assert!("launch".parse::<BrowseCommand>().is_err());
        assert!("sort 1 sideways".parse::<BrowseCommand>().is_err());
        assert!("filter platform".parse::<BrowseCommand>().is_err());
    }
}
