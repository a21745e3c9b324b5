use std::io;

use anyhow::{Context, Result, bail};
use tracing::{debug, info_span};

use vgs_cli::browse::run_browse;
use vgs_cli::query_args::{build_filters, build_sorters};
use vgs_cli::render::{
    describe_filters, describe_sorters, filter_panel, load_status, page_footer, page_json,
    page_table, trigger_banner,
};
use vgs_core::{LoadState, ViewSession, ViewSettings};
use vgs_ingest::load_games;
use vgs_model::{Caption, FILTER_FIELDS, SorterList, caption};

use crate::cli::{BrowseArgs, Cli, OptionsArgs, OutputFormatArg, ShowArgs};

/// Built-in defaults, then the settings file, then command-line overrides.
pub fn resolve_settings(cli: &Cli) -> Result<ViewSettings> {
    let mut settings = match &cli.config {
        Some(path) => ViewSettings::load(path)
            .with_context(|| format!("load settings: {}", path.display()))?,
        None => ViewSettings::default(),
    };
    if let Some(path) = &cli.data {
        settings.data_path = path.clone();
    }
    if let Some(locale) = cli.locale {
        settings.locale = locale;
    }
    debug!(?settings, "resolved settings");
    Ok(settings)
}

pub fn run_show(args: &ShowArgs, settings: &ViewSettings, styled: bool) -> Result<()> {
    let configured = settings.sorter_list().context("configured sorters")?;
    let sorters = build_sorters(&configured, &args.sorts).context("--sort")?;
    let page_size = args.page_size.map_or(settings.page_size, usize::from);
    let mut session = open_session(sorters, page_size, settings)?;
    session.set_filters(build_filters(&args.filters));
    let shown = session.trigger();
    session.set_page(args.page);
    let page = session.current_page();

    match args.format {
        OutputFormatArg::Json => {
            println!("{}", page_json(&page).context("serialize page")?);
        }
        OutputFormatArg::Table => {
            let locale = settings.locale;
            println!("{}", load_status(session.load_state(), locale));
            println!(
                "{}:\n{}",
                caption(Caption::Filters, locale),
                describe_filters(session.filters(), locale)
            );
            println!(
                "{}:\n{}",
                caption(Caption::Sorters, locale),
                describe_sorters(session.sorters(), locale)
            );
            println!("{}", trigger_banner(shown, session.data().len(), locale));
            println!("{}", page_table(&page, locale, styled));
            println!("{}", page_footer(&page, locale));
        }
    }
    Ok(())
}

pub fn run_options(args: &OptionsArgs, settings: &ViewSettings, styled: bool) -> Result<()> {
    let configured = settings.sorter_list().context("configured sorters")?;
    let session = open_session(configured, settings.page_size, settings)?;
    let fields = if args.fields.is_empty() {
        FILTER_FIELDS.to_vec()
    } else {
        args.fields.clone()
    };
    let options = session.filter_options(&fields);
    println!(
        "{}",
        filter_panel(&options, session.filters(), settings.locale, None, styled)
    );
    Ok(())
}

/// Unlike `show`, a failed load does not end the session; the failure is
/// printed and the (empty) table stays browsable.
pub fn run_browse_session(
    args: &BrowseArgs,
    settings: &ViewSettings,
    styled: bool,
) -> Result<()> {
    let sorters = settings.sorter_list().context("configured sorters")?;
    let page_size = args.page_size.map_or(settings.page_size, usize::from);
    let mut session = ViewSession::new(sorters, page_size);
    load_into(&mut session, settings);
    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    run_browse(&mut session, settings.locale, styled, stdin.lock(), &mut stdout)
}

fn open_session(
    sorters: SorterList,
    page_size: usize,
    settings: &ViewSettings,
) -> Result<ViewSession> {
    let mut session = ViewSession::new(sorters, page_size);
    load_into(&mut session, settings);
    if let LoadState::Failed(message) = session.load_state() {
        bail!("{message}");
    }
    Ok(session)
}

fn load_into(session: &mut ViewSession, settings: &ViewSettings) {
    let span = info_span!("dataset", path = %settings.data_path.display());
    let _guard = span.enter();
    session.finish_load(load_games(&settings.data_path));
}
