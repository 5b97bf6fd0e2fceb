use std::io;
use std::process::ExitCode;

use crate::cli::{Cli, Mode, prompt_filter};
use crate::core::{Filter, attribute_providers, select_rows, sort_by_price, summarize_providers};
use crate::data::{Provider, load_providers, resolve_data_path};
use crate::error::AppError;
use crate::output::{no_match_message, render_grouped, render_provider_summary, render_sorted};

/// Filter, optionally sort, and print. Fails only when a real filter
/// matched nothing.
fn list_prices(providers: &[Provider], filter: &Filter, sort: bool, use_color: bool) -> ExitCode {
    let mut rows = select_rows(providers, filter);

    if sort {
        sort_by_price(&mut rows);
        attribute_providers(&mut rows, providers);
        print!("{}", render_sorted(&rows, use_color));
    } else {
        print!("{}", render_grouped(providers, &rows, use_color));
    }

    if rows.is_empty() && !filter.is_empty() {
        println!("{}", no_match_message(filter));
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

fn run_interactive(providers: &[Provider], use_color: bool) -> Result<ExitCode, AppError> {
    print!(
        "{}",
        render_provider_summary(&summarize_providers(providers), use_color)
    );

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    match prompt_filter(&mut stdin.lock(), &mut stdout)? {
        Some(filter) => Ok(list_prices(providers, &Filter::new(&filter), false, use_color)),
        None => {
            println!("No filter provided. Exiting.");
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Load the dataset once and run the selected mode
pub(crate) fn run(cli: &Cli, mode: Mode) -> Result<ExitCode, AppError> {
    let path = resolve_data_path(cli.data.as_deref())?;
    let providers = load_providers(&path, cli.debug)?;
    let use_color = cli.use_color();

    match mode {
        Mode::Listing(filter) => Ok(list_prices(
            &providers,
            &Filter::new(&filter),
            cli.sort,
            use_color,
        )),
        Mode::Interactive => run_interactive(&providers, use_color),
    }
}
