mod app;
mod cli;
mod config;
mod consts;
mod core;
mod data;
mod error;
mod output;
mod utils;

use std::process::ExitCode;

use clap::Parser;

use cli::Cli;
use config::Config;
use utils::set_debug;

fn main() -> ExitCode {
    let cli = Cli::parse();
    let mode = cli.mode();

    let config = if cli.debug {
        Config::load()
    } else {
        Config::load_quiet()
    };
    let cli = cli.with_config(&config);
    set_debug(cli.debug);

    match app::run(&cli, mode) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
