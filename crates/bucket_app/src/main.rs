mod cli;
mod run;
mod summary;
mod wordlist;

use std::process::ExitCode;

use clap::Parser;
use engine_logging::{engine_error, LogDestination};
use log::LevelFilter;

fn main() -> ExitCode {
    let cli = cli::Cli::parse();

    let destination = match &cli.log_file {
        Some(path) => LogDestination::Both(path.clone()),
        None => LogDestination::Terminal,
    };
    engine_logging::initialize(LevelFilter::Info, destination);

    match run::run(&cli) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            engine_error!("{:#}", err);
            ExitCode::FAILURE
        }
    }
}
