mod cli;
mod logger;
mod model;
mod tasks;

use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use log::debug;

use cli::Cli;
use tasks::Settings;

fn main() -> ExitCode {
    let cli = Cli::parse();
    logger::init_logger(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::from(1)
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let settings = Settings::new(cli.keywords.clone(), cli.op.into(), cli.case())?;
    debug!("settings: {settings:?}");

    let users = model::sample_users();
    let products = model::sample_products();

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if cli.runs(1) {
        tasks::manual_matching(&mut out, &users, &settings)?;
    }
    if cli.runs(2) {
        tasks::manual_predicate(&mut out, &users, &settings)?;
    }
    if cli.runs(3) {
        tasks::field_predicates(&mut out, &users, &products, &settings)?;
    }
    if cli.runs(4) {
        tasks::single_search(&mut out, &users, &products, &settings)?;
    }

    out.flush()?;
    Ok(())
}
