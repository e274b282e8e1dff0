mod cli;
mod logging;

use clap::Parser;
use std::io;
use std::process::ExitCode;

use crate::cli::Cli;

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    logging::init(cli.verbose)?;

    let mut session = cli::build_session(&cli)?;
    let outcome = session.run(&mut io::stdout().lock())?;

    Ok(outcome.exit_code())
}
