use anyhow::Result;
use bounded_sim::app;
use bounded_sim::cli::Cli;
use bounded_sim::config::Config;
use bounded_sim::term::TerminalLogger;
use clap::Parser;
use log::debug;
use std::io;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::from_cli(&cli)?;
    TerminalLogger::install(config.log_level)?;
    debug!("{config:?}");

    let mut session = config.session()?;
    app::execute(
        cli.command,
        &mut session,
        io::stdin().lock(),
        io::stdout().lock(),
    )
}
