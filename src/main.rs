use anyhow::Result;
use clap::Parser;

use fedctl::backend::PlanPrinter;
use fedctl::cli::{Cli, CommandDispatcher};
use fedctl::{config, logging};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = logging::with_bootstrap(cli.verbose, config::Config::load)?;
    logging::init(
        cli.verbose || config.behavior.verbose,
        config.behavior.log_level.as_deref(),
    )?;

    let dispatcher = CommandDispatcher::new(config, Box::new(PlanPrinter::new()));
    dispatcher.dispatch(cli.command)
}
