mod cli;
mod cmd;
mod error;
mod format;
mod logging;

use clap::Parser;

use cli::{Cli, Command};
use error::CliError;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.quiet, cli.no_color);

    if let Err(e) = run(&cli) {
        eprintln!("{}", e.message());
        std::process::exit(e.exit_code());
    }
}

fn run(cli: &Cli) -> Result<(), CliError> {
    match &cli.command {
        Command::Search {
            graph,
            edges,
            start,
            target,
            strategy,
        } => {
            let req = cmd::search::SearchRequest {
                graph,
                edges,
                start: *start,
                target: *target,
                strategy: *strategy,
            };
            cmd::search::run(&req, &cli.format, cli.verbose)
        }
        Command::Generate { graph } => cmd::generate::run(graph, &cli.format),
        Command::Version => {
            println!("{}", graphwalk_core::version());
            Ok(())
        }
    }
}
