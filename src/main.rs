mod cli;
mod config;
mod convert;
mod jet_cmd;
mod logging;
mod qbo_cmd;
mod report;
mod ssw_cmd;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Ssw(args) => ssw_cmd::run(args),
        Command::Qbo(args) => qbo_cmd::run(args),
        Command::Jet(args) => jet_cmd::run(args),
    }
}
