mod commands;
mod language;
mod ops;
mod reports;

use std::process::ExitCode;

use clap::Parser;

fn main() -> eyre::Result<ExitCode> {
    color_eyre::install()?;
    commands::Cli::parse().run()
}
