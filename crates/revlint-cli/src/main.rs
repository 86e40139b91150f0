use std::process::ExitCode;

use clap::Parser;

mod cli;
mod commands;
mod ui;

fn main() -> ExitCode {
    let cli = cli::Cli::parse();

    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    match commands::run_command(cli) {
        Ok(code) => code,
        Err(err) => {
            ui::failure(&err);
            ExitCode::FAILURE
        }
    }
}
