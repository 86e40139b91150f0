use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use revlint_lint::DEFAULT_CONFIG_FILE;

#[derive(Parser)]
#[command(
    name = "revlint",
    about = "Ensure your commit messages are consistent",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Configuration file
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Check messages against the configured templates
    #[command(subcommand)]
    Check(CheckCommand),
    /// Print the version
    Version,
}

#[derive(Subcommand)]
pub enum CheckCommand {
    /// Check a message
    Message(MessageArgs),
    /// Check the message of a commit
    Commit(CommitArgs),
    /// Check the messages of every commit in a range
    Range(RangeArgs),
}

#[derive(Args)]
pub struct MessageArgs {
    pub message: String,
}

#[derive(Args)]
pub struct CommitArgs {
    /// Full 40-character commit id
    pub id: String,
    /// Repository directory, defaults to the current one
    pub path: Option<PathBuf>,
}

#[derive(Args)]
pub struct RangeArgs {
    /// Revision the range starts after (excluded)
    pub from: String,
    /// Revision the range ends at (included)
    pub to: String,
    /// Repository directory, defaults to the current one
    pub path: Option<PathBuf>,
}
