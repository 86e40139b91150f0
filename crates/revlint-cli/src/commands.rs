use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::bail;
use revlint_lint::{
    match_commit_query, match_message_query, match_range_query, CommitQuery, Config, Matching,
    MessageQuery, RangeQuery,
};
use revlint_repo::GitRepository;
use revlint_types::CommitId;
use serde::Serialize;
use tracing::debug;

use crate::cli::*;
use crate::ui;

pub fn run_command(cli: Cli) -> anyhow::Result<ExitCode> {
    match cli.command {
        Command::Check(check) => {
            let config = Config::load(&cli.config)?;
            config.validate()?;
            let matchings = cmd_check(check, &config)?;
            Ok(report(cli.format, &matchings, &config))
        }
        Command::Version => {
            println!("{}", env!("CARGO_PKG_VERSION"));
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn cmd_check(check: CheckCommand, config: &Config) -> anyhow::Result<Vec<Matching>> {
    let matchers = &config.matchers;
    let options = &config.options;

    let matchings = match check {
        CheckCommand::Message(args) => {
            let query = MessageQuery {
                message: &args.message,
                matchers,
                options,
            };
            match_message_query(&query)?.into_iter().collect()
        }
        CheckCommand::Commit(args) => {
            if !CommitId::is_full_hex(&args.id) {
                bail!("argument must be a valid commit id");
            }
            let repo = open_repository(args.path.as_deref())?;
            let query = CommitQuery {
                id: &args.id,
                matchers,
                options,
            };
            match_commit_query(&repo, &query)?.into_iter().collect()
        }
        CheckCommand::Range(args) => {
            let repo = open_repository(args.path.as_deref())?;
            let query = RangeQuery {
                from: &args.from,
                to: &args.to,
                matchers,
                options,
            };
            match_range_query(&repo, &query)?
        }
    };
    Ok(matchings)
}

fn open_repository(path: Option<&Path>) -> anyhow::Result<GitRepository> {
    let dir = repository_dir(path)?;
    debug!(path = %dir.display(), "opening repository");
    Ok(GitRepository::open(&dir)?)
}

fn repository_dir(path: Option<&Path>) -> anyhow::Result<PathBuf> {
    let Some(path) = path else {
        return Ok(std::env::current_dir()?);
    };
    let Ok(metadata) = std::fs::metadata(path) else {
        bail!("Ensure \"{}\" directory exists", path.display());
    };
    if !metadata.is_dir() {
        bail!("\"{}\" must be a directory", path.display());
    }
    Ok(path.to_path_buf())
}

#[derive(Serialize)]
struct JsonReport<'a> {
    ok: bool,
    matchings: &'a [Matching],
    #[serde(skip_serializing_if = "Option::is_none")]
    examples: Option<&'a BTreeMap<String, String>>,
}

fn report(format: OutputFormat, matchings: &[Matching], config: &Config) -> ExitCode {
    let ok = matchings.is_empty();
    match format {
        OutputFormat::Text if ok => ui::success("Everything is ok"),
        OutputFormat::Text => {
            ui::render_matchings(matchings);
            ui::render_examples(&config.examples);
        }
        OutputFormat::Json => {
            let report = JsonReport {
                ok,
                matchings,
                examples: (!ok).then_some(&config.examples),
            };
            match serde_json::to_string_pretty(&report) {
                Ok(json) => println!("{json}"),
                Err(err) => {
                    ui::failure(&err);
                    return ExitCode::FAILURE;
                }
            }
        }
    }

    if ok {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
