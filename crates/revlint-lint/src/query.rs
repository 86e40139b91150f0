//! Lint entry points: a raw message, a single commit, or a commit range.

use std::collections::BTreeMap;

use revlint_refs::{fetch_commit_by_id, fetch_interval};
use revlint_repo::Repository;
use revlint_types::CommitRecord;
use tracing::debug;

use crate::error::LintResult;
use crate::matcher::MatcherSet;
use crate::matching::{check_message, Matching};
use crate::options::MatchOptions;

/// Check a message given on the command line.
#[derive(Clone, Debug)]
pub struct MessageQuery<'a> {
    pub message: &'a str,
    pub matchers: &'a BTreeMap<String, String>,
    pub options: &'a MatchOptions,
}

/// Check the message of one commit, given by full id.
#[derive(Clone, Debug)]
pub struct CommitQuery<'a> {
    pub id: &'a str,
    pub matchers: &'a BTreeMap<String, String>,
    pub options: &'a MatchOptions,
}

/// Check every commit reachable from `to` but not from `from`.
#[derive(Clone, Debug)]
pub struct RangeQuery<'a> {
    pub from: &'a str,
    pub to: &'a str,
    pub matchers: &'a BTreeMap<String, String>,
    pub options: &'a MatchOptions,
}

/// Lint a raw message. `Ok(None)` means the message is fine.
pub fn match_message_query(query: &MessageQuery<'_>) -> LintResult<Option<Matching>> {
    let matchers = MatcherSet::compile(query.matchers)?;
    Ok(check_message(&matchers, query.options, None, query.message))
}

/// Lint one commit. Merge commits yield `Ok(None)` when excluded.
pub fn match_commit_query<R>(repo: &R, query: &CommitQuery<'_>) -> LintResult<Option<Matching>>
where
    R: Repository + ?Sized,
{
    let matchers = MatcherSet::compile(query.matchers)?;
    let commit = fetch_commit_by_id(repo, query.id)?;
    Ok(check_commit(&matchers, query.options, &commit))
}

/// Lint a range, in the order [`fetch_interval`] returns it.
pub fn match_range_query<R>(repo: &R, query: &RangeQuery<'_>) -> LintResult<Vec<Matching>>
where
    R: Repository + ?Sized,
{
    let matchers = MatcherSet::compile(query.matchers)?;
    let commits = fetch_interval(repo, query.from, query.to)?;
    let matchings: Vec<Matching> = commits
        .iter()
        .filter_map(|commit| check_commit(&matchers, query.options, commit))
        .collect();
    debug!(
        from = query.from,
        to = query.to,
        commits = commits.len(),
        offending = matchings.len(),
        "checked range"
    );
    Ok(matchings)
}

fn check_commit(
    matchers: &MatcherSet,
    options: &MatchOptions,
    commit: &CommitRecord,
) -> Option<Matching> {
    if options.exclude_merge_commits && commit.is_merge() {
        debug!(commit = %commit.id.short_hex(), "skipping merge commit");
        return None;
    }
    check_message(matchers, options, Some(commit.id), &commit.message)
}
