//! Commit message linting.
//!
//! Messages are checked against a set of named regular-expression
//! templates, and optionally against a maximum summary length. Messages can
//! come from the command line, from a single commit, or from every commit
//! of a revision range.
//!
//! # Modules
//!
//! - [`config`]: The `.revlint.toml` file: [`Config`]
//! - [`options`]: [`MatchOptions`]
//! - [`matcher`]: Template compilation and whole-message matching
//! - [`matching`]: [`Matching`] and [`MatchError`]
//! - [`query`]: Message, commit and range queries
//! - [`error`]: [`ConfigError`] and [`LintError`]

pub mod config;
pub mod error;
pub mod matcher;
pub mod matching;
pub mod options;
pub mod query;

pub use config::{Config, DEFAULT_CONFIG_FILE};
pub use error::{ConfigError, ConfigResult, LintError, LintResult};
pub use matcher::{summary_length_is_valid, Matcher, MatcherSet};
pub use matching::{MatchError, Matching};
pub use options::{MatchOptions, DEFAULT_SUMMARY_LENGTH};
pub use query::{
    match_commit_query, match_message_query, match_range_query, CommitQuery, MessageQuery,
    RangeQuery,
};
