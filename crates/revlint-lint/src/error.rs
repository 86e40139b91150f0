//! Error types for configuration loading and linting.

use std::path::PathBuf;

use revlint_refs::RevisionError;
use thiserror::Error;

/// Errors raised while loading or validating a configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Can't read configuration file \"{}\": {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Can't parse configuration file \"{}\": {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("At least one matcher must be defined")]
    NoMatchers,

    #[error("At least one example must be defined")]
    NoExamples,

    #[error(
        "Regexp \"{pattern}\" identified by \"{name}\" is not a valid regexp, please check the syntax"
    )]
    InvalidMatcher { name: String, pattern: String },
}

/// Errors raised while checking messages.
#[derive(Debug, Error)]
pub enum LintError {
    #[error(
        "Regexp \"{pattern}\" identified by \"{name}\" is not a valid regexp, please check the syntax"
    )]
    InvalidMatcher {
        name: String,
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error(transparent)]
    Revision(#[from] RevisionError),
}

pub type ConfigResult<T> = Result<T, ConfigError>;
pub type LintResult<T> = Result<T, LintError>;
