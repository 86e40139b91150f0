use std::fmt;

use revlint_types::{summary_of, CommitId};
use serde::{Serialize, Serializer};

use crate::matcher::{summary_length_is_valid, MatcherSet};
use crate::options::MatchOptions;

/// A rule a commit message breaks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MatchError {
    /// No template matches the whole message.
    NoTemplateMatch,
    /// The first line is longer than allowed.
    SummaryTooLong { max: usize },
}

impl fmt::Display for MatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchError::NoTemplateMatch => f.write_str("No template match commit message"),
            MatchError::SummaryTooLong { max } => {
                write!(f, "Commit summary length is greater than {max} characters")
            }
        }
    }
}

impl std::error::Error for MatchError {}

impl Serialize for MatchError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// An offending message and what is wrong with it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Matching {
    /// The commit carrying the message. `None` for a raw message.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<CommitId>,
    pub message: String,
    pub message_error: Option<MatchError>,
    pub summary_error: Option<MatchError>,
}

impl Matching {
    /// Every error carried, message error first.
    pub fn errors(&self) -> impl Iterator<Item = &MatchError> {
        self.message_error.iter().chain(self.summary_error.iter())
    }
}

/// Check one message. Returns `None` when it breaks no rule.
pub(crate) fn check_message(
    matchers: &MatcherSet,
    options: &MatchOptions,
    id: Option<CommitId>,
    message: &str,
) -> Option<Matching> {
    let message_error = match matchers.find_match(message) {
        Some(_) => None,
        None => Some(MatchError::NoTemplateMatch),
    };

    let summary_error = (options.check_summary_length
        && !summary_length_is_valid(summary_of(message), options.summary_length))
    .then_some(MatchError::SummaryTooLong {
        max: options.summary_length,
    });

    if message_error.is_none() && summary_error.is_none() {
        return None;
    }
    Some(Matching {
        id,
        message: message.to_string(),
        message_error,
        summary_error,
    })
}
