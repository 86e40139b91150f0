//! Error types for revision parsing and resolution.

use std::fmt;

use revlint_repo::RepoError;
use revlint_types::CommitId;
use thiserror::Error;

/// A rule of the revision grammar that an input broke.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SyntaxViolation {
    Colon,
    Slash,
    Space,
    Control,
    LeadingDot,
    DoubleDot,
    LockSuffix,
    EmptyName,
    CaretLevel,
    TildeLevelTooLarge,
    UnexpectedToken,
}

impl fmt::Display for SyntaxViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            SyntaxViolation::Colon => "branch name must not contain a colon",
            SyntaxViolation::Slash => "branch name must not end with a slash",
            SyntaxViolation::Space => "branch name contains a space character",
            SyntaxViolation::Control => "branch name contains a control character",
            SyntaxViolation::LeadingDot => "branch name must not start with a dot",
            SyntaxViolation::DoubleDot => "branch name must not contain a double dot",
            SyntaxViolation::LockSuffix => "branch name cannot end with .lock",
            SyntaxViolation::EmptyName => "branch name must not be empty",
            SyntaxViolation::CaretLevel => "level associated with a caret must be 1 or 2",
            SyntaxViolation::TildeLevelTooLarge => "level associated with a tilde is too large",
            SyntaxViolation::UnexpectedToken => {
                "must be a caret or a tilde, optionally followed by a number"
            }
        };
        f.write_str(message)
    }
}

/// Why walking a reference path stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParentFailure {
    /// The commit has no parent at all.
    NoParents,
    /// The requested parent does not exist or is not in the object store.
    MissingParent,
}

impl fmt::Display for ParentFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParentFailure::NoParents => f.write_str("Can't find reference"),
            ParentFailure::MissingParent => f.write_str("Can't find parent"),
        }
    }
}

/// Errors that can occur while turning revision expressions into commits.
#[derive(Debug, Error)]
pub enum RevisionError {
    /// The expression does not follow the revision grammar.
    #[error("{violation}")]
    InvalidReferenceSyntax {
        input: String,
        violation: SyntaxViolation,
    },

    /// No HEAD, ref or commit id matches the name.
    #[error("Reference \"{name}\" can't be found in git repository")]
    ReferenceNotFound { name: String },

    /// The reference path walks past the available parents.
    #[error("{failure}")]
    ParentNotFound {
        commit: CommitId,
        failure: ParentFailure,
    },

    /// Reading the commit graph failed for a reason other than a missing
    /// object.
    #[error("failure while browsing commit tree: {source}")]
    BrowsingTreeFailure {
        #[source]
        source: RepoError,
    },

    /// The range selects no commit.
    #[error(
        "Can't produce a diff between {from} and {to}, check your range is correct by running \"git log {from}..{to}\" command"
    )]
    NoDiffBetweenReferences { from: String, to: String },

    /// The repository failed while resolving a starting point.
    #[error("{source}")]
    Repository {
        #[from]
        source: RepoError,
    },
}

impl RevisionError {
    pub(crate) fn syntax(input: &str, violation: SyntaxViolation) -> Self {
        RevisionError::InvalidReferenceSyntax {
            input: input.to_string(),
            violation,
        }
    }
}

/// Convenience type alias for revision operations.
pub type RevisionResult<T> = Result<T, RevisionError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn syntax_error_displays_violated_rule() {
        let err = RevisionError::syntax("test.lock", SyntaxViolation::LockSuffix);
        assert_eq!(err.to_string(), "branch name cannot end with .lock");
    }

    #[test]
    fn not_found_message() {
        let err = RevisionError::ReferenceNotFound {
            name: "whatever".into(),
        };
        assert_eq!(
            err.to_string(),
            "Reference \"whatever\" can't be found in git repository"
        );
    }

    #[test]
    fn no_diff_message() {
        let err = RevisionError::NoDiffBetweenReferences {
            from: "test".into(),
            to: "test".into(),
        };
        assert_eq!(
            err.to_string(),
            "Can't produce a diff between test and test, check your range is correct by running \"git log test..test\" command"
        );
    }

    #[test]
    fn parent_failures() {
        let commit = CommitId::from_bytes(b"c");
        let err = RevisionError::ParentNotFound {
            commit,
            failure: ParentFailure::NoParents,
        };
        assert_eq!(err.to_string(), "Can't find reference");
        let err = RevisionError::ParentNotFound {
            commit,
            failure: ParentFailure::MissingParent,
        };
        assert_eq!(err.to_string(), "Can't find parent");
    }

    #[test]
    fn repo_errors_convert() {
        let err: RevisionError = RepoError::Access {
            message: "denied".into(),
        }
        .into();
        assert!(matches!(err, RevisionError::Repository { .. }));
    }
}
