//! Error types for repository access.

use std::path::PathBuf;

use revlint_types::CommitId;
use thiserror::Error;

/// Errors that can occur while reading a repository.
#[derive(Debug, Error)]
pub enum RepoError {
    /// The object is not present in the object store. In a shallow clone
    /// this is how the history boundary shows up.
    #[error("object not found: {0}")]
    ObjectNotFound(CommitId),

    /// No repository could be discovered from the given path.
    #[error("not a git repository: {}", path.display())]
    NotARepo { path: PathBuf },

    /// The object exists but cannot be read or decoded.
    #[error("corrupt object {id}: {reason}")]
    CorruptObject { id: CommitId, reason: String },

    /// Permission, locking or filesystem failure.
    #[error("repository access error: {message}")]
    Access { message: String },

    /// Any other libgit2 failure.
    #[error("git error: {context}: {message}")]
    Git { context: String, message: String },
}

impl RepoError {
    /// Returns `true` when the error only says that an object is absent.
    ///
    /// History traversals treat this as a dead end rather than a failure.
    pub fn is_missing_object(&self) -> bool {
        matches!(self, RepoError::ObjectNotFound(_))
    }

    /// Translate a libgit2 error raised while reading `context`.
    pub(crate) fn from_git2(err: git2::Error, context: &str) -> Self {
        match err.code() {
            git2::ErrorCode::Locked => RepoError::Access {
                message: format!("repository is locked: {}", err.message()),
            },
            _ if err.class() == git2::ErrorClass::Os => RepoError::Access {
                message: format!("{}: {}", context, err.message()),
            },
            _ => RepoError::Git {
                context: context.to_string(),
                message: err.message().to_string(),
            },
        }
    }
}

/// Convenience type alias for repository operations.
pub type RepoResult<T> = Result<T, RepoError>;
