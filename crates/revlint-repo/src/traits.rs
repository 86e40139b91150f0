//! The [`Repository`] trait defining what revision resolution needs from a
//! repository.
//!
//! Any backend (libgit2, in-memory) implements this trait. It is read-only:
//! nothing in revlint ever writes to a repository.

use revlint_types::{CommitId, CommitRecord};

use crate::error::{RepoError, RepoResult};

/// Read access to a commit graph.
///
/// Implementations are not required to be `Send` or `Sync`: a resolution
/// runs to completion on one thread, and concurrent callers should each
/// open their own handle.
pub trait Repository {
    /// The commit HEAD currently points at.
    ///
    /// Returns `Ok(None)` if HEAD is unborn (no commit yet).
    fn head(&self) -> RepoResult<Option<CommitRecord>>;

    /// Resolve a ref by short or full name (`master`, `v1.0`,
    /// `refs/heads/master`) to the commit it points at.
    ///
    /// Returns `Ok(None)` if no ref matches.
    fn resolve_symbolic_name(&self, name: &str) -> RepoResult<Option<CommitRecord>>;

    /// Fetch a commit by its exact id.
    ///
    /// Returns `Ok(None)` if the object store has no such commit.
    fn commit_by_id(&self, id: &CommitId) -> RepoResult<Option<CommitRecord>>;

    /// Enumerate every commit object in the store, in no particular order.
    ///
    /// This is the slow path used when a direct id lookup fails.
    fn scan_commits(&self) -> RepoResult<Vec<CommitRecord>>;

    /// The direct parents of `commit`, first parent first.
    ///
    /// A parent missing from the store yields
    /// [`RepoError::ObjectNotFound`].
    fn parents_of(&self, commit: &CommitRecord) -> RepoResult<Vec<CommitRecord>> {
        commit
            .parent_ids
            .iter()
            .map(|id| self.commit_by_id(id)?.ok_or(RepoError::ObjectNotFound(*id)))
            .collect()
    }
}
