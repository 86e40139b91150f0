//! [`Repository`] backed by libgit2.
//!
//! All reads go through a single `git2::Repository` handle. libgit2 errors
//! are normalized at this boundary: "not found" answers become `Ok(None)`
//! and everything else is mapped with [`RepoError::from_git2`].

use std::path::Path;

use git2::{ErrorCode, ObjectType, Oid};
use revlint_types::{CommitId, CommitRecord};
use tracing::debug;

use crate::error::{RepoError, RepoResult};
use crate::names::HEAD;
use crate::traits::Repository;

/// A git repository on disk.
pub struct GitRepository {
    repo: git2::Repository,
}

impl std::fmt::Debug for GitRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GitRepository")
            .field("path", &self.repo.path())
            .finish()
    }
}

impl GitRepository {
    /// Open the repository containing `path`.
    ///
    /// `path` may be the work tree root, any directory below it, or a bare
    /// repository.
    ///
    /// # Errors
    ///
    /// [`RepoError::NotARepo`] if no repository can be discovered.
    pub fn open(path: &Path) -> RepoResult<Self> {
        let repo = git2::Repository::discover(path).map_err(|_| RepoError::NotARepo {
            path: path.to_path_buf(),
        })?;
        debug!(git_dir = %repo.path().display(), "opened repository");
        Ok(Self { repo })
    }

    /// Path to the `.git` directory.
    pub fn git_dir(&self) -> &Path {
        self.repo.path()
    }

    /// Returns `true` if the repository is a shallow clone.
    pub fn is_shallow(&self) -> bool {
        self.repo.is_shallow()
    }

    fn to_record(commit: &git2::Commit<'_>) -> CommitRecord {
        let parent_ids = commit.parent_ids().map(|oid| to_commit_id(&oid)).collect();
        CommitRecord::new(
            to_commit_id(&commit.id()),
            String::from_utf8_lossy(commit.message_bytes()),
            parent_ids,
        )
    }

    fn peel(reference: &git2::Reference<'_>, context: &str) -> RepoResult<CommitRecord> {
        let commit = reference
            .peel_to_commit()
            .map_err(|e| RepoError::from_git2(e, context))?;
        Ok(Self::to_record(&commit))
    }
}

fn to_commit_id(oid: &Oid) -> CommitId {
    let mut bytes = [0u8; revlint_types::COMMIT_ID_LENGTH];
    bytes.copy_from_slice(oid.as_bytes());
    CommitId::from_hash(bytes)
}

impl Repository for GitRepository {
    fn head(&self) -> RepoResult<Option<CommitRecord>> {
        let head = match self.repo.head() {
            Ok(head) => head,
            Err(e) if matches!(e.code(), ErrorCode::UnbornBranch | ErrorCode::NotFound) => {
                return Ok(None)
            }
            Err(e) => return Err(RepoError::from_git2(e, HEAD)),
        };
        Self::peel(&head, HEAD).map(Some)
    }

    fn resolve_symbolic_name(&self, name: &str) -> RepoResult<Option<CommitRecord>> {
        let reference = match self.repo.resolve_reference_from_short_name(name) {
            Ok(reference) => reference,
            Err(e) if matches!(e.code(), ErrorCode::NotFound | ErrorCode::InvalidSpec) => {
                return Ok(None)
            }
            Err(e) => return Err(RepoError::from_git2(e, name)),
        };
        debug!(
            name,
            full_name = reference.name().unwrap_or_default(),
            "resolved symbolic name"
        );
        Self::peel(&reference, name).map(Some)
    }

    fn commit_by_id(&self, id: &CommitId) -> RepoResult<Option<CommitRecord>> {
        let context = id.to_hex();
        let oid = Oid::from_bytes(id.as_bytes()).map_err(|e| RepoError::from_git2(e, &context))?;
        match self.repo.find_commit(oid) {
            Ok(commit) => Ok(Some(Self::to_record(&commit))),
            Err(e) if e.code() == ErrorCode::NotFound => Ok(None),
            Err(e) => Err(RepoError::from_git2(e, &context)),
        }
    }

    fn scan_commits(&self) -> RepoResult<Vec<CommitRecord>> {
        let odb = self
            .repo
            .odb()
            .map_err(|e| RepoError::from_git2(e, "object database"))?;

        let mut oids = Vec::new();
        odb.foreach(|oid| {
            oids.push(*oid);
            true
        })
        .map_err(|e| RepoError::from_git2(e, "object database"))?;

        let mut commits = Vec::new();
        for oid in oids {
            let (_, kind) = odb
                .read_header(oid)
                .map_err(|e| RepoError::from_git2(e, &oid.to_string()))?;
            if kind != ObjectType::Commit {
                continue;
            }
            let commit = self
                .repo
                .find_commit(oid)
                .map_err(|e| RepoError::from_git2(e, &oid.to_string()))?;
            commits.push(Self::to_record(&commit));
        }
        debug!(count = commits.len(), "scanned commit objects");
        Ok(commits)
    }
}
