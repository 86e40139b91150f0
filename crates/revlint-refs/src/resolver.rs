//! Resolution of parsed revisions to commits.

use revlint_repo::{is_head_alias, Repository};
use revlint_types::{CommitId, CommitRecord};
use tracing::debug;

use crate::error::{ParentFailure, RevisionError, RevisionResult};
use crate::parser::{parse_symbolic_reference_path, SymbolicRefPath};

/// Parse `input` and resolve it against `repo`.
pub fn resolve_revision<R>(input: &str, repo: &R) -> RevisionResult<CommitRecord>
where
    R: Repository + ?Sized,
{
    let path = parse_symbolic_reference_path(input)?;
    resolve(&path, repo)
}

/// Resolve a parsed revision to a commit.
///
/// The starting commit is looked up as HEAD (any case), then as a ref
/// short name, then as a full commit id. The reference path is then walked
/// one parent at a time.
pub fn resolve<R>(path: &SymbolicRefPath, repo: &R) -> RevisionResult<CommitRecord>
where
    R: Repository + ?Sized,
{
    let mut commit = starting_commit(&path.branch_name, repo)?;

    for &index in &path.ref_path {
        if commit.is_root() {
            return Err(RevisionError::ParentNotFound {
                commit: commit.id,
                failure: ParentFailure::NoParents,
            });
        }
        let missing = RevisionError::ParentNotFound {
            commit: commit.id,
            failure: ParentFailure::MissingParent,
        };
        if index == 0 || index > commit.parent_count() {
            return Err(missing);
        }
        let mut parents = match repo.parents_of(&commit) {
            Ok(parents) => parents,
            Err(e) if e.is_missing_object() => return Err(missing),
            Err(e) => return Err(e.into()),
        };
        commit = parents.swap_remove(index - 1);
    }

    debug!(
        name = %path.branch_name,
        steps = path.ref_path.len(),
        commit = %commit.id.short_hex(),
        "resolved revision"
    );
    Ok(commit)
}

fn starting_commit<R>(name: &str, repo: &R) -> RevisionResult<CommitRecord>
where
    R: Repository + ?Sized,
{
    if is_head_alias(name) {
        if let Some(head) = repo.head()? {
            return Ok(head);
        }
    }

    if let Some(commit) = repo.resolve_symbolic_name(name)? {
        return Ok(commit);
    }

    if CommitId::is_full_hex(name) {
        if let Ok(id) = CommitId::from_hex(name) {
            if let Some(commit) = repo.commit_by_id(&id)? {
                return Ok(commit);
            }
            debug!(%id, "direct lookup failed, scanning commit objects");
            if let Some(commit) = repo.scan_commits()?.into_iter().find(|c| c.id == id) {
                return Ok(commit);
            }
        }
    }

    Err(RevisionError::ReferenceNotFound {
        name: name.to_string(),
    })
}

/// Fetch a commit by its full 40-character hex id.
///
/// # Errors
///
/// [`RevisionError::ReferenceNotFound`] if `hex` is not a full id or no
/// such commit exists.
pub fn fetch_commit_by_id<R>(repo: &R, hex: &str) -> RevisionResult<CommitRecord>
where
    R: Repository + ?Sized,
{
    let not_found = || RevisionError::ReferenceNotFound {
        name: hex.to_string(),
    };
    if !CommitId::is_full_hex(hex) {
        return Err(not_found());
    }
    let id = CommitId::from_hex(hex).map_err(|_| not_found())?;
    repo.commit_by_id(&id)?.ok_or_else(not_found)
}
