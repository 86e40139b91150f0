//! Commit ranges: everything reachable from `to` but not from `from`, the
//! set `git log from..to` prints.
//!
//! The range is computed in two traversals. A breadth-first walk collects
//! every ancestor of `from` (inclusive) into an exclusion set. A depth-first
//! walk from `to` then emits each commit outside that set. The exclusion set
//! is closed under ancestry, so the second walk never expands an excluded
//! commit.
//!
//! Both walks treat a parent missing from the object store as a dead end.
//! That is how the boundary of a shallow clone shows up.

use std::collections::{HashSet, VecDeque};

use revlint_repo::Repository;
use revlint_types::{CommitId, CommitRecord};
use tracing::{debug, warn};

use crate::error::{RevisionError, RevisionResult};
use crate::resolver::resolve_revision;

/// Commits reachable from `to_ref` but not from `from_ref`.
///
/// The list runs newest to oldest along the traversed branch. When a merge
/// is met, the commits it brings in from the merged branch follow it before
/// the walk resumes on the first-parent line.
///
/// # Errors
///
/// - resolution errors of either endpoint, unchanged;
/// - [`RevisionError::NoDiffBetweenReferences`] when the range is empty;
/// - [`RevisionError::BrowsingTreeFailure`] when a parent cannot be read.
pub fn fetch_interval<R>(
    repo: &R,
    from_ref: &str,
    to_ref: &str,
) -> RevisionResult<Vec<CommitRecord>>
where
    R: Repository + ?Sized,
{
    let from = resolve_revision(from_ref, repo)?;
    let to = resolve_revision(to_ref, repo)?;
    let no_diff = || RevisionError::NoDiffBetweenReferences {
        from: from_ref.to_string(),
        to: to_ref.to_string(),
    };

    let excluded = ancestors_of(repo, from)?;
    debug!(from = from_ref, excluded = excluded.len(), "collected excluded commits");
    if excluded.contains(&to.id) {
        return Err(no_diff());
    }

    let mut commits = Vec::new();
    let mut seen = HashSet::from([to.id]);
    let mut pending = VecDeque::from([to]);

    while let Some(commit) = pending.pop_front() {
        for parent_id in &commit.parent_ids {
            if excluded.contains(parent_id) || !seen.insert(*parent_id) {
                continue;
            }
            if let Some(parent) = load_parent(repo, &commit, parent_id)? {
                pending.push_front(parent);
            }
        }
        commits.push(commit);
    }

    debug!(from = from_ref, to = to_ref, commits = commits.len(), "computed interval");
    if commits.is_empty() {
        return Err(no_diff());
    }
    Ok(commits)
}

/// Every commit reachable from `start`, `start` included.
fn ancestors_of<R>(repo: &R, start: CommitRecord) -> RevisionResult<HashSet<CommitId>>
where
    R: Repository + ?Sized,
{
    let mut visited = HashSet::from([start.id]);
    let mut queue = VecDeque::from([start]);

    while let Some(commit) = queue.pop_front() {
        for parent_id in &commit.parent_ids {
            if !visited.insert(*parent_id) {
                continue;
            }
            if let Some(parent) = load_parent(repo, &commit, parent_id)? {
                queue.push_back(parent);
            }
        }
    }
    Ok(visited)
}

/// Load a parent commit. `Ok(None)` means the object is absent.
fn load_parent<R>(
    repo: &R,
    child: &CommitRecord,
    parent_id: &CommitId,
) -> RevisionResult<Option<CommitRecord>>
where
    R: Repository + ?Sized,
{
    match repo.commit_by_id(parent_id) {
        Ok(Some(parent)) => Ok(Some(parent)),
        Ok(None) => {
            shallow_boundary(child, parent_id);
            Ok(None)
        }
        Err(e) if e.is_missing_object() => {
            shallow_boundary(child, parent_id);
            Ok(None)
        }
        Err(source) => Err(RevisionError::BrowsingTreeFailure { source }),
    }
}

fn shallow_boundary(child: &CommitRecord, parent_id: &CommitId) {
    warn!(
        commit = %child.id.short_hex(),
        parent = %parent_id.short_hex(),
        "parent commit is missing, history is probably shallow"
    );
}
