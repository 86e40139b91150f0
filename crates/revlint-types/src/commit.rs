use serde::{Deserialize, Serialize};

use crate::commit_id::CommitId;

/// A commit as seen by the linter: its id, its full message and the ordered
/// ids of its parents.
///
/// Parent order matters: index 0 is the first parent, index 1 the second
/// parent of a merge.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitRecord {
    pub id: CommitId,
    pub message: String,
    pub parent_ids: Vec<CommitId>,
}

impl CommitRecord {
    pub fn new(id: CommitId, message: impl Into<String>, parent_ids: Vec<CommitId>) -> Self {
        Self {
            id,
            message: message.into(),
            parent_ids,
        }
    }

    /// First line of the message, without its line terminator.
    pub fn summary(&self) -> &str {
        summary_of(&self.message)
    }

    pub fn parent_count(&self) -> usize {
        self.parent_ids.len()
    }

    /// Returns `true` for commits with two or more parents.
    pub fn is_merge(&self) -> bool {
        self.parent_ids.len() >= 2
    }

    /// Returns `true` for commits without parents (roots, or shallow
    /// boundaries when the backend grafts them).
    pub fn is_root(&self) -> bool {
        self.parent_ids.is_empty()
    }
}

/// First line of a commit message.
pub fn summary_of(message: &str) -> &str {
    let line = message.split('\n').next().unwrap_or_default();
    line.strip_suffix('\r').unwrap_or(line)
}
