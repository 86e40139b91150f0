//! In-memory commit graph for tests and embedding.
//!
//! [`InMemoryRepository`] keeps commits in a `HashMap` and refs in a
//! `BTreeMap`. Besides the [`Repository`] trait it offers three knobs used to
//! exercise failure paths:
//!
//! - [`forget`](InMemoryRepository::forget) drops a commit object, which is
//!   what a shallow clone looks like past its depth;
//! - [`mark_unreadable`](InMemoryRepository::mark_unreadable) makes every
//!   lookup of a commit fail with [`RepoError::CorruptObject`];
//! - [`hide_from_index`](InMemoryRepository::hide_from_index) makes
//!   [`commit_by_id`](Repository::commit_by_id) miss a commit that
//!   [`scan_commits`](Repository::scan_commits) still returns.

use std::collections::{BTreeMap, HashMap, HashSet};

use revlint_types::{CommitId, CommitRecord};

use crate::error::{RepoError, RepoResult};
use crate::names::{branch_ref, expand_short_name, tag_ref};
use crate::traits::Repository;

/// State of HEAD.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Head {
    /// HEAD names a branch (`refs/heads/<name>`).
    Branch(String),
    /// HEAD points directly at a commit.
    Detached(CommitId),
}

/// An in-memory implementation of [`Repository`].
#[derive(Debug, Default)]
pub struct InMemoryRepository {
    commits: HashMap<CommitId, CommitRecord>,
    refs: BTreeMap<String, CommitId>,
    head: Option<Head>,
    unreadable: HashSet<CommitId>,
    unindexed: HashSet<CommitId>,
    sequence: u64,
}

impl InMemoryRepository {
    /// Create an empty repository with an unborn HEAD.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of commit objects stored.
    pub fn len(&self) -> usize {
        self.commits.len()
    }

    /// Returns `true` if no commit is stored.
    pub fn is_empty(&self) -> bool {
        self.commits.is_empty()
    }

    /// Record a new commit with the given parents and return its id.
    ///
    /// Ids are derived from the message, the parents and an insertion
    /// counter, so two commits with the same message stay distinct.
    pub fn commit(&mut self, message: &str, parents: &[CommitId]) -> CommitId {
        self.sequence += 1;
        let mut raw = format!("commit {}\n", self.sequence);
        for parent in parents {
            raw.push_str(&format!("parent {parent}\n"));
        }
        raw.push('\n');
        raw.push_str(message);

        let id = CommitId::from_bytes(raw.as_bytes());
        self.insert(CommitRecord::new(id, message, parents.to_vec()));
        id
    }

    /// Store a commit record as is. Its parents need not exist.
    pub fn insert(&mut self, record: CommitRecord) {
        self.commits.insert(record.id, record);
    }

    /// Drop a commit object while leaving references to it in place.
    ///
    /// Returns `true` if the commit existed.
    pub fn forget(&mut self, id: &CommitId) -> bool {
        self.commits.remove(id).is_some()
    }

    /// Make every lookup of `id` fail as if the object were corrupt.
    pub fn mark_unreadable(&mut self, id: CommitId) {
        self.unreadable.insert(id);
    }

    /// Make direct lookups of `id` miss while scans still find it.
    pub fn hide_from_index(&mut self, id: CommitId) {
        self.unindexed.insert(id);
    }

    /// Create or move a branch.
    pub fn set_branch(&mut self, name: &str, id: CommitId) {
        self.refs.insert(branch_ref(name), id);
    }

    /// Create or move a tag.
    pub fn set_tag(&mut self, name: &str, id: CommitId) {
        self.refs.insert(tag_ref(name), id);
    }

    /// Create or move a ref given its full name.
    pub fn set_ref(&mut self, full_name: &str, id: CommitId) {
        self.refs.insert(full_name.to_string(), id);
    }

    /// Point HEAD at a branch.
    pub fn checkout(&mut self, branch: &str) {
        self.head = Some(Head::Branch(branch.to_string()));
    }

    /// Detach HEAD at a commit.
    pub fn detach(&mut self, id: CommitId) {
        self.head = Some(Head::Detached(id));
    }

    /// Commit on the checked-out branch, moving it forward.
    ///
    /// On an unborn HEAD this creates a root commit on `master` and checks
    /// it out. A detached HEAD moves along with the new commit.
    pub fn commit_on_head(&mut self, message: &str) -> CommitId {
        let branch = match &self.head {
            Some(Head::Branch(name)) => Some(name.clone()),
            Some(Head::Detached(_)) => None,
            None => Some("master".to_string()),
        };
        let parent = self.head_id();
        let parents: Vec<CommitId> = parent.into_iter().collect();
        let id = self.commit(message, &parents);

        match branch {
            Some(name) => {
                self.set_branch(&name, id);
                self.checkout(&name);
            }
            None => self.detach(id),
        }
        id
    }

    fn head_id(&self) -> Option<CommitId> {
        match self.head.as_ref()? {
            Head::Branch(name) => self.refs.get(&branch_ref(name)).copied(),
            Head::Detached(id) => Some(*id),
        }
    }

    fn lookup(&self, id: &CommitId) -> RepoResult<Option<CommitRecord>> {
        if self.unreadable.contains(id) {
            return Err(RepoError::CorruptObject {
                id: *id,
                reason: "object cannot be read".into(),
            });
        }
        Ok(self.commits.get(id).cloned())
    }

    fn target(&self, full_name: &str, id: &CommitId) -> RepoResult<CommitRecord> {
        self.lookup(id)?.ok_or_else(|| RepoError::Git {
            context: full_name.to_string(),
            message: format!("ref points at missing commit {id}"),
        })
    }
}

impl Repository for InMemoryRepository {
    fn head(&self) -> RepoResult<Option<CommitRecord>> {
        match self.head_id() {
            Some(id) => self.target("HEAD", &id).map(Some),
            None => Ok(None),
        }
    }

    fn resolve_symbolic_name(&self, name: &str) -> RepoResult<Option<CommitRecord>> {
        for candidate in expand_short_name(name) {
            if let Some(id) = self.refs.get(&candidate) {
                return self.target(&candidate, id).map(Some);
            }
        }
        Ok(None)
    }

    fn commit_by_id(&self, id: &CommitId) -> RepoResult<Option<CommitRecord>> {
        if self.unindexed.contains(id) {
            return Ok(None);
        }
        self.lookup(id)
    }

    fn scan_commits(&self) -> RepoResult<Vec<CommitRecord>> {
        let mut commits: Vec<CommitRecord> = self.commits.values().cloned().collect();
        commits.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(commits)
    }
}
