//! Repository access for revlint.
//!
//! Revision resolution only needs a handful of read operations on a commit
//! graph: HEAD, ref lookup by short name, commit lookup by id, a full scan
//! of commit objects and parent iteration. They are gathered in the
//! [`Repository`] trait.
//!
//! # Modules
//!
//! - [`error`]: [`RepoError`] and its classification of missing objects
//! - [`traits`]: The [`Repository`] trait
//! - [`names`]: Short-name expansion and HEAD aliasing
//! - [`git`]: [`GitRepository`], backed by libgit2
//! - [`memory`]: [`InMemoryRepository`] for tests

pub mod error;
pub mod git;
pub mod memory;
pub mod names;
pub mod traits;

pub use error::{RepoError, RepoResult};
pub use git::GitRepository;
pub use memory::{Head, InMemoryRepository};
pub use names::{expand_short_name, is_head_alias, HEAD};
pub use traits::Repository;
