//! Revision expressions for revlint.
//!
//! A revision names a commit the way `git rev-parse` does: a ref name, HEAD
//! or a full commit id, optionally followed by `~N` and `^N` steps. This
//! crate parses such expressions, resolves them against a
//! [`Repository`](revlint_repo::Repository) and computes the commit range
//! between two of them.
//!
//! # Modules
//!
//! - [`token`] / [`scanner`]: Character classification
//! - [`parser`]: [`parse_symbolic_reference_path`] and [`SymbolicRefPath`]
//! - [`resolver`]: [`resolve`], [`resolve_revision`], [`fetch_commit_by_id`]
//! - [`interval`]: [`fetch_interval`]
//! - [`error`]: [`RevisionError`]

pub mod error;
pub mod interval;
pub mod parser;
pub mod resolver;
pub mod scanner;
pub mod token;

pub use error::{ParentFailure, RevisionError, RevisionResult, SyntaxViolation};
pub use interval::fetch_interval;
pub use parser::{parse_symbolic_reference_path, SymbolicRefPath, MAX_TILDE_LEVEL};
pub use resolver::{fetch_commit_by_id, resolve, resolve_revision};
