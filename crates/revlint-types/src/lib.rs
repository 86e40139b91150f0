//! Foundation types for revlint.
//!
//! Every other revlint crate depends on `revlint-types`.
//!
//! # Key Types
//!
//! - [`CommitId`]: 20-byte SHA-1 object identifier, hex-displayed
//! - [`CommitRecord`]: id, message and ordered parent ids of a commit

pub mod commit;
pub mod commit_id;
pub mod error;

pub use commit::{summary_of, CommitRecord};
pub use commit_id::{CommitId, COMMIT_ID_HEX_LENGTH, COMMIT_ID_LENGTH};
pub use error::TypeError;
