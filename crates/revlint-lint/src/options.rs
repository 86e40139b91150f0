use serde::{Deserialize, Serialize};

/// Default maximum length of a commit summary, in characters.
pub const DEFAULT_SUMMARY_LENGTH: usize = 50;

/// Switches applied to every check. Read from the `[config]` table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct MatchOptions {
    /// Skip commits with two or more parents.
    pub exclude_merge_commits: bool,
    /// Report summaries longer than `summary_length`.
    pub check_summary_length: bool,
    pub summary_length: usize,
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self {
            exclude_merge_commits: false,
            check_summary_length: false,
            summary_length: DEFAULT_SUMMARY_LENGTH,
        }
    }
}
