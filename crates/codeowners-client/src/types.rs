//! GitHub API data transfer objects
//!
//! These types represent the data returned from the GitHub API. They are
//! intentionally separate from octocrab's models so consumers of the
//! trait never touch octocrab directly.

use serde::{Deserialize, Serialize};

/// A pull request from the GitHub API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PullRequestInfo {
    /// PR number (e.g., 123)
    pub number: u64,

    /// PR title
    pub title: String,

    /// PR body/description
    pub body: Option<String>,

    /// Author's GitHub username. Absent for deleted accounts and some
    /// integration-authored pull requests.
    pub author: Option<String>,

    /// Base branch name (e.g., "main")
    pub base_branch: String,

    /// HEAD branch name (e.g., "feature/foo")
    pub head_branch: String,

    /// PR URL for log output
    pub html_url: String,
}

/// The tip of a branch: commit SHA plus the SHA of its root tree.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommitInfo {
    /// Commit SHA
    pub sha: String,

    /// SHA of the commit's tree, used as the base for tree overlays
    pub tree_sha: String,
}
