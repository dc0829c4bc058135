//! GitHub client trait definition
//!
//! This module defines the `GitHubClient` trait that all client
//! implementations must satisfy. One method exists per hosting-API
//! capability the automation consumes; nothing more.

use crate::error::ApiError;
use crate::types::{CommitInfo, PullRequestInfo};
use async_trait::async_trait;

/// GitHub API client trait
///
/// Defines the interface for interacting with the GitHub API. The
/// production implementation is `OctocrabClient`; tests substitute a
/// recording mock.
///
/// Not-found outcomes are modeled as values rather than errors:
/// `file_content` yields `None` for an absent path, `branch_exists`
/// answers the existence question directly, and `delete_branch` treats a
/// missing ref as success. Everything else fails with `ApiError`.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` to allow sharing across async
/// tasks.
///
/// # Example
///
/// ```rust,ignore
/// use codeowners_client::GitHubClient;
///
/// async fn base(client: &dyn GitHubClient) -> Result<String, codeowners_client::ApiError> {
///     client.default_branch("rust-lang", "rust").await
/// }
/// ```
#[async_trait]
pub trait GitHubClient: Send + Sync {
    /// Fetch a single pull request by number
    ///
    /// # Arguments
    ///
    /// * `owner` - Repository owner (user or organization)
    /// * `repo` - Repository name
    /// * `number` - Pull request number
    async fn fetch_pull_request(
        &self,
        owner: &str,
        repo: &str,
        number: u64,
    ) -> Result<PullRequestInfo, ApiError>;

    /// Fetch the raw unified diff of a pull request
    ///
    /// Uses the diff media type, so the result is the same text
    /// `git diff` would print for the PR's merge base.
    async fn fetch_diff(&self, owner: &str, repo: &str, number: u64) -> Result<String, ApiError>;

    /// Fetch the repository's default branch name
    async fn default_branch(&self, owner: &str, repo: &str) -> Result<String, ApiError>;

    /// Fetch the latest commit of a branch, with its tree SHA
    ///
    /// # Arguments
    ///
    /// * `branch` - Branch name (not a fully qualified ref)
    async fn latest_commit(
        &self,
        owner: &str,
        repo: &str,
        branch: &str,
    ) -> Result<CommitInfo, ApiError>;

    /// Fetch decoded file content at a given commit
    ///
    /// # Returns
    ///
    /// `Ok(None)` when nothing exists at `path`, the decoded text when a
    /// regular file does, and `ApiError::NotAFile` when the path resolves
    /// to a directory or other non-file resource.
    async fn file_content(
        &self,
        owner: &str,
        repo: &str,
        path: &str,
        reference: &str,
    ) -> Result<Option<String>, ApiError>;

    /// Create a tree overlaying a single blob onto a base tree
    ///
    /// # Arguments
    ///
    /// * `base_tree` - SHA of the tree to overlay onto
    /// * `path` - Path of the blob within the new tree
    /// * `content` - Full file content (mode 100644)
    ///
    /// # Returns
    ///
    /// The SHA of the created tree.
    async fn create_tree(
        &self,
        owner: &str,
        repo: &str,
        base_tree: &str,
        path: &str,
        content: &str,
    ) -> Result<String, ApiError>;

    /// Create a commit object
    ///
    /// # Returns
    ///
    /// The SHA of the created commit.
    async fn create_commit(
        &self,
        owner: &str,
        repo: &str,
        message: &str,
        tree: &str,
        parent: &str,
    ) -> Result<String, ApiError>;

    /// Whether a branch ref currently exists
    async fn branch_exists(&self, owner: &str, repo: &str, branch: &str)
        -> Result<bool, ApiError>;

    /// Create a branch ref pointing at a commit
    async fn create_branch(
        &self,
        owner: &str,
        repo: &str,
        branch: &str,
        sha: &str,
    ) -> Result<(), ApiError>;

    /// Force-move an existing branch ref to a commit, discarding its
    /// prior history
    async fn force_update_branch(
        &self,
        owner: &str,
        repo: &str,
        branch: &str,
        sha: &str,
    ) -> Result<(), ApiError>;

    /// Delete a branch ref, best-effort
    ///
    /// A ref that does not exist is not an error.
    async fn delete_branch(&self, owner: &str, repo: &str, branch: &str) -> Result<(), ApiError>;

    /// List open pull requests whose head is the given branch
    async fn list_open_pulls_by_head(
        &self,
        owner: &str,
        repo: &str,
        head_branch: &str,
    ) -> Result<Vec<PullRequestInfo>, ApiError>;

    /// Create a pull request
    ///
    /// # Arguments
    ///
    /// * `title` - PR title
    /// * `body` - PR body text
    /// * `base` - Branch the PR merges into
    /// * `head` - Branch carrying the changes
    async fn create_pull_request(
        &self,
        owner: &str,
        repo: &str,
        title: &str,
        body: &str,
        base: &str,
        head: &str,
    ) -> Result<PullRequestInfo, ApiError>;
}
