//! Per-event lifecycle control.
//!
//! Each pull-request event drives one pass through this controller. No
//! state survives between invocations: every decision derives from the
//! event itself plus fresh queries against the hosting API, so re-running
//! an event is idempotent up to the companion branch's force-push.

use crate::config::Config;
use crate::event::{PullRequestAction, PullRequestEvent};
use anyhow::Result;
use codeowners_client::{GitHubClient, PullRequestInfo};
use codeowners_core::{added_files, branch_name, reconcile, wants_codeowner};
use log::{debug, info, warn};

/// What a run did for an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The companion branch was created or refreshed, and a companion
    /// pull request exists for it.
    Published { branch: String },
    /// Companion branch deletion was attempted (the ref may not have
    /// existed; that still counts).
    TornDown { branch: String },
    /// Nothing to do for this event.
    Skipped(SkipReason),
}

/// Why an event resulted in no repository writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The PR description does not carry the checked opt-in marker.
    NotOptedIn,
    /// The diff introduces no brand-new files.
    NoNewFiles,
    /// The PR has no resolvable author to attribute ownership to.
    NoAuthor,
    /// The event action is not one this automation handles.
    IgnoredAction,
}

/// Orchestrates one pull-request event against the hosting API.
pub struct LifecycleController<'a> {
    config: &'a Config,
    client: &'a dyn GitHubClient,
}

impl<'a> LifecycleController<'a> {
    pub fn new(config: &'a Config, client: &'a dyn GitHubClient) -> Self {
        Self { config, client }
    }

    /// Dispatch on the event action.
    ///
    /// opened/reopened/synchronize without opt-in are plain no-ops, but
    /// an edit that drops the marker tears the companion branch down:
    /// editing is how authors withdraw consent.
    pub async fn handle(&self, event: &PullRequestEvent) -> Result<Outcome> {
        match event.action {
            PullRequestAction::Opened
            | PullRequestAction::Reopened
            | PullRequestAction::Synchronize => {
                let pull = self.fetch_pull(event.number).await?;
                if !wants_codeowner(pull.body.as_deref()) {
                    info!("PR #{} has not opted in", pull.number);
                    return Ok(Outcome::Skipped(SkipReason::NotOptedIn));
                }
                self.publish(&pull).await
            }
            PullRequestAction::Edited => {
                let pull = self.fetch_pull(event.number).await?;
                if !wants_codeowner(pull.body.as_deref()) {
                    info!("PR #{} withdrew the opt-in marker", pull.number);
                    return self.teardown(event.number).await;
                }
                self.publish(&pull).await
            }
            PullRequestAction::Closed => self.teardown(event.number).await,
            PullRequestAction::Other => Ok(Outcome::Skipped(SkipReason::IgnoredAction)),
        }
    }

    async fn fetch_pull(&self, number: u64) -> Result<PullRequestInfo> {
        let pull = self
            .client
            .fetch_pull_request(&self.config.repo_owner, &self.config.repo_name, number)
            .await?;
        Ok(pull)
    }

    /// The reconcile-and-publish pipeline.
    ///
    /// Builds a fresh CODEOWNERS commit on top of the base branch and
    /// points the companion branch at it, opening the companion pull
    /// request only when none is open yet.
    async fn publish(&self, pull: &PullRequestInfo) -> Result<Outcome> {
        let owner = &self.config.repo_owner;
        let repo = &self.config.repo_name;

        let diff = self.client.fetch_diff(owner, repo, pull.number).await?;
        let new_files = added_files(&diff)?;
        if new_files.is_empty() {
            info!("PR #{} adds no new files", pull.number);
            return Ok(Outcome::Skipped(SkipReason::NoNewFiles));
        }
        debug!("New files: {}", new_files.join(", "));

        let Some(author) = pull.author.as_deref() else {
            warn!(
                "PR #{} has no resolvable author; skipping codeowner attribution",
                pull.number
            );
            return Ok(Outcome::Skipped(SkipReason::NoAuthor));
        };

        let base_branch = match &self.config.base_branch {
            Some(name) => name.clone(),
            None => self.client.default_branch(owner, repo).await?,
        };
        debug!("Base branch name: {}", base_branch);

        let base = self.client.latest_commit(owner, repo, &base_branch).await?;
        debug!("Base commit {} (tree {})", base.sha, base.tree_sha);

        // A repository without a CODEOWNERS file yet is the common case.
        let current = self
            .client
            .file_content(owner, repo, &self.config.codeowners_path, &base.sha)
            .await?
            .unwrap_or_default();

        let updated = reconcile(&current, &new_files, author);
        let tree = self
            .client
            .create_tree(owner, repo, &base.tree_sha, &self.config.codeowners_path, &updated)
            .await?;

        let message = format!("chore: add {} to {}", author, self.config.codeowners_path);
        let commit = self
            .client
            .create_commit(owner, repo, &message, &tree, &base.sha)
            .await?;

        let branch = branch_name(&self.config.branch_prefix, pull.number);
        if self.client.branch_exists(owner, repo, &branch).await? {
            self.client
                .force_update_branch(owner, repo, &branch, &commit)
                .await?;
        } else {
            self.client.create_branch(owner, repo, &branch, &commit).await?;
        }

        let open = self.client.list_open_pulls_by_head(owner, repo, &branch).await?;
        if let Some(existing) = open.first() {
            debug!("Companion PR already open: #{}", existing.number);
        } else {
            let body = format!("Reference #{}\n/cc @{}", pull.number, author);
            let created = self
                .client
                .create_pull_request(owner, repo, &message, &body, &base_branch, &branch)
                .await?;
            info!("Opened companion PR #{} from {}", created.number, branch);
        }

        Ok(Outcome::Published { branch })
    }

    /// Best-effort removal of the companion branch. The client swallows
    /// a missing ref, so tearing down something that was never published
    /// succeeds.
    async fn teardown(&self, number: u64) -> Result<Outcome> {
        let branch = branch_name(&self.config.branch_prefix, number);
        self.client
            .delete_branch(&self.config.repo_owner, &self.config.repo_name, &branch)
            .await?;
        info!("Removed companion branch {}", branch);
        Ok(Outcome::TornDown { branch })
    }
}
