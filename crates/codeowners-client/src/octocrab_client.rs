//! Octocrab-based GitHub API client
//!
//! Direct implementation of the `GitHubClient` trait using the octocrab
//! library. Pull-request and content endpoints go through octocrab's
//! typed handlers; the Git Data API (trees, commits, refs) is not typed
//! by octocrab, so those calls use raw routes with small local DTOs.

use crate::client::GitHubClient;
use crate::error::ApiError;
use crate::types::{CommitInfo, PullRequestInfo};
use async_trait::async_trait;
use log::debug;
use octocrab::Octocrab;
use serde::Deserialize;
use std::sync::Arc;

/// Direct GitHub API client using octocrab
#[derive(Debug, Clone)]
pub struct OctocrabClient {
    octocrab: Arc<Octocrab>,
}

impl OctocrabClient {
    /// Create a new client with the given octocrab instance
    pub fn new(octocrab: Arc<Octocrab>) -> Self {
        Self { octocrab }
    }

    /// Build a client authenticated with a personal access token
    pub fn from_token(token: String) -> Result<Self, ApiError> {
        let octocrab = Octocrab::builder().personal_token(token).build()?;
        Ok(Self::new(Arc::new(octocrab)))
    }

    /// Get a reference to the underlying octocrab instance
    pub fn octocrab(&self) -> &Octocrab {
        &self.octocrab
    }
}

/// SHA-only payload returned by tree and commit creation.
#[derive(Debug, Deserialize)]
struct ObjectSha {
    sha: String,
}

/// Commit lookup payload, trimmed to the fields the automation reads.
#[derive(Debug, Deserialize)]
struct CommitLookup {
    sha: String,
    commit: CommitDetail,
}

#[derive(Debug, Deserialize)]
struct CommitDetail {
    tree: ObjectSha,
}

/// Ref payload returned by ref lookup, creation, and update.
#[derive(Debug, Deserialize)]
struct GitRef {
    #[serde(rename = "ref")]
    full_ref: String,
}

/// Route for reading a single branch ref. The read endpoint uses the
/// singular `git/ref`, unlike the mutation endpoints.
fn lookup_ref_route(owner: &str, repo: &str, branch: &str) -> String {
    format!("/repos/{}/{}/git/ref/heads/{}", owner, repo, branch)
}

/// Route for updating or deleting a branch ref (`git/refs`, plural).
fn mutate_ref_route(owner: &str, repo: &str, branch: &str) -> String {
    format!("/repos/{}/{}/git/refs/heads/{}", owner, repo, branch)
}

fn is_not_found(err: &octocrab::Error) -> bool {
    matches!(
        err,
        octocrab::Error::GitHub { source, .. } if source.status_code.as_u16() == 404
    )
}

#[async_trait]
impl GitHubClient for OctocrabClient {
    async fn fetch_pull_request(
        &self,
        owner: &str,
        repo: &str,
        number: u64,
    ) -> Result<PullRequestInfo, ApiError> {
        debug!("Fetching PR {}/{}#{}", owner, repo, number);

        let pr = self.octocrab.pulls(owner, repo).get(number).await?;
        Ok(convert_pull_request(&pr))
    }

    async fn fetch_diff(&self, owner: &str, repo: &str, number: u64) -> Result<String, ApiError> {
        debug!("Fetching diff for {}/{}#{}", owner, repo, number);

        let diff = self.octocrab.pulls(owner, repo).get_diff(number).await?;
        Ok(diff)
    }

    async fn default_branch(&self, owner: &str, repo: &str) -> Result<String, ApiError> {
        debug!("Fetching default branch of {}/{}", owner, repo);

        let repository = self.octocrab.repos(owner, repo).get().await?;
        repository.default_branch.ok_or_else(|| {
            ApiError::UnexpectedResponse(format!(
                "repository {}/{} has no default branch",
                owner, repo
            ))
        })
    }

    async fn latest_commit(
        &self,
        owner: &str,
        repo: &str,
        branch: &str,
    ) -> Result<CommitInfo, ApiError> {
        debug!("Fetching latest commit of {}/{}@{}", owner, repo, branch);

        let route = format!("/repos/{}/{}/commits/{}", owner, repo, branch);
        let commit: CommitLookup = self.octocrab.get(route, None::<&()>).await?;

        Ok(CommitInfo {
            sha: commit.sha,
            tree_sha: commit.commit.tree.sha,
        })
    }

    async fn file_content(
        &self,
        owner: &str,
        repo: &str,
        path: &str,
        reference: &str,
    ) -> Result<Option<String>, ApiError> {
        debug!("Fetching content {}/{}:{} @ {}", owner, repo, path, reference);

        let result = self
            .octocrab
            .repos(owner, repo)
            .get_content()
            .path(path)
            .r#ref(reference)
            .send()
            .await;

        let items = match result {
            Ok(content) => content.items,
            Err(err) if is_not_found(&err) => {
                debug!("No content at {}:{}", path, reference);
                return Ok(None);
            }
            Err(err) => return Err(err.into()),
        };

        // Directories come back as a listing of their entries.
        if items.len() != 1 || items[0].r#type != "file" {
            return Err(ApiError::NotAFile {
                path: path.to_string(),
            });
        }

        Ok(Some(items[0].decoded_content().unwrap_or_default()))
    }

    async fn create_tree(
        &self,
        owner: &str,
        repo: &str,
        base_tree: &str,
        path: &str,
        content: &str,
    ) -> Result<String, ApiError> {
        let route = format!("/repos/{}/{}/git/trees", owner, repo);
        let body = serde_json::json!({
            "base_tree": base_tree,
            "tree": [{
                "path": path,
                "mode": "100644",
                "type": "blob",
                "content": content,
            }],
        });

        let tree: ObjectSha = self.octocrab.post(route, Some(&body)).await?;
        debug!("Created tree {} overlaying {}", tree.sha, path);
        Ok(tree.sha)
    }

    async fn create_commit(
        &self,
        owner: &str,
        repo: &str,
        message: &str,
        tree: &str,
        parent: &str,
    ) -> Result<String, ApiError> {
        let route = format!("/repos/{}/{}/git/commits", owner, repo);
        let body = serde_json::json!({
            "message": message,
            "tree": tree,
            "parents": [parent],
        });

        let commit: ObjectSha = self.octocrab.post(route, Some(&body)).await?;
        debug!("Created commit {}", commit.sha);
        Ok(commit.sha)
    }

    async fn branch_exists(
        &self,
        owner: &str,
        repo: &str,
        branch: &str,
    ) -> Result<bool, ApiError> {
        let route = lookup_ref_route(owner, repo, branch);
        let result: Result<GitRef, octocrab::Error> = self.octocrab.get(route, None::<&()>).await;
        match result {
            Ok(reference) => {
                debug!("Ref exists: {}", reference.full_ref);
                Ok(true)
            }
            Err(err) if is_not_found(&err) => Ok(false),
            Err(err) => Err(err.into()),
        }
    }

    async fn create_branch(
        &self,
        owner: &str,
        repo: &str,
        branch: &str,
        sha: &str,
    ) -> Result<(), ApiError> {
        let route = format!("/repos/{}/{}/git/refs", owner, repo);
        let body = serde_json::json!({
            "ref": format!("refs/heads/{}", branch),
            "sha": sha,
        });

        let created: GitRef = self.octocrab.post(route, Some(&body)).await?;
        debug!("Created ref {} at {}", created.full_ref, sha);
        Ok(())
    }

    async fn force_update_branch(
        &self,
        owner: &str,
        repo: &str,
        branch: &str,
        sha: &str,
    ) -> Result<(), ApiError> {
        let route = mutate_ref_route(owner, repo, branch);
        let body = serde_json::json!({
            "sha": sha,
            "force": true,
        });

        let updated: GitRef = self.octocrab.patch(route, Some(&body)).await?;
        debug!("Force-updated ref {} to {}", updated.full_ref, sha);
        Ok(())
    }

    async fn delete_branch(&self, owner: &str, repo: &str, branch: &str) -> Result<(), ApiError> {
        let route = mutate_ref_route(owner, repo, branch);

        // Deletion answers 204 with an empty body, so the typed helpers
        // don't fit here; inspect the raw response instead.
        let response = self.octocrab._delete(&route, None::<&()>).await?;
        if response.status().as_u16() == 404 {
            debug!("Ref heads/{} already absent", branch);
            return Ok(());
        }

        octocrab::map_github_error(response).await?;
        debug!("Deleted ref heads/{}", branch);
        Ok(())
    }

    async fn list_open_pulls_by_head(
        &self,
        owner: &str,
        repo: &str,
        head_branch: &str,
    ) -> Result<Vec<PullRequestInfo>, ApiError> {
        debug!("Listing open PRs in {}/{} from {}", owner, repo, head_branch);

        let page = self
            .octocrab
            .pulls(owner, repo)
            .list()
            .state(octocrab::params::State::Open)
            .head(format!("{}:{}", owner, head_branch))
            .per_page(30)
            .send()
            .await?;

        Ok(page.items.iter().map(convert_pull_request).collect())
    }

    async fn create_pull_request(
        &self,
        owner: &str,
        repo: &str,
        title: &str,
        body: &str,
        base: &str,
        head: &str,
    ) -> Result<PullRequestInfo, ApiError> {
        let pr = self
            .octocrab
            .pulls(owner, repo)
            .create(title, head, base)
            .body(body)
            .send()
            .await?;

        debug!("Created PR {}/{}#{} from {}", owner, repo, pr.number, head);
        Ok(convert_pull_request(&pr))
    }
}

/// Convert octocrab's PullRequest model to our DTO
fn convert_pull_request(pr: &octocrab::models::pulls::PullRequest) -> PullRequestInfo {
    PullRequestInfo {
        number: pr.number,
        title: pr.title.clone().unwrap_or_default(),
        body: pr.body.clone(),
        author: pr.user.as_ref().map(|u| u.login.clone()),
        base_branch: pr.base.ref_field.clone(),
        head_branch: pr.head.ref_field.clone(),
        html_url: pr
            .html_url
            .as_ref()
            .map(|u| u.to_string())
            .unwrap_or_default(),
    }
}
