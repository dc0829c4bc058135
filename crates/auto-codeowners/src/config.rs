//! Environment-driven configuration.
//!
//! The automation is configured the way GitHub Actions passes inputs:
//! `INPUT_*` variables plus the ambient `GITHUB_*` context. Everything is
//! resolved once at startup into an immutable `Config` that gets passed
//! explicitly to the controller.

use anyhow::{bail, Context, Result};

/// Companion branch prefix used when `INPUT_BRANCH_PREFIX` is unset.
pub const DEFAULT_BRANCH_PREFIX: &str = "auto-codeowners";

/// CODEOWNERS location used when `INPUT_CODEOWNERS_PATH` is unset.
pub const DEFAULT_CODEOWNERS_PATH: &str = "CODEOWNERS";

/// Resolved process configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// API credential.
    pub token: String,

    /// Repository owner, from `GITHUB_REPOSITORY`.
    pub repo_owner: String,

    /// Repository name, from `GITHUB_REPOSITORY`.
    pub repo_name: String,

    /// Base branch override. `None` means use the repository's default
    /// branch, resolved per run.
    pub base_branch: Option<String>,

    /// Prefix for companion branch names.
    pub branch_prefix: String,

    /// Path of the CODEOWNERS file within the repository.
    pub codeowners_path: String,
}

impl Config {
    /// Read configuration from the environment.
    ///
    /// The token and `GITHUB_REPOSITORY` are required; everything else
    /// has a default. Blank values count as unset.
    pub fn from_env() -> Result<Self> {
        let token = optional_var("INPUT_TOKEN")
            .or_else(|| optional_var("GITHUB_TOKEN"))
            .context("no API token: set INPUT_TOKEN or GITHUB_TOKEN")?;

        let repository =
            std::env::var("GITHUB_REPOSITORY").context("GITHUB_REPOSITORY is not set")?;
        let (repo_owner, repo_name) = split_repository(&repository)?;

        Ok(Self {
            token,
            repo_owner,
            repo_name,
            base_branch: optional_var("INPUT_BASE_BRANCH"),
            branch_prefix: optional_var("INPUT_BRANCH_PREFIX")
                .unwrap_or_else(|| DEFAULT_BRANCH_PREFIX.to_string()),
            codeowners_path: optional_var("INPUT_CODEOWNERS_PATH")
                .unwrap_or_else(|| DEFAULT_CODEOWNERS_PATH.to_string()),
        })
    }
}

/// Read an env var, treating blank values as unset.
fn optional_var(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

/// Split `GITHUB_REPOSITORY` into its owner and name parts.
fn split_repository(repository: &str) -> Result<(String, String)> {
    let parts: Vec<&str> = repository.split('/').collect();
    if parts.len() != 2 || parts[0].is_empty() || parts[1].is_empty() {
        bail!("Invalid GITHUB_REPOSITORY format: {}", repository);
    }
    Ok((parts[0].to_string(), parts[1].to_string()))
}
