//! GitHub API client for the auto-codeowners automation
//!
//! This crate provides a trait-based GitHub API client. The
//! `GitHubClient` trait covers exactly the hosting-API capabilities the
//! automation consumes — pull-request metadata and diffs, repository
//! content, the Git Data API (trees, commits, refs), and pull-request
//! creation — so the orchestrating controller can be exercised against a
//! mock without touching the network.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │              GitHubClient trait                  │
//! │  - fetch_pull_request() / fetch_diff()           │
//! │  - file_content() / create_tree() / ...          │
//! └─────────────────────────────────────────────────┘
//!                        │
//!                        ▼
//!              ┌─────────────────┐
//!              │ OctocrabClient  │
//!              │ (direct API)    │
//!              └─────────────────┘
//! ```

pub mod client;
pub mod error;
pub mod octocrab_client;
pub mod types;

pub use client::GitHubClient;
pub use error::ApiError;
pub use octocrab_client::OctocrabClient;
pub use types::{CommitInfo, PullRequestInfo};

// Re-export octocrab so consumers don't need to depend on it directly
pub use octocrab;
