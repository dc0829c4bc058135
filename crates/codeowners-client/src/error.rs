//! Client error taxonomy.
//!
//! Not-found outcomes are deliberately not errors here: `file_content`
//! returns `None`, `branch_exists` returns `false`, and `delete_branch`
//! tolerates an already-absent ref. What remains is fatal.

use thiserror::Error;

/// Errors surfaced by `GitHubClient` implementations.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The content endpoint resolved the path to a directory, submodule,
    /// or symlink instead of a single regular file.
    #[error("resource at path {path} is not a file")]
    NotAFile { path: String },

    /// The API answered, but without a field the automation needs.
    #[error("unexpected GitHub response: {0}")]
    UnexpectedResponse(String),

    /// Transport or API failure, propagated without retry.
    #[error(transparent)]
    Api(#[from] octocrab::Error),
}
