//! Decision logic for automatic CODEOWNERS attribution
//!
//! This crate holds the pure parts of the automation: deciding which files
//! a pull request adds, whether its author asked to own them, what the
//! updated CODEOWNERS text looks like, and how the companion branch is
//! named. Nothing in here performs I/O — the hosting API lives behind the
//! `GitHubClient` trait in `codeowners-client`, and the per-event
//! orchestration lives in the `auto-codeowners` binary.

pub mod branch;
pub mod diff;
pub mod optin;
pub mod reconcile;

pub use branch::branch_name;
pub use diff::{added_files, DiffError};
pub use optin::{wants_codeowner, OPT_IN_MARKER};
pub use reconcile::reconcile;
