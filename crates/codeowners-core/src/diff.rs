//! Extract newly added files from unified diff text (as returned by the
//! GitHub diff media type).

use thiserror::Error;
use unidiff::{PatchSet, PatchedFile};

/// Errors that can occur while analyzing a diff.
#[derive(Debug, Error)]
pub enum DiffError {
    #[error("failed to parse diff: {0}")]
    Malformed(String),
}

/// Return the target paths of every brand-new file in the diff, in diff
/// order.
///
/// Only true additions qualify: modified, deleted, and renamed files are
/// excluded, even though a rename introduces a path that did not exist
/// before.
///
/// # Example
/// ```ignore
/// let paths = added_files(&diff_text)?;
/// println!("{} new files", paths.len());
/// ```
pub fn added_files(diff_text: &str) -> Result<Vec<String>, DiffError> {
    let mut patch_set = PatchSet::new();
    patch_set
        .parse(diff_text)
        .map_err(|e| DiffError::Malformed(e.to_string()))?;

    Ok(patch_set
        .files()
        .iter()
        .filter(|file| is_added(file))
        .map(|file| clean_path(&file.target_file))
        .collect())
}

/// A file counts as added when its source side is the null path. Renames
/// carry a real source path and therefore never match.
fn is_added(file: &PatchedFile) -> bool {
    let source = clean_path(&file.source_file);
    let target = clean_path(&file.target_file);
    (source == "/dev/null" || source.is_empty()) && target != "/dev/null"
}

/// Clean the path by removing a/b prefixes from git diff output.
fn clean_path(path: &str) -> String {
    let path = path.trim();

    if let Some(stripped) = path.strip_prefix("a/") {
        return stripped.to_string();
    }
    if let Some(stripped) = path.strip_prefix("b/") {
        return stripped.to_string();
    }

    path.to_string()
}
