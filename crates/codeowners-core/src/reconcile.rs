//! CODEOWNERS text reconciliation.
//!
//! The CODEOWNERS format is one mapping per line, `<path> @<owner>`,
//! with blank lines allowed. Reconciliation is append-only: existing
//! lines are never reordered, rewritten, or deduplicated.

/// Append one ownership line per new file to the existing CODEOWNERS
/// text.
///
/// The existing text is preserved byte-for-byte, except that a missing
/// trailing newline is inserted before appending so the first new entry
/// starts on its own line. Empty input stays empty and gains no leading
/// blank line. Appending the same path across separate runs produces
/// repeated lines; collapsing them is deliberately not this function's
/// business.
pub fn reconcile(old_text: &str, new_files: &[String], owner: &str) -> String {
    let mut text = String::with_capacity(old_text.len() + new_files.len() * 32);
    text.push_str(old_text);
    if !text.is_empty() && !text.ends_with('\n') {
        text.push('\n');
    }

    for path in new_files {
        text.push_str(path);
        text.push_str(" @");
        text.push_str(owner);
        text.push('\n');
    }

    text
}
