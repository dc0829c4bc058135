//! Opt-in detection over pull-request descriptions.

/// Task-list line an author checks to request ownership of the files
/// their pull request adds. Matched literally, case-sensitive.
pub const OPT_IN_MARKER: &str = "- [x] Add me as codeowner of new files";

/// Whether the pull-request body carries the checked opt-in marker.
///
/// Absent and empty bodies never opt in. The check runs fresh on every
/// event, so editing the description grants or withdraws consent after
/// the pull request is opened.
pub fn wants_codeowner(pull_body: Option<&str>) -> bool {
    match pull_body {
        Some(body) => body.contains(OPT_IN_MARKER),
        None => false,
    }
}
