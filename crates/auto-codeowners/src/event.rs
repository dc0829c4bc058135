//! Pull-request event payload decoding.

use anyhow::{Context, Result};
use serde::Deserialize;

/// Lifecycle action carried by a pull-request event.
///
/// Unknown actions (labeled, review_requested, ...) decode into `Other`
/// and map to a no-op instead of failing the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PullRequestAction {
    Opened,
    Reopened,
    Synchronize,
    Edited,
    Closed,
    #[serde(other)]
    Other,
}

/// The slice of a pull-request event this automation acts on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PullRequestEvent {
    pub action: PullRequestAction,
    pub number: u64,
}

#[derive(Debug, Deserialize)]
struct RawEvent {
    action: PullRequestAction,
    pull_request: Option<RawPullRef>,
}

#[derive(Debug, Deserialize)]
struct RawPullRef {
    number: u64,
}

impl PullRequestEvent {
    /// Decode an event from webhook payload JSON.
    ///
    /// A payload without a pull-request number is a configuration error:
    /// there is nothing the automation could act on.
    pub fn from_json(text: &str) -> Result<Self> {
        let raw: RawEvent = serde_json::from_str(text).context("malformed event payload")?;
        let number = raw
            .pull_request
            .map(|p| p.number)
            .context("event payload carries no pull-request number")?;

        Ok(Self {
            action: raw.action,
            number,
        })
    }

    /// Read and decode the payload file named by `GITHUB_EVENT_PATH`.
    pub fn from_env() -> Result<Self> {
        let path = std::env::var("GITHUB_EVENT_PATH").context("GITHUB_EVENT_PATH is not set")?;
        let text = std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read event payload at {}", path))?;
        Self::from_json(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decodes_known_actions() {
        let event =
            PullRequestEvent::from_json(r#"{"action": "opened", "pull_request": {"number": 42}}"#)
                .unwrap();
        assert_eq!(event.action, PullRequestAction::Opened);
        assert_eq!(event.number, 42);

        let event = PullRequestEvent::from_json(
            r#"{"action": "synchronize", "pull_request": {"number": 7}}"#,
        )
        .unwrap();
        assert_eq!(event.action, PullRequestAction::Synchronize);
    }

    #[test]
    fn test_unknown_action_decodes_to_other() {
        let event = PullRequestEvent::from_json(
            r#"{"action": "review_requested", "pull_request": {"number": 3}}"#,
        )
        .unwrap();
        assert_eq!(event.action, PullRequestAction::Other);
    }

    #[test]
    fn test_extra_payload_fields_are_ignored() {
        let event = PullRequestEvent::from_json(
            r#"{"action": "closed", "number": 99, "pull_request": {"number": 5, "title": "x"}, "repository": {}}"#,
        )
        .unwrap();
        assert_eq!(event.action, PullRequestAction::Closed);
        assert_eq!(event.number, 5);
    }

    #[test]
    fn test_missing_pull_request_is_an_error() {
        let err = PullRequestEvent::from_json(r#"{"action": "opened"}"#).unwrap_err();
        assert!(err.to_string().contains("no pull-request number"));
    }
}
