//! Request payloads for submitting and moderating events

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EventError;

/// Raw form fields of a new event submission
///
/// Every field is optional at the wire level so that a missing `name` or
/// `date` surfaces as a validation error instead of a deserialization error.
/// Server-owned fields (`id`, `status`, timestamps) are not accepted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EventSubmission {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub emoji: Option<String>,
    #[serde(default)]
    pub tagline: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl EventSubmission {
    /// Submission with just the two required fields
    pub fn new(name: impl Into<String>, date: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            date: Some(date.into()),
            ..Default::default()
        }
    }

    pub fn with_tagline(mut self, tagline: impl Into<String>) -> Self {
        self.tagline = Some(tagline.into());
        self
    }

    pub fn with_emoji(mut self, emoji: impl Into<String>) -> Self {
        self.emoji = Some(emoji.into());
        self
    }
}

/// Moderator decision on an event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LifecycleAction {
    /// pending -> approved
    Approve,
    /// pending -> deleted
    Reject,
    /// approved -> deleted
    Remove,
}

impl LifecycleAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            LifecycleAction::Approve => "approve",
            LifecycleAction::Reject => "reject",
            LifecycleAction::Remove => "remove",
        }
    }

    /// Confirmation message returned to the moderator
    pub fn success_message(&self) -> &'static str {
        match self {
            LifecycleAction::Approve => "Event approved successfully",
            LifecycleAction::Reject => "Event rejected",
            LifecycleAction::Remove => "Event removed successfully",
        }
    }
}

impl FromStr for LifecycleAction {
    type Err = EventError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "approve" => Ok(LifecycleAction::Approve),
            "reject" => Ok(LifecycleAction::Reject),
            "remove" => Ok(LifecycleAction::Remove),
            other => Err(EventError::invalid_action(other)),
        }
    }
}

impl std::fmt::Display for LifecycleAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Body of `PUT /events`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ModerationRequest {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub action: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_actions() {
        assert_eq!("approve".parse::<LifecycleAction>().unwrap(), LifecycleAction::Approve);
        assert_eq!("reject".parse::<LifecycleAction>().unwrap(), LifecycleAction::Reject);
        assert_eq!("remove".parse::<LifecycleAction>().unwrap(), LifecycleAction::Remove);
    }

    #[test]
    fn test_unknown_action_is_rejected() {
        let err = "publish".parse::<LifecycleAction>().unwrap_err();
        assert!(matches!(err, EventError::InvalidAction { ref action } if action == "publish"));

        // Case sensitive, like the wire format
        assert!("Approve".parse::<LifecycleAction>().is_err());
    }

    #[test]
    fn test_submission_ignores_server_fields() {
        let submission: EventSubmission = serde_json::from_str(
            r#"{"name":"Holi","date":"2099-03-01","id":"hijack","status":"approved"}"#,
        )
        .unwrap();

        assert_eq!(submission.name.as_deref(), Some("Holi"));
        assert_eq!(submission.date.as_deref(), Some("2099-03-01"));
        assert!(submission.emoji.is_none());
    }
}
