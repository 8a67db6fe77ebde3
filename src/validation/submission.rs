//! Submission validation and defaulting

use chrono::{DateTime, NaiveDate, Utc};

use crate::error::{EventError, EventResult};
use crate::search::to_slug;
use crate::types::{EventRecord, EventStatus, EventSubmission, DEFAULT_EMOJI};
use crate::utils::time::parse_event_date;

/// Rules applied to new submissions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationPolicy {
    /// Reject dates that are not strictly after today
    pub require_future_date: bool,
}

impl Default for ValidationPolicy {
    fn default() -> Self {
        Self {
            require_future_date: true,
        }
    }
}

/// A submission that passed validation, with defaults applied
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedSubmission {
    pub name: String,
    pub date: NaiveDate,
    pub emoji: String,
    pub tagline: String,
    pub image: String,
    pub description: String,
}

impl ValidatedSubmission {
    pub fn slug(&self) -> String {
        to_slug(&self.name)
    }

    /// Build the pending record stored for this submission
    pub fn into_record(self, id: String, submitted_at: DateTime<Utc>) -> EventRecord {
        EventRecord {
            id,
            name: self.name,
            date: self.date,
            emoji: self.emoji,
            tagline: self.tagline,
            image: self.image,
            description: self.description,
            status: EventStatus::Pending,
            submitted_at,
            approved_at: None,
        }
    }
}

fn non_blank(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// Check required fields and apply display defaults
pub fn validate_submission(
    submission: &EventSubmission,
    today: NaiveDate,
    policy: &ValidationPolicy,
) -> EventResult<ValidatedSubmission> {
    let name = non_blank(&submission.name);
    let raw_date = non_blank(&submission.date);

    let (name, raw_date) = match (name, raw_date) {
        (Some(name), Some(raw_date)) => (name, raw_date),
        _ => {
            return Err(EventError::validation(
                "Please fill in the required fields (Name and Date)",
            ))
        }
    };

    if to_slug(&name).is_empty() {
        return Err(EventError::validation(
            "Event name must contain at least one letter or digit",
        ));
    }

    let date = parse_event_date(&raw_date).ok_or_else(|| {
        EventError::validation(format!("Invalid date '{raw_date}', expected YYYY-MM-DD"))
    })?;

    if policy.require_future_date && date <= today {
        return Err(EventError::validation(
            "Please select a future date for the event",
        ));
    }

    let tagline = non_blank(&submission.tagline).unwrap_or_default();
    let description = non_blank(&submission.description).unwrap_or_else(|| tagline.clone());

    Ok(ValidatedSubmission {
        name,
        date,
        emoji: non_blank(&submission.emoji).unwrap_or_else(|| DEFAULT_EMOJI.to_string()),
        tagline,
        image: non_blank(&submission.image).unwrap_or_default(),
        description,
    })
}
