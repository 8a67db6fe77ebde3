//! Event record types
//!
//! An `EventRecord` is a single countdown target (festival, birthday, ...).
//! Records live in exactly one collection of the store: `pending` while they
//! wait for a moderator, `approved` once published.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::default_emoji;

/// Lifecycle status of an event record
///
/// Only `Pending` and `Approved` are ever persisted. `Rejected` and `Removed`
/// are terminal: the record is deleted and the status only appears on the
/// copy handed back to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum EventStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
    Removed,
}

impl EventStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventStatus::Pending => "pending",
            EventStatus::Approved => "approved",
            EventStatus::Rejected => "rejected",
            EventStatus::Removed => "removed",
        }
    }
}

impl std::fmt::Display for EventStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A submitted or published countdown event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventRecord {
    pub id: String,
    pub name: String,
    pub date: NaiveDate,
    #[serde(default = "default_emoji")]
    pub emoji: String,
    #[serde(default)]
    pub tagline: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub status: EventStatus,
    #[serde(rename = "submittedAt")]
    pub submitted_at: DateTime<Utc>,
    #[serde(rename = "approvedAt", default, skip_serializing_if = "Option::is_none")]
    pub approved_at: Option<DateTime<Utc>>,
}

impl EventRecord {
    /// Create a pending record with default display fields
    pub fn new(id: String, name: String, date: NaiveDate, submitted_at: DateTime<Utc>) -> Self {
        Self {
            id,
            name,
            date,
            emoji: default_emoji(),
            tagline: String::new(),
            image: String::new(),
            description: String::new(),
            status: EventStatus::Pending,
            submitted_at,
            approved_at: None,
        }
    }

    /// Move into the approved state, stamping `approvedAt`
    pub fn mark_approved(&mut self, at: DateTime<Utc>) {
        self.status = EventStatus::Approved;
        self.approved_at = Some(at);
    }

    /// Whole days from `today` until the event (negative once it has passed)
    pub fn days_until(&self, today: NaiveDate) -> i64 {
        (self.date - today).num_days()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_legacy_record_defaults() {
        // Shape written by the old dev server, without emoji/image/description
        let record: EventRecord = serde_json::from_value(json!({
            "id": "1734690000000",
            "name": "Salah Birthday",
            "date": "2025-12-15",
            "tagline": "Celebrating another year",
            "status": "approved",
            "submittedAt": "2024-12-20T10:00:00.000Z",
            "approvedAt": "2024-12-20T10:05:00.000Z",
            "unknownField": 42
        }))
        .unwrap();

        assert_eq!(record.emoji, "🎉");
        assert_eq!(record.image, "");
        assert_eq!(record.status, EventStatus::Approved);
        assert!(record.approved_at.is_some());
    }

    #[test]
    fn test_pending_record_omits_approved_at() {
        let record = EventRecord::new(
            "evt_1".to_string(),
            "Holi".to_string(),
            date("2099-03-01"),
            Utc::now(),
        );
        let value = serde_json::to_value(&record).unwrap();

        assert_eq!(value["status"], "pending");
        assert_eq!(value["date"], "2099-03-01");
        assert!(value.get("approvedAt").is_none());
        assert!(value.get("submittedAt").is_some());
    }

    #[test]
    fn test_mark_approved() {
        let mut record = EventRecord::new(
            "evt_1".to_string(),
            "Holi".to_string(),
            date("2099-03-01"),
            Utc::now(),
        );
        let at = Utc::now();
        record.mark_approved(at);

        assert_eq!(record.status, EventStatus::Approved);
        assert_eq!(record.approved_at, Some(at));
    }

    #[test]
    fn test_days_until() {
        let record = EventRecord::new(
            "evt_1".to_string(),
            "Christmas".to_string(),
            date("2026-12-25"),
            Utc::now(),
        );

        assert_eq!(record.days_until(date("2026-12-20")), 5);
        assert_eq!(record.days_until(date("2026-12-26")), -1);
    }

    #[test]
    fn test_status_display() {
        assert_eq!(EventStatus::Removed.to_string(), "removed");
        assert_eq!(EventStatus::Approved.to_string(), "approved");
    }
}
