//! The pending/approved record pair

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::types::{EventRecord, EventStatus};

/// Which half of the store a record lives in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Pending,
    Approved,
}

impl Collection {
    pub fn as_str(&self) -> &'static str {
        match self {
            Collection::Pending => "pending",
            Collection::Approved => "approved",
        }
    }

    /// Status every record in this collection carries
    pub fn status(&self) -> EventStatus {
        match self {
            Collection::Pending => EventStatus::Pending,
            Collection::Approved => EventStatus::Approved,
        }
    }
}

impl std::fmt::Display for Collection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Both collections of event records, persisted as one JSON document
///
/// `pending` is in submission order, `approved` in approval order. An id is
/// present in at most one of them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EventStore {
    #[serde(default)]
    pub pending: Vec<EventRecord>,
    #[serde(default)]
    pub approved: Vec<EventRecord>,
}

impl EventStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self, collection: Collection) -> &[EventRecord] {
        match collection {
            Collection::Pending => &self.pending,
            Collection::Approved => &self.approved,
        }
    }

    fn records_mut(&mut self, collection: Collection) -> &mut Vec<EventRecord> {
        match collection {
            Collection::Pending => &mut self.pending,
            Collection::Approved => &mut self.approved,
        }
    }

    /// Position of `id` in `collection`
    pub fn find_index(&self, collection: Collection, id: &str) -> Option<usize> {
        self.records(collection).iter().position(|r| r.id == id)
    }

    pub fn find_pending_index(&self, id: &str) -> Option<usize> {
        self.find_index(Collection::Pending, id)
    }

    pub fn find_approved_index(&self, id: &str) -> Option<usize> {
        self.find_index(Collection::Approved, id)
    }

    /// Whether `id` is used in either collection
    pub fn contains_id(&self, id: &str) -> bool {
        self.find_pending_index(id).is_some() || self.find_approved_index(id).is_some()
    }

    /// Add a record to the end of `collection`
    pub fn append(&mut self, collection: Collection, record: EventRecord) {
        self.records_mut(collection).push(record);
    }

    /// Remove exactly one record, keeping the others in order
    pub fn remove_at(&mut self, collection: Collection, index: usize) -> Option<EventRecord> {
        let records = self.records_mut(collection);
        if index < records.len() {
            Some(records.remove(index))
        } else {
            None
        }
    }

    /// Total number of records in both collections
    pub fn len(&self) -> usize {
        self.pending.len() + self.approved.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty() && self.approved.is_empty()
    }

    /// Repair a freshly loaded document so the store invariants hold
    ///
    /// Status follows collection membership, `approvedAt` is present exactly on
    /// approved records (falling back to `submittedAt`), and duplicate ids keep
    /// their first occurrence with `approved` taking precedence. Returns the
    /// number of repairs made.
    pub fn normalize(&mut self) -> usize {
        let mut repairs = 0;
        let mut seen: HashSet<String> = HashSet::new();

        for collection in [Collection::Approved, Collection::Pending] {
            self.records_mut(collection).retain(|record| {
                let first = seen.insert(record.id.clone());
                if !first {
                    repairs += 1;
                }
                first
            });
        }

        for record in &mut self.approved {
            if record.status != EventStatus::Approved {
                record.status = EventStatus::Approved;
                repairs += 1;
            }
            if record.approved_at.is_none() {
                record.approved_at = Some(record.submitted_at);
                repairs += 1;
            }
        }

        for record in &mut self.pending {
            if record.status != EventStatus::Pending {
                record.status = EventStatus::Pending;
                repairs += 1;
            }
            if record.approved_at.take().is_some() {
                repairs += 1;
            }
        }

        repairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Utc};

    fn record(id: &str, name: &str) -> EventRecord {
        EventRecord::new(
            id.to_string(),
            name.to_string(),
            NaiveDate::from_ymd_opt(2099, 3, 1).unwrap(),
            Utc::now(),
        )
    }

    #[test]
    fn test_append_preserves_order() {
        let mut store = EventStore::new();
        store.append(Collection::Pending, record("a", "First"));
        store.append(Collection::Pending, record("b", "Second"));
        store.append(Collection::Pending, record("c", "Third"));

        let ids: Vec<&str> = store.pending.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_find_indexes() {
        let mut store = EventStore::new();
        store.append(Collection::Pending, record("a", "First"));
        store.append(Collection::Approved, record("b", "Second"));

        assert_eq!(store.find_pending_index("a"), Some(0));
        assert_eq!(store.find_pending_index("b"), None);
        assert_eq!(store.find_approved_index("b"), Some(0));
        assert!(store.contains_id("b"));
        assert!(!store.contains_id("z"));
    }

    #[test]
    fn test_remove_at_keeps_relative_order() {
        let mut store = EventStore::new();
        for id in ["a", "b", "c"] {
            store.append(Collection::Pending, record(id, id));
        }

        let removed = store.remove_at(Collection::Pending, 1).unwrap();
        assert_eq!(removed.id, "b");

        let ids: Vec<&str> = store.pending.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "c"]);
        assert!(store.remove_at(Collection::Pending, 5).is_none());
    }

    #[test]
    fn test_normalize_repairs_status_and_stamps() {
        let mut store = EventStore::new();
        let mut stray = record("a", "Stray");
        stray.status = EventStatus::Pending;
        store.append(Collection::Approved, stray);

        let mut premature = record("b", "Premature");
        premature.approved_at = Some(Utc::now());
        store.append(Collection::Pending, premature);

        let repairs = store.normalize();
        assert_eq!(repairs, 3);
        assert_eq!(store.approved[0].status, EventStatus::Approved);
        assert_eq!(store.approved[0].approved_at, Some(store.approved[0].submitted_at));
        assert!(store.pending[0].approved_at.is_none());

        // Second pass has nothing left to fix
        assert_eq!(store.normalize(), 0);
    }

    #[test]
    fn test_normalize_drops_duplicate_ids() {
        let mut store = EventStore::new();
        store.append(Collection::Pending, record("dup", "Pending copy"));
        store.append(Collection::Pending, record("dup", "Second pending copy"));
        let mut approved = record("dup", "Approved copy");
        approved.mark_approved(Utc::now());
        store.append(Collection::Approved, approved);

        assert_eq!(store.normalize(), 2);
        assert!(store.pending.is_empty());
        assert_eq!(store.approved.len(), 1);
        assert_eq!(store.approved[0].name, "Approved copy");
    }

    #[test]
    fn test_document_shape() {
        let store: EventStore = serde_json::from_str(r#"{"approved": []}"#).unwrap();
        assert!(store.is_empty());

        let value = serde_json::to_value(EventStore::new()).unwrap();
        assert!(value["pending"].as_array().unwrap().is_empty());
        assert!(value["approved"].as_array().unwrap().is_empty());
    }
}
