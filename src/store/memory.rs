//! In-process backend
//!
//! Holds the document in memory only; state resets when the process exits.
//! Used for ephemeral deployments and tests.

use parking_lot::Mutex;

use super::{EventStore, StoreBackend};
use crate::error::StorageResult;

#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: Mutex<EventStore>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing document
    pub fn with_store(mut store: EventStore) -> Self {
        store.normalize();
        Self {
            inner: Mutex::new(store),
        }
    }
}

impl StoreBackend for MemoryStore {
    fn load(&self) -> StorageResult<EventStore> {
        Ok(self.inner.lock().clone())
    }

    fn save(&self, store: &EventStore) -> StorageResult<()> {
        *self.inner.lock() = store.clone();
        Ok(())
    }

    fn describe(&self) -> String {
        "memory".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::Collection;
    use crate::types::EventRecord;
    use chrono::{NaiveDate, Utc};

    #[test]
    fn test_load_returns_snapshot() {
        let backend = MemoryStore::new();
        let mut store = backend.load().unwrap();
        store.append(
            Collection::Pending,
            EventRecord::new(
                "a".to_string(),
                "Holi".to_string(),
                NaiveDate::from_ymd_opt(2099, 3, 1).unwrap(),
                Utc::now(),
            ),
        );

        // Not visible until saved
        assert!(backend.load().unwrap().is_empty());

        backend.save(&store).unwrap();
        assert_eq!(backend.load().unwrap().pending.len(), 1);
    }

    #[test]
    fn test_with_store_normalizes() {
        let mut store = EventStore::new();
        let mut record = EventRecord::new(
            "a".to_string(),
            "Holi".to_string(),
            NaiveDate::from_ymd_opt(2099, 3, 1).unwrap(),
            Utc::now(),
        );
        record.approved_at = Some(Utc::now());
        store.append(Collection::Pending, record);

        let backend = MemoryStore::with_store(store);
        assert!(backend.load().unwrap().pending[0].approved_at.is_none());
    }
}
