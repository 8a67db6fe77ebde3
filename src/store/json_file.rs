//! JSON document backend
//!
//! Keeps the whole store in a single pretty-printed JSON file, replaced
//! atomically on every save.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

use super::{Collection, EventStore, StoreBackend};
use crate::error::{StorageError, StorageResult};
use crate::types::EventRecord;
use crate::utils::atomic::{atomic_write, remove_stale_temp};

/// Document as found on disk, before each record is checked
///
/// Older writers stored request bodies verbatim, so a single record may lack
/// a date or carry one in any format.
#[derive(Debug, Default, Deserialize)]
struct RawDocument {
    #[serde(default)]
    pending: Vec<Value>,
    #[serde(default)]
    approved: Vec<Value>,
}

/// Decode the records of one collection, skipping unreadable ones
fn decode_records(
    path: &Path,
    collection: Collection,
    values: Vec<Value>,
) -> (Vec<EventRecord>, usize) {
    let mut dropped = 0;
    let records = values
        .into_iter()
        .enumerate()
        .filter_map(|(index, value)| {
            let id = value.get("id").cloned().unwrap_or(Value::Null);
            match serde_json::from_value::<EventRecord>(value) {
                Ok(record) => Some(record),
                Err(e) => {
                    warn!(
                        path = %path.display(),
                        %collection,
                        index,
                        %id,
                        error = %e,
                        "dropping unreadable event record"
                    );
                    dropped += 1;
                    None
                }
            }
        })
        .collect();
    (records, dropped)
}

/// Store backed by one JSON file on disk
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Open the store, clearing any temp file left by an interrupted save
    pub fn open<P: AsRef<Path>>(path: P) -> StorageResult<Self> {
        let store = Self::new(path);
        if remove_stale_temp(&store.path)? {
            warn!(path = %store.path.display(), "removed temp file from an interrupted save");
        }
        Ok(store)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StoreBackend for JsonFileStore {
    fn load(&self) -> StorageResult<EventStore> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no event document yet, starting empty");
                return Ok(EventStore::new());
            }
            Err(e) => return Err(StorageError::io(&self.path, e)),
        };

        if content.trim().is_empty() {
            return Ok(EventStore::new());
        }

        let raw: RawDocument =
            serde_json::from_str(&content).map_err(|e| StorageError::json(&self.path, e))?;

        let (pending, dropped_pending) =
            decode_records(&self.path, Collection::Pending, raw.pending);
        let (approved, dropped_approved) =
            decode_records(&self.path, Collection::Approved, raw.approved);
        let mut store = EventStore { pending, approved };

        let repairs = dropped_pending + dropped_approved + store.normalize();
        if repairs > 0 {
            warn!(
                path = %self.path.display(),
                repairs,
                "event document violated store invariants, repaired in memory"
            );
        }

        debug!(
            pending = store.pending.len(),
            approved = store.approved.len(),
            "loaded event document"
        );
        Ok(store)
    }

    fn save(&self, store: &EventStore) -> StorageResult<()> {
        let content =
            serde_json::to_string_pretty(store).map_err(|e| StorageError::json(&self.path, e))?;
        atomic_write(&self.path, &content)?;

        debug!(
            pending = store.pending.len(),
            approved = store.approved.len(),
            "saved event document"
        );
        Ok(())
    }

    fn describe(&self) -> String {
        format!("file:{}", self.path.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::Collection;
    use crate::types::EventRecord;
    use chrono::{NaiveDate, Utc};
    use tempfile::TempDir;

    fn record(id: &str, name: &str) -> EventRecord {
        EventRecord::new(
            id.to_string(),
            name.to_string(),
            NaiveDate::from_ymd_opt(2099, 3, 1).unwrap(),
            Utc::now(),
        )
    }

    #[test]
    fn test_missing_file_is_empty_store() {
        let temp_dir = TempDir::new().unwrap();
        let backend = JsonFileStore::new(temp_dir.path().join("events.json"));

        let store = backend.load().unwrap();
        assert!(store.is_empty());
        // Loading alone never creates the file
        assert!(!backend.path().exists());
    }

    #[test]
    fn test_blank_file_is_empty_store() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("events.json");
        fs::write(&path, "  \n").unwrap();

        assert!(JsonFileStore::new(&path).load().unwrap().is_empty());
    }

    #[test]
    fn test_save_then_load() {
        let temp_dir = TempDir::new().unwrap();
        let backend = JsonFileStore::new(temp_dir.path().join("events.json"));

        let mut store = EventStore::new();
        store.append(Collection::Pending, record("a", "Holi"));
        backend.save(&store).unwrap();

        assert_eq!(backend.load().unwrap(), store);
    }

    #[test]
    fn test_save_of_load_is_idempotent() {
        let temp_dir = TempDir::new().unwrap();
        let backend = JsonFileStore::new(temp_dir.path().join("events.json"));

        let mut store = EventStore::new();
        store.append(Collection::Pending, record("a", "Holi"));
        let mut approved = record("b", "Diwali");
        approved.mark_approved(Utc::now());
        store.append(Collection::Approved, approved);
        backend.save(&store).unwrap();

        let first = backend.load().unwrap();
        backend.save(&first).unwrap();
        let second = backend.load().unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_corrupt_document_is_storage_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("events.json");
        fs::write(&path, "{ not json").unwrap();

        let err = JsonFileStore::new(&path).load().unwrap_err();
        assert!(matches!(err, StorageError::Json { .. }));
    }

    #[test]
    fn test_reads_legacy_document() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("events.json");
        fs::write(
            &path,
            r#"{
  "approved": [
    {
      "id": "1",
      "name": "Salah Birthday",
      "date": "2025-12-15",
      "emoji": "🎉",
      "status": "approved",
      "submittedAt": "2024-12-20T10:00:00.000Z"
    }
  ]
}"#,
        )
        .unwrap();

        let store = JsonFileStore::new(&path).load().unwrap();
        assert!(store.pending.is_empty());
        assert_eq!(store.approved.len(), 1);
        // approvedAt backfilled from submittedAt
        assert_eq!(
            store.approved[0].approved_at,
            Some(store.approved[0].submitted_at)
        );
    }

    #[test]
    fn test_unreadable_records_are_dropped() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("events.json");
        fs::write(
            &path,
            r#"{
  "pending": [
    {"id": "1734690000000", "name": "Spam", "submittedAt": "2024-12-20T10:00:00.000Z"},
    {"id": "1734690000001", "name": "Typo", "date": "15/12/2025", "submittedAt": "2024-12-20T10:00:00.000Z"},
    {"id": "1734690000002", "name": "Holi", "date": "2099-03-01", "submittedAt": "2024-12-20T10:00:00.000Z"}
  ],
  "approved": [
    {"id": "1734690000003", "name": "Blank", "date": "", "submittedAt": "2024-12-20T10:00:00.000Z"}
  ]
}"#,
        )
        .unwrap();

        let backend = JsonFileStore::new(&path);
        let store = backend.load().unwrap();
        assert_eq!(store.pending.len(), 1);
        assert_eq!(store.pending[0].name, "Holi");
        assert!(store.approved.is_empty());

        // Next save writes the cleaned document
        backend.save(&store).unwrap();
        assert_eq!(backend.load().unwrap(), store);
        assert!(!fs::read_to_string(&path).unwrap().contains("Spam"));
    }

    #[test]
    fn test_open_removes_stale_temp() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("events.json");
        fs::write(path.with_extension("tmp"), "partial").unwrap();

        JsonFileStore::open(&path).unwrap();
        assert!(!path.with_extension("tmp").exists());
    }
}
