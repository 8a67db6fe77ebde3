//! Event Store - persistence of the pending/approved collections
//!
//! The store is always read and written as a whole document. Backends only
//! know how to load and replace that document; all status logic lives in the
//! lifecycle controller.

mod collections;
mod json_file;
mod memory;

pub use collections::{Collection, EventStore};
pub use json_file::JsonFileStore;
pub use memory::MemoryStore;

use crate::error::StorageResult;

/// Durable home of the event document
pub trait StoreBackend: Send + Sync {
    /// Read the current document; a backend with no data yields an empty store
    fn load(&self) -> StorageResult<EventStore>;

    /// Replace the whole document in one operation
    fn save(&self, store: &EventStore) -> StorageResult<()>;

    /// Short label for logs
    fn describe(&self) -> String;
}
