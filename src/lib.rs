//! Festival Countdown Server
//!
//! Visitors browse countdowns to recurring calendar events and submit new
//! ones; moderators approve, reject or remove them.
//!
//! # Features
//!
//! - **Moderated submissions**: pending -> approved lifecycle with explicit actions
//! - **Slug routing**: one normalization for every human-readable path segment
//! - **Atomic persistence**: the whole store is one JSON document replaced in a single rename
//! - **Festival catalog**: built-in festivals merged with approved community events
//!
//! # Modules
//!
//! - `types`: Event record, status and request payloads
//! - `store`: Pending/approved collections and storage backends
//! - `lifecycle`: Submit/approve/reject/remove transitions
//! - `validation`: Submission validation and defaults
//! - `search`: Slug derivation, exact and fuzzy lookup
//! - `catalog`: Built-in festivals and the merged listing
//! - `api`: Axum router and REST handlers
//! - `config`: Environment-based configuration
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use festival_countdown::{EventSubmission, JsonFileStore, LifecycleController};
//!
//! let controller = LifecycleController::new(Arc::new(JsonFileStore::new("events.json")));
//! let event = controller
//!     .submit(&EventSubmission::new("Holi", "2099-03-01"))
//!     .unwrap();
//! controller.approve(&event.id).unwrap();
//! let published = controller.find_approved_by_slug("holi").unwrap();
//! assert_eq!(published.id, event.id);
//! ```

pub mod api;
pub mod catalog;
pub mod config;
pub mod error;
pub mod lifecycle;
pub mod search;
pub mod store;
pub mod types;
pub mod utils;
pub mod validation;

// Re-export commonly used items at crate root
pub use config::AppConfig;
pub use error::{EventError, EventResult, StorageError, StorageResult};
pub use lifecycle::LifecycleController;
pub use search::to_slug;
pub use store::{EventStore, JsonFileStore, MemoryStore, StoreBackend};
pub use types::{EventRecord, EventStatus, EventSubmission, LifecycleAction};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
