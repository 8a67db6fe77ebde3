//! Lifecycle Controller - the only component that changes an event's status
//!
//! ```text
//!         submit
//!   (none) ------> pending
//!   pending --approve--> approved
//!   pending --reject---> (deleted)
//!   approved --remove--> (deleted)
//! ```
//!
//! Every mutating call is one load -> mutate -> save cycle over the whole
//! store, serialized by a process-wide write lock so concurrent requests
//! cannot overwrite each other's changes. Reads take no lock.

mod transitions;

use std::sync::Arc;

use parking_lot::Mutex;
use tracing::info;

use crate::error::{EventError, EventResult};
use crate::search::resolve_exact;
use crate::store::{EventStore, StoreBackend};
use crate::types::{EventRecord, EventSubmission, LifecycleAction, ModerationRequest};
use crate::utils::time;
use crate::validation::{validate_submission, ValidationPolicy};

pub use transitions::{generate_id, ID_PREFIX};

pub struct LifecycleController {
    backend: Arc<dyn StoreBackend>,
    policy: ValidationPolicy,
    write_lock: Mutex<()>,
}

impl LifecycleController {
    /// Create a controller with the default validation policy
    pub fn new(backend: Arc<dyn StoreBackend>) -> Self {
        Self::with_policy(backend, ValidationPolicy::default())
    }

    pub fn with_policy(backend: Arc<dyn StoreBackend>, policy: ValidationPolicy) -> Self {
        Self {
            backend,
            policy,
            write_lock: Mutex::new(()),
        }
    }

    pub fn policy(&self) -> &ValidationPolicy {
        &self.policy
    }

    pub fn backend(&self) -> &Arc<dyn StoreBackend> {
        &self.backend
    }

    /// Current content of both collections
    pub fn snapshot(&self) -> EventResult<EventStore> {
        Ok(self.backend.load()?)
    }

    /// Approved records in approval order
    pub fn approved(&self) -> EventResult<Vec<EventRecord>> {
        Ok(self.backend.load()?.approved)
    }

    /// Approved record addressed by `slug`
    pub fn find_approved_by_slug(&self, slug: &str) -> EventResult<EventRecord> {
        let store = self.backend.load()?;
        resolve_exact(slug, &store.approved)
            .cloned()
            .ok_or_else(|| EventError::not_found("Event"))
    }

    fn mutate<T>(&self, f: impl FnOnce(&mut EventStore) -> EventResult<T>) -> EventResult<T> {
        let _guard = self.write_lock.lock();
        let mut store = self.backend.load()?;
        let output = f(&mut store)?;
        self.backend.save(&store)?;
        Ok(output)
    }

    /// Validate raw form fields and queue the event for moderation
    pub fn submit(&self, submission: &EventSubmission) -> EventResult<EventRecord> {
        let validated = validate_submission(submission, time::today(), &self.policy)?;
        let record = self.mutate(|store| transitions::submit(store, validated, time::now()))?;

        info!(id = %record.id, name = %record.name, date = %record.date, "event submitted");
        Ok(record)
    }

    /// Publish a pending event
    pub fn approve(&self, id: &str) -> EventResult<EventRecord> {
        let record = self.mutate(|store| transitions::approve(store, id, time::now()))?;
        info!(id = %record.id, name = %record.name, "event approved");
        Ok(record)
    }

    /// Drop a pending event without a trace
    pub fn reject(&self, id: &str) -> EventResult<EventRecord> {
        let record = self.mutate(|store| transitions::reject(store, id))?;
        info!(id = %record.id, name = %record.name, "event rejected");
        Ok(record)
    }

    /// Unpublish an approved event
    pub fn remove(&self, id: &str) -> EventResult<EventRecord> {
        let record = self.mutate(|store| transitions::remove(store, id))?;
        info!(id = %record.id, name = %record.name, "event removed");
        Ok(record)
    }

    pub fn apply(&self, id: &str, action: LifecycleAction) -> EventResult<EventRecord> {
        match action {
            LifecycleAction::Approve => self.approve(id),
            LifecycleAction::Reject => self.reject(id),
            LifecycleAction::Remove => self.remove(id),
        }
    }

    /// Handle a moderator request carrying a raw action token
    pub fn moderate(
        &self,
        request: &ModerationRequest,
    ) -> EventResult<(LifecycleAction, EventRecord)> {
        let action: LifecycleAction = request.action.as_deref().unwrap_or("missing").parse()?;

        let id = request
            .id
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .ok_or_else(|| EventError::validation("Event id is required"))?;

        let record = self.apply(id, action)?;
        Ok((action, record))
    }
}
