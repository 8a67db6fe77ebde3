//! State transitions over a loaded store
//!
//! These functions only touch the in-memory document; the controller wraps
//! each one in a load/save cycle.

use chrono::{DateTime, Utc};
use ulid::Ulid;

use crate::error::{EventError, EventResult};
use crate::search::{resolve_exact, Named};
use crate::store::{Collection, EventStore};
use crate::types::{EventRecord, EventStatus};
use crate::validation::ValidatedSubmission;

/// Prefix of generated event ids
pub const ID_PREFIX: &str = "evt_";

/// Fresh id not used by any record in `store`
pub fn generate_id(store: &EventStore) -> String {
    loop {
        let id = format!("{ID_PREFIX}{}", Ulid::new());
        if !store.contains_id(&id) {
            return id;
        }
    }
}

fn ensure_slug_free(store: &EventStore, slug: &str) -> EventResult<()> {
    match resolve_exact(slug, &store.approved) {
        Some(_) => Err(EventError::SlugConflict {
            slug: slug.to_string(),
        }),
        None => Ok(()),
    }
}

/// (none) -> pending
pub fn submit(
    store: &mut EventStore,
    submission: ValidatedSubmission,
    now: DateTime<Utc>,
) -> EventResult<EventRecord> {
    ensure_slug_free(store, &submission.slug())?;

    let id = generate_id(store);
    let record = submission.into_record(id, now);
    store.append(Collection::Pending, record.clone());
    Ok(record)
}

/// pending -> approved, stamping `approvedAt`
pub fn approve(store: &mut EventStore, id: &str, now: DateTime<Utc>) -> EventResult<EventRecord> {
    let index = store
        .find_pending_index(id)
        .ok_or_else(|| EventError::not_found("Event"))?;

    ensure_slug_free(store, &store.pending[index].slug())?;

    let mut record = store
        .remove_at(Collection::Pending, index)
        .ok_or_else(|| EventError::not_found("Event"))?;
    record.mark_approved(now);
    store.append(Collection::Approved, record.clone());
    Ok(record)
}

/// pending -> deleted
pub fn reject(store: &mut EventStore, id: &str) -> EventResult<EventRecord> {
    take(store, Collection::Pending, id, EventStatus::Rejected)
}

/// approved -> deleted
pub fn remove(store: &mut EventStore, id: &str) -> EventResult<EventRecord> {
    take(store, Collection::Approved, id, EventStatus::Removed)
}

fn take(
    store: &mut EventStore,
    collection: Collection,
    id: &str,
    terminal: EventStatus,
) -> EventResult<EventRecord> {
    let mut record = store
        .find_index(collection, id)
        .and_then(|index| store.remove_at(collection, index))
        .ok_or_else(|| EventError::not_found("Event"))?;
    record.status = terminal;
    record.approved_at = None;
    Ok(record)
}
