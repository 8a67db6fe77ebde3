//! Festival catalog
//!
//! Public listings combine a small set of built-in festivals with the
//! approved community events. Both are keyed by slug: an approved event whose
//! slug matches a built-in replaces it in place, everything else is appended
//! in approval order. When several approved events share a slug, the first
//! approved one is listed.

mod builtin;

use chrono::NaiveDate;
use serde::Serialize;

use crate::search::Named;
use crate::types::EventRecord;

pub use builtin::{builtin_festivals, BuiltinFestival, BUILTIN_FESTIVALS};

/// Where a catalog entry came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntrySource {
    Builtin,
    Community,
}

/// One countdown target as shown to visitors
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogEntry {
    pub slug: String,
    pub name: String,
    pub date: NaiveDate,
    pub emoji: String,
    pub tagline: String,
    pub image: String,
    pub description: String,
    #[serde(rename = "daysUntil")]
    pub days_until: i64,
    pub source: EntrySource,
}

impl Named for CatalogEntry {
    fn display_name(&self) -> &str {
        &self.name
    }

    fn slug(&self) -> String {
        self.slug.clone()
    }
}

impl CatalogEntry {
    fn from_record(record: &EventRecord, today: NaiveDate) -> Self {
        let description = if record.description.is_empty() {
            record.tagline.clone()
        } else {
            record.description.clone()
        };

        Self {
            slug: record.slug(),
            name: record.name.clone(),
            date: record.date,
            emoji: record.emoji.clone(),
            tagline: record.tagline.clone(),
            image: record.image.clone(),
            description,
            days_until: record.days_until(today),
            source: EntrySource::Community,
        }
    }

    fn from_builtin(festival: &BuiltinFestival, today: NaiveDate) -> Option<Self> {
        let date = festival.next_occurrence(today)?;
        Some(Self {
            slug: festival.slug(),
            name: festival.name.to_string(),
            date,
            emoji: festival.emoji.to_string(),
            tagline: festival.tagline.to_string(),
            image: festival.image.to_string(),
            description: festival.description.to_string(),
            days_until: (date - today).num_days(),
            source: EntrySource::Builtin,
        })
    }
}

/// Merge built-in festivals with approved events by slug
pub fn merge_catalog(
    builtins: &[BuiltinFestival],
    approved: &[EventRecord],
    today: NaiveDate,
) -> Vec<CatalogEntry> {
    let mut entries: Vec<CatalogEntry> = builtins
        .iter()
        .filter_map(|festival| CatalogEntry::from_builtin(festival, today))
        .collect();

    for record in approved {
        let entry = CatalogEntry::from_record(record, today);
        match entries.iter_mut().find(|existing| existing.slug == entry.slug) {
            Some(existing) if existing.source == EntrySource::Builtin => *existing = entry,
            // Earlier approval keeps the slug
            Some(_) => {}
            None => entries.push(entry),
        }
    }

    entries
}
