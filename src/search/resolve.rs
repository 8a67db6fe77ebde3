//! Slug lookups over a record collection

use super::slug::{to_slug, Named};

/// First record whose derived slug equals `slug`
///
/// This is the authoritative lookup used for routing. When legacy data holds
/// two records with the same slug, collection order decides.
pub fn resolve_exact<'a, T: Named>(slug: &str, records: &'a [T]) -> Option<&'a T> {
    if slug.is_empty() {
        return None;
    }
    records.iter().find(|record| record.slug() == slug)
}

/// First record whose name or slug contains `query`, case-insensitively
///
/// Only meant for user-facing search, never for routing.
pub fn resolve_fuzzy<'a, T: Named>(query: &str, records: &'a [T]) -> Option<&'a T> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return None;
    }

    records.iter().find(|record| {
        record.display_name().to_lowercase().contains(&query) || record.slug().contains(&query)
    })
}

/// Exact slug match on the normalized query, falling back to fuzzy matching
pub fn search<'a, T: Named>(query: &str, records: &'a [T]) -> Option<&'a T> {
    resolve_exact(&to_slug(query), records).or_else(|| resolve_fuzzy(query, records))
}
