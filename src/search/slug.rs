//! Slug derivation
//!
//! Slugs are never stored. They are derived from the display name every time
//! they are needed, so this is the only place the normalization lives.

/// Derive the URL-safe slug for a display name
///
/// Lowercases, drops everything except ASCII alphanumerics, `_`, whitespace
/// and `-`, turns whitespace runs into a single `-`, collapses repeated `-`
/// and trims hyphens from both ends.
pub fn to_slug(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_hyphen = false;

    for c in name.chars().flat_map(char::to_lowercase) {
        if c.is_whitespace() || c == '-' {
            pending_hyphen = true;
        } else if c.is_ascii_alphanumeric() || c == '_' {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(c);
        }
    }

    slug
}

/// Anything with a display name that can be addressed by slug
pub trait Named {
    fn display_name(&self) -> &str;

    fn slug(&self) -> String {
        to_slug(self.display_name())
    }
}

impl Named for crate::types::EventRecord {
    fn display_name(&self) -> &str {
        &self.name
    }
}
