//! Slug derivation and lookup
//!
//! This module provides the single slug normalization used everywhere and
//! the lookups built on it:
//! - `resolve_exact` for routing by slug
//! - `resolve_fuzzy` for substring search on names and slugs
//! - `search` combining both the way the search box does

mod resolve;
mod slug;

pub use resolve::{resolve_exact, resolve_fuzzy, search};
pub use slug::{to_slug, Named};
