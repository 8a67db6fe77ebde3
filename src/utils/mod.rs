//! Utility functions and helpers
//!
//! This module contains atomic file writes and date helpers.

pub mod atomic;
pub mod time;

pub use atomic::{atomic_write, remove_stale_temp};
pub use time::{next_annual_occurrence, now, parse_event_date, today};
