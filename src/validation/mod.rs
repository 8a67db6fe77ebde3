//! Validation for event submissions
//!
//! This module turns raw form fields into a record-ready submission.

mod submission;

pub use submission::{validate_submission, ValidatedSubmission, ValidationPolicy};
