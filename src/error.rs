//! Error taxonomy for the event store and lifecycle

use std::path::PathBuf;

use thiserror::Error;

/// Result type for persistence operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Result type for lifecycle and lookup operations
pub type EventResult<T> = Result<T, EventError>;

/// Failures reading or writing the persisted document
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("io error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("corrupt event document {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl StorageError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn json(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::Json {
            path: path.into(),
            source,
        }
    }
}

#[derive(Debug, Error)]
pub enum EventError {
    #[error("{message}")]
    Validation { message: String },
    #[error("{what} not found")]
    NotFound { what: String },
    #[error("invalid action: {action}")]
    InvalidAction { action: String },
    #[error("an approved event already uses the slug '{slug}'")]
    SlugConflict { slug: String },
    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl EventError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound { what: what.into() }
    }

    pub fn invalid_action(action: impl Into<String>) -> Self {
        Self::InvalidAction {
            action: action.into(),
        }
    }

    /// Whether the failure came from the caller's input rather than the backend
    pub fn is_client_error(&self) -> bool {
        !matches!(self, Self::Storage(_))
    }
}
