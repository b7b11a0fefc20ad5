//! Typed errors for the resource catalog library.
//!
//! Uses `thiserror` for library errors (not `anyhow`) so callers can tell a
//! failed feed load apart from a broken session record.

use thiserror::Error;

/// Errors that can occur while loading or building the catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Feed could not be fetched or read (non-success status, missing file)
    #[error("failed to load resources from {source_name}: {reason}")]
    Load { source_name: String, reason: String },

    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Local IO failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Feed body is not a JSON array
    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// Session storage failed
    #[error("session error: {0}")]
    Session(#[from] SessionError),
}

/// Errors from session-scoped flow state storage.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Backing file could not be read or written
    #[error("session IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Stored value is not valid JSON for the expected shape
    #[error("session JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Lock was poisoned by a panicking writer
    #[error("session store lock poisoned")]
    Poisoned,
}

/// Errors raised by the guided "Get Started" flow.
#[derive(Debug, Error)]
pub enum FlowError {
    /// Answer is not one of the allowed values for the step
    #[error("invalid answer {value:?} for step {step}")]
    InvalidAnswer { step: u8, value: String },

    /// Answers were already written for this flow
    #[error("flow already completed")]
    AlreadyCompleted,

    /// Answers could not be persisted
    #[error("failed to persist answers: {0}")]
    Session(#[from] SessionError),
}

/// Result type alias for catalog operations.
pub type Result<T> = std::result::Result<T, CatalogError>;

/// Result type alias for session storage operations.
pub type SessionResult<T> = std::result::Result<T, SessionError>;

/// Result type alias for guided flow operations.
pub type FlowResult<T> = std::result::Result<T, FlowError>;

impl CatalogError {
    /// Build a load failure for a named feed.
    pub fn load(source_name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Load {
            source_name: source_name.into(),
            reason: reason.into(),
        }
    }
}
