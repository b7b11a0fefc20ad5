//! Session-scoped key/value storage for guided flow answers.
//!
//! Mirrors browser session storage: string values under string keys, living
//! for one browsing session. The flow answers are the only record written,
//! once at flow completion, and removed by the "view all" action.

use std::sync::Arc;
use tracing::{debug, warn};

use crate::error::SessionResult;
use crate::types::flow::FlowAnswers;

/// String key/value store scoped to one browsing session.
pub trait SessionStore: Send + Sync {
    /// Read a raw value.
    fn get(&self, key: &str) -> SessionResult<Option<String>>;

    /// Write a raw value, replacing any previous one.
    fn set(&self, key: &str, value: &str) -> SessionResult<()>;

    /// Remove a value. Removing a missing key is not an error.
    fn remove(&self, key: &str) -> SessionResult<()>;

    /// Read flow answers.
    ///
    /// A missing key means no flow context. A value that does not parse is
    /// logged and treated as missing.
    fn load_flow_answers(&self, key: &str) -> SessionResult<Option<FlowAnswers>> {
        let Some(raw) = self.get(key)? else {
            debug!(key, "No flow answers in session");
            return Ok(None);
        };

        match serde_json::from_str::<Option<FlowAnswers>>(&raw) {
            Ok(answers) => Ok(answers),
            Err(e) => {
                warn!(key, error = %e, "Ignoring unreadable flow answers");
                Ok(None)
            }
        }
    }

    /// Persist flow answers.
    fn save_flow_answers(&self, key: &str, answers: &FlowAnswers) -> SessionResult<()> {
        let raw = serde_json::to_string(answers)?;
        self.set(key, &raw)
    }

    /// Drop flow answers so the next load shows the full catalog.
    fn clear_flow_answers(&self, key: &str) -> SessionResult<()> {
        self.remove(key)
    }
}

impl<T: SessionStore + ?Sized> SessionStore for &T {
    fn get(&self, key: &str) -> SessionResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> SessionResult<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> SessionResult<()> {
        (**self).remove(key)
    }
}

impl<T: SessionStore + ?Sized> SessionStore for Arc<T> {
    fn get(&self, key: &str) -> SessionResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> SessionResult<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> SessionResult<()> {
        (**self).remove(key)
    }
}

impl<T: SessionStore + ?Sized> SessionStore for Box<T> {
    fn get(&self, key: &str) -> SessionResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> SessionResult<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> SessionResult<()> {
        (**self).remove(key)
    }
}
