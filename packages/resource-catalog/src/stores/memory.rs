//! In-memory session storage for tests and single-process use.

use std::collections::HashMap;
use std::sync::RwLock;

use crate::error::{SessionError, SessionResult};
use crate::traits::session::SessionStore;

/// In-memory session store.
///
/// Data lives as long as the store; dropping it ends the "session".
#[derive(Default)]
pub struct MemorySessionStore {
    values: RwLock<HashMap<String, String>>,
}

impl MemorySessionStore {
    /// Create a new empty memory store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys.
    pub fn len(&self) -> usize {
        self.values.read().map(|v| v.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self, key: &str) -> SessionResult<Option<String>> {
        let values = self.values.read().map_err(|_| SessionError::Poisoned)?;
        Ok(values.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> SessionResult<()> {
        self.values
            .write()
            .map_err(|_| SessionError::Poisoned)?
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> SessionResult<()> {
        self.values
            .write()
            .map_err(|_| SessionError::Poisoned)?
            .remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::flow::{FlowAnswers, FlowLanguage, Role};

    #[test]
    fn test_flow_answers_round_trip_through_store() {
        let store = MemorySessionStore::new();
        let answers = FlowAnswers::new()
            .with_role(Role::Patients)
            .with_language(FlowLanguage::Es)
            .with_category("breathing");

        store.save_flow_answers("getStartedAnswers", &answers).unwrap();
        let loaded = store.load_flow_answers("getStartedAnswers").unwrap();
        assert_eq!(loaded, Some(answers));
    }

    #[test]
    fn test_missing_key_is_no_flow_context() {
        let store = MemorySessionStore::new();
        assert_eq!(store.load_flow_answers("getStartedAnswers").unwrap(), None);
    }

    #[test]
    fn test_unreadable_answers_are_ignored() {
        let store = MemorySessionStore::new();
        store.set("getStartedAnswers", r#"{"role": "admins"}"#).unwrap();
        assert_eq!(store.load_flow_answers("getStartedAnswers").unwrap(), None);

        store.set("getStartedAnswers", "{not json").unwrap();
        assert_eq!(store.load_flow_answers("getStartedAnswers").unwrap(), None);
    }

    #[test]
    fn test_clear_removes_key() {
        let store = MemorySessionStore::new();
        store
            .save_flow_answers("getStartedAnswers", &FlowAnswers::new())
            .unwrap();
        assert_eq!(store.len(), 1);

        store.clear_flow_answers("getStartedAnswers").unwrap();
        assert!(store.is_empty());
        // Clearing twice is fine
        store.clear_flow_answers("getStartedAnswers").unwrap();
    }
}
