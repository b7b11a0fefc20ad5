//! JSON-file session storage.
//!
//! Lets separate processes (the quiz command and the listing command) share
//! one session, the way two pages share browser session storage.

use indexmap::IndexMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::error::SessionResult;
use crate::traits::session::SessionStore;

/// Session store backed by a single JSON object file.
///
/// A missing or unreadable file is an empty session. Removing the last key
/// deletes the file.
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the stored map. A file that is not a JSON object of strings is
    /// an empty session; the flag reports it so the next write replaces it.
    fn read_all(&self) -> SessionResult<(IndexMap<String, String>, bool)> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok((IndexMap::new(), false)),
            Err(e) => return Err(e.into()),
        };
        if raw.trim().is_empty() {
            return Ok((IndexMap::new(), false));
        }

        match serde_json::from_str(&raw) {
            Ok(values) => Ok((values, false)),
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Ignoring unreadable session file");
                Ok((IndexMap::new(), true))
            }
        }
    }

    fn write_all(&self, values: &IndexMap<String, String>) -> SessionResult<()> {
        if values.is_empty() {
            return match fs::remove_file(&self.path) {
                Err(e) if e.kind() != ErrorKind::NotFound => Err(e.into()),
                _ => Ok(()),
            };
        }

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, serde_json::to_string_pretty(values)?)?;
        debug!(path = %self.path.display(), keys = values.len(), "Wrote session file");
        Ok(())
    }
}

impl SessionStore for FileSessionStore {
    fn get(&self, key: &str) -> SessionResult<Option<String>> {
        let (values, _) = self.read_all()?;
        Ok(values.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> SessionResult<()> {
        let (mut values, _) = self.read_all()?;
        values.insert(key.to_string(), value.to_string());
        self.write_all(&values)
    }

    fn remove(&self, key: &str) -> SessionResult<()> {
        let (mut values, corrupt) = self.read_all()?;
        if values.shift_remove(key).is_none() && !corrupt {
            return Ok(());
        }
        self.write_all(&values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::flow::{FlowAnswers, Role};

    #[test]
    fn test_missing_file_is_empty_session() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileSessionStore::new(dir.path().join("session.json"));
        assert_eq!(store.get("getStartedAnswers").unwrap(), None);
        store.remove("getStartedAnswers").unwrap();
    }

    #[test]
    fn test_answers_shared_between_store_instances() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("session.json");

        let writer = FileSessionStore::new(&path);
        let answers = FlowAnswers::new().with_role(Role::Clinicians);
        writer.save_flow_answers("getStartedAnswers", &answers).unwrap();

        let reader = FileSessionStore::new(&path);
        assert_eq!(
            reader.load_flow_answers("getStartedAnswers").unwrap(),
            Some(answers)
        );
    }

    #[test]
    fn test_clearing_last_key_deletes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        let store = FileSessionStore::new(&path);

        store.set("getStartedAnswers", "{}").unwrap();
        assert!(path.exists());

        store.clear_flow_answers("getStartedAnswers").unwrap();
        assert!(!path.exists());
    }

    #[test]
    fn test_other_keys_survive_clear() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileSessionStore::new(dir.path().join("session.json"));

        store.set("theme", "dark").unwrap();
        store.set("getStartedAnswers", "{}").unwrap();
        store.clear_flow_answers("getStartedAnswers").unwrap();

        assert_eq!(store.get("theme").unwrap(), Some("dark".to_string()));
    }

    #[test]
    fn test_corrupt_file_is_empty_session() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        fs::write(&path, "{not json").unwrap();
        let store = FileSessionStore::new(&path);

        assert_eq!(store.get("getStartedAnswers").unwrap(), None);
        assert_eq!(store.load_flow_answers("getStartedAnswers").unwrap(), None);
    }

    #[test]
    fn test_clear_deletes_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        fs::write(&path, "[1, 2, 3]").unwrap();
        let store = FileSessionStore::new(&path);

        store.clear_flow_answers("getStartedAnswers").unwrap();
        assert!(!path.exists());
    }

    #[test]
    fn test_write_replaces_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        fs::write(&path, "{not json").unwrap();
        let store = FileSessionStore::new(&path);

        let answers = FlowAnswers::new().with_role(Role::Patients);
        store.save_flow_answers("getStartedAnswers", &answers).unwrap();
        assert_eq!(
            store.load_flow_answers("getStartedAnswers").unwrap(),
            Some(answers)
        );
    }
}
