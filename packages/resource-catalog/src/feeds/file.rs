//! Local JSON file feed.

use async_trait::async_trait;
use std::path::PathBuf;
use tracing::{debug, error};

use crate::error::{CatalogError, Result};
use crate::traits::feed::{parse_feed, ResourceFeed};
use crate::types::resource::Resource;

/// Reads the resource feed from a JSON file on disk.
pub struct FileFeed {
    path: PathBuf,
    name: String,
}

impl FileFeed {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path.display().to_string();
        Self { path, name }
    }
}

#[async_trait]
impl ResourceFeed for FileFeed {
    fn name(&self) -> &str {
        &self.name
    }

    async fn load(&self) -> Result<Vec<Resource>> {
        debug!(path = %self.name, "Reading resource feed");
        let body = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            error!(path = %self.name, error = %e, "Failed to read resource feed");
            CatalogError::load(&self.name, e.to_string())
        })?;

        parse_feed(&body, &self.name).map_err(|e| {
            error!(path = %self.name, error = %e, "Failed to parse resource feed");
            e
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_loads_feed_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resources.json");
        std::fs::write(
            &path,
            r#"[{"title": "Breathing Basics", "category": ["breathing"]}]"#,
        )
        .unwrap();

        let resources = FileFeed::new(&path).load().await.unwrap();
        assert_eq!(resources.len(), 1);
    }

    #[tokio::test]
    async fn test_missing_file_is_load_failure() {
        let dir = tempfile::tempdir().unwrap();
        let feed = FileFeed::new(dir.path().join("missing.json"));

        let err = feed.load().await.unwrap_err();
        assert!(matches!(err, CatalogError::Load { .. }));
    }

    #[tokio::test]
    async fn test_unparsable_body_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resources.json");
        std::fs::write(&path, "<html>oops</html>").unwrap();

        let err = FileFeed::new(&path).load().await.unwrap_err();
        assert!(matches!(err, CatalogError::JsonParse(_)));
    }
}
