//! Command implementations

pub mod answer;
pub mod reset;
pub mod show;
pub mod start;

use anyhow::{Context, Result};
use resource_catalog::{feed_for, CatalogSession, FileSessionStore, ResourceFeed};

use crate::config::Config;

pub type CliSession = CatalogSession<Box<dyn ResourceFeed>, FileSessionStore>;

pub fn session_store(config: &Config) -> FileSessionStore {
    FileSessionStore::new(&config.session_file)
}

/// Load the feed and open a catalog session bound to the session file.
pub async fn open_session(config: &Config) -> Result<CliSession> {
    CatalogSession::open(
        feed_for(&config.feed),
        session_store(config),
        config.catalog.clone(),
    )
    .await
    .with_context(|| format!("Failed to load resources from {}", config.feed))
}
