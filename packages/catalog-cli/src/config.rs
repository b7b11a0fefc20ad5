//! CLI configuration loaded from environment variables.
//!
//! - `CATALOG_FEED` - JSON file path or http(s) URL of the resource feed
//! - `CATALOG_SESSION_FILE` - JSON file shared by the quiz and the listing
//! - `CATALOG_SORT` - sort by title before merging (`true`/`false`)
//! - `CATALOG_GUIDED_MERGE` / `CATALOG_FULL_MERGE` - merge policies

use anyhow::{anyhow, Context, Result};
use dotenvy::dotenv;
use resource_catalog::{CatalogConfig, MergePolicy};
use std::env;
use std::path::PathBuf;

const DEFAULT_FEED: &str = "assets/data/resources.json";
const DEFAULT_SESSION_FILE: &str = ".catalog-session.json";

#[derive(Debug, Clone)]
pub struct Config {
    pub feed: String,
    pub session_file: PathBuf,
    pub catalog: CatalogConfig,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Self::from_vars(|key| env::var(key).ok())
    }

    /// Build from any variable lookup.
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut catalog = CatalogConfig::default();

        if let Some(raw) = lookup("CATALOG_SORT") {
            let sort = parse_bool(&raw).context("CATALOG_SORT must be true or false")?;
            catalog = catalog.with_sort_by_title(sort);
        }
        if let Some(raw) = lookup("CATALOG_GUIDED_MERGE") {
            let policy = raw
                .parse::<MergePolicy>()
                .map_err(|e| anyhow!(e))
                .context("Invalid CATALOG_GUIDED_MERGE")?;
            catalog = catalog.with_guided_merge(policy);
        }
        if let Some(raw) = lookup("CATALOG_FULL_MERGE") {
            let policy = raw
                .parse::<MergePolicy>()
                .map_err(|e| anyhow!(e))
                .context("Invalid CATALOG_FULL_MERGE")?;
            catalog = catalog.with_full_catalog_merge(policy);
        }

        Ok(Self {
            feed: lookup("CATALOG_FEED").unwrap_or_else(|| DEFAULT_FEED.to_string()),
            session_file: lookup("CATALOG_SESSION_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_SESSION_FILE)),
            catalog,
        })
    }

    /// Apply command-line overrides.
    pub fn with_overrides(mut self, feed: Option<String>, session_file: Option<PathBuf>) -> Self {
        if let Some(feed) = feed {
            self.feed = feed;
        }
        if let Some(path) = session_file {
            self.session_file = path;
        }
        self
    }
}

fn parse_bool(raw: &str) -> Result<bool> {
    match raw.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(anyhow!("not a boolean: {}", other)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_vars(vars(&[])).unwrap();
        assert_eq!(config.feed, "assets/data/resources.json");
        assert_eq!(config.session_file, PathBuf::from(".catalog-session.json"));
        assert!(config.catalog.sort_by_title);
        assert_eq!(config.catalog.full_catalog_merge, MergePolicy::CategoriesAndTopics);
    }

    #[test]
    fn test_env_values() {
        let config = Config::from_vars(vars(&[
            ("CATALOG_FEED", "https://example.org/resources.json"),
            ("CATALOG_SORT", "off"),
            ("CATALOG_FULL_MERGE", "categories-only"),
        ]))
        .unwrap();

        assert_eq!(config.feed, "https://example.org/resources.json");
        assert!(!config.catalog.sort_by_title);
        assert_eq!(config.catalog.full_catalog_merge, MergePolicy::CategoriesOnly);
        assert_eq!(config.catalog.guided_merge, MergePolicy::CategoriesAndTopics);
    }

    #[test]
    fn test_invalid_values_are_errors() {
        assert!(Config::from_vars(vars(&[("CATALOG_SORT", "sometimes")])).is_err());
        assert!(Config::from_vars(vars(&[("CATALOG_GUIDED_MERGE", "everything")])).is_err());
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_vars(vars(&[]))
            .unwrap()
            .with_overrides(Some("local.json".to_string()), None);
        assert_eq!(config.feed, "local.json");
        assert_eq!(config.session_file, PathBuf::from(".catalog-session.json"));
    }
}
