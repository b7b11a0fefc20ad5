//! Resource feed trait for pluggable resource sources.
//!
//! A feed produces the raw, unsorted resource list. Implementations live in
//! [`crate::feeds`] (local file, HTTP) and [`crate::testing`] (mock).
//!
//! ```rust,ignore
//! use resource_catalog::{FileFeed, ResourceFeed};
//!
//! let feed = FileFeed::new("assets/data/resources.json");
//! let resources = feed.load().await?;
//! ```

use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, warn};

use crate::error::Result;
use crate::types::resource::Resource;

/// Source of the raw resource collection.
#[async_trait]
pub trait ResourceFeed: Send + Sync {
    /// Human-readable name for logs and load errors.
    fn name(&self) -> &str;

    /// Load every resource. Fails as a whole; never returns a partial list.
    async fn load(&self) -> Result<Vec<Resource>>;
}

#[async_trait]
impl<T: ResourceFeed + ?Sized> ResourceFeed for Box<T> {
    fn name(&self) -> &str {
        (**self).name()
    }

    async fn load(&self) -> Result<Vec<Resource>> {
        (**self).load().await
    }
}

/// Parse a feed body into resources.
///
/// The body must be a JSON array. Entries that are not objects, or that have
/// no usable title, are skipped with a warning rather than failing the load.
pub fn parse_feed(body: &str, source_name: &str) -> Result<Vec<Resource>> {
    let entries: Vec<Value> = serde_json::from_str(body)?;
    let total = entries.len();

    let resources: Vec<Resource> = entries
        .into_iter()
        .enumerate()
        .filter_map(|(index, entry)| {
            if !entry.is_object() {
                warn!(source = %source_name, index, "Skipping non-object feed entry");
                return None;
            }
            match serde_json::from_value::<Resource>(entry) {
                Ok(resource) if resource.has_title() => Some(resource),
                Ok(_) => {
                    warn!(source = %source_name, index, "Skipping feed entry without title");
                    None
                }
                Err(e) => {
                    warn!(source = %source_name, index, error = %e, "Skipping malformed feed entry");
                    None
                }
            }
        })
        .collect();

    debug!(
        source = %source_name,
        total,
        kept = resources.len(),
        "Parsed resource feed"
    );

    Ok(resources)
}
