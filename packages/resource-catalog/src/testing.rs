//! Testing utilities including a mock feed and sample data.
//!
//! Useful for exercising the catalog pipeline without touching the
//! filesystem or network.

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::RwLock;

use crate::error::{CatalogError, Result};
use crate::traits::feed::ResourceFeed;
use crate::types::resource::Resource;

/// A feed returning predefined resources, or a predefined failure.
pub struct MockFeed {
    name: String,
    resources: RwLock<Vec<Resource>>,
    failure: RwLock<Option<String>>,
    loads: AtomicUsize,
}

impl MockFeed {
    /// Create a feed that returns these resources.
    pub fn new(resources: Vec<Resource>) -> Self {
        Self {
            name: "mock".to_string(),
            resources: RwLock::new(resources),
            failure: RwLock::new(None),
            loads: AtomicUsize::new(0),
        }
    }

    /// Create a feed whose loads fail with a reason.
    pub fn failing(reason: impl Into<String>) -> Self {
        let feed = Self::new(Vec::new());
        feed.fail_with(reason);
        feed
    }

    /// Replace the resources returned by later loads.
    pub fn set_resources(&self, resources: Vec<Resource>) {
        if let Ok(mut current) = self.resources.write() {
            *current = resources;
        }
    }

    /// Make later loads fail.
    pub fn fail_with(&self, reason: impl Into<String>) {
        if let Ok(mut failure) = self.failure.write() {
            *failure = Some(reason.into());
        }
    }

    /// Number of times `load` was called.
    pub fn load_count(&self) -> usize {
        self.loads.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ResourceFeed for MockFeed {
    fn name(&self) -> &str {
        &self.name
    }

    async fn load(&self) -> Result<Vec<Resource>> {
        self.loads.fetch_add(1, Ordering::SeqCst);

        let failure = self.failure.read().ok().and_then(|f| f.clone());
        if let Some(reason) = failure {
            return Err(CatalogError::load(&self.name, reason));
        }

        Ok(self
            .resources
            .read()
            .map(|r| r.clone())
            .unwrap_or_default())
    }
}

/// A small catalog with duplicates, mixed audiences and both languages.
pub fn sample_resources() -> Vec<Resource> {
    vec![
        Resource::new("Breathing Basics")
            .with_url("https://example.org/breathing-basics")
            .with_source("ALS Network")
            .with_kind("Article")
            .with_description("How breathing changes and what helps.")
            .with_categories(["breathing"])
            .with_topics(["mechanics"])
            .with_users(["patients", "carepartners"])
            .with_languages(["en", "es"]),
        Resource::new("Advance Directives Explained")
            .with_url("https://example.org/directives")
            .with_source("Care Planning Org")
            .with_kind("Video")
            .with_description("Writing down your wishes.")
            .with_categories(["advance-care-planning"])
            .with_topics(["Advance Directives"])
            .with_users(["patients", "carepartners", "clinicians"])
            .with_languages(["en"]),
        Resource::new("breathing basics ")
            .with_url("https://example.org/breathing-basics-2")
            .with_source("Duplicate Source")
            .with_categories(["breathing", "comfort"])
            .with_topics(["positioning"])
            .with_users(["clinicians"]),
        Resource::new("Ventilation Decisions for Clinicians")
            .with_url("https://example.org/vent")
            .with_source("Clinical Journal")
            .with_kind("Article")
            .with_categories(["breathing"])
            .with_topics(["Breathing Assistance Decisions"])
            .with_users(["clinicians"])
            .with_languages(["en"]),
        Resource::new("Cuidados de Confort")
            .with_url("https://example.org/confort")
            .with_source("Red ELA")
            .with_kind("Article")
            .with_categories(["comfort"])
            .with_topics(["positioning"])
            .with_users(["patients", "carepartners"])
            .with_languages(["es"]),
    ]
}
