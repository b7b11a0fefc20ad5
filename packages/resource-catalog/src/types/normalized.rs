//! Deduplicated resource records produced by the normalizer.

use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};

use crate::types::resource::{Resource, TagSet};

/// Lower-case and trim a title into its dedup key.
pub fn normalize_title(title: &str) -> String {
    title.trim().to_lowercase()
}

/// One record per distinct normalized title.
///
/// Scalar fields come from the first-seen duplicate. `categories` and
/// `topics_by_category` are unions across all duplicates, and every category
/// has an entry in `topics_by_category` (possibly empty).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedResource {
    pub title: String,
    pub url: String,
    pub source: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub description: String,
    pub users: TagSet,
    pub language: TagSet,
    pub categories: IndexSet<String>,
    pub topics_by_category: IndexMap<String, IndexSet<String>>,
}

impl NormalizedResource {
    /// Seed a record from the first occurrence of a title.
    pub fn seed(resource: &Resource) -> Self {
        Self {
            title: resource.title.clone(),
            url: resource.url.clone(),
            source: resource.source.clone(),
            kind: resource.kind.clone(),
            description: resource.description.clone(),
            users: resource.users.clone(),
            language: resource.language.clone(),
            categories: IndexSet::new(),
            topics_by_category: IndexMap::new(),
        }
    }

    /// Dedup key of this record.
    pub fn key(&self) -> String {
        normalize_title(&self.title)
    }

    /// Add a category, creating its (empty) topic entry.
    pub fn add_category(&mut self, category: &str) {
        self.categories.insert(category.to_string());
        self.topics_by_category
            .entry(category.to_string())
            .or_default();
    }

    /// Union topics into a category's entry, adding the category if needed.
    pub fn add_topics<'a>(&mut self, category: &str, topics: impl IntoIterator<Item = &'a String>) {
        self.add_category(category);
        if let Some(entry) = self.topics_by_category.get_mut(category) {
            entry.extend(topics.into_iter().cloned());
        }
    }

    /// Whether the record belongs to a category.
    pub fn in_category(&self, category: &str) -> bool {
        self.categories.contains(category)
    }

    /// Topics listed under one category (empty if the category is absent).
    pub fn topics_in<'a>(&'a self, category: &str) -> impl Iterator<Item = &'a String> {
        self.topics_by_category.get(category).into_iter().flatten()
    }

    /// Topics across all categories, in first-seen order, without repeats.
    pub fn all_topics(&self) -> IndexSet<&String> {
        self.topics_by_category.values().flatten().collect()
    }

    /// Whether a topic appears under a specific category.
    pub fn has_topic_in(&self, category: &str, topic: &str) -> bool {
        self.topics_by_category
            .get(category)
            .is_some_and(|topics| topics.contains(topic))
    }

    /// Whether a topic appears under any category.
    pub fn has_topic(&self, topic: &str) -> bool {
        self.topics_by_category
            .values()
            .any(|topics| topics.contains(topic))
    }
}
