//! Configuration types for building catalog views.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::pipeline::labels::TopicLabels;
use crate::types::selection::FilterMode;

/// Well-known session key for guided flow answers.
pub const DEFAULT_SESSION_KEY: &str = "getStartedAnswers";

/// How duplicate titles are merged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MergePolicy {
    /// Union categories and, per category, topics across every duplicate.
    #[default]
    CategoriesAndTopics,
    /// Union categories only; topics come from the first-seen duplicate.
    CategoriesOnly,
}

impl FromStr for MergePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "categories-and-topics" | "full" => Ok(MergePolicy::CategoriesAndTopics),
            "categories-only" | "categories" => Ok(MergePolicy::CategoriesOnly),
            other => Err(format!("unknown merge policy: {}", other)),
        }
    }
}

impl fmt::Display for MergePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MergePolicy::CategoriesAndTopics => f.write_str("categories-and-topics"),
            MergePolicy::CategoriesOnly => f.write_str("categories-only"),
        }
    }
}

/// Configuration for building a catalog view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Sort the feed by title (case-insensitive, stable) before merging.
    ///
    /// Default: true.
    pub sort_by_title: bool,

    /// Merge policy when flow answers are present (topic mode).
    pub guided_merge: MergePolicy,

    /// Merge policy for the unfiltered catalog (category mode).
    pub full_catalog_merge: MergePolicy,

    /// Session key holding the flow answers.
    pub session_key: String,

    /// Display overrides for topic identifiers.
    #[serde(default)]
    pub topic_labels: TopicLabels,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            sort_by_title: true,
            guided_merge: MergePolicy::default(),
            full_catalog_merge: MergePolicy::default(),
            session_key: DEFAULT_SESSION_KEY.to_string(),
            topic_labels: TopicLabels::default(),
        }
    }
}

impl CatalogConfig {
    /// Create a new config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable title sorting.
    pub fn with_sort_by_title(mut self, sort: bool) -> Self {
        self.sort_by_title = sort;
        self
    }

    /// Set the merge policy for the guided-flow view.
    pub fn with_guided_merge(mut self, policy: MergePolicy) -> Self {
        self.guided_merge = policy;
        self
    }

    /// Set the merge policy for the full-catalog view.
    pub fn with_full_catalog_merge(mut self, policy: MergePolicy) -> Self {
        self.full_catalog_merge = policy;
        self
    }

    /// Set the session key.
    pub fn with_session_key(mut self, key: impl Into<String>) -> Self {
        self.session_key = key.into();
        self
    }

    /// Add a topic display override.
    pub fn with_topic_label(mut self, topic: impl Into<String>, label: impl Into<String>) -> Self {
        self.topic_labels = self.topic_labels.with_override(topic, label);
        self
    }

    /// Merge policy for the view a mode belongs to.
    pub fn merge_policy_for(&self, mode: FilterMode) -> MergePolicy {
        match mode {
            FilterMode::Topic => self.guided_merge,
            FilterMode::Category => self.full_catalog_merge,
        }
    }
}
