//! Display labels for tags, topics and filter buttons.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::types::selection::{FilterMode, FilterSelection};

/// Built-in display overrides for long topic identifiers.
const DEFAULT_TOPIC_LABELS: &[(&str, &str)] = &[
    (
        "How Palliative Care and Hospice are Different",
        "Palliative vs. Hospice",
    ),
    ("Breathing Assistance Decisions", "Breathing"),
    ("Feeding Assistance Decisions", "Feeding"),
    (
        "Benefits, Timing, and Who Provides It",
        "Benefits/Timing/Providers",
    ),
];

/// Replace `-` separators with spaces.
pub fn humanize(tag: &str) -> String {
    tag.replace('-', " ")
}

/// Capitalize the first letter of every word.
///
/// A word starts at a word character (alphanumeric or `_`) that follows a
/// non-word character or the start of the string.
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev_is_word = false;
    for c in text.chars() {
        let is_word = c.is_alphanumeric() || c == '_';
        if is_word && !prev_is_word {
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
        prev_is_word = is_word;
    }
    out
}

/// Label for a category or free-form tag in titles (`end-of-life` → `End Of Life`).
pub fn category_label(tag: &str) -> String {
    title_case(&humanize(tag))
}

/// Topic identifier → friendly label, with a separator fallback.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicLabels {
    overrides: IndexMap<String, String>,
}

impl Default for TopicLabels {
    fn default() -> Self {
        Self {
            overrides: DEFAULT_TOPIC_LABELS
                .iter()
                .map(|(topic, label)| (topic.to_string(), label.to_string()))
                .collect(),
        }
    }
}

impl TopicLabels {
    /// Labels without any built-in overrides.
    pub fn empty() -> Self {
        Self {
            overrides: IndexMap::new(),
        }
    }

    /// Add or replace an override.
    pub fn with_override(mut self, topic: impl Into<String>, label: impl Into<String>) -> Self {
        self.overrides.insert(topic.into(), label.into());
        self
    }

    /// Label for a topic.
    pub fn label(&self, topic: &str) -> String {
        self.overrides
            .get(topic)
            .cloned()
            .unwrap_or_else(|| humanize(topic))
    }
}

/// Text on a filter button.
pub fn filter_button_label(value: &FilterSelection, mode: FilterMode, topics: &TopicLabels) -> String {
    match (value, mode) {
        (FilterSelection::All, _) => "All".to_string(),
        (FilterSelection::Tag(tag), FilterMode::Category) => humanize(tag),
        (FilterSelection::Tag(tag), FilterMode::Topic) => topics.label(tag),
    }
}
