//! Raw resource records as they arrive from the feed.
//!
//! The feed is generated from a spreadsheet and is not consistent about
//! shapes: `category` may be a string or an array, audience fields may be
//! missing or hold a bare value. Deserialization never fails on a field
//! shape; odd values collapse to empty or unrestricted.

use indexmap::IndexSet;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

/// Shorthand user tags used in the source spreadsheet.
const USER_ALIASES: &[(&str, &str)] = &[
    ("pts", "patients"),
    ("cps", "carepartners"),
    ("hcps", "clinicians"),
];

/// Shorthand topic labels used in the source spreadsheet.
const TOPIC_ALIASES: &[(&str, &str)] = &[
    ("advance directives", "Advance Directives"),
    ("feeding", "Feeding Assistance Decisions"),
    ("breathing", "Breathing Assistance Decisions"),
    ("bereavement", "Bereavement Support"),
    ("legacy work", "Legacy Work"),
    ("financial planning", "Financial Planning"),
    ("definitions", "Definitions"),
    ("differences", "How Palliative Care and Hospice are Different"),
    (
        "benefits/timing/who provides",
        "Benefits, Timing, and Who Provides It",
    ),
];

/// Serialized marker for an unrestricted tag field.
const UNRESTRICTED_MARKER: &str = "any";

/// Audience tags (`users`, `language`) on a resource.
///
/// A proper array becomes `Tags`. Any other non-null shape means the record
/// carries no usable restriction and is never excluded on that axis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagSet {
    Tags(IndexSet<String>),
    Unrestricted,
}

impl Default for TagSet {
    fn default() -> Self {
        TagSet::Tags(IndexSet::new())
    }
}

impl TagSet {
    /// Build a tag set from values.
    pub fn from_tags(tags: impl IntoIterator<Item = impl Into<String>>) -> Self {
        TagSet::Tags(tags.into_iter().map(Into::into).collect())
    }

    /// Whether this field places no restriction.
    pub fn is_unrestricted(&self) -> bool {
        matches!(self, TagSet::Unrestricted)
    }

    /// Whether a flow answer with this tag lets the resource through.
    pub fn permits(&self, tag: &str) -> bool {
        match self {
            TagSet::Tags(tags) => tags.contains(tag),
            TagSet::Unrestricted => true,
        }
    }

    /// Iterate the tags (empty when unrestricted).
    pub fn iter(&self) -> impl Iterator<Item = &String> {
        let tags = match self {
            TagSet::Tags(tags) => Some(tags),
            TagSet::Unrestricted => None,
        };
        tags.into_iter().flatten()
    }

    fn map_tags(self, f: impl Fn(String) -> String) -> Self {
        match self {
            TagSet::Tags(tags) => TagSet::Tags(tags.into_iter().map(f).collect()),
            TagSet::Unrestricted => TagSet::Unrestricted,
        }
    }
}

impl Serialize for TagSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            TagSet::Tags(tags) => tags.serialize(serializer),
            TagSet::Unrestricted => serializer.serialize_str(UNRESTRICTED_MARKER),
        }
    }
}

impl<'de> Deserialize<'de> for TagSet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(match value {
            Value::Null => TagSet::default(),
            Value::Array(items) => TagSet::Tags(string_items(items).collect()),
            _ => TagSet::Unrestricted,
        })
    }
}

/// One entry of the resource feed.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Resource {
    #[serde(default, deserialize_with = "lenient_string")]
    pub title: String,

    #[serde(default, deserialize_with = "lenient_string")]
    pub url: String,

    #[serde(default, deserialize_with = "lenient_string")]
    pub source: String,

    #[serde(rename = "type", default, deserialize_with = "lenient_string")]
    pub kind: String,

    #[serde(default, deserialize_with = "lenient_string")]
    pub description: String,

    /// Category tags (string, comma list, or array in the feed)
    #[serde(default, deserialize_with = "lenient_tags")]
    pub category: Vec<String>,

    /// Topic tags, associated with every category of this record;
    /// shorthands are expanded on load
    #[serde(default, deserialize_with = "topic_tags")]
    pub topics: Vec<String>,

    /// Audience roles; shorthands are expanded on load
    #[serde(default, deserialize_with = "user_tags")]
    pub users: TagSet,

    /// Language tags (`en`, `es`)
    #[serde(default)]
    pub language: TagSet,
}

impl Resource {
    /// Create a resource with only a title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    /// Set the URL.
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    /// Set the source name.
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = source.into();
        self
    }

    /// Set the media type (article, video).
    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = kind.into();
        self
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set category tags.
    pub fn with_categories(mut self, categories: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.category = categories.into_iter().map(Into::into).collect();
        self
    }

    /// Set topic tags.
    pub fn with_topics(mut self, topics: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.topics = topics.into_iter().map(Into::into).collect();
        self
    }

    /// Set audience roles.
    pub fn with_users(mut self, users: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.users = TagSet::from_tags(users);
        self
    }

    /// Set language tags.
    pub fn with_languages(mut self, languages: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.language = TagSet::from_tags(languages);
        self
    }

    /// Whether the record has a usable title (the dedup key).
    pub fn has_title(&self) -> bool {
        !self.title.trim().is_empty()
    }
}

/// Expand a spreadsheet user shorthand (`pts`, `cps`, `hcps`).
pub fn canonical_user_tag(tag: &str) -> String {
    let lowered = tag.trim().to_lowercase();
    USER_ALIASES
        .iter()
        .find(|(alias, _)| *alias == lowered)
        .map(|(_, canonical)| canonical.to_string())
        .unwrap_or_else(|| tag.to_string())
}

/// Expand a spreadsheet topic shorthand (`feeding`, `differences`, ...).
pub fn canonical_topic(topic: &str) -> String {
    let trimmed = topic.trim();
    let lowered = trimmed.to_lowercase();
    TOPIC_ALIASES
        .iter()
        .find(|(alias, _)| *alias == lowered)
        .map(|(_, canonical)| canonical.to_string())
        .unwrap_or_else(|| trimmed.to_string())
}

/// Split a comma-separated cell into trimmed, non-empty tags.
pub fn split_tags(cell: &str) -> Vec<String> {
    cell.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

fn string_items(items: Vec<Value>) -> impl Iterator<Item = String> {
    items.into_iter().filter_map(|item| match item {
        Value::String(s) => Some(s),
        _ => None,
    })
}

fn lenient_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => String::new(),
    })
}

fn lenient_tags<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => split_tags(&s),
        Value::Array(items) => string_items(items).collect(),
        _ => Vec::new(),
    })
}

fn topic_tags<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
    let topics: IndexSet<String> = lenient_tags(deserializer)?
        .iter()
        .map(|t| canonical_topic(t))
        .collect();
    Ok(topics.into_iter().collect())
}

fn user_tags<'de, D: Deserializer<'de>>(deserializer: D) -> Result<TagSet, D::Error> {
    let tags = TagSet::deserialize(deserializer)?;
    Ok(tags.map_tags(|t| canonical_user_tag(&t)))
}
