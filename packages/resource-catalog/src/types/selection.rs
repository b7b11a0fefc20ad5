//! Secondary filter mode, the active selection, and the view state.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::types::flow::FlowAnswers;

/// Literal value of the catch-all filter.
pub const ALL: &str = "all";

/// What the filter buttons select on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterMode {
    /// No flow context: buttons are categories
    Category,
    /// Flow context present: buttons are topics
    Topic,
}

impl FilterMode {
    /// Mode for a page load, fixed by whether flow answers exist.
    pub fn for_flow(flow: Option<&FlowAnswers>) -> Self {
        match flow {
            Some(_) => FilterMode::Topic,
            None => FilterMode::Category,
        }
    }
}

impl fmt::Display for FilterMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterMode::Category => f.write_str("category"),
            FilterMode::Topic => f.write_str("topic"),
        }
    }
}

/// The single active secondary filter value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FilterSelection {
    #[default]
    All,
    Tag(String),
}

impl FilterSelection {
    pub fn tag(value: impl Into<String>) -> Self {
        Self::from(value.into())
    }

    pub fn is_all(&self) -> bool {
        matches!(self, FilterSelection::All)
    }

    pub fn as_str(&self) -> &str {
        match self {
            FilterSelection::All => ALL,
            FilterSelection::Tag(tag) => tag,
        }
    }
}

impl From<String> for FilterSelection {
    fn from(value: String) -> Self {
        if value == ALL {
            FilterSelection::All
        } else {
            FilterSelection::Tag(value)
        }
    }
}

impl From<&str> for FilterSelection {
    fn from(value: &str) -> Self {
        Self::from(value.to_string())
    }
}

impl From<FilterSelection> for String {
    fn from(selection: FilterSelection) -> Self {
        selection.as_str().to_string()
    }
}

impl fmt::Display for FilterSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Zero-result fallback state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewState {
    #[default]
    Normal,
    /// Fully filtered list is empty; filter controls are hidden
    Empty,
}

impl ViewState {
    pub fn for_count(count: usize) -> Self {
        if count == 0 {
            ViewState::Empty
        } else {
            ViewState::Normal
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_literal_maps_to_all() {
        assert!(FilterSelection::from("all").is_all());
        assert_eq!(FilterSelection::from("breathing").as_str(), "breathing");
        assert_eq!(FilterSelection::default().to_string(), "all");
    }

    #[test]
    fn test_mode_follows_flow_presence() {
        assert_eq!(FilterMode::for_flow(None), FilterMode::Category);
        assert_eq!(
            FilterMode::for_flow(Some(&FlowAnswers::new())),
            FilterMode::Topic
        );
    }

    #[test]
    fn test_view_state_for_count() {
        assert_eq!(ViewState::for_count(0), ViewState::Empty);
        assert_eq!(ViewState::for_count(3), ViewState::Normal);
    }
}
