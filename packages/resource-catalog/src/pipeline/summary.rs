//! Result summarizer - title, subtitle and filter heading text.

use serde::{Deserialize, Serialize};

use crate::pipeline::labels::category_label;
use crate::types::flow::FlowAnswers;
use crate::types::selection::{FilterMode, FilterSelection};

const ALL_RESOURCES_TITLE: &str = "All Resources";
const SORTED_TEXT: &str = "Sorted alphabetically by title";
const FILTERED_SORTED_TEXT: &str = "Filtered and sorted alphabetically by title";

/// Title/subtitle pair describing the visible results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultSummary {
    pub title: String,
    pub subtitle: String,
}

/// Describe the current results.
///
/// The flow category wins over an interactive selection. Pass `None` for
/// `count` on the initial paint, before filtering has run.
pub fn summarize(
    flow: Option<&FlowAnswers>,
    selection: &FilterSelection,
    count: Option<usize>,
) -> ResultSummary {
    let mut parts: Vec<String> = Vec::new();

    if let Some(role) = flow.and_then(|f| f.role) {
        parts.push(role.label().to_string());
    }

    match (flow.and_then(FlowAnswers::category), selection) {
        (Some(category), _) => parts.push(category_label(category)),
        (None, FilterSelection::Tag(tag)) => parts.push(category_label(tag)),
        (None, FilterSelection::All) => {}
    }

    let language_suffix = flow
        .and_then(|f| f.language)
        .and_then(|lang| lang.label())
        .map(|label| format!(" ({})", label))
        .unwrap_or_default();

    let title = if parts.is_empty() {
        ALL_RESOURCES_TITLE.to_string()
    } else {
        format!("{} Resources{}", parts.join(" • "), language_suffix)
    };

    let sorted_text = if parts.is_empty() {
        SORTED_TEXT
    } else {
        FILTERED_SORTED_TEXT
    };

    let subtitle = match count {
        Some(n) => format!("{} result{}. {}", n, if n == 1 { "" } else { "s" }, sorted_text),
        None => sorted_text.to_string(),
    };

    ResultSummary { title, subtitle }
}

/// Heading above the filter buttons.
pub fn filters_heading(mode: FilterMode, flow: Option<&FlowAnswers>) -> String {
    match (mode, flow.and_then(FlowAnswers::category)) {
        (FilterMode::Topic, Some(category)) => {
            format!("Filter by {} Subtopics", category_label(category))
        }
        _ => "Filter by Category".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::flow::{FlowLanguage, Role};

    #[test]
    fn test_no_parts_is_all_resources() {
        let summary = summarize(None, &FilterSelection::All, Some(12));
        assert_eq!(summary.title, "All Resources");
        assert_eq!(summary.subtitle, "12 results. Sorted alphabetically by title");
    }

    #[test]
    fn test_full_flow_title() {
        let flow = FlowAnswers::new()
            .with_role(Role::Carepartners)
            .with_language(FlowLanguage::Es)
            .with_category("advance-care-planning");

        let summary = summarize(Some(&flow), &FilterSelection::tag("wills"), Some(1));
        assert_eq!(
            summary.title,
            "Care Partners • Advance Care Planning Resources (Spanish)"
        );
        assert_eq!(
            summary.subtitle,
            "1 result. Filtered and sorted alphabetically by title"
        );
    }

    #[test]
    fn test_selection_used_without_flow_category() {
        let summary = summarize(None, &FilterSelection::tag("end-of-life"), Some(0));
        assert_eq!(summary.title, "End Of Life Resources");
        assert_eq!(
            summary.subtitle,
            "0 results. Filtered and sorted alphabetically by title"
        );
    }

    #[test]
    fn test_both_language_has_no_suffix() {
        let flow = FlowAnswers::new()
            .with_role(Role::Patients)
            .with_language(FlowLanguage::Both);
        let summary = summarize(Some(&flow), &FilterSelection::All, None);
        assert_eq!(summary.title, "Patients Resources");
        assert_eq!(summary.subtitle, "Filtered and sorted alphabetically by title");
    }

    #[test]
    fn test_language_alone_does_not_make_a_title() {
        let flow = FlowAnswers::new().with_language(FlowLanguage::En);
        let summary = summarize(Some(&flow), &FilterSelection::All, None);
        assert_eq!(summary.title, "All Resources");
        assert_eq!(summary.subtitle, "Sorted alphabetically by title");
    }

    #[test]
    fn test_filters_heading() {
        let flow = FlowAnswers::new().with_category("end-of-life");
        assert_eq!(
            filters_heading(FilterMode::Topic, Some(&flow)),
            "Filter by End Of Life Subtopics"
        );
        assert_eq!(
            filters_heading(FilterMode::Topic, Some(&FlowAnswers::new())),
            "Filter by Category"
        );
        assert_eq!(filters_heading(FilterMode::Category, None), "Filter by Category");
    }
}
