//! Catalog view - the one mutable cell per page load.
//!
//! [`CatalogView`] owns the flow-filtered base list, the filter catalog, the
//! active [`FilterSelection`] and the [`ViewState`]. Every interaction goes
//! through [`CatalogView::select`], which maps `(mode, selection)` to a
//! deterministic [`Render`].

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::pipeline::catalog::build_catalog;
use crate::pipeline::flow_filter::apply_flow_filters;
use crate::pipeline::labels::{filter_button_label, TopicLabels};
use crate::pipeline::normalize::{normalize, sort_by_title};
use crate::pipeline::secondary::apply_secondary_filter;
use crate::pipeline::summary::{filters_heading, summarize, ResultSummary};
use crate::types::config::CatalogConfig;
use crate::types::flow::FlowAnswers;
use crate::types::normalized::NormalizedResource;
use crate::types::resource::Resource;
use crate::types::selection::{FilterMode, FilterSelection, ViewState};

pub const NO_RESULTS_TITLE: &str = "No results found";
pub const NO_RESULTS_HINT: &str = "Press Back to try different filters, or view all resources.";
pub const VIEW_ALL_LABEL: &str = "View All Resources";

/// One filter button.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterButton {
    pub value: FilterSelection,
    pub label: String,
    pub active: bool,
}

/// Filter controls for the current mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterBar {
    pub heading: String,
    pub buttons: Vec<FilterButton>,
}

/// Everything the presentation layer needs to draw the page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Render {
    pub state: ViewState,
    pub mode: FilterMode,
    pub summary: ResultSummary,
    /// Hidden (`None`) in the empty state
    pub filters: Option<FilterBar>,
    pub resources: Vec<NormalizedResource>,
}

impl Render {
    pub fn is_empty(&self) -> bool {
        self.state == ViewState::Empty
    }
}

/// Catalog state for a single page load.
#[derive(Debug, Clone)]
pub struct CatalogView {
    flow: Option<FlowAnswers>,
    mode: FilterMode,
    base: Vec<NormalizedResource>,
    catalog: Vec<FilterSelection>,
    selection: FilterSelection,
    state: ViewState,
    topic_labels: TopicLabels,
}

impl CatalogView {
    /// Build the view from raw resources and optional flow answers.
    ///
    /// Sorts (if configured), merges duplicates with the policy for the
    /// mode, applies the flow filter and builds the filter catalog. The
    /// selection starts at `all`.
    pub fn build(resources: &[Resource], flow: Option<FlowAnswers>, config: &CatalogConfig) -> Self {
        let mode = FilterMode::for_flow(flow.as_ref());

        let mut ordered = resources.to_vec();
        if config.sort_by_title {
            sort_by_title(&mut ordered);
        }

        let normalized = normalize(&ordered, config.merge_policy_for(mode));
        let base = apply_flow_filters(&normalized, flow.as_ref());
        let catalog = build_catalog(&base, mode, flow.as_ref());

        info!(
            mode = %mode,
            resources = normalized.len(),
            base = base.len(),
            filters = catalog.len(),
            "Built catalog view"
        );

        let mut view = Self {
            flow,
            mode,
            base,
            catalog,
            selection: FilterSelection::All,
            state: ViewState::Normal,
            topic_labels: config.topic_labels.clone(),
        };
        view.state = ViewState::for_count(view.visible().len());
        view
    }

    pub fn mode(&self) -> FilterMode {
        self.mode
    }

    pub fn flow(&self) -> Option<&FlowAnswers> {
        self.flow.as_ref()
    }

    /// Flow-filtered base list.
    pub fn base(&self) -> &[NormalizedResource] {
        &self.base
    }

    /// Filter values for the current mode, starting with `all`.
    pub fn catalog(&self) -> &[FilterSelection] {
        &self.catalog
    }

    pub fn selection(&self) -> &FilterSelection {
        &self.selection
    }

    pub fn state(&self) -> ViewState {
        self.state
    }

    pub fn topic_labels(&self) -> &TopicLabels {
        &self.topic_labels
    }

    /// Fully filtered list for the current selection.
    pub fn visible(&self) -> Vec<NormalizedResource> {
        apply_secondary_filter(&self.base, self.mode, &self.selection, self.flow.as_ref())
    }

    /// Select a filter value and render.
    pub fn select(&mut self, value: impl Into<FilterSelection>) -> Render {
        self.selection = value.into();
        let render = self.render();
        if render.state != self.state {
            debug!(from = ?self.state, to = ?render.state, "View state changed");
        }
        self.state = render.state;
        render
    }

    /// Render the current selection.
    pub fn render(&self) -> Render {
        let resources = self.visible();
        let state = ViewState::for_count(resources.len());
        let summary = summarize(self.flow.as_ref(), &self.selection, Some(resources.len()));

        let filters = match state {
            ViewState::Normal => Some(self.filter_bar()),
            ViewState::Empty => None,
        };

        Render {
            state,
            mode: self.mode,
            summary,
            filters,
            resources,
        }
    }

    /// Summary for the initial paint, before any filtering has run.
    pub fn initial_summary(&self) -> ResultSummary {
        summarize(self.flow.as_ref(), &FilterSelection::All, None)
    }

    fn filter_bar(&self) -> FilterBar {
        FilterBar {
            heading: filters_heading(self.mode, self.flow.as_ref()),
            buttons: self
                .catalog
                .iter()
                .map(|value| FilterButton {
                    value: value.clone(),
                    label: filter_button_label(value, self.mode, &self.topic_labels),
                    active: *value == self.selection,
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::flow::Role;

    fn resources() -> Vec<Resource> {
        vec![
            Resource::new("Comfort Positions")
                .with_categories(["comfort"])
                .with_topics(["positioning"])
                .with_users(["patients"]),
            Resource::new("Breathing Basics")
                .with_categories(["breathing"])
                .with_topics(["mechanics"])
                .with_users(["patients", "clinicians"]),
            Resource::new("breathing basics")
                .with_categories(["breathing", "comfort"])
                .with_topics(["positioning"]),
        ]
    }

    #[test]
    fn test_build_without_flow_is_category_mode() {
        let view = CatalogView::build(&resources(), None, &CatalogConfig::default());

        assert_eq!(view.mode(), FilterMode::Category);
        assert_eq!(view.base().len(), 2);
        assert_eq!(view.base()[0].title, "Breathing Basics");
        let catalog: Vec<_> = view.catalog().iter().map(|v| v.as_str()).collect();
        assert_eq!(catalog, vec!["all", "breathing", "comfort"]);
        assert_eq!(view.state(), ViewState::Normal);
    }

    #[test]
    fn test_select_marks_active_button() {
        let mut view = CatalogView::build(&resources(), None, &CatalogConfig::default());
        let render = view.select("comfort");

        assert_eq!(render.resources.len(), 2);
        let filters = render.filters.unwrap();
        assert_eq!(filters.heading, "Filter by Category");
        let active: Vec<_> = filters
            .buttons
            .iter()
            .filter(|b| b.active)
            .map(|b| b.label.as_str())
            .collect();
        assert_eq!(active, vec!["comfort"]);
        assert_eq!(render.summary.title, "Comfort Resources");
    }

    #[test]
    fn test_zero_results_hides_filters_and_recovers() {
        let flow = FlowAnswers::new()
            .with_role(Role::Patients)
            .with_category("breathing");
        let mut view = CatalogView::build(&resources(), Some(flow), &CatalogConfig::default());
        assert_eq!(view.mode(), FilterMode::Topic);

        let empty = view.select("positioning-x");
        assert!(empty.is_empty());
        assert!(empty.filters.is_none());
        assert_eq!(view.state(), ViewState::Empty);
        assert_eq!(empty.summary.subtitle, "0 results. Filtered and sorted alphabetically by title");

        let back = view.select("positioning");
        assert_eq!(back.state, ViewState::Normal);
        assert_eq!(back.resources.len(), 1);
        assert_eq!(view.state(), ViewState::Normal);
    }

    #[test]
    fn test_flow_narrowed_to_nothing_starts_empty() {
        let flow = FlowAnswers::new().with_category("legal");
        let view = CatalogView::build(&resources(), Some(flow), &CatalogConfig::default());

        assert_eq!(view.state(), ViewState::Empty);
        assert_eq!(view.catalog(), &[FilterSelection::All]);
        assert!(view.render().filters.is_none());
    }

    #[test]
    fn test_topic_buttons_use_topic_labels() {
        let resources = vec![Resource::new("Vent Guide")
            .with_categories(["breathing"])
            .with_topics(["Breathing Assistance Decisions"])];
        let flow = FlowAnswers::new().with_category("breathing");
        let view = CatalogView::build(&resources, Some(flow), &CatalogConfig::default());

        let filters = view.render().filters.unwrap();
        assert_eq!(filters.heading, "Filter by Breathing Subtopics");
        let labels: Vec<_> = filters.buttons.iter().map(|b| b.label.as_str()).collect();
        assert_eq!(labels, vec!["All", "Breathing"]);
    }

    #[test]
    fn test_feed_topic_shorthand_reaches_topic_labels() {
        let resources: Vec<Resource> = serde_json::from_str(
            r#"[{"title": "Tube Feeding", "category": ["advance-care-planning"], "topics": ["feeding"]}]"#,
        )
        .unwrap();
        let flow = FlowAnswers::new().with_category("advance-care-planning");
        let view = CatalogView::build(&resources, Some(flow), &CatalogConfig::default());

        let filters = view.render().filters.unwrap();
        let labels: Vec<_> = filters.buttons.iter().map(|b| b.label.as_str()).collect();
        assert_eq!(labels, vec!["All", "Feeding"]);
        assert_eq!(
            view.catalog()[1],
            FilterSelection::tag("Feeding Assistance Decisions")
        );
    }

    #[test]
    fn test_initial_summary_has_no_count() {
        let view = CatalogView::build(&resources(), None, &CatalogConfig::default());
        assert_eq!(view.initial_summary().subtitle, "Sorted alphabetically by title");
    }
}
