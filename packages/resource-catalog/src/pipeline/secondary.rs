//! Secondary filter - the interactively selected category or topic.

use crate::types::flow::FlowAnswers;
use crate::types::normalized::NormalizedResource;
use crate::types::selection::{FilterMode, FilterSelection};

/// Whether one resource passes the secondary filter.
///
/// In topic mode with a flow category, only topics listed under that
/// category count; a topic filed under another category does not match.
pub fn matches_selection(
    resource: &NormalizedResource,
    mode: FilterMode,
    selection: &FilterSelection,
    flow: Option<&FlowAnswers>,
) -> bool {
    let FilterSelection::Tag(tag) = selection else {
        return true;
    };

    match mode {
        FilterMode::Category => resource.in_category(tag),
        FilterMode::Topic => match flow.and_then(FlowAnswers::category) {
            Some(scope) => resource.has_topic_in(scope, tag),
            None => resource.has_topic(tag),
        },
    }
}

/// Apply the secondary filter to the flow-filtered base list.
pub fn apply_secondary_filter(
    base: &[NormalizedResource],
    mode: FilterMode,
    selection: &FilterSelection,
    flow: Option<&FlowAnswers>,
) -> Vec<NormalizedResource> {
    if selection.is_all() {
        return base.to_vec();
    }

    base.iter()
        .filter(|r| matches_selection(r, mode, selection, flow))
        .cloned()
        .collect()
}
