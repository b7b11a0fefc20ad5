//! Catalog builder - the distinct filter values offered for a mode.

use indexmap::IndexSet;
use tracing::debug;

use crate::types::flow::FlowAnswers;
use crate::types::normalized::NormalizedResource;
use crate::types::selection::{FilterMode, FilterSelection, ALL};

/// Build the ordered, duplicate-free filter values for the base list.
///
/// Always starts with `all`. Category mode lists categories; topic mode
/// lists topics under the flow category, or under every category when the
/// flow has none. Values keep first-seen order. A feed tag literally named
/// `all` is dropped, since that value always means the catch-all.
pub fn build_catalog(
    base: &[NormalizedResource],
    mode: FilterMode,
    flow: Option<&FlowAnswers>,
) -> Vec<FilterSelection> {
    let mut values: IndexSet<&str> = IndexSet::new();

    match mode {
        FilterMode::Category => {
            for resource in base {
                values.extend(resource.categories.iter().map(String::as_str));
            }
        }
        FilterMode::Topic => {
            let scope = flow.and_then(FlowAnswers::category);
            for resource in base {
                match scope {
                    Some(category) => {
                        values.extend(resource.topics_in(category).map(String::as_str))
                    }
                    None => values.extend(resource.all_topics().into_iter().map(String::as_str)),
                }
            }
        }
    }

    if values.shift_remove(ALL) {
        debug!(mode = %mode, "Feed tag named \"all\" shadowed by the catch-all filter");
    }

    std::iter::once(FilterSelection::All)
        .chain(values.into_iter().map(FilterSelection::tag))
        .collect()
}
