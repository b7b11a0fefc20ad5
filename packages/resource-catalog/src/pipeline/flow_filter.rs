//! Flow context filter - narrow the catalog by the guided flow answers.
//!
//! Three conjunctive predicates, applied in order: role, language, category.
//! Each is skipped when the matching answer is absent.

use tracing::debug;

use crate::types::flow::FlowAnswers;
use crate::types::normalized::NormalizedResource;

/// Role predicate. Unrestricted `users` always pass.
pub fn matches_role(resource: &NormalizedResource, flow: &FlowAnswers) -> bool {
    match flow.role {
        Some(role) => resource.users.permits(role.tag()),
        None => true,
    }
}

/// Language predicate. `both` and unrestricted `language` always pass.
pub fn matches_language(resource: &NormalizedResource, flow: &FlowAnswers) -> bool {
    match flow.required_language() {
        Some(tag) => resource.language.permits(tag),
        None => true,
    }
}

/// Category predicate.
pub fn matches_category(resource: &NormalizedResource, flow: &FlowAnswers) -> bool {
    match flow.category() {
        Some(category) => resource.in_category(category),
        None => true,
    }
}

/// Whether a resource survives every flow predicate.
pub fn matches_flow(resource: &NormalizedResource, flow: &FlowAnswers) -> bool {
    matches_role(resource, flow) && matches_language(resource, flow) && matches_category(resource, flow)
}

/// Apply the flow filter. Absent answers return the input unchanged.
///
/// The result keeps input order and is the base list for secondary
/// filtering and catalog building.
pub fn apply_flow_filters(
    resources: &[NormalizedResource],
    flow: Option<&FlowAnswers>,
) -> Vec<NormalizedResource> {
    let Some(flow) = flow else {
        return resources.to_vec();
    };

    let kept: Vec<NormalizedResource> = resources
        .iter()
        .filter(|r| matches_flow(r, flow))
        .cloned()
        .collect();

    debug!(
        input = resources.len(),
        kept = kept.len(),
        role = ?flow.role,
        language = ?flow.language,
        category = ?flow.category(),
        "Applied flow filters"
    );

    kept
}
