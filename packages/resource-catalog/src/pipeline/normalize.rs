//! Normalizer - collapse duplicate titles into one record.
//!
//! Duplicates are detected by normalized title (trim + lower-case). The first
//! occurrence supplies url/source/type/description/users/language verbatim;
//! categories and topics are unioned according to the [`MergePolicy`].

use indexmap::IndexMap;
use tracing::debug;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use crate::types::config::MergePolicy;
use crate::types::normalized::{normalize_title, NormalizedResource};
use crate::types::resource::Resource;

/// Sort resources by title ignoring case and accents. Ties keep feed order.
pub fn sort_by_title(resources: &mut [Resource]) {
    resources.sort_by_cached_key(|r| title_sort_key(&r.title));
}

/// Base-letter sort key: decomposed, combining marks dropped, lower-cased.
pub fn title_sort_key(title: &str) -> String {
    title
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
}

/// Merge resources sharing a normalized title.
///
/// Output order is first-insertion order into the merge map.
pub fn normalize(resources: &[Resource], policy: MergePolicy) -> Vec<NormalizedResource> {
    let mut merged: IndexMap<String, NormalizedResource> = IndexMap::new();

    for resource in resources {
        let key = normalize_title(&resource.title);
        let first_seen = !merged.contains_key(&key);
        let record = merged
            .entry(key)
            .or_insert_with(|| NormalizedResource::seed(resource));

        let take_topics = first_seen || policy == MergePolicy::CategoriesAndTopics;
        for category in &resource.category {
            if take_topics {
                record.add_topics(category, &resource.topics);
            } else {
                record.add_category(category);
            }
        }
    }

    debug!(
        input = resources.len(),
        output = merged.len(),
        policy = %policy,
        "Normalized resources"
    );

    merged.into_values().collect()
}

/// Run the merge again over already-normalized records.
///
/// Records that share a title are folded together with the same rules as
/// [`normalize`]. On normalizer output this is the identity.
pub fn renormalize(records: &[NormalizedResource], policy: MergePolicy) -> Vec<NormalizedResource> {
    let mut merged: IndexMap<String, NormalizedResource> = IndexMap::new();

    for record in records {
        let key = record.key();
        if let Some(existing) = merged.get_mut(&key) {
            for (category, topics) in &record.topics_by_category {
                match policy {
                    MergePolicy::CategoriesAndTopics => existing.add_topics(category, topics),
                    MergePolicy::CategoriesOnly => existing.add_category(category),
                }
            }
        } else {
            merged.insert(key, record.clone());
        }
    }

    merged.into_values().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use indexmap::{IndexMap, IndexSet};
    use proptest::prelude::*;

    fn set(items: &[&str]) -> IndexSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_breathing_basics_merge() {
        let resources = vec![
            Resource::new("Breathing Basics")
                .with_categories(["breathing"])
                .with_topics(["mechanics"]),
            Resource::new("Breathing Basics")
                .with_categories(["breathing", "comfort"])
                .with_topics(["positioning"]),
        ];

        let normalized = normalize(&resources, MergePolicy::CategoriesAndTopics);

        assert_eq!(normalized.len(), 1);
        let record = &normalized[0];
        assert_eq!(record.categories, set(&["breathing", "comfort"]));

        let mut expected = IndexMap::new();
        expected.insert("breathing".to_string(), set(&["mechanics", "positioning"]));
        expected.insert("comfort".to_string(), set(&["positioning"]));
        assert_eq!(record.topics_by_category, expected);
    }

    #[test]
    fn test_first_occurrence_supplies_scalars() {
        let resources = vec![
            Resource::new("Feeding Choices")
                .with_url("https://a.example")
                .with_source("ALS Association")
                .with_users(["patients"]),
            Resource::new("  feeding choices ")
                .with_url("https://b.example")
                .with_source("Other")
                .with_users(["clinicians"]),
        ];

        let normalized = normalize(&resources, MergePolicy::CategoriesAndTopics);

        assert_eq!(normalized.len(), 1);
        assert_eq!(normalized[0].title, "Feeding Choices");
        assert_eq!(normalized[0].url, "https://a.example");
        assert_eq!(normalized[0].source, "ALS Association");
        assert!(normalized[0].users.permits("patients"));
        assert!(!normalized[0].users.permits("clinicians"));
    }

    #[test]
    fn test_categories_only_policy_keeps_first_topics() {
        let resources = vec![
            Resource::new("Breathing Basics")
                .with_categories(["breathing"])
                .with_topics(["mechanics"]),
            Resource::new("Breathing Basics")
                .with_categories(["breathing", "comfort"])
                .with_topics(["positioning"]),
        ];

        let normalized = normalize(&resources, MergePolicy::CategoriesOnly);

        let record = &normalized[0];
        assert_eq!(record.categories, set(&["breathing", "comfort"]));
        assert_eq!(record.topics_by_category["breathing"], set(&["mechanics"]));
        assert!(record.topics_by_category["comfort"].is_empty());
    }

    #[test]
    fn test_missing_category_contributes_nothing() {
        let resources = vec![
            Resource::new("No Category").with_topics(["orphan"]),
            Resource::new("Has Category").with_categories(["comfort"]),
        ];

        let normalized = normalize(&resources, MergePolicy::CategoriesAndTopics);

        assert_eq!(normalized.len(), 2);
        assert!(normalized[0].categories.is_empty());
        assert!(normalized[0].topics_by_category.is_empty());
        assert_eq!(normalized[1].categories, set(&["comfort"]));
    }

    #[test]
    fn test_sort_is_case_insensitive_and_stable() {
        let mut resources = vec![
            Resource::new("beta").with_url("1"),
            Resource::new("Alpha"),
            Resource::new("Beta").with_url("2"),
        ];
        sort_by_title(&mut resources);

        let titles: Vec<_> = resources.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["Alpha", "beta", "Beta"]);
    }

    #[test]
    fn test_sort_ignores_accents() {
        let mut resources = vec![
            Resource::new("Exercise Tips"),
            Resource::new("Émotions et ALS"),
            Resource::new("Zinc Guide"),
            Resource::new("Cuidados Paliativos"),
            Resource::new("Cómo Respirar"),
        ];
        sort_by_title(&mut resources);

        let titles: Vec<_> = resources.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(
            titles,
            vec![
                "Cómo Respirar",
                "Cuidados Paliativos",
                "Émotions et ALS",
                "Exercise Tips",
                "Zinc Guide",
            ]
        );
    }

    #[test]
    fn test_title_sort_key_folds_case_and_accents() {
        assert_eq!(title_sort_key("Émotions"), "emotions");
        assert_eq!(title_sort_key("NIÑOS"), "ninos");
    }

    fn arb_resource() -> impl Strategy<Value = Resource> {
        let tag = prop::sample::select(vec!["breathing", "comfort", "feeding", "legal"]);
        let topic = prop::sample::select(vec!["mechanics", "positioning", "tubes", "wills"]);
        let title = prop::sample::select(vec!["Alpha", "alpha ", "Beta", "BETA", "Gamma"]);
        (
            title,
            prop::collection::vec(tag, 0..4),
            prop::collection::vec(topic, 0..4),
        )
            .prop_map(|(title, categories, topics)| {
                Resource::new(title)
                    .with_categories(categories)
                    .with_topics(topics)
            })
    }

    fn arb_policy() -> impl Strategy<Value = MergePolicy> {
        prop_oneof![
            Just(MergePolicy::CategoriesAndTopics),
            Just(MergePolicy::CategoriesOnly)
        ]
    }

    proptest! {
        #[test]
        fn prop_normalize_is_idempotent(
            resources in prop::collection::vec(arb_resource(), 0..12),
            policy in arb_policy(),
        ) {
            let once = normalize(&resources, policy);
            let twice = renormalize(&once, policy);
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn prop_titles_unique_and_categories_keyed(
            resources in prop::collection::vec(arb_resource(), 0..12),
            policy in arb_policy(),
        ) {
            let normalized = normalize(&resources, policy);

            let keys: IndexSet<_> = normalized.iter().map(|r| r.key()).collect();
            prop_assert_eq!(keys.len(), normalized.len());

            for record in &normalized {
                for category in record.topics_by_category.keys() {
                    prop_assert!(record.categories.contains(category));
                }
                for category in &record.categories {
                    prop_assert!(record.topics_by_category.contains_key(category));
                }
            }
        }
    }
}
