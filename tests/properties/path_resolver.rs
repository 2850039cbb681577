//! Property tests for longest-prefix project resolution.

use proptest::prelude::*;

use manifest_split::domain::entities::ProjectIndex;
use manifest_split::domain::services::resolve;

fn segments() -> impl Strategy<Value = Vec<String>> {
    proptest::collection::vec("[a-z]{1,6}", 1..=5)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: a file resolves to the deepest project whose path prefixes it.
    #[test]
    fn property_innermost_project_wins(
        segments in segments(),
        picks in proptest::collection::vec(any::<bool>(), 5),
    ) {
        let prefixes: Vec<String> = (1..=segments.len())
            .map(|n| segments[..n].join("/"))
            .collect();
        let projects: Vec<&String> = prefixes
            .iter()
            .zip(&picks)
            .filter(|(_, picked)| **picked)
            .map(|(p, _)| p)
            .collect();
        let index = ProjectIndex::from_pairs(projects.iter().map(|p| (p.as_str(), p.as_str())));
        let file = format!("{}/file.mk", segments.join("/"));

        let resolved = resolve(&index, &file).map(|p| p.path);

        prop_assert_eq!(resolved, projects.last().map(|p| p.to_string()));
    }

    /// PROPERTY: a sibling sharing a name prefix never matches.
    #[test]
    fn property_prefix_must_end_at_separator(name in "[a-z]{1,6}", tail in "[a-z]{1,6}") {
        let index = ProjectIndex::from_pairs([(name.as_str(), name.as_str())]);
        let file = format!("{name}{tail}/file.mk");

        prop_assert!(resolve(&index, &file).is_none());
    }
}
