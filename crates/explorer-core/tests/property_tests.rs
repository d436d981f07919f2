//! Property-based tests for the ordering comparators and engine

use explorer_core::ordering::{DirectoryEntry, folders_first_then_alpha, locale_compare, order_entries};
use explorer_fs::NormalizedPath;
use proptest::prelude::*;
use std::cmp::Ordering;
use std::collections::HashSet;

fn name() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9._ -]{1,12}"
}

fn listing() -> impl Strategy<Value = Vec<(String, bool)>> {
    prop::collection::vec((name(), any::<bool>()), 0..16).prop_map(|items| {
        let mut seen = HashSet::new();
        items
            .into_iter()
            .filter(|(n, _)| seen.insert(n.clone()))
            .collect()
    })
}

fn to_entries(items: &[(String, bool)]) -> Vec<DirectoryEntry> {
    let parent = NormalizedPath::new("/proj");
    items
        .iter()
        .map(|(n, d)| DirectoryEntry::new(n.clone(), *d, parent.clone()))
        .collect()
}

proptest! {
    #[test]
    fn comparator_is_antisymmetric(
        a in name(),
        b in name(),
        a_dir in any::<bool>(),
        b_dir in any::<bool>(),
        folders_first in any::<bool>(),
    ) {
        prop_assume!(a != b);
        let forward = folders_first_then_alpha((a.as_str(), a_dir), (b.as_str(), b_dir), folders_first);
        let backward = folders_first_then_alpha((b.as_str(), b_dir), (a.as_str(), a_dir), folders_first);
        prop_assert_eq!(forward, backward.reverse());
    }

    #[test]
    fn locale_compare_never_ties_distinct_names(a in name(), b in name()) {
        prop_assume!(a != b);
        prop_assert_ne!(locale_compare(&a, &b), Ordering::Equal);
    }

    #[test]
    fn ordering_is_a_permutation(items in listing(), tokens in prop::collection::vec(name(), 0..6)) {
        let entries = to_entries(&items);
        let result = order_entries(entries, &tokens, true);

        let mut before: Vec<&str> = items.iter().map(|(n, _)| n.as_str()).collect();
        let mut after: Vec<&str> = result.iter().map(|e| e.name.as_str()).collect();
        before.sort_unstable();
        after.sort_unstable();
        prop_assert_eq!(before, after);

        for (index, entry) in result.iter().enumerate() {
            prop_assert_eq!(entry.position, index);
        }
    }

    #[test]
    fn custom_entries_precede_the_sorted_remainder(
        items in listing(),
        tokens in prop::collection::vec(name(), 0..6),
        folders_first in any::<bool>(),
    ) {
        let result = order_entries(to_entries(&items), &tokens, folders_first);

        let first_rest = result.iter().position(|e| !e.custom_ordered).unwrap_or(result.len());
        prop_assert!(result[first_rest..].iter().all(|e| !e.custom_ordered));

        for pair in result[first_rest..].windows(2) {
            let order = folders_first_then_alpha(
                (pair[0].name.as_str(), pair[0].is_directory),
                (pair[1].name.as_str(), pair[1].is_directory),
                folders_first,
            );
            prop_assert_eq!(order, Ordering::Less);
        }
    }
}
