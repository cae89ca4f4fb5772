//! Property-based tests for path list deduplication.

use super::{dedupe_path_list, trim_trailing_separators, PathList};
use proptest::prelude::*;
use std::collections::HashSet;

// Entries drawn from a tiny alphabet so duplicates are common.
fn entry_strategy() -> impl Strategy<Value = String> {
    "[ab/\\\\]{0,4}"
}

fn path_list_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(entry_strategy(), 0..12).prop_map(|parts| parts.join(";"))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        .. ProptestConfig::default()
    })]

    #[test]
    fn output_has_no_duplicates(input in path_list_strategy()) {
        let output = dedupe_path_list(&input, ';');
        let entries: Vec<&str> = output.split(';').collect();
        let unique: HashSet<&str> = entries.iter().copied().collect();
        prop_assert_eq!(entries.len(), unique.len());
    }

    #[test]
    fn first_appearance_order_preserved(input in path_list_strategy()) {
        let mut expected: Vec<&str> = Vec::new();
        for entry in input.split(';').map(trim_trailing_separators) {
            if !expected.contains(&entry) {
                expected.push(entry);
            }
        }
        prop_assert_eq!(dedupe_path_list(&input, ';'), expected.join(";"));
    }

    #[test]
    fn dedupe_is_idempotent(input in path_list_strategy()) {
        let once = dedupe_path_list(&input, ';');
        let twice = dedupe_path_list(&once, ';');
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn output_entries_come_from_input(input in path_list_strategy()) {
        let trimmed: HashSet<&str> = input.split(';').map(trim_trailing_separators).collect();
        let output = dedupe_path_list(&input, ';');
        for entry in output.split(';') {
            prop_assert!(trimmed.contains(entry));
        }
    }

    #[test]
    fn output_entries_have_no_trailing_separator(input in path_list_strategy()) {
        let list = PathList::parse(&input, ';').dedupe();
        for entry in list.entries() {
            prop_assert!(!entry.ends_with('/') && !entry.ends_with('\\'));
        }
    }

    #[test]
    fn never_grows(input in path_list_strategy()) {
        prop_assert!(dedupe_path_list(&input, ';').len() <= input.len());
    }
}
