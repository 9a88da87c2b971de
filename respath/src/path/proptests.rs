//! Property-based tests for path combination.
//!
//! Note: The normalize module already has property tests for normalization.
//! This module focuses on how combination and relative paths interact.

use super::normalize::{get_directory, is_absolute, normalize, split_path};
use super::relative::{combine_display_paths, get_relative_path};
use proptest::prelude::*;

fn segment_strategy() -> impl Strategy<Value = String> {
    "[a-z0-9_-]{1,12}"
}

fn absolute_path_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(segment_strategy(), 1..8)
        .prop_map(|parts| format!("/{}", parts.join("/")))
}

// The directory of a parent directly under "/" is "", which does not round-trip
fn parent_path_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(segment_strategy(), 2..8)
        .prop_map(|parts| format!("/{}", parts.join("/")))
}

fn relative_path_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(segment_strategy(), 1..5).prop_map(|parts| parts.join("/"))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 10000,
        max_shrink_iters: 10000,
        .. ProptestConfig::default()
    })]

    // Combining with an absolute parent yields an absolute path
    #[test]
    fn combine_with_absolute_parent_is_absolute(parent in parent_path_strategy(), child in relative_path_strategy()) {
        prop_assert!(is_absolute(&combine_display_paths(Some(&parent), &child)));
    }

    // An absolute child ignores the parent entirely
    #[test]
    fn absolute_child_ignores_parent(parent in parent_path_strategy(), child in absolute_path_strategy()) {
        prop_assert_eq!(combine_display_paths(Some(&parent), &child), child);
    }

    // Combined paths live below the parent directory
    #[test]
    fn combined_path_below_parent_directory(parent in parent_path_strategy(), child in relative_path_strategy()) {
        let combined = combine_display_paths(Some(&parent), &child);
        let directory = get_directory(&parent);
        prop_assert!(combined.starts_with(&format!("{directory}/")));
    }

    // Relative path of a combined child is the child again
    #[test]
    fn relative_inverts_combine(parent in parent_path_strategy(), child in relative_path_strategy()) {
        let combined = combine_display_paths(Some(&parent), &child);
        prop_assert_eq!(get_relative_path(&parent, &combined), child);
    }

    // Combining the relative form reproduces the absolute path
    #[test]
    fn combine_inverts_relative(parent in parent_path_strategy(), target in absolute_path_strategy()) {
        let relative = get_relative_path(&parent, &target);
        // Ancestors of the parent directory come back with a trailing ".."
        prop_assume!(!relative.is_empty() && !relative.ends_with(".."));
        prop_assert_eq!(combine_display_paths(Some(&parent), &relative), target);
    }

    // An absolute path splits into one segment per separator
    #[test]
    fn split_segment_count(path in absolute_path_strategy()) {
        let separators = path.matches('/').count();
        prop_assert_eq!(split_path(&path).len(), separators);
    }

    // Combined results are already normalized
    #[test]
    fn combined_is_normalized(parent in parent_path_strategy(), child in relative_path_strategy()) {
        let combined = combine_display_paths(Some(&parent), &child);
        prop_assert_eq!(normalize(&combined), combined);
    }
}
