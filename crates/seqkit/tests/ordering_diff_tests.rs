//! Tests for grouping and sorted diffs.
//!
//! ## Test Organization
//!
//! 1. **Grouping** - Runs of equal elements, order within groups
//! 2. **Sorted Diff** - Splice positions and coalescing
//! 3. **Delta** - Removed and added elements

use seqkit::prelude::*;

// ============================================================================
// Grouping Tests
// ============================================================================

/// Test grouping of integers by value.
///
/// Verifies that groups come out ascending.
#[test]
fn test_group_by_basic() {
    let groups = group_by(&[3, 1, 3, 2, 1, 3], |a, b| a.cmp(b));
    assert_eq!(groups, vec![vec![1, 1], vec![2], vec![3, 3, 3]]);
}

/// Test grouping keeps input order within a group.
///
/// Verifies stability on keyed records.
#[test]
fn test_group_by_stable_within_group() {
    let words = ["bb", "a", "cc", "d", "eee"];
    let groups = group_by(&words, |a, b| a.len().cmp(&b.len()));

    assert_eq!(groups, vec![vec!["a", "d"], vec!["bb", "cc"], vec!["eee"]]);
}

/// Test grouping an empty sequence.
///
/// Verifies that no groups are produced.
#[test]
fn test_group_by_empty() {
    let groups = group_by::<i32, _>(&[], |a, b| a.cmp(b));
    assert!(groups.is_empty());
}

// ============================================================================
// Sorted Diff Tests
// ============================================================================

/// Test diff of identical sequences.
///
/// Verifies that no splices are produced.
#[test]
fn test_sorted_diff_identical() {
    assert!(sorted_diff(&[1, 2, 3], &[1, 2, 3], |a, b| a.cmp(b)).is_empty());
}

/// Test diff with a removal and an insertion at different places.
///
/// Verifies separate splices at the correct positions.
#[test]
fn test_sorted_diff_separate_edits() {
    let splices = sorted_diff(&[1, 2, 3, 5], &[1, 3, 4, 5], |a, b| a.cmp(b));

    assert_eq!(
        splices,
        vec![
            Splice {
                start: 1,
                delete_count: 1,
                inserted: vec![],
            },
            Splice {
                start: 3,
                delete_count: 0,
                inserted: vec![4],
            },
        ]
    );
}

/// Test diff coalesces adjacent edits.
///
/// Verifies that a replacement becomes one splice.
#[test]
fn test_sorted_diff_coalesces_adjacent() {
    let splices = sorted_diff(&[1, 2, 3], &[1, 4, 5], |a, b| a.cmp(b));

    assert_eq!(
        splices,
        vec![Splice {
            start: 1,
            delete_count: 2,
            inserted: vec![4, 5],
        }]
    );
}

/// Test diff against empty sequences.
///
/// Verifies full deletion and full insertion.
#[test]
fn test_sorted_diff_empty_sides() {
    let cmp = |a: &i32, b: &i32| a.cmp(b);

    assert_eq!(
        sorted_diff(&[1, 2], &[], cmp),
        vec![Splice {
            start: 0,
            delete_count: 2,
            inserted: vec![],
        }]
    );
    assert_eq!(
        sorted_diff(&[], &[1, 2], cmp),
        vec![Splice {
            start: 0,
            delete_count: 0,
            inserted: vec![1, 2],
        }]
    );
}

/// Test that applying the splices turns `before` into `after`.
///
/// Verifies the splices in reverse order on a copy of `before`.
#[test]
fn test_sorted_diff_applies() {
    let before = vec![1, 3, 4, 7, 9, 10];
    let after = vec![2, 3, 7, 8, 10, 11];
    let splices = sorted_diff(&before, &after, |a, b| a.cmp(b));

    let mut patched = before.clone();
    for splice in splices.iter().rev() {
        patched.splice(
            splice.start..splice.start + splice.delete_count,
            splice.inserted.iter().copied(),
        );
    }
    assert_eq!(patched, after);
}

// ============================================================================
// Delta Tests
// ============================================================================

/// Test removed and added elements.
///
/// Verifies both lists in sorted order.
#[test]
fn test_delta_basic() {
    let d = delta(&[1, 2, 3, 5], &[1, 3, 4, 5, 6], |a, b| a.cmp(b));

    assert_eq!(d.removed, vec![2]);
    assert_eq!(d.added, vec![4, 6]);
}

/// Test delta of disjoint sequences.
///
/// Verifies that everything is removed and everything is added.
#[test]
fn test_delta_disjoint() {
    let d = delta(&["a", "c"], &["b", "d"], |a, b| a.cmp(b));

    assert_eq!(
        d,
        Delta {
            removed: vec!["a", "c"],
            added: vec!["b", "d"],
        }
    );
}
