//! Tests for in-place mutation helpers.
//!
//! These tests verify positional exchange and relocation, removal handles,
//! and iteration that tolerates removing the current element.
//!
//! ## Test Organization
//!
//! 1. **Swap** - Valid and out-of-range positions
//! 2. **Move** - Forward, backward, clamped destination, bad source
//! 3. **Tail** - Offsets from the end
//! 4. **Insert / Remove** - Round trip and idempotence
//! 5. **For Each** - Removal during iteration

use seqkit::prelude::*;

// ============================================================================
// Swap Tests
// ============================================================================

/// Test swapping two valid positions.
///
/// Verifies that only the two elements change.
#[test]
fn test_swap_basic() {
    let mut seq = vec![1, 2, 3, 4];
    swap(&mut seq, 0, 3).unwrap();
    assert_eq!(seq, vec![4, 2, 3, 1]);

    swap(&mut seq, 1, 1).unwrap();
    assert_eq!(seq, vec![4, 2, 3, 1], "Self-swap is a no-op");
}

/// Test swapping with an out-of-range position.
///
/// Verifies the error value and that the sequence is untouched.
#[test]
fn test_swap_out_of_range() {
    let mut seq = vec![1, 2, 3];

    assert_eq!(
        swap(&mut seq, 0, 5),
        Err(SeqError::IndexOutOfBounds { index: 5, len: 3 })
    );
    assert_eq!(
        swap(&mut seq, 7, 1),
        Err(SeqError::IndexOutOfBounds { index: 7, len: 3 })
    );
    assert_eq!(seq, vec![1, 2, 3]);
}

// ============================================================================
// Move Tests
// ============================================================================

/// Test moving an element forward.
///
/// Verifies the destination is computed after removal.
#[test]
fn test_move_item_forward() {
    let mut seq = vec![1, 2, 3, 4];
    move_item(&mut seq, 0, 2).unwrap();
    assert_eq!(seq, vec![2, 3, 1, 4]);
}

/// Test moving an element backward.
///
/// Verifies that later elements shift right.
#[test]
fn test_move_item_backward() {
    let mut seq = vec!['a', 'b', 'c', 'd'];
    move_item(&mut seq, 3, 1).unwrap();
    assert_eq!(seq, vec!['a', 'd', 'b', 'c']);
}

/// Test moving past the end.
///
/// Verifies that the element is appended.
#[test]
fn test_move_item_past_end_appends() {
    let mut seq = vec![1, 2, 3];
    move_item(&mut seq, 0, 99).unwrap();
    assert_eq!(seq, vec![2, 3, 1]);
}

/// Test moving from an invalid source.
///
/// Verifies the error and that the sequence is untouched.
#[test]
fn test_move_item_bad_source() {
    let mut seq = vec![1, 2];
    let err = move_item(&mut seq, 2, 0).unwrap_err();

    assert_eq!(err, SeqError::IndexOutOfBounds { index: 2, len: 2 });
    assert_eq!(seq, vec![1, 2]);
}

// ============================================================================
// Tail Tests
// ============================================================================

/// Test addressing elements from the end.
///
/// Verifies offsets inside and outside the sequence.
#[test]
fn test_tail() {
    let seq = vec![10, 20, 30];

    assert_eq!(tail(&seq, 0), Some(&30));
    assert_eq!(tail(&seq, 2), Some(&10));
    assert_eq!(tail(&seq, 3), None);
    assert_eq!(tail(&seq, usize::MAX), None);
    assert_eq!(tail::<i32>(&[], 0), None);
}

/// Test mutating an element addressed from the end.
///
/// Verifies that the write lands in the right slot.
#[test]
fn test_tail_mut() {
    let mut seq = vec![1, 2, 3];
    if let Some(last) = tail_mut(&mut seq, 0) {
        *last = 9;
    }
    assert_eq!(seq, vec![1, 2, 9]);
    assert!(tail_mut(&mut seq, 5).is_none());
}

// ============================================================================
// Insert / Remove Tests
// ============================================================================

/// Test the insert-remove round trip.
///
/// Verifies presence after insert, absence after remove, and idempotence.
#[test]
fn test_insert_remove_round_trip() {
    let mut seq = vec![1, 2];
    let mut handle = insert(&mut seq, 5);

    assert_eq!(seq, vec![1, 2, 5]);
    assert!(contains(&seq, &5));
    assert!(!handle.is_spent());

    assert!(handle.remove(&mut seq));
    assert!(!contains(&seq, &5));
    assert!(handle.is_spent());

    assert!(!handle.remove(&mut seq), "Second removal is a no-op");
    assert_eq!(seq, vec![1, 2]);
}

/// Test that a second removal does not take an equal element.
///
/// Verifies that only one element is ever removed per handle.
#[test]
fn test_insert_remove_only_once_with_duplicates() {
    let mut seq = vec!["x"];
    let mut handle = insert(&mut seq, "x");

    assert!(handle.remove(&mut seq));
    assert!(!handle.remove(&mut seq));
    assert_eq!(seq, vec!["x"], "The other equal element survives");
}

/// Test that one insertion removes at most one of several equal elements.
///
/// Verifies that the originally present equal element survives repeated calls.
#[test]
fn test_insert_remove_keeps_preexisting_equal_element() {
    let mut seq = vec![5];
    let mut handle = insert(&mut seq, 5);
    assert_eq!(seq, vec![5, 5]);

    assert!(handle.remove(&mut seq));
    for _ in 0..3 {
        assert!(!handle.remove(&mut seq));
    }
    assert_eq!(seq, vec![5], "The pre-existing element stays in place");
}

/// Test removing an element already taken out by other means.
///
/// Verifies a quiet no-op.
#[test]
fn test_insert_remove_absent() {
    let mut seq = Vec::new();
    let mut handle = insert(&mut seq, 3);
    seq.clear();

    assert!(!handle.remove(&mut seq));
    assert_eq!(handle.element(), &3);
}

// ============================================================================
// For Each Tests
// ============================================================================

/// Test visiting every element without removal.
///
/// Verifies order and reported positions.
#[test]
fn test_for_each_visits_all() {
    let mut seq = vec![10, 20, 30];
    let mut visited = Vec::new();

    for_each(&mut seq, |e, cursor| visited.push((*e, cursor.index())));

    assert_eq!(visited, vec![(10, 0), (20, 1), (30, 2)]);
}

/// Test removing the current element during iteration.
///
/// Verifies that the following element is neither skipped nor revisited.
#[test]
fn test_for_each_remove_current() {
    let mut seq = vec![1, 2, 2, 3, 4, 4];
    let mut visited = Vec::new();

    for_each(&mut seq, |e, cursor| {
        visited.push(*e);
        if e % 2 == 0 {
            cursor.remove();
        }
    });

    assert_eq!(visited, vec![1, 2, 2, 3, 4, 4], "Every element visited once");
    assert_eq!(seq, vec![1, 3]);
}

/// Test removing every element.
///
/// Verifies that the sequence ends empty.
#[test]
fn test_for_each_remove_all() {
    let mut seq = vec!['a', 'b', 'c'];
    let mut count = 0;

    for_each(&mut seq, |_, cursor| {
        count += 1;
        cursor.remove();
    });

    assert_eq!(count, 3);
    assert!(seq.is_empty());
}
