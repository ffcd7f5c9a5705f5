//! Tests for the AVL tree engine: structural invariants, rotation
//! scenarios, and size/membership consistency.

use avlviz::domain::{AvlTree, TreeSnapshot};
use rstest::rstest;

/// Walk a snapshot checking BST ordering, the balance-factor bound and
/// height correctness at every node. Returns (height, node count).
fn check_node(node: &TreeSnapshot, lo: Option<i64>, hi: Option<i64>) -> (u32, usize) {
    if let Some(lo) = lo {
        assert!(node.value > lo, "BST order violated: {} <= {}", node.value, lo);
    }
    if let Some(hi) = hi {
        assert!(node.value < hi, "BST order violated: {} >= {}", node.value, hi);
    }

    let (lh, ln) = node
        .left
        .as_deref()
        .map_or((0, 0), |l| check_node(l, lo, Some(node.value)));
    let (rh, rn) = node
        .right
        .as_deref()
        .map_or((0, 0), |r| check_node(r, Some(node.value), hi));

    let bf = i64::from(lh) - i64::from(rh);
    assert!(
        (-1..=1).contains(&bf),
        "balance factor {} out of bounds at node {}",
        bf,
        node.value
    );
    assert_eq!(
        node.height,
        1 + lh.max(rh),
        "stale height at node {}",
        node.value
    );

    (node.height, 1 + ln + rn)
}

/// Assert all tree invariants plus size consistency.
fn assert_invariants(tree: &AvlTree) {
    match tree.snapshot() {
        Some(root) => {
            let (_, count) = check_node(&root, None, None);
            assert_eq!(tree.size(), count, "size out of sync with reachable keys");
        }
        None => assert_eq!(tree.size(), 0),
    }
}

fn build(keys: &[i64]) -> AvlTree {
    let mut tree = AvlTree::new();
    for &key in keys {
        tree.insert(key);
    }
    tree
}

// ============================================================
// Rotation Scenarios
// ============================================================

#[rstest]
#[case::left_rotation(&[10, 20, 30])]
#[case::right_rotation(&[30, 20, 10])]
#[case::left_right_rotation(&[30, 10, 20])]
#[case::right_left_rotation(&[10, 30, 20])]
fn given_three_keys_when_inserting_then_rebalances_to_root_20(#[case] keys: &[i64]) {
    let tree = build(keys);

    let root = tree.snapshot().unwrap();
    assert_eq!(root.value, 20);
    assert_eq!(root.height, 2);

    let left = root.left.as_deref().unwrap();
    let right = root.right.as_deref().unwrap();
    assert_eq!((left.value, left.height), (10, 1));
    assert_eq!((right.value, right.height), (30, 1));
    assert_invariants(&tree);
}

#[test]
fn given_sorted_insertions_when_building_then_no_degenerate_chain() {
    let tree = build(&[1, 2, 3, 4, 5, 6, 7]);

    assert_eq!(tree.size(), 7);
    let root = tree.snapshot().unwrap();
    // ceil(log2(8)) + 1
    assert!(root.height <= 4, "degenerate chain: height {}", root.height);
    assert_invariants(&tree);
}

#[test]
fn given_five_keys_when_inserting_then_root_stays_five() {
    let tree = build(&[5, 3, 8, 1, 4]);

    assert_eq!(tree.size(), 5);
    assert_eq!(tree.snapshot().unwrap().value, 5);
    assert_invariants(&tree);
}

// ============================================================
// Deletion
// ============================================================

#[test]
fn given_two_child_root_when_deleting_then_successor_is_promoted() {
    let mut tree = build(&[5, 3, 8, 1, 4, 7, 9]);

    assert!(tree.delete(5));

    assert_eq!(tree.size(), 6);
    assert!(!tree.contains(5));
    assert!(tree.contains(7));
    // In-order successor of 5 is 7; its value ends up at the root.
    assert_eq!(tree.snapshot().unwrap().value, 7);
    assert_invariants(&tree);
}

#[test]
fn given_missing_key_when_deleting_then_tree_is_unchanged() {
    let mut tree = build(&[5, 3, 8]);
    let before = tree.snapshot();

    assert!(!tree.delete(42));

    assert_eq!(tree.size(), 3);
    assert_eq!(tree.snapshot(), before);
}

#[test]
fn given_leaf_and_single_child_nodes_when_deleting_then_spliced_out() {
    let mut tree = build(&[20, 10, 30, 5]);

    // 5 is a leaf; after it goes, 10 is one too.
    assert!(tree.delete(5));
    assert_invariants(&tree);
    assert!(tree.delete(10));
    assert_invariants(&tree);

    assert_eq!(tree.size(), 2);
    assert!(!tree.contains(5));
    assert!(!tree.contains(10));
    assert!(tree.contains(20));
    assert!(tree.contains(30));
}

#[test]
fn given_delete_heavy_sequence_when_shrinking_then_rebalanced_throughout() {
    let mut tree = build(&[8, 4, 12, 2, 6, 10, 14, 1, 3, 5, 7, 9, 11, 13, 15]);

    for key in [8, 4, 12, 2, 6, 10, 14] {
        assert!(tree.delete(key));
        assert_invariants(&tree);
    }
    assert_eq!(tree.size(), 8);
}

// ============================================================
// Idempotence & Membership
// ============================================================

#[test]
fn given_duplicate_insert_when_repeated_then_shape_and_size_unchanged() {
    let mut tree = build(&[5, 3, 8]);
    let before = tree.snapshot();

    assert!(!tree.insert(3));

    assert_eq!(tree.size(), 3);
    assert_eq!(tree.snapshot(), before);
}

#[test]
fn given_inserted_key_when_queried_then_contained_until_removed() {
    let mut tree = AvlTree::new();

    tree.insert(7);
    assert!(tree.contains(7));

    tree.delete(7);
    assert!(!tree.contains(7));
}

#[test]
fn given_negative_and_extreme_keys_when_inserting_then_all_found() {
    let keys = [-100, 0, 100, -1, 1, i64::MIN, i64::MAX];
    let tree = build(&keys);

    assert_eq!(tree.size(), keys.len());
    for key in keys {
        assert!(tree.contains(key), "missing key {key}");
    }
    assert_invariants(&tree);
}

// ============================================================
// Clear
// ============================================================

#[test]
fn given_populated_tree_when_clearing_then_empty_state() {
    let mut tree = build(&[5, 3, 8, 1, 4]);

    tree.clear();

    assert_eq!(tree.size(), 0);
    assert!(tree.is_empty());
    assert!(tree.snapshot().is_none());
    for key in [5, 3, 8, 1, 4] {
        assert!(!tree.contains(key));
    }
}

#[test]
fn given_cleared_tree_when_reused_then_behaves_like_new() {
    let mut tree = build(&[1, 2, 3]);
    tree.clear();

    tree.insert(10);

    assert_eq!(tree.size(), 1);
    assert!(tree.contains(10));
    assert_invariants(&tree);
}

// ============================================================
// Invariant Preservation Under Mixed Workloads
// ============================================================

#[test]
fn given_pseudorandom_workload_when_mutating_then_invariants_hold_after_each_op() {
    // Deterministic LCG so failures reproduce.
    let mut state: u64 = 0x2545F4914F6CDD1D;
    let mut next = move || {
        state = state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        ((state >> 33) % 200) as i64 - 100
    };

    let mut tree = AvlTree::new();
    let mut expected: std::collections::BTreeSet<i64> = Default::default();

    for round in 0..500 {
        let key = next();
        if round % 3 == 0 {
            assert_eq!(tree.delete(key), expected.remove(&key));
        } else {
            assert_eq!(tree.insert(key), expected.insert(key));
        }
        assert_invariants(&tree);
        assert_eq!(tree.size(), expected.len());
    }

    for &key in &expected {
        assert!(tree.contains(key));
    }
}
