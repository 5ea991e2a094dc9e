use std::sync::{Arc, Mutex};

use avl_tree::{AvlTree, Rotation};

/// Tree with a hook recording every rotation.
fn recording() -> (AvlTree<i32>, Arc<Mutex<Vec<Rotation>>>) {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    let mut tree = AvlTree::new();
    tree.set_rotation_hook(move |r| sink.lock().unwrap().push(r));
    (tree, seen)
}

fn drain(seen: &Arc<Mutex<Vec<Rotation>>>) -> Vec<Rotation> {
    std::mem::take(&mut *seen.lock().unwrap())
}

#[test]
fn insert_rotations_matrix() {
    let cases: [(&[i32], Rotation, &str); 4] = [
        (&[30, 20, 10], Rotation::LeftLeft, "20 (10, 30)"),
        (&[10, 20, 30], Rotation::RightRight, "20 (10, 30)"),
        (&[30, 10, 20], Rotation::LeftRight, "20 (10, 30)"),
        (&[10, 30, 20], Rotation::RightLeft, "20 (10, 30)"),
    ];
    for (keys, rotation, rendered) in cases {
        let (mut tree, seen) = recording();
        for &k in keys {
            tree.insert(k).unwrap();
        }
        tree.assert_valid().unwrap();
        assert_eq!(drain(&seen), vec![rotation], "keys {keys:?}");
        assert_eq!(tree.to_string(), rendered);
    }
}

#[test]
fn no_rotation_when_balanced_matrix() {
    let (mut tree, seen) = recording();
    for k in [50, 30, 70, 20, 40, 60, 80] {
        tree.insert(k).unwrap();
    }
    assert!(drain(&seen).is_empty());
    tree.remove(&20).unwrap();
    tree.remove(&40).unwrap();
    assert!(drain(&seen).is_empty());
    tree.assert_valid().unwrap();
}

#[test]
fn remove_rotations_matrix() {
    // 20 (10, 30 (, 40)): dropping 10 makes 20 right-heavy by two.
    let (mut tree, seen) = recording();
    for k in [20, 10, 30, 40] {
        tree.insert(k).unwrap();
    }
    drain(&seen);
    tree.remove(&10).unwrap();
    assert_eq!(drain(&seen), vec![Rotation::RightRight]);
    assert_eq!(tree.to_string(), "30 (20, 40)");

    // 20 (10, 30 (25)): zig-zag on the right.
    let (mut tree, seen) = recording();
    for k in [20, 10, 30, 25] {
        tree.insert(k).unwrap();
    }
    drain(&seen);
    tree.remove(&10).unwrap();
    assert_eq!(drain(&seen), vec![Rotation::RightLeft]);
    assert_eq!(tree.to_string(), "25 (20, 30)");

    // 20 (10 (5), 30): mirror on the left.
    let (mut tree, seen) = recording();
    for k in [20, 10, 30, 5] {
        tree.insert(k).unwrap();
    }
    drain(&seen);
    tree.remove(&30).unwrap();
    assert_eq!(drain(&seen), vec![Rotation::LeftLeft]);
    assert_eq!(tree.to_string(), "10 (5, 20)");

    // 20 (10 (, 15), 30): zig-zag on the left.
    let (mut tree, seen) = recording();
    for k in [20, 10, 30, 15] {
        tree.insert(k).unwrap();
    }
    drain(&seen);
    tree.remove(&30).unwrap();
    assert_eq!(drain(&seen), vec![Rotation::LeftRight]);
    assert_eq!(tree.to_string(), "15 (10, 20)");
}

#[test]
fn balanced_sibling_rotation_keeps_height_matrix() {
    // 20 (10, 30 (25, 35)): removing 10 rotates around a balanced child.
    let (mut tree, seen) = recording();
    for k in [20, 10, 30, 25, 35] {
        tree.insert(k).unwrap();
    }
    drain(&seen);
    tree.remove(&10).unwrap();
    tree.assert_valid().unwrap();
    assert_eq!(drain(&seen), vec![Rotation::RightRight]);
    assert_eq!(tree.to_string(), "30 (20 (, 25), 35)");
    assert_eq!(tree.height(), 3);
}

#[test]
fn shrink_propagates_to_grandparent_matrix() {
    // Removing 1 shrinks 2's subtree via a rotation at 2, which in turn
    // unbalances the root.
    let (mut tree, seen) = recording();
    for k in [5, 2, 8, 1, 3, 7, 10, 4, 6, 9, 11, 12] {
        tree.insert(k).unwrap();
    }
    tree.assert_valid().unwrap();
    drain(&seen);

    tree.remove(&1).unwrap();
    tree.assert_valid().unwrap();
    assert_eq!(drain(&seen), vec![Rotation::RightRight, Rotation::RightRight]);
    assert_eq!(tree.root(), Some(&8));
}

#[test]
fn predecessor_extraction_rebalances_matrix() {
    // Once 7 is gone the predecessor of 8 is 6; extracting it leaves 4
    // left-heavy by two.
    let (mut tree, seen) = recording();
    for k in [8, 4, 12, 2, 6, 10, 14, 1, 3, 5, 7, 9, 11, 13, 15, 0] {
        tree.insert(k).unwrap();
    }
    drain(&seen);
    tree.remove(&7).unwrap();
    tree.remove(&8).unwrap();
    tree.assert_valid().unwrap();
    assert_eq!(drain(&seen), vec![Rotation::LeftLeft]);
    assert_eq!(tree.root(), Some(&6));
    assert_eq!(
        tree.to_string(),
        "6 (2 (1 (0), 4 (3, 5)), 12 (10 (9, 11), 14 (13, 15)))"
    );
    let keys: Vec<i32> = tree.iter().copied().collect();
    assert_eq!(keys, vec![0, 1, 2, 3, 4, 5, 6, 9, 10, 11, 12, 13, 14, 15]);
}

#[test]
fn cleared_hook_stops_reporting_matrix() {
    let (mut tree, seen) = recording();
    tree.clear_rotation_hook();
    for k in 0..10 {
        tree.insert(k).unwrap();
    }
    assert!(drain(&seen).is_empty());
}
