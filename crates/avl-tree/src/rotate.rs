//! The four AVL rotations.
//!
//! Each rotation takes ownership of the node `n` that violates the balance
//! bound, restructures it together with its offending child `n1` (and, for
//! the double rotations, the grandchild `n2`), fixes the balance factors of
//! the nodes it moved and returns the new subtree root.
//!
//! Rotations are only ever invoked from the insertion and removal rebalance
//! steps, which guarantee the children they touch exist. If a child is
//! missing anyway the subtree is returned untouched.

use std::fmt;

use crate::node::Node;

/// Rotation kind, as reported to the tree's rotation hook.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Rotation {
    /// Single rotation for a left child that is itself left-heavy.
    LeftLeft,
    /// Single rotation for a right child that is itself right-heavy.
    RightRight,
    /// Double rotation for a left child that is right-heavy.
    LeftRight,
    /// Double rotation for a right child that is left-heavy.
    RightLeft,
}

impl fmt::Display for Rotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Rotation::LeftLeft => "LL",
            Rotation::RightRight => "RR",
            Rotation::LeftRight => "LR",
            Rotation::RightLeft => "RL",
        })
    }
}

pub(crate) fn rotate_left_left<K>(mut n: Box<Node<K>>) -> Box<Node<K>> {
    let Some(mut n1) = n.left.take() else {
        return n;
    };
    n.left = n1.right.take();
    if n1.bf == 1 {
        n.bf = 0;
        n1.bf = 0;
    } else {
        // Only reachable from removal, where n1 may be balanced.
        n.bf = 1;
        n1.bf = -1;
    }
    n1.right = Some(n);
    n1
}

pub(crate) fn rotate_right_right<K>(mut n: Box<Node<K>>) -> Box<Node<K>> {
    let Some(mut n1) = n.right.take() else {
        return n;
    };
    n.right = n1.left.take();
    if n1.bf == -1 {
        n.bf = 0;
        n1.bf = 0;
    } else {
        n.bf = -1;
        n1.bf = 1;
    }
    n1.left = Some(n);
    n1
}

pub(crate) fn rotate_left_right<K>(mut n: Box<Node<K>>) -> Box<Node<K>> {
    let Some(mut n1) = n.left.take() else {
        return n;
    };
    let Some(mut n2) = n1.right.take() else {
        n.left = Some(n1);
        return n;
    };
    n.left = n2.right.take();
    n1.right = n2.left.take();
    n1.bf = if n2.bf == -1 { 1 } else { 0 };
    n.bf = if n2.bf == 1 { -1 } else { 0 };
    n2.bf = 0;
    n2.left = Some(n1);
    n2.right = Some(n);
    n2
}

pub(crate) fn rotate_right_left<K>(mut n: Box<Node<K>>) -> Box<Node<K>> {
    let Some(mut n1) = n.right.take() else {
        return n;
    };
    let Some(mut n2) = n1.left.take() else {
        n.right = Some(n1);
        return n;
    };
    n.right = n2.left.take();
    n1.left = n2.right.take();
    n.bf = if n2.bf == -1 { 1 } else { 0 };
    n1.bf = if n2.bf == 1 { -1 } else { 0 };
    n2.bf = 0;
    n2.left = Some(n);
    n2.right = Some(n1);
    n2
}

/// Applies `rotation` at `n`.
pub(crate) fn rotate<K>(n: Box<Node<K>>, rotation: Rotation) -> Box<Node<K>> {
    match rotation {
        Rotation::LeftLeft => rotate_left_left(n),
        Rotation::RightRight => rotate_right_right(n),
        Rotation::LeftRight => rotate_left_right(n),
        Rotation::RightLeft => rotate_right_left(n),
    }
}
