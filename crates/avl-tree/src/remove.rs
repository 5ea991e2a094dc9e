//! Recursive removal.
//!
//! Mirrors [`insert`](crate::insert): each step returns the new subtree and
//! `Ok(Height::Changed)` when the subtree shrank by one. A node with two
//! children keeps its place in the tree; it takes over the key of its
//! in-order predecessor (the rightmost node of its left subtree) and the
//! predecessor's node is the one unlinked and dropped.

use std::cmp::Ordering;

use crate::error::{Error, Result};
use crate::node::{Height, Link, Node};
use crate::rotate::{rotate, Rotation};

pub(crate) type Removed<K> = (Link<K>, Result<Height>);

pub(crate) fn remove<K, C>(
    link: Link<K>,
    key: &K,
    comparator: &C,
    report: &mut dyn FnMut(Rotation),
) -> Removed<K>
where
    C: Fn(&K, &K) -> Ordering,
{
    let Some(mut node) = link else {
        return (None, Err(Error::NotFound));
    };

    match comparator(key, &node.key) {
        Ordering::Less => {
            let (left, outcome) = remove(node.left.take(), key, comparator, report);
            node.left = left;
            match outcome {
                Ok(Height::Changed) => {
                    let (node, height) = shrunk_left(node, report);
                    (Some(node), Ok(height))
                }
                other => (Some(node), other),
            }
        }
        Ordering::Greater => {
            let (right, outcome) = remove(node.right.take(), key, comparator, report);
            node.right = right;
            match outcome {
                Ok(Height::Changed) => {
                    let (node, height) = shrunk_right(node, report);
                    (Some(node), Ok(height))
                }
                other => (Some(node), other),
            }
        }
        Ordering::Equal => match (node.left.take(), node.right.take()) {
            (None, right) => (right, Ok(Height::Changed)),
            (left, None) => (left, Ok(Height::Changed)),
            (Some(left), right) => {
                let (left, predecessor, shrunk) = extract_max(left, report);
                node.key = predecessor;
                node.left = left;
                node.right = right;
                if shrunk.changed() {
                    let (node, height) = shrunk_left(node, report);
                    (Some(node), Ok(height))
                } else {
                    (Some(node), Ok(Height::Unchanged))
                }
            }
        },
    }
}

/// Unlinks the rightmost node of `node`'s subtree and returns the remaining
/// subtree together with the extracted key.
fn extract_max<K>(
    mut node: Box<Node<K>>,
    report: &mut dyn FnMut(Rotation),
) -> (Link<K>, K, Height) {
    match node.right.take() {
        Some(right) => {
            let (right, max, shrunk) = extract_max(right, report);
            node.right = right;
            if shrunk.changed() {
                let (node, height) = shrunk_right(node, report);
                (Some(node), max, height)
            } else {
                (Some(node), max, Height::Unchanged)
            }
        }
        None => {
            let Node { key, left, .. } = *node;
            (left, key, Height::Changed)
        }
    }
}

/// The left subtree of `n` shrank by one.
fn shrunk_left<K>(
    mut n: Box<Node<K>>,
    report: &mut dyn FnMut(Rotation),
) -> (Box<Node<K>>, Height) {
    match n.bf {
        1 => {
            n.bf = 0;
            (n, Height::Changed)
        }
        0 => {
            n.bf = -1;
            (n, Height::Unchanged)
        }
        _ => {
            let (rotation, height) = match n.right.as_ref().map_or(0, |n1| n1.bf) {
                0 => (Rotation::RightRight, Height::Unchanged),
                -1 => (Rotation::RightRight, Height::Changed),
                _ => (Rotation::RightLeft, Height::Changed),
            };
            report(rotation);
            (rotate(n, rotation), height)
        }
    }
}

/// The right subtree of `n` shrank by one.
fn shrunk_right<K>(
    mut n: Box<Node<K>>,
    report: &mut dyn FnMut(Rotation),
) -> (Box<Node<K>>, Height) {
    match n.bf {
        -1 => {
            n.bf = 0;
            (n, Height::Changed)
        }
        0 => {
            n.bf = 1;
            (n, Height::Unchanged)
        }
        _ => {
            let (rotation, height) = match n.left.as_ref().map_or(0, |n1| n1.bf) {
                0 => (Rotation::LeftLeft, Height::Unchanged),
                1 => (Rotation::LeftLeft, Height::Changed),
                _ => (Rotation::LeftRight, Height::Changed),
            };
            report(rotation);
            (rotate(n, rotation), height)
        }
    }
}
