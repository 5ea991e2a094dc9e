//! Recursive insertion.
//!
//! Every step hands back the (possibly new) subtree root together with the
//! outcome for the caller: `Ok(Height::Changed)` when the subtree grew,
//! `Ok(Height::Unchanged)` when the growth was absorbed below, or
//! `Err(Error::DuplicateKey)` when the key was already present, in which case
//! the subtree is returned exactly as it was received.

use std::cmp::Ordering;

use crate::error::{Error, Result};
use crate::node::{Height, Link, Node};
use crate::rotate::{rotate, Rotation};

pub(crate) type Inserted<K> = (Box<Node<K>>, Result<Height>);

pub(crate) fn insert<K, C>(
    link: Link<K>,
    key: K,
    comparator: &C,
    report: &mut dyn FnMut(Rotation),
) -> Inserted<K>
where
    C: Fn(&K, &K) -> Ordering,
{
    let Some(mut node) = link else {
        return (Box::new(Node::new(key)), Ok(Height::Changed));
    };

    match comparator(&key, &node.key) {
        Ordering::Less => {
            let (left, outcome) = insert(node.left.take(), key, comparator, report);
            node.left = Some(left);
            match outcome {
                Ok(Height::Changed) => {
                    let (node, height) = grown_left(node, report);
                    (node, Ok(height))
                }
                other => (node, other),
            }
        }
        Ordering::Greater => {
            let (right, outcome) = insert(node.right.take(), key, comparator, report);
            node.right = Some(right);
            match outcome {
                Ok(Height::Changed) => {
                    let (node, height) = grown_right(node, report);
                    (node, Ok(height))
                }
                other => (node, other),
            }
        }
        Ordering::Equal => (node, Err(Error::DuplicateKey)),
    }
}

/// The left subtree of `n` grew by one.
fn grown_left<K>(
    mut n: Box<Node<K>>,
    report: &mut dyn FnMut(Rotation),
) -> (Box<Node<K>>, Height) {
    match n.bf {
        -1 => {
            n.bf = 0;
            (n, Height::Unchanged)
        }
        0 => {
            n.bf = 1;
            (n, Height::Changed)
        }
        _ => {
            let rotation = match n.left.as_ref().map(|n1| n1.bf) {
                Some(1) => Rotation::LeftLeft,
                _ => Rotation::LeftRight,
            };
            report(rotation);
            (rotate(n, rotation), Height::Unchanged)
        }
    }
}

/// The right subtree of `n` grew by one.
fn grown_right<K>(
    mut n: Box<Node<K>>,
    report: &mut dyn FnMut(Rotation),
) -> (Box<Node<K>>, Height) {
    match n.bf {
        1 => {
            n.bf = 0;
            (n, Height::Unchanged)
        }
        0 => {
            n.bf = -1;
            (n, Height::Changed)
        }
        _ => {
            let rotation = match n.right.as_ref().map(|n1| n1.bf) {
                Some(-1) => Rotation::RightRight,
                _ => Rotation::RightLeft,
            };
            report(rotation);
            (rotate(n, rotation), Height::Unchanged)
        }
    }
}
