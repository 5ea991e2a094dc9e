//! Structural invariant checks, used by tests and by
//! [`AvlTree::assert_valid`](crate::AvlTree::assert_valid).

use std::cmp::Ordering;

use crate::error::{Error, Result};
use crate::node::{Link, Node};

/// Height and node count of a checked subtree.
struct Measured {
    height: usize,
    count: usize,
}

fn measure<K>(link: &Link<K>) -> Result<Measured> {
    let Some(node) = link else {
        return Ok(Measured {
            height: 0,
            count: 0,
        });
    };
    let l = measure(&node.left)?;
    let r = measure(&node.right)?;

    let expected_bf = l.height as i64 - r.height as i64;
    let actual_bf = i64::from(node.bf);
    if actual_bf != expected_bf {
        return Err(Error::Invariant(format!(
            "Balance factor mismatch: expected {expected_bf}, got {actual_bf}"
        )));
    }
    if !(-1..=1).contains(&actual_bf) {
        return Err(Error::Invariant(format!(
            "AVL balance violated: balance factor {actual_bf}"
        )));
    }

    Ok(Measured {
        height: 1 + l.height.max(r.height),
        count: 1 + l.count + r.count,
    })
}

fn check_order<'a, K, C>(
    link: &'a Link<K>,
    prev: &mut Option<&'a Node<K>>,
    comparator: &C,
) -> Result<()>
where
    C: Fn(&K, &K) -> Ordering,
{
    let Some(node) = link.as_deref() else {
        return Ok(());
    };
    check_order(&node.left, prev, comparator)?;
    if let Some(p) = prev {
        if comparator(&p.key, &node.key) != Ordering::Less {
            return Err(Error::Invariant("Node order violated".to_string()));
        }
    }
    *prev = Some(node);
    check_order(&node.right, prev, comparator)
}

/// Checks strict in-order ordering, stored balance factors, the AVL bound
/// and that the tree holds exactly `len` nodes.
pub(crate) fn assert_avl_tree<K, C>(root: &Link<K>, len: usize, comparator: &C) -> Result<()>
where
    C: Fn(&K, &K) -> Ordering,
{
    let measured = measure(root)?;
    if measured.count != len {
        return Err(Error::Invariant(format!(
            "Length mismatch: tracked {len}, reachable {}",
            measured.count
        )));
    }
    check_order(root, &mut None, comparator)
}
