use std::cmp::Ordering;

use crate::node::Link;

/// Recursive lookup of the stored key equal to `key`.
pub(crate) fn find<'a, K, C>(link: &'a Link<K>, key: &K, comparator: &C) -> Option<&'a K>
where
    C: Fn(&K, &K) -> Ordering,
{
    let node = link.as_deref()?;
    match comparator(key, &node.key) {
        Ordering::Less => find(&node.left, key, comparator),
        Ordering::Greater => find(&node.right, key, comparator),
        Ordering::Equal => Some(&node.key),
    }
}
