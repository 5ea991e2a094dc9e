//! Depth-first traversals and the in-order iterator.

use std::iter::FusedIterator;

use crate::node::{Link, Node};

pub(crate) fn preorder<K, F: FnMut(&K)>(link: &Link<K>, visit: &mut F) {
    if let Some(node) = link {
        visit(&node.key);
        preorder(&node.left, visit);
        preorder(&node.right, visit);
    }
}

pub(crate) fn inorder<K, F: FnMut(&K)>(link: &Link<K>, visit: &mut F) {
    if let Some(node) = link {
        inorder(&node.left, visit);
        visit(&node.key);
        inorder(&node.right, visit);
    }
}

pub(crate) fn postorder<K, F: FnMut(&K)>(link: &Link<K>, visit: &mut F) {
    if let Some(node) = link {
        postorder(&node.left, visit);
        postorder(&node.right, visit);
        visit(&node.key);
    }
}

/// In-order iterator over the keys of an [`AvlTree`](crate::AvlTree).
///
/// Keeps the path of not yet visited ancestors on an explicit stack, so
/// memory use is bounded by the tree height.
pub struct Iter<'a, K> {
    stack: Vec<&'a Node<K>>,
    remaining: usize,
}

impl<'a, K> Iter<'a, K> {
    pub(crate) fn new(root: &'a Link<K>, len: usize) -> Self {
        let mut iter = Self {
            stack: Vec::new(),
            remaining: len,
        };
        iter.push_left(root.as_deref());
        iter
    }

    fn push_left(&mut self, mut curr: Option<&'a Node<K>>) {
        while let Some(node) = curr {
            self.stack.push(node);
            curr = node.left.as_deref();
        }
    }
}

impl<'a, K> Iterator for Iter<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<&'a K> {
        let node = self.stack.pop()?;
        self.push_left(node.right.as_deref());
        self.remaining = self.remaining.saturating_sub(1);
        Some(&node.key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K> ExactSizeIterator for Iter<'_, K> {}

impl<K> FusedIterator for Iter<'_, K> {}

impl<K> Clone for Iter<'_, K> {
    fn clone(&self) -> Self {
        Self {
            stack: self.stack.clone(),
            remaining: self.remaining,
        }
    }
}
