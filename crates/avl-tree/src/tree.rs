use std::cmp::Ordering;
use std::fmt;

use log::{debug, trace};

use crate::error::Result;
use crate::node::{self, Link};
use crate::rotate::Rotation;
use crate::traverse::{self, Iter};
use crate::{insert, print, remove, search, validate};

fn default_comparator<K: Ord>(a: &K, b: &K) -> Ordering {
    a.cmp(b)
}

/// Callback receiving every rotation the tree performs.
pub type RotationHook = Box<dyn FnMut(Rotation) + Send>;

/// Builds the per-operation rotation reporter: every rotation is traced
/// through `log` and forwarded to the installed hook, if any.
fn reporter<'a>(
    op: &'static str,
    hook: &'a mut Option<RotationHook>,
) -> impl FnMut(Rotation) + 'a {
    move |rotation: Rotation| {
        trace!("{op}: {rotation} rotation");
        if let Some(hook) = hook.as_mut() {
            hook(rotation);
        }
    }
}

/// Self-balancing binary search tree of unique keys.
///
/// Keys are ordered by a three-way comparator, [`Ord::cmp`] unless one is
/// supplied with [`AvlTree::with_comparator`]. Keys comparing `Equal` are
/// duplicates: the second insert is rejected with
/// [`Error::DuplicateKey`](crate::Error::DuplicateKey).
pub struct AvlTree<K, C = fn(&K, &K) -> Ordering>
where
    C: Fn(&K, &K) -> Ordering,
{
    root: Link<K>,
    len: usize,
    comparator: C,
    rotation_hook: Option<RotationHook>,
}

impl<K> AvlTree<K, fn(&K, &K) -> Ordering>
where
    K: Ord,
{
    pub fn new() -> Self {
        Self::with_comparator(default_comparator::<K>)
    }
}

impl<K> Default for AvlTree<K, fn(&K, &K) -> Ordering>
where
    K: Ord,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, C> AvlTree<K, C>
where
    C: Fn(&K, &K) -> Ordering,
{
    pub fn with_comparator(comparator: C) -> Self {
        Self {
            root: None,
            len: 0,
            comparator,
            rotation_hook: None,
        }
    }

    /// Installs a callback invoked once per rotation performed by later
    /// [`insert`](Self::insert) and [`remove`](Self::remove) calls,
    /// replacing any previous one.
    pub fn set_rotation_hook<F>(&mut self, hook: F)
    where
        F: FnMut(Rotation) + Send + 'static,
    {
        self.rotation_hook = Some(Box::new(hook));
    }

    pub fn clear_rotation_hook(&mut self) {
        self.rotation_hook = None;
    }

    /// Inserts `key`.
    ///
    /// # Errors
    ///
    /// [`Error::DuplicateKey`](crate::Error::DuplicateKey) if an equal key is
    /// already stored; the tree is left unchanged.
    pub fn insert(&mut self, key: K) -> Result<()> {
        let mut report = reporter("insert", &mut self.rotation_hook);
        let (root, outcome) = insert::insert(self.root.take(), key, &self.comparator, &mut report);
        self.root = Some(root);
        if let Err(err) = outcome {
            debug!("insert rejected: {err}");
            return Err(err);
        }
        self.len += 1;
        Ok(())
    }

    /// Removes the key equal to `key`.
    ///
    /// A node with two children is not unlinked itself: it takes over the key
    /// of its in-order predecessor, whose node is removed instead.
    ///
    /// # Errors
    ///
    /// [`Error::NotFound`](crate::Error::NotFound) if no equal key is stored,
    /// including when the tree is empty; the tree is left unchanged.
    pub fn remove(&mut self, key: &K) -> Result<()> {
        let mut report = reporter("remove", &mut self.rotation_hook);
        let (root, outcome) = remove::remove(self.root.take(), key, &self.comparator, &mut report);
        self.root = root;
        if let Err(err) = outcome {
            debug!("remove rejected: {err}");
            return Err(err);
        }
        self.len -= 1;
        Ok(())
    }

    pub fn contains(&self, key: &K) -> bool {
        self.find(key).is_some()
    }

    /// Returns the stored key equal to `key`.
    ///
    /// Useful when the comparator only looks at part of `K` and the rest is
    /// payload.
    pub fn find(&self, key: &K) -> Option<&K> {
        search::find(&self.root, key, &self.comparator)
    }

    /// Smallest key.
    pub fn first(&self) -> Option<&K> {
        node::first(&self.root).map(|n| &n.key)
    }

    /// Largest key.
    pub fn last(&self) -> Option<&K> {
        node::last(&self.root).map(|n| &n.key)
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Number of nodes on the longest root-to-leaf path; 0 when empty.
    pub fn height(&self) -> usize {
        node::height(&self.root)
    }

    /// Root key, if any.
    pub fn root(&self) -> Option<&K> {
        self.root.as_ref().map(|n| &n.key)
    }

    pub fn clear(&mut self) {
        self.root = None;
        self.len = 0;
    }

    pub fn traverse_preorder<F: FnMut(&K)>(&self, mut visit: F) {
        traverse::preorder(&self.root, &mut visit);
    }

    pub fn traverse_inorder<F: FnMut(&K)>(&self, mut visit: F) {
        traverse::inorder(&self.root, &mut visit);
    }

    pub fn traverse_postorder<F: FnMut(&K)>(&self, mut visit: F) {
        traverse::postorder(&self.root, &mut visit);
    }

    /// Keys in increasing order.
    pub fn iter(&self) -> Iter<'_, K> {
        Iter::new(&self.root, self.len)
    }

    /// Verifies ordering, balance factors, the AVL bound and the length.
    pub fn assert_valid(&self) -> Result<()> {
        validate::assert_avl_tree(&self.root, self.len, &self.comparator)
    }
}

impl<'a, K, C> IntoIterator for &'a AvlTree<K, C>
where
    C: Fn(&K, &K) -> Ordering,
{
    type Item = &'a K;
    type IntoIter = Iter<'a, K>;

    fn into_iter(self) -> Iter<'a, K> {
        self.iter()
    }
}

impl<K, C> fmt::Display for AvlTree<K, C>
where
    K: fmt::Display,
    C: Fn(&K, &K) -> Ordering,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        print::write_subtree(f, &self.root)
    }
}

impl<K, C> fmt::Debug for AvlTree<K, C>
where
    K: fmt::Debug,
    C: Fn(&K, &K) -> Ordering,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}
