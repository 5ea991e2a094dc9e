//! Node record and the height-change signal returned by recursive steps.

/// Owning link to an optional subtree.
pub type Link<K> = Option<Box<Node<K>>>;

/// One tree node.
///
/// There are no parent pointers: every recursive operation carries its
/// ancestry on the call stack.
pub struct Node<K> {
    pub key: K,
    pub left: Link<K>,
    pub right: Link<K>,
    /// Balance factor, `height(left) - height(right)`.
    pub bf: i8,
}

impl<K> Node<K> {
    pub fn new(key: K) -> Self {
        Self {
            key,
            left: None,
            right: None,
            bf: 0,
        }
    }
}

/// Whether the height of the subtree a recursive step returned differs from
/// the height of the subtree it was given.
///
/// During insertion `Changed` means "grew by one", during removal "shrank by
/// one".
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Height {
    Unchanged,
    Changed,
}

impl Height {
    #[inline]
    pub fn changed(self) -> bool {
        self == Height::Changed
    }
}

/// Height of the subtree rooted at `link`, following the taller side as
/// recorded by the balance factors.
pub fn height<K>(link: &Link<K>) -> usize {
    let mut h = 0;
    let mut curr = link.as_deref();
    while let Some(node) = curr {
        h += 1;
        curr = if node.bf >= 0 {
            node.left.as_deref()
        } else {
            node.right.as_deref()
        };
    }
    h
}

/// Leftmost node.
pub fn first<K>(link: &Link<K>) -> Option<&Node<K>> {
    let mut curr = link.as_deref()?;
    while let Some(l) = curr.left.as_deref() {
        curr = l;
    }
    Some(curr)
}

/// Rightmost node.
pub fn last<K>(link: &Link<K>) -> Option<&Node<K>> {
    let mut curr = link.as_deref()?;
    while let Some(r) = curr.right.as_deref() {
        curr = r;
    }
    Some(curr)
}
