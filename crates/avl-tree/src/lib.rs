//! Recursive AVL tree.
//!
//! [`AvlTree`] stores unique keys ordered by a three-way comparator and keeps
//! every node's balance factor (`height(left) - height(right)`) within
//! `-1..=1`, so the height stays logarithmic in the number of keys.
//!
//! Nodes own their children through `Option<Box<_>>` links and there are no
//! parent pointers. Insertion and removal are recursive: each step takes a
//! subtree by value and returns the new subtree root together with a
//! height-change signal telling the caller whether the subtree grew
//! or shrank, which is what drives rebalancing on the way back up.
//!
//! # Example
//!
//! ```
//! use avl_tree::{AvlTree, Error, Rotation};
//! use std::sync::{Arc, Mutex};
//!
//! let mut tree = AvlTree::new();
//! let seen = Arc::new(Mutex::new(Vec::new()));
//! let sink = Arc::clone(&seen);
//! tree.set_rotation_hook(move |r| sink.lock().unwrap().push(r));
//!
//! for key in [10, 20, 30] {
//!     tree.insert(key).unwrap();
//! }
//! assert_eq!(tree.root(), Some(&20));
//! assert_eq!(*seen.lock().unwrap(), vec![Rotation::RightRight]);
//! assert_eq!(tree.to_string(), "20 (10, 30)");
//!
//! assert_eq!(tree.insert(20), Err(Error::DuplicateKey));
//! assert_eq!(tree.remove(&99), Err(Error::NotFound));
//!
//! let mut keys = Vec::new();
//! tree.traverse_inorder(|k| keys.push(*k));
//! assert_eq!(keys, vec![10, 20, 30]);
//! ```
//!
//! # Module layout
//!
//! | Module | Contents |
//! |--------|----------|
//! `node` | node record, links, the height-change signal |
//! `rotate` | the four rotations and [`Rotation`] |
//! `insert` / `remove` | recursive mutation with rebalancing |
//! `search` | recursive lookup |
//! `traverse` | pre/in/post-order walks, [`Iter`] |
//! `print` | parenthesized [`Display`](std::fmt::Display) rendering |
//! `validate` | invariant checks behind [`AvlTree::assert_valid`] |

mod error;
mod insert;
mod node;
mod print;
mod remove;
mod rotate;
mod search;
mod traverse;
mod tree;
mod validate;

pub use error::{Error, Result};
pub use rotate::Rotation;
pub use traverse::Iter;
pub use tree::{AvlTree, RotationHook};
