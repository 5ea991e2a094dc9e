//! Parenthesized rendering.
//!
//! A node renders as its key, followed by its children in parentheses:
//!
//! | Children   | Rendering     |
//! |------------|---------------|
//! | none       | `k`           |
//! | left only  | `k (l)`       |
//! | right only | `k (, r)`     |
//! | both       | `k (l, r)`    |
//!
//! An empty tree renders as the empty string.

use std::fmt::{self, Display, Write};

use crate::node::Link;

pub(crate) fn write_subtree<K: Display, W: Write>(out: &mut W, link: &Link<K>) -> fmt::Result {
    let Some(node) = link else {
        return Ok(());
    };
    write!(out, "{}", node.key)?;
    match (&node.left, &node.right) {
        (None, None) => Ok(()),
        (Some(_), None) => {
            out.write_str(" (")?;
            write_subtree(out, &node.left)?;
            out.write_char(')')
        }
        (None, Some(_)) => {
            out.write_str(" (, ")?;
            write_subtree(out, &node.right)?;
            out.write_char(')')
        }
        (Some(_), Some(_)) => {
            out.write_str(" (")?;
            write_subtree(out, &node.left)?;
            out.write_str(", ")?;
            write_subtree(out, &node.right)?;
            out.write_char(')')
        }
    }
}
