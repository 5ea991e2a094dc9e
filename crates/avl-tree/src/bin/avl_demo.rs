//! `avl-demo`: apply a sequence of inserts and removals to an AVL tree and
//! print the result.
//!
//! Usage:
//!   avl-demo <key>... [~<key>]...
//!
//! Each argument is an integer key to insert; a key prefixed with `~` is
//! removed instead. Operations run left to right. Set `RUST_LOG=trace` to see
//! the rotations each operation performs.

use avl_tree::AvlTree;
use std::io::{self, Write};

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.is_empty() {
        eprintln!("Usage: avl-demo <key>... [~<key>]...");
        std::process::exit(1);
    }

    let mut tree = AvlTree::new();
    tree.set_rotation_hook(|rotation| log::info!("rotation {rotation}"));

    for arg in &args {
        let (remove, raw) = match arg.strip_prefix('~') {
            Some(rest) => (true, rest),
            None => (false, arg.as_str()),
        };
        let key: i64 = match raw.parse() {
            Ok(k) => k,
            Err(e) => {
                eprintln!("{arg}: {e}");
                std::process::exit(1);
            }
        };
        let result = if remove {
            tree.remove(&key)
        } else {
            tree.insert(key)
        };
        if let Err(e) = result {
            eprintln!("{arg}: {e}");
            std::process::exit(1);
        }
    }

    let mut pre = Vec::new();
    tree.traverse_preorder(|k| pre.push(k.to_string()));
    let mut ino = Vec::new();
    tree.traverse_inorder(|k| ino.push(k.to_string()));
    let mut post = Vec::new();
    tree.traverse_postorder(|k| post.push(k.to_string()));

    let mut out = io::stdout().lock();
    let written = writeln!(out, "{tree}")
        .and_then(|_| writeln!(out, "height: {}", tree.height()))
        .and_then(|_| writeln!(out, "preorder: {}", pre.join(" ")))
        .and_then(|_| writeln!(out, "inorder: {}", ino.join(" ")))
        .and_then(|_| writeln!(out, "postorder: {}", post.join(" ")));
    if let Err(e) = written {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
