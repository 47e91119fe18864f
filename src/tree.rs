use std::fmt;
use std::io;

use crate::node::{Key, Link, Node};

// Width of the label field grows by this much per level when printing.
const INDENT: usize = 8;

/// An ordered set of integer keys kept height-balanced as an AVL tree.
#[derive(Clone)]
pub struct Tree {
    root: Link,
    num_nodes: usize,
}

impl Tree {
    /// Creates an empty tree.
    /// No memory is allocated until the first key is inserted.
    pub fn new() -> Self {
        Self {
            root: None,
            num_nodes: 0,
        }
    }

    /// Returns true if the tree contains no keys.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Returns the number of keys in the tree.
    pub fn len(&self) -> usize {
        self.num_nodes
    }

    /// Returns the height of the tree: 0 when empty, 1 for a single key.
    pub fn height(&self) -> usize {
        Node::height(&self.root)
    }

    /// Clears the tree, deallocating all nodes.
    pub fn clear(&mut self) {
        // Detach children before dropping each node so teardown never recurses.
        let mut stack: Vec<Box<Node>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
        self.num_nodes = 0;
    }

    /// Returns true if the tree contains the key.
    pub fn contains(&self, key: &Key) -> bool {
        let mut current = &self.root;
        while let Some(node) = current {
            if *key == node.key {
                return true;
            } else if *key < node.key {
                current = &node.left;
            } else {
                current = &node.right;
            }
        }
        false
    }

    /// Inserts a key into the tree.
    /// Returns whether the key was newly inserted; inserting a present key is a no-op.
    pub fn insert(&mut self, key: Key) -> bool {
        let mut inserted = false;
        self.root = Some(Node::insert(self.root.take(), key, &mut inserted));
        if inserted {
            self.num_nodes += 1;
        }
        inserted
    }

    /// Removes a key from the tree.
    /// Returns whether the key was previously in the tree; removing an absent key is a no-op.
    pub fn remove(&mut self, key: &Key) -> bool {
        let mut removed = false;
        if let Some(root) = self.root.take() {
            self.root = Node::remove(root, *key, &mut removed);
        }
        if removed {
            debug_assert!(self.num_nodes >= 1);
            self.num_nodes -= 1;
            debug_assert!(!self.contains(key));
        }
        removed
    }

    /// Writes the tree depth-first, one `<label>: <key>` line per node.
    /// Labels are `/` for the root, `L` and `R` for left and right children,
    /// right-aligned in a field eight columns wider per level.
    pub fn print<W: io::Write>(&self, out: &mut W) -> io::Result<()> {
        write!(out, "{self}")
    }

    #[cfg(any(test, feature = "consistency_check"))]
    pub fn check_consistency(&self) {
        // Check tree nodes
        let mut num_nodes = 0;
        self.preorder(|node, _, _| {
            let left_height = Node::height(&node.left);
            let right_height = Node::height(&node.right);

            // Check local order of child nodes
            if let Some(left) = &node.left {
                assert!(left.key < node.key);
            }
            if let Some(right) = &node.right {
                assert!(right.key > node.key);
            }

            // Check cached height
            assert_eq!(node.cached_height(), 1 + left_height.max(right_height));

            // Check AVL condition (nearly balance)
            assert!(left_height <= right_height + 1);
            assert!(right_height <= left_height + 1);

            num_nodes += 1;
        });

        // Check global order
        let keys = self.keys();
        assert!(keys.windows(2).all(|pair| pair[0] < pair[1]));

        // Check cached heights against recomputed ones
        assert_eq!(self.height(), Node::measure_height(&self.root));

        // Check number of nodes
        assert_eq!(num_nodes, self.num_nodes);
        assert_eq!(keys.len(), self.num_nodes);
    }

    /// Keys in ascending order.
    #[cfg(any(test, feature = "consistency_check"))]
    pub(crate) fn keys(&self) -> Vec<Key> {
        let mut keys = Vec::with_capacity(self.num_nodes);
        let mut stack: Vec<&Node> = Vec::new();
        let mut current = &self.root;
        loop {
            while let Some(node) = current {
                stack.push(&**node);
                current = &node.left;
            }
            match stack.pop() {
                None => break,
                Some(node) => {
                    keys.push(node.key);
                    current = &node.right;
                }
            }
        }
        keys
    }

    // Visits node, then left subtree, then right subtree, with the side each
    // node hangs off its parent and its depth below the root.
    fn preorder<F: FnMut(&Node, Side, usize)>(&self, mut f: F) {
        let mut stack: Vec<(&Node, Side, usize)> = Vec::new();
        if let Some(root) = &self.root {
            stack.push((&**root, Side::Root, 0));
        }
        while let Some((node, side, depth)) = stack.pop() {
            f(node, side, depth);
            if let Some(right) = &node.right {
                stack.push((&**right, Side::Right, depth + 1));
            }
            if let Some(left) = &node.left {
                stack.push((&**left, Side::Left, depth + 1));
            }
        }
    }
}

impl Drop for Tree {
    fn drop(&mut self) {
        self.clear();
    }
}

impl Default for Tree {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Tree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut result = Ok(());
        self.preorder(|node, side, depth| {
            if result.is_ok() {
                result = writeln!(
                    f,
                    "{:>width$}: {}",
                    side.label(),
                    node.key,
                    width = depth * INDENT
                );
            }
        });
        result
    }
}

#[derive(Clone, Copy)]
enum Side {
    Root,
    Left,
    Right,
}

impl Side {
    fn label(self) -> &'static str {
        match self {
            Side::Root => "/",
            Side::Left => "L",
            Side::Right => "R",
        }
    }
}
