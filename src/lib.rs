//! An ordered index of integer keys backed by an AVL tree.
//!
//! ```
//! use avl_index::Tree;
//!
//! let mut tree = Tree::new();
//! for key in [3, 1, 2] {
//!     tree.insert(key);
//! }
//! assert!(tree.contains(&2));
//! assert_eq!(tree.height(), 2);
//! assert_eq!(tree.to_string(), "/: 2\n       L: 1\n       R: 3\n");
//! ```

mod node;
mod tree;

pub use node::Key;
pub use tree::Tree;
