use std::cmp;

mod insert;
mod remove;

/// Key type stored in the index.
pub type Key = i32;

pub(crate) type Link = Option<Box<Node>>;

#[derive(Clone)]
pub(crate) struct Node {
    pub(crate) key: Key,
    pub(crate) left: Link,
    pub(crate) right: Link,
    height: usize,
}

impl Node {
    pub(crate) fn create(key: Key) -> Box<Node> {
        Box::new(Node {
            key,
            left: None,
            right: None,
            height: 1,
        })
    }

    /// Cached height of a subtree, 0 for an empty one.
    pub(crate) fn height(link: &Link) -> usize {
        match link {
            None => 0,
            Some(node) => node.height,
        }
    }

    /// Height of a subtree recomputed from scratch, ignoring cached heights.
    #[cfg(any(test, feature = "consistency_check"))]
    pub(crate) fn measure_height(link: &Link) -> usize {
        match link {
            None => 0,
            Some(node) => {
                1 + cmp::max(
                    Self::measure_height(&node.left),
                    Self::measure_height(&node.right),
                )
            }
        }
    }

    #[cfg(any(test, feature = "consistency_check"))]
    pub(crate) fn cached_height(&self) -> usize {
        self.height
    }

    /// Height of the right subtree minus height of the left subtree.
    pub(crate) fn balance(&self) -> isize {
        Self::height(&self.right) as isize - Self::height(&self.left) as isize
    }

    fn is_unbalanced(&self) -> bool {
        self.balance().abs() > 1
    }

    fn adjust_height(&mut self) {
        self.height = 1 + cmp::max(Self::height(&self.left), Self::height(&self.right));
    }

    pub(crate) fn min_key(&self) -> Key {
        let mut current = self;
        while let Some(left) = &current.left {
            current = left;
        }
        current.key
    }

    // The right child becomes the subtree root, its left subtree moves over to `node`.
    fn rotate_left(mut node: Box<Node>) -> Box<Node> {
        let mut root = node
            .right
            .take()
            .expect("left rotation requires a right child");
        tracing::trace!(pivot = node.key, root = root.key, "rotate left");
        node.right = root.left.take();
        node.adjust_height();
        root.left = Some(node);
        root.adjust_height();
        root
    }

    // The left child becomes the subtree root, its right subtree moves over to `node`.
    fn rotate_right(mut node: Box<Node>) -> Box<Node> {
        let mut root = node
            .left
            .take()
            .expect("right rotation requires a left child");
        tracing::trace!(pivot = node.key, root = root.key, "rotate right");
        node.left = root.right.take();
        node.adjust_height();
        root.right = Some(node);
        root.adjust_height();
        root
    }
}
