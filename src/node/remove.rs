use std::cmp::Ordering;

use super::{Key, Link, Node};

impl Node {
    /// Removes `key` from the subtree and returns the remaining subtree root.
    /// Sets `removed` if a node was unlinked; an absent key leaves the subtree untouched.
    pub(crate) fn remove(mut node: Box<Node>, key: Key, removed: &mut bool) -> Link {
        match key.cmp(&node.key) {
            Ordering::Less => {
                if let Some(left) = node.left.take() {
                    node.left = Self::remove(left, key, removed);
                }
            }
            Ordering::Greater => {
                if let Some(right) = node.right.take() {
                    node.right = Self::remove(right, key, removed);
                }
            }
            Ordering::Equal => match (node.left.take(), node.right.take()) {
                (Some(left), Some(right)) => {
                    // Node keeps its place and takes over the in-order successor's key
                    let successor = right.min_key();
                    tracing::trace!(key, successor, "replace key by successor");
                    node.key = successor;
                    node.left = Some(left);
                    node.right = Self::remove(right, successor, removed);
                }
                (Some(child), None) | (None, Some(child)) => {
                    tracing::trace!(key, "unlink stem node");
                    *removed = true;
                    return Some(child);
                }
                (None, None) => {
                    tracing::trace!(key, "unlink leaf node");
                    *removed = true;
                    return None;
                }
            },
        }

        node.adjust_height();
        if node.is_unbalanced() {
            Some(Self::rebalance_on_remove(node))
        } else {
            Some(node)
        }
    }

    // No inserted key to steer by, so the taller child's own balance decides
    // between single and double rotation. A balanced child takes the single
    // rotation on either side.
    fn rebalance_on_remove(mut node: Box<Node>) -> Box<Node> {
        if node.balance() < 0 {
            let child_balance = node
                .left
                .as_ref()
                .expect("left-heavy node has a left child")
                .balance();
            if child_balance > 0 {
                // Left-right
                node.left = node.left.take().map(Node::rotate_left);
            }
            Node::rotate_right(node)
        } else {
            let child_balance = node
                .right
                .as_ref()
                .expect("right-heavy node has a right child")
                .balance();
            if child_balance < 0 {
                // Right-left
                node.right = node.right.take().map(Node::rotate_right);
            }
            Node::rotate_left(node)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Node;

    fn branch(key: i32, left: Option<Box<Node>>, right: Option<Box<Node>>) -> Box<Node> {
        let mut node = Node::create(key);
        node.left = left;
        node.right = right;
        node.adjust_height();
        node
    }

    #[test]
    fn test_rebalance_balanced_left_child() {
        //       7        4
        //      /        / \
        //     4    ->  2   7
        //    / \          /
        //   2   6        6
        let node = branch(
            7,
            Some(branch(4, Some(Node::create(2)), Some(Node::create(6)))),
            None,
        );
        assert_eq!(node.left.as_ref().unwrap().balance(), 0);
        let root = Node::rebalance_on_remove(node);
        assert_eq!(root.key, 4);
        assert_eq!(root.balance(), 1);
        let right = root.right.as_ref().unwrap();
        assert_eq!(right.key, 7);
        assert_eq!(right.left.as_ref().unwrap().key, 6);
    }

    #[test]
    fn test_rebalance_balanced_right_child() {
        //   1            3
        //    \          / \
        //     3    ->  1   4
        //    / \        \
        //   2   4        2
        let node = branch(
            1,
            None,
            Some(branch(3, Some(Node::create(2)), Some(Node::create(4)))),
        );
        let root = Node::rebalance_on_remove(node);
        assert_eq!(root.key, 3);
        assert_eq!(root.balance(), -1);
        let left = root.left.as_ref().unwrap();
        assert_eq!(left.key, 1);
        assert_eq!(left.right.as_ref().unwrap().key, 2);
    }

    #[test]
    #[should_panic(expected = "right-heavy node has a right child")]
    fn test_rebalance_without_taller_child() {
        Node::rebalance_on_remove(Node::create(1));
    }
}
