use std::cmp::Ordering;

use super::{Key, Link, Node};

impl Node {
    /// Inserts `key` into the subtree and returns the (possibly new) subtree root.
    /// Sets `inserted` if a node was created; a present key leaves the subtree untouched.
    pub(crate) fn insert(link: Link, key: Key, inserted: &mut bool) -> Box<Node> {
        let mut node = match link {
            None => {
                *inserted = true;
                return Node::create(key);
            }
            Some(node) => node,
        };

        match key.cmp(&node.key) {
            Ordering::Equal => return node,
            Ordering::Less => node.left = Some(Self::insert(node.left.take(), key, inserted)),
            Ordering::Greater => node.right = Some(Self::insert(node.right.take(), key, inserted)),
        }

        node.adjust_height();
        if node.is_unbalanced() {
            Self::rebalance_on_insert(node, key)
        } else {
            node
        }
    }

    // The side of the imbalance and single vs. double rotation both follow
    // from where `key` was just inserted relative to `node` and its child.
    fn rebalance_on_insert(mut node: Box<Node>, key: Key) -> Box<Node> {
        if key < node.key {
            let child_key = node.left.as_ref().expect("left-heavy node has a left child").key;
            if key >= child_key {
                // Left-right
                node.left = node.left.take().map(Node::rotate_left);
            }
            Node::rotate_right(node)
        } else {
            let child_key = node.right.as_ref().expect("right-heavy node has a right child").key;
            if key < child_key {
                // Right-left
                node.right = node.right.take().map(Node::rotate_right);
            }
            Node::rotate_left(node)
        }
    }
}
