//! Height-balanced binary search tree (AVL) over signed integer keys.
//!
//! Each node exclusively owns its subtrees; there are no parent pointers and
//! no shared references, so deletion releases a removed subtree transitively
//! and no cycle can form. All descents are top-down; rebalancing happens on
//! the unwind of the recursive mutation path.

use tracing::instrument;

pub(crate) type Link = Option<Box<Node>>;

/// One stored key. `height` is maintained eagerly: a leaf has height 1,
/// an absent subtree counts as height 0.
#[derive(Debug)]
pub(crate) struct Node {
    pub value: i64,
    pub height: u32,
    pub left: Link,
    pub right: Link,
}

impl Node {
    fn new(value: i64) -> Box<Self> {
        Box::new(Node {
            value,
            height: 1,
            left: None,
            right: None,
        })
    }

    fn update_height(&mut self) {
        self.height = 1 + height(&self.left).max(height(&self.right));
    }

    /// `height(left) - height(right)`; outside rebalancing this is
    /// always in {-1, 0, 1}.
    fn balance_factor(&self) -> i64 {
        i64::from(height(&self.left)) - i64::from(height(&self.right))
    }
}

fn height(link: &Link) -> u32 {
    link.as_ref().map_or(0, |n| n.height)
}

/// Self-balancing ordered set of `i64` keys.
///
/// All operations are synchronous and bounded: `contains`, `insert` and
/// `delete` are O(log n) thanks to the balance invariant, `clear` and
/// snapshot export are O(n).
#[derive(Debug, Default)]
pub struct AvlTree {
    pub(crate) root: Link,
    size: usize,
}

impl AvlTree {
    pub fn new() -> Self {
        Self {
            root: None,
            size: 0,
        }
    }

    /// Number of distinct keys currently stored.
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Iterative BST descent; never mutates.
    #[instrument(level = "trace", skip(self))]
    pub fn contains(&self, key: i64) -> bool {
        let mut cur = self.root.as_deref();
        while let Some(node) = cur {
            if key == node.value {
                return true;
            }
            cur = if key < node.value {
                node.left.as_deref()
            } else {
                node.right.as_deref()
            };
        }
        false
    }

    /// Insert `key`, rebalancing every ancestor on the insertion path.
    ///
    /// Returns true iff the key was newly stored; inserting an existing key
    /// is a no-op that leaves shape and size unchanged.
    #[instrument(level = "trace", skip(self))]
    pub fn insert(&mut self, key: i64) -> bool {
        let (root, inserted) = insert_node(self.root.take(), key);
        self.root = Some(root);
        if inserted {
            self.size += 1;
        }
        inserted
    }

    /// Remove `key`, rebalancing every ancestor on the deletion path.
    ///
    /// Returns true iff a key was actually removed; deleting a missing key
    /// is a no-op returning false.
    #[instrument(level = "trace", skip(self))]
    pub fn delete(&mut self, key: i64) -> bool {
        let (root, removed) = delete_node(self.root.take(), key);
        self.root = root;
        if removed {
            self.size -= 1;
        }
        removed
    }

    /// Release the whole tree and reset to the empty state.
    #[instrument(level = "trace", skip(self))]
    pub fn clear(&mut self) {
        self.root = None;
        self.size = 0;
    }
}

fn insert_node(link: Link, key: i64) -> (Box<Node>, bool) {
    let mut node = match link {
        None => return (Node::new(key), true),
        Some(node) => node,
    };
    let inserted = if key < node.value {
        let (child, inserted) = insert_node(node.left.take(), key);
        node.left = Some(child);
        inserted
    } else if key > node.value {
        let (child, inserted) = insert_node(node.right.take(), key);
        node.right = Some(child);
        inserted
    } else {
        // Duplicate key: no new node, nothing to rebalance.
        return (node, false);
    };
    (rebalance(node), inserted)
}

fn delete_node(link: Link, key: i64) -> (Link, bool) {
    let mut node = match link {
        None => return (None, false),
        Some(node) => node,
    };
    let removed = if key < node.value {
        let (child, removed) = delete_node(node.left.take(), key);
        node.left = child;
        removed
    } else if key > node.value {
        let (child, removed) = delete_node(node.right.take(), key);
        node.right = child;
        removed
    } else {
        match (node.left.take(), node.right.take()) {
            // Leaf or single child: splice the node out.
            (None, right) => return (right, true),
            (left, None) => return (left, true),
            // Two children: promote the in-order successor's value, then
            // delete the successor's original key from the right subtree.
            // The successor has no left child, so that recursion bottoms
            // out in one of the splice cases above.
            (left, Some(right)) => {
                let successor = leftmost(&right).value;
                let (right, _) = delete_node(Some(right), successor);
                node.value = successor;
                node.left = left;
                node.right = right;
                true
            }
        }
    };
    (Some(rebalance(node)), removed)
}

fn leftmost(node: &Node) -> &Node {
    let mut cur = node;
    while let Some(left) = cur.left.as_deref() {
        cur = left;
    }
    cur
}

/// Restore the balance invariant at `node`, assuming both subtrees already
/// satisfy it and differ from their pre-mutation heights by at most one.
fn rebalance(mut node: Box<Node>) -> Box<Node> {
    node.update_height();
    let bf = node.balance_factor();
    if bf > 1 {
        // Left-heavy. A left child leaning right first rotates left
        // (the "left-right" double rotation case).
        if node.left.as_ref().map_or(0, |n| n.balance_factor()) < 0 {
            node.left = node.left.take().map(rotate_left);
        }
        return rotate_right(node);
    }
    if bf < -1 {
        if node.right.as_ref().map_or(0, |n| n.balance_factor()) > 0 {
            node.right = node.right.take().map(rotate_right);
        }
        return rotate_left(node);
    }
    node
}

/// `y` takes `z`'s place; `z` becomes `y`'s right child and adopts `y`'s
/// former right subtree as its left. Heights are recomputed `z` first
/// since it is now the lower node.
fn rotate_right(mut z: Box<Node>) -> Box<Node> {
    let mut y = z
        .left
        .take()
        .expect("rotate_right called without a left child");
    z.left = y.right.take();
    z.update_height();
    y.right = Some(z);
    y.update_height();
    y
}

fn rotate_left(mut z: Box<Node>) -> Box<Node> {
    let mut y = z
        .right
        .take()
        .expect("rotate_left called without a right child");
    z.right = y.left.take();
    z.update_height();
    y.left = Some(z);
    y.update_height();
    y
}
