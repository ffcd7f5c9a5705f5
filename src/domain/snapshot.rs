//! Immutable export view of the tree for serialization.
//!
//! A snapshot is a fresh, fully independent copy of the node structure at
//! the moment of the call. It never aliases live nodes, so a handler can
//! serialize it after releasing the tree lock without exposing internal
//! state to concurrent mutation.

use serde::Serialize;

use crate::domain::tree::{AvlTree, Node};

/// Recursive read-only copy of one subtree. Serializes to
/// `{"value": .., "left": .., "right": .., "height": ..}` with `null`
/// for absent subtrees.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TreeSnapshot {
    pub value: i64,
    pub left: Option<Box<TreeSnapshot>>,
    pub right: Option<Box<TreeSnapshot>>,
    pub height: u32,
}

impl TreeSnapshot {
    fn from_node(node: &Node) -> Box<TreeSnapshot> {
        Box::new(TreeSnapshot {
            value: node.value,
            left: node.left.as_deref().map(Self::from_node),
            right: node.right.as_deref().map(Self::from_node),
            height: node.height,
        })
    }
}

impl AvlTree {
    /// Capture the current shape; `None` for an empty tree.
    pub fn snapshot(&self) -> Option<Box<TreeSnapshot>> {
        self.root.as_deref().map(TreeSnapshot::from_node)
    }
}
