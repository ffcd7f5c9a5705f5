//! Shared server state.

use std::sync::{Arc, Mutex};

use crate::domain::AvlTree;

/// The single process-wide tree behind one mutex, cloned into every
/// handler. Mutations and reads serialize on the same lock; there is no
/// finer-grained locking because a rotation can touch any node on a
/// root-to-leaf path.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub tree: Arc<Mutex<AvlTree>>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            tree: Arc::new(Mutex::new(AvlTree::new())),
        }
    }
}
