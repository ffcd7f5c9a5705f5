//! Domain layer: the balanced-tree engine and its export view.
//!
//! This layer is independent of external concerns (no I/O, no HTTP, no
//! argument parsing).

pub mod snapshot;
pub mod tree;

pub use snapshot::TreeSnapshot;
pub use tree::AvlTree;
