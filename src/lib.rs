//! avlviz: a self-balancing AVL tree served over a JSON HTTP API.
//!
//! The domain layer holds the balanced-tree engine; the server layer wraps
//! the single shared tree in an axum router with four endpoints (fetch,
//! insert, delete, clear) and serves the browser visualizer's static
//! assets for every other path.

pub mod cli;
pub mod domain;
pub mod server;
