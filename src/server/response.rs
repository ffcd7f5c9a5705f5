//! Wire DTOs for the tree API.

use serde::{Deserialize, Serialize};

use crate::domain::TreeSnapshot;

/// Request body for insert/delete: `{"value": <int>}`.
#[derive(Debug, Deserialize)]
pub struct KeyRequest {
    pub value: i64,
}

/// Response body for every tree endpoint: the full structural snapshot
/// (`null` when empty), the current size, and for mutations a
/// human-readable outcome message.
#[derive(Debug, Serialize)]
pub struct TreeResponse {
    pub tree: Option<Box<TreeSnapshot>>,
    pub size: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}
