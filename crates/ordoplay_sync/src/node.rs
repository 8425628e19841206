// SPDX-License-Identifier: MIT OR Apache-2.0
//! Identifiers for graph nodes that request store properties.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a graph node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeId(pub Uuid);

impl NodeId {
    /// Create a new random node ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for NodeId {
    fn default() -> Self {
        Self::new()
    }
}
