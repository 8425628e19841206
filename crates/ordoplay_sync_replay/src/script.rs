// SPDX-License-Identifier: MIT OR Apache-2.0
//! Replay scripts: an initial transform plus one change set per pass.

use ordoplay_sync::{NodeDelta, TransformValue};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Current script format version
pub const SCRIPT_FORMAT_VERSION: u32 = 1;

/// Script loading errors
#[derive(Debug, Error)]
pub enum ScriptError {
    /// File could not be read
    #[error("Failed to read script: {0}")]
    Io(#[from] std::io::Error),

    /// File is not valid RON for a script
    #[error("Failed to parse script: {0}")]
    Parse(#[from] ron::error::SpannedError),

    /// Script was written by a newer tool
    #[error("Script version {found} is newer than supported version {}", SCRIPT_FORMAT_VERSION)]
    UnsupportedVersion {
        /// Version found in the file
        found: u32,
    },
}

/// A recorded sequence of graph passes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReplayScript {
    /// Format version
    pub version: u32,
    /// Entity name
    pub name: String,
    /// Entity transform before the first pass
    pub entity: TransformValue,
    /// Abort on the first change set that does not fit the transform
    pub strict: bool,
    /// One change set per pass
    pub passes: Vec<NodeDelta>,
}

impl Default for ReplayScript {
    fn default() -> Self {
        Self {
            version: SCRIPT_FORMAT_VERSION,
            name: "Entity".to_string(),
            entity: TransformValue::IDENTITY,
            strict: false,
            passes: Vec::new(),
        }
    }
}

impl ReplayScript {
    /// Parse a script from RON text
    pub fn from_ron(s: &str) -> Result<Self, ScriptError> {
        let script: ReplayScript = ron::from_str(s)?;
        if script.version > SCRIPT_FORMAT_VERSION {
            return Err(ScriptError::UnsupportedVersion {
                found: script.version,
            });
        }
        Ok(script)
    }

    /// Load a script from a file
    pub fn load(path: &Path) -> Result<Self, ScriptError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_ron(&content)
    }
}
