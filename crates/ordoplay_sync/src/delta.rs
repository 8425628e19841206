// SPDX-License-Identifier: MIT OR Apache-2.0
//! Change sets applied to exposed properties.
//!
//! A [`NodeDelta`] mirrors the shape of a [`PropertySet`]: scalars for value
//! cells, keyed maps for groups. [`NodeDelta::apply`] is the default rule set
//! a graph engine runs as its compute callback during a store pass.

use crate::property::{Property, PropertySet};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Path reported for errors at the top of the property tree
const ROOT_PATH: &str = "<root>";

/// A tree of values to write into exposed properties
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum NodeDelta {
    /// New value for a scalar cell
    Value(f32),
    /// Changes to a group, by key
    Properties(IndexMap<String, NodeDelta>),
}

impl NodeDelta {
    /// An empty group change
    pub fn properties() -> Self {
        Self::Properties(IndexMap::new())
    }

    /// Add a keyed change.
    ///
    /// Turns a scalar delta into a group delta.
    pub fn with(self, key: impl Into<String>, delta: NodeDelta) -> Self {
        let mut entries = match self {
            Self::Properties(entries) => entries,
            Self::Value(_) => IndexMap::new(),
        };
        entries.insert(key.into(), delta);
        Self::Properties(entries)
    }

    /// Add a keyed scalar change
    pub fn with_value(self, key: impl Into<String>, value: f32) -> Self {
        self.with(key, Self::Value(value))
    }

    /// Whether this delta changes nothing
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Properties(entries) if entries.values().all(NodeDelta::is_empty))
    }

    /// Record the current value of every exposed property
    pub fn capture(properties: &PropertySet) -> Self {
        Self::Properties(
            properties
                .iter()
                .map(|(key, property)| {
                    let delta = match property {
                        Property::Value(node) => Self::Value(node.get()),
                        Property::Group(group) => Self::capture(group),
                    };
                    (key.to_string(), delta)
                })
                .collect(),
        )
    }

    /// Write this delta into a property set.
    ///
    /// Entries are applied in order. The first unknown key or shape mismatch
    /// stops the walk; writes made before it are kept.
    pub fn apply(&self, properties: &PropertySet) -> Result<(), DeltaError> {
        match self {
            Self::Properties(entries) => apply_entries(entries, properties, ""),
            Self::Value(_) => Err(DeltaError::ShapeMismatch(ROOT_PATH.to_string())),
        }
    }
}

fn apply_entries(
    entries: &IndexMap<String, NodeDelta>,
    properties: &PropertySet,
    parent: &str,
) -> Result<(), DeltaError> {
    for (key, delta) in entries {
        let path = if parent.is_empty() {
            key.clone()
        } else {
            format!("{parent}.{key}")
        };
        let property = properties
            .get(key)
            .ok_or_else(|| DeltaError::UnknownProperty(path.clone()))?;

        match (delta, property) {
            (NodeDelta::Value(value), Property::Value(node)) => node.set(*value),
            (NodeDelta::Properties(children), Property::Group(group)) => {
                apply_entries(children, group, &path)?;
            }
            _ => return Err(DeltaError::ShapeMismatch(path)),
        }
    }
    Ok(())
}

/// Error while applying a delta
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DeltaError {
    /// The delta names a property that is not exposed
    #[error("Unknown property: {0}")]
    UnknownProperty(String),

    /// A scalar targets a group, or a group targets a scalar
    #[error("Delta shape does not match property at '{0}'")]
    ShapeMismatch(String),
}
