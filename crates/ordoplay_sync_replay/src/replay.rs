// SPDX-License-Identifier: MIT OR Apache-2.0
//! Runs a replay script against an in-memory entity.

use crate::script::ReplayScript;
use ordoplay_sync::{
    DeltaError, NodeId, ObjectStore, SceneEntity, SyncError, TransformComponentStore,
};
use std::cell::RefCell;
use std::rc::Rc;
use thiserror::Error;

/// Replay errors
#[derive(Debug, Error)]
pub enum ReplayError {
    /// The store could not complete a pass
    #[error("Pass {pass} failed: {source}")]
    Sync {
        /// Zero-based pass index
        pass: usize,
        /// Underlying error
        source: SyncError,
    },

    /// A change set did not fit the transform (strict mode)
    #[error("Pass {pass} rejected: {source}")]
    Delta {
        /// Zero-based pass index
        pass: usize,
        /// Underlying error
        source: DeltaError,
    },
}

/// Outcome of a replay
#[derive(Debug, Clone, PartialEq)]
pub struct ReplayReport {
    /// Entity state after the last pass
    pub entity: SceneEntity,
    /// Passes run
    pub passes: usize,
    /// Passes whose change set was only partly applied
    pub rejected: usize,
}

/// Run every pass of a script.
///
/// Each pass pulls the entity transform, applies the pass's change set, and
/// pushes the result. In non-strict mode a change set that names an unknown
/// property is logged and counted; the writes it made before the bad entry
/// are still committed.
pub fn replay(script: &ReplayScript) -> Result<ReplayReport, ReplayError> {
    let entity = Rc::new(RefCell::new(
        SceneEntity::new(script.name.clone()).with_transform(script.entity),
    ));
    let mut store = TransformComponentStore::new();
    store.bind(&entity);
    let properties = store.exposed_properties(NodeId::new());

    let mut rejected = 0;
    for (pass, delta) in script.passes.iter().enumerate() {
        let applied = store
            .synchronize(delta, |delta| delta.apply(&properties))
            .map_err(|source| ReplayError::Sync { pass, source })?;

        match applied {
            Ok(()) => tracing::debug!("Pass {} applied", pass),
            Err(source) if script.strict => return Err(ReplayError::Delta { pass, source }),
            Err(e) => {
                tracing::warn!("Pass {} partly applied: {}", pass, e);
                rejected += 1;
            }
        }
    }

    let entity = entity.borrow().clone();
    tracing::info!(
        "Replayed {} passes on '{}' ({} rejected)",
        script.passes.len(),
        entity.name,
        rejected
    );

    Ok(ReplayReport {
        entity,
        passes: script.passes.len(),
        rejected,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use ordoplay_sync::{NodeDelta, QuaternionValue, Vector3Value};

    fn rotate_x(value: f32) -> NodeDelta {
        NodeDelta::properties().with("rotation", NodeDelta::properties().with_value("x", value))
    }

    #[test]
    fn test_replay_applies_passes_in_order() {
        let script = ReplayScript {
            passes: vec![
                rotate_x(0.25),
                NodeDelta::properties(),
                rotate_x(0.5),
                NodeDelta::properties()
                    .with("position", NodeDelta::properties().with_value("y", 1.0)),
            ],
            ..ReplayScript::default()
        };

        let report = replay(&script).unwrap();
        assert_eq!(report.passes, 4);
        assert_eq!(report.rejected, 0);
        assert_eq!(
            report.entity.transform.rotation,
            QuaternionValue::new(0.5, 0.0, 0.0, 1.0)
        );
        assert_eq!(report.entity.transform.position, Vector3Value::new(0.0, 1.0, 0.0));
        assert_eq!(report.entity.transform.scale, Vector3Value::ONE);
    }

    #[test]
    fn test_lenient_replay_counts_rejections() {
        let bad = NodeDelta::properties()
            .with("scale", NodeDelta::properties().with_value("x", 3.0))
            .with("color", NodeDelta::properties());
        let script = ReplayScript {
            passes: vec![bad],
            ..ReplayScript::default()
        };

        let report = replay(&script).unwrap();
        assert_eq!(report.rejected, 1);
        // Writes before the unknown key were still committed
        assert_eq!(report.entity.transform.scale, Vector3Value::new(3.0, 1.0, 1.0));
    }

    #[test]
    fn test_strict_replay_stops() {
        let script = ReplayScript {
            strict: true,
            passes: vec![rotate_x(0.1), NodeDelta::Value(1.0), rotate_x(0.9)],
            ..ReplayScript::default()
        };

        let err = replay(&script).unwrap_err();
        assert!(matches!(err, ReplayError::Delta { pass: 1, .. }));
    }
}
