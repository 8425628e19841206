// SPDX-License-Identifier: MIT OR Apache-2.0
//! Position store.

use super::{ObjectStore, SyncError};
use crate::binding::{EntityBinding, SharedEntity};
use crate::entity::PositionTarget;
use crate::node::NodeId;
use crate::property::PropertySet;
use crate::value::Vector3Value;
use std::cell::RefCell;
use std::rc::Rc;

/// Exposes an entity's position as `x`, `y`, `z` cells.
#[derive(Debug)]
pub struct PositionStore<E: ?Sized> {
    entity: EntityBinding<E>,
    position: Rc<RefCell<Vector3Value>>,
}

impl<E: ?Sized> PositionStore<E> {
    /// Create an unbound store at the origin
    pub fn new() -> Self {
        Self {
            entity: EntityBinding::unbound(),
            position: Rc::new(RefCell::new(Vector3Value::ZERO)),
        }
    }

    /// Current snapshot
    pub fn snapshot(&self) -> Vector3Value {
        *self.position.borrow()
    }

    /// Whether an entity has been bound
    pub fn is_bound(&self) -> bool {
        self.entity.is_bound()
    }

    pub(super) fn load_snapshot(&self, value: Vector3Value) {
        *self.position.borrow_mut() = value;
    }
}

impl<E: ?Sized> Default for PositionStore<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: PositionTarget + ?Sized> ObjectStore for PositionStore<E> {
    type Entity = E;

    fn bind(&mut self, entity: &SharedEntity<E>) {
        self.entity.bind(entity);
        tracing::debug!("Position store bound to entity");
    }

    fn exposed_properties(&self, _node: NodeId) -> PropertySet {
        PropertySet::components(&self.position)
    }

    fn synchronize<D: ?Sized, R>(
        &mut self,
        delta: &D,
        apply: impl FnOnce(&D) -> R,
    ) -> Result<R, SyncError> {
        let pulled = self
            .entity
            .read(|entity| entity.position())
            .inspect_err(|e| tracing::warn!("Position pull failed: {e}"))?;
        self.load_snapshot(pulled);
        tracing::trace!("Pulled position {:?}", pulled);

        let result = apply(delta);

        let pushed = self.snapshot();
        self.entity
            .write(|entity| entity.set_position(pushed))
            .inspect_err(|e| tracing::warn!("Position push failed: {e}"))?;
        tracing::trace!("Pushed position {:?}", pushed);

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::SceneEntity;

    #[test]
    fn test_translate_along_y() {
        let entity = Rc::new(RefCell::new(SceneEntity::new("Probe")));
        entity.borrow_mut().set_position(Vector3Value::new(1.0, 2.0, 3.0));
        let mut store = PositionStore::new();
        store.bind(&entity);
        let props = store.exposed_properties(NodeId::new());

        for _ in 0..3 {
            store
                .synchronize(&0.5_f32, |step| {
                    let y = props.value("y").unwrap();
                    y.set(y.get() + step);
                })
                .unwrap();
        }

        assert_eq!(entity.borrow().position(), Vector3Value::new(1.0, 3.5, 3.0));
    }

    #[test]
    fn test_default_snapshot_is_origin() {
        let store = PositionStore::<SceneEntity>::default();
        assert!(!store.is_bound());
        assert_eq!(store.snapshot(), Vector3Value::ZERO);
    }
}
