// SPDX-License-Identifier: MIT OR Apache-2.0
//! Rotation store.

use super::{ObjectStore, SyncError};
use crate::binding::{EntityBinding, SharedEntity};
use crate::entity::RotationTarget;
use crate::node::NodeId;
use crate::property::PropertySet;
use crate::value::QuaternionValue;
use std::cell::RefCell;
use std::rc::Rc;

/// Exposes an entity's rotation as `x`, `y`, `z`, `w` cells.
///
/// Written quaternions are pushed as-is, without renormalization.
#[derive(Debug)]
pub struct RotationStore<E: ?Sized> {
    entity: EntityBinding<E>,
    rotation: Rc<RefCell<QuaternionValue>>,
}

impl<E: ?Sized> RotationStore<E> {
    /// Create an unbound store with the identity rotation
    pub fn new() -> Self {
        Self {
            entity: EntityBinding::unbound(),
            rotation: Rc::new(RefCell::new(QuaternionValue::IDENTITY)),
        }
    }

    /// Current snapshot
    pub fn snapshot(&self) -> QuaternionValue {
        *self.rotation.borrow()
    }

    /// Whether an entity has been bound
    pub fn is_bound(&self) -> bool {
        self.entity.is_bound()
    }

    pub(super) fn load_snapshot(&self, value: QuaternionValue) {
        *self.rotation.borrow_mut() = value;
    }
}

impl<E: ?Sized> Default for RotationStore<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: RotationTarget + ?Sized> ObjectStore for RotationStore<E> {
    type Entity = E;

    fn bind(&mut self, entity: &SharedEntity<E>) {
        self.entity.bind(entity);
        tracing::debug!("Rotation store bound to entity");
    }

    fn exposed_properties(&self, _node: NodeId) -> PropertySet {
        PropertySet::components(&self.rotation)
    }

    fn synchronize<D: ?Sized, R>(
        &mut self,
        delta: &D,
        apply: impl FnOnce(&D) -> R,
    ) -> Result<R, SyncError> {
        let pulled = self
            .entity
            .read(|entity| entity.rotation())
            .inspect_err(|e| tracing::warn!("Rotation pull failed: {e}"))?;
        self.load_snapshot(pulled);
        tracing::trace!("Pulled rotation {:?}", pulled);

        let result = apply(delta);

        let pushed = self.snapshot();
        self.entity
            .write(|entity| entity.set_rotation(pushed))
            .inspect_err(|e| tracing::warn!("Rotation push failed: {e}"))?;
        tracing::trace!("Pushed rotation {:?}", pushed);

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::SceneEntity;

    fn bound_store(rotation: QuaternionValue) -> (RotationStore<SceneEntity>, SharedEntity<SceneEntity>) {
        let entity = Rc::new(RefCell::new(SceneEntity::new("Probe")));
        entity.borrow_mut().set_rotation(rotation);
        let mut store = RotationStore::new();
        store.bind(&entity);
        (store, entity)
    }

    #[test]
    fn test_write_x_through_node() {
        let (mut store, entity) = bound_store(QuaternionValue::IDENTITY);
        let props = store.exposed_properties(NodeId::new());

        store
            .synchronize(&(), |_| props.value("x").unwrap().set(0.5))
            .unwrap();

        assert_eq!(entity.borrow().rotation(), QuaternionValue::new(0.5, 0.0, 0.0, 1.0));
    }

    #[test]
    fn test_pull_sees_external_changes() {
        let (mut store, entity) = bound_store(QuaternionValue::IDENTITY);
        let props = store.exposed_properties(NodeId::new());
        store.synchronize(&(), |_| ()).unwrap();

        // Another system moves the entity between passes
        let external = QuaternionValue::new(0.0, 0.7071, 0.0, 0.7071);
        entity.borrow_mut().set_rotation(external);

        let seen = store
            .synchronize(&(), |_| {
                ["x", "y", "z", "w"].map(|key| props.value(key).unwrap().get())
            })
            .unwrap();
        assert_eq!(seen, <[f32; 4]>::from(external));
    }

    #[test]
    fn test_no_writes_is_idempotent() {
        let start = QuaternionValue::new(0.1, 0.2, 0.3, 0.9);
        let (mut store, entity) = bound_store(start);

        store.synchronize(&(), |_| ()).unwrap();
        store.synchronize(&(), |_| ()).unwrap();
        assert_eq!(entity.borrow().rotation(), start);
    }

    #[test]
    fn test_non_unit_quaternion_is_not_normalized() {
        let (mut store, entity) = bound_store(QuaternionValue::IDENTITY);
        let props = store.exposed_properties(NodeId::new());

        store
            .synchronize(&(), |_| {
                props.value("w").unwrap().set(3.0);
                props.value("z").unwrap().set(4.0);
            })
            .unwrap();

        let rotation = entity.borrow().rotation();
        assert_eq!(rotation, QuaternionValue::new(0.0, 0.0, 4.0, 3.0));
        assert_eq!(rotation.length(), 5.0);
    }

    #[test]
    fn test_delta_passed_through() {
        let (mut store, _entity) = bound_store(QuaternionValue::IDENTITY);
        let delta = 0.016_f32;
        let seen = store.synchronize(&delta, |d| *d).unwrap();
        assert_eq!(seen, delta);
    }

    #[test]
    fn test_unbound_store_fails_fast() {
        let mut store = RotationStore::<SceneEntity>::new();
        let mut called = false;
        let result = store.synchronize(&(), |_| called = true);
        assert!(matches!(result, Err(SyncError::Unbound)));
        assert!(!called);
        assert_eq!(store.snapshot(), QuaternionValue::IDENTITY);
    }
}
