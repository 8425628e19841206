// SPDX-License-Identifier: MIT OR Apache-2.0
//! Scale store.

use super::{ObjectStore, SyncError};
use crate::binding::{EntityBinding, SharedEntity};
use crate::entity::ScaleTarget;
use crate::node::NodeId;
use crate::property::PropertySet;
use crate::value::Vector3Value;
use std::cell::RefCell;
use std::rc::Rc;

/// Exposes an entity's scale as `x`, `y`, `z` cells.
///
/// Components are plain reals: no clamping, no sign checks.
#[derive(Debug)]
pub struct ScaleStore<E: ?Sized> {
    entity: EntityBinding<E>,
    scale: Rc<RefCell<Vector3Value>>,
}

impl<E: ?Sized> ScaleStore<E> {
    /// Create an unbound store with unit scale
    pub fn new() -> Self {
        Self {
            entity: EntityBinding::unbound(),
            scale: Rc::new(RefCell::new(Vector3Value::ONE)),
        }
    }

    /// Current snapshot
    pub fn snapshot(&self) -> Vector3Value {
        *self.scale.borrow()
    }

    /// Whether an entity has been bound
    pub fn is_bound(&self) -> bool {
        self.entity.is_bound()
    }

    pub(super) fn load_snapshot(&self, value: Vector3Value) {
        *self.scale.borrow_mut() = value;
    }
}

impl<E: ?Sized> Default for ScaleStore<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: ScaleTarget + ?Sized> ObjectStore for ScaleStore<E> {
    type Entity = E;

    fn bind(&mut self, entity: &SharedEntity<E>) {
        self.entity.bind(entity);
        tracing::debug!("Scale store bound to entity");
    }

    fn exposed_properties(&self, _node: NodeId) -> PropertySet {
        PropertySet::components(&self.scale)
    }

    fn synchronize<D: ?Sized, R>(
        &mut self,
        delta: &D,
        apply: impl FnOnce(&D) -> R,
    ) -> Result<R, SyncError> {
        let pulled = self
            .entity
            .read(|entity| entity.scale())
            .inspect_err(|e| tracing::warn!("Scale pull failed: {e}"))?;
        self.load_snapshot(pulled);
        tracing::trace!("Pulled scale {:?}", pulled);

        let result = apply(delta);

        let pushed = self.snapshot();
        self.entity
            .write(|entity| entity.set_scale(pushed))
            .inspect_err(|e| tracing::warn!("Scale push failed: {e}"))?;
        tracing::trace!("Pushed scale {:?}", pushed);

        Ok(result)
    }
}
