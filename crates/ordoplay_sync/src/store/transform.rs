// SPDX-License-Identifier: MIT OR Apache-2.0
//! Transform component store: position, rotation and scale in one pass.

use super::{ObjectStore, PositionStore, RotationStore, ScaleStore, SyncError};
use crate::binding::{EntityBinding, SharedEntity};
use crate::entity::TransformTarget;
use crate::node::NodeId;
use crate::property::PropertySet;

/// Groups a position, a rotation and a scale store over one entity.
///
/// Exposes `position`, `rotation` and `scale` groups. A pass pulls all three
/// snapshots under one borrow of the entity, runs the compute callback once,
/// then pushes all three under one mutable borrow. A pass either commits the
/// whole transform or none of it.
#[derive(Debug)]
pub struct TransformComponentStore<E: ?Sized> {
    entity: EntityBinding<E>,
    position: PositionStore<E>,
    rotation: RotationStore<E>,
    scale: ScaleStore<E>,
}

impl<E: ?Sized> TransformComponentStore<E> {
    /// Create an unbound store
    pub fn new() -> Self {
        Self {
            entity: EntityBinding::unbound(),
            position: PositionStore::new(),
            rotation: RotationStore::new(),
            scale: ScaleStore::new(),
        }
    }

    /// Position sub-store
    pub fn position(&self) -> &PositionStore<E> {
        &self.position
    }

    /// Rotation sub-store
    pub fn rotation(&self) -> &RotationStore<E> {
        &self.rotation
    }

    /// Scale sub-store
    pub fn scale(&self) -> &ScaleStore<E> {
        &self.scale
    }
}

impl<E: ?Sized> Default for TransformComponentStore<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: TransformTarget + ?Sized> ObjectStore for TransformComponentStore<E> {
    type Entity = E;

    fn bind(&mut self, entity: &SharedEntity<E>) {
        self.entity.bind(entity);
        self.position.bind(entity);
        self.rotation.bind(entity);
        self.scale.bind(entity);
    }

    fn exposed_properties(&self, node: NodeId) -> PropertySet {
        PropertySet::new()
            .with("position", self.position.exposed_properties(node))
            .with("rotation", self.rotation.exposed_properties(node))
            .with("scale", self.scale.exposed_properties(node))
    }

    fn synchronize<D: ?Sized, R>(
        &mut self,
        delta: &D,
        apply: impl FnOnce(&D) -> R,
    ) -> Result<R, SyncError> {
        let (position, rotation, scale) = self
            .entity
            .read(|entity| (entity.position(), entity.rotation(), entity.scale()))
            .inspect_err(|e| tracing::warn!("Transform pull failed: {e}"))?;
        self.position.load_snapshot(position);
        self.rotation.load_snapshot(rotation);
        self.scale.load_snapshot(scale);
        tracing::trace!("Pulled transform {:?} {:?} {:?}", position, rotation, scale);

        let result = apply(delta);

        let position = self.position.snapshot();
        let rotation = self.rotation.snapshot();
        let scale = self.scale.snapshot();
        self.entity
            .write(|entity| {
                entity.set_position(position);
                entity.set_rotation(rotation);
                entity.set_scale(scale);
            })
            .inspect_err(|e| tracing::warn!("Transform push failed: {e}"))?;
        tracing::trace!("Pushed transform {:?} {:?} {:?}", position, rotation, scale);

        Ok(result)
    }
}
