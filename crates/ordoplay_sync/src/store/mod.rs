// SPDX-License-Identifier: MIT OR Apache-2.0
//! Stores bridging graph property sets and live entity state.
//!
//! Every store runs the same three-step pass:
//! 1. Pull the composite value from the bound entity into a private snapshot
//! 2. Run the graph's compute callback, which reads and writes the snapshot
//!    through the store's [`ValueNode`](crate::ValueNode)s
//! 3. Push the snapshot back to the entity
//!
//! The entity is touched exactly twice per pass. Between pull and push the
//! snapshot is the only source of truth for the exposed nodes.

mod position;
mod rotation;
mod scale;
mod transform;

pub use position::PositionStore;
pub use rotation::RotationStore;
pub use scale::ScaleStore;
pub use transform::TransformComponentStore;

use crate::binding::SharedEntity;
use crate::node::NodeId;
use crate::property::PropertySet;

/// Contract shared by all property stores
pub trait ObjectStore {
    /// Entity interface this store reads and writes
    type Entity: ?Sized;

    /// Bind to an entity, replacing any previous binding.
    ///
    /// The store keeps a weak reference and never extends the entity's
    /// lifetime.
    fn bind(&mut self, entity: &SharedEntity<Self::Entity>);

    /// Fresh per-component nodes over the store's snapshot.
    ///
    /// `node` identifies the requesting graph node. It does not change the
    /// returned shape.
    fn exposed_properties(&self, node: NodeId) -> PropertySet;

    /// Run one pull/compute/push pass.
    ///
    /// `delta` is handed to `apply` untouched and `apply` runs exactly once.
    /// Whatever `apply` returns is passed back to the caller after the push,
    /// so a failed compute still commits the writes it made before failing.
    ///
    /// Fails without calling `apply` if the store is unbound, the entity has
    /// been dropped, or the entity is borrowed elsewhere. The same conditions
    /// at push time discard `apply`'s result and return the error, and the
    /// entity is left as it was pulled.
    fn synchronize<D: ?Sized, R>(
        &mut self,
        delta: &D,
        apply: impl FnOnce(&D) -> R,
    ) -> Result<R, SyncError>;
}

/// Error during a synchronization pass
#[derive(Debug, thiserror::Error)]
pub enum SyncError {
    /// No entity was ever bound
    #[error("Store is not bound to an entity")]
    Unbound,

    /// The bound entity no longer exists
    #[error("Bound entity has been dropped")]
    EntityDropped,

    /// The entity is already borrowed by another system
    #[error("Bound entity is borrowed elsewhere")]
    EntityBusy,
}
