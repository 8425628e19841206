// SPDX-License-Identifier: MIT OR Apache-2.0
//! Property synchronization between `OrdoPlay` graphs and live entities.
//!
//! This crate lets a dataflow graph read and write an entity's transform
//! (position, rotation, scale) one scalar component at a time, while the
//! entity itself only exposes whole vectors and quaternions.
//!
//! ## Architecture
//!
//! - [`ValueNode`]: one addressable scalar cell handed to the graph
//! - [`ObjectStore`]: the bind / expose / synchronize contract
//! - Concrete stores for rotation, scale, position and the full transform
//! - [`NodeDelta`]: change sets plus the default rules for applying them
//!
//! A pass pulls the entity's value into the store's snapshot, runs the
//! graph's compute callback against that snapshot, then pushes the snapshot
//! back. Everything is single-threaded: stores and nodes are `!Send`.
//!
//! ```
//! use ordoplay_sync::{NodeDelta, NodeId, ObjectStore, RotationStore, SceneEntity};
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! let entity = Rc::new(RefCell::new(SceneEntity::new("Cube")));
//! let mut store = RotationStore::new();
//! store.bind(&entity);
//!
//! let props = store.exposed_properties(NodeId::new());
//! let delta = NodeDelta::properties().with_value("x", 0.5);
//! store.synchronize(&delta, |delta| delta.apply(&props)).unwrap().unwrap();
//!
//! assert_eq!(entity.borrow().transform.rotation.x, 0.5);
//! ```

pub mod value;
pub mod value_node;
pub mod property;
pub mod entity;
pub mod binding;
pub mod node;
pub mod store;
pub mod delta;

pub use value::{Components, QuaternionComponent, QuaternionValue, Vector3Component, Vector3Value};
pub use value_node::{ValueAccess, ValueNode};
pub use property::{Property, PropertySet};
pub use entity::{
    PositionTarget, RotationTarget, ScaleTarget, SceneEntity, TransformTarget, TransformValue,
};
pub use binding::{EntityBinding, SharedEntity};
pub use node::NodeId;
pub use store::{
    ObjectStore, PositionStore, RotationStore, ScaleStore, SyncError, TransformComponentStore,
};
pub use delta::{DeltaError, NodeDelta};
