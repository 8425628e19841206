// SPDX-License-Identifier: MIT OR Apache-2.0
//! Addressable scalar cells exposed to graphs.

use crate::value::Components;
use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

/// Read/write access to one scalar
pub trait ValueAccess {
    /// Read the current value
    fn read(&self) -> f32;

    /// Store a new value
    fn write(&self, value: f32);
}

/// Access to one component of a shared composite snapshot
struct FieldAccess<T: Components> {
    snapshot: Rc<RefCell<T>>,
    component: T::Component,
}

impl<T: Components> ValueAccess for FieldAccess<T> {
    fn read(&self) -> f32 {
        self.snapshot.borrow().component(self.component)
    }

    fn write(&self, value: f32) {
        self.snapshot.borrow_mut().set_component(self.component, value);
    }
}

/// Access through a pair of accessor closures
struct FnAccess<G, S> {
    get: G,
    set: S,
}

impl<G, S> ValueAccess for FnAccess<G, S>
where
    G: Fn() -> f32,
    S: Fn(f32),
{
    fn read(&self) -> f32 {
        (self.get)()
    }

    fn write(&self, value: f32) {
        (self.set)(value);
    }
}

impl ValueAccess for Cell<f32> {
    fn read(&self) -> f32 {
        self.get()
    }

    fn write(&self, value: f32) {
        self.set(value);
    }
}

/// A single addressable scalar.
///
/// A node holds no value of its own: every read and write is forwarded to
/// whatever storage its owner wired it to. Clones share that storage.
#[derive(Clone)]
pub struct ValueNode {
    access: Rc<dyn ValueAccess>,
}

impl ValueNode {
    /// Create a node from a getter and a setter
    pub fn new(get: impl Fn() -> f32 + 'static, set: impl Fn(f32) + 'static) -> Self {
        Self::from_access(FnAccess { get, set })
    }

    /// Create a node over any accessor
    pub fn from_access(access: impl ValueAccess + 'static) -> Self {
        Self {
            access: Rc::new(access),
        }
    }

    /// Create a node over one component of a shared snapshot
    pub fn field<T>(snapshot: &Rc<RefCell<T>>, component: T::Component) -> Self
    where
        T: Components + 'static,
    {
        Self::from_access(FieldAccess {
            snapshot: Rc::clone(snapshot),
            component,
        })
    }

    /// Create a detached node that owns its own cell
    pub fn detached(initial: f32) -> Self {
        Self::from_access(Cell::new(initial))
    }

    /// Current value
    pub fn get(&self) -> f32 {
        self.access.read()
    }

    /// Store a new value
    pub fn set(&self, value: f32) {
        self.access.write(value);
    }
}

impl fmt::Debug for ValueNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ValueNode").field(&self.get()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::{QuaternionComponent, QuaternionValue};

    #[test]
    fn test_closure_node_forwards() {
        let backing = Rc::new(Cell::new(1.5_f32));
        let get_backing = Rc::clone(&backing);
        let set_backing = Rc::clone(&backing);
        let node = ValueNode::new(move || get_backing.get(), move |v| set_backing.set(v));

        assert_eq!(node.get(), 1.5);
        node.set(4.0);
        assert_eq!(backing.get(), 4.0);
        assert_eq!(node.get(), 4.0);
    }

    #[test]
    fn test_field_nodes_share_snapshot() {
        let snapshot = Rc::new(RefCell::new(QuaternionValue::IDENTITY));
        let first = ValueNode::field(&snapshot, QuaternionComponent::X);
        let second = ValueNode::field(&snapshot, QuaternionComponent::X);

        first.set(0.5);
        assert_eq!(second.get(), 0.5);
        assert_eq!(*snapshot.borrow(), QuaternionValue::new(0.5, 0.0, 0.0, 1.0));

        // Replacing the whole snapshot is visible through old nodes
        *snapshot.borrow_mut() = QuaternionValue::new(0.1, 0.2, 0.3, 0.4);
        assert_eq!(first.get(), 0.1);
    }

    #[test]
    fn test_detached_node() {
        let node = ValueNode::detached(2.0);
        let alias = node.clone();
        alias.set(-1.0);
        assert_eq!(node.get(), -1.0);
        assert_eq!(format!("{node:?}"), "ValueNode(-1.0)");
    }
}
