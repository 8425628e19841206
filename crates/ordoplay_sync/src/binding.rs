// SPDX-License-Identifier: MIT OR Apache-2.0
//! Non-owning entity binding for stores.

use crate::store::SyncError;
use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

/// Shared handle to a live entity
pub type SharedEntity<E> = Rc<RefCell<E>>;

/// Binding of a store to one entity.
///
/// Holds a weak reference: the rendering side decides when the entity dies.
pub struct EntityBinding<E: ?Sized> {
    entity: Option<Weak<RefCell<E>>>,
}

impl<E: ?Sized> EntityBinding<E> {
    /// Create an unbound binding
    pub fn unbound() -> Self {
        Self { entity: None }
    }

    /// Bind to an entity, forgetting any previous one
    pub fn bind(&mut self, entity: &SharedEntity<E>) {
        self.entity = Some(Rc::downgrade(entity));
    }

    /// Whether an entity has been bound
    pub fn is_bound(&self) -> bool {
        self.entity.is_some()
    }

    /// Whether this binding points at the given entity
    pub fn is_bound_to(&self, entity: &SharedEntity<E>) -> bool {
        self.entity
            .as_ref()
            .is_some_and(|weak| std::ptr::addr_eq(weak.as_ptr(), Rc::as_ptr(entity)))
    }

    /// Resolve the bound entity
    pub fn entity(&self) -> Result<SharedEntity<E>, SyncError> {
        self.entity
            .as_ref()
            .ok_or(SyncError::Unbound)?
            .upgrade()
            .ok_or(SyncError::EntityDropped)
    }

    /// Read from the bound entity
    pub fn read<R>(&self, f: impl FnOnce(&E) -> R) -> Result<R, SyncError> {
        let entity = self.entity()?;
        let guard = entity.try_borrow().map_err(|_| SyncError::EntityBusy)?;
        Ok(f(&*guard))
    }

    /// Write to the bound entity
    pub fn write<R>(&self, f: impl FnOnce(&mut E) -> R) -> Result<R, SyncError> {
        let entity = self.entity()?;
        let mut guard = entity.try_borrow_mut().map_err(|_| SyncError::EntityBusy)?;
        Ok(f(&mut *guard))
    }
}

impl<E: ?Sized> Default for EntityBinding<E> {
    fn default() -> Self {
        Self::unbound()
    }
}

impl<E: ?Sized> fmt::Debug for EntityBinding<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = match &self.entity {
            None => "unbound",
            Some(weak) if weak.strong_count() == 0 => "dropped",
            Some(_) => "bound",
        };
        f.debug_struct("EntityBinding").field("state", &state).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::{PositionTarget, SceneEntity};
    use crate::value::Vector3Value;

    #[test]
    fn test_unbound_fails() {
        let binding = EntityBinding::<SceneEntity>::unbound();
        assert!(!binding.is_bound());
        assert!(matches!(binding.entity(), Err(SyncError::Unbound)));
    }

    #[test]
    fn test_binding_does_not_own_entity() {
        let entity = Rc::new(RefCell::new(SceneEntity::new("Probe")));
        let mut binding = EntityBinding::unbound();
        binding.bind(&entity);
        assert!(binding.is_bound_to(&entity));
        assert_eq!(Rc::strong_count(&entity), 1);

        drop(entity);
        assert!(matches!(binding.entity(), Err(SyncError::EntityDropped)));
        assert_eq!(format!("{binding:?}"), "EntityBinding { state: \"dropped\" }");
    }

    #[test]
    fn test_busy_entity_is_reported() {
        let entity = Rc::new(RefCell::new(SceneEntity::new("Probe")));
        let mut binding = EntityBinding::unbound();
        binding.bind(&entity);

        let _held = entity.borrow_mut();
        let result = binding.read(PositionTarget::position);
        assert!(matches!(result, Err(SyncError::EntityBusy)));
    }

    #[test]
    fn test_write_reaches_entity() {
        let entity = Rc::new(RefCell::new(SceneEntity::new("Probe")));
        let mut binding = EntityBinding::unbound();
        binding.bind(&entity);

        binding
            .write(|e| e.set_position(Vector3Value::new(1.0, 0.0, 0.0)))
            .unwrap();
        assert_eq!(entity.borrow().position(), Vector3Value::new(1.0, 0.0, 0.0));
    }
}
