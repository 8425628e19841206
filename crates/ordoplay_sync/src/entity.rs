// SPDX-License-Identifier: MIT OR Apache-2.0
//! Entity interfaces consumed by stores.
//!
//! Entities are owned by the rendering side. Stores only need a getter and a
//! setter for the one composite property they manage, so each property has
//! its own trait.

use crate::value::{QuaternionValue, Vector3Value};
use serde::{Deserialize, Serialize};

/// Entity with a readable and writable position
pub trait PositionTarget {
    /// Current position
    fn position(&self) -> Vector3Value;
    /// Replace the position
    fn set_position(&mut self, position: Vector3Value);
}

/// Entity with a readable and writable rotation
pub trait RotationTarget {
    /// Current rotation
    fn rotation(&self) -> QuaternionValue;
    /// Replace the rotation
    fn set_rotation(&mut self, rotation: QuaternionValue);
}

/// Entity with a readable and writable scale
pub trait ScaleTarget {
    /// Current scale
    fn scale(&self) -> Vector3Value;
    /// Replace the scale
    fn set_scale(&mut self, scale: Vector3Value);
}

/// Entity exposing a full transform
pub trait TransformTarget: PositionTarget + RotationTarget + ScaleTarget {}

impl<T: PositionTarget + RotationTarget + ScaleTarget + ?Sized> TransformTarget for T {}

/// Plain transform state
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransformValue {
    /// Position
    pub position: Vector3Value,
    /// Rotation
    pub rotation: QuaternionValue,
    /// Scale
    pub scale: Vector3Value,
}

impl TransformValue {
    /// Identity transform
    pub const IDENTITY: Self = Self {
        position: Vector3Value::ZERO,
        rotation: QuaternionValue::IDENTITY,
        scale: Vector3Value::ONE,
    };
}

impl Default for TransformValue {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// In-memory entity.
///
/// Stands in for a rendered object when no renderer is attached, e.g. when
/// replaying recorded change sets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneEntity {
    /// Entity name
    pub name: String,
    /// Current transform
    pub transform: TransformValue,
}

impl SceneEntity {
    /// Create an entity with the identity transform
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            transform: TransformValue::IDENTITY,
        }
    }

    /// Set the initial transform
    pub fn with_transform(mut self, transform: TransformValue) -> Self {
        self.transform = transform;
        self
    }
}

impl PositionTarget for SceneEntity {
    fn position(&self) -> Vector3Value {
        self.transform.position
    }

    fn set_position(&mut self, position: Vector3Value) {
        self.transform.position = position;
    }
}

impl RotationTarget for SceneEntity {
    fn rotation(&self) -> QuaternionValue {
        self.transform.rotation
    }

    fn set_rotation(&mut self, rotation: QuaternionValue) {
        self.transform.rotation = rotation;
    }
}

impl ScaleTarget for SceneEntity {
    fn scale(&self) -> Vector3Value {
        self.transform.scale
    }

    fn set_scale(&mut self, scale: Vector3Value) {
        self.transform.scale = scale;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_entity_is_identity() {
        let entity = SceneEntity::new("Cube");
        assert_eq!(entity.rotation(), QuaternionValue::IDENTITY);
        assert_eq!(entity.scale(), Vector3Value::ONE);
        assert_eq!(entity.position(), Vector3Value::ZERO);
    }

    #[test]
    fn test_partial_transform_deserializes_with_defaults() {
        let transform: TransformValue =
            ron::from_str("(position: (x: 1.0, y: 2.0, z: 3.0))").unwrap();
        assert_eq!(transform.position, Vector3Value::new(1.0, 2.0, 3.0));
        assert_eq!(transform.rotation, QuaternionValue::IDENTITY);
        assert_eq!(transform.scale, Vector3Value::ONE);
    }
}
