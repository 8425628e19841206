// SPDX-License-Identifier: MIT OR Apache-2.0
//! Composite transform values and their addressable components.

use serde::{Deserialize, Serialize};

/// A value made of named scalar components.
///
/// Stores use this to read and write a single component of their snapshot
/// without handing out references into it.
pub trait Components: Copy {
    /// Component key type
    type Component: Copy + 'static;

    /// All components in exposure order
    const COMPONENTS: &'static [Self::Component];

    /// Stable string key for a component
    fn key(component: Self::Component) -> &'static str;

    /// Read one component
    fn component(&self, component: Self::Component) -> f32;

    /// Write one component
    fn set_component(&mut self, component: Self::Component, value: f32);
}

/// Component of a 3D vector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Vector3Component {
    /// X axis
    X,
    /// Y axis
    Y,
    /// Z axis
    Z,
}

/// Component of a quaternion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QuaternionComponent {
    /// Imaginary X part
    X,
    /// Imaginary Y part
    Y,
    /// Imaginary Z part
    Z,
    /// Real part
    W,
}

/// 3D vector used for position and scale
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vector3Value {
    /// X component
    pub x: f32,
    /// Y component
    pub y: f32,
    /// Z component
    pub z: f32,
}

impl Vector3Value {
    /// All components zero
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);
    /// All components one
    pub const ONE: Self = Self::new(1.0, 1.0, 1.0);

    /// Create a new vector
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

impl From<[f32; 3]> for Vector3Value {
    fn from([x, y, z]: [f32; 3]) -> Self {
        Self::new(x, y, z)
    }
}

impl From<Vector3Value> for [f32; 3] {
    fn from(v: Vector3Value) -> Self {
        [v.x, v.y, v.z]
    }
}

impl Components for Vector3Value {
    type Component = Vector3Component;

    const COMPONENTS: &'static [Vector3Component] = &[
        Vector3Component::X,
        Vector3Component::Y,
        Vector3Component::Z,
    ];

    fn key(component: Vector3Component) -> &'static str {
        match component {
            Vector3Component::X => "x",
            Vector3Component::Y => "y",
            Vector3Component::Z => "z",
        }
    }

    fn component(&self, component: Vector3Component) -> f32 {
        match component {
            Vector3Component::X => self.x,
            Vector3Component::Y => self.y,
            Vector3Component::Z => self.z,
        }
    }

    fn set_component(&mut self, component: Vector3Component, value: f32) {
        match component {
            Vector3Component::X => self.x = value,
            Vector3Component::Y => self.y = value,
            Vector3Component::Z => self.z = value,
        }
    }
}

/// Orientation quaternion.
///
/// Not normalized on write: whatever the graph produces is transported as-is.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QuaternionValue {
    /// X component
    pub x: f32,
    /// Y component
    pub y: f32,
    /// Z component
    pub z: f32,
    /// W component
    pub w: f32,
}

impl QuaternionValue {
    /// The identity rotation
    pub const IDENTITY: Self = Self::new(0.0, 0.0, 0.0, 1.0);

    /// Create a new quaternion
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    /// Euclidean length of the four components
    pub fn length(&self) -> f32 {
        (self.x * self.x + self.y * self.y + self.z * self.z + self.w * self.w).sqrt()
    }
}

impl Default for QuaternionValue {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl From<[f32; 4]> for QuaternionValue {
    fn from([x, y, z, w]: [f32; 4]) -> Self {
        Self::new(x, y, z, w)
    }
}

impl From<QuaternionValue> for [f32; 4] {
    fn from(q: QuaternionValue) -> Self {
        [q.x, q.y, q.z, q.w]
    }
}

impl Components for QuaternionValue {
    type Component = QuaternionComponent;

    const COMPONENTS: &'static [QuaternionComponent] = &[
        QuaternionComponent::X,
        QuaternionComponent::Y,
        QuaternionComponent::Z,
        QuaternionComponent::W,
    ];

    fn key(component: QuaternionComponent) -> &'static str {
        match component {
            QuaternionComponent::X => "x",
            QuaternionComponent::Y => "y",
            QuaternionComponent::Z => "z",
            QuaternionComponent::W => "w",
        }
    }

    fn component(&self, component: QuaternionComponent) -> f32 {
        match component {
            QuaternionComponent::X => self.x,
            QuaternionComponent::Y => self.y,
            QuaternionComponent::Z => self.z,
            QuaternionComponent::W => self.w,
        }
    }

    fn set_component(&mut self, component: QuaternionComponent, value: f32) {
        match component {
            QuaternionComponent::X => self.x = value,
            QuaternionComponent::Y => self.y = value,
            QuaternionComponent::Z => self.z = value,
            QuaternionComponent::W => self.w = value,
        }
    }
}
