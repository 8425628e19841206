// SPDX-License-Identifier: MIT OR Apache-2.0
//! Keyed property sets handed to graphs.

use crate::value::Components;
use crate::value_node::ValueNode;
use indexmap::IndexMap;
use std::cell::RefCell;
use std::rc::Rc;

/// An exposed property: a scalar cell or a nested group
#[derive(Debug, Clone)]
pub enum Property {
    /// Scalar cell
    Value(ValueNode),
    /// Nested property set
    Group(PropertySet),
}

impl Property {
    /// The scalar node, if this is a value
    pub fn as_value(&self) -> Option<&ValueNode> {
        match self {
            Self::Value(node) => Some(node),
            Self::Group(_) => None,
        }
    }

    /// The nested set, if this is a group
    pub fn as_group(&self) -> Option<&PropertySet> {
        match self {
            Self::Group(set) => Some(set),
            Self::Value(_) => None,
        }
    }
}

impl From<ValueNode> for Property {
    fn from(node: ValueNode) -> Self {
        Self::Value(node)
    }
}

impl From<PropertySet> for Property {
    fn from(set: PropertySet) -> Self {
        Self::Group(set)
    }
}

/// Ordered mapping from stable keys to exposed properties
#[derive(Debug, Clone, Default)]
pub struct PropertySet {
    entries: IndexMap<&'static str, Property>,
}

impl PropertySet {
    /// Create an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// One fresh node per component of a shared snapshot
    pub fn components<T>(snapshot: &Rc<RefCell<T>>) -> Self
    where
        T: Components + 'static,
    {
        T::COMPONENTS
            .iter()
            .map(|&component| (T::key(component), ValueNode::field(snapshot, component)))
            .collect()
    }

    /// Insert a property, replacing any previous one under the same key
    pub fn insert(&mut self, key: &'static str, property: impl Into<Property>) {
        self.entries.insert(key, property.into());
    }

    /// Builder form of [`PropertySet::insert`]
    pub fn with(mut self, key: &'static str, property: impl Into<Property>) -> Self {
        self.insert(key, property);
        self
    }

    /// Get a property by key
    pub fn get(&self, key: &str) -> Option<&Property> {
        self.entries.get(key)
    }

    /// Get a scalar node by key
    pub fn value(&self, key: &str) -> Option<&ValueNode> {
        self.get(key).and_then(Property::as_value)
    }

    /// Get a nested group by key
    pub fn group(&self, key: &str) -> Option<&PropertySet> {
        self.get(key).and_then(Property::as_group)
    }

    /// Keys in exposure order
    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.keys().copied()
    }

    /// Iterate over entries in exposure order
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &Property)> {
        self.entries.iter().map(|(key, property)| (*key, property))
    }

    /// Number of top-level entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the set is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<P: Into<Property>> FromIterator<(&'static str, P)> for PropertySet {
    fn from_iter<I: IntoIterator<Item = (&'static str, P)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(|(k, p)| (k, p.into())).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Vector3Value;

    #[test]
    fn test_components_preserve_order() {
        let snapshot = Rc::new(RefCell::new(Vector3Value::new(1.0, 2.0, 3.0)));
        let set = PropertySet::components(&snapshot);
        assert_eq!(set.keys().collect::<Vec<_>>(), ["x", "y", "z"]);
        assert_eq!(set.value("y").map(ValueNode::get), Some(2.0));
        assert!(set.group("y").is_none());
        assert!(set.get("w").is_none());
    }

    #[test]
    fn test_nested_groups() {
        let inner = PropertySet::new().with("x", ValueNode::detached(7.0));
        let outer = PropertySet::new().with("position", inner);

        let x = outer.group("position").and_then(|g| g.value("x"));
        assert_eq!(x.map(ValueNode::get), Some(7.0));
        assert_eq!(outer.len(), 1);
        assert!(!outer.is_empty());
    }
}
