//! Capability traits for training samples and a map-backed implementation.

use std::collections::HashMap;

use super::value::{Class, Val};

/// Read-only access to attribute values by name.
///
/// This is all the classification walk needs, so unlabeled records can be
/// classified without wrapping them in a [`Sample`].
pub trait Attributes {
    /// The value held for `attr`, if any.
    fn value(&self, attr: &str) -> Option<Val>;
}

/// A labeled training example.
///
/// The induction engine never mutates samples; it only partitions
/// references to them.
pub trait Sample: Attributes {
    /// The true label of this example.
    fn class(&self) -> Class;
}

impl Attributes for HashMap<String, Val> {
    fn value(&self, attr: &str) -> Option<Val> {
        self.get(attr).cloned()
    }
}

/// A sample backed by a name-to-value map.
///
/// # Example
/// ```
/// use idtree::{Attributes, MapSample, Val};
///
/// let sample = MapSample::labeled("child")
///     .with("age", 4)
///     .with("drinks", false);
/// assert_eq!(sample.value("age"), Some(Val::Int(4)));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct MapSample {
    class: Class,
    values: HashMap<String, Val>,
}

impl MapSample {
    /// Construct a sample carrying the given label and no attributes yet.
    pub fn labeled<C>(class: C) -> Self
        where C: Into<Class>,
    {
        Self {
            class: class.into(),
            values: HashMap::new(),
        }
    }

    /// Attach an attribute value.
    pub fn with<A, V>(mut self, attr: A, value: V) -> Self
        where A: Into<String>,
              V: Into<Val>,
    {
        self.values.insert(attr.into(), value.into());
        self
    }
}

impl Attributes for MapSample {
    fn value(&self, attr: &str) -> Option<Val> {
        self.values.value(attr)
    }
}

impl Sample for MapSample {
    fn class(&self) -> Class {
        self.class.clone()
    }
}
