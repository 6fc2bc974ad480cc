//! Identity index from stored values to the nodes holding them.

use crate::model::NodeIndex;
use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::Hash;

// =#========================================================================#=
// VALUE INDEX
// =#========================================================================#=
/// Maps each value stored in a tree to the [NodeIndex] of its node.
///
/// Lookups by value are O(1) amortized instead of a walk over the tree.
/// Values must hash and compare consistently, and must not change their
/// hash or equality while stored.
///
/// # Example
/// ```
/// use valtree::model::ValueIndex;
///
/// let mut index = ValueIndex::with_capacity(2);
/// assert!(index.register("Kea", 0));
/// assert!(index.register("Kaka", 1));
/// assert!(!index.register("Kea", 5)); // already present, left untouched
///
/// assert_eq!(index.get("Kea"), Some(0));
/// assert_eq!(index.len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct ValueIndex<T> {
    map: HashMap<T, NodeIndex>,
}

impl<T: Eq + Hash> ValueIndex<T> {
    /// Creates an empty index with room for `capacity` values.
    pub fn with_capacity(capacity: usize) -> Self {
        ValueIndex {
            map: HashMap::with_capacity(capacity),
        }
    }

    /// Registers `value` as held by the node at `index`.
    ///
    /// # Returns
    /// `true` if the value was new; `false` if it was already registered,
    /// in which case the existing entry is kept.
    pub fn register(&mut self, value: T, index: NodeIndex) -> bool {
        if self.map.contains_key(&value) {
            return false;
        }
        self.map.insert(value, index);
        true
    }

    /// Returns the node index for `value`, or `None` if it is not registered.
    pub fn get<Q>(&self, value: &Q) -> Option<NodeIndex>
    where
        T: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.map.get(value).copied()
    }

    /// Checks if `value` is registered.
    pub fn contains<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.map.contains_key(value)
    }

    /// Returns the number of registered values.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Returns whether no value is registered.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}
