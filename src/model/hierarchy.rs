//! Capability traits the traversal and metric algorithms are written against.
//!
//! A tree variant only has to say where its root is, how to go from a node to
//! its parent and children, and how to find the node for a value. Every
//! traversal in [crate::traverse] and the read operations of [crate::Tree] and
//! [crate::Binary] are built on top of that.

use crate::model::{NodeIndex, Side};
use std::iter::FusedIterator;
use std::slice;

// =#========================================================================#=
// HIERARCHY
// =#========================================================================#=
/// Read access to the node structure of a tree.
///
/// Node indices passed in must come from the same tree; the accessors panic
/// on an index that is out of bounds.
pub trait Hierarchy {
    /// Type of the values stored in the nodes.
    type Value;

    /// Returns the index of the root node.
    fn root_index(&self) -> NodeIndex;

    /// Returns the number of nodes in the tree.
    fn num_nodes(&self) -> usize;

    /// Returns the value stored at `index`.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    fn value_at(&self, index: NodeIndex) -> &Self::Value;

    /// Returns the parent of the node at `index`, `None` for the root.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    fn parent_index(&self, index: NodeIndex) -> Option<NodeIndex>;

    /// Returns the children of the node at `index`, in traversal order.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    fn child_indices(&self, index: NodeIndex) -> ChildIndices<'_>;

    /// Returns the index of the node holding `value`, if any.
    fn index_of(&self, value: &Self::Value) -> Option<NodeIndex>;
}

/// Read access to the two named child slots of binary trees.
pub trait BinaryHierarchy: Hierarchy {
    /// Returns the child of the node at `index` in the given slot.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    fn child_index(&self, index: NodeIndex, side: Side) -> Option<NodeIndex>;
}

// =#========================================================================#=
// CHILD INDICES
// =#========================================================================#=
/// Iterator over the child indices of one node.
///
/// Ordered child lists yield in insertion order, binary nodes yield left
/// before right and skip empty slots. Iterating backwards gives the reverse,
/// which the stack-based traversals rely on.
#[derive(Debug, Clone)]
pub struct ChildIndices<'a> {
    inner: Inner<'a>,
}

#[derive(Debug, Clone)]
enum Inner<'a> {
    List(slice::Iter<'a, NodeIndex>),
    Pair(Option<NodeIndex>, Option<NodeIndex>),
}

impl<'a> ChildIndices<'a> {
    pub(crate) fn from_list(children: &'a [NodeIndex]) -> Self {
        ChildIndices {
            inner: Inner::List(children.iter()),
        }
    }

    pub(crate) fn from_pair(left: Option<NodeIndex>, right: Option<NodeIndex>) -> Self {
        ChildIndices {
            inner: Inner::Pair(left, right),
        }
    }
}

impl Iterator for ChildIndices<'_> {
    type Item = NodeIndex;

    fn next(&mut self) -> Option<NodeIndex> {
        match &mut self.inner {
            Inner::List(iter) => iter.next().copied(),
            Inner::Pair(left, right) => left.take().or_else(|| right.take()),
        }
    }
}

impl DoubleEndedIterator for ChildIndices<'_> {
    fn next_back(&mut self) -> Option<NodeIndex> {
        match &mut self.inner {
            Inner::List(iter) => iter.next_back().copied(),
            Inner::Pair(left, right) => right.take().or_else(|| left.take()),
        }
    }
}

impl FusedIterator for ChildIndices<'_> {}

// =#========================================================================#=
// DELEGATION
// =#========================================================================#=
/// Implements [Hierarchy] (and with `binary` also [BinaryHierarchy]) for a
/// tree type by forwarding to its `arena` field.
macro_rules! delegate_hierarchy {
    ($tree:ident) => {
        impl<T: Eq + ::std::hash::Hash> $crate::model::Hierarchy for $tree<T> {
            type Value = T;

            fn root_index(&self) -> $crate::model::NodeIndex {
                $crate::model::Hierarchy::root_index(&self.arena)
            }

            fn num_nodes(&self) -> usize {
                $crate::model::Hierarchy::num_nodes(&self.arena)
            }

            fn value_at(&self, index: $crate::model::NodeIndex) -> &T {
                $crate::model::Hierarchy::value_at(&self.arena, index)
            }

            fn parent_index(
                &self,
                index: $crate::model::NodeIndex,
            ) -> Option<$crate::model::NodeIndex> {
                $crate::model::Hierarchy::parent_index(&self.arena, index)
            }

            fn child_indices(
                &self,
                index: $crate::model::NodeIndex,
            ) -> $crate::model::ChildIndices<'_> {
                $crate::model::Hierarchy::child_indices(&self.arena, index)
            }

            fn index_of(&self, value: &T) -> Option<$crate::model::NodeIndex> {
                $crate::model::Hierarchy::index_of(&self.arena, value)
            }
        }
    };
    ($tree:ident, binary) => {
        $crate::model::hierarchy::delegate_hierarchy!($tree);

        impl<T: Eq + ::std::hash::Hash> $crate::model::BinaryHierarchy for $tree<T> {
            fn child_index(
                &self,
                index: $crate::model::NodeIndex,
                side: $crate::model::Side,
            ) -> Option<$crate::model::NodeIndex> {
                $crate::model::BinaryHierarchy::child_index(&self.arena, index, side)
            }
        }
    };
}
pub(crate) use delegate_hierarchy;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_children_both_directions() {
        let children = [4, 2, 9];
        let forward: Vec<_> = ChildIndices::from_list(&children).collect();
        let backward: Vec<_> = ChildIndices::from_list(&children).rev().collect();
        assert_eq!(forward, vec![4, 2, 9]);
        assert_eq!(backward, vec![9, 2, 4]);
    }

    #[test]
    fn test_pair_children_skip_empty_slot() {
        assert_eq!(ChildIndices::from_pair(Some(1), Some(2)).collect::<Vec<_>>(), vec![1, 2]);
        assert_eq!(ChildIndices::from_pair(Some(1), Some(2)).rev().collect::<Vec<_>>(), vec![2, 1]);
        assert_eq!(ChildIndices::from_pair(None, Some(2)).collect::<Vec<_>>(), vec![2]);
        assert_eq!(ChildIndices::from_pair(Some(1), None).rev().collect::<Vec<_>>(), vec![1]);
        assert_eq!(ChildIndices::from_pair(None, None).next(), None);
    }
}
