//! Unbalanced binary search tree.

use crate::binary::render_binary;
use crate::error::TreeError;
use crate::model::arena::NodeArena;
use crate::model::hierarchy::delegate_hierarchy;
use crate::model::node::BinaryNode;
use crate::model::{BinaryHierarchy, Hierarchy, NodeIndex, Side};
use crate::traverse::InOrderIter;
use std::cmp::Ordering;
use std::fmt;
use std::hash::Hash;

// =$========================================================================$=
// BINARY SEARCH TREE
// =$========================================================================$=
/// A binary tree that places values by comparison: smaller values go left,
/// greater values go right.
///
/// The tree is never rebalanced. Its shape follows from the insertion order
/// alone, so inserting sorted values degenerates it into a list whose depth
/// equals its length.
///
/// `Ord` decides placement while `Eq`/`Hash` drive the identity index; the
/// two must agree (`a.cmp(b) == Equal` exactly when `a == b`).
///
/// # Example
/// ```
/// use valtree::{Binary, BinarySearchTree, Tree};
///
/// let mut tree = BinarySearchTree::new(0);
/// for value in [1, 10, 100, -1, -10, -100] {
///     tree.add(value)?;
/// }
///
/// assert_eq!(tree.find(&-50), &-100); // last node on the search path
/// assert_eq!(tree.find(&5), &10);
/// assert_eq!(tree.in_order().copied().collect::<Vec<_>>(), [-100, -10, -1, 0, 1, 10, 100]);
/// # Ok::<(), valtree::TreeError>(())
/// ```
#[derive(Debug, Clone)]
pub struct BinarySearchTree<T> {
    arena: NodeArena<BinaryNode<T>>,
}

delegate_hierarchy!(BinarySearchTree, binary);

impl<T: Ord + Hash + Clone> BinarySearchTree<T> {
    /// Creates a new tree holding only `root`.
    pub fn new(root: T) -> Self {
        Self::with_capacity(root, 1)
    }

    /// Creates a new tree holding only `root`, with room for `capacity` values.
    ///
    /// # Arguments
    /// * `root` - Value at the root
    /// * `capacity` - Expected number of values, root included
    pub fn with_capacity(root: T, capacity: usize) -> Self {
        BinarySearchTree {
            arena: NodeArena::with_capacity(root, capacity),
        }
    }

    /// Adds `value` as a new leaf at the end of its search path.
    ///
    /// Starting at the root, the search descends left while `value` is
    /// smaller and right while it is greater, and attaches `value` in the
    /// first empty slot it meets.
    ///
    /// # Errors
    /// [TreeError::DuplicateValue] if a node on the search path compares equal.
    pub fn add(&mut self, value: T) -> Result<(), TreeError> {
        let (parent, ordering) = self.descend(&value);
        let side = match ordering {
            Ordering::Less => Side::Left,
            Ordering::Greater => Side::Right,
            Ordering::Equal => return Err(TreeError::DuplicateValue),
        };
        self.arena.attach(parent, side, value)?;
        Ok(())
    }

    /// Returns the value where the search for `value` ends.
    ///
    /// This is `value` itself if present; otherwise it is the last node
    /// visited before the slot where `value` would be inserted. That node is
    /// the closest value *along the search path*, which need not be the
    /// numerically closest value in the tree.
    pub fn find(&self, value: &T) -> &T {
        let (index, _) = self.descend(value);
        self.arena.value_at(index)
    }

    /// Checks that an in-order walk yields strictly ascending values.
    pub fn is_ordered(&self) -> bool {
        let mut walk = InOrderIter::new(self);
        let Some(mut previous) = walk.next() else {
            return true;
        };
        for value in walk {
            if previous >= value {
                return false;
            }
            previous = value;
        }
        true
    }

    /// Validates the tree structure, its identity index and the search order.
    pub fn is_valid(&self) -> bool {
        self.arena.is_valid() && self.is_ordered()
    }

    /// Follows the search path for `value` from the root.
    ///
    /// # Returns
    /// The index of the node where the search stops, together with how
    /// `value` compares to that node's value (`Equal` on an exact match).
    fn descend(&self, value: &T) -> (NodeIndex, Ordering) {
        let mut current = self.arena.root_index();
        loop {
            let ordering = value.cmp(self.arena.value_at(current));
            let next = match ordering {
                Ordering::Less => self.arena.child_index(current, Side::Left),
                Ordering::Greater => self.arena.child_index(current, Side::Right),
                Ordering::Equal => None,
            };
            match next {
                Some(child) => current = child,
                None => return (current, ordering),
            }
        }
    }
}

impl<T: Eq + Hash + fmt::Display> fmt::Display for BinarySearchTree<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        render_binary(self, f)
    }
}
