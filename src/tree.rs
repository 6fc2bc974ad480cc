//! Read operations shared by all tree variants.
//!
//! [Tree] and [Binary] are implemented once, for every type providing the
//! [Hierarchy] (resp. [BinaryHierarchy]) capability. Bring them into scope to
//! query any of [GeneralTree](crate::GeneralTree),
//! [BinaryTree](crate::BinaryTree) or [BinarySearchTree](crate::BinarySearchTree).

use crate::error::TreeError;
use crate::model::{BinaryHierarchy, Hierarchy, Side};
use crate::traverse::{
    self, AncestorsIter, BreadthFirstIter, InOrderIter, PostOrderIter, PreOrderIter,
};

// =#========================================================================#=
// TREE
// =#========================================================================#=
/// Value-based queries and traversals available on every tree.
// A tree always holds its root, so there is no `is_empty`.
#[allow(clippy::len_without_is_empty)]
pub trait Tree: Hierarchy {
    /// Returns the value at the root.
    fn root(&self) -> &Self::Value {
        self.value_at(self.root_index())
    }

    /// Returns the number of values in the tree (at least 1, the root).
    fn len(&self) -> usize {
        self.num_nodes()
    }

    /// Checks if the tree contains `value` somewhere.
    fn contains(&self, value: &Self::Value) -> bool {
        self.index_of(value).is_some()
    }

    /// Returns the parent value of `child`, or `None` if `child` is the root.
    ///
    /// # Errors
    /// [TreeError::NotFound] if `child` is not in the tree.
    fn parent(&self, child: &Self::Value) -> Result<Option<&Self::Value>, TreeError> {
        let index = self.index_of(child).ok_or(TreeError::NotFound)?;
        Ok(self.parent_index(index).map(|parent| self.value_at(parent)))
    }

    /// Returns the ancestors of `value`, from its parent up to the root.
    ///
    /// # Errors
    /// [TreeError::NotFound] if `value` is not in the tree.
    fn ancestors(&self, value: &Self::Value) -> Result<AncestorsIter<'_, Self>, TreeError> {
        let index = self.index_of(value).ok_or(TreeError::NotFound)?;
        Ok(AncestorsIter::new(self, index))
    }

    /// Returns the number of nodes on the longest root-to-leaf path.
    ///
    /// See [traverse::depth].
    fn depth(&self) -> usize {
        traverse::depth(self)
    }

    /// Returns the number of leaves.
    ///
    /// See [traverse::width].
    fn width(&self) -> usize {
        traverse::width(self)
    }

    /// Returns the values in pre-order (parents before children).
    fn pre_order(&self) -> PreOrderIter<'_, Self> {
        PreOrderIter::new(self)
    }

    /// Returns the values in post-order (children before parents).
    fn post_order(&self) -> PostOrderIter<'_, Self> {
        PostOrderIter::new(self)
    }

    /// Returns the values level by level, starting at the root.
    fn breadth_first(&self) -> BreadthFirstIter<'_, Self> {
        BreadthFirstIter::new(self)
    }
}

impl<H: Hierarchy + ?Sized> Tree for H {}

// =#========================================================================#=
// BINARY
// =#========================================================================#=
/// Queries and traversals specific to trees with left/right child slots.
pub trait Binary: BinaryHierarchy {
    /// Returns the child value of `parent` in the given slot.
    ///
    /// # Errors
    /// [TreeError::NotFound] if `parent` is not in the tree.
    fn child(&self, parent: &Self::Value, side: Side) -> Result<Option<&Self::Value>, TreeError> {
        let index = self.index_of(parent).ok_or(TreeError::NotFound)?;
        Ok(self.child_index(index, side).map(|child| self.value_at(child)))
    }

    /// Returns the left child value of `parent`.
    ///
    /// # Errors
    /// [TreeError::NotFound] if `parent` is not in the tree.
    fn left(&self, parent: &Self::Value) -> Result<Option<&Self::Value>, TreeError> {
        self.child(parent, Side::Left)
    }

    /// Returns the right child value of `parent`.
    ///
    /// # Errors
    /// [TreeError::NotFound] if `parent` is not in the tree.
    fn right(&self, parent: &Self::Value) -> Result<Option<&Self::Value>, TreeError> {
        self.child(parent, Side::Right)
    }

    /// Returns the values in-order (left subtree, node, right subtree).
    fn in_order(&self) -> InOrderIter<'_, Self> {
        InOrderIter::new(self)
    }
}

impl<H: BinaryHierarchy + ?Sized> Binary for H {}
