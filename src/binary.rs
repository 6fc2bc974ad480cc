//! Binary tree whose shape is chosen by the caller.

use crate::error::TreeError;
use crate::model::arena::NodeArena;
use crate::model::hierarchy::delegate_hierarchy;
use crate::model::node::BinaryNode;
use crate::model::{BinaryHierarchy, Hierarchy, NodeIndex, Side};
use crate::traverse;
use std::fmt;
use std::hash::Hash;

// =$========================================================================$=
// BINARY TREE
// =$========================================================================$=
/// A tree in which every node has a left and a right slot, each optionally
/// empty.
///
/// There is no ordering between left and right values; the caller decides
/// where each value goes. Slots are never overwritten: adding into an
/// occupied slot fails with [TreeError::SlotOccupied].
///
/// Read operations come from the [Tree](crate::Tree) and
/// [Binary](crate::Binary) traits.
///
/// # Example
/// ```
/// use valtree::{Binary, BinaryTree, Side, Tree, TreeError};
///
/// let mut tree = BinaryTree::new("ROOT");
/// tree.add_left("A")?;
/// tree.add_right("B")?;
/// tree.add_right_of(&"A", "2")?;
///
/// assert_eq!(tree.left(&"ROOT")?, Some(&"A"));
/// assert_eq!(tree.left(&"A")?, None);
/// assert_eq!(tree.add_left("C"), Err(TreeError::SlotOccupied(Side::Left)));
/// assert_eq!(tree.in_order().copied().collect::<Vec<_>>(), ["A", "2", "ROOT", "B"]);
/// # Ok::<(), TreeError>(())
/// ```
#[derive(Debug, Clone)]
pub struct BinaryTree<T> {
    arena: NodeArena<BinaryNode<T>>,
}

delegate_hierarchy!(BinaryTree, binary);

impl<T: Eq + Hash + Clone> BinaryTree<T> {
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
        BinaryTree {
            arena: NodeArena::with_capacity(root, capacity),
        }
    }

    /// Adds `value` in the left slot of the root.
    ///
    /// # Errors
    /// * [TreeError::DuplicateValue] if `value` is already in the tree
    /// * [TreeError::SlotOccupied] if the root already has a left child
    pub fn add_left(&mut self, value: T) -> Result<(), TreeError> {
        let root = self.arena.root_index();
        self.attach(root, Side::Left, value)
    }

    /// Adds `value` in the right slot of the root.
    ///
    /// # Errors
    /// * [TreeError::DuplicateValue] if `value` is already in the tree
    /// * [TreeError::SlotOccupied] if the root already has a right child
    pub fn add_right(&mut self, value: T) -> Result<(), TreeError> {
        let root = self.arena.root_index();
        self.attach(root, Side::Right, value)
    }

    /// Adds `value` in the left slot of the node holding `parent`.
    ///
    /// # Errors
    /// * [TreeError::NotFound] if `parent` is not in the tree
    /// * [TreeError::DuplicateValue] if `value` is already in the tree
    /// * [TreeError::SlotOccupied] if `parent` already has a left child
    pub fn add_left_of(&mut self, parent: &T, value: T) -> Result<(), TreeError> {
        self.add_child_of(parent, Side::Left, value)
    }

    /// Adds `value` in the right slot of the node holding `parent`.
    ///
    /// # Errors
    /// * [TreeError::NotFound] if `parent` is not in the tree
    /// * [TreeError::DuplicateValue] if `value` is already in the tree
    /// * [TreeError::SlotOccupied] if `parent` already has a right child
    pub fn add_right_of(&mut self, parent: &T, value: T) -> Result<(), TreeError> {
        self.add_child_of(parent, Side::Right, value)
    }

    /// Adds `value` in the given slot of the node holding `parent`.
    ///
    /// # Errors
    /// Same as [BinaryTree::add_left_of] and [BinaryTree::add_right_of].
    pub fn add_child_of(&mut self, parent: &T, side: Side, value: T) -> Result<(), TreeError> {
        let parent = self.arena.require(parent)?;
        self.attach(parent, side, value)
    }

    /// Validates the tree structure and its identity index.
    pub fn is_valid(&self) -> bool {
        self.arena.is_valid()
    }

    fn attach(&mut self, parent: NodeIndex, side: Side, value: T) -> Result<(), TreeError> {
        self.arena.attach(parent, side, value)?;
        Ok(())
    }
}

impl<T: Eq + Hash + fmt::Display> fmt::Display for BinaryTree<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        render_binary(self, f)
    }
}

/// Renders a binary tree, tagging each non-root node with its slot.
pub(crate) fn render_binary<H>(tree: &H, f: &mut fmt::Formatter) -> fmt::Result
where
    H: BinaryHierarchy,
    H::Value: fmt::Display,
{
    traverse::render(tree, f, |index| match tree.parent_index(index) {
        Some(parent) if tree.child_index(parent, Side::Left) == Some(index) => "L: ",
        Some(_) => "R: ",
        None => "",
    })
}
