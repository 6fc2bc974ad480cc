//! General (N-ary) tree with ordered children.

use crate::error::TreeError;
use crate::model::arena::NodeArena;
use crate::model::hierarchy::delegate_hierarchy;
use crate::model::node::{GeneralNode, Node};
use crate::model::Hierarchy;
use crate::traverse;
use log::debug;
use std::fmt;
use std::hash::Hash;

// =$========================================================================$=
// GENERAL TREE
// =$========================================================================$=
/// A tree in which every node has any number of children, kept in the order
/// they were added.
///
/// Nodes are addressed by their values: each value occurs at most once and
/// is looked up through an identity index, so `contains`, `parent` and
/// `children` are O(1) amortized. Values therefore need consistent `Eq` and
/// `Hash`, and are cloned once into the index.
///
/// Read operations and traversals come from the [Tree](crate::Tree) trait.
///
/// # Example
/// ```
/// use valtree::{GeneralTree, Tree};
///
/// let mut tree = GeneralTree::new("ROOT");
/// tree.add("A")?;
/// tree.add("B")?;
/// tree.add_to(&"A", "1")?;
///
/// assert_eq!(tree.children(&"ROOT")?, vec![&"A", &"B"]);
/// assert_eq!(tree.parent(&"1")?, Some(&"A"));
/// assert_eq!(tree.pre_order().copied().collect::<Vec<_>>(), ["ROOT", "A", "1", "B"]);
/// assert_eq!(tree.depth(), 3);
/// # Ok::<(), valtree::TreeError>(())
/// ```
#[derive(Debug, Clone)]
pub struct GeneralTree<T> {
    arena: NodeArena<GeneralNode<T>>,
}

delegate_hierarchy!(GeneralTree);

impl<T: Eq + Hash + Clone> GeneralTree<T> {
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
        GeneralTree {
            arena: NodeArena::with_capacity(root, capacity),
        }
    }

    /// Adds `value` as the last child of the root.
    ///
    /// # Errors
    /// [TreeError::DuplicateValue] if `value` is already in the tree.
    pub fn add(&mut self, value: T) -> Result<(), TreeError> {
        let root = self.arena.root_index();
        self.arena.attach(root, (), value)?;
        Ok(())
    }

    /// Adds `value` as the last child of the node holding `parent`.
    ///
    /// # Errors
    /// * [TreeError::NotFound] if `parent` is not in the tree
    /// * [TreeError::DuplicateValue] if `value` is already in the tree
    pub fn add_to(&mut self, parent: &T, value: T) -> Result<(), TreeError> {
        let parent = self.arena.require(parent)?;
        self.arena.attach(parent, (), value)?;
        Ok(())
    }

    /// Returns the children of `parent` in the order they were added.
    ///
    /// # Errors
    /// [TreeError::NotFound] if `parent` is not in the tree.
    pub fn children(&self, parent: &T) -> Result<Vec<&T>, TreeError> {
        let parent = self.arena.require(parent)?;
        Ok(self
            .arena
            .child_indices(parent)
            .map(|child| self.arena.value_at(child))
            .collect())
    }

    /// Moves the subtree rooted at `child` beneath `new_parent`, as its last child.
    ///
    /// All descendants of `child` move along and keep their shape; the
    /// subtree is no longer reachable from its former parent. Moving a child
    /// to its current parent puts it at the end of the child list.
    ///
    /// # Errors
    /// * [TreeError::NotFound] if `new_parent` or `child` is not in the tree
    /// * [TreeError::AncestorDescendantLoop] if `new_parent` is `child` itself
    ///   or one of its descendants (which includes every move of the root)
    pub fn move_subtree(&mut self, new_parent: &T, child: &T) -> Result<(), TreeError> {
        let new_parent = self.arena.require(new_parent)?;
        let child = self.arena.require(child)?;

        // Walking up from the new parent must not meet the moved node
        let mut cursor = Some(new_parent);
        while let Some(index) = cursor {
            if index == child {
                return Err(TreeError::AncestorDescendantLoop);
            }
            cursor = self.arena.parent_index(index);
        }

        // Non-root here: the root is an ancestor of every node
        if let Some(old_parent) = self.arena.node(child).parent() {
            self.arena.node_mut(old_parent).remove_child(child);
        }
        self.arena.node_mut(new_parent).link((), child);
        self.arena.node_mut(child).set_parent(Some(new_parent));
        debug!("moved subtree at node {child} beneath node {new_parent}");

        Ok(())
    }

    /// Validates the tree structure and its identity index.
    ///
    /// Checks that parent and child links agree, that the identity index
    /// maps each value to its node, and that every node is reachable from
    /// the root exactly once.
    pub fn is_valid(&self) -> bool {
        self.arena.is_valid()
    }
}

impl<T: Eq + Hash + fmt::Display> fmt::Display for GeneralTree<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        traverse::render(self, f, |_| "")
    }
}
