//! Node types stored in the tree arenas.

use crate::error::TreeError;
use crate::model::{ChildIndices, NodeIndex};
use std::fmt;

// =#========================================================================#=
// SIDE
// =#========================================================================#=
/// One of the two named child slots of a binary node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// The left slot; in a search tree it holds smaller values.
    Left,
    /// The right slot; in a search tree it holds greater values.
    Right,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Side::Left => f.write_str("left"),
            Side::Right => f.write_str("right"),
        }
    }
}

// =#========================================================================#=
// NODE (crate internal)
// =#========================================================================#=
/// Linkage every arena node provides.
///
/// `Slot` names the place a new child goes: nothing for an ordered child
/// list, a [Side] for binary nodes.
pub(crate) trait Node {
    type Value;
    type Slot: Copy + fmt::Debug;

    /// Creates an unlinked node at arena position `index`.
    fn new(index: NodeIndex, parent: Option<NodeIndex>, value: Self::Value) -> Self;

    fn index(&self) -> NodeIndex;

    fn value(&self) -> &Self::Value;

    fn parent(&self) -> Option<NodeIndex>;

    fn child_indices(&self) -> ChildIndices<'_>;

    /// Checks that a child could be linked into `slot` without replacing one.
    fn check_slot(&self, slot: Self::Slot) -> Result<(), TreeError>;

    /// Links `child` into `slot`. Callers run [Node::check_slot] first.
    fn link(&mut self, slot: Self::Slot, child: NodeIndex);
}

// =#========================================================================#=
// GENERAL NODE
// =#========================================================================#=
/// Node with an unbounded list of children in insertion order.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct GeneralNode<T> {
    index: NodeIndex,
    value: T,
    parent: Option<NodeIndex>,
    children: Vec<NodeIndex>,
}

impl<T> GeneralNode<T> {
    /// Sets the parent after the node has been re-linked elsewhere.
    pub(crate) fn set_parent(&mut self, parent: Option<NodeIndex>) {
        self.parent = parent;
    }

    /// Unlinks `child` from the children, keeping the order of the rest.
    ///
    /// Returns whether `child` was a child of this node.
    pub(crate) fn remove_child(&mut self, child: NodeIndex) -> bool {
        match self.children.iter().position(|&c| c == child) {
            Some(position) => {
                self.children.remove(position);
                true
            }
            None => false,
        }
    }
}

impl<T> Node for GeneralNode<T> {
    type Value = T;
    type Slot = ();

    fn new(index: NodeIndex, parent: Option<NodeIndex>, value: T) -> Self {
        GeneralNode {
            index,
            value,
            parent,
            children: Vec::new(),
        }
    }

    fn index(&self) -> NodeIndex {
        self.index
    }

    fn value(&self) -> &T {
        &self.value
    }

    fn parent(&self) -> Option<NodeIndex> {
        self.parent
    }

    fn child_indices(&self) -> ChildIndices<'_> {
        ChildIndices::from_list(&self.children)
    }

    fn check_slot(&self, _slot: ()) -> Result<(), TreeError> {
        Ok(())
    }

    fn link(&mut self, _slot: (), child: NodeIndex) {
        self.children.push(child);
    }
}

// =#========================================================================#=
// BINARY NODE
// =#========================================================================#=
/// Node with a left and a right slot, each optionally empty.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct BinaryNode<T> {
    index: NodeIndex,
    value: T,
    parent: Option<NodeIndex>,
    left: Option<NodeIndex>,
    right: Option<NodeIndex>,
}

impl<T> BinaryNode<T> {
    /// Returns the child in the given slot.
    pub(crate) fn child(&self, side: Side) -> Option<NodeIndex> {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }
}

impl<T> Node for BinaryNode<T> {
    type Value = T;
    type Slot = Side;

    fn new(index: NodeIndex, parent: Option<NodeIndex>, value: T) -> Self {
        BinaryNode {
            index,
            value,
            parent,
            left: None,
            right: None,
        }
    }

    fn index(&self) -> NodeIndex {
        self.index
    }

    fn value(&self) -> &T {
        &self.value
    }

    fn parent(&self) -> Option<NodeIndex> {
        self.parent
    }

    fn child_indices(&self) -> ChildIndices<'_> {
        ChildIndices::from_pair(self.left, self.right)
    }

    fn check_slot(&self, side: Side) -> Result<(), TreeError> {
        match self.child(side) {
            Some(_) => Err(TreeError::SlotOccupied(side)),
            None => Ok(()),
        }
    }

    fn link(&mut self, side: Side, child: NodeIndex) {
        match side {
            Side::Left => self.left = Some(child),
            Side::Right => self.right = Some(child),
        }
    }
}
