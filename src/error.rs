//! Error type shared by all tree variants.
//!
//! Every check behind a [TreeError] runs before the tree is touched, so a
//! failed operation leaves the tree exactly as it was.

use crate::model::Side;
use thiserror::Error;

// =#========================================================================#=
// TREE ERROR
// =#========================================================================#=
/// Errors reported by insertion, lookup and move operations.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeError {
    /// The value to insert is already stored somewhere in the tree.
    #[error("value is already present in the tree")]
    DuplicateValue,

    /// A value that had to be located (parent, child or move target) is absent.
    #[error("value is not present in the tree")]
    NotFound,

    /// The targeted child slot of a binary node already holds a subtree.
    #[error("{0} child slot is already occupied")]
    SlotOccupied(Side),

    /// Attempt to move a node beneath itself or one of its descendants.
    #[error("cannot move a node beneath itself or one of its descendants")]
    AncestorDescendantLoop,
}
