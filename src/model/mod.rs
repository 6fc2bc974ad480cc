//! Data model shared by the tree variants.
//!
//! # Representation
//! All trees use the arena pattern: nodes live in a contiguous vector and
//! refer to each other by [NodeIndex]. A node owns its children only in the
//! sense that no other node lists them; the parent link is a plain index and
//! never keeps anything alive.
//!
//! | Piece | Role |
//! |-------|------|
//! | `node` | general node (ordered child list) and binary node (left/right slots) |
//! | [value_index] | [ValueIndex], identity index from value to [NodeIndex] |
//! | `arena` | node vector plus its identity index |
//! | [hierarchy] | [Hierarchy] / [BinaryHierarchy], the capability the traversals are written against |
//!
//! The arena only grows through a single attach step, which checks the value
//! is new, links the node under its parent and indexes the value together.

pub(crate) mod arena;
pub mod hierarchy;
pub(crate) mod node;
pub mod value_index;

pub use hierarchy::BinaryHierarchy;
pub use hierarchy::ChildIndices;
pub use hierarchy::Hierarchy;
pub use node::Side;
pub use value_index::ValueIndex;

/// Index of a node in a tree (arena).
pub type NodeIndex = usize;

/// The root is always the first node created, so it sits at the front of the arena.
pub const ROOT_INDEX: NodeIndex = 0;
