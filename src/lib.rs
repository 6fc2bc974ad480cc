//! Valtree is a library of in-memory trees addressed by their values.
//!
//! Callers never handle nodes: values are added beneath other values, and
//! queries and traversals answer with values. Each value occurs at most once
//! per tree and is found through an identity index in O(1).
//! Core functionality provided:
//! - [GeneralTree]: any number of ordered children per node, plus moving a
//!   subtree beneath another node.
//! - [BinaryTree]: named left/right slots, shape chosen by the caller.
//! - [BinarySearchTree]: left/right placement by comparison, unbalanced, with
//!   a search-path [find](BinarySearchTree::find).
//! - Traversals, lazy and recomputed on every call:
//!   - Pre-order, post-order and breadth-first on every tree ([Tree])
//!   - In-order on binary trees ([Binary])
//! - Metrics: depth (nodes on the longest root-to-leaf path) and width
//!   (number of leaves).
//! - Consistency checks (`is_valid`) and box-drawing rendering via `Display`.
//!
//! All trees use the arena pattern, see [model] for the representation. The
//! traversals are written once against the [Hierarchy] capability, see
//! [traverse].
//!
//! Limitations:
//! - No removal of values, only the general tree's subtree move
//! - No balancing of the search tree
//! - No internal synchronization; wrap a tree in a lock to share it mutably
//!
//! # Errors
//! Failing operations return a [TreeError] and leave the tree unchanged.
//!
//! # Logging
//! Insertions are logged at `trace` and moves at `debug` level through the
//! [log] facade, naming node indices only. No logger is installed here.
//!
//! # Example
//! ```
//! use valtree::{GeneralTree, Tree};
//!
//! let mut tree = GeneralTree::new("ROOT");
//! tree.add("A")?;
//! tree.add("B")?;
//! tree.add_to(&"A", "1")?;
//! tree.add_to(&"B", "2")?;
//!
//! let levels: Vec<_> = tree.breadth_first().copied().collect();
//! assert_eq!(levels, ["ROOT", "A", "B", "1", "2"]);
//!
//! tree.move_subtree(&"A", &"B")?;
//! assert_eq!(tree.parent(&"B")?, Some(&"A"));
//! assert_eq!(tree.ancestors(&"2")?.copied().collect::<Vec<_>>(), ["B", "A", "ROOT"]);
//! # Ok::<(), valtree::TreeError>(())
//! ```

pub mod binary;
pub mod error;
pub mod general;
pub mod model;
pub mod search;
pub mod traverse;
pub mod tree;

pub use crate::binary::BinaryTree;
pub use crate::error::TreeError;
pub use crate::general::GeneralTree;
pub use crate::model::{BinaryHierarchy, Hierarchy, NodeIndex, Side};
pub use crate::search::BinarySearchTree;
pub use crate::tree::{Binary, Tree};
