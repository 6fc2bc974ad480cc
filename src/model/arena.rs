//! Node arena: the node vector together with its identity index.

use crate::error::TreeError;
use crate::model::node::{BinaryNode, Node};
use crate::model::{BinaryHierarchy, ChildIndices, Hierarchy, NodeIndex, ROOT_INDEX, Side, ValueIndex};
use log::{debug, trace};
use std::hash::Hash;

// =$========================================================================$=
// NODE ARENA
// =$========================================================================$=
/// Nodes of one tree, stored contiguously and addressed by [NodeIndex].
///
/// # Structure
/// - The root is created with the arena and sits at [ROOT_INDEX].
/// - Each node's position in `nodes` equals its own index.
/// - `index` maps every stored value to the node holding it; it has exactly
///   one entry per node.
/// - Nodes are only ever added as new leaves through [NodeArena::attach],
///   so the structure stays acyclic and every node is reachable from the root.
#[derive(Debug, Clone)]
pub(crate) struct NodeArena<N: Node> {
    /// Nodes of this tree (arena pattern)
    nodes: Vec<N>,

    /// Identity index from value to node
    index: ValueIndex<N::Value>,
}

impl<N: Node> NodeArena<N>
where
    N::Value: Eq + Hash + Clone,
{
    /// Creates an arena holding only the root, with room for `capacity` nodes.
    pub(crate) fn with_capacity(root: N::Value, capacity: usize) -> Self {
        let capacity = capacity.max(1);
        let mut index = ValueIndex::with_capacity(capacity);
        index.register(root.clone(), ROOT_INDEX);

        let mut nodes = Vec::with_capacity(capacity);
        nodes.push(N::new(ROOT_INDEX, None, root));

        NodeArena { nodes, index }
    }

    /// Adds `value` as a new leaf under `parent` in the given slot.
    ///
    /// This is the only way nodes enter the arena: the node is linked under
    /// its parent and its value indexed in the same step, after all checks
    /// have passed.
    ///
    /// # Arguments
    /// * `parent` - Index of the node to attach to
    /// * `slot` - Where under `parent` the new node goes
    /// * `value` - Value of the new node
    ///
    /// # Errors
    /// * [TreeError::DuplicateValue] if `value` is already stored
    /// * [TreeError::SlotOccupied] if `slot` already holds a child
    ///
    /// # Panics
    /// Panics if `parent` is out of bounds.
    pub(crate) fn attach(
        &mut self,
        parent: NodeIndex,
        slot: N::Slot,
        value: N::Value,
    ) -> Result<NodeIndex, TreeError> {
        if self.index.contains(&value) {
            return Err(TreeError::DuplicateValue);
        }
        self.nodes[parent].check_slot(slot)?;

        let index = self.nodes.len();
        self.index.register(value.clone(), index);
        self.nodes.push(N::new(index, Some(parent), value));
        self.nodes[parent].link(slot, index);
        trace!("attached node {index} under node {parent} in slot {slot:?}");

        Ok(index)
    }

    /// Returns the index of the node holding `value`.
    ///
    /// # Errors
    /// [TreeError::NotFound] if no node holds `value`.
    pub(crate) fn require(&self, value: &N::Value) -> Result<NodeIndex, TreeError> {
        self.index.get(value).ok_or(TreeError::NotFound)
    }

    /// Returns whether some node holds `value`.
    pub(crate) fn contains(&self, value: &N::Value) -> bool {
        self.index.contains(value)
    }
}

impl<N: Node> NodeArena<N> {
    /// Returns a reference to the node at the given index.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    pub(crate) fn node(&self, index: NodeIndex) -> &N {
        &self.nodes[index]
    }

    /// Returns a mutable reference to the node at the given index.
    ///
    /// Only for re-linking existing nodes; new nodes go through [NodeArena::attach].
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    pub(crate) fn node_mut(&mut self, index: NodeIndex) -> &mut N {
        &mut self.nodes[index]
    }
}

impl<N: Node> NodeArena<N>
where
    N::Value: Eq + Hash,
{
    /// Validates the arena structure, all links and the identity index.
    ///
    /// Checks:
    /// - Every node index matches its arena position
    /// - The root has no parent, all other nodes have a parent in bounds
    /// - Child links point back to their parent and parents list their children
    /// - The identity index has one entry per node, pointing at that node
    /// - A walk from the root reaches every node exactly once
    ///
    /// # Returns
    /// `true` if the arena is consistent, `false` otherwise
    pub(crate) fn is_valid(&self) -> bool {
        let num_nodes = self.nodes.len();

        if self.index.len() != num_nodes {
            return violation("identity index size differs from node count", ROOT_INDEX);
        }

        for (position, node) in self.nodes.iter().enumerate() {
            if node.index() != position {
                return violation("node index differs from arena position", position);
            }

            if self.index.get(node.value()) != Some(position) {
                return violation("identity index points elsewhere", position);
            }

            for child in node.child_indices() {
                if child >= num_nodes || self.nodes[child].parent() != Some(position) {
                    return violation("child does not point back to its parent", position);
                }
            }

            match node.parent() {
                None if position != ROOT_INDEX => {
                    return violation("non-root node without parent", position);
                }
                Some(_) if position == ROOT_INDEX => {
                    return violation("root node with parent", position);
                }
                Some(parent) => {
                    let listed = parent < num_nodes
                        && self.nodes[parent].child_indices().any(|c| c == position);
                    if !listed {
                        return violation("parent does not list node as child", position);
                    }
                }
                None => {}
            }
        }

        // Reachability: each node exactly once from the root
        let mut seen = vec![false; num_nodes];
        let mut stack = vec![ROOT_INDEX];
        let mut reached = 0;
        while let Some(index) = stack.pop() {
            if std::mem::replace(&mut seen[index], true) {
                return violation("node reached twice", index);
            }
            reached += 1;
            stack.extend(self.nodes[index].child_indices());
        }
        if reached != num_nodes {
            return violation("nodes unreachable from root", ROOT_INDEX);
        }

        true
    }
}

/// Logs a failed consistency check and returns `false`.
fn violation(what: &str, index: NodeIndex) -> bool {
    debug!("inconsistent tree at node {index}: {what}");
    false
}

// =#========================================================================#=
// HIERARCHY IMPLS
// =#========================================================================#=
impl<N: Node> Hierarchy for NodeArena<N>
where
    N::Value: Eq + Hash,
{
    type Value = N::Value;

    fn root_index(&self) -> NodeIndex {
        ROOT_INDEX
    }

    fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    fn value_at(&self, index: NodeIndex) -> &N::Value {
        self.nodes[index].value()
    }

    fn parent_index(&self, index: NodeIndex) -> Option<NodeIndex> {
        self.nodes[index].parent()
    }

    fn child_indices(&self, index: NodeIndex) -> ChildIndices<'_> {
        self.nodes[index].child_indices()
    }

    fn index_of(&self, value: &N::Value) -> Option<NodeIndex> {
        self.index.get(value)
    }
}

impl<T: Eq + Hash> BinaryHierarchy for NodeArena<BinaryNode<T>> {
    fn child_index(&self, index: NodeIndex, side: Side) -> Option<NodeIndex> {
        self.nodes[index].child(side)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::node::GeneralNode;

    fn small_arena() -> NodeArena<GeneralNode<&'static str>> {
        let mut arena = NodeArena::with_capacity("root", 4);
        let a = arena.attach(ROOT_INDEX, (), "a").unwrap();
        arena.attach(a, (), "a1").unwrap();
        arena.attach(ROOT_INDEX, (), "b").unwrap();
        arena
    }

    #[test]
    fn test_attach_links_and_indexes() {
        let arena = small_arena();
        assert_eq!(arena.num_nodes(), 4);
        assert_eq!(arena.index_of(&"a1"), Some(2));
        assert_eq!(arena.parent_index(2), Some(1));
        assert_eq!(arena.child_indices(ROOT_INDEX).collect::<Vec<_>>(), vec![1, 3]);
        assert!(arena.is_valid());
    }

    #[test]
    fn test_attach_duplicate_leaves_arena_untouched() {
        let mut arena = small_arena();
        assert_eq!(arena.attach(ROOT_INDEX, (), "a1"), Err(TreeError::DuplicateValue));
        assert_eq!(arena.num_nodes(), 4);
        assert_eq!(arena.child_indices(ROOT_INDEX).count(), 2);
        assert!(arena.is_valid());
    }

    #[test]
    fn test_attach_occupied_slot_leaves_arena_untouched() {
        let mut arena: NodeArena<BinaryNode<i32>> = NodeArena::with_capacity(0, 2);
        arena.attach(ROOT_INDEX, Side::Left, 1).unwrap();
        assert_eq!(
            arena.attach(ROOT_INDEX, Side::Left, 2),
            Err(TreeError::SlotOccupied(Side::Left))
        );
        assert!(!arena.contains(&2));
        assert_eq!(arena.num_nodes(), 2);
        assert!(arena.is_valid());
    }

    #[test]
    fn test_is_valid_detects_dangling_child() {
        let mut arena = small_arena();
        // "b" claims "a1" as child while "a1" still points at "a"
        arena.node_mut(3).link((), 2);
        assert!(!arena.is_valid());
    }

    #[test]
    fn test_is_valid_detects_lost_child() {
        let mut arena = small_arena();
        assert!(arena.node_mut(1).remove_child(2));
        assert!(!arena.is_valid());
    }

    #[test]
    fn test_require_missing_value() {
        let arena = small_arena();
        assert_eq!(arena.require(&"zz"), Err(TreeError::NotFound));
        assert_eq!(arena.require(&"b"), Ok(3));
    }
}
