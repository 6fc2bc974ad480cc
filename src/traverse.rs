//! Traversal producers and tree metrics.
//!
//! All iterators here borrow the tree, compute the next node on demand from
//! an explicit stack or queue, and never recurse, so deep or degenerate
//! trees are walked without growing the call stack. Each call to a producer
//! starts a fresh walk; nothing is cached between walks.
//!
//! | Iterator | Order | Work list |
//! |----------|-------|-----------|
//! | [PreOrderIter] | node, then subtrees in child order | stack |
//! | [InOrderIter] | left subtree, node, right subtree (binary only) | stack |
//! | [PostOrderIter] | subtrees in child order, then node | stack |
//! | [BreadthFirstIter] | level by level, each level in discovery order | queue |
//! | [AncestorsIter] | parent, grandparent, ... up to the root | none |

use crate::model::{BinaryHierarchy, Hierarchy, NodeIndex, Side};
use std::collections::VecDeque;
use std::fmt;
use std::iter::FusedIterator;

// =$========================================================================$=
// PRE-ORDER
// =$========================================================================$=
/// Iterator for pre-order traversal (parents before children).
///
/// Each node is visited before any of its descendants; siblings are visited
/// in child order.
pub struct PreOrderIter<'a, H: ?Sized> {
    tree: &'a H,
    stack: Vec<NodeIndex>,
}

impl<'a, H: Hierarchy + ?Sized> PreOrderIter<'a, H> {
    /// Creates a pre-order walk over the whole tree.
    pub fn new(tree: &'a H) -> Self {
        Self::from_node(tree, tree.root_index())
    }

    /// Creates a pre-order walk over the subtree rooted at `start`.
    pub fn from_node(tree: &'a H, start: NodeIndex) -> Self {
        PreOrderIter {
            tree,
            stack: vec![start],
        }
    }

    /// Advances the walk and returns the index of the next node.
    pub fn next_index(&mut self) -> Option<NodeIndex> {
        let index = self.stack.pop()?;
        // Push children reversed, so the first child is processed first
        self.stack.extend(self.tree.child_indices(index).rev());
        Some(index)
    }
}

impl<'a, H: Hierarchy + ?Sized> Iterator for PreOrderIter<'a, H> {
    type Item = &'a H::Value;

    fn next(&mut self) -> Option<Self::Item> {
        let tree = self.tree;
        self.next_index().map(|index| tree.value_at(index))
    }
}

impl<H: Hierarchy + ?Sized> FusedIterator for PreOrderIter<'_, H> {}

// =$========================================================================$=
// POST-ORDER
// =$========================================================================$=
/// Iterator for post-order traversal (children before parents).
///
/// Each node is visited after all of its descendants have been visited.
pub struct PostOrderIter<'a, H: ?Sized> {
    tree: &'a H,
    stack: Vec<(NodeIndex, bool)>, // (index, children_visited)
}

impl<'a, H: Hierarchy + ?Sized> PostOrderIter<'a, H> {
    /// Creates a post-order walk over the whole tree.
    pub fn new(tree: &'a H) -> Self {
        PostOrderIter {
            tree,
            stack: vec![(tree.root_index(), false)],
        }
    }

    /// Advances the walk and returns the index of the next node.
    pub fn next_index(&mut self) -> Option<NodeIndex> {
        while let Some((index, children_visited)) = self.stack.pop() {
            let mut children = self.tree.child_indices(index).rev().peekable();

            if children_visited || children.peek().is_none() {
                // Either the children are done, or this is a leaf
                return Some(index);
            }

            self.stack.push((index, true));
            self.stack.extend(children.map(|child| (child, false)));
        }
        None
    }
}

impl<'a, H: Hierarchy + ?Sized> Iterator for PostOrderIter<'a, H> {
    type Item = &'a H::Value;

    fn next(&mut self) -> Option<Self::Item> {
        let tree = self.tree;
        self.next_index().map(|index| tree.value_at(index))
    }
}

impl<H: Hierarchy + ?Sized> FusedIterator for PostOrderIter<'_, H> {}

// =$========================================================================$=
// IN-ORDER
// =$========================================================================$=
/// Iterator for in-order traversal of binary trees (left, node, right).
///
/// On a binary search tree this yields the values in ascending order.
pub struct InOrderIter<'a, H: ?Sized> {
    tree: &'a H,
    stack: Vec<NodeIndex>,
    /// Next subtree whose left spine still has to be pushed
    pending: Option<NodeIndex>,
}

impl<'a, H: BinaryHierarchy + ?Sized> InOrderIter<'a, H> {
    /// Creates an in-order walk over the whole tree.
    pub fn new(tree: &'a H) -> Self {
        InOrderIter {
            tree,
            stack: Vec::new(),
            pending: Some(tree.root_index()),
        }
    }

    /// Advances the walk and returns the index of the next node.
    pub fn next_index(&mut self) -> Option<NodeIndex> {
        while let Some(index) = self.pending {
            self.stack.push(index);
            self.pending = self.tree.child_index(index, Side::Left);
        }
        let index = self.stack.pop()?;
        self.pending = self.tree.child_index(index, Side::Right);
        Some(index)
    }
}

impl<'a, H: BinaryHierarchy + ?Sized> Iterator for InOrderIter<'a, H> {
    type Item = &'a H::Value;

    fn next(&mut self) -> Option<Self::Item> {
        let tree = self.tree;
        self.next_index().map(|index| tree.value_at(index))
    }
}

impl<H: BinaryHierarchy + ?Sized> FusedIterator for InOrderIter<'_, H> {}

// =$========================================================================$=
// BREADTH-FIRST
// =$========================================================================$=
/// Iterator for breadth-first (level order) traversal.
///
/// All nodes at depth `d` come before any node at depth `d + 1`. Within a
/// level, nodes follow the order their parents were visited in, and siblings
/// follow child order.
pub struct BreadthFirstIter<'a, H: ?Sized> {
    tree: &'a H,
    queue: VecDeque<NodeIndex>,
}

impl<'a, H: Hierarchy + ?Sized> BreadthFirstIter<'a, H> {
    /// Creates a level-order walk over the whole tree.
    pub fn new(tree: &'a H) -> Self {
        BreadthFirstIter {
            tree,
            queue: VecDeque::from([tree.root_index()]),
        }
    }

    /// Advances the walk and returns the index of the next node.
    pub fn next_index(&mut self) -> Option<NodeIndex> {
        let index = self.queue.pop_front()?;
        self.queue.extend(self.tree.child_indices(index));
        Some(index)
    }
}

impl<'a, H: Hierarchy + ?Sized> Iterator for BreadthFirstIter<'a, H> {
    type Item = &'a H::Value;

    fn next(&mut self) -> Option<Self::Item> {
        let tree = self.tree;
        self.next_index().map(|index| tree.value_at(index))
    }
}

impl<H: Hierarchy + ?Sized> FusedIterator for BreadthFirstIter<'_, H> {}

// =$========================================================================$=
// ANCESTORS
// =$========================================================================$=
/// Iterator from a node's parent up to the root.
///
/// The starting node itself is not returned; for the root the iterator is empty.
pub struct AncestorsIter<'a, H: ?Sized> {
    tree: &'a H,
    next: Option<NodeIndex>,
}

impl<'a, H: Hierarchy + ?Sized> AncestorsIter<'a, H> {
    /// Creates an iterator over the ancestors of the node at `start`.
    pub fn new(tree: &'a H, start: NodeIndex) -> Self {
        AncestorsIter {
            tree,
            next: tree.parent_index(start),
        }
    }

    /// Advances the walk and returns the index of the next ancestor.
    pub fn next_index(&mut self) -> Option<NodeIndex> {
        let index = self.next?;
        self.next = self.tree.parent_index(index);
        Some(index)
    }
}

impl<'a, H: Hierarchy + ?Sized> Iterator for AncestorsIter<'a, H> {
    type Item = &'a H::Value;

    fn next(&mut self) -> Option<Self::Item> {
        let tree = self.tree;
        self.next_index().map(|index| tree.value_at(index))
    }
}

impl<H: Hierarchy + ?Sized> FusedIterator for AncestorsIter<'_, H> {}

// =#========================================================================#=
// METRICS
// =#========================================================================#=
/// Returns the number of nodes on the longest root-to-leaf path.
///
/// A root without children has depth 1.
pub fn depth<H: Hierarchy + ?Sized>(tree: &H) -> usize {
    let mut depth = 0;
    let mut level = vec![tree.root_index()];
    while !level.is_empty() {
        depth += 1;
        level = level
            .iter()
            .flat_map(|&index| tree.child_indices(index))
            .collect();
    }
    depth
}

/// Returns the width of the tree, i.e. its number of leaves.
///
/// Defined recursively, a leaf has width 1 and any other node the sum of its
/// children's widths. For binary nodes this is the same as
/// `max(1, width(left) + width(right))` with empty slots counting 0, so one
/// definition serves all variants.
pub fn width<H: Hierarchy + ?Sized>(tree: &H) -> usize {
    let mut walk = PreOrderIter::new(tree);
    let mut leaves = 0;
    while let Some(index) = walk.next_index() {
        if tree.child_indices(index).next().is_none() {
            leaves += 1;
        }
    }
    leaves
}

// =#========================================================================#=
// RENDERING
// =#========================================================================#=
/// Writes a box-drawing picture of the tree, one node per line.
///
/// `tag` may prefix a node's value, e.g. with the slot it occupies.
///
/// # Example Output
/// ```text
/// ROOT
/// ├─ A
/// │  ├─ 1
/// │  └─ 2
/// └─ B
/// ```
pub(crate) fn render<H, F>(tree: &H, f: &mut fmt::Formatter, tag: F) -> fmt::Result
where
    H: Hierarchy + ?Sized,
    H::Value: fmt::Display,
    F: Fn(NodeIndex) -> &'static str,
{
    let root = tree.root_index();
    writeln!(f, "{}", tree.value_at(root))?;

    // (index, prefix, is_last)
    let mut stack: Vec<(NodeIndex, String, bool)> = Vec::new();
    push_children(tree, root, "", &mut stack);

    while let Some((index, prefix, is_last)) = stack.pop() {
        let connector = if is_last { "└─ " } else { "├─ " };
        writeln!(f, "{prefix}{connector}{}{}", tag(index), tree.value_at(index))?;

        let child_prefix = format!("{prefix}{}", if is_last { "   " } else { "│  " });
        push_children(tree, index, &child_prefix, &mut stack);
    }

    Ok(())
}

/// Pushes the children of `index` so that the first child is popped first.
fn push_children<H: Hierarchy + ?Sized>(
    tree: &H,
    index: NodeIndex,
    prefix: &str,
    stack: &mut Vec<(NodeIndex, String, bool)>,
) {
    let children: Vec<NodeIndex> = tree.child_indices(index).collect();
    let last = children.len().saturating_sub(1);
    for (position, &child) in children.iter().enumerate().rev() {
        stack.push((child, prefix.to_string(), position == last));
    }
}
