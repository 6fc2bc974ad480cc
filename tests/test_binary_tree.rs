use pretty_assertions::assert_eq;
use valtree::{Binary, BinaryTree, Side, Tree, TreeError};

const BREADTH_FIRST: &[&str] = &[
    "ROOT", "A", "B", "1", "2", "3", "4", "a", "b", "c", "d", "e", "f", "g", "h",
];
const IN_ORDER: &[&str] = &[
    "a", "1", "b", "A", "c", "2", "d", "ROOT", "e", "3", "f", "B", "g", "4", "h",
];
const PRE_ORDER: &[&str] = &[
    "ROOT", "A", "1", "a", "b", "2", "c", "d", "B", "3", "e", "f", "4", "g", "h",
];
const POST_ORDER: &[&str] = &[
    "a", "b", "1", "c", "d", "2", "A", "e", "f", "3", "g", "h", "4", "B", "ROOT",
];

/// Returns the complete sample tree of 15 nodes.
///
/// ```text
///                ROOT
///         A               B
///     1       2       3       4
///   a   b   c   d   e   f   g   h
/// ```
fn symmetric() -> BinaryTree<&'static str> {
    let mut tree = BinaryTree::with_capacity("ROOT", 15);
    tree.add_left("A").unwrap();
    tree.add_right("B").unwrap();
    tree.add_left_of(&"A", "1").unwrap();
    tree.add_right_of(&"A", "2").unwrap();
    tree.add_left_of(&"B", "3").unwrap();
    tree.add_right_of(&"B", "4").unwrap();

    tree.add_left_of(&"1", "a").unwrap();
    tree.add_right_of(&"1", "b").unwrap();
    tree.add_left_of(&"2", "c").unwrap();
    tree.add_right_of(&"2", "d").unwrap();
    tree.add_left_of(&"3", "e").unwrap();
    tree.add_right_of(&"3", "f").unwrap();
    tree.add_left_of(&"4", "g").unwrap();
    tree.add_right_of(&"4", "h").unwrap();
    tree
}

fn collect<'a>(values: impl Iterator<Item = &'a &'static str>) -> Vec<&'static str> {
    values.copied().collect()
}

// ============= Traversals =============

#[test]
fn test_in_order() {
    assert_eq!(collect(symmetric().in_order()), IN_ORDER);
}

#[test]
fn test_pre_order() {
    assert_eq!(collect(symmetric().pre_order()), PRE_ORDER);
}

#[test]
fn test_post_order() {
    assert_eq!(collect(symmetric().post_order()), POST_ORDER);
}

#[test]
fn test_breadth_first() {
    assert_eq!(collect(symmetric().breadth_first()), BREADTH_FIRST);
}

#[test]
fn test_traversals_with_single_children() {
    // ROOT has only a right child, which has only a left child
    let mut tree = BinaryTree::new("ROOT");
    tree.add_right("R").unwrap();
    tree.add_left_of(&"R", "RL").unwrap();
    tree.add_right_of(&"RL", "RLR").unwrap();

    assert_eq!(collect(tree.pre_order()), ["ROOT", "R", "RL", "RLR"]);
    assert_eq!(collect(tree.in_order()), ["ROOT", "RL", "RLR", "R"]);
    assert_eq!(collect(tree.post_order()), ["RLR", "RL", "R", "ROOT"]);
    assert_eq!(collect(tree.breadth_first()), ["ROOT", "R", "RL", "RLR"]);
    assert_eq!(tree.depth(), 4);
    assert_eq!(tree.width(), 1);
}

// ============= Metrics =============

#[test]
fn test_depth() {
    assert_eq!(symmetric().depth(), 4);
}

#[test]
fn test_width() {
    assert_eq!(symmetric().width(), 8);
}

#[test]
fn test_width_counts_single_child_nodes_as_one() {
    let mut tree = BinaryTree::new(1);
    tree.add_left(2).unwrap();
    tree.add_left_of(&2, 3).unwrap();
    tree.add_right(4).unwrap();
    assert_eq!(tree.width(), 2);
    assert_eq!(tree.depth(), 3);
}

// ============= Queries =============

#[test]
fn test_parent_of_root_child() {
    assert_eq!(symmetric().parent(&"A"), Ok(Some(&"ROOT")));
}

#[test]
fn test_parent_of_leaf() {
    assert_eq!(symmetric().parent(&"h"), Ok(Some(&"4")));
}

#[test]
fn test_left_and_right() {
    let tree = symmetric();
    assert_eq!(tree.left(&"ROOT"), Ok(Some(&"A")));
    assert_eq!(tree.right(&"ROOT"), Ok(Some(&"B")));
    assert_eq!(tree.left(&"3"), Ok(Some(&"e")));
    assert_eq!(tree.right(&"3"), Ok(Some(&"f")));
    assert_eq!(tree.left(&"h"), Ok(None));
    assert_eq!(tree.child(&"2", Side::Right), Ok(Some(&"d")));
}

#[test]
fn test_left_of_missing_value() {
    let tree = symmetric();
    assert_eq!(tree.left(&"z"), Err(TreeError::NotFound));
    assert_eq!(tree.right(&"z"), Err(TreeError::NotFound));
}

#[test]
fn test_contains() {
    let tree = symmetric();
    assert!(tree.contains(&"ROOT"));
    assert!(tree.contains(&"g"));
    assert!(!tree.contains(&"i"));
    assert_eq!(tree.len(), 15);
    assert!(tree.is_valid());
}

// ============= Insertion failures =============

#[test]
fn test_add_into_occupied_slot_fails() {
    let mut tree = symmetric();
    assert_eq!(tree.add_left("X"), Err(TreeError::SlotOccupied(Side::Left)));
    assert_eq!(tree.add_right("X"), Err(TreeError::SlotOccupied(Side::Right)));
    assert_eq!(tree.add_left_of(&"1", "X"), Err(TreeError::SlotOccupied(Side::Left)));
    assert_eq!(tree.add_right_of(&"4", "X"), Err(TreeError::SlotOccupied(Side::Right)));

    // The existing subtrees survive
    assert!(!tree.contains(&"X"));
    assert_eq!(collect(tree.pre_order()), PRE_ORDER);
    assert!(tree.is_valid());
}

#[test]
fn test_add_duplicate_fails_before_slot_check() {
    let mut tree = symmetric();
    assert_eq!(tree.add_left("a"), Err(TreeError::DuplicateValue));
    assert_eq!(tree.add_left_of(&"a", "b"), Err(TreeError::DuplicateValue));
    assert_eq!(collect(tree.breadth_first()), BREADTH_FIRST);
    assert_eq!(tree.depth(), 4);
    assert_eq!(tree.width(), 8);
}

#[test]
fn test_add_to_missing_parent() {
    let mut tree = symmetric();
    assert_eq!(tree.add_right_of(&"z", "X"), Err(TreeError::NotFound));
    assert_eq!(tree.add_child_of(&"z", Side::Left, "X"), Err(TreeError::NotFound));
    assert!(!tree.contains(&"X"));
}

// ============= Display =============

#[test]
fn test_display_marks_slots() {
    let mut tree = BinaryTree::new(0);
    tree.add_right(2).unwrap();
    tree.add_left_of(&2, 1).unwrap();

    let expected = "\
0
└─ R: 2
   └─ L: 1
";
    assert_eq!(tree.to_string(), expected);
}
