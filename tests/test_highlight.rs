mod common;

use arborist::highlight::mark_path;
use arborist::layout::{LayoutConfig, layout};
use arborist::model::DecisionTree;
use arborist::statistics::parse_statistics;
use common::dump_from_depths;
use std::collections::HashSet;

/// Depths `[0, 1, 2, 2, 1, 2, 2]`: leaves 0, 1 under node 1 and 2, 3 under node 4.
fn four_leaf_tree() -> DecisionTree {
    parse_statistics(dump_from_depths(&[0, 1, 2, 2, 1, 2, 2], 10)).unwrap()
}

fn selected(tree: &DecisionTree) -> Vec<usize> {
    tree.nodes()
        .iter()
        .filter(|n| n.is_selected())
        .map(|n| n.index())
        .collect()
}

#[test]
fn test_mark_single_path() {
    let mut tree = four_leaf_tree();
    let matched = mark_path(&mut tree, &HashSet::from([2]));

    assert_eq!(matched, 1);
    assert_eq!(selected(&tree), vec![0, 4, 5]);
}

#[test]
fn test_mark_several_paths() {
    let mut tree = four_leaf_tree();
    let matched = mark_path(&mut tree, &HashSet::from([0, 3]));

    assert_eq!(matched, 2);
    assert_eq!(selected(&tree), vec![0, 1, 2, 4, 6]);
}

#[test]
fn test_mark_is_idempotent() {
    let mut tree = four_leaf_tree();
    let ids = HashSet::from([1, 2]);

    mark_path(&mut tree, &ids);
    let once = tree.clone();
    mark_path(&mut tree, &ids);
    assert_eq!(tree, once);
}

#[test]
fn test_mark_replaces_previous_selection() {
    let mut tree = four_leaf_tree();
    mark_path(&mut tree, &HashSet::from([0]));
    mark_path(&mut tree, &HashSet::from([3]));
    assert_eq!(selected(&tree), vec![0, 4, 6]);
}

#[test]
fn test_empty_set_clears() {
    let mut tree = four_leaf_tree();
    mark_path(&mut tree, &HashSet::from([0, 1, 2, 3]));
    assert_eq!(selected(&tree).len(), tree.num_nodes());

    let matched = mark_path(&mut tree, &HashSet::new());
    assert_eq!(matched, 0);
    assert!(selected(&tree).is_empty());
}

#[test]
fn test_unknown_ids_are_ignored() {
    let mut tree = four_leaf_tree();
    let matched = mark_path(&mut tree, &HashSet::from([1, 99]));

    assert_eq!(matched, 1);
    assert_eq!(selected(&tree), vec![0, 1, 3]);
}

#[test]
fn test_selection_reaches_layout() {
    let mut tree = four_leaf_tree();
    mark_path(&mut tree, &HashSet::from([3]));
    let result = layout(&tree, 10, &LayoutConfig::default());

    let selected_branches: Vec<_> = result
        .branches
        .iter()
        .filter(|b| b.selected)
        .map(|b| b.node)
        .collect();
    assert_eq!(selected_branches, vec![0, 4, 6]);

    let selected_leaves: Vec<_> = result
        .leaves
        .iter()
        .filter(|l| l.selected)
        .map(|l| l.leaf_id)
        .collect();
    assert_eq!(selected_leaves, vec![3]);
}
