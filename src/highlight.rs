//! Path highlighter marking the root paths of selected leaves.

use crate::model::{DecisionTree, NodeIndex};
use std::collections::HashSet;
use tracing::debug;

/// Marks every node on the path from the root to any leaf in `leaf_ids`.
///
/// All `selected` flags are reset first, so the result only depends on
/// `leaf_ids`: calling it twice with the same set yields the same flags,
/// and an empty set clears all highlights. Ids without a matching leaf
/// are ignored and logged at debug level.
///
/// # Arguments
/// * `tree` - Tree whose flags are updated
/// * `leaf_ids` - Ids of the leaves to highlight
///
/// # Returns
/// Number of leaves found for the given ids.
///
/// # Example
/// ```
/// use arborist::highlight::mark_path;
/// use arborist::statistics::parse_statistics;
/// use std::collections::HashSet;
///
/// let text = "H1\nH2\n0;10;0.5;0.1;a;b;c;d;e;f;g\n1;4;0.0;7;1;4\n1;6;0.0;8;1;6\n";
/// let mut tree = parse_statistics(text).unwrap();
///
/// assert_eq!(mark_path(&mut tree, &HashSet::from([8])), 1);
/// let selected: Vec<bool> = tree.pre_order_iter().map(|n| n.is_selected()).collect();
/// assert_eq!(selected, vec![true, false, true]);
/// ```
pub fn mark_path(tree: &mut DecisionTree, leaf_ids: &HashSet<u32>) -> usize {
    for node in tree.nodes_mut() {
        node.set_selected(false);
    }

    let mut matched: HashSet<u32> = HashSet::with_capacity(leaf_ids.len());
    let mut on_path: Vec<NodeIndex> = Vec::new();
    for leaf in tree.leaves() {
        let Some(leaf_id) = leaf.leaf_id() else {
            continue;
        };
        if leaf_ids.contains(&leaf_id) {
            matched.insert(leaf_id);
            on_path.extend(tree.ancestors(leaf.index()).map(|n| n.index()));
        }
    }

    for index in on_path {
        tree[index].set_selected(true);
    }

    for unknown in leaf_ids.difference(&matched) {
        debug!(leaf_id = unknown, "no leaf with this id");
    }
    matched.len()
}
