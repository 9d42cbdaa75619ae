//! Layout pass turning a [DecisionTree] into render records.

use crate::layout::config::{BranchStrategy, LayoutConfig};
use crate::layout::records::{Branch, Bunch, Layout, LeafRecord, NodeGeometry};
use crate::model::{DecisionTree, Node, NodeIndex};
use std::cmp::Reverse;
use tracing::trace;

/// Side of a child relative to its parent branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    Left,
    Right,
}

/// Computes the layout of `tree`.
///
/// Nodes are visited in pre-order. The root branch starts at the bottom
/// center of the canvas pointing up with `trunk_length`; every child
/// branch starts at the terminus of its parent's branch.
///
/// For a child holding the proportion `p` of its parent's samples:
/// * length: `max(min(p, max_shortening_factor) * parent_length, min_branch_length)`
/// * angle: `parent_angle - |p - 1|` on the left, `parent_angle + |p - 1|` on the right
///
/// A node at depth `max_depth - 1` is not expanded and becomes a [Bunch];
/// so does an internal node without children. Leaves above the limit
/// become [LeafRecord]s.
///
/// The tree is only read, so repeated passes with different configs are
/// independent. Sample counts are not checked for consistency: a child
/// with more samples than its parent yields geometry outside the usual
/// bounds, but never an error.
///
/// # Arguments
/// * `tree` - Tree to lay out
/// * `total_samples` - Reference sample count for [`Layout::share`]
/// * `config` - Rendering parameters
///
/// # Example
/// ```
/// use arborist::layout::{LayoutConfig, layout};
/// use arborist::statistics::parse_statistics;
///
/// let text = "H1\nH2\n0;100;0.5;0.2;f;g;h;i;j;k;l\n1;40;0.1;0;2;36,4\n1;60;0.3;1;2;15,45\n";
/// let tree = parse_statistics(text).unwrap();
/// let result = layout(&tree, 100, &LayoutConfig::default());
///
/// assert_eq!(result.branches.len(), 3);
/// assert_eq!(result.leaves[0].samples, 60);
/// ```
pub fn layout(tree: &DecisionTree, total_samples: u64, config: &LayoutConfig) -> Layout {
    let num_nodes = tree.num_nodes();
    let mut result = Layout {
        branches: Vec::with_capacity(num_nodes),
        leaves: Vec::new(),
        bunches: Vec::new(),
        total_samples,
        geometry: vec![None; num_nodes],
    };

    if !tree.is_root_set() {
        return result;
    }

    let root = tree.root();
    let trunk = NodeGeometry::new(
        config.width / 2.0,
        config.height,
        0.0,
        config.trunk_length,
        root.depth(),
    );

    // Children are pushed in reverse, so output is in pre-order
    let mut stack: Vec<(NodeIndex, NodeGeometry)> = vec![(root.index(), trunk)];
    while let Some((index, geometry)) = stack.pop() {
        let node = &tree[index];
        result.geometry[index] = Some(geometry);
        result.branches.push(Branch::new(node, geometry));

        if config.is_cut_off(node.depth()) {
            result.bunches.push(Bunch::new(node, &geometry));
            continue;
        }

        match node {
            Node::Leaf {
                index,
                depth,
                samples,
                impurity,
                leaf_id,
                classes,
                best_class,
                selected,
                ..
            } => result.leaves.push(LeafRecord {
                node: *index,
                x: geometry.x2,
                y: geometry.y2,
                depth: *depth,
                samples: *samples,
                impurity: *impurity,
                leaf_id: *leaf_id,
                classes: classes.clone(),
                best_class: *best_class,
                selected: *selected,
            }),
            Node::Internal { children, .. } => {
                let Some((left, right)) = order_children(tree, node, children, &geometry, config)
                else {
                    result.bunches.push(Bunch::new(node, &geometry));
                    continue;
                };
                if let Some(right) = right {
                    let child = child_geometry(tree, node, right, &geometry, Side::Right, config);
                    stack.push((right, child));
                }
                let child = child_geometry(tree, node, left, &geometry, Side::Left, config);
                stack.push((left, child));
            }
        }
    }

    // Stable, so equal sample counts keep pre-order
    result.leaves.sort_by_key(|leaf| Reverse(leaf.samples));
    result.bunches.sort_by_key(|bunch| Reverse(bunch.samples));

    trace!(
        branches = result.branches.len(),
        leaves = result.leaves.len(),
        bunches = result.bunches.len(),
        "computed layout"
    );
    result
}

/// Returns `(left, right)` children according to the branch strategy,
/// or `None` if there are no children. An only child goes left.
fn order_children(
    tree: &DecisionTree,
    node: &Node,
    children: &[NodeIndex],
    geometry: &NodeGeometry,
    config: &LayoutConfig,
) -> Option<(NodeIndex, Option<NodeIndex>)> {
    match *children {
        [] => None,
        [only] => Some((only, None)),
        [first, second, ..] => match config.branch_strategy {
            BranchStrategy::Simple => Some((first, Some(second))),
            BranchStrategy::Up => {
                let first_bigger = proportion(tree[first].samples(), node.samples()) >= 0.5;
                let left_bound = geometry.angle < 0.0;
                if first_bigger == left_bound {
                    Some((first, Some(second)))
                } else {
                    Some((second, Some(first)))
                }
            }
        },
    }
}

/// Geometry of the branch into `child`, starting at the parent's terminus.
fn child_geometry(
    tree: &DecisionTree,
    parent: &Node,
    child: NodeIndex,
    parent_geometry: &NodeGeometry,
    side: Side,
    config: &LayoutConfig,
) -> NodeGeometry {
    let child = &tree[child];
    let p = proportion(child.samples(), parent.samples());

    let length = (p.min(config.max_shortening_factor) * parent_geometry.length)
        .max(config.min_branch_length);
    let spread = (p - 1.0).abs();
    let angle = match side {
        Side::Left => parent_geometry.angle - spread,
        Side::Right => parent_geometry.angle + spread,
    };

    NodeGeometry::new(
        parent_geometry.x2,
        parent_geometry.y2,
        angle,
        length,
        child.depth(),
    )
}

/// Fraction of the parent's samples held by a child; 0 if the parent has none.
fn proportion(child_samples: u64, parent_samples: u64) -> f64 {
    if parent_samples == 0 {
        return 0.0;
    }
    child_samples as f64 / parent_samples as f64
}
