use arborist::highlight::mark_path;
use arborist::layout::{BranchStrategy, LayoutConfig, layout};
use arborist::model::{DecisionTree, Node};
use arborist::statistics::parse_statistics;
use proptest::prelude::*;
use std::collections::HashSet;
use std::num::NonZeroUsize;

/// Random tree shape with sample counts.
#[derive(Debug, Clone)]
enum Shape {
    Leaf(u64),
    Internal(u64, Vec<Shape>),
}

fn shape() -> impl Strategy<Value = Shape> {
    let leaf = (0u64..1000).prop_map(Shape::Leaf);
    leaf.prop_recursive(8, 128, 2, |inner| {
        (0u64..1000, prop::collection::vec(inner, 1..=2))
            .prop_map(|(samples, children)| Shape::Internal(samples, children))
    })
}

/// Writes a shape as a tree dump and returns it with its pre-order depths.
fn to_dump(shape: &Shape) -> (String, Vec<usize>) {
    fn write(shape: &Shape, depth: usize, text: &mut String, depths: &mut Vec<usize>, leaf_id: &mut u32) {
        depths.push(depth);
        match shape {
            Shape::Leaf(samples) => {
                let half = samples / 2;
                text.push_str(&format!(
                    "{depth};{samples};0.25;{leaf_id};2;{half},{}\n",
                    samples - half
                ));
                *leaf_id += 1;
            }
            Shape::Internal(samples, children) => {
                text.push_str(&format!("{depth};{samples};0.5;0.1;2;x;<=;1.5;-;-;-\n"));
                for child in children {
                    write(child, depth + 1, text, depths, leaf_id);
                }
            }
        }
    }

    let mut text = String::from("tree\nheader\n");
    let mut depths = Vec::new();
    write(shape, 0, &mut text, &mut depths, &mut 0);
    (text, depths)
}

fn parse(shape: &Shape) -> (DecisionTree, Vec<usize>) {
    let (text, depths) = to_dump(shape);
    (parse_statistics(text).unwrap(), depths)
}

proptest! {
    #[test]
    fn prop_depth_round_trip(shape in shape()) {
        let (tree, depths) = parse(&shape);
        let parsed: Vec<usize> = tree.pre_order_iter().map(Node::depth).collect();
        prop_assert_eq!(parsed, depths);
    }

    #[test]
    fn prop_arity(shape in shape()) {
        let (tree, _) = parse(&shape);
        prop_assert!(tree.is_valid());
        for node in tree.nodes() {
            match node {
                Node::Internal { children, .. } => {
                    prop_assert!(children.len() <= 2);
                }
                Node::Leaf { .. } => {
                    prop_assert_eq!(node.num_children(), 0);
                }
            }
        }
    }

    #[test]
    fn prop_layout_deterministic(shape in shape(), depth in 1usize..10, up in any::<bool>()) {
        let (tree, _) = parse(&shape);
        let before = tree.clone();
        let strategy = if up { BranchStrategy::Up } else { BranchStrategy::Simple };
        let config = LayoutConfig::default()
            .with_max_depth(NonZeroUsize::new(depth).unwrap())
            .with_branch_strategy(strategy);

        let first = layout(&tree, 1000, &config);
        let second = layout(&tree, 1000, &config);
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(&tree, &before);
    }

    #[test]
    fn prop_monotonic_bunching(shape in shape(), up in any::<bool>()) {
        let (tree, _) = parse(&shape);
        let strategy = if up { BranchStrategy::Up } else { BranchStrategy::Simple };
        let mut previous = 0;
        for depth in 1..=tree.max_depth() + 2 {
            let config = LayoutConfig::default()
                .with_max_depth(NonZeroUsize::new(depth).unwrap())
                .with_branch_strategy(strategy);
            let result = layout(&tree, 1000, &config);

            // Nothing is drawn at or below the limit
            prop_assert!(result.branches.iter().all(|b| b.geometry.depth < depth));
            prop_assert!(result.leaves.iter().all(|l| l.depth < depth));
            prop_assert!(result.bunches.iter().all(|b| b.depth < depth));

            // One leaf or bunch per drawn leaf, cut node or childless internal node
            let terminals: Vec<&Node> = tree
                .nodes()
                .iter()
                .filter(|n| n.depth() < depth && (n.depth() + 1 == depth || n.num_children() == 0))
                .collect();
            prop_assert_eq!(result.leaves.len() + result.bunches.len(), terminals.len());
            let drawn_samples: u64 = result.leaves.iter().map(|l| l.samples).sum::<u64>()
                + result.bunches.iter().map(|b| b.samples).sum::<u64>();
            let terminal_samples: u64 = terminals.iter().map(|n| n.samples()).sum();
            prop_assert_eq!(drawn_samples, terminal_samples);

            let drawn = result.branches.len();
            prop_assert!(drawn >= previous);
            previous = drawn;
        }
        prop_assert_eq!(previous, tree.num_nodes());
    }

    #[test]
    fn prop_records_sorted(shape in shape(), depth in 1usize..10) {
        let (tree, _) = parse(&shape);
        let config = LayoutConfig::default().with_max_depth(NonZeroUsize::new(depth).unwrap());
        let result = layout(&tree, 1000, &config);

        prop_assert!(result.leaves.windows(2).all(|w| w[0].samples >= w[1].samples));
        prop_assert!(result.bunches.windows(2).all(|w| w[0].samples >= w[1].samples));
    }

    #[test]
    fn prop_min_branch_length(shape in shape()) {
        let (tree, _) = parse(&shape);
        let config = LayoutConfig::default();
        let result = layout(&tree, 1000, &config);

        for branch in &result.branches[1..] {
            prop_assert!(branch.geometry.length >= config.min_branch_length);
        }
    }

    #[test]
    fn prop_highlight_idempotent(shape in shape(), picks in prop::collection::hash_set(0u32..64, 0..8)) {
        let (mut tree, _) = parse(&shape);

        mark_path(&mut tree, &picks);
        let once = tree.clone();
        mark_path(&mut tree, &picks);
        prop_assert_eq!(&tree, &once);

        // Every selected leaf was picked and its parent is selected
        for node in tree.nodes().iter().filter(|n| n.is_selected()) {
            if let Some(leaf_id) = node.leaf_id() {
                prop_assert!(picks.contains(&leaf_id));
            }
            if let Some(parent) = node.parent() {
                prop_assert!(tree[parent].is_selected());
            }
        }

        mark_path(&mut tree, &HashSet::new());
        prop_assert!(tree.nodes().iter().all(|n| !n.is_selected()));
    }
}
