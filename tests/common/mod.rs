//! Helpers to write tree dumps for tests.
#![allow(dead_code)]

/// Header lines every tree dump starts with.
pub const HEADER: &str = "tree 0\ndepth;samples;impurity;...\n";

/// Internal node record with the given values and seven split fields.
pub fn internal(depth: usize, samples: u64, impurity: f64) -> String {
    format!("{depth};{samples};{impurity};0.1;2;petal_length;<=;2.45;-;-;-")
}

/// Leaf record with two classes, all samples in class 0.
pub fn leaf(depth: usize, samples: u64, leaf_id: u32) -> String {
    format!("{depth};{samples};0.0;{leaf_id};2;{samples},0")
}

/// Builds a tree dump from a pre-order depth sequence.
///
/// A node is a leaf if the next node is not deeper. Every node holds
/// `samples` samples, and leaves are numbered in order.
pub fn dump_from_depths(depths: &[usize], samples: u64) -> String {
    let mut text = HEADER.to_string();
    let mut next_leaf_id = 0;
    for (i, &depth) in depths.iter().enumerate() {
        let is_leaf = depths.get(i + 1).is_none_or(|&next| next <= depth);
        let record = if is_leaf {
            next_leaf_id += 1;
            leaf(depth, samples, next_leaf_id - 1)
        } else {
            internal(depth, samples, 0.5)
        };
        text.push_str(&record);
        text.push('\n');
    }
    text
}

/// Root with 100 samples, leaf 0 with 40 and leaf 1 with 60 samples.
pub const THREE_NODE_DUMP: &str = "H1\nH2\n\
    0;100;0.5;0.2;f;g;h;i;j;k;l\n\
    1;40;0.1;0;2;36,4\n\
    1;60;0.3;1;2;15,45\n";

/// Complete binary tree of the given depth; each left child gets a third
/// of its parent's samples, each right child the rest.
pub fn complete_dump(max_depth: usize, root_samples: u64) -> String {
    fn write(text: &mut String, depth: usize, max_depth: usize, samples: u64, leaf_id: &mut u32) {
        if depth == max_depth {
            text.push_str(&leaf(depth, samples, *leaf_id));
            text.push('\n');
            *leaf_id += 1;
            return;
        }
        text.push_str(&internal(depth, samples, 0.5));
        text.push('\n');
        let left = samples / 3;
        write(text, depth + 1, max_depth, left, leaf_id);
        write(text, depth + 1, max_depth, samples - left, leaf_id);
    }

    let mut text = HEADER.to_string();
    write(&mut text, 0, max_depth, root_samples, &mut 0);
    text
}
