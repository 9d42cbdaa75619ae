//! Render records produced by a layout pass.

use crate::model::{Node, NodeIndex};

/// Screen-space geometry of the branch leading into a node.
///
/// Angles are in radians, 0 pointing straight up and positive values
/// turning clockwise. The y axis points down, as on an SVG canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NodeGeometry {
    /// Origin x
    pub x: f64,
    /// Origin y
    pub y: f64,
    /// Terminus x
    pub x2: f64,
    /// Terminus y
    pub y2: f64,
    /// Direction of the branch
    pub angle: f64,
    /// Length of the branch
    pub length: f64,
    /// Depth of the node
    pub depth: usize,
}

impl NodeGeometry {
    /// Creates the geometry of a branch starting at `(x, y)`,
    /// computing its terminus from `angle` and `length`.
    pub fn new(x: f64, y: f64, angle: f64, length: f64, depth: usize) -> Self {
        NodeGeometry {
            x,
            y,
            x2: x + length * angle.sin(),
            y2: y - length * angle.cos(),
            angle,
            length,
            depth,
        }
    }
}

/// A branch (tree edge) to draw, one per visited node including the root.
#[derive(Debug, Clone, PartialEq)]
pub struct Branch {
    /// Node the branch leads into
    pub node: NodeIndex,
    /// Position, direction and length
    pub geometry: NodeGeometry,
    /// Samples of the node
    pub samples: u64,
    /// Impurity of the node
    pub impurity: f64,
    /// Whether the node lies on a highlighted path
    pub selected: bool,
}

impl Branch {
    pub(crate) fn new(node: &Node, geometry: NodeGeometry) -> Self {
        Branch {
            node: node.index(),
            geometry,
            samples: node.samples(),
            impurity: node.impurity(),
            selected: node.is_selected(),
        }
    }
}

/// A leaf to draw at the terminus of its branch.
#[derive(Debug, Clone, PartialEq)]
pub struct LeafRecord {
    /// The leaf node
    pub node: NodeIndex,
    /// Terminus x
    pub x: f64,
    /// Terminus y
    pub y: f64,
    /// Depth of the leaf
    pub depth: usize,
    /// Samples of the leaf
    pub samples: u64,
    /// Impurity of the leaf
    pub impurity: f64,
    /// Identifier of the leaf within its tree
    pub leaf_id: u32,
    /// Sample count per class
    pub classes: Vec<u64>,
    /// Index of the class with the highest count
    pub best_class: usize,
    /// Whether the leaf lies on a highlighted path
    pub selected: bool,
}

/// Placeholder for a subtree that is not drawn because of the depth limit.
#[derive(Debug, Clone, PartialEq)]
pub struct Bunch {
    /// Node at which the tree was cut
    pub node: NodeIndex,
    /// Terminus x
    pub x: f64,
    /// Terminus y
    pub y: f64,
    /// Depth of the cut node
    pub depth: usize,
    /// Aggregate samples of the truncated subtree
    pub samples: u64,
    /// Whether the cut node lies on a highlighted path
    pub selected: bool,
}

impl Bunch {
    pub(crate) fn new(node: &Node, geometry: &NodeGeometry) -> Self {
        Bunch {
            node: node.index(),
            x: geometry.x2,
            y: geometry.y2,
            depth: node.depth(),
            samples: node.samples(),
            selected: node.is_selected(),
        }
    }
}

/// Result of a layout pass.
///
/// `branches` are in pre-order; `leaves` and `bunches` are sorted by
/// descending samples, so drawing them in order puts small ones on top.
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    /// Branches in pre-order
    pub branches: Vec<Branch>,
    /// Leaves above the depth limit, largest first
    pub leaves: Vec<LeafRecord>,
    /// Truncated subtrees, largest first
    pub bunches: Vec<Bunch>,
    /// Samples all proportions of [`share`](Self::share) refer to
    pub total_samples: u64,
    /// Geometry per node index; `None` for nodes below the depth limit
    pub(crate) geometry: Vec<Option<NodeGeometry>>,
}

impl Layout {
    /// Returns the geometry of the node at `index`, or `None` if it was not drawn.
    pub fn geometry(&self, index: NodeIndex) -> Option<&NodeGeometry> {
        self.geometry.get(index).and_then(Option::as_ref)
    }

    /// Returns `samples` as a fraction of the total samples, clamped to `[0, 1]`.
    pub fn share(&self, samples: u64) -> f64 {
        if self.total_samples == 0 {
            return 0.0;
        }
        (samples as f64 / self.total_samples as f64).clamp(0.0, 1.0)
    }
}
