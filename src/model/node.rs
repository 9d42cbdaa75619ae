//! Node module for decision tree representation.

use crate::model::tree::NodeIndex;

/// Maximum number of children of an internal node.
pub const MAX_CHILDREN: usize = 2;

// =#========================================================================#=
// NODE
// =#========================================================================#=
/// Represents a node of a decision tree as parsed from a tree dump.
///
/// A node is either:
/// - **Internal**: Split node with up to two children (filled in during parsing)
/// - **Leaf**: Terminal node with per-class sample counts
///
/// # Invariants
/// - `index` is the index in the arena of the owning [DecisionTree](crate::model::DecisionTree)
/// - `parent` is `None` only for the root
/// - The depth of a child is exactly the depth of its parent plus one
/// - Internal nodes have at most [MAX_CHILDREN] children, stored in parse order
/// - Leaves parsed from a dump have at least one class and `best_class < classes.len()`
#[derive(PartialEq, Debug, Clone)]
pub enum Node {
    /// Split node
    Internal {
        /// Index of this node in the tree arena
        index: NodeIndex,
        /// Distance to the root (root has depth 0)
        depth: usize,
        /// Number of training samples reaching this node
        samples: u64,
        /// Impurity at this node, in `[0, 1]`
        impurity: f64,
        /// Index of the parent node; `None` for the root
        parent: Option<NodeIndex>,
        /// Whether this node lies on a highlighted root-to-leaf path
        selected: bool,
        /// Indices of the child nodes in parse order
        children: Vec<NodeIndex>,
        /// Impurity reduction achieved by the split
        impurity_drop: f64,
        /// Split metadata, passed through to renderers verbatim
        split: SplitFields,
    },
    /// Terminal node
    Leaf {
        /// Index of this node in the tree arena
        index: NodeIndex,
        /// Distance to the root (root has depth 0)
        depth: usize,
        /// Number of training samples reaching this node
        samples: u64,
        /// Impurity at this node, in `[0, 1]`
        impurity: f64,
        /// Index of the parent node; `None` for a single-node tree
        parent: Option<NodeIndex>,
        /// Whether this node lies on a highlighted root-to-leaf path
        selected: bool,
        /// Identifier of this leaf, unique within its tree
        leaf_id: u32,
        /// Sample count per class
        classes: Vec<u64>,
        /// Index into `classes` of the highest count (first on ties)
        best_class: usize,
    },
}

impl Node {
    /// Creates a new internal node without parent and children.
    ///
    /// # Arguments
    /// * `index` - The index of this node in the tree (arena)
    /// * `depth` - Distance to the root
    /// * `samples` - Number of samples reaching this node
    /// * `impurity` - Impurity at this node
    /// * `impurity_drop` - Impurity reduction of the split
    /// * `split` - Opaque split metadata
    pub fn new_internal(
        index: NodeIndex,
        depth: usize,
        samples: u64,
        impurity: f64,
        impurity_drop: f64,
        split: SplitFields,
    ) -> Self {
        Node::Internal {
            index,
            depth,
            samples,
            impurity,
            parent: None,
            selected: false,
            children: Vec::with_capacity(MAX_CHILDREN),
            impurity_drop,
            split,
        }
    }

    /// Creates a new leaf without parent.
    ///
    /// The best class is derived from `classes`.
    ///
    /// # Arguments
    /// * `index` - The index of this node in the tree (arena)
    /// * `depth` - Distance to the root
    /// * `samples` - Number of samples reaching this leaf
    /// * `impurity` - Impurity at this leaf
    /// * `leaf_id` - Identifier of this leaf within its tree
    /// * `classes` - Sample count per class
    pub fn new_leaf(
        index: NodeIndex,
        depth: usize,
        samples: u64,
        impurity: f64,
        leaf_id: u32,
        classes: Vec<u64>,
    ) -> Self {
        let best_class = best_class_of(&classes);
        Node::Leaf {
            index,
            depth,
            samples,
            impurity,
            parent: None,
            selected: false,
            leaf_id,
            classes,
            best_class,
        }
    }

    /// Returns the index of this node.
    pub fn index(&self) -> NodeIndex {
        match self {
            Node::Internal { index, .. } | Node::Leaf { index, .. } => *index,
        }
    }

    /// Returns the depth of this node.
    pub fn depth(&self) -> usize {
        match self {
            Node::Internal { depth, .. } | Node::Leaf { depth, .. } => *depth,
        }
    }

    /// Returns the number of samples reaching this node.
    pub fn samples(&self) -> u64 {
        match self {
            Node::Internal { samples, .. } | Node::Leaf { samples, .. } => *samples,
        }
    }

    /// Returns the impurity of this node.
    pub fn impurity(&self) -> f64 {
        match self {
            Node::Internal { impurity, .. } | Node::Leaf { impurity, .. } => *impurity,
        }
    }

    /// Returns the index of the parent, or `None` for the root.
    pub fn parent(&self) -> Option<NodeIndex> {
        match self {
            Node::Internal { parent, .. } | Node::Leaf { parent, .. } => *parent,
        }
    }

    /// Sets the parent of this node.
    pub(crate) fn set_parent(&mut self, new_parent: NodeIndex) {
        match self {
            Node::Internal { parent, .. } | Node::Leaf { parent, .. } => {
                *parent = Some(new_parent)
            }
        }
    }

    /// Returns whether this node lies on a highlighted path.
    pub fn is_selected(&self) -> bool {
        match self {
            Node::Internal { selected, .. } | Node::Leaf { selected, .. } => *selected,
        }
    }

    /// Sets the path highlight flag of this node.
    pub fn set_selected(&mut self, value: bool) {
        match self {
            Node::Internal { selected, .. } | Node::Leaf { selected, .. } => *selected = value,
        }
    }

    /// Returns `true` if this node is a leaf.
    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf { .. })
    }

    /// Returns `true` if this node is an internal node.
    pub fn is_internal(&self) -> bool {
        matches!(self, Node::Internal { .. })
    }

    /// Returns `true` if this node has no parent.
    pub fn is_root(&self) -> bool {
        self.parent().is_none()
    }

    /// Returns the children if this is an internal node, else `None`.
    pub fn children(&self) -> Option<&[NodeIndex]> {
        match self {
            Node::Internal { children, .. } => Some(children),
            Node::Leaf { .. } => None,
        }
    }

    /// Returns the number of children (0 for leaves).
    pub fn num_children(&self) -> usize {
        self.children().map_or(0, |c| c.len())
    }

    /// Appends a child index, returning `false` if this node cannot take
    /// another child (it is a leaf or already has [MAX_CHILDREN] children).
    pub(crate) fn push_child(&mut self, child: NodeIndex) -> bool {
        match self {
            Node::Internal { children, .. } if children.len() < MAX_CHILDREN => {
                children.push(child);
                true
            }
            _ => false,
        }
    }

    /// Returns the impurity drop if this is an internal node, else `None`.
    pub fn impurity_drop(&self) -> Option<f64> {
        match self {
            Node::Internal { impurity_drop, .. } => Some(*impurity_drop),
            Node::Leaf { .. } => None,
        }
    }

    /// Returns the split metadata if this is an internal node, else `None`.
    pub fn split(&self) -> Option<&SplitFields> {
        match self {
            Node::Internal { split, .. } => Some(split),
            Node::Leaf { .. } => None,
        }
    }

    /// Returns the leaf id if this is a leaf, else `None`.
    pub fn leaf_id(&self) -> Option<u32> {
        match self {
            Node::Leaf { leaf_id, .. } => Some(*leaf_id),
            Node::Internal { .. } => None,
        }
    }

    /// Returns the per-class sample counts if this is a leaf, else `None`.
    pub fn classes(&self) -> Option<&[u64]> {
        match self {
            Node::Leaf { classes, .. } => Some(classes),
            Node::Internal { .. } => None,
        }
    }

    /// Returns the number of classes if this is a leaf, else `None`.
    pub fn num_classes(&self) -> Option<usize> {
        self.classes().map(|c| c.len())
    }

    /// Returns the index of the best class if this is a leaf, else `None`.
    pub fn best_class(&self) -> Option<usize> {
        match self {
            Node::Leaf { best_class, .. } => Some(*best_class),
            Node::Internal { .. } => None,
        }
    }
}

/// Index of the largest count; the first one wins on ties.
fn best_class_of(classes: &[u64]) -> usize {
    let mut best = 0;
    for (i, &count) in classes.iter().enumerate() {
        if count > classes[best] {
            best = i;
        }
    }
    best
}

// =#========================================================================#=
// SPLIT FIELDS
// =#========================================================================#=
/// Split metadata of an internal node (feature, threshold, etc.).
///
/// The fields are kept verbatim in record order. They are not interpreted
/// by parsing or layout, only handed on to renderers.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SplitFields(Vec<String>);

impl SplitFields {
    /// Wraps the given raw fields.
    pub fn new(fields: Vec<String>) -> Self {
        SplitFields(fields)
    }

    /// Returns the raw field at `position`, if present.
    pub fn get(&self, position: usize) -> Option<&str> {
        self.0.get(position).map(String::as_str)
    }

    /// Returns all raw fields.
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// Returns the number of raw fields.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if there are no raw fields.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn best_class_takes_first_on_ties() {
        assert_eq!(best_class_of(&[3, 7, 7, 1]), 1);
        assert_eq!(best_class_of(&[5, 5]), 0);
        assert_eq!(best_class_of(&[0, 0, 9]), 2);
    }

    #[test]
    fn best_class_of_empty_is_zero() {
        assert_eq!(best_class_of(&[]), 0);
    }
}
