//! Provides the arena-based decision tree representation.
//!
//! * [DecisionTree] - Main tree structure using the arena pattern
//! * [NodeIndex] as type used to index nodes in a tree
//! * [PreOrderIter] and [Ancestors] for traversal

use crate::model::node::{Node, SplitFields};

/// Index of a node in a tree (arena).
pub type NodeIndex = usize;

/// *During construction only*, index for unset root.
const NO_ROOT_SET_INDEX: NodeIndex = usize::MAX;

// =#========================================================================#=
// DECISION TREE
// =#========================================================================#=
/// A decision tree of a random forest, represented using the arena pattern
/// on [Node].
///
/// Nodes are stored in a contiguous vector and referenced by [NodeIndex].
/// Parent references are plain indices, so there is no ownership cycle
/// between a node and its children: the tree owns all of its nodes.
///
/// # Structure
/// - All nodes (internal and leaves) are stored in the arena.
/// - Index of root is maintained.
/// - Nodes parsed from a dump are stored in pre-order, so the root has
///   index 0, but no method relies on that.
/// - Layout annotations are never stored here, see [crate::layout].
///
/// # Construction
/// Add nodes with [add_internal](Self::add_internal) and
/// [add_leaf](Self::add_leaf), link them with
/// [attach_child](Self::attach_child), and mark the root with
/// [set_root](Self::set_root). Test validity with [`DecisionTree::is_valid()`].
///
/// # Example
/// ```
/// use arborist::model::{DecisionTree, SplitFields};
///
/// let mut tree = DecisionTree::with_capacity(3);
/// let root = tree.add_internal(0, 100, 0.5, 0.2, SplitFields::default());
/// let left = tree.add_leaf(1, 40, 0.1, 0, vec![36, 4]);
/// let right = tree.add_leaf(1, 60, 0.3, 1, vec![15, 45]);
/// tree.set_root(root);
/// assert!(tree.attach_child(root, left));
/// assert!(tree.attach_child(root, right));
///
/// assert!(tree.is_valid());
/// assert_eq!(tree.num_leaves(), 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DecisionTree {
    /// Nodes of this tree (arena pattern)
    nodes: Vec<Node>,

    /// Index of the root of this tree
    root_index: NodeIndex,

    /// Out-of-bag error of this tree; set when assembled into a forest
    oob_error: Option<f64>,
}

// ============================================================================
// New, Getters / Accessors, etc. (pub)
// ============================================================================
impl DecisionTree {
    /// Creates a new empty tree with space for `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        DecisionTree {
            nodes: Vec::with_capacity(capacity),
            root_index: NO_ROOT_SET_INDEX,
            oob_error: None,
        }
    }

    /// Adds an internal node without children, returning its index.
    ///
    /// # Arguments
    /// * `depth` - Distance to the root
    /// * `samples` - Number of samples reaching this node
    /// * `impurity` - Impurity at this node
    /// * `impurity_drop` - Impurity reduction of the split
    /// * `split` - Opaque split metadata
    pub fn add_internal(
        &mut self,
        depth: usize,
        samples: u64,
        impurity: f64,
        impurity_drop: f64,
        split: SplitFields,
    ) -> NodeIndex {
        let index = self.nodes.len();
        self.nodes.push(Node::new_internal(
            index,
            depth,
            samples,
            impurity,
            impurity_drop,
            split,
        ));
        index
    }

    /// Adds a leaf, returning its index.
    ///
    /// # Arguments
    /// * `depth` - Distance to the root
    /// * `samples` - Number of samples reaching this leaf
    /// * `impurity` - Impurity at this leaf
    /// * `leaf_id` - Identifier of this leaf within the tree
    /// * `classes` - Sample count per class
    pub fn add_leaf(
        &mut self,
        depth: usize,
        samples: u64,
        impurity: f64,
        leaf_id: u32,
        classes: Vec<u64>,
    ) -> NodeIndex {
        let index = self.nodes.len();
        self.nodes
            .push(Node::new_leaf(index, depth, samples, impurity, leaf_id, classes));
        index
    }

    /// Attaches `child` as next child of `parent` and sets its parent index.
    ///
    /// # Returns
    /// `false` (leaving the tree untouched) if `parent` is a leaf or
    /// already has two children, `true` otherwise.
    ///
    /// # Panics
    /// Panics if either index is out of bounds.
    pub fn attach_child(&mut self, parent: NodeIndex, child: NodeIndex) -> bool {
        if !self.nodes[parent].push_child(child) {
            return false;
        }
        self.nodes[child].set_parent(parent);
        true
    }

    /// Marks the node at `index` as root.
    pub fn set_root(&mut self, index: NodeIndex) {
        self.root_index = index;
    }

    /// Returns whether root of tree has been set.
    pub fn is_root_set(&self) -> bool {
        self.root_index != NO_ROOT_SET_INDEX
    }

    /// Returns a reference to the root node.
    ///
    /// # Panics
    /// Panics if the root hasn't been set and thus tree hasn't been fully constructed yet.
    pub fn root(&self) -> &Node {
        &self[self.root_index]
    }

    /// Returns the index of the root.
    pub fn root_index(&self) -> NodeIndex {
        self.root_index
    }

    /// Returns a reference to the node at the given index.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    pub fn node(&self, index: NodeIndex) -> &Node {
        &self[index]
    }

    /// Returns a mutable reference to the node at the given index.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    pub fn node_mut(&mut self, index: NodeIndex) -> &mut Node {
        &mut self.nodes[index]
    }

    /// Returns all nodes in arena order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Returns all nodes in arena order, mutably.
    pub(crate) fn nodes_mut(&mut self) -> &mut [Node] {
        &mut self.nodes
    }

    /// Returns the out-of-bag error, if known.
    pub fn oob_error(&self) -> Option<f64> {
        self.oob_error
    }

    /// Sets the out-of-bag error of this tree.
    pub fn set_oob_error(&mut self, oob_error: f64) {
        self.oob_error = Some(oob_error);
    }

    /// Returns the number of leaves in this tree.
    pub fn num_leaves(&self) -> usize {
        self.nodes.iter().filter(|&n| n.is_leaf()).count()
    }

    /// Returns the number of internal nodes in this tree.
    pub fn num_internal(&self) -> usize {
        self.nodes.iter().filter(|&n| n.is_internal()).count()
    }

    /// Returns the number of nodes in this tree.
    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    /// Returns the largest node depth, i.e. 0 for a single-node tree.
    pub fn max_depth(&self) -> usize {
        self.nodes.iter().map(Node::depth).max().unwrap_or(0)
    }

    /// Returns the index of the leaf with the given id, if any.
    pub fn find_leaf(&self, leaf_id: u32) -> Option<NodeIndex> {
        self.nodes
            .iter()
            .find(|n| n.leaf_id() == Some(leaf_id))
            .map(Node::index)
    }

    /// Returns an iterator over the leaves of this tree in arena order.
    pub fn leaves(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter().filter(|n| n.is_leaf())
    }

    /// Returns an iterator from the node at `index` up to the root
    /// (both included), following parent indices.
    pub fn ancestors(&self, index: NodeIndex) -> Ancestors<'_> {
        Ancestors {
            tree: self,
            next: Some(index),
        }
    }

    /// Returns an iterator over the tree in pre-order (parents before children),
    /// children visited in parse order.
    ///
    /// # Example
    /// ```
    /// use arborist::statistics::parse_statistics;
    ///
    /// let text = "H1\nH2\n0;10;0.5;0.1;a;b;c;d;e;f;g\n1;4;0.0;0;1;4\n1;6;0.0;1;1;6\n";
    /// let tree = parse_statistics(text).unwrap();
    /// let depths: Vec<_> = tree.pre_order_iter().map(|n| n.depth()).collect();
    /// assert_eq!(depths, vec![0, 1, 1]);
    /// ```
    pub fn pre_order_iter(&self) -> PreOrderIter<'_> {
        PreOrderIter::new(self)
    }
}

impl DecisionTree {
    /// Validates the tree structure and all index references.
    ///
    /// Checks:
    /// - Root index is valid and the root has no parent
    /// - All node indices match their position in the arena
    /// - All child indices are valid and point back to correct parent
    /// - All parent indices are valid and include this node as a child
    /// - Child depth is parent depth plus one
    /// - Leaves have a best class within their class counts
    ///
    /// # Returns
    /// `true` if tree is valid, `false` otherwise
    pub fn is_valid(&self) -> bool {
        if self.root_index >= self.nodes.len() {
            return false;
        }

        if !self.nodes[self.root_index].is_root() {
            return false;
        }

        for (index, node) in self.nodes.iter().enumerate() {
            if node.index() != index {
                return false;
            }

            // Children point back to this node
            if let Some(children) = node.children() {
                for &child in children {
                    if child >= self.nodes.len()
                        || self.nodes[child].parent() != Some(index)
                        || self.nodes[child].depth() != node.depth() + 1
                    {
                        return false;
                    }
                }
            }

            // Parent includes this node
            match node.parent() {
                None => {
                    if index != self.root_index {
                        return false;
                    }
                }
                Some(parent) => {
                    if parent >= self.nodes.len() {
                        return false;
                    }
                    let listed = self.nodes[parent]
                        .children()
                        .is_some_and(|c| c.contains(&index));
                    if !listed {
                        return false;
                    }
                }
            }

            if let Node::Leaf {
                classes, best_class, ..
            } = node
            {
                if !classes.is_empty() && *best_class >= classes.len() {
                    return false;
                }
            }
        }

        true
    }
}

impl std::ops::Index<NodeIndex> for DecisionTree {
    type Output = Node;

    fn index(&self, index: NodeIndex) -> &Self::Output {
        &self.nodes[index]
    }
}

impl std::ops::IndexMut<NodeIndex> for DecisionTree {
    fn index_mut(&mut self, index: NodeIndex) -> &mut Self::Output {
        &mut self.nodes[index]
    }
}

// =#========================================================================#=
// ITERATORS
// =#========================================================================#=
/// Iterator for pre-order traversal (parents before children).
///
/// This iterator uses a stack-based approach to traverse the tree without recursion.
/// Each node is visited before any of its descendants.
pub struct PreOrderIter<'a> {
    tree: &'a DecisionTree,
    stack: Vec<NodeIndex>,
}

impl<'a> PreOrderIter<'a> {
    fn new(tree: &'a DecisionTree) -> Self {
        let mut stack = Vec::new();
        if tree.is_root_set() {
            stack.push(tree.root_index);
        }
        PreOrderIter { tree, stack }
    }
}

impl<'a> Iterator for PreOrderIter<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.stack.pop()?;
        let node = &self.tree[index];

        if let Some(children) = node.children() {
            for &child in children.iter().rev() {
                self.stack.push(child);
            }
        }

        Some(node)
    }
}

/// Iterator walking parent indices up to the root.
///
/// Created by [DecisionTree::ancestors].
pub struct Ancestors<'a> {
    tree: &'a DecisionTree,
    next: Option<NodeIndex>,
}

impl<'a> Iterator for Ancestors<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        let node = &self.tree[self.next?];
        self.next = node.parent();
        Some(node)
    }
}
