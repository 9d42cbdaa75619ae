//! Reconstruction of a tree from its pre-order depth sequence.
//!
//! Tree dumps list nodes in pre-order with their depth. The
//! [TreeAssembler] keeps a stack of currently open ancestors where the
//! entry at position `i` always has depth `i`. For each new node with
//! depth `d` and stack top at depth `t`:
//!
//! | Case        | Meaning                   | Stack change          |
//! |-------------|---------------------------|-----------------------|
//! | `d == t+1`  | child of the top          | none                  |
//! | `d == t`    | sibling of the top        | pop                   |
//! | `d < t`     | one or more subtrees done | truncate to length `d`|
//! | `d > t+1`   | depth gap                 | structural error      |
//!
//! Afterwards the node is attached to the new top and pushed.

use crate::model::{DecisionTree, NodeIndex};
use crate::parser::line_parser::LineParser;
use crate::parser::parsing_error::ParsingError;
use crate::statistics::parser::NodeRecord;

/// Default guess for number of nodes, when unknown
const DEFAULT_NUM_NODES_GUESS: usize = 64;

/// Stack-based builder turning [NodeRecord]s in pre-order into a [DecisionTree].
pub(crate) struct TreeAssembler {
    tree: DecisionTree,
    /// Open ancestors; `stack[i]` has depth `i`
    stack: Vec<NodeIndex>,
}

impl TreeAssembler {
    pub(crate) fn new() -> Self {
        Self {
            tree: DecisionTree::with_capacity(DEFAULT_NUM_NODES_GUESS),
            stack: Vec::new(),
        }
    }

    /// Adds the next record in pre-order.
    ///
    /// The `parser` is only used to attach position and context to errors.
    pub(crate) fn add(
        &mut self,
        record: NodeRecord,
        parser: &LineParser,
    ) -> Result<(), ParsingError> {
        let depth = record.depth();

        // First record is the root
        if !self.tree.is_root_set() {
            if depth != 0 {
                return Err(ParsingError::structural(
                    parser,
                    format!("Root must have depth 0 but has depth {}", depth),
                ));
            }
            let root = self.insert(record);
            self.tree.set_root(root);
            self.stack.push(root);
            return Ok(());
        }

        let Some(&latest) = self.stack.last() else {
            return Err(ParsingError::structural(
                parser,
                "Node after the root's subtree was closed".to_string(),
            ));
        };
        let latest_depth = self.tree[latest].depth();

        if depth == latest_depth + 1 {
            // Child of latest
        } else if depth == latest_depth {
            self.stack.pop();
        } else if depth < latest_depth {
            self.stack.truncate(depth);
        } else {
            return Err(ParsingError::structural(
                parser,
                format!(
                    "Depth jumps from {} to {}; expected at most {}",
                    latest_depth,
                    depth,
                    latest_depth + 1
                ),
            ));
        }

        let Some(&parent) = self.stack.last() else {
            return Err(ParsingError::structural(
                parser,
                "Second node at depth 0; a tree has exactly one root".to_string(),
            ));
        };

        let index = self.insert(record);
        if !self.tree.attach_child(parent, index) {
            let msg = if self.tree[parent].is_leaf() {
                format!("Node at depth {} would be a child of a leaf", depth)
            } else {
                format!("Node at depth {} would be a third child", depth)
            };
            return Err(ParsingError::structural(parser, msg));
        }
        self.stack.push(index);

        Ok(())
    }

    /// Returns the assembled tree, or `None` if no record was added.
    pub(crate) fn finish(self) -> Option<DecisionTree> {
        if self.tree.is_root_set() {
            Some(self.tree)
        } else {
            None
        }
    }

    fn insert(&mut self, record: NodeRecord) -> NodeIndex {
        match record {
            NodeRecord::Internal {
                depth,
                samples,
                impurity,
                impurity_drop,
                split,
            } => self
                .tree
                .add_internal(depth, samples, impurity, impurity_drop, split),
            NodeRecord::Leaf {
                depth,
                samples,
                impurity,
                leaf_id,
                classes,
            } => self.tree.add_leaf(depth, samples, impurity, leaf_id, classes),
        }
    }
}
