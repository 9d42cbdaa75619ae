//! Rendering parameters of the layout engine.

use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;

/// Default length of the root branch in pixels
pub const DEFAULT_TRUNK_LENGTH: f64 = 100.0;

/// Default canvas width in pixels
pub const DEFAULT_WIDTH: f64 = 800.0;

/// Default canvas height in pixels
pub const DEFAULT_HEIGHT: f64 = 600.0;

/// Default upper bound of a child branch length relative to its parent
pub const DEFAULT_MAX_SHORTENING_FACTOR: f64 = 0.9;

/// Default lower bound of any branch length in pixels
pub const DEFAULT_MIN_BRANCH_LENGTH: f64 = 4.0;

/// How the two children of a node are assigned to the left and right side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BranchStrategy {
    /// First child in parse order goes left, second goes right.
    #[default]
    Simple,
    /// Children are swapped depending on which one holds the majority of
    /// samples and on which side of vertical the current branch points.
    /// The first child stays left if it holds at least half the samples
    /// exactly when the branch leans left (angle < 0).
    Up,
}

/// Parameters of a layout pass.
///
/// Deserializes from JSON with missing fields taking their defaults,
/// e.g. `{"max_depth": 5, "branch_strategy": "UP"}`.
///
/// # Example
/// ```
/// use arborist::layout::{BranchStrategy, LayoutConfig};
/// use std::num::NonZeroUsize;
///
/// let config = LayoutConfig::default()
///     .with_canvas(400.0, 300.0)
///     .with_max_depth(NonZeroUsize::new(4).unwrap())
///     .with_branch_strategy(BranchStrategy::Up);
/// assert_eq!(config.trunk_length, 100.0);
///
/// let from_json = LayoutConfig::from_json(
///     r#"{"width": 400, "height": 300, "max_depth": 4, "branch_strategy": "UP"}"#,
/// ).unwrap();
/// assert_eq!(from_json, config);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Nodes at depth `max_depth - 1` are drawn as bunches; `None` draws all
    pub max_depth: Option<NonZeroUsize>,
    /// Length of the root branch in pixels
    pub trunk_length: f64,
    /// Canvas width in pixels; the root sits at its horizontal center
    pub width: f64,
    /// Canvas height in pixels; the root sits at the bottom edge
    pub height: f64,
    /// Assignment of children to sides
    pub branch_strategy: BranchStrategy,
    /// Upper bound of a child branch length relative to its parent
    pub max_shortening_factor: f64,
    /// Lower bound of any non-root branch length in pixels
    pub min_branch_length: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            max_depth: None,
            trunk_length: DEFAULT_TRUNK_LENGTH,
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            branch_strategy: BranchStrategy::default(),
            max_shortening_factor: DEFAULT_MAX_SHORTENING_FACTOR,
            min_branch_length: DEFAULT_MIN_BRANCH_LENGTH,
        }
    }
}

impl LayoutConfig {
    /// Parses a config from JSON; absent fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Truncates drawing at the given depth.
    pub fn with_max_depth(mut self, max_depth: NonZeroUsize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }

    /// Draws the full tree.
    pub fn without_max_depth(mut self) -> Self {
        self.max_depth = None;
        self
    }

    /// Sets the length of the root branch.
    pub fn with_trunk_length(mut self, trunk_length: f64) -> Self {
        self.trunk_length = trunk_length;
        self
    }

    /// Sets the canvas size.
    pub fn with_canvas(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Sets the strategy assigning children to sides.
    pub fn with_branch_strategy(mut self, branch_strategy: BranchStrategy) -> Self {
        self.branch_strategy = branch_strategy;
        self
    }

    /// Sets the upper bound of a child branch length relative to its parent.
    pub fn with_max_shortening_factor(mut self, factor: f64) -> Self {
        self.max_shortening_factor = factor;
        self
    }

    /// Sets the lower bound of non-root branch lengths.
    pub fn with_min_branch_length(mut self, min_branch_length: f64) -> Self {
        self.min_branch_length = min_branch_length;
        self
    }

    /// Returns whether a node at `depth` is the last one drawn on its path.
    pub(crate) fn is_cut_off(&self, depth: usize) -> bool {
        self.max_depth.is_some_and(|max| depth + 1 >= max.get())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_json_is_default() {
        assert_eq!(LayoutConfig::from_json("{}").unwrap(), LayoutConfig::default());
    }

    #[test]
    fn zero_max_depth_is_rejected() {
        assert!(LayoutConfig::from_json(r#"{"max_depth": 0}"#).is_err());
    }

    #[test]
    fn unknown_strategy_is_rejected() {
        assert!(LayoutConfig::from_json(r#"{"branch_strategy": "SIDEWAYS"}"#).is_err());
    }

    #[test]
    fn cut_off_depth() {
        let config = LayoutConfig::default().with_max_depth(NonZeroUsize::new(3).unwrap());
        assert!(!config.is_cut_off(1));
        assert!(config.is_cut_off(2));
        assert!(!LayoutConfig::default().is_cut_off(1000));
    }
}
