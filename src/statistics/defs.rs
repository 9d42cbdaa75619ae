//! Constants for the tree statistics format.

/// Number of leading header lines in a tree dump, discarded
pub(crate) const NUM_HEADER_LINES: usize = 2;

/// Field separator within a node record
pub(crate) const FIELD_SEPARATOR: char = ';';

/// Separator of the per-class counts within a leaf record
pub(crate) const CLASS_SEPARATOR: char = ',';

/// Number of fields of an internal node record
pub(crate) const INTERNAL_NUM_FIELDS: usize = 11;

/// Number of fields of a leaf record
pub(crate) const LEAF_NUM_FIELDS: usize = 6;

/// Position of the first pass-through field of an internal node record
pub(crate) const FIRST_SPLIT_FIELD: usize = 4;
