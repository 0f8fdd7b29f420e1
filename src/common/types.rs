/// Key type stored in the tree
pub type Key = i64;

/// Index of a child within its parent's `children`
pub type ChildIndex = usize;
