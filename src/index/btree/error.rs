use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BTreeError {
    /// An underflowing node had neither a left nor a right sibling. This can only
    /// happen if the tree was already corrupt; the operation is aborted.
    #[error("Underflowing node at depth {depth} (child {child_index}) has no sibling to borrow from or merge with")]
    MissingSibling { depth: usize, child_index: usize },

    #[error("Invariant violation: {0}")]
    InvariantViolation(String),
}

/// Result type for B-tree operations
pub type Result<T> = std::result::Result<T, BTreeError>;
