// Ordtree: an in-memory order-5 B-tree over integer keys

pub mod common;
pub mod index;

// Re-export key items for convenient access
pub use common::config::{TreeConfig, MAX_KEYS, MIN_KEYS};
pub use common::types::Key;
pub use index::btree::{BTree, BTreeError, BTreeNode, Location, NodeSnapshot, SearchResult};
