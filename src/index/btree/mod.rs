mod node;
mod error;
mod tree;

pub use node::BTreeNode;
pub use error::{BTreeError, Result};
pub use tree::{BTree, LevelOrder, Location, NodeSnapshot, SearchResult};
