mod base;
mod operations;
mod deletion;
mod traversal;
mod validation;

pub use base::{BTree, Location, SearchResult};
pub use traversal::{LevelOrder, NodeSnapshot};
