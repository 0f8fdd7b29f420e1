use std::fmt;

use log::debug;

use crate::common::config::TreeConfig;
use crate::common::types::{ChildIndex, Key};
use crate::index::btree::node::BTreeNode;

/// In-memory B-tree over integer keys
///
/// The tree owns its root; every other node is owned by its parent. Nodes carry
/// no back-references, so upward fix-ups walk the root-to-leaf path of child
/// indices recorded by [`BTree::search`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BTree {
    pub(crate) root: BTreeNode,
    pub(crate) config: TreeConfig,
    pub(crate) len: usize,
}

/// Where a search stopped
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    path: Vec<ChildIndex>,
    key_index: Result<usize, usize>,
}

impl Location {
    /// Child indices from the root down to the node the search stopped at
    pub fn path(&self) -> &[ChildIndex] {
        &self.path
    }

    /// Index of the node among its parent's children, `None` for the root
    pub fn child_index(&self) -> Option<ChildIndex> {
        self.path.last().copied()
    }

    /// Depth of the node the search stopped at (root is 0)
    pub fn depth(&self) -> usize {
        self.path.len()
    }

    /// Index of the matching key, if found
    pub fn key_index(&self) -> Option<usize> {
        self.key_index.ok()
    }

    /// Position the key would occupy in the leaf, if not found
    pub fn insertion_point(&self) -> Option<usize> {
        self.key_index.err()
    }

    pub(crate) fn into_parts(self) -> (Vec<ChildIndex>, Result<usize, usize>) {
        (self.path, self.key_index)
    }
}

/// Result of [`BTree::search`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    pub found: bool,
    pub location: Location,
}

impl BTree {
    /// Create an empty tree with default (quiet) configuration
    pub fn new() -> Self {
        Self::with_config(TreeConfig::default())
    }

    /// Create an empty tree; the root is an empty leaf
    pub fn with_config(config: TreeConfig) -> Self {
        Self {
            root: BTreeNode::new_leaf(),
            config,
            len: 0,
        }
    }

    pub fn config(&self) -> TreeConfig {
        self.config
    }

    pub fn root(&self) -> &BTreeNode {
        &self.root
    }

    /// Number of keys stored
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of levels; a tree whose root is a leaf has height 1
    pub fn height(&self) -> usize {
        let mut height = 1;
        let mut node = &self.root;
        while let Some(first) = node.children.first() {
            height += 1;
            node = first;
        }
        height
    }

    /// Remove every key, keeping the configuration
    pub fn clear(&mut self) {
        self.root = BTreeNode::new_leaf();
        self.len = 0;
    }

    /// Descend from the root looking for `key`.
    ///
    /// At each node the first key >= `key` is located; an exact match stops the
    /// search, otherwise it continues into the child left of that key until a
    /// leaf is reached.
    pub fn search(&self, key: Key) -> SearchResult {
        let mut path = Vec::new();
        let mut node = &self.root;

        loop {
            let key_index = node.find_key_index(key);
            match key_index {
                Ok(i) => {
                    self.trace(format_args!("search {}: found at depth {} key index {}", key, path.len(), i));
                    return SearchResult { found: true, location: Location { path, key_index } };
                }
                Err(_) if node.is_leaf() => {
                    self.trace(format_args!("search {}: not found, stopped at leaf {:?}", key, node.keys));
                    return SearchResult { found: false, location: Location { path, key_index } };
                }
                Err(i) => {
                    self.trace(format_args!("search {}: descend from {:?} into child {}", key, node.keys, i));
                    path.push(i);
                    node = &node.children[i];
                }
            }
        }
    }

    pub fn contains(&self, key: Key) -> bool {
        self.search(key).found
    }

    /// Node reached by following `path` from the root
    pub fn node_at(&self, path: &[ChildIndex]) -> Option<&BTreeNode> {
        path.iter()
            .try_fold(&self.root, |node, &i| node.children.get(i))
    }

    /// Paths handed to this are always produced by a search on the current tree
    pub(crate) fn node_at_mut(&mut self, path: &[ChildIndex]) -> &mut BTreeNode {
        let mut node = &mut self.root;
        for &i in path {
            node = &mut node.children[i];
        }
        node
    }

    pub(crate) fn trace(&self, args: fmt::Arguments<'_>) {
        if self.config.trace {
            debug!("{}", args);
        }
    }
}

impl Extend<Key> for BTree {
    fn extend<I: IntoIterator<Item = Key>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl FromIterator<Key> for BTree {
    fn from_iter<I: IntoIterator<Item = Key>>(iter: I) -> Self {
        let mut tree = BTree::new();
        tree.extend(iter);
        tree
    }
}
