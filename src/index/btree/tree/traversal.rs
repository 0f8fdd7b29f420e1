use std::collections::VecDeque;
use std::fmt;

use serde::Serialize;

use crate::common::types::Key;
use crate::index::btree::node::BTreeNode;
use super::base::BTree;

/// Owned description of one node, as produced by [`BTree::render`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NodeSnapshot {
    pub depth: usize,
    pub keys: Vec<Key>,
    pub is_leaf: bool,
    pub child_count: usize,
}

/// Breadth-first iterator over the nodes of a tree, yielding `(depth, node)`
pub struct LevelOrder<'a> {
    queue: VecDeque<(usize, &'a BTreeNode)>,
}

impl<'a> Iterator for LevelOrder<'a> {
    type Item = (usize, &'a BTreeNode);

    fn next(&mut self) -> Option<Self::Item> {
        let (depth, node) = self.queue.pop_front()?;
        self.queue.extend(node.children.iter().map(|child| (depth + 1, child)));
        Some((depth, node))
    }
}

impl BTree {
    /// Level-order walk starting at the root
    pub fn level_order(&self) -> LevelOrder<'_> {
        LevelOrder { queue: VecDeque::from([(0, &self.root)]) }
    }

    /// Level-order dump of every node
    pub fn render(&self) -> Vec<NodeSnapshot> {
        self.level_order()
            .map(|(depth, node)| NodeSnapshot {
                depth,
                keys: node.keys.clone(),
                is_leaf: node.is_leaf(),
                child_count: node.children.len(),
            })
            .collect()
    }

    /// All keys in ascending order
    pub fn keys(&self) -> Vec<Key> {
        let mut keys = Vec::with_capacity(self.len);
        self.root.collect_keys(&mut keys);
        keys
    }

    /// Number of nodes at each level, root first
    pub fn level_sizes(&self) -> Vec<usize> {
        let mut sizes = Vec::new();
        for (depth, _) in self.level_order() {
            if depth == sizes.len() {
                sizes.push(0);
            }
            sizes[depth] += 1;
        }
        sizes
    }
}

/// One line per level: `level 1: [1, 2] [4, 5] [7, 8]`
impl fmt::Display for BTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut current = None;
        for (depth, node) in self.level_order() {
            if current != Some(depth) {
                if current.is_some() {
                    writeln!(f)?;
                }
                write!(f, "level {}:", depth)?;
                current = Some(depth);
            }
            write!(f, " {:?}", node.keys)?;
        }
        Ok(())
    }
}
