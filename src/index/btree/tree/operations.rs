use log::info;

use crate::common::types::{ChildIndex, Key};
use crate::index::btree::node::BTreeNode;
use super::base::BTree;

impl BTree {
    /// Insert a key into the tree.
    ///
    /// Duplicate keys are rejected: returns false and leaves the tree untouched
    /// if `key` is already present.
    pub fn insert(&mut self, key: Key) -> bool {
        let search = self.search(key);
        let (path, key_index) = search.location.into_parts();
        let pos = match key_index {
            Ok(_) => {
                self.trace(format_args!("insert {}: already present, rejected", key));
                if self.config.verbose {
                    info!("insert {} rejected as duplicate, tree unchanged", key);
                }
                return false;
            }
            Err(pos) => pos,
        };

        if self.config.verbose {
            info!("before insert {}:\n{}", key, self);
        }

        // A miss always stops at a leaf
        let needs_split = self.node_at_mut(&path).insert_into_leaf(pos, key);
        self.len += 1;
        self.trace(format_args!("insert {}: placed in leaf at depth {} position {}", key, path.len(), pos));

        if needs_split {
            self.split_upward(&path);
        }

        if self.config.verbose {
            info!("after insert {}:\n{}", key, self);
        }
        true
    }

    /// Relieve overflow starting at the node `path` leads to, one level at a time
    fn split_upward(&mut self, path: &[ChildIndex]) {
        for depth in (0..path.len()).rev() {
            let child_index = path[depth];
            let median = {
                let parent = self.node_at_mut(&path[..depth]);
                if !parent.children[child_index].is_overflow() {
                    return;
                }
                parent.split_child(child_index)
            };
            self.trace(format_args!(
                "split child {} at depth {}: promoted {} into parent",
                child_index, depth + 1, median
            ));
        }

        if self.root.is_overflow() {
            self.split_root();
        }
    }

    /// Replace an overflowing root with a new internal root holding its median
    fn split_root(&mut self) {
        let mut left = std::mem::take(&mut self.root);
        let (median, right) = left.split();

        self.trace(format_args!(
            "split root: new root [{}] over {:?} and {:?}",
            median, left.keys, right.keys
        ));
        self.root = BTreeNode::new_internal(vec![median], vec![left, right]);
    }
}
