use log::info;

use crate::common::types::{ChildIndex, Key};
use crate::index::btree::error::{BTreeError, Result};
use super::base::BTree;

impl BTree {
    /// Remove a key from the tree.
    ///
    /// Returns `Ok(false)` if the key was not present. A key held by an internal
    /// node is replaced by its in-order predecessor, so keys are only ever
    /// physically removed from leaves. Underflow is repaired bottom-up by
    /// borrowing from or merging with a sibling.
    ///
    /// `MissingSibling` is only possible on a tree that was already corrupt. It
    /// is raised mid-repair, after the key has been removed, so the tree is left
    /// in its partially rebalanced state and should be discarded.
    pub fn delete(&mut self, key: Key) -> Result<bool> {
        if self.config.verbose {
            info!("before delete {}:\n{}", key, self);
        }

        let search = self.search(key);
        let (path, key_index) = search.location.into_parts();
        let Ok(key_index) = key_index else {
            self.trace(format_args!("delete {}: not present", key));
            return Ok(false);
        };

        let leaf_path = if self.node_at_mut(&path).is_leaf() {
            self.node_at_mut(&path).remove_from_leaf(key_index);
            self.trace(format_args!("delete {}: removed from leaf at depth {}", key, path.len()));
            path
        } else {
            self.replace_with_predecessor(path, key_index)?
        };
        self.len -= 1;

        self.rebalance_upward(leaf_path)?;

        if self.config.verbose {
            info!("after delete {}:\n{}", key, self);
        }
        Ok(true)
    }

    /// Overwrite `keys[key_index]` of the internal node at `path` with its in-order
    /// predecessor, removing the predecessor from its leaf.
    /// Returns the path to that leaf.
    fn replace_with_predecessor(&mut self, path: Vec<ChildIndex>, key_index: usize) -> Result<Vec<ChildIndex>> {
        let mut leaf_path = path.clone();
        leaf_path.extend(self.node_at_mut(&path).predecessor_path(key_index));

        let predecessor = self.node_at_mut(&leaf_path).pop_last_key().ok_or_else(|| {
            BTreeError::InvariantViolation(format!("empty leaf at depth {}", leaf_path.len()))
        })?;

        let replaced = std::mem::replace(&mut self.node_at_mut(&path).keys[key_index], predecessor);
        self.trace(format_args!(
            "delete {}: internal key at depth {} replaced by predecessor {} from leaf at depth {}",
            replaced, path.len(), predecessor, leaf_path.len()
        ));

        Ok(leaf_path)
    }

    /// Walk from the node at `path` toward the root, repairing underflow until a
    /// level is left within bounds. An emptied internal root collapses into its
    /// only child.
    fn rebalance_upward(&mut self, mut path: Vec<ChildIndex>) -> Result<()> {
        while let Some(child_index) = path.pop() {
            let depth = path.len() + 1;
            let outcome = {
                let parent = self.node_at_mut(&path);
                if !parent.children[child_index].is_underflow() {
                    break;
                }
                parent.rebalance_child(child_index)
            };

            let Some(outcome) = outcome else {
                return Err(BTreeError::MissingSibling { depth, child_index });
            };
            self.trace(format_args!("rebalance child {} at depth {}: {:?}", child_index, depth, outcome));

            if !outcome.shrinks_parent() {
                break;
            }
        }

        self.collapse_root();
        Ok(())
    }

    fn collapse_root(&mut self) {
        if !self.root.keys.is_empty() || self.root.children.len() != 1 {
            return;
        }
        if let Some(child) = self.root.children.pop() {
            self.trace(format_args!("collapse root: new root {:?}", child.keys));
            self.root = child;
        }
    }
}
