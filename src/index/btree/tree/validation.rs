use crate::common::config::{MAX_KEYS, MIN_KEYS};
use crate::common::types::Key;
use crate::index::btree::error::{BTreeError, Result};
use crate::index::btree::node::BTreeNode;
use super::base::BTree;

/// Running state for a validation walk
struct Checker {
    leaf_depth: Option<usize>,
    key_count: usize,
}

impl BTree {
    /// Check every structural invariant: sorted unique keys, keys partitioning
    /// children, leaves at equal depth, occupancy bounds for non-root nodes and
    /// the stored key count.
    pub fn validate(&self) -> Result<()> {
        let mut checker = Checker { leaf_depth: None, key_count: 0 };
        checker.check(&self.root, 0, None, None)?;

        if checker.key_count != self.len {
            return Err(violation(format!(
                "tree reports {} keys but holds {}",
                self.len, checker.key_count
            )));
        }
        Ok(())
    }
}

impl Checker {
    fn check(&mut self, node: &BTreeNode, depth: usize, lower: Option<Key>, upper: Option<Key>) -> Result<()> {
        let keys = &node.keys;

        if keys.len() > MAX_KEYS {
            return Err(violation(format!("node {:?} at depth {} exceeds {} keys", keys, depth, MAX_KEYS)));
        }
        if depth > 0 && keys.len() < MIN_KEYS {
            return Err(violation(format!("node {:?} at depth {} has fewer than {} keys", keys, depth, MIN_KEYS)));
        }
        if keys.windows(2).any(|pair| pair[0] >= pair[1]) {
            return Err(violation(format!("keys {:?} at depth {} are not strictly increasing", keys, depth)));
        }
        if let (Some(low), Some(&first)) = (lower, keys.first()) {
            if first <= low {
                return Err(violation(format!("key {} at depth {} is not above separator {}", first, depth, low)));
            }
        }
        if let (Some(high), Some(&last)) = (upper, keys.last()) {
            if last >= high {
                return Err(violation(format!("key {} at depth {} is not below separator {}", last, depth, high)));
            }
        }
        self.key_count += keys.len();

        if node.is_leaf() {
            return match self.leaf_depth {
                None => {
                    self.leaf_depth = Some(depth);
                    Ok(())
                }
                Some(expected) if expected == depth => Ok(()),
                Some(expected) => Err(violation(format!(
                    "leaf {:?} at depth {} but other leaves are at depth {}",
                    keys, depth, expected
                ))),
            };
        }

        if node.children.len() != keys.len() + 1 {
            return Err(violation(format!(
                "internal node {:?} at depth {} has {} children",
                keys, depth, node.children.len()
            )));
        }

        for (i, child) in node.children.iter().enumerate() {
            let child_lower = if i == 0 { lower } else { Some(keys[i - 1]) };
            let child_upper = keys.get(i).copied().or(upper);
            self.check(child, depth + 1, child_lower, child_upper)?;
        }
        Ok(())
    }
}

fn violation(message: String) -> BTreeError {
    BTreeError::InvariantViolation(message)
}
