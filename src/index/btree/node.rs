use crate::common::config::{MAX_KEYS, MIN_KEYS};
use crate::common::types::{ChildIndex, Key};

/// B-tree node
/// - Keys are strictly increasing
/// - Internal nodes own `keys.len() + 1` children; leaves own none
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BTreeNode {
    pub(crate) keys: Vec<Key>,
    pub(crate) children: Vec<BTreeNode>,
}

/// How an underflowing child was repaired
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Rebalance {
    BorrowedLeft,
    BorrowedRight,
    MergedLeft,
    MergedRight,
}

impl Rebalance {
    /// A merge removes a key from the parent, which may now underflow itself
    pub(crate) fn shrinks_parent(self) -> bool {
        matches!(self, Rebalance::MergedLeft | Rebalance::MergedRight)
    }
}

impl BTreeNode {
    pub fn new_leaf() -> Self {
        Self::default()
    }

    pub(crate) fn new_internal(keys: Vec<Key>, children: Vec<BTreeNode>) -> Self {
        debug_assert_eq!(keys.len() + 1, children.len());
        Self { keys, children }
    }

    pub fn keys(&self) -> &[Key] {
        &self.keys
    }

    pub fn children(&self) -> &[BTreeNode] {
        &self.children
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Find the first key >= `key`.
    /// `Ok(i)` on an exact match, otherwise `Err(i)` where `i` is also the child to descend into.
    pub fn find_key_index(&self, key: Key) -> Result<usize, usize> {
        self.keys.binary_search(&key)
    }

    pub fn is_overflow(&self) -> bool {
        self.keys.len() > MAX_KEYS
    }

    pub fn is_underflow(&self) -> bool {
        self.keys.len() < MIN_KEYS
    }

    /// Insert a key into a leaf at its sorted position.
    /// Returns true if the leaf now needs to be split.
    pub(crate) fn insert_into_leaf(&mut self, pos: usize, key: Key) -> bool {
        debug_assert!(self.is_leaf(), "insert_into_leaf called on internal node");
        debug_assert!(pos == 0 || self.keys[pos - 1] < key);
        debug_assert!(pos == self.keys.len() || key < self.keys[pos]);

        self.keys.insert(pos, key);
        self.is_overflow()
    }

    /// Split this node around its median key.
    /// `self` keeps the left half; the median and the new right half are returned.
    pub(crate) fn split(&mut self) -> (Key, BTreeNode) {
        let mid = self.keys.len() / 2;

        let right_keys = self.keys.split_off(mid + 1);
        // split_off(mid + 1) leaves the median as the last key on the left
        let median = self.keys.remove(mid);

        let right_children = if self.is_leaf() {
            Vec::new()
        } else {
            self.children.split_off(mid + 1)
        };

        (median, BTreeNode { keys: right_keys, children: right_children })
    }

    /// Split the overflowing child at `child_index`, promoting its median into this node.
    /// Returns the promoted key.
    pub(crate) fn split_child(&mut self, child_index: ChildIndex) -> Key {
        let (median, right) = self.children[child_index].split();

        self.keys.insert(child_index, median);
        self.children.insert(child_index + 1, right);

        median
    }

    /// Child indices leading from this node to the leaf holding the in-order
    /// predecessor of `keys[key_index]`: the left child, then rightmost children.
    pub(crate) fn predecessor_path(&self, key_index: usize) -> Vec<ChildIndex> {
        debug_assert!(!self.is_leaf(), "predecessor_path called on leaf node");

        let mut path = vec![key_index];
        let mut node = &self.children[key_index];
        while !node.is_leaf() {
            let last = node.children.len() - 1;
            path.push(last);
            node = &node.children[last];
        }
        path
    }

    pub(crate) fn remove_from_leaf(&mut self, key_index: usize) -> Key {
        debug_assert!(self.is_leaf(), "remove_from_leaf called on internal node");
        self.keys.remove(key_index)
    }

    pub(crate) fn pop_last_key(&mut self) -> Option<Key> {
        self.keys.pop()
    }

    /// Repair the underflowing child at `child_index` by borrowing from a sibling
    /// that can spare a key, or by merging with a sibling otherwise.
    /// Returns `None` if the child has no sibling at all.
    pub(crate) fn rebalance_child(&mut self, child_index: ChildIndex) -> Option<Rebalance> {
        let has_left = child_index > 0;
        let has_right = child_index + 1 < self.children.len();

        if has_left && self.children[child_index - 1].keys.len() > MIN_KEYS {
            self.borrow_from_left(child_index);
            Some(Rebalance::BorrowedLeft)
        } else if has_right && self.children[child_index + 1].keys.len() > MIN_KEYS {
            self.borrow_from_right(child_index);
            Some(Rebalance::BorrowedRight)
        } else if has_left {
            self.merge_children(child_index - 1);
            Some(Rebalance::MergedLeft)
        } else if has_right {
            self.merge_children(child_index);
            Some(Rebalance::MergedRight)
        } else {
            None
        }
    }

    /// Rotate the left sibling's last key up through the separator into the child
    fn borrow_from_left(&mut self, child_index: ChildIndex) {
        let (left_part, right_part) = self.children.split_at_mut(child_index);
        let sibling = &mut left_part[child_index - 1];
        let child = &mut right_part[0];
        debug_assert!(sibling.keys.len() > MIN_KEYS, "left sibling cannot spare a key");

        let borrowed = sibling.keys.remove(sibling.keys.len() - 1);
        let separator = std::mem::replace(&mut self.keys[child_index - 1], borrowed);
        child.keys.insert(0, separator);

        if !sibling.is_leaf() {
            child.children.insert(0, sibling.children.remove(sibling.children.len() - 1));
        }
    }

    /// Rotate the right sibling's first key up through the separator into the child
    fn borrow_from_right(&mut self, child_index: ChildIndex) {
        let (left_part, right_part) = self.children.split_at_mut(child_index + 1);
        let child = &mut left_part[child_index];
        let sibling = &mut right_part[0];
        debug_assert!(sibling.keys.len() > MIN_KEYS, "right sibling cannot spare a key");

        let borrowed = sibling.keys.remove(0);
        let separator = std::mem::replace(&mut self.keys[child_index], borrowed);
        child.keys.push(separator);

        if !sibling.is_leaf() {
            child.children.push(sibling.children.remove(0));
        }
    }

    /// Merge `children[left_index + 1]` and the key separating them into `children[left_index]`
    fn merge_children(&mut self, left_index: ChildIndex) {
        let separator = self.keys.remove(left_index);
        let right = self.children.remove(left_index + 1);

        let left = &mut self.children[left_index];
        left.keys.push(separator);
        left.keys.extend(right.keys);
        left.children.extend(right.children);
    }

    pub(crate) fn collect_keys(&self, out: &mut Vec<Key>) {
        if self.is_leaf() {
            out.extend_from_slice(&self.keys);
            return;
        }
        for (i, child) in self.children.iter().enumerate() {
            child.collect_keys(out);
            if let Some(&key) = self.keys.get(i) {
                out.push(key);
            }
        }
    }
}
