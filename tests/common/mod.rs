#![allow(dead_code)]

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use ordtree::{BTree, Key, MAX_KEYS};

/// Minimal recursive B-tree used as an independent reference for tree shape.
/// Splits are applied on the way back up the recursion instead of via a
/// recorded path.
#[derive(Debug, Default)]
pub struct ReferenceNode {
    keys: Vec<Key>,
    children: Vec<ReferenceNode>,
}

impl ReferenceNode {
    fn insert(&mut self, key: Key) -> Option<(Key, ReferenceNode)> {
        let pos = self.keys.partition_point(|&k| k < key);
        if self.children.is_empty() {
            self.keys.insert(pos, key);
        } else if let Some((median, right)) = self.children[pos].insert(key) {
            self.keys.insert(pos, median);
            self.children.insert(pos + 1, right);
        }

        if self.keys.len() <= MAX_KEYS {
            return None;
        }
        let mid = self.keys.len() / 2;
        let right_keys = self.keys.split_off(mid + 1);
        let median = self.keys.pop().unwrap();
        let right_children = if self.children.is_empty() {
            Vec::new()
        } else {
            self.children.split_off(mid + 1)
        };
        Some((median, ReferenceNode { keys: right_keys, children: right_children }))
    }
}

/// Build a reference tree and return its per-level node counts
pub fn reference_level_sizes(keys: impl IntoIterator<Item = Key>) -> Vec<usize> {
    let mut root = ReferenceNode::default();
    for key in keys {
        if let Some((median, right)) = root.insert(key) {
            let left = std::mem::take(&mut root);
            root = ReferenceNode { keys: vec![median], children: vec![left, right] };
        }
    }

    let mut sizes = Vec::new();
    let mut level = vec![&root];
    while !level.is_empty() {
        sizes.push(level.len());
        level = level.iter().flat_map(|node| node.children.iter()).collect();
    }
    sizes
}

/// Keys `1..=n` in a reproducible shuffled order
pub fn shuffled_keys(n: Key, seed: u64) -> Vec<Key> {
    let mut keys: Vec<Key> = (1..=n).collect();
    let mut rng = StdRng::seed_from_u64(seed);
    keys.shuffle(&mut rng);
    keys
}

/// Panic with the rendered tree if any invariant is broken
pub fn assert_valid(tree: &BTree) {
    if let Err(e) = tree.validate() {
        panic!("{}\n{}", e, tree);
    }
}
