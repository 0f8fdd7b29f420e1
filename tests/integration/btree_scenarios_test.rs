use anyhow::Result;
use ordtree::{BTree, Key, MIN_KEYS};

#[path = "../common/mod.rs"]
mod common;
use common::{assert_valid, reference_level_sizes, shuffled_keys};

fn leaf_keys(tree: &BTree) -> Vec<Vec<Key>> {
    tree.render()
        .into_iter()
        .filter(|node| node.is_leaf)
        .map(|node| node.keys)
        .collect()
}

#[test]
fn test_ascending_fifty_matches_reference() {
    let tree: BTree = (1..=50).collect();
    assert_valid(&tree);

    assert_eq!(tree.height(), 3);
    assert_eq!(tree.level_sizes(), vec![1, 5, 17]);
    assert_eq!(tree.level_sizes(), reference_level_sizes(1..=50));
    assert_eq!(tree.root().keys(), &[9, 18, 27, 36]);
}

#[test]
fn test_random_builds_match_reference() {
    for seed in 0..10 {
        let keys = shuffled_keys(120, seed);
        let tree: BTree = keys.iter().copied().collect();

        assert_valid(&tree);
        assert_eq!(tree.level_sizes(), reference_level_sizes(keys));
    }
}

#[test]
fn test_delete_from_leaf() -> Result<()> {
    let mut tree: BTree = (1..=8).collect();

    assert!(tree.delete(5)?);

    assert!(!tree.contains(5));
    for key in (1..=8).filter(|&k| k != 5) {
        assert!(tree.contains(key), "key {} missing", key);
    }
    assert_valid(&tree);

    // [4] underflowed and neither sibling could spare a key
    assert_eq!(tree.root().keys(), &[6]);
    assert_eq!(leaf_keys(&tree), vec![vec![1, 2, 3, 4], vec![7, 8]]);
    Ok(())
}

#[test]
fn test_delete_root_key_uses_predecessor() -> Result<()> {
    let mut tree: BTree = [9, 8, 7, 6, 5, 4].into_iter().collect();
    assert_eq!(tree.root().keys(), &[7]);

    assert!(tree.delete(7)?);

    // 6 is the largest key left of 7 and takes its place
    assert_eq!(tree.root().keys(), &[6]);
    assert_eq!(leaf_keys(&tree), vec![vec![4, 5], vec![8, 9]]);
    assert_valid(&tree);

    // [9] cannot borrow from [4, 5], so the merge drains the root
    assert!(tree.delete(8)?);
    assert_eq!(tree.height(), 1);
    assert_eq!(tree.root().keys(), &[4, 5, 6, 9]);
    assert_valid(&tree);
    Ok(())
}

#[test]
fn test_second_delete_is_noop() -> Result<()> {
    let mut tree: BTree = (1..=17).collect();

    assert!(tree.delete(16)?);
    let after_first = tree.clone();
    let rendered = tree.render();

    assert!(!tree.delete(16)?);

    assert_eq!(tree, after_first);
    assert_eq!(tree.render(), rendered);
    assert_valid(&tree);
    Ok(())
}

#[test]
fn test_merge_empties_root() -> Result<()> {
    let mut tree: BTree = (1..=17).collect();
    assert_eq!(tree.height(), 3);

    // Deleting from the left edge drains the left half until the root's only
    // separator is pulled down by a merge
    let mut key = 1;
    while tree.height() == 3 {
        assert!(tree.delete(key)?);
        assert_valid(&tree);
        key += 1;
    }

    assert_eq!(tree.height(), 2);
    assert!(!tree.root().is_leaf());
    assert_eq!(tree.keys(), (key..=17).collect::<Vec<_>>());

    // A small tree collapses all the way to a single leaf
    let mut small: BTree = (1..=5).collect();
    assert!(small.delete(1)?);
    assert_eq!(small.height(), 1);
    assert!(small.root().is_leaf());
    assert_eq!(small.root().keys(), &[2, 3, 4, 5]);
    Ok(())
}

#[test]
fn test_occupancy_after_every_step() -> Result<()> {
    let mut tree = BTree::new();
    for key in shuffled_keys(500, 42) {
        tree.insert(key);
    }

    for key in shuffled_keys(500, 43).into_iter().take(450) {
        tree.delete(key)?;
        for node in tree.render().iter().filter(|node| node.depth > 0) {
            assert!(node.keys.len() >= MIN_KEYS, "underfull node {:?}", node.keys);
        }
    }
    assert_eq!(tree.len(), 50);
    assert_valid(&tree);
    Ok(())
}
