use avltree::AvlTree;
use std::collections::BTreeSet;
use std::time::Instant;

#[test]
fn test_insertion_vs_btreeset() {
    const TEST_SIZE: usize = 10000;

    // Generate test data
    let data: Vec<String> = (0..TEST_SIZE).map(|i| format!("key_{:05}", i)).collect();

    // Test std::collections::BTreeSet
    let start = Instant::now();
    let mut btree_set = BTreeSet::new();
    for key in &data {
        btree_set.insert(key.clone());
    }
    let btree_duration = start.elapsed();

    // Test our AvlTree
    let start = Instant::now();
    let mut avl_tree = AvlTree::new();
    for key in &data {
        avl_tree.insert(key.clone());
    }
    let avl_duration = start.elapsed();

    println!("=== INSERTION PERFORMANCE vs BTreeSet ===");
    println!("std::collections::BTreeSet: {:?}", btree_duration);
    println!("AvlTree: {:?}", avl_duration);
    println!(
        "BTreeSet vs AvlTree ratio: {:.2}",
        btree_duration.as_nanos() as f64 / avl_duration.as_nanos().max(1) as f64
    );

    // Verify both sets hold the same contents
    assert_eq!(btree_set.len(), TEST_SIZE);
    assert_eq!(avl_tree.len(), TEST_SIZE);
    assert!(avl_tree.iter().eq(btree_set.iter()));
    assert!(avl_tree.check_invariants());
}

#[test]
fn test_lookup_vs_btreeset() {
    const TEST_SIZE: i32 = 10000;
    const LOOKUP_COUNT: i32 = 1000;

    let btree_set: BTreeSet<i32> = (0..TEST_SIZE).collect();
    let avl_tree: AvlTree<i32> = (0..TEST_SIZE).collect();

    // Every eleventh key, plus misses past the end
    let lookup_keys: Vec<i32> = (0..LOOKUP_COUNT).map(|i| i * 11).collect();

    let start = Instant::now();
    for _ in 0..100 {
        for key in &lookup_keys {
            std::hint::black_box(btree_set.contains(key));
        }
    }
    let btree_duration = start.elapsed();

    let start = Instant::now();
    for _ in 0..100 {
        for key in &lookup_keys {
            std::hint::black_box(avl_tree.contains(key));
        }
    }
    let avl_duration = start.elapsed();

    println!("=== LOOKUP PERFORMANCE vs BTreeSet ===");
    println!("std::collections::BTreeSet: {:?}", btree_duration);
    println!("AvlTree: {:?}", avl_duration);

    for key in &lookup_keys {
        assert_eq!(avl_tree.contains(key), btree_set.contains(key));
        assert_eq!(avl_tree.get(key), btree_set.get(key));
    }
}

#[test]
fn test_removal_vs_btreeset() {
    const TEST_SIZE: u64 = 20000;

    let mut btree_set: BTreeSet<u64> = (0..TEST_SIZE).collect();
    let mut avl_tree: AvlTree<u64> = (0..TEST_SIZE).collect();

    // Pseudo-random delete keys, some of them repeated or out of range
    let delete_keys: Vec<u64> = (0..TEST_SIZE / 2)
        .scan(42_u64, |seed, _| {
            *seed = seed.wrapping_mul(1103515245).wrapping_add(12345);
            Some((*seed >> 16) % (TEST_SIZE + TEST_SIZE / 10))
        })
        .collect();

    let start = Instant::now();
    for k in &delete_keys {
        btree_set.remove(k);
    }
    let btree_duration = start.elapsed();

    let start = Instant::now();
    for k in &delete_keys {
        avl_tree.remove(k);
    }
    let avl_duration = start.elapsed();

    println!("=== REMOVAL PERFORMANCE vs BTreeSet ===");
    println!("std::collections::BTreeSet: {:?}", btree_duration);
    println!("AvlTree: {:?}", avl_duration);
    println!(
        "Rotations during build and removal: {}",
        avl_tree.rotation_stats().total_rotations()
    );

    assert_eq!(avl_tree.len(), btree_set.len());
    assert!(avl_tree.iter().eq(btree_set.iter()));
    assert!(avl_tree.check_invariants());
}

#[test]
fn test_ordered_access_vs_btreeset() {
    let keys: Vec<i64> = (0..5000).map(|i| (i * 7919) % 5003).collect();
    let btree_set: BTreeSet<i64> = keys.iter().copied().collect();
    let mut avl_tree: AvlTree<i64> = keys.iter().copied().collect();

    assert_eq!(avl_tree.first(), btree_set.first());
    assert_eq!(avl_tree.last(), btree_set.last());

    let owned: Vec<i64> = avl_tree.clone().into_iter().collect();
    let expected: Vec<i64> = btree_set.iter().copied().collect();
    assert_eq!(owned, expected);

    let mut popped = Vec::new();
    while let Some(k) = avl_tree.pop_last() {
        popped.push(k);
    }
    popped.reverse();
    assert_eq!(popped, expected);
}
