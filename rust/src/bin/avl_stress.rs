use avltree::AvlTree;
use std::collections::BTreeSet;
use std::time::Instant;

// Large-scale build/delete run comparing AvlTree against BTreeSet, checking
// the height bound and structural invariants at the end.
// Note: Run in release mode for meaningful timings.
fn main() {
    // Configurable via env vars if needed
    let tree_size: usize = env_or("TREE_SIZE", 100_000);
    let delete_sample: usize = env_or("DELETE_SAMPLE", 10_000);
    let seed: u64 = env_or("SEED", 42);

    println!("=== AVL Stress Run ===");
    println!(
        "Size: {} keys, delete sample: {}, seed: {}",
        tree_size, delete_sample, seed
    );

    // Pseudo-random deterministic key sequences
    let insert_keys = lcg_keys(seed, tree_size, tree_size.saturating_mul(4).max(1));
    let delete_keys = lcg_keys(
        seed.wrapping_add(1),
        delete_sample,
        tree_size.saturating_mul(4).max(1),
    );

    println!("\nBuilding sets...");
    let start = Instant::now();
    let mut avl = AvlTree::new();
    for &k in &insert_keys {
        avl.insert(k);
    }
    let avl_build = start.elapsed();

    let start = Instant::now();
    let mut btree = BTreeSet::new();
    for &k in &insert_keys {
        btree.insert(k);
    }
    let btree_build = start.elapsed();

    println!(
        "Build times: AvlTree={:?}, BTreeSet={:?}",
        avl_build, btree_build
    );
    report_shape(&avl);

    println!("\nDeleting ({} keys)...", delete_sample);
    let start = Instant::now();
    let mut avl_removed = 0usize;
    for k in &delete_keys {
        if avl.remove(k) {
            avl_removed += 1;
        }
    }
    let avl_delete = start.elapsed();

    let start = Instant::now();
    let mut btree_removed = 0usize;
    for k in &delete_keys {
        if btree.remove(k) {
            btree_removed += 1;
        }
    }
    let btree_delete = start.elapsed();

    let per_op = |d: std::time::Duration| d.as_nanos() as f64 / delete_sample.max(1) as f64;
    println!("\nDelete times:");
    println!(
        "  AvlTree:  {:?} total ({:.1} ns/op, {} hits)",
        avl_delete,
        per_op(avl_delete),
        avl_removed
    );
    println!(
        "  BTreeSet: {:?} total ({:.1} ns/op, {} hits)",
        btree_delete,
        per_op(btree_delete),
        btree_removed
    );
    report_shape(&avl);

    let stats = avl.rotation_stats();
    println!(
        "\nRebalancing: LL={} RR={} LR={} RL={} ({} single rotations)",
        stats.left_left,
        stats.right_right,
        stats.left_right,
        stats.right_left,
        stats.total_rotations()
    );

    let mut failed = false;
    if let Err(e) = avl.validate() {
        eprintln!("Invariant check failed: {}", e);
        failed = true;
    }
    if !avl.iter().eq(btree.iter()) || avl.len() != btree.len() {
        eprintln!("Contents diverge from BTreeSet");
        failed = true;
    }
    if failed {
        std::process::exit(1);
    }
    println!("\nAll checks passed.");
}

fn env_or<T: std::str::FromStr>(name: &str, default: T) -> T {
    std::env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

fn lcg_keys(seed: u64, count: usize, modulus: usize) -> Vec<usize> {
    (0..count)
        .scan(seed, |state, _| {
            *state = state.wrapping_mul(1103515245).wrapping_add(12345);
            Some((*state >> 16) as usize % modulus)
        })
        .collect()
}

fn report_shape(tree: &AvlTree<usize>) {
    let bound = AvlTree::<usize>::max_height_for(tree.len());
    println!(
        "Shape: {} keys, height {} (AVL bound {:.2}, log2(n) {:.2})",
        tree.len(),
        tree.height(),
        bound,
        (tree.len().max(1) as f64).log2()
    );
}
