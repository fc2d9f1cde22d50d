use avltree::{AvlTree, Rebalance, RotationStats};

const CASES: [Rebalance; 4] = [
    Rebalance::LeftLeft,
    Rebalance::RightRight,
    Rebalance::LeftRight,
    Rebalance::RightLeft,
];

// Step-by-step walkthrough of AVL insertion and deletion.
// Prints which rebalancing cases fire and the tree after each phase.
fn main() {
    println!("==============================");
    println!(" AVL tree walkthrough");
    println!("==============================\n");

    let mut tree = AvlTree::new();
    let letters = ['C', 'B', 'E', 'A', 'D', 'H', 'G', 'F'];

    println!("Inserting nodes...\n");
    for letter in letters {
        let before = tree.rotation_stats();
        let inserted = tree.insert(letter);
        let fired = tree.rotation_stats().since(&before);
        println!(
            "insert {:?}: {}{}",
            letter,
            if inserted { "added" } else { "duplicate ignored" },
            describe(&fired)
        );
    }
    report(&tree);

    println!("\nInserting a duplicate...\n");
    let inserted = tree.insert('D');
    println!(
        "insert 'D': {}",
        if inserted { "added" } else { "duplicate ignored" }
    );

    println!("\n==============================");
    println!(" Deletion");
    println!("==============================\n");

    for letter in ['H', 'C', 'Z'] {
        let before = tree.rotation_stats();
        let removed = tree.remove(&letter);
        let fired = tree.rotation_stats().since(&before);
        println!(
            "delete {:?}: {}{}",
            letter,
            if removed { "removed" } else { "not present" },
            describe(&fired)
        );
    }
    report(&tree);

    let totals = tree.rotation_stats();
    println!("\nTotals:");
    for case in CASES {
        println!("  {} cases: {}", case, totals.count(case));
    }
    println!("  single rotations: {}", totals.total_rotations());

    if let Err(e) = tree.validate() {
        eprintln!("Warning: tree failed validation: {}", e);
        std::process::exit(1);
    }
}

fn describe(fired: &RotationStats) -> String {
    let names: Vec<String> = CASES
        .iter()
        .filter(|&&case| fired.count(case) > 0)
        .map(|&case| format!("{} x{}", case, fired.count(case)))
        .collect();
    if names.is_empty() {
        String::new()
    } else {
        format!(" (rebalanced: {})", names.join(", "))
    }
}

fn report(tree: &AvlTree<char>) {
    let join = |keys: Vec<&char>| {
        keys.iter()
            .map(|k| k.to_string())
            .collect::<Vec<_>>()
            .join(" ")
    };
    println!("\nIn-order  (sorted): {}", join(tree.inorder()));
    println!("Pre-order (shape):  {}", join(tree.preorder()));
    println!("Height: {}, keys: {}\n", tree.height(), tree.len());
    tree.print_tree();
}
