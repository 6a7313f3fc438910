use avltree::AvlTree;

fn main() {
    let mut tree = AvlTree::new();
    for x in [10, 20, 30, 40, 50, 25] {
        tree.insert(x);
    }
    assert!(!tree.insert(30));
    assert_eq!(tree.len(), 6);
    println!("{:?} (height {})", tree, tree.height());

    assert!(tree.contains(&25));
    tree.remove(&30);
    assert!(!tree.contains(&30));
    assert!(!tree.remove(&30));

    println!("min: {:?}, max: {:?}", tree.find_min(), tree.find_max());
    println!("{:?} (height {})", tree, tree.height());
}
