//! An ordered set of unique elements stored in an AVL tree.
//!
//! Every insertion and removal rebalances the path it touched on the way back
//! up, so the heights of any two sibling subtrees never differ by more than
//! one and lookups, insertions and removals all run in `O(log n)`.
//!
//! ```
//! use avltree::AvlTree;
//!
//! let mut tree: AvlTree<i32> = (1..=7).collect();
//! assert_eq!(tree.height(), 2);
//! assert_eq!(tree.find_min(), Some(&1));
//! assert!(tree.remove(&4));
//! assert!(!tree.remove(&4));
//! assert_eq!(tree.len(), 6);
//! ```

mod balance;
mod node;
mod tree;

pub use tree::AvlTree;
