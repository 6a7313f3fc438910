use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt;

use tracing::debug;

use crate::balance::balance;
use crate::node::{self, Link, Node};

/// An ordered set of unique elements stored in an AVL tree.
///
/// ```
/// use avltree::AvlTree;
/// let mut tree = AvlTree::new();
/// tree.insert(10);
/// tree.insert(20);
/// tree.insert(30);
/// assert_eq!(tree.height(), 1);
/// assert!(tree.contains(&20));
/// tree.remove(&20);
/// assert!(!tree.contains(&20));
/// ```
#[derive(Clone)]
pub struct AvlTree<T> {
    root: Link<T>,
    num_nodes: usize,
}

impl<T: Ord> AvlTree<T> {
    /// Creates an empty tree.
    /// No memory is allocated until the first element is inserted.
    pub fn new() -> Self {
        Self {
            root: None,
            num_nodes: 0,
        }
    }

    /// Returns true if the tree contains no elements.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Returns the number of elements in the tree.
    pub fn len(&self) -> usize {
        self.num_nodes
    }

    /// Returns the height of the tree: -1 if empty, 0 for a single element.
    pub fn height(&self) -> i32 {
        node::height(&self.root)
    }

    /// Clears the tree, deallocating all memory.
    pub fn clear(&mut self) {
        debug!(num_nodes = self.num_nodes, "clearing tree");
        self.root = None;
        self.num_nodes = 0;
    }

    /// Returns true if the tree holds an element equal to `element`.
    ///
    /// The element may be any borrowed form of the tree's element type, but the
    /// ordering on the borrowed form *must* match the ordering on the element type.
    pub fn contains<Q>(&self, element: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        find(&self.root, element).is_some()
    }

    /// Returns a reference to the stored element equal to `element`.
    pub fn get<Q>(&self, element: &Q) -> Option<&T>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        find(&self.root, element).map(|node| &node.element)
    }

    /// Returns the smallest element, if any.
    pub fn find_min(&self) -> Option<&T> {
        self.root.as_deref().map(|node| &find_min(node).element)
    }

    /// Returns the largest element, if any.
    pub fn find_max(&self) -> Option<&T> {
        self.root.as_deref().map(|node| &find_max(node).element)
    }

    /// Inserts an element into the tree.
    /// Returns false and leaves the tree unchanged if an equal element is already present.
    pub fn insert(&mut self, element: T) -> bool {
        let (root, inserted) = insert(self.root.take(), element);
        self.root = Some(root);
        if inserted {
            self.num_nodes += 1;
        }
        inserted
    }

    /// Removes an element from the tree.
    /// Returns whether the element was previously in the tree.
    pub fn remove<Q>(&mut self, element: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let (root, removed) = remove(self.root.take(), element);
        self.root = root;
        if removed {
            debug_assert!(self.num_nodes >= 1);
            self.num_nodes -= 1;
        }
        removed
    }

    #[cfg(any(test, feature = "consistency_check"))]
    pub fn check_consistency(&self) {
        fn check<T: Ord>(link: &Link<T>, lower: Option<&T>, upper: Option<&T>) -> usize {
            let node = match link {
                None => return 0,
                Some(node) => node,
            };

            // Check order against every ancestor bound
            if let Some(lower) = lower {
                assert!(*lower < node.element);
            }
            if let Some(upper) = upper {
                assert!(node.element < *upper);
            }

            // Check height
            let left_height = node::height(&node.left);
            let right_height = node::height(&node.right);
            assert_eq!(node.height, left_height.max(right_height) + 1);

            // Check AVL condition (nearly balance)
            assert!(left_height <= right_height + 1);
            assert!(right_height <= left_height + 1);

            1 + check(&node.left, lower, Some(&node.element))
                + check(&node.right, Some(&node.element), upper)
        }

        // Check number of nodes
        assert_eq!(check(&self.root, None, None), self.num_nodes);
    }

    /// Visits every element in ascending order.
    pub(crate) fn for_each_in_order<'a, F: FnMut(&'a T)>(&'a self, mut f: F) {
        fn walk<'a, T, F: FnMut(&'a T)>(link: &'a Link<T>, f: &mut F) {
            if let Some(node) = link {
                walk(&node.left, f);
                f(&node.element);
                walk(&node.right, f);
            }
        }
        walk(&self.root, &mut f);
    }

    #[cfg(test)]
    pub(crate) fn root_element(&self) -> Option<&T> {
        self.root.as_ref().map(|node| &node.element)
    }

    #[cfg(test)]
    pub(crate) fn root_children(&self) -> (Option<&T>, Option<&T>) {
        match &self.root {
            None => (None, None),
            Some(node) => (
                node.left.as_ref().map(|left| &left.element),
                node.right.as_ref().map(|right| &right.element),
            ),
        }
    }

    #[cfg(test)]
    pub(crate) fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        let mut elements = Vec::with_capacity(self.num_nodes);
        self.for_each_in_order(|element| elements.push(element.clone()));
        elements
    }
}

impl<T: Ord> Default for AvlTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord + fmt::Debug> fmt::Debug for AvlTree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut set = f.debug_set();
        self.for_each_in_order(|element| {
            set.entry(element);
        });
        set.finish()
    }
}

impl<T: Ord> Extend<T> for AvlTree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.insert(element);
        }
    }
}

impl<T: Ord> FromIterator<T> for AvlTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

/// Inserts `element` into the subtree and returns its new root, plus whether a
/// node was created.
fn insert<T: Ord>(link: Link<T>, element: T) -> (Box<Node<T>>, bool) {
    let mut node = match link {
        None => return (Node::create(element), true),
        Some(node) => node,
    };
    let inserted = match element.cmp(&node.element) {
        Ordering::Less => {
            let (left, inserted) = insert(node.left.take(), element);
            node.left = Some(left);
            inserted
        }
        Ordering::Greater => {
            let (right, inserted) = insert(node.right.take(), element);
            node.right = Some(right);
            inserted
        }
        Ordering::Equal => false,
    };
    (balance(node), inserted)
}

/// Removes `element` from the subtree and returns its new root, plus whether a
/// node was destroyed.
fn remove<T, Q>(link: Link<T>, element: &Q) -> (Link<T>, bool)
where
    T: Borrow<Q>,
    Q: Ord + ?Sized,
{
    let mut node = match link {
        None => return (None, false),
        Some(node) => node,
    };
    match element.cmp(node.element.borrow()) {
        Ordering::Less => {
            let (left, removed) = remove(node.left.take(), element);
            node.left = left;
            (Some(balance(node)), removed)
        }
        Ordering::Greater => {
            let (right, removed) = remove(node.right.take(), element);
            node.right = right;
            (Some(balance(node)), removed)
        }
        Ordering::Equal => match (node.left.take(), node.right.take()) {
            (Some(left), Some(right)) => {
                // Replace with the in-order successor, unlinking its node from the right subtree
                let (right, successor) = remove_min(right);
                node.element = successor;
                node.left = Some(left);
                node.right = right;
                (Some(balance(node)), true)
            }
            (left, None) => (left, true),
            (None, right) => (right, true),
        },
    }
}

/// Unlinks the leftmost node of the subtree. Returns the new subtree root and
/// the element of the unlinked node.
fn remove_min<T>(mut node: Box<Node<T>>) -> (Link<T>, T) {
    match node.left.take() {
        None => {
            let Node { element, right, .. } = *node;
            (right, element)
        }
        Some(left) => {
            let (left, min) = remove_min(left);
            node.left = left;
            (Some(balance(node)), min)
        }
    }
}

fn find<'a, T, Q>(link: &'a Link<T>, element: &Q) -> Option<&'a Node<T>>
where
    T: Borrow<Q>,
    Q: Ord + ?Sized,
{
    let mut current = link;
    while let Some(node) = current {
        current = match element.cmp(node.element.borrow()) {
            Ordering::Equal => return Some(node),
            Ordering::Less => &node.left,
            Ordering::Greater => &node.right,
        };
    }
    None
}

fn find_min<T>(node: &Node<T>) -> &Node<T> {
    let mut current = node;
    while let Some(left) = &current.left {
        current = left;
    }
    current
}

fn find_max<T>(node: &Node<T>) -> &Node<T> {
    let mut current = node;
    while let Some(right) = &current.right {
        current = right;
    }
    current
}
