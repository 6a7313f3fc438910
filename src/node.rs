use std::cmp;

/// Owning slot for a subtree. `None` is the empty subtree.
pub(crate) type Link<T> = Option<Box<Node<T>>>;

#[derive(Clone)]
pub(crate) struct Node<T> {
    pub(crate) element: T,
    pub(crate) left: Link<T>,
    pub(crate) right: Link<T>,
    pub(crate) height: i32,
}

impl<T> Node<T> {
    /// Creates a leaf holding `element`.
    pub(crate) fn create(element: T) -> Box<Self> {
        Box::new(Node {
            element,
            left: None,
            right: None,
            height: 0,
        })
    }
}

/// Cached height of a subtree, -1 if the subtree is empty.
pub(crate) fn height<T>(link: &Link<T>) -> i32 {
    match link {
        None => -1,
        Some(node) => node.height,
    }
}

pub(crate) fn update_height<T>(node: &mut Node<T>) {
    node.height = cmp::max(height(&node.left), height(&node.right)) + 1;
}
