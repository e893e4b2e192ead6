//! Whole-tree traversals and the shape queries built on them.
//!
//! Traversals produce [`Visit`]s rather than text so that callers decide how
//! to present them. See [`render`][crate::render] for the text layouts.

use crate::tree::{Node, Tree};

/// One node seen during a traversal.
#[derive(Debug, PartialEq, Eq)]
pub struct Visit<'a, T> {
    /// Number of edges between the root and this node. The root has a depth
    /// of 0.
    pub depth: usize,
    /// The value stored at this node.
    pub value: &'a T,
    /// Whether this node has a left child.
    pub has_left: bool,
    /// Whether this node has a right child.
    pub has_right: bool,
}

impl<'a, T> Visit<'a, T> {
    fn new(depth: usize, node: &'a Node<T>) -> Self {
        Self {
            depth,
            value: &node.value,
            has_left: node.left.is_some(),
            has_right: node.right.is_some(),
        }
    }
}

#[derive(Clone, Copy)]
enum Order {
    In,
    Pre,
    Post,
}

/// Recursively collects the subtree rooted at `node` into `out`. Recursion is
/// bounded by the height of the subtree.
fn collect<'a, T>(
    node: Option<&'a Node<T>>,
    depth: usize,
    order: Order,
    out: &mut Vec<Visit<'a, T>>,
) {
    let Some(node) = node else {
        return;
    };

    if let Order::Pre = order {
        out.push(Visit::new(depth, node));
    }
    collect(node.left(), depth + 1, order, out);
    if let Order::In = order {
        out.push(Visit::new(depth, node));
    }
    collect(node.right(), depth + 1, order, out);
    if let Order::Post = order {
        out.push(Visit::new(depth, node));
    }
}

/// A depth-first walk over every node along with its depth. Uses an explicit
/// stack so that tall trees don't recurse once per level.
pub(crate) struct Nodes<'a, T> {
    stack: Vec<(usize, &'a Node<T>)>,
}

impl<'a, T> Iterator for Nodes<'a, T> {
    type Item = (usize, &'a Node<T>);

    fn next(&mut self) -> Option<Self::Item> {
        let (depth, node) = self.stack.pop()?;
        self.stack.extend(node.right().map(|right| (depth + 1, right)));
        self.stack.extend(node.left().map(|left| (depth + 1, left)));
        Some((depth, node))
    }
}

impl<T> Tree<T> {
    fn traverse(&self, order: Order) -> Vec<Visit<'_, T>> {
        let mut out = Vec::with_capacity(self.size());
        collect(self.root.as_deref(), 0, order, &mut out);
        out
    }

    /// Walks every node in pre-order, yielding each with its depth.
    pub(crate) fn nodes(&self) -> Nodes<'_, T> {
        Nodes {
            stack: self.root.as_deref().map(|root| (0, root)).into_iter().collect(),
        }
    }

    /// Visits every node left subtree first, then the node, then the right
    /// subtree. The values come out in ascending order.
    ///
    /// The traversal recurses once per level, so a tree as tall as it is
    /// large (e.g. one built by inserting ascending values) needs a stack deep
    /// enough for its size.
    ///
    /// # Examples
    ///
    /// ```
    /// use ost::Tree;
    ///
    /// let tree: Tree<_> = [2, 1, 3].into_iter().collect();
    /// let values: Vec<_> = tree.in_order().into_iter().map(|v| *v.value).collect();
    ///
    /// assert_eq!(values, vec![1, 2, 3]);
    /// ```
    pub fn in_order(&self) -> Vec<Visit<'_, T>> {
        self.traverse(Order::In)
    }

    /// Visits every node before either of its subtrees, left subtree first.
    pub fn pre_order(&self) -> Vec<Visit<'_, T>> {
        self.traverse(Order::Pre)
    }

    /// Visits every node after both of its subtrees, left subtree first.
    pub fn post_order(&self) -> Vec<Visit<'_, T>> {
        self.traverse(Order::Post)
    }

    /// Copies the values of the tree into a `Vec` in ascending order. Like the
    /// traversals, this recurses once per level of the tree.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.in_order()
            .into_iter()
            .map(|visit| visit.value.clone())
            .collect()
    }

    /// Returns the number of nodes with no children.
    pub fn num_leaves(&self) -> usize {
        self.nodes().filter(|(_, node)| node.is_leaf()).count()
    }

    /// Returns the number of nodes `level` edges away from the root. The root
    /// is at level 0. Negative levels and levels deeper than the tree's height
    /// hold no nodes.
    ///
    /// # Examples
    ///
    /// ```
    /// use ost::Tree;
    ///
    /// let tree: Tree<_> = [5, 3, 8, 1].into_iter().collect();
    ///
    /// assert_eq!(tree.num_at_level(0), 1);
    /// assert_eq!(tree.num_at_level(1), 2);
    /// assert_eq!(tree.num_at_level(2), 1);
    /// assert_eq!(tree.num_at_level(3), 0);
    /// assert_eq!(tree.num_at_level(-1), 0);
    /// ```
    pub fn num_at_level(&self, level: isize) -> usize {
        let Ok(level) = usize::try_from(level) else {
            return 0;
        };
        self.nodes().filter(|(depth, _)| *depth == level).count()
    }
}
