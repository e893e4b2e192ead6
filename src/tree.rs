//! The core of the Order-Statistics Tree: ownership of nodes, membership,
//! insertion, deletion and whole-tree shape queries.
//!
//! # Examples
//!
//! ```
//! use ost::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert!(!tree.contains(&1));
//!
//! assert!(tree.insert(1));
//! assert!(tree.contains(&1));
//!
//! // The tree is a set so inserting the same value again does nothing.
//! assert!(!tree.insert(1));
//! assert_eq!(tree.size(), 1);
//!
//! assert!(tree.remove(&1));
//! assert!(!tree.remove(&1));
//! assert!(tree.is_empty());
//! ```

use std::cmp::Ordering;
use std::fmt;

use log::{debug, trace};

use crate::BuildError;

/// An owned, possibly absent, child slot.
pub(crate) type Link<T> = Option<Box<Node<T>>>;

/// An unbalanced Binary Search Tree over a set of values, augmented with
/// subtree sizes so it can answer rank and range-counting queries.
pub struct Tree<T> {
    pub(crate) root: Link<T>,
}

pub(crate) struct Node<T> {
    pub(crate) value: T,
    pub(crate) left: Link<T>,
    pub(crate) right: Link<T>,

    /// How many nodes are in the subtree rooted at this node, itself
    /// included. A node with no children has a count of 1.
    pub(crate) count: usize,
}

impl<T> Node<T> {
    fn new_boxed(value: T) -> Box<Self> {
        Box::new(Self {
            value,
            left: None,
            right: None,
            count: 1,
        })
    }

    pub(crate) fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    pub(crate) fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    pub(crate) fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Builds a perfectly balanced subtree out of strictly ascending `values`
    /// by making the middle element the root of each subrange.
    fn from_sorted(values: &[T]) -> Link<T>
    where
        T: Clone,
    {
        if values.is_empty() {
            return None;
        }
        let mid = (values.len() - 1) / 2;

        Some(Box::new(Self {
            value: values[mid].clone(),
            left: Self::from_sorted(&values[..mid]),
            right: Self::from_sorted(&values[mid + 1..]),
            count: values.len(),
        }))
    }

    /// Removes the node held by `link`, splicing its only child into its place
    /// or, when it has two children, promoting its in-order successor.
    fn unlink(link: &mut Link<T>) {
        let Some(mut node) = link.take() else {
            return;
        };

        *link = match (node.left.take(), node.right.take()) {
            (None, None) => None,
            (Some(child), None) | (None, Some(child)) => Some(child),
            (left, mut right) => {
                let successor = Self::take_min(&mut right)
                    .expect("Successor not found but right child was not empty");
                node.value = successor;
                node.left = left;
                node.right = right;
                node.count -= 1;
                Some(node)
            }
        };
    }

    /// Detaches the smallest node of the subtree held by `link` and returns its
    /// value. The detached node's right child takes its place.
    fn take_min(mut link: &mut Link<T>) -> Option<T> {
        while link.as_ref()?.left.is_some() {
            let Some(node) = link else {
                unreachable!("Checked for a node by the loop condition");
            };
            node.count -= 1;
            link = &mut node.left;
        }

        let mut min = link.take()?;
        *link = min.right.take();
        Some(min.value)
    }
}

/// Number of nodes in the subtree rooted at `node`.
pub(crate) fn subtree_size<T>(node: Option<&Node<T>>) -> usize {
    node.map_or(0, |n| n.count)
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Tree<T> {
    fn drop(&mut self) {
        // Detach every child before its parent is dropped so that a tall tree
        // never recurses once per level.
        let mut stack: Vec<Box<Node<T>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

impl<T> Clone for Tree<T>
where
    T: Clone,
{
    fn clone(&self) -> Self {
        enum Step<'a, T> {
            /// Copy the subtree rooted here, leaving its copy on `built`.
            Visit(Option<&'a Node<T>>),
            /// Both subtrees of this node are copied: join them under a copy
            /// of the node.
            Join(&'a Node<T>),
        }

        // Copies children before parents with an explicit stack so that a tall
        // tree never recurses once per level.
        let mut steps = vec![Step::Visit(self.root.as_deref())];
        let mut built: Vec<Link<T>> = Vec::new();
        while let Some(step) = steps.pop() {
            match step {
                Step::Visit(None) => built.push(None),
                Step::Visit(Some(node)) => {
                    steps.push(Step::Join(node));
                    steps.push(Step::Visit(node.right()));
                    steps.push(Step::Visit(node.left()));
                }
                Step::Join(node) => {
                    let right = built.pop().expect("Right subtree copied before joining");
                    let left = built.pop().expect("Left subtree copied before joining");
                    built.push(Some(Box::new(Node {
                        value: node.value.clone(),
                        left,
                        right,
                        count: node.count,
                    })));
                }
            }
        }

        Self {
            root: built.pop().expect("Root copied"),
        }
    }
}

/// Prints the values as a set in ascending order. Like the traversals, this
/// recurses once per level of the tree.
impl<T> fmt::Debug for Tree<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set()
            .entries(self.in_order().into_iter().map(|visit| visit.value))
            .finish()
    }
}

impl<T> Tree<T> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None }
    }

    /// Builds a perfectly balanced tree from strictly ascending `values`. The
    /// resulting height is `⌊log2(n)⌋` for `n` values. `values` is not
    /// modified.
    ///
    /// This is the preferred way to build a tree when the whole set is known
    /// upfront: inserting sorted values one at a time yields a tree whose
    /// height equals its size.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::NotStrictlyAscending`] if some element is not
    /// greater than the one before it.
    ///
    /// # Examples
    ///
    /// ```
    /// use ost::{BuildError, Tree};
    ///
    /// let tree = Tree::from_sorted(&[1, 2, 3, 4, 5, 6, 7]).unwrap();
    /// assert_eq!(tree.height(), 2);
    /// assert_eq!(tree.to_vec(), vec![1, 2, 3, 4, 5, 6, 7]);
    ///
    /// assert_eq!(
    ///     Tree::from_sorted(&[1, 3, 3]).unwrap_err(),
    ///     BuildError::NotStrictlyAscending { index: 2 },
    /// );
    /// ```
    pub fn from_sorted(values: &[T]) -> Result<Self, BuildError>
    where
        T: Ord + Clone,
    {
        if let Some(index) = values.windows(2).position(|pair| pair[0] >= pair[1]) {
            return Err(BuildError::NotStrictlyAscending { index: index + 1 });
        }
        debug!("Building balanced tree from {} sorted values", values.len());

        Ok(Self {
            root: Node::from_sorted(values),
        })
    }

    /// Inserts `value` into the tree. Returns `false`, leaving the tree
    /// unchanged, if the value was already present.
    ///
    /// # Examples
    ///
    /// ```
    /// use ost::Tree;
    ///
    /// let mut tree = Tree::new();
    ///
    /// assert!(tree.insert(1));
    /// assert!(!tree.insert(1));
    /// assert_eq!(tree.size(), 1);
    /// ```
    pub fn insert(&mut self, value: T) -> bool
    where
        T: Ord,
    {
        if self.contains(&value) {
            trace!("Insert is a no-op: value already present");
            return false;
        }

        // The value is known to be absent so every node on the way down gains
        // exactly one descendant.
        let mut link = &mut self.root;
        while let Some(node) = link {
            node.count += 1;
            link = if value < node.value {
                &mut node.left
            } else {
                &mut node.right
            };
        }
        *link = Some(Node::new_boxed(value));

        true
    }

    /// Returns whether `value` is in the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use ost::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1);
    ///
    /// assert!(tree.contains(&1));
    /// assert!(!tree.contains(&42));
    /// ```
    pub fn contains(&self, value: &T) -> bool
    where
        T: Ord,
    {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            current = match value.cmp(&node.value) {
                Ordering::Less => node.left(),
                Ordering::Equal => return true,
                Ordering::Greater => node.right(),
            };
        }
        false
    }

    /// Removes `value` from the tree. Returns `false`, leaving the tree
    /// unchanged, if the value was not present.
    ///
    /// A node with two children is not unlinked itself. Instead it takes the
    /// value of its in-order successor (the smallest value of its right
    /// subtree) and the successor's node is unlinked.
    ///
    /// ## Panics
    ///
    /// If the tree's internal structure is corrupt such that a node with a
    /// right child has no in-order successor.
    ///
    /// # Examples
    ///
    /// ```
    /// use ost::Tree;
    ///
    /// let mut tree: Tree<_> = [5, 3, 8].into_iter().collect();
    ///
    /// assert!(tree.remove(&5));
    /// assert!(!tree.contains(&5));
    /// assert_eq!(tree.to_vec(), vec![3, 8]);
    /// ```
    pub fn remove(&mut self, value: &T) -> bool
    where
        T: Ord,
    {
        if !self.contains(value) {
            trace!("Remove is a no-op: value not present");
            return false;
        }

        // The value is known to be present so every node above it loses
        // exactly one descendant.
        let mut link = &mut self.root;
        loop {
            let ordering = match link.as_deref() {
                Some(node) => value.cmp(&node.value),
                None => unreachable!("`contains` found the value along this path"),
            };
            if ordering == Ordering::Equal {
                break;
            }

            let Some(node) = link else {
                unreachable!("`contains` found the value along this path");
            };
            node.count -= 1;
            link = match ordering {
                Ordering::Less => &mut node.left,
                _ => &mut node.right,
            };
        }
        Node::unlink(link);

        true
    }

    /// Returns the smallest value in the tree, or `None` if it is empty.
    pub fn min(&self) -> Option<&T> {
        let mut current = self.root.as_deref()?;
        while let Some(left) = current.left() {
            current = left;
        }
        Some(&current.value)
    }

    /// Returns the largest value in the tree, or `None` if it is empty.
    pub fn max(&self) -> Option<&T> {
        let mut current = self.root.as_deref()?;
        while let Some(right) = current.right() {
            current = right;
        }
        Some(&current.value)
    }

    /// Returns the number of values in the tree. This is read from a cached
    /// count and takes constant time.
    pub fn size(&self) -> usize {
        subtree_size(self.root.as_deref())
    }

    /// Returns `true` if the tree holds no values.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Returns the number of edges on the longest path from the root to a
    /// leaf. A tree with one node has a height of 0 and an empty tree has a
    /// height of -1.
    ///
    /// This visits every node.
    pub fn height(&self) -> isize {
        self.nodes()
            .map(|(depth, _)| depth as isize)
            .max()
            .unwrap_or(-1)
    }
}

impl<T> FromIterator<T> for Tree<T>
where
    T: Ord,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<T> Extend<T> for Tree<T>
where
    T: Ord,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}


#[cfg(test)]
mod quicktests {
    use std::collections::BTreeSet;

    use super::*;
    use crate::test::oracle;
    use crate::test::quick::Op;

    /// Applies a set of operations to a tree and a `BTreeSet`.
    /// This way we can ensure that after a random smattering of inserts
    /// and deletes we have the same set of values in both.
    fn do_ops<T>(ops: &[Op<T>], bst: &mut Tree<T>, set: &mut BTreeSet<T>)
    where
        T: Ord + Clone + std::fmt::Debug,
    {
        for op in ops {
            match op {
                Op::Insert(x) => {
                    assert_eq!(bst.insert(x.clone()), set.insert(x.clone()));
                }
                Op::Remove(x) => {
                    assert_eq!(bst.remove(x), set.remove(x));
                }
                Op::Check => {
                    assert_eq!(bst.size(), set.len());
                    assert!(oracle::counts_are_consistent(bst));
                }
            }
        }
    }

    quickcheck::quickcheck! {
        fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
            let mut tree = Tree::new();
            let mut set = BTreeSet::new();

            do_ops(&ops, &mut tree, &mut set);
            (i8::MIN..=i8::MAX).all(|x| tree.contains(&x) == set.contains(&x))
                && tree.size() == set.len()
                && tree.to_vec() == set.iter().copied().collect::<Vec<_>>()
                && oracle::counts_are_consistent(&tree)
        }
    }

    quickcheck::quickcheck! {
        fn contains(xs: Vec<i8>) -> bool {
            let tree: Tree<_> = xs.iter().copied().collect();

            xs.iter().all(|x| tree.contains(x))
        }
    }

    quickcheck::quickcheck! {
        fn size_counts_successful_operations(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
            let mut tree = Tree::new();
            let inserted = xs.into_iter().filter(|x| tree.insert(*x)).count();
            let removed = deletes.iter().filter(|x| tree.remove(x)).count();

            tree.size() == inserted - removed
        }
    }

    quickcheck::quickcheck! {
        fn in_order_is_strictly_ascending(ops: Vec<Op<i8>>) -> bool {
            let mut tree = Tree::new();
            let mut set = BTreeSet::new();

            do_ops(&ops, &mut tree, &mut set);
            tree.to_vec().windows(2).all(|pair| pair[0] < pair[1])
        }
    }
}
