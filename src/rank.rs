//! Rank selection and range counting. Each query descends a single path from
//! the root and uses the cached subtree sizes to account for whole subtrees at
//! once, so all of them run in `O(height)`.

use crate::tree::{subtree_size, Node, Tree};

/// Counts the values `>= x` in the subtree rooted at `node`.
fn num_geq_in<T: Ord>(mut node: Option<&Node<T>>, x: &T) -> usize {
    let mut total = 0;
    while let Some(n) = node {
        if n.value >= *x {
            // Everything to the right is larger still.
            total += 1 + subtree_size(n.right());
            node = n.left();
        } else {
            node = n.right();
        }
    }
    total
}

/// Counts the values `<= x` in the subtree rooted at `node`.
fn num_leq_in<T: Ord>(mut node: Option<&Node<T>>, x: &T) -> usize {
    let mut total = 0;
    while let Some(n) = node {
        if n.value <= *x {
            total += 1 + subtree_size(n.left());
            node = n.right();
        } else {
            node = n.left();
        }
    }
    total
}

impl<T> Tree<T> {
    /// Returns the `i`-th smallest value in the tree, counting from 1. So
    /// `get_ith(1)` is the minimum and `get_ith(tree.size())` is the maximum.
    /// Returns `None` if `i` is 0 or larger than the size of the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use ost::Tree;
    ///
    /// let tree: Tree<_> = [5, 3, 8, 1, 4, 7, 9].into_iter().collect();
    ///
    /// assert_eq!(tree.get_ith(1), Some(&1));
    /// assert_eq!(tree.get_ith(3), Some(&4));
    /// assert_eq!(tree.get_ith(7), Some(&9));
    /// assert_eq!(tree.get_ith(0), None);
    /// assert_eq!(tree.get_ith(8), None);
    /// ```
    pub fn get_ith(&self, i: usize) -> Option<&T> {
        if i == 0 || i > self.size() {
            return None;
        }

        let mut i = i;
        let mut node = self.root.as_deref();
        while let Some(n) = node {
            let rank = subtree_size(n.left()) + 1;
            if i == rank {
                return Some(&n.value);
            }
            if i < rank {
                node = n.left();
            } else {
                i -= rank;
                node = n.right();
            }
        }
        None
    }

    /// Returns the number of values in the tree that are greater than or
    /// equal to `x`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ost::Tree;
    ///
    /// let tree: Tree<_> = [5, 3, 8, 1, 4, 7, 9].into_iter().collect();
    ///
    /// assert_eq!(tree.num_geq(&5), 4);
    /// assert_eq!(tree.num_geq(&6), 3);
    /// assert_eq!(tree.num_geq(&10), 0);
    /// ```
    pub fn num_geq(&self, x: &T) -> usize
    where
        T: Ord,
    {
        num_geq_in(self.root.as_deref(), x)
    }

    /// Returns the number of values in the tree that are less than or equal
    /// to `x`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ost::Tree;
    ///
    /// let tree: Tree<_> = [5, 3, 8, 1, 4, 7, 9].into_iter().collect();
    ///
    /// assert_eq!(tree.num_leq(&5), 4);
    /// assert_eq!(tree.num_leq(&0), 0);
    /// ```
    pub fn num_leq(&self, x: &T) -> usize
    where
        T: Ord,
    {
        num_leq_in(self.root.as_deref(), x)
    }

    /// Returns the number of values `v` in the tree with `min <= v <= max`.
    /// If `min > max` the range is empty.
    ///
    /// The search walks down while the current value lies outside the range.
    /// The first value inside it splits the range in two: everything in range
    /// to its left is `>= min` and everything in range to its right is
    /// `<= max`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ost::Tree;
    ///
    /// let tree: Tree<_> = [5, 3, 8, 1, 4, 7, 9].into_iter().collect();
    ///
    /// assert_eq!(tree.num_range(&3, &8), 5);
    /// assert_eq!(tree.num_range(&5, &5), 1);
    /// assert_eq!(tree.num_range(&8, &3), 0);
    /// ```
    pub fn num_range(&self, min: &T, max: &T) -> usize
    where
        T: Ord,
    {
        let mut node = self.root.as_deref();
        while let Some(n) = node {
            if n.value < *min {
                node = n.right();
            } else if n.value > *max {
                node = n.left();
            } else {
                return 1 + num_geq_in(n.left(), min) + num_leq_in(n.right(), max);
            }
        }
        0
    }
}
