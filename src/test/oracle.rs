//! Linear-time reference implementations of the rank and counting queries.
//! They inspect every node and test the predicate directly, so they are the
//! ground truth the `O(height)` versions are checked against.

use crate::tree::{subtree_size, Node, Tree};

pub(crate) fn get_ith_slow<T>(tree: &Tree<T>, i: usize) -> Option<&T> {
    let index = i.checked_sub(1)?;
    tree.in_order().get(index).map(|visit| visit.value)
}

pub(crate) fn num_geq_slow<T: Ord>(tree: &Tree<T>, x: &T) -> usize {
    tree.nodes().filter(|(_, n)| n.value >= *x).count()
}

pub(crate) fn num_leq_slow<T: Ord>(tree: &Tree<T>, x: &T) -> usize {
    tree.nodes().filter(|(_, n)| n.value <= *x).count()
}

pub(crate) fn num_range_slow<T: Ord>(tree: &Tree<T>, min: &T, max: &T) -> usize {
    tree.nodes()
        .filter(|(_, n)| n.value >= *min && n.value <= *max)
        .count()
}

/// Checks that every node's cached count is one more than the sum of its
/// children's counts, and that every value lies strictly between the bounds
/// its ancestors impose. Walks with an explicit stack so tall trees are fine.
pub(crate) fn counts_are_consistent<T: Ord>(tree: &Tree<T>) -> bool {
    let mut stack: Vec<(&Node<T>, Option<&T>, Option<&T>)> = tree
        .root
        .as_deref()
        .map(|root| (root, None, None))
        .into_iter()
        .collect();

    while let Some((node, lower, upper)) = stack.pop() {
        let value = &node.value;
        if lower.map_or(false, |lower| value <= lower) || upper.map_or(false, |upper| value >= upper)
        {
            return false;
        }
        if node.count != 1 + subtree_size(node.left()) + subtree_size(node.right()) {
            return false;
        }
        stack.extend(node.left().map(|left| (left, lower, Some(value))));
        stack.extend(node.right().map(|right| (right, Some(value), upper)));
    }
    true
}
