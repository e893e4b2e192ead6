use thiserror::Error;

/// Errors produced while building a [`Tree`][crate::Tree] in bulk.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildError {
    /// The input to [`Tree::from_sorted`][crate::Tree::from_sorted] was not
    /// strictly ascending. `index` is the position of the first element that
    /// is not greater than its predecessor.
    #[error("input is not strictly ascending at index {index}")]
    NotStrictlyAscending {
        /// Position of the offending element.
        index: usize,
    },
}
