//! Text layouts for the traversals of a [`Tree`].
//!
//! Each layout is a thin [`Display`][fmt::Display] adapter over the
//! [`Visit`][crate::Visit]s of one traversal, one node per line.
//!
//! # Examples
//!
//! ```
//! use ost::render::PreOrder;
//! use ost::Tree;
//!
//! let tree: Tree<_> = [2, 1].into_iter().collect();
//!
//! assert_eq!(
//!     PreOrder(&tree).to_string(),
//!     "[ 2 ]\n---[ 1 ]\n------ nil\n------ nil\n--- nil\n",
//! );
//! ```

use std::fmt;

use crate::Tree;

/// Printed once per level of depth in front of a node.
const INDENT: &str = "---";

fn indent(f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
    for _ in 0..depth {
        f.write_str(INDENT)?;
    }
    Ok(())
}

fn line(f: &mut fmt::Formatter<'_>, depth: usize, value: &impl fmt::Display) -> fmt::Result {
    indent(f, depth)?;
    writeln!(f, "[ {} ]", value)
}

fn absent(f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
    indent(f, depth)?;
    writeln!(f, " nil")
}

/// Lists the values in ascending order, one `[ value ]` per line.
pub struct InOrder<'a, T>(pub &'a Tree<T>);

impl<T> fmt::Display for InOrder<'_, T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for visit in self.0.in_order() {
            line(f, 0, visit.value)?;
        }
        Ok(())
    }
}

/// Lists each node before its subtrees, indented by its depth. Missing
/// children are printed as `nil` so the shape of the tree can be read back
/// off the output.
pub struct PreOrder<'a, T>(pub &'a Tree<T>);

impl<T> fmt::Display for PreOrder<'_, T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let visits = self.0.pre_order();
        if visits.is_empty() {
            return absent(f, 0);
        }

        // Depths of the `nil` markers owed for missing right children. Each is
        // printed once the traversal leaves its parent's left subtree.
        let mut owed: Vec<usize> = Vec::new();
        for visit in visits {
            while let Some(&depth) = owed.last() {
                if depth <= visit.depth {
                    break;
                }
                owed.pop();
                absent(f, depth)?;
            }

            line(f, visit.depth, visit.value)?;
            if !visit.has_left {
                absent(f, visit.depth + 1)?;
            }
            if !visit.has_right {
                owed.push(visit.depth + 1);
            }
        }
        while let Some(depth) = owed.pop() {
            absent(f, depth)?;
        }
        Ok(())
    }
}

/// Lists each node after its subtrees, indented by its depth.
pub struct PostOrder<'a, T>(pub &'a Tree<T>);

impl<T> fmt::Display for PostOrder<'_, T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for visit in self.0.post_order() {
            line(f, visit.depth, visit.value)?;
        }
        Ok(())
    }
}
