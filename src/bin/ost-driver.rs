//! Reads whitespace-separated integers, inserts each into a fresh
//! order-statistics tree and reports on the tree's shape.
//!
//! Small trees are printed in full (in-order, pre-order and post-order). The
//! height and number of leaves are always reported.

use std::env;
use std::fmt::Display;
use std::fs::File;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::process;

use clap::Parser;
use log::{debug, error, warn};
use thiserror::Error;

use ost::render::{InOrder, PostOrder, PreOrder};
use ost::Tree;

#[derive(Parser, Debug)]
#[command(version, about = "Build an order-statistics tree from integers and report its shape")]
struct Args {
    /// File to read integers from. Reads standard input when omitted.
    input: Option<PathBuf>,

    /// Print the traversals only when the tree holds at most this many values.
    #[arg(short, long, default_value_t = 20)]
    display_limit: usize,
}

#[derive(Error, Debug)]
enum DriverError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Parses integers until the input runs out or a token isn't an integer.
fn read_values<R: Read>(mut reader: R) -> Result<Vec<i64>, DriverError> {
    let mut input = String::new();
    reader.read_to_string(&mut input)?;

    let mut values = Vec::new();
    for token in input.split_whitespace() {
        match token.parse() {
            Ok(value) => values.push(value),
            Err(e) => {
                warn!("Stopped reading at {:?}: {}", token, e);
                break;
            }
        }
    }
    Ok(values)
}

fn section<W: Write>(out: &mut W, name: &str, body: impl Display) -> io::Result<()> {
    writeln!(out, "\n======== BEGIN {} ============", name)?;
    write!(out, "{}", body)?;
    writeln!(out, "\n========  END {}  ============", name)
}

fn report<W: Write>(tree: &Tree<i64>, display_limit: usize, out: &mut W) -> io::Result<()> {
    if tree.size() <= display_limit {
        section(out, "INORDER", InOrder(tree))?;
        section(out, "PREORDER", PreOrder(tree))?;
        section(out, "POSTORDER", PostOrder(tree))?;
    } else {
        debug!(
            "Skipping traversals: {} values exceeds display limit of {}",
            tree.size(),
            display_limit
        );
    }

    writeln!(out, "\n#### Reported height of tree:   {}", tree.height())?;
    writeln!(out, "\n#### Reported number of leaves:   {}", tree.num_leaves())
}

fn run(args: Args) -> Result<(), DriverError> {
    let values = match &args.input {
        Some(path) => read_values(File::open(path)?)?,
        None => read_values(io::stdin().lock())?,
    };

    let mut tree = Tree::new();
    let duplicates = values.iter().filter(|v| !tree.insert(**v)).count();
    debug!(
        "Read {} values, {} of them duplicates",
        values.len(),
        duplicates
    );

    let stdout = io::stdout();
    let mut stdout = stdout.lock();
    report(&tree, args.display_limit, &mut stdout)?;
    stdout.flush()?;
    Ok(())
}

fn main() {
    let filters = env::var("RUST_LOG").unwrap_or_else(|_| "warn".to_string());
    pretty_env_logger::formatted_builder()
        .parse_filters(&filters)
        .init();

    if let Err(e) = run(Args::parse()) {
        error!("{}", e);
        process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report_string(tree: &Tree<i64>, display_limit: usize) -> String {
        let mut out = Vec::new();
        report(tree, display_limit, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn reads_until_end_of_input() {
        let values = read_values("5 3\n8\t1  4\n".as_bytes()).unwrap();
        assert_eq!(values, vec![5, 3, 8, 1, 4]);
    }

    #[test]
    fn stops_at_first_non_integer() {
        let values = read_values("5 3 x 8".as_bytes()).unwrap();
        assert_eq!(values, vec![5, 3]);
    }

    #[test]
    fn small_tree_prints_traversals() {
        let tree: Tree<i64> = [2, 1, 3].into_iter().collect();
        let output = report_string(&tree, 20);

        assert!(output.contains("======== BEGIN INORDER ============\n[ 1 ]\n[ 2 ]\n[ 3 ]\n"));
        assert!(output.contains("========  END POSTORDER  ============"));
        assert!(output.contains("---[ 1 ]"));
        assert!(output.ends_with(
            "#### Reported height of tree:   1\n\n#### Reported number of leaves:   2\n"
        ));
    }

    #[test]
    fn large_tree_skips_traversals() {
        let tree: Tree<i64> = (0..21).collect();
        let output = report_string(&tree, 20);

        assert!(!output.contains("BEGIN"));
        assert!(output.contains("#### Reported height of tree:   20"));
        assert!(output.contains("#### Reported number of leaves:   1"));
    }

    #[test]
    fn empty_input() {
        let tree = Tree::new();
        let output = report_string(&tree, 20);

        assert!(output.contains("#### Reported height of tree:   -1"));
        assert!(output.contains("#### Reported number of leaves:   0"));
    }
}
