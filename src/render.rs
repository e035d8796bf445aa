//! Diagnostic tree printer
//!
//! Renders a heap for inspection: roots top to bottom in root-list order,
//! starting at [`FibonacciHeap::first`], with each node's children nested
//! beneath it. Only the read-only traversal accessors are used.
//!
//! ```text
//! ╮
//! ├── 2
//! ╰── 3
//!     ╰── 4
//! ```
//!
//! The verbose form replaces every key with a box listing the node's rank,
//! mark and neighbours.

use crate::fibonacci::FibonacciHeap;
use crate::node::{Node, NodeId};
use std::fmt::{self, Write};

const NULL: &str = "(null)";

/// Renders `heap` as a tree diagram.
pub fn render(heap: &FibonacciHeap, verbose: bool) -> String {
    Tree { heap, verbose }.to_string()
}

/// Display adapter over [`write_tree`].
struct Tree<'a> {
    heap: &'a FibonacciHeap,
    verbose: bool,
}

impl fmt::Display for Tree<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_tree(f, self.heap, self.verbose)
    }
}

/// Writes the tree diagram of `heap` into `out`.
pub fn write_tree<W: Write>(out: &mut W, heap: &FibonacciHeap, verbose: bool) -> fmt::Result {
    let Some(first) = heap.first() else {
        return out.write_str("(empty)\n");
    };
    out.write_str("╮\n")?;
    let mut guides = Vec::new();
    write_ring(out, heap, first, &mut guides, verbose)
}

/// `guides[i]` records whether the ancestor at depth `i` has a following sibling.
fn write_ring<W: Write>(
    out: &mut W,
    heap: &FibonacciHeap,
    start: NodeId,
    guides: &mut Vec<bool>,
    verbose: bool,
) -> fmt::Result {
    let mut cur = start;
    loop {
        let Some(node) = heap.node(cur) else {
            return Ok(());
        };
        let has_next = node.next() != start;
        guides.push(has_next);
        if verbose {
            write_box(out, heap, &node, guides)?;
        } else {
            indent(out, guides)?;
            writeln!(out, "{}── {}", branch(has_next), node.key())?;
        }
        if let Some(child) = node.child() {
            write_ring(out, heap, child, guides, verbose)?;
        }
        guides.pop();

        if !has_next {
            return Ok(());
        }
        cur = node.next();
    }
}

fn branch(has_next: bool) -> char {
    if has_next {
        '├'
    } else {
        '╰'
    }
}

fn rail(has_next: bool) -> char {
    if has_next {
        '│'
    } else {
        ' '
    }
}

fn indent<W: Write>(out: &mut W, guides: &[bool]) -> fmt::Result {
    for &open in &guides[..guides.len().saturating_sub(1)] {
        out.write_char(rail(open))?;
        out.write_str("   ")?;
    }
    Ok(())
}

fn key_or_null(heap: &FibonacciHeap, id: Option<NodeId>) -> String {
    id.and_then(|id| heap.key(id))
        .map_or_else(|| NULL.to_string(), |key| key.to_string())
}

fn write_box<W: Write>(
    out: &mut W,
    heap: &FibonacciHeap,
    node: &Node,
    guides: &[bool],
) -> fmt::Result {
    let has_next = guides.last().copied().unwrap_or(false);
    let title = format!(" Key: {} ", node.key());
    let content = [
        format!(" Rank: {} ", node.rank()),
        format!(" Marked: {} ", node.is_marked()),
        format!(" Parent: {} ", key_or_null(heap, node.parent())),
        format!(" Next: {} ", key_or_null(heap, Some(node.next()))),
        format!(" Prev: {} ", key_or_null(heap, Some(node.prev()))),
        format!(" Child: {}", key_or_null(heap, node.child())),
    ];
    let width = content
        .iter()
        .chain(std::iter::once(&title))
        .map(|line| line.chars().count())
        .max()
        .unwrap_or(0);
    let line = "─".repeat(width);
    let side = rail(has_next);

    indent(out, guides)?;
    writeln!(out, "{}── ╭{}╮", branch(has_next), line)?;
    indent(out, guides)?;
    writeln!(out, "{}   │{:<width$}│", side, title, width = width)?;
    indent(out, guides)?;
    writeln!(out, "{}   ├{}┤", side, line)?;
    for row in &content {
        indent(out, guides)?;
        writeln!(out, "{}   │{:<width$}│", side, row, width = width)?;
    }
    indent(out, guides)?;
    writeln!(out, "{}   ╰{}╯", side, line)
}
