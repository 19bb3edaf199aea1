//! Parenthesised rendering.
//!
//! A leaf renders as its bare item. An inner node renders as
//! `(` left `,` item `,` right `)`, where an absent side and its comma are
//! left out. An empty tree renders as `()`.
//!
//! ```text
//!        42
//!       /  \          ((13,22),42,1963)
//!     13    1963
//!       \
//!        22
//! ```
//!
//! [`dump`] is the multi-line debugging view, one node per line.

use std::fmt;

use crate::types::{ItemNode, Node};

use super::{get_l, get_r};

enum Step {
    Enter(u32),
    Item(u32),
    Text(&'static str),
}

/// Writes the parenthesised form of the tree at `root`.
///
/// The form does not round-trip shape: a lone child prints the same on
/// either side, so `2` over a left `1` and `1` over a right `2` both give
/// `(1,2)`. Use [`dump`] when the side matters.
pub fn render<T, N>(arena: &[N], root: Option<u32>, f: &mut fmt::Formatter<'_>) -> fmt::Result
where
    T: fmt::Display,
    N: ItemNode<T>,
{
    let Some(root) = root else {
        return f.write_str("()");
    };

    let mut stack = vec![Step::Enter(root)];
    while let Some(step) = stack.pop() {
        match step {
            Step::Enter(n) => {
                let l = get_l(arena, n);
                let r = get_r(arena, n);
                if l.is_none() && r.is_none() {
                    write!(f, "{}", arena[n as usize].item())?;
                    continue;
                }
                f.write_str("(")?;
                stack.push(Step::Text(")"));
                if let Some(r) = r {
                    stack.push(Step::Enter(r));
                    stack.push(Step::Text(","));
                }
                stack.push(Step::Item(n));
                if let Some(l) = l {
                    stack.push(Step::Text(","));
                    stack.push(Step::Enter(l));
                }
            }
            Step::Item(n) => write!(f, "{}", arena[n as usize].item())?,
            Step::Text(s) => f.write_str(s)?,
        }
    }
    Ok(())
}

/// Multi-line box-drawing dump of the tree under `root`.
///
/// `label` renders one node. A node with a single child shows the absent
/// side as `∅`.
pub fn dump<N, F>(arena: &[N], root: Option<u32>, label: F) -> String
where
    N: Node,
    F: Fn(u32) -> String,
{
    let Some(root) = root else {
        return "∅".to_string();
    };

    let mut out = label(root);
    let mut stack: Vec<(Option<u32>, String, bool, char)> = Vec::new();
    push_children(arena, root, String::new(), &mut stack);
    while let Some((node, tab, is_last, side)) = stack.pop() {
        out.push('\n');
        out.push_str(&tab);
        out.push_str(if is_last { "└─ " } else { "├─ " });
        out.push(side);
        out.push(' ');
        match node {
            Some(n) => {
                out.push_str(&label(n));
                let child_tab = format!("{tab}{}", if is_last { "   " } else { "│  " });
                push_children(arena, n, child_tab, &mut stack);
            }
            None => out.push('∅'),
        }
    }
    out
}

fn push_children<N: Node>(
    arena: &[N],
    n: u32,
    tab: String,
    stack: &mut Vec<(Option<u32>, String, bool, char)>,
) {
    let l = get_l(arena, n);
    let r = get_r(arena, n);
    if l.is_none() && r.is_none() {
        return;
    }
    stack.push((r, tab.clone(), true, 'R'));
    stack.push((l, tab, false, 'L'));
}
