//! Iterative depth-first walks.
//!
//! An explicit stack replaces recursion, so a degenerate (list-shaped) tree
//! of any height is walked without growing the call stack.

use crate::types::{Node, Traversal};

use super::{get_l, get_r};

/// Calls `visit` with every node index under `root` in `order`.
pub fn walk<N, F>(arena: &[N], root: Option<u32>, order: Traversal, mut visit: F)
where
    N: Node,
    F: FnMut(u32),
{
    match order {
        Traversal::PreOrder => {
            let mut stack: Vec<u32> = root.into_iter().collect();
            while let Some(n) = stack.pop() {
                visit(n);
                if let Some(r) = get_r(arena, n) {
                    stack.push(r);
                }
                if let Some(l) = get_l(arena, n) {
                    stack.push(l);
                }
            }
        }
        Traversal::InOrder => {
            let mut stack = Vec::new();
            let mut curr = root;
            loop {
                while let Some(n) = curr {
                    stack.push(n);
                    curr = get_l(arena, n);
                }
                let Some(n) = stack.pop() else {
                    break;
                };
                visit(n);
                curr = get_r(arena, n);
            }
        }
        Traversal::PostOrder => {
            // node, right, left reversed is left, right, node
            let mut stack: Vec<u32> = root.into_iter().collect();
            let mut out = Vec::new();
            while let Some(n) = stack.pop() {
                out.push(n);
                if let Some(l) = get_l(arena, n) {
                    stack.push(l);
                }
                if let Some(r) = get_r(arena, n) {
                    stack.push(r);
                }
            }
            for n in out.into_iter().rev() {
                visit(n);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_node::{link, sample, Bare};
    use super::*;

    fn collect(arena: &[Bare], root: Option<u32>, order: Traversal) -> Vec<u32> {
        let mut out = Vec::new();
        walk(arena, root, order, |n| out.push(n));
        out
    }

    #[test]
    fn three_orders() {
        let arena = sample();
        assert_eq!(collect(&arena, Some(0), Traversal::InOrder), vec![3, 1, 4, 0, 2]);
        assert_eq!(collect(&arena, Some(0), Traversal::PreOrder), vec![0, 1, 3, 4, 2]);
        assert_eq!(collect(&arena, Some(0), Traversal::PostOrder), vec![3, 4, 1, 2, 0]);
    }

    #[test]
    fn empty_tree_visits_nothing() {
        let arena: Vec<Bare> = Vec::new();
        for order in [Traversal::InOrder, Traversal::PreOrder, Traversal::PostOrder] {
            assert!(collect(&arena, None, order).is_empty());
        }
    }

    #[test]
    fn deep_chain() {
        let len = 100_000u32;
        let mut arena = vec![Bare::default(); len as usize];
        for i in 0..len - 1 {
            link(&mut arena, i, None, Some(i + 1));
        }
        let in_order = collect(&arena, Some(0), Traversal::InOrder);
        assert_eq!(in_order.len(), len as usize);
        assert_eq!(in_order.first(), Some(&0));
        let post = collect(&arena, Some(0), Traversal::PostOrder);
        assert_eq!(post.first(), Some(&(len - 1)));
    }
}
