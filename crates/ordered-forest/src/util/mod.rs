//! Link-level utilities shared by every tree in the crate.
//!
//! Everything here works on a bare [`Node`] arena: navigation (`first`,
//! `last`, `next`, `prev`), rotations, splicing out a node with at most one
//! child, and arena compaction. Nothing here looks at items.

pub mod print;
pub mod walk;

use log::trace;

use crate::types::Node;

pub use walk::walk;

#[inline]
pub(crate) fn get_p<N: Node>(arena: &[N], idx: u32) -> Option<u32> {
    arena[idx as usize].p()
}

#[inline]
pub(crate) fn get_l<N: Node>(arena: &[N], idx: u32) -> Option<u32> {
    arena[idx as usize].l()
}

#[inline]
pub(crate) fn get_r<N: Node>(arena: &[N], idx: u32) -> Option<u32> {
    arena[idx as usize].r()
}

#[inline]
pub(crate) fn set_p<N: Node>(arena: &mut [N], idx: u32, v: Option<u32>) {
    arena[idx as usize].set_p(v);
}

#[inline]
pub(crate) fn set_l<N: Node>(arena: &mut [N], idx: u32, v: Option<u32>) {
    arena[idx as usize].set_l(v);
}

#[inline]
pub(crate) fn set_r<N: Node>(arena: &mut [N], idx: u32, v: Option<u32>) {
    arena[idx as usize].set_r(v);
}

/// Leftmost node under `root`.
pub fn first<N: Node>(arena: &[N], root: Option<u32>) -> Option<u32> {
    let mut curr = root?;
    while let Some(l) = get_l(arena, curr) {
        curr = l;
    }
    Some(curr)
}

/// Rightmost node under `root`.
pub fn last<N: Node>(arena: &[N], root: Option<u32>) -> Option<u32> {
    let mut curr = root?;
    while let Some(r) = get_r(arena, curr) {
        curr = r;
    }
    Some(curr)
}

/// In-order successor.
pub fn next<N: Node>(arena: &[N], node: u32) -> Option<u32> {
    if let Some(r) = get_r(arena, node) {
        return first(arena, Some(r));
    }
    let mut curr = node;
    let mut p = get_p(arena, node);
    while let Some(pi) = p {
        if get_r(arena, pi) == Some(curr) {
            curr = pi;
            p = get_p(arena, pi);
        } else {
            return Some(pi);
        }
    }
    None
}

/// In-order predecessor.
pub fn prev<N: Node>(arena: &[N], node: u32) -> Option<u32> {
    if let Some(l) = get_l(arena, node) {
        return last(arena, Some(l));
    }
    let mut curr = node;
    let mut p = get_p(arena, node);
    while let Some(pi) = p {
        if get_l(arena, pi) == Some(curr) {
            curr = pi;
            p = get_p(arena, pi);
        } else {
            return Some(pi);
        }
    }
    None
}

/// Number of nodes on the longest root-to-leaf path.
pub fn height<N: Node>(arena: &[N], root: Option<u32>) -> usize {
    let mut max = 0;
    let mut stack: Vec<(u32, usize)> = root.map(|r| (r, 1)).into_iter().collect();
    while let Some((n, depth)) = stack.pop() {
        max = max.max(depth);
        if let Some(l) = get_l(arena, n) {
            stack.push((l, depth + 1));
        }
        if let Some(r) = get_r(arena, n) {
            stack.push((r, depth + 1));
        }
    }
    max
}

/// Points `parent`'s link that currently holds `old` at `new`.
///
/// A `None` parent means `old` was the root; the caller tracks the root.
pub(crate) fn replace_child<N: Node>(
    arena: &mut [N],
    parent: Option<u32>,
    old: u32,
    new: Option<u32>,
) {
    if let Some(p) = parent {
        if get_l(arena, p) == Some(old) {
            set_l(arena, p, new);
        } else {
            set_r(arena, p, new);
        }
    }
}

/// Promotes `n`'s right child into `n`'s position; `n` becomes its left
/// child and inherits the promoted node's former left subtree.
///
/// Returns the promoted node. Parent links of all three moved nodes are
/// kept in sync.
pub(crate) fn rotate_left<N: Node>(arena: &mut [N], n: u32) -> u32 {
    let r = get_r(arena, n).expect("rotate_left needs a right child");
    let p = get_p(arena, n);
    let rl = get_l(arena, r);

    set_r(arena, n, rl);
    if let Some(rl) = rl {
        set_p(arena, rl, Some(n));
    }
    set_l(arena, r, Some(n));
    set_p(arena, n, Some(r));
    set_p(arena, r, p);
    replace_child(arena, p, n, Some(r));

    trace!("rotate left at node {n}, promoted {r}");
    r
}

/// Mirror of [`rotate_left`].
pub(crate) fn rotate_right<N: Node>(arena: &mut [N], n: u32) -> u32 {
    let l = get_l(arena, n).expect("rotate_right needs a left child");
    let p = get_p(arena, n);
    let lr = get_r(arena, l);

    set_l(arena, n, lr);
    if let Some(lr) = lr {
        set_p(arena, lr, Some(n));
    }
    set_r(arena, l, Some(n));
    set_p(arena, n, Some(l));
    set_p(arena, l, p);
    replace_child(arena, p, n, Some(l));

    trace!("rotate right at node {n}, promoted {l}");
    l
}

/// Result of [`splice_out`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Spliced {
    /// Root after the splice, `None` once the tree is empty.
    pub root: Option<u32>,
    /// Former parent of the removed node.
    pub parent: Option<u32>,
    /// Node that took the removed node's place.
    pub child: Option<u32>,
}

/// Detaches `node`, which must have at most one child, and lets that child
/// take its place.
pub(crate) fn splice_out<N: Node>(arena: &mut [N], root: u32, node: u32) -> Spliced {
    let p = get_p(arena, node);
    let l = get_l(arena, node);
    let r = get_r(arena, node);
    debug_assert!(l.is_none() || r.is_none(), "splice_out needs at most one child");
    let child = l.or(r);

    if let Some(c) = child {
        set_p(arena, c, p);
    }
    replace_child(arena, p, node, child);
    set_p(arena, node, None);
    set_l(arena, node, None);
    set_r(arena, node, None);

    Spliced {
        root: if p.is_some() { Some(root) } else { child },
        parent: p,
        child,
    }
}

/// Removes the detached node `hole` from the arena with `swap_remove`.
///
/// The node that moves into the freed slot has its parent's child link, its
/// children's parent links and, if it is the root, `root` re-pointed.
pub(crate) fn compact<N: Node>(arena: &mut Vec<N>, root: &mut Option<u32>, hole: u32) -> N {
    let moved = (arena.len() - 1) as u32;
    let removed = arena.swap_remove(hole as usize);
    if moved == hole {
        return removed;
    }

    trace!("compacting arena: node {moved} -> {hole}");
    match get_p(arena, hole) {
        Some(p) => {
            if get_l(arena, p) == Some(moved) {
                set_l(arena, p, Some(hole));
            } else {
                set_r(arena, p, Some(hole));
            }
        }
        None => *root = Some(hole),
    }
    if let Some(l) = get_l(arena, hole) {
        set_p(arena, l, Some(hole));
    }
    if let Some(r) = get_r(arena, hole) {
        set_p(arena, r, Some(hole));
    }
    removed
}

/// Checks parent/child link symmetry and that every arena slot is reachable.
pub fn check_links<N: Node>(arena: &[N], root: Option<u32>) -> Result<(), String> {
    let Some(root) = root else {
        return if arena.is_empty() {
            Ok(())
        } else {
            Err(format!("Empty tree holds {} arena nodes", arena.len()))
        };
    };

    if get_p(arena, root).is_some() {
        return Err("Root has parent".to_string());
    }

    let mut reached = 0usize;
    let mut stack = vec![root];
    while let Some(n) = stack.pop() {
        reached += 1;
        if reached > arena.len() {
            return Err("Cycle in tree links".to_string());
        }
        if let Some(l) = get_l(arena, n) {
            if get_p(arena, l) != Some(n) {
                return Err("Broken parent link on left child".to_string());
            }
            stack.push(l);
        }
        if let Some(r) = get_r(arena, n) {
            if get_p(arena, r) != Some(n) {
                return Err("Broken parent link on right child".to_string());
            }
            stack.push(r);
        }
    }

    if reached != arena.len() {
        return Err(format!(
            "Reached {reached} nodes but arena holds {}",
            arena.len()
        ));
    }
    Ok(())
}


#[cfg(test)]
mod tests {
    use super::test_node::{link, sample, Bare};
    use super::*;

    fn in_order(arena: &[Bare], root: Option<u32>) -> Vec<u32> {
        std::iter::successors(first(arena, root), |&i| next(arena, i)).collect()
    }

    #[test]
    fn navigation() {
        let arena = sample();
        assert_eq!(first(&arena, Some(0)), Some(3));
        assert_eq!(last(&arena, Some(0)), Some(2));
        assert_eq!(in_order(&arena, Some(0)), vec![3, 1, 4, 0, 2]);
        assert_eq!(prev(&arena, 0), Some(4));
        assert_eq!(prev(&arena, 3), None);
        assert_eq!(next(&arena, 2), None);
        assert_eq!(height(&arena, Some(0)), 3);
        assert_eq!(height::<Bare>(&arena, None), 0);
        assert_eq!(first::<Bare>(&arena, None), None);
    }

    #[test]
    fn rotations_preserve_order_and_links() {
        let mut arena = sample();
        let top = rotate_right(&mut arena, 0);
        assert_eq!(top, 1);
        assert_eq!(get_p(&arena, 1), None);
        assert_eq!(get_l(&arena, 0), Some(4));
        assert_eq!(get_p(&arena, 4), Some(0));
        assert_eq!(in_order(&arena, Some(1)), vec![3, 1, 4, 0, 2]);
        check_links(&arena, Some(1)).unwrap();

        let top = rotate_left(&mut arena, 1);
        assert_eq!(top, 0);
        assert_eq!(in_order(&arena, Some(0)), vec![3, 1, 4, 0, 2]);
        check_links(&arena, Some(0)).unwrap();
    }

    #[test]
    fn splice_and_compact() {
        let mut arena = sample();
        let spliced = splice_out(&mut arena, 0, 2);
        assert_eq!(
            spliced,
            Spliced {
                root: Some(0),
                parent: Some(0),
                child: None
            }
        );

        let mut root = spliced.root;
        compact(&mut arena, &mut root, 2);
        // node 4 moved into slot 2
        assert_eq!(arena.len(), 4);
        assert_eq!(get_r(&arena, 1), Some(2));
        assert_eq!(in_order(&arena, root), vec![3, 1, 2, 0]);
        check_links(&arena, root).unwrap();
    }

    #[test]
    fn compacting_moves_the_root() {
        let mut arena = vec![Bare::default(); 3];
        link(&mut arena, 2, Some(0), Some(1));
        let s = splice_out(&mut arena, 2, 0);
        let mut root = s.root;
        assert_eq!(root, Some(2));

        compact(&mut arena, &mut root, 0);
        assert_eq!(root, Some(0));
        assert_eq!(get_r(&arena, 0), Some(1));
        assert_eq!(get_p(&arena, 1), Some(0));
        check_links(&arena, root).unwrap();
        assert_eq!(arena.len(), 2);
    }

    #[test]
    fn check_links_reports_asymmetry() {
        let mut arena = sample();
        arena[4].p = Some(0);
        assert_eq!(
            check_links(&arena, Some(0)),
            Err("Broken parent link on right child".to_string())
        );
        let arena = sample();
        assert!(check_links(&arena, Some(1)).is_err());
    }
}
