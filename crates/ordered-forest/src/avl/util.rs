use std::marker::PhantomData;

use log::trace;

use crate::data_types::SetTreeOps;
use crate::types::{ItemNode, Traversal};
use crate::util::{self, check_links, get_l, get_p, get_r, splice_out, walk};

use super::types::{AvlNode, AvlNodeLike};

#[inline]
fn h<N: AvlNodeLike>(arena: &[N], i: Option<u32>) -> i64 {
    i.map_or(0, |i| arena[i as usize].h() as i64)
}

#[inline]
fn update_height<N: AvlNodeLike>(arena: &mut [N], n: u32) {
    let lh = h(arena, get_l(arena, n));
    let rh = h(arena, get_r(arena, n));
    arena[n as usize].set_h(1 + lh.max(rh) as u32);
}

/// `h(l) - h(r)` from the cached child heights.
#[inline]
pub fn bf<N: AvlNodeLike>(arena: &[N], n: u32) -> i64 {
    h(arena, get_l(arena, n)) - h(arena, get_r(arena, n))
}

fn rotate_left<N: AvlNodeLike>(arena: &mut [N], n: u32) -> u32 {
    let r = util::rotate_left(arena, n);
    update_height(arena, n);
    update_height(arena, r);
    r
}

fn rotate_right<N: AvlNodeLike>(arena: &mut [N], n: u32) -> u32 {
    let l = util::rotate_right(arena, n);
    update_height(arena, n);
    update_height(arena, l);
    l
}

/// Refreshes `n`'s height and rotates if it leans by two.
///
/// Returns the node now at `n`'s position.
fn rebalance<N: AvlNodeLike>(arena: &mut [N], n: u32) -> u32 {
    update_height(arena, n);
    match bf(arena, n) {
        2 => {
            let l = get_l(arena, n).expect("left-heavy node has a left child");
            if bf(arena, l) < 0 {
                rotate_left(arena, l);
            }
            rotate_right(arena, n)
        }
        -2 => {
            let r = get_r(arena, n).expect("right-heavy node has a right child");
            if bf(arena, r) > 0 {
                rotate_right(arena, r);
            }
            rotate_left(arena, n)
        }
        _ => n,
    }
}

/// Rebalances every ancestor from `from` up to the root.
///
/// Returns the root, which changes when the top rotation promotes a child.
pub fn rebalance_upward<N: AvlNodeLike>(arena: &mut [N], root: u32, from: Option<u32>) -> u32 {
    let mut root = root;
    let mut curr = from;
    while let Some(n) = curr {
        let top = rebalance(arena, n);
        let p = get_p(arena, top);
        if p.is_none() {
            root = top;
        }
        curr = p;
    }
    root
}

/// Height-driven AVL balancing for [`crate::data_types::ForestSet`].
pub struct AvlOps<T>(PhantomData<T>);

impl<T> SetTreeOps<T, AvlNode<T>> for AvlOps<T> {
    fn new_node(item: T) -> AvlNode<T> {
        AvlNode::new(item)
    }

    fn insert_fixup(arena: &mut [AvlNode<T>], root: u32, node: u32) -> u32 {
        let p = get_p(arena, node);
        rebalance_upward(arena, root, p)
    }

    fn remove(arena: &mut [AvlNode<T>], root: u32, node: u32) -> Option<u32> {
        let spliced = splice_out(arena, root, node);
        trace!("avl: unlinked node {node}, rebalancing from {:?}", spliced.parent);
        spliced
            .root
            .map(|root| rebalance_upward(arena, root, spliced.parent))
    }
}

/// Checks links, cached heights and the balance bound on every node.
///
/// Item order is checked by the caller.
pub fn assert_avl_tree<N: AvlNodeLike>(arena: &[N], root: Option<u32>) -> Result<(), String> {
    check_links(arena, root)?;

    let mut heights = vec![0i64; arena.len()];
    let mut err = None;
    walk(arena, root, Traversal::PostOrder, |n| {
        if err.is_some() {
            return;
        }
        let lh = get_l(arena, n).map_or(0, |l| heights[l as usize]);
        let rh = get_r(arena, n).map_or(0, |r| heights[r as usize]);
        let expected = 1 + lh.max(rh);
        let cached = arena[n as usize].h() as i64;
        if cached != expected {
            err = Some(format!(
                "Height mismatch at node {n}: expected {expected}, got {cached}"
            ));
        } else if (lh - rh).abs() > 1 {
            err = Some(format!("AVL balance violated at node {n}: bf {}", lh - rh));
        }
        heights[n as usize] = expected;
    });
    err.map_or(Ok(()), Err)
}

/// Dump with each node's item and cached height.
pub fn print<T, N>(arena: &[N], root: Option<u32>) -> String
where
    T: std::fmt::Display,
    N: AvlNodeLike + ItemNode<T>,
{
    util::print::dump(arena, root, |i| {
        let n = &arena[i as usize];
        format!("{} [h={}]", n.item(), n.h())
    })
}
