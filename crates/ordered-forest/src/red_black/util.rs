use std::marker::PhantomData;

use log::trace;

use crate::data_types::SetTreeOps;
use crate::types::{ItemNode, Traversal};
use crate::util::{self, check_links, get_l, get_p, get_r, rotate_left, rotate_right, splice_out, walk};

use super::types::{Color, RbNode, RbNodeLike};

/// Absent children count as black.
#[inline]
fn is_red<N: RbNodeLike>(arena: &[N], i: Option<u32>) -> bool {
    i.is_some_and(|i| arena[i as usize].color() == Color::Red)
}

#[inline]
fn set_color<N: RbNodeLike>(arena: &mut [N], i: u32, color: Color) {
    arena[i as usize].set_color(color);
}

#[inline]
fn color<N: RbNodeLike>(arena: &[N], i: u32) -> Color {
    arena[i as usize].color()
}

/// Rotates and reports the new root if the rotation happened at the top.
fn rotate_tracking_root<N: RbNodeLike>(arena: &mut [N], root: &mut u32, n: u32, left: bool) {
    let top = if left {
        rotate_left(arena, n)
    } else {
        rotate_right(arena, n)
    };
    if get_p(arena, top).is_none() {
        *root = top;
    }
}

/// Restores the red-black properties after `node` was linked red.
pub fn insert_fixup<N: RbNodeLike>(arena: &mut [N], root: u32, node: u32) -> u32 {
    let mut root = root;
    let mut n = node;
    loop {
        let Some(p) = get_p(arena, n) else {
            break;
        };
        if color(arena, p) == Color::Black {
            break;
        }
        let Some(g) = get_p(arena, p) else {
            break;
        };

        let p_is_left = get_l(arena, g) == Some(p);
        let u = if p_is_left {
            get_r(arena, g)
        } else {
            get_l(arena, g)
        };

        if let Some(u) = u.filter(|&u| color(arena, u) == Color::Red) {
            set_color(arena, p, Color::Black);
            set_color(arena, u, Color::Black);
            set_color(arena, g, Color::Red);
            trace!("rb insert: recolored around {g}, moving up");
            n = g;
            continue;
        }

        // Inner grandchild: turn it into the outer case first.
        let mut p = p;
        if p_is_left && get_r(arena, p) == Some(n) {
            rotate_left(arena, p);
            p = n;
        } else if !p_is_left && get_l(arena, p) == Some(n) {
            rotate_right(arena, p);
            p = n;
        }

        set_color(arena, p, Color::Black);
        set_color(arena, g, Color::Red);
        rotate_tracking_root(arena, &mut root, g, !p_is_left);
        break;
    }
    set_color(arena, root, Color::Black);
    root
}

/// Unlinks `node` (at most one child) and repairs a resulting black deficit.
pub fn remove<N: RbNodeLike>(arena: &mut [N], root: u32, node: u32) -> Option<u32> {
    let removed_color = color(arena, node);
    let spliced = splice_out(arena, root, node);
    let root = spliced.root?;
    if removed_color == Color::Black {
        Some(remove_fixup(arena, root, spliced.child, spliced.parent))
    } else {
        Some(root)
    }
}

/// Double-black fix-up. `x` carries the extra black and may be absent, in
/// which case `xp` locates it.
fn remove_fixup<N: RbNodeLike>(
    arena: &mut [N],
    root: u32,
    mut x: Option<u32>,
    mut xp: Option<u32>,
) -> u32 {
    let mut root = root;
    while x != Some(root) && !is_red(arena, x) {
        let Some(p) = xp else {
            break;
        };
        let x_is_left = get_l(arena, p) == x;
        let sibling = |arena: &[N]| {
            if x_is_left {
                get_r(arena, p)
            } else {
                get_l(arena, p)
            }
        };
        let mut w = sibling(arena).expect("double-black node has a sibling");

        if color(arena, w) == Color::Red {
            trace!("rb remove: red sibling {w}, rotating {p}");
            set_color(arena, w, Color::Black);
            set_color(arena, p, Color::Red);
            rotate_tracking_root(arena, &mut root, p, x_is_left);
            w = sibling(arena).expect("double-black node has a sibling");
        }

        let (near, far) = if x_is_left {
            (get_l(arena, w), get_r(arena, w))
        } else {
            (get_r(arena, w), get_l(arena, w))
        };

        if !is_red(arena, near) && !is_red(arena, far) {
            set_color(arena, w, Color::Red);
            trace!("rb remove: pushing black up to {p}");
            x = Some(p);
            xp = get_p(arena, p);
            continue;
        }

        if !is_red(arena, far) {
            let near = near.expect("red near child exists");
            set_color(arena, near, Color::Black);
            set_color(arena, w, Color::Red);
            rotate_tracking_root(arena, &mut root, w, !x_is_left);
            w = sibling(arena).expect("double-black node has a sibling");
        }

        let far = if x_is_left {
            get_r(arena, w)
        } else {
            get_l(arena, w)
        };
        set_color(arena, w, color(arena, p));
        set_color(arena, p, Color::Black);
        if let Some(far) = far {
            set_color(arena, far, Color::Black);
        }
        rotate_tracking_root(arena, &mut root, p, x_is_left);
        trace!("rb remove: deficit absorbed at {p}");
        x = Some(root);
        break;
    }
    if let Some(x) = x {
        set_color(arena, x, Color::Black);
    }
    root
}

/// Red-black balancing for [`crate::data_types::ForestSet`].
pub struct RbOps<T>(PhantomData<T>);

impl<T> SetTreeOps<T, RbNode<T>> for RbOps<T> {
    fn new_node(item: T) -> RbNode<T> {
        RbNode::new(item)
    }

    fn insert_fixup(arena: &mut [RbNode<T>], root: u32, node: u32) -> u32 {
        insert_fixup(arena, root, node)
    }

    fn remove(arena: &mut [RbNode<T>], root: u32, node: u32) -> Option<u32> {
        remove(arena, root, node)
    }
}

/// Checks links, black root, no red node with a red child and equal black
/// height on every path.
pub fn assert_red_black_tree<N: RbNodeLike>(arena: &[N], root: Option<u32>) -> Result<(), String> {
    check_links(arena, root)?;
    let Some(root) = root else {
        return Ok(());
    };
    if color(arena, root) != Color::Black {
        return Err("Root is not black".to_string());
    }

    // black height of each subtree, counting the absent leaves
    let mut black_heights = vec![0usize; arena.len()];
    let mut err = None;
    walk(arena, Some(root), Traversal::PostOrder, |n| {
        if err.is_some() {
            return;
        }
        let l = get_l(arena, n);
        let r = get_r(arena, n);
        if color(arena, n) == Color::Red && (is_red(arena, l) || is_red(arena, r)) {
            err = Some(format!("Red node {n} has a red child"));
            return;
        }
        let lbh = l.map_or(1, |l| black_heights[l as usize]);
        let rbh = r.map_or(1, |r| black_heights[r as usize]);
        if lbh != rbh {
            err = Some(format!("Black height mismatch at node {n}: {lbh} vs {rbh}"));
            return;
        }
        black_heights[n as usize] = lbh + usize::from(color(arena, n) == Color::Black);
    });
    err.map_or(Ok(()), Err)
}

/// Dump with each node's item and color.
pub fn print<T, N>(arena: &[N], root: Option<u32>) -> String
where
    T: std::fmt::Display,
    N: RbNodeLike + ItemNode<T>,
{
    util::print::dump(arena, root, |i| {
        let n = &arena[i as usize];
        let color = match n.color() {
            Color::Red => "red",
            Color::Black => "black",
        };
        format!("{} {color}", n.item())
    })
}
