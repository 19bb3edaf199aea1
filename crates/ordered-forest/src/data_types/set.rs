use std::cmp::Ordering;
use std::fmt;
use std::marker::PhantomData;

use linked_seq::SequenceBuffer;
use log::debug;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::TreeError;
use crate::types::{default_comparator, DefaultComparator, ItemNode, Traversal};
use crate::util::{self, compact, first, last, next, prev, print, walk};

/// Balancing strategy plugged into [`ForestSet`].
///
/// The set does the descent, the duplicate check, the leaf linking and the
/// successor swap; a strategy only restores its own invariant around those
/// structural edits.
pub trait SetTreeOps<T, N>
where
    N: ItemNode<T>,
{
    fn new_node(item: T) -> N;

    /// Called after `node` was linked as a leaf (or became the only node).
    /// Returns the root.
    fn insert_fixup(arena: &mut [N], root: u32, node: u32) -> u32;

    /// Detaches `node`, which has at most one child, and restores balance.
    /// Returns the root, `None` once the tree is empty. `node` must be left
    /// with no links.
    fn remove(arena: &mut [N], root: u32, node: u32) -> Option<u32>;
}

/// Arena-backed ordered set core shared by every tree in the crate.
///
/// The arena holds exactly one node per item; removal compacts it.
pub struct ForestSet<T, N, O, C>
where
    N: ItemNode<T>,
    O: SetTreeOps<T, N>,
    C: Fn(&T, &T) -> Ordering,
{
    arena: Vec<N>,
    root: Option<u32>,
    comparator: C,
    _item: PhantomData<T>,
    _ops: PhantomData<O>,
}

impl<T, N, O, C> ForestSet<T, N, O, C>
where
    N: ItemNode<T>,
    O: SetTreeOps<T, N>,
    C: Fn(&T, &T) -> Ordering,
{
    pub fn with_comparator(comparator: C) -> Self {
        Self {
            arena: Vec::new(),
            root: None,
            comparator,
            _item: PhantomData,
            _ops: PhantomData,
        }
    }

    pub fn root_index(&self) -> Option<u32> {
        self.root
    }

    pub fn arena(&self) -> &[N] {
        &self.arena
    }

    pub fn comparator(&self) -> &C {
        &self.comparator
    }

    pub fn node(&self, idx: u32) -> &N {
        &self.arena[idx as usize]
    }

    pub fn size(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Arena index of the node holding an item equal to `item`.
    pub fn find(&self, item: &T) -> Option<u32> {
        let mut curr = self.root;
        while let Some(i) = curr {
            curr = match (self.comparator)(item, self.arena[i as usize].item()) {
                Ordering::Less => self.arena[i as usize].l(),
                Ordering::Greater => self.arena[i as usize].r(),
                Ordering::Equal => return Some(i),
            };
        }
        None
    }

    pub fn has(&self, item: &T) -> bool {
        self.find(item).is_some()
    }

    fn push_node(&mut self, item: T) -> u32 {
        self.arena.push(O::new_node(item));
        (self.arena.len() - 1) as u32
    }

    pub fn insert(&mut self, item: T) -> Result<(), TreeError> {
        let Some(root) = self.root else {
            let idx = self.push_node(item);
            self.root = Some(O::insert_fixup(&mut self.arena, idx, idx));
            return Ok(());
        };

        let mut curr = root;
        let side = loop {
            let ord = (self.comparator)(&item, self.arena[curr as usize].item());
            let next = match ord {
                Ordering::Less => self.arena[curr as usize].l(),
                Ordering::Greater => self.arena[curr as usize].r(),
                Ordering::Equal => {
                    debug!("insert rejected: duplicate item");
                    return Err(TreeError::DuplicateItem);
                }
            };
            match next {
                Some(next) => curr = next,
                None => break ord,
            }
        };

        let idx = self.push_node(item);
        self.arena[idx as usize].set_p(Some(curr));
        if side == Ordering::Less {
            self.arena[curr as usize].set_l(Some(idx));
        } else {
            self.arena[curr as usize].set_r(Some(idx));
        }
        self.root = Some(O::insert_fixup(&mut self.arena, root, idx));
        Ok(())
    }

    pub fn remove(&mut self, item: &T) -> Result<T, TreeError> {
        let Some(node) = self.find(item) else {
            debug!("remove rejected: item not found");
            return Err(TreeError::ItemNotFound);
        };
        let root = self.root.expect("tree holding a node has a root");

        // A two-children node keeps its position; its successor's node (at
        // most one child) is the one unlinked, after the items trade places.
        let target = match (self.arena[node as usize].l(), self.arena[node as usize].r()) {
            (Some(_), Some(r)) => {
                let successor = first(&self.arena, Some(r)).expect("right subtree is non-empty");
                self.swap_items(node, successor);
                successor
            }
            _ => node,
        };

        let mut root = O::remove(&mut self.arena, root, target);
        let removed = compact(&mut self.arena, &mut root, target);
        self.root = root;
        Ok(removed.into_item())
    }

    fn swap_items(&mut self, a: u32, b: u32) {
        let (lo, hi) = (a.min(b) as usize, a.max(b) as usize);
        let (left, right) = self.arena.split_at_mut(hi);
        std::mem::swap(left[lo].item_mut(), right[0].item_mut());
    }

    pub fn first(&self) -> Result<&T, TreeError> {
        first(&self.arena, self.root)
            .map(|i| self.arena[i as usize].item())
            .ok_or(TreeError::EmptyCollectionAccess)
    }

    pub fn last(&self) -> Result<&T, TreeError> {
        last(&self.arena, self.root)
            .map(|i| self.arena[i as usize].item())
            .ok_or(TreeError::EmptyCollectionAccess)
    }

    pub fn clear(&mut self) {
        self.arena.clear();
        self.root = None;
    }

    pub fn height(&self) -> usize {
        util::height(&self.arena, self.root)
    }

    pub fn traverse_into<S>(&self, order: Traversal) -> S
    where
        S: SequenceBuffer<T> + Default,
        T: Clone,
    {
        let mut out = S::default();
        walk(&self.arena, self.root, order, |i| {
            out.push_back(self.arena[i as usize].item().clone())
        });
        out
    }

    pub fn iter(&self) -> Iter<'_, T, N> {
        Iter {
            arena: &self.arena,
            front: first(&self.arena, self.root),
            back: last(&self.arena, self.root),
            remaining: self.arena.len(),
            _item: PhantomData,
        }
    }

    /// Inserts every item, stopping at the first duplicate.
    pub fn try_extend<I>(&mut self, items: I) -> Result<(), TreeError>
    where
        I: IntoIterator<Item = T>,
    {
        for item in items {
            self.insert(item)?;
        }
        Ok(())
    }

    /// Link symmetry, arena accounting and strictly increasing in-order items.
    pub fn assert_ordered(&self) -> Result<(), String> {
        util::check_links(&self.arena, self.root)?;
        let mut curr = first(&self.arena, self.root);
        let mut prev_node: Option<u32> = None;
        while let Some(i) = curr {
            if let Some(p) = prev_node {
                let cmp = (self.comparator)(self.arena[p as usize].item(), self.arena[i as usize].item());
                if cmp != Ordering::Less {
                    return Err("Node order violated".to_string());
                }
            }
            prev_node = Some(i);
            curr = next(&self.arena, i);
        }
        Ok(())
    }
}

impl<T, N, O> ForestSet<T, N, O, DefaultComparator<T>>
where
    T: Ord,
    N: ItemNode<T>,
    O: SetTreeOps<T, N>,
{
    pub fn new() -> Self {
        Self::with_comparator(default_comparator::<T>)
    }
}

impl<T, N, O> Default for ForestSet<T, N, O, DefaultComparator<T>>
where
    T: Ord,
    N: ItemNode<T>,
    O: SetTreeOps<T, N>,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, N, O, C> Clone for ForestSet<T, N, O, C>
where
    N: ItemNode<T> + Clone,
    O: SetTreeOps<T, N>,
    C: Fn(&T, &T) -> Ordering + Clone,
{
    fn clone(&self) -> Self {
        Self {
            arena: self.arena.clone(),
            root: self.root,
            comparator: self.comparator.clone(),
            _item: PhantomData,
            _ops: PhantomData,
        }
    }
}

impl<T, N, O, C> PartialEq for ForestSet<T, N, O, C>
where
    T: PartialEq,
    N: ItemNode<T>,
    O: SetTreeOps<T, N>,
    C: Fn(&T, &T) -> Ordering,
{
    fn eq(&self, other: &Self) -> bool {
        self.size() == other.size() && self.iter().eq(other.iter())
    }
}

impl<T, N, O, C> fmt::Debug for ForestSet<T, N, O, C>
where
    T: fmt::Debug,
    N: ItemNode<T>,
    O: SetTreeOps<T, N>,
    C: Fn(&T, &T) -> Ordering,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T, N, O, C> fmt::Display for ForestSet<T, N, O, C>
where
    T: fmt::Display,
    N: ItemNode<T>,
    O: SetTreeOps<T, N>,
    C: Fn(&T, &T) -> Ordering,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        print::render::<T, N>(&self.arena, self.root, f)
    }
}

impl<T, N, O, C> Serialize for ForestSet<T, N, O, C>
where
    T: Serialize,
    N: ItemNode<T>,
    O: SetTreeOps<T, N>,
    C: Fn(&T, &T) -> Ordering,
{
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

impl<'de, T, N, O> Deserialize<'de> for ForestSet<T, N, O, DefaultComparator<T>>
where
    T: Ord + Deserialize<'de>,
    N: ItemNode<T>,
    O: SetTreeOps<T, N>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let items = Vec::<T>::deserialize(deserializer)?;
        let mut set = Self::new();
        set.try_extend(items).map_err(D::Error::custom)?;
        Ok(set)
    }
}

/// In-order iterator over borrowed items, walkable from both ends.
pub struct Iter<'a, T, N> {
    arena: &'a [N],
    front: Option<u32>,
    back: Option<u32>,
    remaining: usize,
    _item: PhantomData<&'a T>,
}

impl<'a, T: 'a, N: ItemNode<T>> Iterator for Iter<'a, T, N> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.remaining == 0 {
            return None;
        }
        let arena = self.arena;
        let i = self.front?;
        self.front = next(arena, i);
        self.remaining -= 1;
        Some(arena[i as usize].item())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T: 'a, N: ItemNode<T>> DoubleEndedIterator for Iter<'a, T, N> {
    fn next_back(&mut self) -> Option<&'a T> {
        if self.remaining == 0 {
            return None;
        }
        let arena = self.arena;
        let i = self.back?;
        self.back = prev(arena, i);
        self.remaining -= 1;
        Some(arena[i as usize].item())
    }
}

impl<'a, T: 'a, N: ItemNode<T>> ExactSizeIterator for Iter<'a, T, N> {}
