//! Unbalanced binary search tree.
//!
//! Shape depends entirely on insertion order; sorted input degenerates into
//! a chain. Every walk over it is iterative, so a chain of any length is fine.

use std::cmp::Ordering;
use std::marker::PhantomData;

use crate::data_types::{forest_set_wrapper, ForestSet, SetTreeOps};
use crate::types::{DefaultComparator, ItemNode, Node};
use crate::util::splice_out;

#[derive(Clone, Debug)]
pub struct BstNode<T> {
    pub p: Option<u32>,
    pub l: Option<u32>,
    pub r: Option<u32>,
    pub item: T,
}

impl<T> BstNode<T> {
    pub fn new(item: T) -> Self {
        Self {
            p: None,
            l: None,
            r: None,
            item,
        }
    }
}

impl<T> Node for BstNode<T> {
    fn p(&self) -> Option<u32> {
        self.p
    }

    fn l(&self) -> Option<u32> {
        self.l
    }

    fn r(&self) -> Option<u32> {
        self.r
    }

    fn set_p(&mut self, v: Option<u32>) {
        self.p = v;
    }

    fn set_l(&mut self, v: Option<u32>) {
        self.l = v;
    }

    fn set_r(&mut self, v: Option<u32>) {
        self.r = v;
    }
}

impl<T> ItemNode<T> for BstNode<T> {
    fn item(&self) -> &T {
        &self.item
    }

    fn item_mut(&mut self) -> &mut T {
        &mut self.item
    }

    fn into_item(self) -> T {
        self.item
    }
}

/// No-op balancing: nodes stay where the descent put them.
pub struct BstOps<T>(PhantomData<T>);

impl<T> SetTreeOps<T, BstNode<T>> for BstOps<T> {
    fn new_node(item: T) -> BstNode<T> {
        BstNode::new(item)
    }

    fn insert_fixup(_arena: &mut [BstNode<T>], root: u32, _node: u32) -> u32 {
        root
    }

    fn remove(arena: &mut [BstNode<T>], root: u32, node: u32) -> Option<u32> {
        splice_out(arena, root, node).root
    }
}

pub struct Bst<T, C = DefaultComparator<T>>
where
    C: Fn(&T, &T) -> Ordering,
{
    inner: ForestSet<T, BstNode<T>, BstOps<T>, C>,
}

forest_set_wrapper!(Bst, BstNode);

impl<T, C> Bst<T, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    pub fn height(&self) -> usize {
        self.inner.height()
    }

    pub fn assert_valid(&self) -> Result<(), String> {
        self.inner.assert_ordered()
    }
}
