use crate::types::{ItemNode, Node};

#[derive(Clone, Debug)]
pub struct AvlNode<T> {
    pub p: Option<u32>,
    pub l: Option<u32>,
    pub r: Option<u32>,
    pub item: T,
    /// Height of the subtree rooted here; a leaf has 1.
    pub h: u32,
}

impl<T> AvlNode<T> {
    pub fn new(item: T) -> Self {
        Self {
            p: None,
            l: None,
            r: None,
            item,
            h: 1,
        }
    }
}

impl<T> Node for AvlNode<T> {
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

impl<T> ItemNode<T> for AvlNode<T> {
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

/// AVL-specific node behavior.
pub trait AvlNodeLike: Node {
    fn h(&self) -> u32;
    fn set_h(&mut self, h: u32);
}

impl<T> AvlNodeLike for AvlNode<T> {
    fn h(&self) -> u32 {
        self.h
    }

    fn set_h(&mut self, h: u32) {
        self.h = h;
    }
}
