use serde::{Deserialize, Serialize};

use crate::types::{ItemNode, Node};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Red,
    Black,
}

#[derive(Clone, Debug)]
pub struct RbNode<T> {
    pub p: Option<u32>,
    pub l: Option<u32>,
    pub r: Option<u32>,
    pub item: T,
    pub color: Color,
}

impl<T> RbNode<T> {
    /// New nodes start red.
    pub fn new(item: T) -> Self {
        Self {
            p: None,
            l: None,
            r: None,
            item,
            color: Color::Red,
        }
    }
}

impl<T> Node for RbNode<T> {
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

impl<T> ItemNode<T> for RbNode<T> {
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

/// Red-black specific node behavior.
pub trait RbNodeLike: Node {
    fn color(&self) -> Color;
    fn set_color(&mut self, color: Color);
}

impl<T> RbNodeLike for RbNode<T> {
    fn color(&self) -> Color {
        self.color
    }

    fn set_color(&mut self, color: Color) {
        self.color = color;
    }
}
