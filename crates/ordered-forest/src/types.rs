//! Node traits and the ordered-set contract.
//!
//! Nodes live in a `Vec`-backed arena owned by the tree; every "pointer" is
//! an `Option<u32>` index into it. Tree-manipulation functions take the arena
//! as `&mut [N]` and work with indices only.

use std::cmp::Ordering;

use linked_seq::{DoublyLinkedList, SequenceBuffer};
use serde::{Deserialize, Serialize};

use crate::error::TreeError;

/// Parent and child links (`p`, `l`, `r`).
pub trait Node {
    fn p(&self) -> Option<u32>;
    fn l(&self) -> Option<u32>;
    fn r(&self) -> Option<u32>;
    fn set_p(&mut self, v: Option<u32>);
    fn set_l(&mut self, v: Option<u32>);
    fn set_r(&mut self, v: Option<u32>);
}

/// Node that carries one item of the ordered set.
pub trait ItemNode<T>: Node {
    fn item(&self) -> &T;
    fn item_mut(&mut self) -> &mut T;
    fn into_item(self) -> T;
}

/// Comparator used when the item type is `Ord`.
pub type DefaultComparator<T> = fn(&T, &T) -> Ordering;

pub(crate) fn default_comparator<T: Ord>(a: &T, b: &T) -> Ordering {
    a.cmp(b)
}

/// Traversal orders.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Traversal {
    /// left, node, right
    InOrder,
    /// node, left, right
    PreOrder,
    /// left, right, node
    PostOrder,
}

/// Ordered set of distinct items.
///
/// Implemented by every balancing strategy in this crate; pick one at compile
/// time through generics.
pub trait OrderedSet<T> {
    fn has(&self, item: &T) -> bool;

    fn size(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Fails with [`TreeError::DuplicateItem`] if an equal item is present;
    /// the set is left untouched in that case.
    fn insert(&mut self, item: T) -> Result<(), TreeError>;

    /// Removes the equal item and hands it back. Fails with
    /// [`TreeError::ItemNotFound`] without touching the set.
    fn remove(&mut self, item: &T) -> Result<T, TreeError>;

    /// Smallest item.
    fn first(&self) -> Result<&T, TreeError>;

    /// Largest item.
    fn last(&self) -> Result<&T, TreeError>;

    fn clear(&mut self);

    /// Materializes every item in `order` into a fresh buffer.
    fn traverse_into<S>(&self, order: Traversal) -> S
    where
        S: SequenceBuffer<T> + Default,
        T: Clone;

    fn in_order(&self) -> DoublyLinkedList<T>
    where
        T: Clone,
    {
        self.traverse_into(Traversal::InOrder)
    }

    fn pre_order(&self) -> DoublyLinkedList<T>
    where
        T: Clone,
    {
        self.traverse_into(Traversal::PreOrder)
    }

    fn post_order(&self) -> DoublyLinkedList<T>
    where
        T: Clone,
    {
        self.traverse_into(Traversal::PostOrder)
    }
}
