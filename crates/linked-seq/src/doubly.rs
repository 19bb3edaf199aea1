use std::cmp::Ordering;
use std::fmt;

use log::trace;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ListError;
use crate::types::SequenceBuffer;

#[derive(Clone, Debug)]
struct ListNode<T> {
    prev: Option<u32>,
    next: Option<u32>,
    item: T,
}

/// Doubly linked list.
///
/// Nodes live in a `Vec` arena and link to each other through `Option<u32>`
/// indices. The arena always holds exactly `len()` nodes: unlinking a node
/// `swap_remove`s it and re-points the neighbours of whichever node moved
/// into the freed slot.
#[derive(Clone)]
pub struct DoublyLinkedList<T> {
    arena: Vec<ListNode<T>>,
    front: Option<u32>,
    back: Option<u32>,
}

impl<T> Default for DoublyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> DoublyLinkedList<T> {
    pub fn new() -> Self {
        Self {
            arena: Vec::new(),
            front: None,
            back: None,
        }
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.front.is_none()
    }

    fn push_node(&mut self, prev: Option<u32>, next: Option<u32>, item: T) -> u32 {
        self.arena.push(ListNode { prev, next, item });
        (self.arena.len() - 1) as u32
    }

    pub fn push_back(&mut self, item: T) {
        let idx = self.push_node(self.back, None, item);
        match self.back {
            Some(back) => self.arena[back as usize].next = Some(idx),
            None => self.front = Some(idx),
        }
        self.back = Some(idx);
    }

    pub fn push_front(&mut self, item: T) {
        let idx = self.push_node(None, self.front, item);
        match self.front {
            Some(front) => self.arena[front as usize].prev = Some(idx),
            None => self.back = Some(idx),
        }
        self.front = Some(idx);
    }

    /// Inserts `item` so that it ends up at position `index`.
    ///
    /// `index == len()` appends.
    pub fn insert(&mut self, index: usize, item: T) -> Result<(), ListError> {
        let len = self.len();
        if index > len {
            return Err(ListError::IndexOutOfRange { index, len });
        }
        if index == 0 {
            self.push_front(item);
            return Ok(());
        }
        if index == len {
            self.push_back(item);
            return Ok(());
        }

        let at = self.locate(index);
        let prev = self.arena[at as usize]
            .prev
            .expect("interior node has a predecessor");
        let idx = self.push_node(Some(prev), Some(at), item);
        self.arena[prev as usize].next = Some(idx);
        self.arena[at as usize].prev = Some(idx);
        Ok(())
    }

    pub fn pop_front(&mut self) -> Result<T, ListError> {
        let front = self.front.ok_or(ListError::EmptyCollectionAccess)?;
        Ok(self.unlink(front))
    }

    pub fn pop_back(&mut self) -> Result<T, ListError> {
        let back = self.back.ok_or(ListError::EmptyCollectionAccess)?;
        Ok(self.unlink(back))
    }

    /// Removes and returns the item at position `index`.
    pub fn remove(&mut self, index: usize) -> Result<T, ListError> {
        self.check_index(index)?;
        let at = self.locate(index);
        Ok(self.unlink(at))
    }

    pub fn get(&self, index: usize) -> Result<&T, ListError> {
        self.check_index(index)?;
        Ok(&self.arena[self.locate(index) as usize].item)
    }

    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, ListError> {
        self.check_index(index)?;
        let at = self.locate(index);
        Ok(&mut self.arena[at as usize].item)
    }

    pub fn front(&self) -> Result<&T, ListError> {
        self.front
            .map(|i| &self.arena[i as usize].item)
            .ok_or(ListError::EmptyCollectionAccess)
    }

    pub fn back(&self) -> Result<&T, ListError> {
        self.back
            .map(|i| &self.arena[i as usize].item)
            .ok_or(ListError::EmptyCollectionAccess)
    }

    pub fn clear(&mut self) {
        self.arena.clear();
        self.front = None;
        self.back = None;
    }

    pub fn swap(&mut self, other: &mut Self) {
        std::mem::swap(self, other);
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            arena: &self.arena,
            front: self.front,
            back: self.back,
            remaining: self.len(),
        }
    }

    pub fn sort(&mut self)
    where
        T: Ord,
    {
        self.sort_by(|a, b| a.cmp(b));
    }

    /// Stable sort. Relinks nodes in place; items never move in the arena.
    pub fn sort_by<F>(&mut self, mut compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        let mut order = self.indices();
        let arena = &self.arena;
        order.sort_by(|&a, &b| compare(&arena[a as usize].item, &arena[b as usize].item));
        self.relink(&order);
    }

    fn check_index(&self, index: usize) -> Result<(), ListError> {
        let len = self.len();
        if index >= len {
            return Err(ListError::IndexOutOfRange { index, len });
        }
        Ok(())
    }

    /// Arena index of the node at `index`, walking from the nearer end.
    fn locate(&self, index: usize) -> u32 {
        let len = self.len();
        if index < len / 2 {
            let mut curr = self.front.expect("non-empty list has a front");
            for _ in 0..index {
                curr = self.arena[curr as usize].next.expect("index within bounds");
            }
            curr
        } else {
            let mut curr = self.back.expect("non-empty list has a back");
            for _ in index..len - 1 {
                curr = self.arena[curr as usize].prev.expect("index within bounds");
            }
            curr
        }
    }

    fn indices(&self) -> Vec<u32> {
        std::iter::successors(self.front, |&i| self.arena[i as usize].next).collect()
    }

    fn relink(&mut self, order: &[u32]) {
        for (pos, &idx) in order.iter().enumerate() {
            let node = &mut self.arena[idx as usize];
            node.prev = pos.checked_sub(1).map(|p| order[p]);
            node.next = order.get(pos + 1).copied();
        }
        self.front = order.first().copied();
        self.back = order.last().copied();
    }

    fn unlink(&mut self, idx: u32) -> T {
        let ListNode { prev, next, .. } = self.arena[idx as usize];
        match prev {
            Some(p) => self.arena[p as usize].next = next,
            None => self.front = next,
        }
        match next {
            Some(n) => self.arena[n as usize].prev = prev,
            None => self.back = prev,
        }

        let moved = (self.arena.len() - 1) as u32;
        let removed = self.arena.swap_remove(idx as usize);
        if moved != idx {
            trace!("compacting list arena: node {moved} -> {idx}");
            let ListNode { prev, next, .. } = self.arena[idx as usize];
            match prev {
                Some(p) => self.arena[p as usize].next = Some(idx),
                None => self.front = Some(idx),
            }
            match next {
                Some(n) => self.arena[n as usize].prev = Some(idx),
                None => self.back = Some(idx),
            }
        }
        removed.item
    }
}

impl<T> SequenceBuffer<T> for DoublyLinkedList<T> {
    fn push_back(&mut self, item: T) {
        DoublyLinkedList::push_back(self, item);
    }

    fn len(&self) -> usize {
        DoublyLinkedList::len(self)
    }
}

/// Borrowing iterator, walkable from both ends.
pub struct Iter<'a, T> {
    arena: &'a [ListNode<T>],
    front: Option<u32>,
    back: Option<u32>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let arena = self.arena;
        let node = &arena[self.front? as usize];
        self.front = node.next;
        self.remaining -= 1;
        Some(&node.item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let arena = self.arena;
        let node = &arena[self.back? as usize];
        self.back = node.prev;
        self.remaining -= 1;
        Some(&node.item)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

/// Owning iterator.
pub struct IntoIter<T>(DoublyLinkedList<T>);

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.0.pop_front().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.0.len(), Some(self.0.len()))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        self.0.pop_back().ok()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> IntoIterator for DoublyLinkedList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter(self)
    }
}

impl<'a, T> IntoIterator for &'a DoublyLinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<T> FromIterator<T> for DoublyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for DoublyLinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push_back(item);
        }
    }
}

impl<T: PartialEq> PartialEq for DoublyLinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for DoublyLinkedList<T> {}

impl<T: fmt::Debug> fmt::Debug for DoublyLinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: Serialize> Serialize for DoublyLinkedList<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for DoublyLinkedList<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Vec::<T>::deserialize(deserializer).map(|items| items.into_iter().collect())
    }
}
