use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ListError;
use crate::types::SequenceBuffer;

type Link<T> = Option<Box<Node<T>>>;

struct Node<T> {
    item: T,
    next: Link<T>,
}

/// Singly linked list over an owned `Box` chain.
///
/// Only the front is directly reachable; every operation at position `i`
/// walks `i` links.
pub struct SinglyLinkedList<T> {
    head: Link<T>,
    len: usize,
}

impl<T> Default for SinglyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> SinglyLinkedList<T> {
    pub fn new() -> Self {
        Self { head: None, len: 0 }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    pub fn push_front(&mut self, item: T) {
        let next = self.head.take();
        self.head = Some(Box::new(Node { item, next }));
        self.len += 1;
    }

    pub fn push_back(&mut self, item: T) {
        let slot = self.link_at(self.len);
        *slot = Some(Box::new(Node { item, next: None }));
        self.len += 1;
    }

    pub fn insert(&mut self, index: usize, item: T) -> Result<(), ListError> {
        if index > self.len {
            return Err(ListError::IndexOutOfRange {
                index,
                len: self.len,
            });
        }
        let slot = self.link_at(index);
        let next = slot.take();
        *slot = Some(Box::new(Node { item, next }));
        self.len += 1;
        Ok(())
    }

    pub fn pop_front(&mut self) -> Result<T, ListError> {
        if self.is_empty() {
            return Err(ListError::EmptyCollectionAccess);
        }
        Ok(self.unlink(0))
    }

    pub fn pop_back(&mut self) -> Result<T, ListError> {
        if self.is_empty() {
            return Err(ListError::EmptyCollectionAccess);
        }
        Ok(self.unlink(self.len - 1))
    }

    pub fn remove(&mut self, index: usize) -> Result<T, ListError> {
        if index >= self.len {
            return Err(ListError::IndexOutOfRange {
                index,
                len: self.len,
            });
        }
        Ok(self.unlink(index))
    }

    pub fn get(&self, index: usize) -> Result<&T, ListError> {
        self.iter().nth(index).ok_or(ListError::IndexOutOfRange {
            index,
            len: self.len,
        })
    }

    pub fn front(&self) -> Result<&T, ListError> {
        self.head
            .as_deref()
            .map(|node| &node.item)
            .ok_or(ListError::EmptyCollectionAccess)
    }

    pub fn back(&self) -> Result<&T, ListError> {
        self.iter().last().ok_or(ListError::EmptyCollectionAccess)
    }

    pub fn clear(&mut self) {
        let mut link = self.head.take();
        while let Some(mut node) = link {
            link = node.next.take();
        }
        self.len = 0;
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head.as_deref(),
            remaining: self.len,
        }
    }

    /// The link that holds position `index` (`index == len` is the tail slot).
    fn link_at(&mut self, index: usize) -> &mut Link<T> {
        let mut slot = &mut self.head;
        for _ in 0..index {
            slot = &mut slot.as_mut().expect("index within bounds").next;
        }
        slot
    }

    fn unlink(&mut self, index: usize) -> T {
        let slot = self.link_at(index);
        let node = slot.take().expect("index within bounds");
        let Node { item, next } = *node;
        *slot = next;
        self.len -= 1;
        item
    }
}

impl<T> Drop for SinglyLinkedList<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T> SequenceBuffer<T> for SinglyLinkedList<T> {
    fn push_back(&mut self, item: T) {
        SinglyLinkedList::push_back(self, item);
    }

    fn len(&self) -> usize {
        self.len
    }
}

pub struct Iter<'a, T> {
    next: Option<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next?;
        self.next = node.next.as_deref();
        self.remaining -= 1;
        Some(&node.item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

pub struct IntoIter<T>(SinglyLinkedList<T>);

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.0.pop_front().ok()
    }
}

impl<T> IntoIterator for SinglyLinkedList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter(self)
    }
}

impl<'a, T> IntoIterator for &'a SinglyLinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<T> FromIterator<T> for SinglyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let items: Vec<T> = iter.into_iter().collect();
        let mut list = Self::new();
        for item in items.into_iter().rev() {
            list.push_front(item);
        }
        list
    }
}

impl<T: Clone> Clone for SinglyLinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for SinglyLinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for SinglyLinkedList<T> {}

impl<T: fmt::Debug> fmt::Debug for SinglyLinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: Serialize> Serialize for SinglyLinkedList<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for SinglyLinkedList<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Vec::<T>::deserialize(deserializer).map(|items| items.into_iter().collect())
    }
}
