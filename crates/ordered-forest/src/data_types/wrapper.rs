/// Implements the shared surface of a tree type that wraps a
/// [`ForestSet`](super::ForestSet) in a field named `inner`.
///
/// Generates the constructors, `iter`, `try_extend`, [`OrderedSet`] and the
/// `Clone`, `PartialEq`, `Debug`, `Display`, `&Tree: IntoIterator`, serde
/// impls, all delegating to the core. Anything tree-specific (height,
/// validation, dumps) stays next to the struct.
///
/// [`OrderedSet`]: crate::types::OrderedSet
macro_rules! forest_set_wrapper {
    ($tree:ident, $node:ident) => {
        impl<T: Ord> $tree<T> {
            pub fn new() -> Self {
                Self {
                    inner: $crate::data_types::ForestSet::new(),
                }
            }

            /// Builds a tree from `items`, failing on the first duplicate.
            pub fn try_from_iter<I: IntoIterator<Item = T>>(
                items: I,
            ) -> Result<Self, $crate::error::TreeError> {
                let mut tree = Self::new();
                tree.inner.try_extend(items)?;
                Ok(tree)
            }
        }

        impl<T: Ord> Default for $tree<T> {
            fn default() -> Self {
                Self::new()
            }
        }

        impl<T, C> $tree<T, C>
        where
            C: Fn(&T, &T) -> ::std::cmp::Ordering,
        {
            pub fn with_comparator(comparator: C) -> Self {
                Self {
                    inner: $crate::data_types::ForestSet::with_comparator(comparator),
                }
            }

            pub fn iter(&self) -> $crate::data_types::Iter<'_, T, $node<T>> {
                self.inner.iter()
            }

            pub fn try_extend<I: IntoIterator<Item = T>>(
                &mut self,
                items: I,
            ) -> Result<(), $crate::error::TreeError> {
                self.inner.try_extend(items)
            }
        }

        impl<T, C> $crate::types::OrderedSet<T> for $tree<T, C>
        where
            C: Fn(&T, &T) -> ::std::cmp::Ordering,
        {
            fn has(&self, item: &T) -> bool {
                self.inner.has(item)
            }

            fn size(&self) -> usize {
                self.inner.size()
            }

            fn insert(&mut self, item: T) -> Result<(), $crate::error::TreeError> {
                self.inner.insert(item)
            }

            fn remove(&mut self, item: &T) -> Result<T, $crate::error::TreeError> {
                self.inner.remove(item)
            }

            fn first(&self) -> Result<&T, $crate::error::TreeError> {
                self.inner.first()
            }

            fn last(&self) -> Result<&T, $crate::error::TreeError> {
                self.inner.last()
            }

            fn clear(&mut self) {
                self.inner.clear()
            }

            fn traverse_into<S>(&self, order: $crate::types::Traversal) -> S
            where
                S: ::linked_seq::SequenceBuffer<T> + Default,
                T: Clone,
            {
                self.inner.traverse_into(order)
            }
        }

        impl<T: Clone, C> Clone for $tree<T, C>
        where
            C: Fn(&T, &T) -> ::std::cmp::Ordering + Clone,
        {
            fn clone(&self) -> Self {
                Self {
                    inner: self.inner.clone(),
                }
            }
        }

        impl<T: PartialEq, C> PartialEq for $tree<T, C>
        where
            C: Fn(&T, &T) -> ::std::cmp::Ordering,
        {
            fn eq(&self, other: &Self) -> bool {
                self.inner == other.inner
            }
        }

        impl<T: ::std::fmt::Debug, C> ::std::fmt::Debug for $tree<T, C>
        where
            C: Fn(&T, &T) -> ::std::cmp::Ordering,
        {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                ::std::fmt::Debug::fmt(&self.inner, f)
            }
        }

        impl<T: ::std::fmt::Display, C> ::std::fmt::Display for $tree<T, C>
        where
            C: Fn(&T, &T) -> ::std::cmp::Ordering,
        {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                ::std::fmt::Display::fmt(&self.inner, f)
            }
        }

        impl<'a, T, C> IntoIterator for &'a $tree<T, C>
        where
            C: Fn(&T, &T) -> ::std::cmp::Ordering,
        {
            type Item = &'a T;
            type IntoIter = $crate::data_types::Iter<'a, T, $node<T>>;

            fn into_iter(self) -> Self::IntoIter {
                self.iter()
            }
        }

        impl<T: ::serde::Serialize, C> ::serde::Serialize for $tree<T, C>
        where
            C: Fn(&T, &T) -> ::std::cmp::Ordering,
        {
            fn serialize<S: ::serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                ::serde::Serialize::serialize(&self.inner, serializer)
            }
        }

        impl<'de, T> ::serde::Deserialize<'de> for $tree<T>
        where
            T: Ord + ::serde::Deserialize<'de>,
        {
            fn deserialize<D: ::serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                <$crate::data_types::ForestSet<_, _, _, _> as ::serde::Deserialize<'de>>::deserialize(
                    deserializer,
                )
                .map(|inner| Self { inner })
            }
        }
    };
}

pub(crate) use forest_set_wrapper;
