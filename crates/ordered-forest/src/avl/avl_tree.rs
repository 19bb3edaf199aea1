use std::cmp::Ordering;
use std::fmt;

use crate::data_types::{forest_set_wrapper, ForestSet};
use crate::types::DefaultComparator;

use super::types::AvlNode;
use super::util::{assert_avl_tree, print, AvlOps};

/// Height-balanced ordered set.
///
/// Every node caches the height of its subtree. After each insert or remove
/// the ancestors of the changed position are re-examined bottom-up and
/// rotated where the two sides differ by two.
///
/// ```
/// use ordered_forest::{AvlTree, OrderedSet};
///
/// let mut tree = AvlTree::new();
/// for item in [13, 42, 1963] {
///     tree.insert(item).unwrap();
/// }
/// let pre: Vec<_> = tree.pre_order().into_iter().collect();
/// assert_eq!(pre, vec![42, 13, 1963]);
/// ```
pub struct AvlTree<T, C = DefaultComparator<T>>
where
    C: Fn(&T, &T) -> Ordering,
{
    inner: ForestSet<T, AvlNode<T>, AvlOps<T>, C>,
}

forest_set_wrapper!(AvlTree, AvlNode);

impl<T, C> AvlTree<T, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    /// Cached height of the root, 0 when empty.
    pub fn height(&self) -> usize {
        self.inner
            .root_index()
            .map_or(0, |root| self.inner.node(root).h as usize)
    }

    /// Verifies links, item order, cached heights and the balance bound.
    pub fn assert_valid(&self) -> Result<(), String> {
        self.inner.assert_ordered()?;
        assert_avl_tree(self.inner.arena(), self.inner.root_index())
    }

    pub fn dump(&self) -> String
    where
        T: fmt::Display,
    {
        print::<T, AvlNode<T>>(self.inner.arena(), self.inner.root_index())
    }
}
