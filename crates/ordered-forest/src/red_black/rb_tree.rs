use std::cmp::Ordering;
use std::fmt;

use crate::data_types::{forest_set_wrapper, ForestSet};
use crate::types::DefaultComparator;

use super::types::{Color, RbNode};
use super::util::{assert_red_black_tree, print, RbOps};

/// Red-black ordered set.
///
/// New items are linked red and repaired upward by recoloring and at most
/// two rotations. Removal repairs a black deficit with the double-black
/// fix-up.
pub struct RbTree<T, C = DefaultComparator<T>>
where
    C: Fn(&T, &T) -> Ordering,
{
    inner: ForestSet<T, RbNode<T>, RbOps<T>, C>,
}

forest_set_wrapper!(RbTree, RbNode);

impl<T, C> RbTree<T, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    pub fn height(&self) -> usize {
        self.inner.height()
    }

    /// Color of the node holding `item`.
    pub fn color_of(&self, item: &T) -> Option<Color> {
        self.inner.find(item).map(|i| self.inner.node(i).color)
    }

    /// Verifies links, item order and the red-black coloring rules.
    pub fn assert_valid(&self) -> Result<(), String> {
        self.inner.assert_ordered()?;
        assert_red_black_tree(self.inner.arena(), self.inner.root_index())
    }

    pub fn dump(&self) -> String
    where
        T: fmt::Display,
    {
        print::<T, RbNode<T>>(self.inner.arena(), self.inner.root_index())
    }
}
