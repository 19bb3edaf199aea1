//! Arena-based binary search trees behind one ordered-set contract.
//!
//! Every tree owns its nodes in a `Vec` and links them with `Option<u32>`
//! indices (`p` / `l` / `r`). Removing an item compacts the arena, so a tree
//! always holds exactly one node per item.
//!
//! # Module layout
//!
//! | Module | Contents |
//! |--------|----------|
//! [`types`] | [`Node`], [`ItemNode`], [`OrderedSet`], [`Traversal`] |
//! [`util`] | Navigation, rotations, splicing, compaction, iterative walk, rendering |
//! [`data_types`] | [`ForestSet`], the shared set core, and its [`SetTreeOps`] strategy seam |
//! [`bst`] | [`Bst`], no balancing |
//! [`avl`] | [`AvlTree`], height-cached AVL balancing |
//! [`red_black`] | [`RbTree`], red-black balancing |
//! [`error`] | [`TreeError`] |

pub mod avl;
pub mod bst;
pub mod data_types;
pub mod error;
pub mod red_black;
pub mod types;
pub mod util;

pub use avl::AvlTree;
pub use bst::Bst;
pub use data_types::{ForestSet, SetTreeOps};
pub use error::TreeError;
pub use linked_seq::{DoublyLinkedList, SequenceBuffer};
pub use red_black::{Color, RbTree};
pub use types::{DefaultComparator, ItemNode, Node, OrderedSet, Traversal};
