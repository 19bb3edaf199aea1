//! AVL tree.

pub mod avl_tree;
pub mod types;
pub mod util;

pub use avl_tree::AvlTree;
pub use types::{AvlNode, AvlNodeLike};
pub use util::{assert_avl_tree, AvlOps};
