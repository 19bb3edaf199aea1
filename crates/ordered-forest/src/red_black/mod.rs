//! Red-black tree.

pub mod rb_tree;
pub mod types;
pub mod util;

pub use rb_tree::RbTree;
pub use types::{Color, RbNode, RbNodeLike};
pub use util::{assert_red_black_tree, RbOps};
