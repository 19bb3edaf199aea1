//! Generic ordered-set core the concrete trees are built from.

pub mod set;
mod wrapper;

pub use set::{ForestSet, Iter, SetTreeOps};
pub(crate) use wrapper::forest_set_wrapper;
