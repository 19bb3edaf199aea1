//! Sequential linked containers.
//!
//! Two list flavours share one error type and the [`SequenceBuffer`]
//! contract used by ordered trees to materialize traversals:
//!
//! | Module | Contents |
//! |--------|----------|
//! [`doubly`] | [`DoublyLinkedList`]: arena-backed, `u32` links in both directions |
//! [`singly`] | [`SinglyLinkedList`]: owned `Box` chain |
//! [`types`] | [`SequenceBuffer`] append-only contract |
//! [`error`] | [`ListError`] |
//!
//! Like the tree crates in this workspace, the doubly linked list keeps its
//! nodes in a `Vec` and addresses them by index; unlinking a node compacts
//! the arena with `swap_remove`, so no slot is ever leaked.

pub mod doubly;
pub mod error;
pub mod singly;
pub mod types;

pub use doubly::DoublyLinkedList;
pub use error::ListError;
pub use singly::SinglyLinkedList;
pub use types::SequenceBuffer;
