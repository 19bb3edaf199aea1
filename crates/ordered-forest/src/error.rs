use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum TreeError {
    #[error("item is already present in the tree")]
    DuplicateItem,
    #[error("item is not present in the tree")]
    ItemNotFound,
    #[error("tree is empty")]
    EmptyCollectionAccess,
}
