//! Error types for the to-do core.

use thiserror::Error;

use crate::todo::ItemId;

/// Result type alias for collection operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Invariant violations in the item collection.
///
/// The core performs no I/O, so there is no transient-failure category:
/// every variant here is a programming error on the caller's side and is
/// surfaced instead of silently corrected.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum Error {
    /// Two items with the same id were handed to the collection.
    #[error("duplicate item id {id}")]
    DuplicateId { id: ItemId },

    /// An edit referenced an id the collection does not hold.
    #[error("no item with id {id}")]
    ItemNotFound { id: ItemId },
}
