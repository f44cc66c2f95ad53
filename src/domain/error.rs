use thiserror::Error;

use crate::{domain::Id, storage::StoreError};

/// Errors returned by [`Repository`](crate::Repository) operations.
///
/// Every error leaves the repository unchanged.
#[derive(Debug, Error)]
pub enum Error {
    /// No person carries the requested identifier.
    #[error("Person not found.")]
    PersonNotFound(Id),

    /// The person or the book of a rental could not be resolved.
    #[error("Person or book not found.")]
    PersonOrBookNotFound {
        /// The requested person identifier.
        person: Id,
        /// The requested book identifier.
        book: Id,
    },

    /// The collection could not be persisted.
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl Error {
    /// Whether this error is a failed lookup rather than a storage failure.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::PersonNotFound(_) | Self::PersonOrBookNotFound { .. }
        )
    }
}
