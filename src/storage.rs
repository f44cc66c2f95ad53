use std::{io, path::PathBuf};

pub mod directory;
mod json;
mod memory;

pub use directory::JsonRepository;
pub use json::JsonStore;
pub use memory::MemoryStore;

/// Durable storage for one collection.
///
/// A store loads the full collection once and overwrites its whole persisted
/// representation on every save. There is no incremental update.
pub trait Store<T> {
    /// Loads the full collection.
    ///
    /// Returns an empty collection when nothing has been persisted yet.
    ///
    /// # Errors
    ///
    /// Returns an error if persisted data exists but cannot be read.
    fn load(&mut self) -> Result<Vec<T>, StoreError>;

    /// Replaces the persisted collection with `items`.
    ///
    /// # Errors
    ///
    /// Returns an error if the collection cannot be written.
    fn save(&mut self, items: &[T]) -> Result<(), StoreError>;
}

/// Errors that can occur when loading or saving a collection.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The backing file could not be read or written.
    #[error("failed to access {}", path.display())]
    Io {
        /// The file being accessed.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: io::Error,
    },

    /// The backing file does not contain a valid collection.
    #[error("invalid data in {}", path.display())]
    Json {
        /// The file being parsed or written.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: serde_json::Error,
    },
}
