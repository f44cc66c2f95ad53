//! Plain-text library record keeping
//!
//! People, books and rentals are kept in memory and persisted as flat files
//! in a data directory.

pub mod domain;
pub use domain::{Book, Config, Error, Id, Person, PersonRentals, Rental, Repository, Role, Stores};

/// Persistence of collections, on the filesystem or in memory.
pub mod storage;
pub use storage::{JsonRepository, JsonStore, MemoryStore, Store, StoreError};
