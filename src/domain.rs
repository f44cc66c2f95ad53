//! Domain models for library record keeping.
//!
//! This module contains the entities (books, people and rentals), the
//! identifier they are looked up by, and the [`Repository`] that creates and
//! queries them.

mod book;
pub use book::Book;

/// Data directory configuration.
pub mod config;
pub use config::Config;

mod error;
pub use error::Error;

mod id;
pub use id::{find_by_id, Id, Identified};

mod person;
pub use person::{Person, Role};

mod rental;
pub use rental::Rental;

pub mod repository;
pub use repository::{PersonRentals, Repository, Stores};
