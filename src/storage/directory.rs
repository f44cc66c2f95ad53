//! A filesystem backed library
//!
//! [`open`] wires one [`JsonStore`] per collection, rooted at a data
//! directory, into a filesystem agnostic [`Repository`].

use std::path::{Path, PathBuf};

use crate::{
    domain::{config::CONFIG_FILE, Book, Config, Person, Rental},
    storage::{JsonStore, StoreError},
    Repository, Stores,
};

/// A [`Repository`] persisted as JSON files in a data directory.
pub type JsonRepository = Repository<JsonStore<Book>, JsonStore<Person>, JsonStore<Rental>>;

/// Opens the library stored in `root`.
///
/// File names are taken from the configuration file in `root`, falling back
/// to the defaults if it is missing or invalid. Collections whose files do
/// not exist yet start empty.
///
/// # Errors
///
/// Returns an error if an existing data file cannot be read or parsed.
pub fn open(root: &Path) -> Result<JsonRepository, StoreError> {
    let config = load_config(root);
    tracing::debug!("Opening library at {}", root.display());
    Repository::open(stores(root, &config))
}

/// Builds the JSON stores for a data directory and configuration.
#[must_use]
pub fn stores(
    root: &Path,
    config: &Config,
) -> Stores<JsonStore<Book>, JsonStore<Person>, JsonStore<Rental>> {
    Stores {
        books: JsonStore::new(root.join(config.books_file())),
        people: JsonStore::new(root.join(config.people_file())),
        rentals: JsonStore::new(root.join(config.rentals_file())),
    }
}

/// The path of the configuration file for a data directory.
#[must_use]
pub fn config_path(root: &Path) -> PathBuf {
    root.join(CONFIG_FILE)
}

/// Loads the configuration of a data directory.
///
/// A missing or unreadable configuration yields [`Config::default`].
#[must_use]
pub fn load_config(root: &Path) -> Config {
    Config::load(&config_path(root)).unwrap_or_else(|e| {
        tracing::debug!("Failed to load config: {e}");
        Config::default()
    })
}
