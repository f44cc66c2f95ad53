use std::path::Path;

use serde::{Deserialize, Serialize};

/// The name of the configuration file inside the data directory.
pub const CONFIG_FILE: &str = "bookkeeper.toml";

/// Configuration for a library data directory.
///
/// This struct holds the names of the files each collection is persisted to,
/// relative to the data directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Versions", into = "Versions")]
pub struct Config {
    /// File holding the book catalogue.
    books: String,

    /// File holding people (students and teachers).
    people: String,

    /// File holding rental records.
    rentals: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            books: default_books_file(),
            people: default_people_file(),
            rentals: default_rentals_file(),
        }
    }
}

impl Config {
    /// Loads the configuration from a TOML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or if the TOML content is
    /// invalid.
    pub fn load(path: &Path) -> Result<Self, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config file: {e}"))?;
        toml::from_str(&content).map_err(|e| format!("Failed to parse config file: {e}"))
    }

    /// Saves the configuration to a TOML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be serialized to TOML or if
    /// the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), String> {
        let content =
            toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize config: {e}"))?;
        std::fs::write(path, content).map_err(|e| format!("Failed to write config file: {e}"))
    }

    /// The file name of the book catalogue.
    #[must_use]
    pub fn books_file(&self) -> &str {
        &self.books
    }

    /// The file name of the people collection.
    #[must_use]
    pub fn people_file(&self) -> &str {
        &self.people
    }

    /// The file name of the rental records.
    #[must_use]
    pub fn rentals_file(&self) -> &str {
        &self.rentals
    }
}

fn default_books_file() -> String {
    "books.json".to_string()
}

fn default_people_file() -> String {
    "people.json".to_string()
}

fn default_rentals_file() -> String {
    "rentals.json".to_string()
}

/// The serialized versions of the configuration.
/// This allows the file format to change without breaking existing data
/// directories.
#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "_version")]
enum Versions {
    #[serde(rename = "1")]
    V1 {
        #[serde(default = "default_books_file")]
        books: String,

        #[serde(default = "default_people_file")]
        people: String,

        #[serde(default = "default_rentals_file")]
        rentals: String,
    },
}

impl From<Versions> for Config {
    fn from(versions: Versions) -> Self {
        match versions {
            Versions::V1 {
                books,
                people,
                rentals,
            } => Self {
                books,
                people,
                rentals,
            },
        }
    }
}

impl From<Config> for Versions {
    fn from(config: Config) -> Self {
        Self::V1 {
            books: config.books,
            people: config.people,
            rentals: config.rentals,
        }
    }
}
