use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::{Id, Identified};

/// A book in the library catalogue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    /// Caller-assigned identifier.
    pub id: Id,
    /// The title of the book.
    pub title: String,
    /// The author of the book.
    pub author: String,
}

impl Book {
    /// Constructs a book from its fields. No validation is performed.
    #[must_use]
    pub fn new(id: Id, title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            author: author.into(),
        }
    }
}

impl Identified for Book {
    fn id(&self) -> Id {
        self.id
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ID: {}, Title: {}, Author: {}",
            self.id, self.title, self.author
        )
    }
}
