use serde::{Deserialize, Serialize};

use crate::domain::{Book, Id, Person};

/// A record of one person borrowing one book on a date.
///
/// A rental refers to its book and person by identifier and does not own
/// them. The date is free text and is never parsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rental {
    /// The date of the rental, as entered.
    pub date: String,
    /// Identifier of the rented book.
    #[serde(rename = "book_id")]
    pub book: Id,
    /// Identifier of the person renting the book.
    #[serde(rename = "person_id")]
    pub person: Id,
}

impl Rental {
    /// Constructs a rental from an already resolved book and person.
    pub(crate) fn new(date: impl Into<String>, book: &Book, person: &Person) -> Self {
        Self {
            date: date.into(),
            book: book.id,
            person: person.id,
        }
    }
}
