use std::{fmt, num::ParseIntError, str::FromStr};

use serde::{Deserialize, Serialize};

/// A caller-assigned identifier for a book or a person.
///
/// Identifiers are not required to be unique. Lookups resolve to the first
/// entity carrying a matching identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Id(u64);

impl Id {
    /// Creates an identifier from its numeric value.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Id {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Self)
    }
}

/// An entity that can be looked up by [`Id`].
pub trait Identified {
    /// The identifier of this entity.
    fn id(&self) -> Id;
}

/// Returns the first entity in `collection` whose identifier equals `id`.
///
/// Collections are scanned in insertion order, so duplicate identifiers
/// resolve to the earliest entry.
pub fn find_by_id<T: Identified>(collection: &[T], id: Id) -> Option<&T> {
    collection.iter().find(|item| item.id() == id)
}
