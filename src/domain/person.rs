use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::{Id, Identified};

/// The role a person holds in the library.
///
/// This is a closed set. The role only affects the extra field a teacher
/// carries and the label shown when listing people.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "role", rename_all = "lowercase")]
pub enum Role {
    /// A student. Carries no extra attributes.
    Student,
    /// A teacher, optionally with a subject specialization.
    Teacher {
        /// The teacher's specialization, if known.
        #[serde(default)]
        specialization: Option<String>,
    },
}

impl Role {
    /// The display label for this role.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Student => "Student",
            Self::Teacher { .. } => "Teacher",
        }
    }

    /// Whether this role is [`Role::Teacher`].
    #[must_use]
    pub const fn is_teacher(&self) -> bool {
        matches!(self, Self::Teacher { .. })
    }
}

/// A library member who can rent books.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    /// Caller-assigned identifier.
    pub id: Id,
    /// Age in years. Not validated.
    pub age: u32,
    /// Display name.
    pub name: String,
    /// Student or teacher.
    #[serde(flatten)]
    pub role: Role,
}

impl Person {
    /// Builds a person, choosing the role from `is_teacher`.
    ///
    /// `specialization` is only kept for teachers; it is discarded for
    /// students.
    #[must_use]
    pub fn new(
        is_teacher: bool,
        id: Id,
        age: u32,
        name: impl Into<String>,
        specialization: Option<String>,
    ) -> Self {
        if is_teacher {
            Self::teacher(id, age, specialization, name)
        } else {
            Self::student(id, age, name)
        }
    }

    /// Builds a student.
    #[must_use]
    pub fn student(id: Id, age: u32, name: impl Into<String>) -> Self {
        Self {
            id,
            age,
            name: name.into(),
            role: Role::Student,
        }
    }

    /// Builds a teacher.
    #[must_use]
    pub fn teacher(
        id: Id,
        age: u32,
        specialization: Option<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            id,
            age,
            name: name.into(),
            role: Role::Teacher { specialization },
        }
    }

    /// The teacher's specialization, or `None` for students and teachers
    /// without one.
    #[must_use]
    pub fn specialization(&self) -> Option<&str> {
        match &self.role {
            Role::Teacher { specialization } => specialization.as_deref(),
            Role::Student => None,
        }
    }
}

impl Identified for Person {
    fn id(&self) -> Id {
        self.id
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ID: {}, Name: {}, Age: {}, Role: {}",
            self.id,
            self.name,
            self.age,
            self.role.label()
        )
    }
}
