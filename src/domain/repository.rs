//! The in-memory record of people, books and rentals.
//!
//! The [`Repository`] knows nothing about files. It loads its collections from
//! three injected [`Store`]s when it is opened and asks the matching store to
//! persist the whole collection after every successful creation.

use std::fmt;

use tracing::instrument;

use crate::{
    domain::{find_by_id, Book, Error, Id, Person, Rental},
    storage::{Store, StoreError},
};

/// The persistence collaborators of a [`Repository`], one per collection.
#[derive(Debug, Default)]
pub struct Stores<B, P, R> {
    /// Store for the book catalogue.
    pub books: B,
    /// Store for people.
    pub people: P,
    /// Store for rental records.
    pub rentals: R,
}

/// Holds people, books and rentals in insertion order.
///
/// Mutation is append-only. Each operation either appends and persists, or
/// leaves every collection unchanged.
#[derive(Debug)]
pub struct Repository<B, P, R> {
    people: Vec<Person>,
    books: Vec<Book>,
    rentals: Vec<Rental>,
    stores: Stores<B, P, R>,
}

impl<B, P, R> Repository<B, P, R>
where
    B: Store<Book>,
    P: Store<Person>,
    R: Store<Rental>,
{
    /// Opens a repository, loading each collection from its store.
    ///
    /// # Errors
    ///
    /// Returns an error if any of the stores fails to load.
    pub fn open(mut stores: Stores<B, P, R>) -> Result<Self, StoreError> {
        let books = stores.books.load()?;
        let rentals = stores.rentals.load()?;
        let people = stores.people.load()?;

        tracing::debug!(
            books = books.len(),
            people = people.len(),
            rentals = rentals.len(),
            "loaded collections"
        );

        Ok(Self {
            people,
            books,
            rentals,
            stores,
        })
    }

    /// Creates a student or teacher and persists the people collection.
    ///
    /// `specialization` is only kept when `is_teacher` is set.
    ///
    /// # Errors
    ///
    /// Returns an error if the people collection cannot be saved, in which
    /// case the person is not added.
    #[instrument(level = "debug", skip(self))]
    pub fn create_person(
        &mut self,
        is_teacher: bool,
        id: Id,
        age: u32,
        name: String,
        specialization: Option<String>,
    ) -> Result<&Person, Error> {
        let person = Person::new(is_teacher, id, age, name, specialization);
        let person = append(&mut self.people, &mut self.stores.people, person)?;
        tracing::info!(%id, role = person.role.label(), "person created");
        Ok(person)
    }

    /// Creates a book and persists the book catalogue.
    ///
    /// # Errors
    ///
    /// Returns an error if the catalogue cannot be saved, in which case the
    /// book is not added.
    #[instrument(level = "debug", skip(self))]
    pub fn create_book(&mut self, id: Id, title: String, author: String) -> Result<&Book, Error> {
        let book = Book::new(id, title, author);
        let book = append(&mut self.books, &mut self.stores.books, book)?;
        tracing::info!(%id, "book created");
        Ok(book)
    }

    /// Records that the person `person_id` rented the book `book_id` on
    /// `date`, then persists the rental records.
    ///
    /// # Errors
    ///
    /// - [`Error::PersonOrBookNotFound`] if either identifier does not
    ///   resolve. Nothing is recorded or saved.
    /// - [`Error::Store`] if the rental records cannot be saved, in which case
    ///   the rental is not added.
    #[instrument(level = "debug", skip(self))]
    pub fn create_rental(
        &mut self,
        person_id: Id,
        book_id: Id,
        date: String,
    ) -> Result<&Rental, Error> {
        let person = find_by_id(&self.people, person_id);
        let book = find_by_id(&self.books, book_id);

        let (Some(person), Some(book)) = (person, book) else {
            tracing::debug!(%person_id, %book_id, "rental not created");
            return Err(Error::PersonOrBookNotFound {
                person: person_id,
                book: book_id,
            });
        };

        let rental = Rental::new(date, book, person);
        let rental = append(&mut self.rentals, &mut self.stores.rentals, rental)?;
        tracing::info!(%person_id, %book_id, "rental created");
        Ok(rental)
    }
}

impl<B, P, R> Repository<B, P, R> {
    /// All people, in insertion order.
    #[must_use]
    pub fn people(&self) -> &[Person] {
        &self.people
    }

    /// All books, in insertion order.
    #[must_use]
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    /// All rentals, in insertion order.
    #[must_use]
    pub fn rentals(&self) -> &[Rental] {
        &self.rentals
    }

    /// An owned copy of the book catalogue.
    #[must_use]
    pub fn list_books(&self) -> Vec<Book> {
        self.books.clone()
    }

    /// The book catalogue as numbered lines, starting at 1.
    #[must_use]
    pub fn list_all_books(&self) -> Vec<String> {
        numbered(&self.books)
    }

    /// All people as numbered lines, starting at 1.
    #[must_use]
    pub fn list_all_people(&self) -> Vec<String> {
        numbered(&self.people)
    }

    /// Returns the first person with the given identifier.
    #[must_use]
    pub fn find_person(&self, id: Id) -> Option<&Person> {
        find_by_id(&self.people, id)
    }

    /// Returns the first book with the given identifier.
    #[must_use]
    pub fn find_book(&self, id: Id) -> Option<&Book> {
        find_by_id(&self.books, id)
    }

    /// The rentals of the person `person_id`, in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PersonNotFound`] if no person has this identifier.
    pub fn list_rentals_for_person(&self, person_id: Id) -> Result<PersonRentals<'_>, Error> {
        let person = self
            .find_person(person_id)
            .ok_or(Error::PersonNotFound(person_id))?;

        let rentals = self
            .rentals
            .iter()
            .filter(|rental| rental.person == person.id)
            .collect();

        Ok(PersonRentals {
            person,
            rentals,
            books: &self.books,
        })
    }

    /// Checks a pair of 1-based selectors against the number of people and
    /// books.
    ///
    /// Only the counts are consulted, not identifiers.
    #[must_use]
    pub fn valid_numbers(&self, person_number: i64, book_number: i64) -> bool {
        in_range(person_number, self.people.len()) && in_range(book_number, self.books.len())
    }

    /// The person at the 1-based position `number`.
    #[must_use]
    pub fn person_at(&self, number: usize) -> Option<&Person> {
        number.checked_sub(1).and_then(|index| self.people.get(index))
    }

    /// The book at the 1-based position `number`.
    #[must_use]
    pub fn book_at(&self, number: usize) -> Option<&Book> {
        number.checked_sub(1).and_then(|index| self.books.get(index))
    }

    /// The persistence collaborators backing this repository.
    #[must_use]
    pub const fn stores(&self) -> &Stores<B, P, R> {
        &self.stores
    }
}

/// The rentals of a single person.
///
/// Displays as the listing shown to users: either a "no rentals" notice or a
/// header followed by numbered rental lines.
#[derive(Debug, Clone)]
pub struct PersonRentals<'a> {
    person: &'a Person,
    rentals: Vec<&'a Rental>,
    books: &'a [Book],
}

impl<'a> PersonRentals<'a> {
    /// The person the rentals belong to.
    #[must_use]
    pub const fn person(&self) -> &'a Person {
        self.person
    }

    /// The matching rentals, in insertion order.
    #[must_use]
    pub fn rentals(&self) -> &[&'a Rental] {
        &self.rentals
    }

    /// Whether the person has no rentals.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rentals.is_empty()
    }

    /// The book of a rental, if it still resolves.
    #[must_use]
    pub fn book_of(&self, rental: &Rental) -> Option<&'a Book> {
        find_by_id(self.books, rental.book)
    }
}

impl fmt::Display for PersonRentals<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.rentals.is_empty() {
            return write!(f, "No rentals for {}.", self.person.name);
        }

        write!(f, "Rentals for {}:", self.person.name)?;
        for (index, rental) in self.rentals.iter().enumerate() {
            write!(f, "\n{}. Book: ", index + 1)?;
            match self.book_of(rental) {
                Some(book) => write!(f, "{book}")?,
                None => write!(f, "unknown book {}", rental.book)?,
            }
            write!(f, ", Date: {}", rental.date)?;
        }
        Ok(())
    }
}

/// Appends `item` and persists the whole collection, removing the item again
/// if the save fails.
fn append<'a, T, S: Store<T>>(
    items: &'a mut Vec<T>,
    store: &mut S,
    item: T,
) -> Result<&'a T, StoreError> {
    let index = items.len();
    items.push(item);

    if let Err(e) = store.save(items) {
        items.truncate(index);
        return Err(e);
    }

    Ok(&items[index])
}

fn numbered<T: fmt::Display>(items: &[T]) -> Vec<String> {
    items
        .iter()
        .enumerate()
        .map(|(index, item)| format!("{}. {item}", index + 1))
        .collect()
}

fn in_range(number: i64, count: usize) -> bool {
    usize::try_from(number).is_ok_and(|number| (1..=count).contains(&number))
}
