//! End-to-end behaviour of a library opened from a data directory.

#![allow(missing_docs)]

use std::{io, path::PathBuf};

use bookkeeper::{
    storage::directory, Book, Error, Id, MemoryStore, Person, Rental, Repository, Store,
    StoreError, Stores,
};
use tempfile::TempDir;

/// A store whose saves always fail.
#[derive(Debug, Default)]
struct ReadOnlyStore;

impl<T> Store<T> for ReadOnlyStore {
    fn load(&mut self) -> Result<Vec<T>, StoreError> {
        Ok(Vec::new())
    }

    fn save(&mut self, _items: &[T]) -> Result<(), StoreError> {
        Err(StoreError::Io {
            path: PathBuf::from("read-only"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "read-only store"),
        })
    }
}

#[test]
fn rental_scenario_persists_across_runs() {
    let tmp = TempDir::new().unwrap();

    {
        let mut library = directory::open(tmp.path()).unwrap();
        library
            .create_person(false, Id::new(1), 20, "Alice".to_string(), None)
            .unwrap();
        library
            .create_book(Id::new(1), "Dune".to_string(), "Herbert".to_string())
            .unwrap();
        library
            .create_rental(Id::new(1), Id::new(1), "2024-01-01".to_string())
            .unwrap();
    }

    let library = directory::open(tmp.path()).unwrap();
    assert_eq!(library.rentals().len(), 1);

    let rental = &library.rentals()[0];
    assert_eq!(rental.date, "2024-01-01");
    assert_eq!(library.find_book(rental.book).unwrap().title, "Dune");
    assert_eq!(library.find_person(rental.person).unwrap().name, "Alice");

    assert_eq!(
        library
            .list_rentals_for_person(Id::new(1))
            .unwrap()
            .to_string(),
        "Rentals for Alice:\n1. Book: ID: 1, Title: Dune, Author: Herbert, Date: 2024-01-01"
    );
}

#[test]
fn unknown_person_leaves_rentals_file_untouched() {
    let tmp = TempDir::new().unwrap();
    let mut library = directory::open(tmp.path()).unwrap();
    library
        .create_book(Id::new(1), "Dune".to_string(), "Herbert".to_string())
        .unwrap();

    let error = library
        .create_rental(Id::new(99), Id::new(1), "2024-01-01".to_string())
        .unwrap_err();

    assert_eq!(error.to_string(), "Person or book not found.");
    assert!(library.rentals().is_empty());
    assert!(!tmp.path().join("rentals.json").exists());
}

#[test]
fn data_files_use_the_documented_shape() {
    let tmp = TempDir::new().unwrap();
    let mut library = directory::open(tmp.path()).unwrap();
    library
        .create_person(true, Id::new(2), 48, "Grace".to_string(), None)
        .unwrap();
    library
        .create_book(Id::new(5), "Emma".to_string(), "Austen".to_string())
        .unwrap();
    library
        .create_rental(Id::new(2), Id::new(5), "yesterday".to_string())
        .unwrap();

    let read = |name: &str| -> serde_json::Value {
        serde_json::from_str(&std::fs::read_to_string(tmp.path().join(name)).unwrap()).unwrap()
    };

    assert_eq!(
        read("people.json"),
        serde_json::json!([
            {"id": 2, "age": 48, "name": "Grace", "role": "teacher", "specialization": null}
        ])
    );
    assert_eq!(
        read("books.json"),
        serde_json::json!([{"id": 5, "title": "Emma", "author": "Austen"}])
    );
    assert_eq!(
        read("rentals.json"),
        serde_json::json!([{"date": "yesterday", "book_id": 5, "person_id": 2}])
    );
}

#[test]
fn failed_save_does_not_keep_the_entity() {
    let mut library = Repository::open(Stores {
        books: ReadOnlyStore,
        people: MemoryStore::<Person>::default(),
        rentals: ReadOnlyStore,
    })
    .unwrap();

    let error = library
        .create_book(Id::new(1), "Dune".to_string(), "Herbert".to_string())
        .unwrap_err();
    assert!(matches!(error, Error::Store(_)));
    assert!(!error.is_not_found());
    assert!(library.books().is_empty());

    library
        .create_person(false, Id::new(1), 20, "Alice".to_string(), None)
        .unwrap();
    assert_eq!(library.people().len(), 1);
}

#[test]
fn failed_rental_save_does_not_keep_the_rental() {
    let mut library = Repository::open(Stores {
        books: MemoryStore::with_items(vec![Book::new(Id::new(1), "Dune", "Herbert")]),
        people: MemoryStore::with_items(vec![Person::student(Id::new(1), 20, "Alice")]),
        rentals: ReadOnlyStore,
    })
    .unwrap();

    let error = library
        .create_rental(Id::new(1), Id::new(1), "2024-01-01".to_string())
        .unwrap_err();

    assert!(matches!(error, Error::Store(StoreError::Io { .. })));
    assert_eq!(library.rentals(), &[] as &[Rental]);
}
