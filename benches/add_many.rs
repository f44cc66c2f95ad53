//! This bench test measures recording many rentals against an in-memory
//! library and a library backed by JSON files.

#![allow(missing_docs)]

use bookkeeper::{storage::directory, Book, Id, MemoryStore, Person, Rental, Repository, Stores};
use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use tempfile::TempDir;

const RECORDS: u64 = 200;

fn add_many_in_memory(c: &mut Criterion) {
    c.bench_function("add many (memory)", |b| {
        b.iter(|| {
            let stores: Stores<MemoryStore<Book>, MemoryStore<Person>, MemoryStore<Rental>> =
                Stores::default();
            let mut library = Repository::open(stores).unwrap();
            for i in 1..=RECORDS {
                library
                    .create_person(i % 2 == 0, Id::new(i), 30, format!("Person {i}"), None)
                    .unwrap();
                library
                    .create_book(Id::new(i), format!("Book {i}"), "Anon".to_string())
                    .unwrap();
                library
                    .create_rental(Id::new(i), Id::new(i), "2024-01-01".to_string())
                    .unwrap();
            }
        });
    });
}

fn add_many_on_disk(c: &mut Criterion) {
    c.bench_function("add many (json)", |b| {
        b.iter_batched(
            || TempDir::new().unwrap(),
            |tmp_dir| {
                let mut library = directory::open(tmp_dir.path()).unwrap();
                for i in 1..=RECORDS {
                    library
                        .create_book(Id::new(i), format!("Book {i}"), "Anon".to_string())
                        .unwrap();
                }
            },
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(benches, add_many_in_memory, add_many_on_disk);
criterion_main!(benches);
